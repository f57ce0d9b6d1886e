//! covbadge: coverage badges from merged kcov reports
//!
//! Reads `percent_covered` from `<base>/kcov-merged/coverage.json`, picks a
//! color tier, and writes `<base>/coverage-badge.html`, a meta-refresh page
//! pointing at a shields.io badge.
//!
//! ```no_run
//! use covbadge::BadgeGenerator;
//! use std::path::Path;
//!
//! let badge = BadgeGenerator::new().generate(Path::new("build"), &mut std::io::stdout())?;
//! println!("{}", badge.url);
//! # Ok::<(), covbadge::BadgeError>(())
//! ```

#![warn(missing_docs)]

pub mod badge;
mod error;
pub mod generator;
pub mod page;
pub mod report;
pub mod tier;

pub use badge::BadgeUrl;
pub use error::{BadgeError, BadgeResult};
pub use generator::{BadgeGenerator, GeneratedBadge, GeneratorConfig};
pub use page::RedirectPage;
pub use report::CoverageReport;
pub use tier::{ColorTier, TierTable};
