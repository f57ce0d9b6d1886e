//! Badge generation pipeline
//!
//! ```text
//! <base>/kcov-merged/coverage.json ──► CoverageReport ──► ColorTier ──► BadgeUrl
//!                                                                         │
//! <base>/coverage-badge.html ◄──────────────── RedirectPage ◄─────────────┘
//! ```

use crate::badge::{BadgeUrl, DEFAULT_LABEL, DEFAULT_LINK, SHIELDS_BASE_URL};
use crate::error::{BadgeError, BadgeResult};
use crate::page::RedirectPage;
use crate::report::CoverageReport;
use crate::tier::TierTable;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Report location relative to the base directory
pub const DEFAULT_REPORT_PATH: &str = "kcov-merged/coverage.json";

/// Output file name relative to the base directory
pub const DEFAULT_OUTPUT_FILE: &str = "coverage-badge.html";

/// Paths and badge parameters used by [`BadgeGenerator`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Coverage report, relative to the base directory
    pub report_path: PathBuf,
    /// Redirect page, relative to the base directory
    pub output_file: PathBuf,
    /// Badge endpoint
    pub badge_base_url: String,
    /// Badge label
    pub label: String,
    /// Link attached to the badge
    pub link: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            badge_base_url: SHIELDS_BASE_URL.to_string(),
            label: DEFAULT_LABEL.to_string(),
            link: DEFAULT_LINK.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set report path
    #[must_use]
    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = path.into();
        self
    }

    /// Set output file
    #[must_use]
    pub fn with_output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = path.into();
        self
    }

    /// Set badge endpoint
    #[must_use]
    pub fn with_badge_base_url(mut self, url: impl Into<String>) -> Self {
        self.badge_base_url = url.into();
        self
    }

    /// Set badge label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set badge link
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedBadge {
    /// Coverage percentage as read from the report
    pub percent: f64,
    /// Selected tier color
    pub color: String,
    /// Badge URL embedded in the page
    pub url: String,
    /// Page that was written
    pub output_path: PathBuf,
}

/// Turns a coverage report into a badge redirect page
#[derive(Debug, Clone, Default)]
pub struct BadgeGenerator {
    config: GeneratorConfig,
    tiers: TierTable,
}

impl BadgeGenerator {
    /// Generator with the default paths and tier table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom configuration
    #[must_use]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom tier table
    #[must_use]
    pub fn with_tiers(mut self, tiers: TierTable) -> Self {
        self.tiers = tiers;
        self
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Report location under `base_dir`
    #[must_use]
    pub fn report_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.config.report_path)
    }

    /// Output location under `base_dir`
    #[must_use]
    pub fn output_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.config.output_file)
    }

    /// Read the coverage report under `base_dir`
    pub fn load_report(&self, base_dir: &Path) -> BadgeResult<CoverageReport> {
        let path = self.report_path(base_dir);
        debug!(path = %path.display(), "reading coverage report");
        let report = CoverageReport::load(&path)?;
        debug!(percent = report.percent_covered, "parsed coverage report");
        Ok(report)
    }

    /// Pick the tier and build the badge URL for `report`
    pub fn render(&self, report: &CoverageReport) -> BadgeResult<(BadgeUrl, RedirectPage)> {
        let percent = report.percent_covered;
        if !percent.is_finite() || percent < 0.0 {
            return Err(BadgeError::Validation { percent });
        }
        if percent > 100.0 {
            warn!(percent, "coverage above 100%, rendering top tier");
        }

        let tier = self
            .tiers
            .select(percent)
            .ok_or(BadgeError::Validation { percent })?;
        debug!(threshold = tier.threshold, color = tier.color, "selected tier");

        let badge = BadgeUrl::new(percent, tier.color)
            .with_base_url(self.config.badge_base_url.as_str())
            .with_label(self.config.label.as_str())
            .with_link(self.config.link.as_str());
        let page = RedirectPage::from(&badge);
        Ok((badge, page))
    }

    /// Write `page` under `base_dir`, replacing any previous file
    pub fn write_page(&self, base_dir: &Path, page: &RedirectPage) -> BadgeResult<PathBuf> {
        let path = self.output_path(base_dir);
        std::fs::write(&path, page.render()).map_err(|e| BadgeError::file_access(&path, e))?;
        info!(path = %path.display(), "wrote badge page");
        Ok(path)
    }

    /// Run the whole pipeline
    ///
    /// The raw percentage is written to `diagnostics` as one line before
    /// the tier is chosen. Nothing is written to disk unless every earlier
    /// step succeeds.
    pub fn generate<W: Write>(
        &self,
        base_dir: &Path,
        diagnostics: &mut W,
    ) -> BadgeResult<GeneratedBadge> {
        let report = self.load_report(base_dir)?;

        writeln!(diagnostics, "{:?}", report.percent_covered)?;

        let (badge, page) = self.render(&report)?;
        let output_path = self.write_page(base_dir, &page)?;

        Ok(GeneratedBadge {
            percent: report.percent_covered,
            color: badge.color().to_string(),
            url: badge.to_string(),
            output_path,
        })
    }
}
