//! Badge generation handler

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::Reporter;
use covbadge::{BadgeGenerator, GeneratedBadge};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Execute the badge generation for `base_dir`
///
/// The coverage percentage goes to `stdout`; status lines go to stderr.
pub fn execute_generate<W: Write>(
    config: &CliConfig,
    base_dir: &Path,
    stdout: &mut W,
) -> CliResult<GeneratedBadge> {
    validate_base_dir(base_dir)?;

    let generator = BadgeGenerator::new();
    debug!(config = ?generator.config(), "generator configuration");

    let badge = generator.generate(base_dir, stdout)?;
    stdout.flush()?;

    let reporter = Reporter::new(config.color.should_color(), config.verbosity.is_quiet());
    reporter.success(&format!(
        "Badge written to {} ({})",
        badge.output_path.display(),
        badge.color
    ));
    if config.verbosity.is_verbose() {
        reporter.info(&badge.url);
    }

    Ok(badge)
}

/// `base_dir` must be an existing directory
pub fn validate_base_dir(base_dir: &Path) -> CliResult<()> {
    if base_dir.as_os_str().is_empty() {
        return Err(CliError::invalid_argument("base directory must not be empty"));
    }
    if base_dir.exists() && !base_dir.is_dir() {
        return Err(CliError::invalid_argument(format!(
            "{} is not a directory",
            base_dir.display()
        )));
    }
    Ok(())
}
