//! tracing-subscriber setup

use crate::config::CliConfig;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Build the log filter: `RUST_LOG` when set, otherwise the verbosity level
#[must_use]
pub fn log_filter(config: &CliConfig) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.verbosity.log_level()).into())
        .from_env_lossy()
}

/// Install the global subscriber, writing to stderr
///
/// Calling this twice is harmless; the second install is ignored.
pub fn init_logging(config: &CliConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(config))
        .with_writer(std::io::stderr)
        .with_ansi(config.color.should_color())
        .with_target(false)
        .try_init();
}
