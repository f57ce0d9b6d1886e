//! covbadge: coverage badge redirect page generator
//!
//! ## Usage
//!
//! ```bash
//! covbadge build          # reads build/kcov-merged/coverage.json
//! covbadge -v build       # also log the badge URL
//! ```

use clap::Parser;
use covbadge_cli::{
    handlers::execute_generate, logging::init_logging, Cli, CliConfig, CliResult, ColorChoice,
    Reporter, Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = build_config(&cli);
    init_logging(&config);

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Reporter::new(config.color.should_color(), false).failure(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &CliConfig) -> CliResult<()> {
    let mut stdout = std::io::stdout().lock();
    execute_generate(config, &cli.base_dir, &mut stdout)?;
    Ok(())
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.into();
    CliConfig::new().with_verbosity(verbosity).with_color(color)
}
