//! keycalc: keypad calculator
//!
//! ## Usage
//!
//! ```bash
//! keycalc tui                        # Interactive terminal calculator
//! keycalc keys "7+2+1="              # Replay keys, print display and history
//! keycalc keys --json --steps "6/3="  # Machine-readable replay
//! ```

use clap::Parser;
use keycalc_cli::{
    init_logging,
    runner::{run_keys, run_tui},
    Cli, CliConfig, CliResult, ColorChoice, Commands,
};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);

    // Interactive sessions own the terminal; log only to a file.
    let interactive = matches!(cli.command, Commands::Tui(_));
    if !interactive || config.log_file.is_some() {
        init_logging(&config.log_config())?;
    }
    debug!(?config, "configuration resolved");

    match cli.command {
        Commands::Tui(args) => run_tui(&config, &args),
        Commands::Keys(args) => run_keys(&config, &args),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let color: ColorChoice = cli.color.clone().into();

    CliConfig::new()
        .with_verbosity(cli.quiet, cli.verbose)
        .with_color(color)
        .with_precision(cli.precision)
        .with_log_format(cli.log_format.into())
        .with_log_file(cli.log_file.clone())
}
