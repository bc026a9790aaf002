//! keycalc CLI library
//!
//! Argument parsing, configuration, logging setup and subcommand runners
//! for the `keycalc` binary.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

mod commands;
mod config;
mod error;
pub mod logging;
pub mod runner;

pub use commands::{Cli, ColorArg, Commands, KeysArgs, LogFormatArg, TuiArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use logging::{init_logging, LogConfig, LogFormat};
pub use runner::{parse_sequence, render_json, render_text, replay, KeyReplay, ReplayStep};
