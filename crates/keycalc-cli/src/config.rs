//! CLI configuration

use std::path::PathBuf;

use keycalc::config::CalculatorConfig;
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - final display only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - extra output
    Verbose,
    /// Debug - maximum output
    Debug,
}

impl Verbosity {
    /// Build from the `-q` flag and `-v` count
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug)
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should stdout be colored
    #[must_use]
    pub fn should_color(self) -> bool {
        self.resolve(std::io::IsTerminal::is_terminal(&std::io::stdout()))
    }

    /// Should stderr be colored
    #[must_use]
    pub fn should_color_stderr(self) -> bool {
        self.resolve(std::io::IsTerminal::is_terminal(&std::io::stderr()))
    }

    const fn resolve(self, is_terminal: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_terminal,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Raw `-v` count, kept for trace-level logging
    pub verbose: u8,
    /// Color output choice
    pub color: ColorChoice,
    /// Decimal places results are rounded to
    pub precision: u8,
    /// Log output format
    pub log_format: LogFormat,
    /// Log file path
    pub log_file: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            verbose: 0,
            color: ColorChoice::Auto,
            precision: CalculatorConfig::default().precision,
            log_format: LogFormat::default(),
            log_file: None,
        }
    }
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity from the `-q` flag and `-v` count
    #[must_use]
    pub const fn with_verbosity(mut self, quiet: bool, verbose: u8) -> Self {
        self.verbosity = Verbosity::from_flags(quiet, verbose);
        self.verbose = verbose;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set rounding precision
    #[must_use]
    pub const fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    /// Set log format
    #[must_use]
    pub const fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    /// Set log file
    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    /// Calculator settings for the controller
    #[must_use]
    pub fn calculator_config(&self) -> CalculatorConfig {
        CalculatorConfig::new().with_precision(self.precision)
    }

    /// Logging settings; quiet mode only logs errors
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        let config = LogConfig::from_verbosity(self.verbose)
            .with_format(self.log_format)
            .with_ansi(self.color.should_color_stderr())
            .with_log_file(self.log_file.clone());
        if self.verbosity.is_quiet() {
            config.with_level(LevelFilter::ERROR)
        } else {
            config
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    mod verbosity_tests {
        use super::*;

        #[test]
        fn test_default_verbosity() {
            assert_eq!(Verbosity::default(), Verbosity::Normal);
        }

        #[test]
        fn test_from_flags() {
            assert_eq!(Verbosity::from_flags(false, 0), Verbosity::Normal);
            assert_eq!(Verbosity::from_flags(false, 1), Verbosity::Verbose);
            assert_eq!(Verbosity::from_flags(false, 4), Verbosity::Debug);
            assert_eq!(Verbosity::from_flags(true, 3), Verbosity::Quiet);
        }

        #[test]
        fn test_is_quiet_and_verbose() {
            assert!(Verbosity::Quiet.is_quiet());
            assert!(!Verbosity::Normal.is_quiet());
            assert!(!Verbosity::Normal.is_verbose());
            assert!(Verbosity::Verbose.is_verbose());
            assert!(Verbosity::Debug.is_verbose());
        }
    }

    mod color_tests {
        use super::*;

        #[test]
        fn test_always_and_never() {
            assert!(ColorChoice::Always.should_color());
            assert!(!ColorChoice::Never.should_color());
            assert!(ColorChoice::Always.should_color_stderr());
            assert!(!ColorChoice::Never.should_color_stderr());
        }

        #[test]
        fn test_auto_follows_terminal() {
            assert!(ColorChoice::Auto.resolve(true));
            assert!(!ColorChoice::Auto.resolve(false));
        }
    }

    mod cli_config_tests {
        use super::*;

        #[test]
        fn test_default_precision_matches_library() {
            let config = CliConfig::new();
            assert_eq!(config.calculator_config(), CalculatorConfig::default());
        }

        #[test]
        fn test_precision_flows_to_calculator() {
            let config = CliConfig::new().with_precision(3);
            assert_eq!(config.calculator_config().precision, 3);
        }

        #[test]
        fn test_log_config_from_verbosity() {
            let config = CliConfig::new().with_verbosity(false, 2);
            assert_eq!(config.log_config().level, LevelFilter::DEBUG);
        }

        #[test]
        fn test_quiet_logs_errors_only() {
            let config = CliConfig::new().with_verbosity(true, 2);
            assert_eq!(config.log_config().level, LevelFilter::ERROR);
        }

        #[test]
        fn test_log_file_carried() {
            let config = CliConfig::new()
                .with_log_format(LogFormat::Json)
                .with_log_file(Some(PathBuf::from("calc.log")));
            let log = config.log_config();
            assert_eq!(log.format, LogFormat::Json);
            assert_eq!(log.log_file, Some(PathBuf::from("calc.log")));
        }

        #[test]
        fn test_serialize_roundtrip() {
            let config = CliConfig::new().with_precision(4).with_color(ColorChoice::Never);
            let json = serde_json::to_string(&config).unwrap();
            let back: CliConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(back, config);
        }
    }
}
