//! Command-line front end: writes one log line to standard error.
//!
//! Settings come from the config file first, then the flags override them.

use crate::config::Config;
use crate::level::{Level, Severity};
use crate::logger::{Logger, LoggerBuilder};
use crate::sink::Sink;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Threshold for CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LevelArg {
    Error,
    Warning,
    Info,
    Debug,
}

impl From<LevelArg> for Level {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Error => Self::Error,
            LevelArg::Warning => Self::Warning,
            LevelArg::Info => Self::Info,
            LevelArg::Debug => Self::Debug,
        }
    }
}

/// Message severity for CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SeverityArg {
    Panic,
    Fatal,
    Error,
    Warning,
    Info,
    Debug,
}

impl From<SeverityArg> for Severity {
    fn from(severity: SeverityArg) -> Self {
        match severity {
            SeverityArg::Panic => Self::Panic,
            SeverityArg::Fatal => Self::Fatal,
            SeverityArg::Error => Self::Error,
            SeverityArg::Warning => Self::Warning,
            SeverityArg::Info => Self::Info,
            SeverityArg::Debug => Self::Debug,
        }
    }
}

/// glogger - write a leveled, sequenced log line to standard error.
#[derive(Debug, Parser)]
#[command(name = "glogger", version, about = "Write a leveled log line to standard error")]
pub struct Cli {
    /// Verbosity threshold (overrides the config file)
    #[arg(short, long, value_enum)]
    pub level: Option<LevelArg>,
    /// Prefix shown in brackets (overrides the config file)
    #[arg(short, long)]
    pub prefix: Option<String>,
    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,
    /// Config file (defaults to the platform config directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Message severity
    #[arg(value_enum)]
    pub severity: SeverityArg,
    /// Message words, joined by spaces
    #[arg(required = true)]
    pub message: Vec<String>,
}

impl Cli {
    /// Loads the config the flags point at, falling back to the default location.
    ///
    /// # Errors
    /// Unreadable or invalid config.
    pub fn load_config(&self) -> Result<Config, crate::Error> {
        self.config
            .as_deref()
            .map_or_else(Config::load, Config::load_from)
    }

    /// # Errors
    /// Config settings that don't parse.
    pub fn build_logger(&self, config: &Config) -> Result<Logger, crate::Error> {
        let mut builder = LoggerBuilder::from_config(config)?.sink(Sink::stderr());
        if let Some(level) = self.level {
            builder = builder.level(level.into());
        }
        if let Some(prefix) = &self.prefix {
            builder = builder.prefix(prefix.clone());
        }
        if self.no_color {
            builder = builder.colors(false);
        }
        Ok(builder.build())
    }
}

/// Parses `std::env::args`, logs the message, and reports the outcome as an exit code.
///
/// Fatal messages exit with status 1 from inside the logger; panic messages unwind.
#[must_use]
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let logger = match cli.build_logger(&config) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Invalid config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let operands: Vec<&dyn std::fmt::Display> = cli
        .message
        .iter()
        .map(|word| word as &dyn std::fmt::Display)
        .collect();

    match Severity::from(cli.severity) {
        Severity::Panic => logger.panicln(&operands),
        Severity::Fatal => logger.fatalln(&operands),
        Severity::Error => logger.errorln(&operands),
        Severity::Warning => logger.warnln(&operands),
        Severity::Info => logger.infoln(&operands),
        Severity::Debug => logger.debugln(&operands),
    }

    ExitCode::SUCCESS
}
