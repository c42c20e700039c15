//! Verbosity thresholds and message severities.
//!
//! A logger holds a [`Level`]; every call carries a [`Severity`]. Keeping them
//! apart means a logger can never be configured to a panic or fatal threshold,
//! while messages still have those two extra ranks.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so the gate can compare thresholds directly: `Error < Warning < Info < Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Only failures.
    Error = 2,
    /// Failures and anomalies.
    Warning = 3,
    /// Normal operational milestones. The default for every new logger.
    #[default]
    Info = 4,
    /// Everything, and every line carries the calling function's name.
    Debug = 5,
}

impl Level {
    /// Lowercase because config files and CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Four-letter uppercase tag rendered in the line header.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        Severity::from_level(self).tag()
    }

    /// All levels, least to most verbose.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Error, Self::Warning, Self::Info, Self::Debug]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Urgency of a single log call.
///
/// `Panic` and `Fatal` rank above every threshold: they always emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Panic = 0,
    Fatal = 1,
    Error = 2,
    Warning = 3,
    Info = 4,
    Debug = 5,
}

impl Severity {
    #[must_use]
    pub const fn from_level(level: Level) -> Self {
        match level {
            Level::Error => Self::Error,
            Level::Warning => Self::Warning,
            Level::Info => Self::Info,
            Level::Debug => Self::Debug,
        }
    }

    /// Four-letter uppercase tag rendered in the line header.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Panic => "PANI",
            Self::Fatal => "FATA",
            Self::Error => "ERRO",
            Self::Warning => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBU",
        }
    }

    /// Lowercase name, matching what the CLI accepts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Panic => "panic",
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Panic and fatal messages bypass the threshold entirely.
    #[must_use]
    pub const fn always_emits(self) -> bool {
        matches!(self, Self::Panic | Self::Fatal)
    }

    /// The level gate: a message passes iff its rank does not exceed the threshold.
    #[must_use]
    pub const fn passes(self, threshold: Level) -> bool {
        self.always_emits() || (self as u8) <= (threshold as u8)
    }
}

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        Self::from_level(level)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl From<ParseLevelError> for crate::Error {
    fn from(e: ParseLevelError) -> Self {
        Self::InvalidLevel(e.0)
    }
}

impl FromStr for Severity {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "panic" | "pani" => Ok(Self::Panic),
            "fatal" | "fata" => Ok(Self::Fatal),
            "error" | "err" | "erro" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            "debug" | "debu" => Ok(Self::Debug),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Severity>()? {
            Severity::Error => Ok(Self::Error),
            Severity::Warning => Ok(Self::Warning),
            Severity::Info => Ok(Self::Info),
            Severity::Debug => Ok(Self::Debug),
            Severity::Panic | Severity::Fatal => Err(ParseLevelError(s.to_string())),
        }
    }
}
