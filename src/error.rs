//! Unified error type for all glogger operations.

/// Error type for glogger operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from a sink write or a config read.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Unknown level name in config or on the command line.
    InvalidLevel(String),
    /// Unrecognized value for a config setting.
    InvalidSetting { key: &'static str, value: String },
    /// Config directory not found.
    ConfigDirNotFound,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::InvalidLevel(level) => write!(f, "invalid level: {level}"),
            Self::InvalidSetting { key, value } => write!(f, "invalid value for {key}: {value}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::InvalidLevel(_) | Self::InvalidSetting { .. } | Self::ConfigDirNotFound => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
