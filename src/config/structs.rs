//! Configuration struct definitions.

use serde::Deserialize;

/// Threshold and identity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Verbosity threshold: error, warning, info or debug.
    pub level: String,
    /// Prefix of the root logger; empty for none.
    pub prefix: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            prefix: String::new(),
        }
    }
}

/// Header rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// ANSI color per severity.
    pub colors: bool,
    /// `local` or `utc`.
    pub timezone: String,
    /// Millisecond timestamp resolution.
    pub millis: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            colors: true,
            timezone: "local".to_string(),
            millis: true,
        }
    }
}

/// Sink failure handling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ErrorsConfig {
    /// `discard` or `retain`.
    pub policy: String,
}

impl Default for ErrorsConfig {
    fn default() -> Self {
        Self {
            policy: "discard".to_string(),
        }
    }
}
