//! TOML configuration for a logger.
//!
//! Every field is defaulted, so an empty or missing file yields the same logger
//! [`crate::Logger::new`] builds. Values stay strings in the schema and are turned
//! into typed settings by the `parse_*` methods, which name the offending key on failure.

mod structs;

pub use structs::{ErrorsConfig, FormatConfig, GeneralConfig};

use crate::error::Error;
use crate::fmt::{SystemClock, TimeZone};
use crate::global;
use crate::level::Level;
use crate::logger::SinkErrorPolicy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub format: FormatConfig,
    pub errors: ErrorsConfig,
}

impl Config {
    /// # Errors
    /// TOML syntax errors and type mismatches.
    pub fn parse(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }

    /// Loads `glogger.toml` from the platform config directory.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, or as [`Config::load_from`].
    pub fn load() -> Result<Self, Error> {
        Self::load_from(&Self::config_path()?)
    }

    /// Reads and parses `path`; `~` expands to the home directory. A missing file is not
    /// an error: defaults are returned.
    ///
    /// # Errors
    /// Unreadable file or invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        let path = Path::new(&expanded);

        if !path.exists() {
            global::debugf(format_args!(
                "config {} not found, using defaults",
                path.display()
            ));
            return Ok(Self::default());
        }

        let config = Self::parse(&fs::read_to_string(path)?)?;
        global::debugf(format_args!("config loaded from {}", path.display()));
        Ok(config)
    }

    /// `<config dir>/glogger/glogger.toml`, e.g. `~/.config/glogger/glogger.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn config_path() -> Result<PathBuf, Error> {
        directories::ProjectDirs::from("", "", "glogger")
            .map(|dirs| dirs.config_dir().join("glogger.toml"))
            .ok_or(Error::ConfigDirNotFound)
    }

    /// # Errors
    /// [`Error::InvalidLevel`] for anything but error, warning, info or debug.
    pub fn parse_level(&self) -> Result<Level, Error> {
        Ok(self.general.level.parse::<Level>()?)
    }

    /// # Errors
    /// [`Error::InvalidSetting`] for anything but discard or retain.
    pub fn parse_policy(&self) -> Result<SinkErrorPolicy, Error> {
        self.errors.policy.parse()
    }

    /// # Errors
    /// [`Error::InvalidSetting`] for anything but local or utc.
    pub fn parse_timezone(&self) -> Result<TimeZone, Error> {
        match self.format.timezone.to_lowercase().as_str() {
            "local" => Ok(TimeZone::Local),
            "utc" => Ok(TimeZone::Utc),
            _ => Err(Error::InvalidSetting {
                key: "format.timezone",
                value: self.format.timezone.clone(),
            }),
        }
    }

    /// # Errors
    /// As [`Config::parse_timezone`].
    pub fn clock(&self) -> Result<SystemClock, Error> {
        Ok(SystemClock::new()
            .zone(self.parse_timezone()?)
            .millis(self.format.millis))
    }
}
