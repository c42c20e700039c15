//! Logger construction from a [`Config`].

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::error::Error;
use crate::sink::Sink;

impl Logger {
    /// Root logger writing to `sink`, configured by `config`.
    ///
    /// # Errors
    /// Any setting `config` holds that doesn't name a valid level, time zone or policy.
    pub fn from_config(sink: impl Into<Sink>, config: &Config) -> Result<Self, Error> {
        Ok(LoggerBuilder::from_config(config)?.sink(sink).build())
    }
}

impl LoggerBuilder {
    /// A builder preloaded from `config`, for callers that still want to swap hooks.
    ///
    /// # Errors
    /// As [`Logger::from_config`].
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Ok(Self::new()
            .prefix(config.general.prefix.clone())
            .level(config.parse_level()?)
            .colors(config.format.colors)
            .clock(config.clock()?)
            .sink_errors(config.parse_policy()?))
    }
}
