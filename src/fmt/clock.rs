//! Timestamps are the one part of a header that depends on the outside world, so they
//! sit behind a trait that tests can pin down.

use chrono::{Local, Utc};
use std::io::Write;

/// Millisecond resolution with a zone suffix, e.g. `2025-01-15 14:30:00.042 UTC`.
pub const MILLIS_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f %Z";
/// Second resolution with a zone suffix, e.g. `2025-01-15 14:30:00 UTC`.
pub const SECONDS_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Produces a fixed-width textual timestamp for the current instant.
pub trait Clock: Send + Sync {
    /// Appends the timestamp to the line being assembled.
    fn write_timestamp(&self, buf: &mut Vec<u8>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeZone {
    /// `%Z` renders the numeric offset (`+02:00`) since the OS zone name isn't available.
    #[default]
    Local,
    Utc,
}

/// Wall clock rendered with [`chrono`].
///
/// The zone suffix is `UTC` for [`TimeZone::Utc`]. For [`TimeZone::Local`] chrono's `%Z`
/// yields the numeric offset (`+02:00`) rather than an abbreviation such as `CEST`; the
/// width is still fixed for a given zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock {
    zone: TimeZone,
    millis: bool,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    /// Local time, millisecond resolution.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            zone: TimeZone::Local,
            millis: true,
        }
    }

    #[must_use]
    pub const fn zone(mut self, zone: TimeZone) -> Self {
        self.zone = zone;
        self
    }

    #[must_use]
    pub const fn millis(mut self, enabled: bool) -> Self {
        self.millis = enabled;
        self
    }

    const fn pattern(self) -> &'static str {
        if self.millis {
            MILLIS_FORMAT
        } else {
            SECONDS_FORMAT
        }
    }
}

impl Clock for SystemClock {
    fn write_timestamp(&self, buf: &mut Vec<u8>) {
        // Writes into a Vec only fail if the Display impl does; chrono's doesn't for valid patterns.
        let _ = match self.zone {
            TimeZone::Local => write!(buf, "{}", Local::now().format(self.pattern())),
            TimeZone::Utc => write!(buf, "{}", Utc::now().format(self.pattern())),
        };
    }
}

/// Always renders the same text. Handy for golden-output tests and benches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock(pub String);

impl FixedClock {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl Clock for FixedClock {
    fn write_timestamp(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.0.as_bytes());
    }
}
