#![forbid(unsafe_code)]

//! `glogger` - leveled, sequenced, line-oriented logging.
//!
//! Every line carries a timestamp, an optional hierarchical prefix, the severity
//! tag and a per-family sequence number in hex:
//!
//! ```text
//! 2025-01-15 14:30:00.042 +00:00 [app.net] -> INFO 01f connected
//! ```
//!
//! At Debug level each line also names the function that logged it.
//!
//! # Example
//!
//! ```
//! use glogger::{BufferSink, Level, Logger};
//!
//! let buffer = BufferSink::new();
//! let logger = Logger::builder()
//!     .sink(buffer.clone())
//!     .prefix("app")
//!     .colors(false)
//!     .build();
//!
//! glogger::infof!(logger, "started with {} workers", 4);
//! let net = logger.child("net");
//! net.warnln(&[&"connection reset by", &"peer"]);
//!
//! assert_eq!(logger.sequence(), 2);
//! assert!(buffer.lines()[1].ends_with("[app.net] -> WARN 002 connection reset by peer"));
//! ```
//!
//! The [`global`] module forwards every operation to one process-wide logger on
//! standard error.
//!
//! # Features
//!
//! - `cli` (default): builds the `glogger` command-line front end

pub mod caller;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod fmt;
pub mod global;
pub mod level;
pub mod logger;
mod macros;
pub mod sink;

pub use caller::{BacktraceResolver, CallerResolver};
pub use config::Config;
pub use error::Error;
pub use fmt::{Clock, Decoration, FixedClock, SystemClock, TimeZone};
pub use level::{Level, Severity};
pub use logger::{Logger, LoggerBuilder, ProcessExit, SinkErrorPolicy, Terminator};
pub use sink::{BufferSink, Sink};
