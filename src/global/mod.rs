//! The process-wide shared logger, reachable only through these forwarding functions.
//!
//! It writes to standard error at Info level with an empty prefix and colored
//! headers. `OnceLock` builds it on first use, exactly once, even if several threads
//! race to log first; it then lives for the rest of the process.

use crate::caller::SHARED_CALL_DEPTH;
use crate::error::Error;
use crate::level::{Level, Severity};
use crate::logger::Logger;
use crate::sink::Sink;
use std::fmt;
use std::sync::OnceLock;

static SHARED: OnceLock<Logger> = OnceLock::new();

fn shared() -> &'static Logger {
    SHARED.get_or_init(|| {
        Logger::builder()
            .sink(Sink::stderr())
            .level(Level::Info)
            .call_depth(SHARED_CALL_DEPTH)
            .build()
    })
}

/// Writes one line regardless of the threshold. `depth` is passed through unchanged.
///
/// # Errors
/// The sink's write failure.
#[inline(never)]
pub fn output(depth: usize, severity: Severity, text: &str) -> Result<(), Error> {
    shared().output(depth, severity, text)
}

#[must_use]
pub fn enabled(severity: Severity) -> bool {
    shared().enabled(severity)
}

#[inline(never)]
pub fn errorf(args: fmt::Arguments<'_>) {
    shared().errorf(args);
}

#[inline(never)]
pub fn errorln(operands: &[&dyn fmt::Display]) {
    shared().errorln(operands);
}

#[inline(never)]
pub fn warnf(args: fmt::Arguments<'_>) {
    shared().warnf(args);
}

#[inline(never)]
pub fn warnln(operands: &[&dyn fmt::Display]) {
    shared().warnln(operands);
}

#[inline(never)]
pub fn infof(args: fmt::Arguments<'_>) {
    shared().infof(args);
}

#[inline(never)]
pub fn infoln(operands: &[&dyn fmt::Display]) {
    shared().infoln(operands);
}

#[inline(never)]
pub fn debugf(args: fmt::Arguments<'_>) {
    shared().debugf(args);
}

#[inline(never)]
pub fn debugln(operands: &[&dyn fmt::Display]) {
    shared().debugln(operands);
}

/// # Panics
/// Always, after the line is written.
#[inline(never)]
pub fn panicf(args: fmt::Arguments<'_>) -> ! {
    shared().panicf(args)
}

/// # Panics
/// Always, after the line is written.
#[inline(never)]
pub fn panicln(operands: &[&dyn fmt::Display]) -> ! {
    shared().panicln(operands)
}

/// Writes the line, then exits the process with status 1.
#[inline(never)]
pub fn fatalf(args: fmt::Arguments<'_>) {
    shared().fatalf(args);
}

/// Writes the line, then exits the process with status 1.
#[inline(never)]
pub fn fatalln(operands: &[&dyn fmt::Display]) {
    shared().fatalln(operands);
}

/// A logger sharing the shared instance's counter, level and sink.
#[must_use]
pub fn child(tag: &str) -> Logger {
    shared().child(tag)
}

#[must_use]
pub fn sequence() -> u64 {
    shared().sequence()
}

pub fn reset_sequence() {
    shared().reset_sequence();
}

#[must_use]
pub fn level() -> Level {
    shared().level()
}

pub fn set_level(level: Level) {
    shared().set_level(level);
}

#[must_use]
pub fn prefix() -> String {
    shared().prefix()
}

pub fn set_prefix(prefix: impl Into<String>) {
    shared().set_prefix(prefix);
}

#[must_use]
pub fn sink() -> Sink {
    shared().sink()
}

pub fn set_sink(sink: impl Into<Sink>) {
    shared().set_sink(sink);
}

#[must_use]
pub fn take_error() -> Option<Error> {
    shared().take_error()
}

/// # Errors
/// The sink's flush failure.
pub fn flush() -> Result<(), Error> {
    shared().flush()
}
