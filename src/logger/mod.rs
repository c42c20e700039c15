//! The logger core.
//!
//! A family of loggers (a root and every child derived from it) shares one lock
//! guarding the sequence counter and the level. Each instance keeps its own prefix,
//! sink handle and scratch buffer behind a second mutex that is only ever taken while
//! the family lock is held, so the family lock alone serializes every emission and
//! every accessor across the family. Message bodies and caller names are produced
//! before that lock is taken.

mod builder;
mod from_config;
mod terminate;

pub use builder::LoggerBuilder;
pub use terminate::{ProcessExit, Terminator};

use crate::caller::{CallerResolver, DIRECT_CALL_DEPTH};
use crate::error::Error;
use crate::fmt::{Clock, Decoration, Header, finish_line, write_header, write_line_operands};
use crate::level::{Level, Severity};
use crate::sink::Sink;
use std::borrow::Cow;
use std::fmt;
use std::io;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// What the level entry points do with a failed sink write.
///
/// [`Logger::output`] reports failures under either policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkErrorPolicy {
    /// Best-effort logging: the failure is dropped.
    #[default]
    Discard,
    /// The most recent failure is kept until [`Logger::take_error`] collects it.
    Retain,
}

impl SinkErrorPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Discard => "discard",
            Self::Retain => "retain",
        }
    }
}

impl FromStr for SinkErrorPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "discard" => Ok(Self::Discard),
            "retain" => Ok(Self::Retain),
            _ => Err(Error::InvalidSetting {
                key: "errors.policy",
                value: s.to_string(),
            }),
        }
    }
}

/// State shared by reference across a logger family.
#[derive(Debug)]
struct Family {
    sequence: u64,
    level: Level,
}

/// State owned by one instance. Only locked while the family lock is held.
struct State {
    prefix: String,
    sink: Sink,
    buf: Vec<u8>,
    last_error: Option<io::Error>,
}

/// Strategies fixed at construction and inherited by children.
struct Hooks {
    decoration: Decoration,
    clock: Box<dyn Clock>,
    resolver: Box<dyn CallerResolver>,
    terminator: Box<dyn Terminator>,
    sink_errors: SinkErrorPolicy,
}

/// Message body, rendered before any lock is taken so a `Display` impl may log itself.
enum Message<'a> {
    Text(&'a str),
    Format(fmt::Arguments<'a>),
    Line(&'a [&'a dyn fmt::Display]),
}

impl Message<'_> {
    fn render(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(*text),
            Self::Format(args) => Cow::Owned(args.to_string()),
            Self::Line(operands) => Cow::Owned(render_line(operands)),
        }
    }
}

/// Panic-severity calls unwind while other threads may be logging; a poisoned lock
/// must not take the logger down with them.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn render_line(operands: &[&dyn fmt::Display]) -> String {
    let mut buf = Vec::new();
    write_line_operands(&mut buf, operands);
    String::from_utf8_lossy(&buf).into_owned()
}

/// A leveled, sequenced line logger. Safe to share between threads.
pub struct Logger {
    family: Arc<Mutex<Family>>,
    state: Mutex<State>,
    hooks: Arc<Hooks>,
    call_depth: usize,
}

impl Logger {
    /// Independent counter, Info level, colored output, real caller resolution.
    #[must_use]
    pub fn new(sink: impl Into<Sink>, prefix: impl Into<String>) -> Self {
        Self::builder().sink(sink).prefix(prefix).build()
    }

    /// Guided construction for anything beyond the defaults.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// The single emission point: gate, header, message, newline, one sink write.
    ///
    /// The body and the caller name are produced before the family lock is taken; the
    /// sequence increment, header and write then happen under it, so numbers stay
    /// gap-free and lines non-interleaved. Returns whether a line was written.
    #[inline(never)]
    fn emit(
        &self,
        depth: usize,
        severity: Severity,
        message: &Message<'_>,
        gated: bool,
    ) -> Result<bool, io::Error> {
        let level = lock(&self.family).level;
        if gated && !severity.passes(level) {
            return Ok(false);
        }

        let body = message.render();
        let caller = if level == Level::Debug {
            Some(self.hooks.resolver.resolve(depth).unwrap_or_default())
        } else {
            None
        };

        let mut family = lock(&self.family);
        // The level may have been lowered while the body was rendered.
        if gated && !severity.passes(family.level) {
            return Ok(false);
        }
        family.sequence += 1;

        let mut state = lock(&self.state);
        let State {
            prefix,
            sink,
            buf,
            last_error,
        } = &mut *state;

        buf.clear();
        write_header(
            buf,
            self.hooks.decoration,
            self.hooks.clock.as_ref(),
            &Header {
                severity,
                prefix: prefix.as_str(),
                caller: caller.as_deref(),
                sequence: family.sequence,
            },
        );
        let message_start = buf.len();
        buf.extend_from_slice(body.as_bytes());
        finish_line(buf, message_start, self.hooks.decoration);

        match sink.write_line(buf) {
            Ok(()) => Ok(true),
            Err(e) => {
                if self.hooks.sink_errors == SinkErrorPolicy::Retain {
                    let reported = io::Error::new(e.kind(), e.to_string());
                    *last_error = Some(e);
                    return Err(reported);
                }
                Err(e)
            }
        }
    }

    /// Writes one line at `severity` regardless of the threshold.
    ///
    /// `depth` counts frames from the emission point to the function whose name a
    /// Debug header shows; [`crate::caller::DIRECT_CALL_DEPTH`] names this method's caller.
    ///
    /// # Errors
    /// The sink's write failure, whatever the configured [`SinkErrorPolicy`].
    #[inline(never)]
    pub fn output(&self, depth: usize, severity: Severity, text: &str) -> Result<(), Error> {
        self.emit(depth, severity, &Message::Text(text), false)?;
        Ok(())
    }

    /// Whether a message at `severity` would currently be written.
    #[must_use]
    pub fn enabled(&self, severity: Severity) -> bool {
        severity.passes(lock(&self.family).level)
    }

    #[inline(never)]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        let _ = self.emit(self.call_depth, Severity::Error, &Message::Format(args), true);
    }

    #[inline(never)]
    pub fn errorln(&self, operands: &[&dyn fmt::Display]) {
        let _ = self.emit(self.call_depth, Severity::Error, &Message::Line(operands), true);
    }

    #[inline(never)]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        let _ = self.emit(self.call_depth, Severity::Warning, &Message::Format(args), true);
    }

    #[inline(never)]
    pub fn warnln(&self, operands: &[&dyn fmt::Display]) {
        let _ = self.emit(self.call_depth, Severity::Warning, &Message::Line(operands), true);
    }

    #[inline(never)]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        let _ = self.emit(self.call_depth, Severity::Info, &Message::Format(args), true);
    }

    #[inline(never)]
    pub fn infoln(&self, operands: &[&dyn fmt::Display]) {
        let _ = self.emit(self.call_depth, Severity::Info, &Message::Line(operands), true);
    }

    #[inline(never)]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        let _ = self.emit(self.call_depth, Severity::Debug, &Message::Format(args), true);
    }

    #[inline(never)]
    pub fn debugln(&self, operands: &[&dyn fmt::Display]) {
        let _ = self.emit(self.call_depth, Severity::Debug, &Message::Line(operands), true);
    }

    /// Always writes, then panics with the rendered message.
    ///
    /// # Panics
    /// Always, after the line is written.
    #[inline(never)]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        let message = args.to_string();
        let _ = self.emit(self.call_depth, Severity::Panic, &Message::Text(&message), false);
        panic!("{message}");
    }

    /// Always writes, then panics with the rendered line (trailing newline included).
    ///
    /// # Panics
    /// Always, after the line is written.
    #[inline(never)]
    pub fn panicln(&self, operands: &[&dyn fmt::Display]) -> ! {
        let message = render_line(operands);
        let _ = self.emit(self.call_depth, Severity::Panic, &Message::Text(&message), false);
        panic!("{message}");
    }

    /// Always writes, then hands status 1 to the terminator (process exit by default).
    #[inline(never)]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        let _ = self.emit(self.call_depth, Severity::Fatal, &Message::Format(args), false);
        self.hooks.terminator.terminate(1);
    }

    /// Always writes, then hands status 1 to the terminator (process exit by default).
    #[inline(never)]
    pub fn fatalln(&self, operands: &[&dyn fmt::Display]) {
        let _ = self.emit(self.call_depth, Severity::Fatal, &Message::Line(operands), false);
        self.hooks.terminator.terminate(1);
    }

    /// Derives a logger sharing this one's lock, counter, level, sink and strategies.
    ///
    /// The child's prefix is `parent.tag`, or just `tag` under an unprefixed parent.
    #[must_use]
    pub fn child(&self, tag: &str) -> Self {
        let _family = lock(&self.family);
        let state = lock(&self.state);

        let prefix = if state.prefix.is_empty() {
            tag.to_string()
        } else {
            format!("{}.{tag}", state.prefix)
        };

        Self {
            family: Arc::clone(&self.family),
            state: Mutex::new(State {
                prefix,
                sink: state.sink.clone(),
                buf: Vec::new(),
                last_error: None,
            }),
            hooks: Arc::clone(&self.hooks),
            call_depth: DIRECT_CALL_DEPTH,
        }
    }

    /// Number of lines emitted by the family since the last reset.
    #[must_use]
    pub fn sequence(&self) -> u64 {
        lock(&self.family).sequence
    }

    /// The next line is numbered `001` again.
    pub fn reset_sequence(&self) {
        lock(&self.family).sequence = 0;
    }

    #[must_use]
    pub fn level(&self) -> Level {
        lock(&self.family).level
    }

    /// Applies to the whole family from the next call on.
    pub fn set_level(&self, level: Level) {
        lock(&self.family).level = level;
    }

    #[must_use]
    pub fn prefix(&self) -> String {
        let _family = lock(&self.family);
        lock(&self.state).prefix.clone()
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        let prefix = prefix.into();
        let _family = lock(&self.family);
        lock(&self.state).prefix = prefix;
    }

    #[must_use]
    pub fn sink(&self) -> Sink {
        let _family = lock(&self.family);
        lock(&self.state).sink.clone()
    }

    /// Redirects this instance only; the parent and existing children keep their sink.
    pub fn set_sink(&self, sink: impl Into<Sink>) {
        let sink = sink.into();
        let _family = lock(&self.family);
        lock(&self.state).sink = sink;
    }

    /// The failure kept under [`SinkErrorPolicy::Retain`], if any. Clears it.
    #[must_use]
    pub fn take_error(&self) -> Option<Error> {
        let _family = lock(&self.family);
        lock(&self.state).last_error.take().map(Error::Io)
    }

    /// # Errors
    /// The sink's flush failure.
    pub fn flush(&self) -> Result<(), Error> {
        let sink = self.sink();
        sink.flush()?;
        Ok(())
    }

    #[must_use]
    pub const fn call_depth(&self) -> usize {
        self.call_depth
    }

    #[must_use]
    pub fn decoration(&self) -> Decoration {
        self.hooks.decoration
    }

    #[must_use]
    pub fn sink_errors(&self) -> SinkErrorPolicy {
        self.hooks.sink_errors
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let family = lock(&self.family);
        let state = lock(&self.state);
        f.debug_struct("Logger")
            .field("sequence", &family.sequence)
            .field("level", &family.level)
            .field("prefix", &state.prefix)
            .field("sink", &state.sink)
            .field("decoration", &self.hooks.decoration)
            .field("sink_errors", &self.hooks.sink_errors)
            .field("call_depth", &self.call_depth)
            .finish_non_exhaustive()
    }
}
