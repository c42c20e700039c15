//! Most loggers only need a sink and a prefix; the builder covers the rest without
//! a constructor per combination.

use super::{Family, Hooks, Logger, ProcessExit, SinkErrorPolicy, State, Terminator};
use crate::caller::{BacktraceResolver, CallerResolver, DIRECT_CALL_DEPTH};
use crate::fmt::{Clock, Decoration, SystemClock};
use crate::level::Level;
use crate::sink::Sink;
use std::sync::{Arc, Mutex};

/// Stepwise configuration of a root [`Logger`].
pub struct LoggerBuilder {
    prefix: String,
    level: Level,
    sink: Option<Sink>,
    decoration: Decoration,
    clock: Box<dyn Clock>,
    resolver: Box<dyn CallerResolver>,
    terminator: Box<dyn Terminator>,
    sink_errors: SinkErrorPolicy,
    call_depth: usize,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Info level, stderr, colored headers, system clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefix: String::new(),
            level: Level::Info,
            sink: None,
            decoration: Decoration::Ansi,
            clock: Box::new(SystemClock::new()),
            resolver: Box::new(BacktraceResolver::new()),
            terminator: Box::new(ProcessExit),
            sink_errors: SinkErrorPolicy::Discard,
            call_depth: DIRECT_CALL_DEPTH,
        }
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Defaults to standard error.
    #[must_use]
    pub fn sink(mut self, sink: impl Into<Sink>) -> Self {
        self.sink = Some(sink.into());
        self
    }

    /// Piped output and files usually want plain text.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.decoration = Decoration::from_colors(enabled);
        self
    }

    #[must_use]
    pub const fn decoration(mut self, decoration: Decoration) -> Self {
        self.decoration = decoration;
        self
    }

    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    #[must_use]
    pub fn resolver(mut self, resolver: impl CallerResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    #[must_use]
    pub fn terminator(mut self, terminator: impl Terminator + 'static) -> Self {
        self.terminator = Box::new(terminator);
        self
    }

    #[must_use]
    pub const fn sink_errors(mut self, policy: SinkErrorPolicy) -> Self {
        self.sink_errors = policy;
        self
    }

    /// Wrappers that add their own frames between user code and the logger raise this.
    #[must_use]
    pub const fn call_depth(mut self, depth: usize) -> Self {
        self.call_depth = depth;
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            family: Arc::new(Mutex::new(Family {
                sequence: 0,
                level: self.level,
            })),
            state: Mutex::new(State {
                prefix: self.prefix,
                sink: self.sink.unwrap_or_else(Sink::stderr),
                buf: Vec::new(),
                last_error: None,
            }),
            hooks: Arc::new(Hooks {
                decoration: self.decoration,
                clock: self.clock,
                resolver: self.resolver,
                terminator: self.terminator,
                sink_errors: self.sink_errors,
            }),
            call_depth: self.call_depth,
        }
    }
}
