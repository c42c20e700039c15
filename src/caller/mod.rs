//! Caller-name resolution for Debug-level headers.
//!
//! Real stack layouts shift with inlining and optimization level, so the logger only
//! talks to a [`CallerResolver`]. Tests plug in a closure returning a fixed name; the
//! default [`BacktraceResolver`] walks a captured backtrace.

use regex::Regex;
use std::backtrace::Backtrace;
use std::sync::LazyLock;

/// Frame symbol of the logger's single emission point; resolution depth counts outward from it.
pub const EMIT_FRAME: &str = "Logger::emit";

/// Frames between the emission point and the user's code for a logger called directly:
/// `emit` → entry point → caller.
pub const DIRECT_CALL_DEPTH: usize = 2;

/// The shared instance adds the forwarding free function: `emit` → entry point → forwarder → caller.
pub const SHARED_CALL_DEPTH: usize = 3;

/// Maps a call depth to the short (unqualified) name of the function at that depth.
pub trait CallerResolver: Send + Sync {
    /// `None` when the frame or its symbol is unavailable; the header then omits the name.
    fn resolve(&self, depth: usize) -> Option<String>;
}

impl<F> CallerResolver for F
where
    F: Fn(usize) -> Option<String> + Send + Sync,
{
    fn resolve(&self, depth: usize) -> Option<String> {
        self(depth)
    }
}

/// Resolves names from `std::backtrace`. Needs symbols: stripped release binaries resolve nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktraceResolver;

impl BacktraceResolver {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CallerResolver for BacktraceResolver {
    fn resolve(&self, depth: usize) -> Option<String> {
        let trace = Backtrace::force_capture().to_string();
        let symbols = frame_symbols(&trace);
        let anchor = symbols
            .iter()
            .position(|symbol| strip_hash(symbol).ends_with(EMIT_FRAME))?;
        let name = short_name(symbols.get(anchor + depth)?);
        (!name.is_empty()).then(|| name.to_string())
    }
}

/// Numbered frame lines: `  12: app::net::connect`.
static FRAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*\d+:\s+(\S.*?)\s*$").expect("Invalid frame regex"));

/// Legacy-mangling hash suffix, present on some platforms' demangled output.
static HASH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"::h[0-9a-f]{16}$").expect("Invalid hash regex"));

/// One symbol per numbered frame line; the `at file:line` lines are skipped.
fn frame_symbols(trace: &str) -> Vec<&str> {
    FRAME_REGEX
        .captures_iter(trace)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

fn strip_hash(symbol: &str) -> &str {
    HASH_REGEX
        .find(symbol)
        .map_or(symbol, |m| &symbol[..m.start()])
}

/// Last path segment of a demangled symbol, ignoring closures, generic
/// arguments and `<T as Trait>` qualifiers.
///
/// `app::net::connect::{{closure}}::h0123456789abcdef` → `connect`
pub fn short_name(symbol: &str) -> &str {
    let symbol = strip_hash(symbol);
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let bytes = symbol.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                segments.push(&symbol[start..i]);
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    segments.push(&symbol[start..]);

    segments
        .into_iter()
        .rev()
        .find(|segment| !segment.is_empty() && !segment.starts_with('<') && !segment.starts_with('{'))
        .unwrap_or("")
}
