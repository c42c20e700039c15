//! Piped output, files and CI logs can't render ANSI escape codes, so coloring is a
//! per-logger policy rather than something baked into the header.

use crate::level::Severity;

const RED: &str = "\x1b[0;0;31m";
const YELLOW: &str = "\x1b[0;0;33m";
const GREEN: &str = "\x1b[0;0;32m";
const BLUE: &str = "\x1b[0;0;34m";

/// Terminates any active SGR styling so the next line starts from the terminal default.
pub const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decoration {
    /// Each line opens with a severity color and closes with a reset.
    #[default]
    Ansi,
    Plain,
}

impl Decoration {
    #[must_use]
    pub const fn from_colors(enabled: bool) -> Self {
        if enabled { Self::Ansi } else { Self::Plain }
    }

    #[must_use]
    pub const fn is_colored(self) -> bool {
        matches!(self, Self::Ansi)
    }

    /// Escape sequence written before the timestamp.
    #[must_use]
    pub const fn open(self, severity: Severity) -> &'static str {
        match self {
            Self::Plain => "",
            Self::Ansi => match severity {
                Severity::Panic | Severity::Fatal | Severity::Error => RED,
                Severity::Warning => YELLOW,
                Severity::Info => GREEN,
                Severity::Debug => BLUE,
            },
        }
    }

    /// Escape sequence written after the trailing newline.
    #[must_use]
    pub const fn close(self) -> &'static str {
        match self {
            Self::Plain => "",
            Self::Ansi => RESET,
        }
    }
}
