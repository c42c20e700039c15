//! Byte destinations a logger writes finished lines to.
//!
//! A [`Sink`] is a cheap, clonable handle: a child logger and its parent hold
//! the same handle, and two handles compare equal with [`Sink::same`] when they
//! point at the same writer.

mod buffer;

pub use buffer::BufferSink;

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// Shared handle to any `Write + Send` destination.
#[derive(Clone)]
pub struct Sink {
    inner: Arc<Mutex<dyn Write + Send>>,
}

static STDERR: OnceLock<Sink> = OnceLock::new();

impl Sink {
    /// Wraps a writer. Releasing the writer (closing a file, a socket) stays the caller's job.
    #[must_use]
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(writer)),
        }
    }

    /// The process's standard error stream. Every call returns the same handle.
    #[must_use]
    pub fn stderr() -> Self {
        STDERR.get_or_init(|| Self::new(io::stderr())).clone()
    }

    /// Whether both handles write to the same destination.
    #[must_use]
    pub fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// One line goes out in one call so concurrent writers sharing a destination never interleave.
    ///
    /// # Errors
    /// Whatever the underlying writer reports.
    pub fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut writer = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(line)
    }

    /// # Errors
    /// Whatever the underlying writer reports.
    pub fn flush(&self) -> io::Result<()> {
        let mut writer = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        writer.flush()
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self::stderr()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("stderr", &self.same(&Self::stderr()))
            .finish_non_exhaustive()
    }
}

impl From<BufferSink> for Sink {
    fn from(buffer: BufferSink) -> Self {
        Self::new(buffer)
    }
}
