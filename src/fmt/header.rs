//! Line assembly: everything a log line contains besides the message text.

use super::{Clock, Decoration};
use crate::level::Severity;
use std::io::Write;

/// The per-line facts the header renders, gathered under the logger's lock.
#[derive(Debug, Clone, Copy)]
pub struct Header<'a> {
    pub severity: Severity,
    pub prefix: &'a str,
    /// `Some` only while the logger's threshold is Debug. An empty name renders nothing.
    pub caller: Option<&'a str>,
    pub sequence: u64,
}

/// Appends `[color]timestamp [prefix] [caller] -> TAG seq ` to `buf`.
pub fn write_header(buf: &mut Vec<u8>, decoration: Decoration, clock: &dyn Clock, header: &Header<'_>) {
    buf.extend_from_slice(decoration.open(header.severity).as_bytes());
    clock.write_timestamp(buf);

    if !header.prefix.is_empty() {
        buf.extend_from_slice(b" [");
        buf.extend_from_slice(header.prefix.as_bytes());
        buf.push(b']');
    }

    if let Some(caller) = header.caller.filter(|name| !name.is_empty()) {
        buf.push(b' ');
        buf.extend_from_slice(caller.as_bytes());
    }

    buf.extend_from_slice(b" -> ");
    buf.extend_from_slice(header.severity.tag().as_bytes());
    buf.push(b' ');
    write_sequence(buf, header.sequence);
    buf.push(b' ');
}

/// Lowercase hex, at least three digits.
pub fn write_sequence(buf: &mut Vec<u8>, sequence: u64) {
    let _ = write!(buf, "{sequence:03x}");
}

/// Terminates the message that starts at `message_start`: one newline unless it already
/// ends in one (an empty message always gets one), then the decoration's reset.
pub fn finish_line(buf: &mut Vec<u8>, message_start: usize, decoration: Decoration) {
    if buf.len() == message_start || buf.last() != Some(&b'\n') {
        buf.push(b'\n');
    }
    buf.extend_from_slice(decoration.close().as_bytes());
}

/// Print-line rendering: operands joined by single spaces, newline appended.
pub fn write_line_operands(buf: &mut Vec<u8>, operands: &[&dyn std::fmt::Display]) {
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            buf.push(b' ');
        }
        let _ = write!(buf, "{operand}");
    }
    buf.push(b'\n');
}
