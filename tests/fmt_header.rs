//! Tests for header assembly.

use glogger::fmt::{
    Clock, Decoration, FixedClock, Header, RESET, SystemClock, TimeZone, finish_line,
    write_header, write_sequence,
};
use glogger::Severity;
use regex::Regex;

const TS: &str = "2025-01-15 14:30:00.000 UTC";

fn header(severity: Severity, prefix: &str, caller: Option<&str>, sequence: u64) -> String {
    let mut buf = Vec::new();
    write_header(
        &mut buf,
        Decoration::Plain,
        &FixedClock::new(TS),
        &Header {
            severity,
            prefix,
            caller,
            sequence,
        },
    );
    String::from_utf8(buf).unwrap()
}

fn sequence(n: u64) -> String {
    let mut buf = Vec::new();
    write_sequence(&mut buf, n);
    String::from_utf8(buf).unwrap()
}

#[test]
fn sequence_is_lowercase_hex_padded_to_three() {
    assert_eq!(sequence(1), "001");
    assert_eq!(sequence(10), "00a");
    assert_eq!(sequence(0x4f3), "4f3");
    assert_eq!(sequence(0xfff), "fff");
}

#[test]
fn sequence_width_is_a_minimum() {
    assert_eq!(sequence(0x1000), "1000");
    assert_eq!(sequence(0xabcde), "abcde");
}

#[test]
fn header_with_prefix() {
    assert_eq!(
        header(Severity::Info, "glog", None, 1),
        format!("{TS} [glog] -> INFO 001 ")
    );
}

#[test]
fn header_without_prefix() {
    assert_eq!(
        header(Severity::Warning, "", None, 2),
        format!("{TS} -> WARN 002 ")
    );
}

#[test]
fn header_with_caller() {
    assert_eq!(
        header(Severity::Error, "a.b", Some("connect"), 0x2a),
        format!("{TS} [a.b] connect -> ERRO 02a ")
    );
}

#[test]
fn empty_caller_renders_nothing() {
    assert_eq!(
        header(Severity::Debug, "glog", Some(""), 3),
        format!("{TS} [glog] -> DEBU 003 ")
    );
}

#[test]
fn ansi_decoration_colors_by_severity() {
    let cases = [
        (Severity::Panic, "31"),
        (Severity::Fatal, "31"),
        (Severity::Error, "31"),
        (Severity::Warning, "33"),
        (Severity::Info, "32"),
        (Severity::Debug, "34"),
    ];
    for (severity, code) in cases {
        assert_eq!(Decoration::Ansi.open(severity), format!("\x1b[0;0;{code}m"));
        assert_eq!(Decoration::Plain.open(severity), "");
    }
    assert_eq!(Decoration::Ansi.close(), RESET);
}

#[test]
fn finish_line_adds_one_newline_when_missing() {
    let mut buf = b"head message".to_vec();
    finish_line(&mut buf, 5, Decoration::Plain);
    assert_eq!(buf, b"head message\n");
}

#[test]
fn finish_line_keeps_existing_newline() {
    let mut buf = b"head message\n".to_vec();
    finish_line(&mut buf, 5, Decoration::Plain);
    assert_eq!(buf, b"head message\n");
}

#[test]
fn finish_line_terminates_empty_message() {
    let mut buf = b"head\n".to_vec();
    // message starts after the header's own bytes, which happen to end in a newline
    finish_line(&mut buf, 5, Decoration::Ansi);
    assert_eq!(buf, b"head\n\n\x1b[0m");
}

fn timestamp(clock: &SystemClock) -> String {
    let mut buf = Vec::new();
    clock.write_timestamp(&mut buf);
    String::from_utf8(buf).unwrap()
}

#[test]
fn utc_clock_names_the_zone() {
    let stamp = timestamp(&SystemClock::new().zone(TimeZone::Utc));
    let shape = Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3} UTC$").unwrap();
    assert!(shape.is_match(&stamp), "{stamp}");
}

#[test]
fn local_clock_ends_with_numeric_offset() {
    let stamp = timestamp(&SystemClock::new().zone(TimeZone::Local).millis(false));
    let shape = Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} [+-]\d{2}:\d{2}$").unwrap();
    assert!(shape.is_match(&stamp), "{stamp}");
}
