//! Concurrent writers must see gap-free sequence numbers and whole lines.

use glogger::{BufferSink, FixedClock, Logger};
use std::thread;

const TS: &str = "2025-01-15 14:30:00.000 UTC";
const THREADS: usize = 8;
const PER_THREAD: usize = 250;

fn plain(buffer: &BufferSink) -> Logger {
    Logger::builder()
        .sink(buffer.clone())
        .colors(false)
        .clock(FixedClock::new(TS))
        .build()
}

/// `"<ts> [prefix] -> INFO 0a1 msg"` → `0xa1`
fn sequence_of(line: &str) -> u64 {
    let tail = line.split(" -> ").nth(1).expect("line has an arrow");
    let hex = tail.split(' ').nth(1).expect("line has a sequence");
    u64::from_str_radix(hex, 16).expect("sequence is hex")
}

fn assert_gap_free(buffer: &BufferSink, total: usize) {
    let lines = buffer.lines();
    assert_eq!(lines.len(), total);

    for line in &lines {
        assert!(line.starts_with(TS), "torn line: {line:?}");
        assert_eq!(line.matches(" -> ").count(), 1, "interleaved line: {line:?}");
    }

    let mut sequences: Vec<u64> = lines.iter().map(|line| sequence_of(line)).collect();
    sequences.sort_unstable();
    let expected: Vec<u64> = (1..=total as u64).collect();
    assert_eq!(sequences, expected);
}

#[test]
fn concurrent_calls_get_distinct_consecutive_sequences() {
    let buffer = BufferSink::new();
    let logger = plain(&buffer);

    thread::scope(|s| {
        for t in 0..THREADS {
            let logger = &logger;
            s.spawn(move || {
                for i in 0..PER_THREAD {
                    logger.infof(format_args!("thread {t} message {i}"));
                }
            });
        }
    });

    assert_gap_free(&buffer, THREADS * PER_THREAD);
    assert_eq!(logger.sequence(), (THREADS * PER_THREAD) as u64);
}

#[test]
fn family_members_share_one_ordering() {
    let buffer = BufferSink::new();
    let root = plain(&buffer);
    let children: Vec<Logger> = (0..THREADS).map(|t| root.child(&format!("c{t}"))).collect();

    thread::scope(|s| {
        for child in &children {
            s.spawn(move || {
                for i in 0..PER_THREAD {
                    child.infoln(&[&"message", &i]);
                }
            });
        }
        s.spawn(|| {
            for i in 0..PER_THREAD {
                root.warnf(format_args!("root {i}"));
            }
        });
    });

    assert_gap_free(&buffer, (THREADS + 1) * PER_THREAD);
}

#[test]
fn level_changes_during_logging_never_tear_lines() {
    let buffer = BufferSink::new();
    let logger = plain(&buffer);

    thread::scope(|s| {
        s.spawn(|| {
            for i in 0..PER_THREAD {
                logger.errorf(format_args!("always {i}"));
            }
        });
        s.spawn(|| {
            for i in 0..PER_THREAD {
                logger.set_level(if i % 2 == 0 {
                    glogger::Level::Error
                } else {
                    glogger::Level::Info
                });
                logger.set_prefix(format!("p{i}"));
            }
        });
    });

    assert_gap_free(&buffer, PER_THREAD);
}
