//! Tests for levels, severities and the gate between them.

use glogger::{Level, Severity};

#[test]
fn level_ordering() {
    assert!(Level::Error < Level::Warning);
    assert!(Level::Warning < Level::Info);
    assert!(Level::Info < Level::Debug);
}

#[test]
fn level_display_is_the_header_tag() {
    assert_eq!(Level::Error.to_string(), "ERRO");
    assert_eq!(Level::Warning.to_string(), "WARN");
    assert_eq!(Level::Info.to_string(), "INFO");
    assert_eq!(Level::Debug.to_string(), "DEBU");
}

#[test]
fn severity_tags() {
    assert_eq!(Severity::Panic.tag(), "PANI");
    assert_eq!(Severity::Fatal.tag(), "FATA");
    assert_eq!(Severity::from(Level::Warning).tag(), "WARN");
}

#[test]
fn level_from_str() {
    assert_eq!("error".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("WARN".parse::<Level>().unwrap(), Level::Warning);
    assert_eq!("Warning".parse::<Level>().unwrap(), Level::Warning);
    assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("DEBU".parse::<Level>().unwrap(), Level::Debug);
}

#[test]
fn level_from_str_rejects_unknown_and_severity_only_names() {
    assert!("invalid".parse::<Level>().is_err());
    assert!("fatal".parse::<Level>().is_err());
    assert!("panic".parse::<Level>().is_err());
    assert_eq!("fatal".parse::<Severity>().unwrap(), Severity::Fatal);
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Info);
}

#[test]
fn gate_passes_iff_severity_does_not_exceed_threshold() {
    let ordinary = [
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Debug,
    ];
    for threshold in Level::all() {
        for severity in ordinary {
            let expected = (severity as u8) <= (threshold as u8);
            assert_eq!(
                severity.passes(threshold),
                expected,
                "{severity} at threshold {threshold}"
            );
        }
    }
}

#[test]
fn panic_and_fatal_always_pass() {
    for threshold in Level::all() {
        assert!(Severity::Panic.passes(threshold));
        assert!(Severity::Fatal.passes(threshold));
    }
}
