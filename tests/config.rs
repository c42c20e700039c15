//! Tests for TOML configuration.

use glogger::config::Config;
use glogger::{BufferSink, Error, FixedClock, Level, Logger, LoggerBuilder, SinkErrorPolicy, TimeZone};
use std::fs;
use tempfile::TempDir;

#[test]
fn empty_config_matches_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.parse_level().unwrap(), Level::Info);
    assert_eq!(config.parse_policy().unwrap(), SinkErrorPolicy::Discard);
    assert_eq!(config.parse_timezone().unwrap(), TimeZone::Local);
    assert!(config.format.colors);
    assert!(config.format.millis);
    assert_eq!(config.general.prefix, "");
}

#[test]
fn full_config_parses() {
    let config = Config::parse(
        r#"
[general]
level = "debug"
prefix = "svc"

[format]
colors = false
timezone = "UTC"
millis = false

[errors]
policy = "retain"
"#,
    )
    .unwrap();

    assert_eq!(config.parse_level().unwrap(), Level::Debug);
    assert_eq!(config.general.prefix, "svc");
    assert!(!config.format.colors);
    assert_eq!(config.parse_timezone().unwrap(), TimeZone::Utc);
    assert!(!config.format.millis);
    assert_eq!(config.parse_policy().unwrap(), SinkErrorPolicy::Retain);
}

#[test]
fn partial_section_keeps_other_defaults() {
    let config = Config::parse("[general]\nlevel = \"warning\"\n").unwrap();
    assert_eq!(config.parse_level().unwrap(), Level::Warning);
    assert!(config.format.colors);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    assert!(matches!(
        Config::parse("[general\nlevel ="),
        Err(Error::ConfigParse(_))
    ));
}

#[test]
fn invalid_values_name_the_problem() {
    let mut config = Config::default();

    config.general.level = "verbose".to_string();
    assert!(matches!(config.parse_level(), Err(Error::InvalidLevel(l)) if l == "verbose"));

    config.format.timezone = "mars".to_string();
    assert!(matches!(
        config.parse_timezone(),
        Err(Error::InvalidSetting { key: "format.timezone", .. })
    ));

    config.errors.policy = "shout".to_string();
    assert!(matches!(
        config.parse_policy(),
        Err(Error::InvalidSetting { key: "errors.policy", .. })
    ));

    assert!(Logger::from_config(BufferSink::new(), &config).is_err());
}

#[test]
fn missing_file_yields_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_from(&tmp.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_from_reads_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("glogger.toml");
    fs::write(&path, "[general]\nprefix = \"disk\"\nlevel = \"error\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.general.prefix, "disk");
    assert_eq!(config.parse_level().unwrap(), Level::Error);
}

#[test]
fn config_path_ends_with_file_name() {
    if let Ok(path) = Config::config_path() {
        assert!(path.ends_with("glogger.toml"));
    }
}

#[test]
fn logger_from_config() {
    let config = Config::parse(
        "[general]\nprefix = \"svc\"\nlevel = \"warning\"\n[format]\ncolors = false\n",
    )
    .unwrap();
    let buffer = BufferSink::new();

    let logger = Logger::from_config(buffer.clone(), &config).unwrap();
    logger.infof(format_args!("hidden"));
    logger.warnf(format_args!("shown"));

    assert_eq!(logger.level(), Level::Warning);
    assert_eq!(logger.prefix(), "svc");
    let out = buffer.contents();
    assert!(!out.contains('\x1b'));
    assert!(out.ends_with(" [svc] -> WARN 001 shown\n"));
}

#[test]
fn builder_from_config_accepts_overrides() {
    let config = Config::parse("[general]\nprefix = \"svc\"\n[format]\ncolors = false\n").unwrap();
    let buffer = BufferSink::new();

    let logger = LoggerBuilder::from_config(&config)
        .unwrap()
        .sink(buffer.clone())
        .clock(FixedClock::new("T"))
        .build();
    logger.infof(format_args!("hi"));

    assert_eq!(buffer.contents(), "T [svc] -> INFO 001 hi\n");
}
