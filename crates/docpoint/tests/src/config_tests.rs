use std::path::PathBuf;

use super::*;

#[test]
fn defaults_when_empty() {
    let settings = Settings::from_toml("").unwrap();
    assert_eq!(settings, Settings::default());
    assert!(settings.loader.source_roots.is_empty());
    assert!(!settings.loader.include_tests);
    assert_eq!(settings.logging.level, LogLevel::Warn);
}

#[test]
fn parses_full_settings() {
    let settings = Settings::from_toml(
        r#"
[loader]
source-roots = ["/srv/go", "/home/dev/src"]
include-tests = true

[logging]
level = "debug"
"#,
    )
    .unwrap();
    assert_eq!(
        settings.loader.source_roots,
        vec![PathBuf::from("/srv/go"), PathBuf::from("/home/dev/src")]
    );
    assert!(settings.loader.include_tests);
    assert_eq!(settings.logging.level, LogLevel::Debug);
}

#[test]
fn partial_settings_keep_other_defaults() {
    let settings = Settings::from_toml("[logging]\nlevel = \"trace\"\n").unwrap();
    assert_eq!(settings.logging.level, LogLevel::Trace);
    assert!(settings.loader.source_roots.is_empty());
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(Settings::from_toml("[loader]\nsourceRoots = []\n").is_err());
    assert!(Settings::from_toml("[something]\n").is_err());
}

#[test]
fn level_parsing_accepts_aliases() {
    assert_eq!(LogLevel::parse("WARNING"), Some(LogLevel::Warn));
    assert_eq!(LogLevel::parse(" info "), Some(LogLevel::Info));
    assert_eq!(LogLevel::parse("loud"), None);
}

#[test]
fn filter_strings_match_levels() {
    assert_eq!(LogLevel::Debug.as_filter(), "debug");
    assert_eq!(LogLevel::Error.as_filter(), "error");
}
