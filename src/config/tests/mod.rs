//! Unit tests for config module
//!
//! Tests configuration types, defaults, and serialization.

#![allow(clippy::panic)]

use std::io::Write;

use crate::config::{ConfigPaths, EditorConfig, HiddenListPolicy, LogLevel};

#[test]
fn config_default() {
    let config = EditorConfig::default();

    assert_eq!(config.general.log_level, LogLevel::Info);
    assert!(!config.general.log_to_file);
    assert_eq!(config.editor.hidden_lists, HiddenListPolicy::Retain);
}

#[test]
fn config_serialize_toml() {
    let config = EditorConfig::default();

    let toml_str = toml::to_string(&config).unwrap();
    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[editor]"));
    assert!(toml_str.contains("hidden_lists = \"retain\""));
}

#[test]
fn config_deserialize_toml() {
    let toml_str = r#"
        [general]
        log_level = "debug"

        [editor]
        hidden_lists = "clear"
    "#;

    let config: EditorConfig = toml::from_str(toml_str).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.editor.hidden_lists, HiddenListPolicy::Clear);
}

#[test]
fn config_serialize_roundtrip() {
    let mut original = EditorConfig::default();
    original.general.log_to_file = true;
    original.editor.hidden_lists = HiddenListPolicy::Clear;

    let toml_str = toml::to_string(&original).unwrap();
    let deserialized: EditorConfig = toml::from_str(&toml_str).unwrap();

    assert_eq!(original, deserialized);
}

#[test]
fn config_empty_toml() {
    let config: EditorConfig = toml::from_str("").unwrap();

    assert_eq!(config, EditorConfig::default());
}

#[test]
fn config_rejects_unknown_policy() {
    let result = toml::from_str::<EditorConfig>("[editor]\nhidden_lists = \"hide\"\n");

    assert!(result.is_err());
}

#[test]
fn log_level_display_matches_serde_names() {
    for level in [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ] {
        let json = serde_json::to_string(&level).unwrap();
        assert_eq!(json, format!("\"{level}\""));
    }
}

#[test]
fn config_paths_end_with_app_name() {
    let Ok(dir) = ConfigPaths::config_dir() else {
        return;
    };

    assert!(dir.ends_with("ip6-editor"));
    assert_eq!(
        ConfigPaths::main_config().unwrap(),
        dir.join("config.toml")
    );
}

#[test]
fn from_file_reads_values() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[general]\nlog_level = \"warn\"").unwrap();

    let config = EditorConfig::from_file(file.path()).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Warn);
    assert_eq!(config.editor.hidden_lists, HiddenListPolicy::Retain);
}

#[test]
fn from_file_reports_parse_location() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[general\nlog_level = 3").unwrap();

    let err = EditorConfig::from_file(file.path()).unwrap_err();

    match err {
        crate::EditorError::TomlParseError { location, .. } => {
            assert_ne!(location, "string");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn schema_names_editor_section() {
    let schema = schemars::schema_for!(EditorConfig);
    let json = serde_json::to_string(&schema).unwrap();

    assert!(json.contains("hidden_lists"));
    assert!(json.contains("log_level"));
}

#[test]
fn xdg_variable_wins_over_home() {
    let base = super::paths::resolve_base(
        Some("/xdg/data".into()),
        Some("/home/user".into()),
        ".local/share",
    );

    assert_eq!(base, Some(std::path::PathBuf::from("/xdg/data")));
}

#[test]
fn empty_xdg_variable_falls_back_to_home() {
    let base = super::paths::resolve_base(Some("".into()), Some("/home/user".into()), ".local/share");

    assert_eq!(base, Some(std::path::PathBuf::from("/home/user/.local/share")));
    assert_eq!(super::paths::resolve_base(None, None, ".config"), None);
}

#[test]
fn log_level_parses_names() {
    assert_eq!("DEBUG".parse::<LogLevel>(), Ok(LogLevel::Debug));
    assert_eq!(
        "loud".parse::<LogLevel>(),
        Err(crate::config::UnknownLogLevel("loud".to_string()))
    );
}
