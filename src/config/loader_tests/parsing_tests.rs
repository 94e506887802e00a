//! Tests for config parsing and validation during load.

use std::path::Path;

use crate::config::{ConfigLoader, FileConfigLoader};
use crate::error::LangstatError;
use crate::output::OutputFormat;

use super::mock_fs::MockFileSystem;

fn load(content: &str) -> crate::error::Result<crate::config::Config> {
    let fs = MockFileSystem::new().with_file("/cfg.toml", content);
    FileConfigLoader::with_fs(fs).load_from_path(Path::new("/cfg.toml"))
}

#[test]
fn parses_overrides_and_output() {
    let config = load(
        r#"
overrides = ["lock:skip"]

[output]
format = "json"
bar_svg = "bar.svg"
"#,
    )
    .unwrap();

    assert_eq!(config.overrides, vec!["lock:skip"]);
    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(config.output.pie_svg.is_none());
}

#[test]
fn syntax_error_is_toml_parse() {
    let err = load("[ranking\n").unwrap_err();
    assert!(matches!(err, LangstatError::TomlParse(_)));
}

#[test]
fn invalid_threshold_is_config_error() {
    let err = load("[ranking]\nthreshold = 1.5\n").unwrap_err();
    assert!(matches!(err, LangstatError::Config(_)));
}

#[test]
fn invalid_override_is_config_error() {
    let err = load("overrides = [\"python\"]\n").unwrap_err();
    assert!(err.to_string().contains("extension:Label"));
}

#[test]
fn unknown_policy_is_rejected() {
    assert!(load("[ranking]\npolicy = \"median\"\n").is_err());
}
