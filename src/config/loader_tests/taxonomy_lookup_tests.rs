//! Tests for locating the language taxonomy file.

use std::path::{Path, PathBuf};

use crate::config::{Config, FileConfigLoader};
use crate::error::LangstatError;

use super::mock_fs::MockFileSystem;

#[test]
fn explicit_path_wins() {
    let fs = MockFileSystem::new()
        .with_file("/data/langs.json", "{}")
        .with_file("/project/languages.yml", "");
    let config = Config {
        taxonomy: Some(PathBuf::from("/project/languages.yml")),
        ..Config::default()
    };

    let found = FileConfigLoader::with_fs(fs)
        .locate_taxonomy(Some(Path::new("/data/langs.json")), &config)
        .unwrap();
    assert_eq!(found, PathBuf::from("/data/langs.json"));
}

#[test]
fn config_path_used_without_flag() {
    let fs = MockFileSystem::new().with_file("/data/languages.yml", "");
    let config = Config {
        taxonomy: Some(PathBuf::from("/data/languages.yml")),
        ..Config::default()
    };

    let found = FileConfigLoader::with_fs(fs)
        .locate_taxonomy(None, &config)
        .unwrap();
    assert_eq!(found, PathBuf::from("/data/languages.yml"));
}

#[test]
fn missing_explicit_path_does_not_fall_back() {
    let fs = MockFileSystem::new().with_file("/project/languages.yml", "");
    let err = FileConfigLoader::with_fs(fs)
        .locate_taxonomy(Some(Path::new("/typo.yml")), &Config::default())
        .unwrap_err();

    match err {
        LangstatError::TaxonomyNotFound { searched } => {
            assert_eq!(searched, vec![PathBuf::from("/typo.yml")]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn working_directory_before_user_dir() {
    let fs = MockFileSystem::new()
        .with_file("/project/languages.yml", "")
        .with_file("/home/user/.config/langstat/languages.yml", "");

    let found = FileConfigLoader::with_fs(fs)
        .locate_taxonomy(None, &Config::default())
        .unwrap();
    assert_eq!(found, PathBuf::from("/project/languages.yml"));
}

#[test]
fn user_dir_as_fallback() {
    let fs = MockFileSystem::new().with_file("/home/user/.config/langstat/languages.yml", "");

    let found = FileConfigLoader::with_fs(fs)
        .locate_taxonomy(None, &Config::default())
        .unwrap();
    assert_eq!(found, PathBuf::from("/home/user/.config/langstat/languages.yml"));
}

#[test]
fn not_found_lists_searched_paths_and_url() {
    let err = FileConfigLoader::with_fs(MockFileSystem::new())
        .locate_taxonomy(None, &Config::default())
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("/project/languages.yml"));
    assert!(message.contains("/home/user/.config/langstat/languages.yml"));
    assert!(message.contains("linguist"));
    assert_eq!(err.error_type(), "Taxonomy");
}
