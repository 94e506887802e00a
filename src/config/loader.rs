use std::path::{Path, PathBuf};

use crate::error::{LangstatError, Result};

use super::Config;

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    /// Returns an error if a config file exists but cannot be read, parsed, or validated.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or validated.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

const APP_NAME: &str = "langstat";
const LOCAL_CONFIG_NAME: &str = ".langstat.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// File name looked up in the working and user config directories.
pub const TAXONOMY_FILE_NAME: &str = "languages.yml";

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Get the platform-specific configuration directory for langstat.
    ///
    /// - Windows: `%APPDATA%\langstat`
    /// - macOS: `~/Library/Application Support/langstat`
    /// - Linux: `~/.config/langstat` (XDG)
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.langstat.toml` in current directory
/// 2. `config.toml` in the platform-specific user config directory
/// 3. Returns `Config::default()` if no config found
#[derive(Debug, Default)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_path(&self, name: &str) -> Option<PathBuf> {
        self.fs.current_dir().ok().map(|dir| dir.join(name))
    }

    fn user_path(&self, name: &str) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(name))
    }

    fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Locate the language taxonomy.
    ///
    /// An explicit path (command line first, then config) is authoritative and
    /// must exist. Otherwise `languages.yml` is looked up in the current
    /// directory and then in the user config directory.
    ///
    /// # Errors
    /// Returns `TaxonomyNotFound` listing every path that was tried.
    pub fn locate_taxonomy(&self, explicit: Option<&Path>, config: &Config) -> Result<PathBuf> {
        if let Some(path) = explicit.or(config.taxonomy.as_deref()) {
            if self.fs.exists(path) {
                return Ok(path.to_path_buf());
            }
            return Err(LangstatError::TaxonomyNotFound {
                searched: vec![path.to_path_buf()],
            });
        }

        let candidates: Vec<PathBuf> = [
            self.local_path(TAXONOMY_FILE_NAME),
            self.user_path(TAXONOMY_FILE_NAME),
        ]
        .into_iter()
        .flatten()
        .collect();

        if let Some(found) = candidates.iter().find(|p| self.fs.exists(p)) {
            tracing::debug!(path = %found.display(), "found language taxonomy");
            return Ok(found.clone());
        }

        Err(LangstatError::TaxonomyNotFound {
            searched: candidates,
        })
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        if let Some(local_path) = self.local_path(LOCAL_CONFIG_NAME)
            && self.fs.exists(&local_path)
        {
            return self.load_from_path(&local_path);
        }

        if let Some(user_path) = self.user_path(USER_CONFIG_NAME)
            && self.fs.exists(&user_path)
        {
            return self.load_from_path(&user_path);
        }

        tracing::debug!("no config file found, using defaults");
        Ok(Config::default())
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| LangstatError::FileAccess {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "loading config");
        Self::parse_config(&content)
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
