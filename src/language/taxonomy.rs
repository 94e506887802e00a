//! Base extension taxonomy in the GitHub linguist `languages.yml` shape.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{LangstatError, Result};

/// One language entry of the taxonomy.
///
/// Only the fields needed for extension mapping are read; linguist carries
/// many more (`type`, `tm_scope`, `aliases`, ...) which are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LanguageDescriptor {
    #[serde(default)]
    pub extensions: Option<Vec<String>>,
    #[serde(default)]
    pub filenames: Option<Vec<String>>,
    #[serde(default)]
    pub color: Option<String>,
}

impl LanguageDescriptor {
    #[must_use]
    pub fn with_extensions(extensions: &[&str]) -> Self {
        Self {
            extensions: Some(extensions.iter().map(ToString::to_string).collect()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_filenames(filenames: &[&str]) -> Self {
        Self {
            filenames: Some(filenames.iter().map(ToString::to_string).collect()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    /// Suffixes claimed by this language: its extensions, or its exact
    /// filenames when it lists no extensions.
    pub fn claims(&self) -> impl Iterator<Item = &str> {
        self.extensions
            .as_ref()
            .or(self.filenames.as_ref())
            .into_iter()
            .flatten()
            .map(String::as_str)
    }
}

/// Language name → descriptor, in source file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Taxonomy {
    languages: IndexMap<String, LanguageDescriptor>,
}

/// Serialization formats accepted for the taxonomy file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxonomyFormat {
    Yaml,
    Json,
    Toml,
}

impl TaxonomyFormat {
    /// Pick the format from the file extension; anything unrecognised is YAML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Self::Json,
            Some("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }
}

impl Taxonomy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, language: impl Into<String>, descriptor: LanguageDescriptor) {
        self.languages.insert(language.into(), descriptor);
    }

    #[must_use]
    pub fn with_language(mut self, language: &str, descriptor: LanguageDescriptor) -> Self {
        self.insert(language, descriptor);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageDescriptor)> {
        self.languages.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Parse taxonomy content. `path` is only used for error reporting.
    ///
    /// # Errors
    /// Returns `TaxonomyParse` when the content does not match the expected shape.
    pub fn parse(content: &str, format: TaxonomyFormat, path: &Path) -> Result<Self> {
        let parsed = match format {
            TaxonomyFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            TaxonomyFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            TaxonomyFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| LangstatError::TaxonomyParse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Read and parse a taxonomy file.
    ///
    /// # Errors
    /// Returns `FileAccess` if the file cannot be read, `TaxonomyParse` if it is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|source| LangstatError::FileAccess {
                path: path.to_path_buf(),
                source,
            })?;
        let taxonomy = Self::parse(&content, TaxonomyFormat::from_path(path), path)?;
        tracing::debug!(
            path = %path.display(),
            languages = taxonomy.len(),
            "Loaded language taxonomy"
        );
        Ok(taxonomy)
    }
}

#[cfg(test)]
#[path = "taxonomy_tests.rs"]
mod tests;
