use std::collections::{HashMap, HashSet};

use super::taxonomy::Taxonomy;
use crate::error::{LangstatError, Result};

/// Override key whose value becomes the fallback label.
pub const DEFAULT_KEY: &str = "_default_";

/// Corrections for extensions the linguist taxonomy gets wrong or leaves
/// ambiguous for plain extension mapping.
pub const STATIC_OVERRIDES: &[(&str, &str)] = &[
    ("md", "Markdown"),
    ("mmd", "Markdown"),
    ("txt", "Text"),
    ("cfg", "INI"),
    ("dvc", "DVC"),
    ("h", "C++"),
    ("latex", "TeX"),
    ("bashrc", "Shell"),
    ("profile", "Shell"),
    ("php", "PHP"),
    ("m", "Matlab"),
    ("makefile", "Makefile"),
    ("gradlew", "Gradle"),
    ("gitmodules", "Git Config"),
    ("mailmap", "Git Attributes"),
    ("dockerignore", "Dockerfile"),
    ("1", "Roff"),
];

/// A caller-supplied `extension:Label` mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOverride {
    pub extension: String,
    pub label: String,
}

impl LanguageOverride {
    /// Parse `ext:Label`. Only the first `:` separates, so labels may contain colons.
    ///
    /// # Errors
    /// Returns `InvalidOverride` when there is no `:` or the extension is empty.
    pub fn parse(spec: &str) -> Result<Self> {
        let Some((extension, label)) = spec.split_once(':') else {
            return Err(LangstatError::InvalidOverride(spec.to_string()));
        };
        let extension = extension.trim().trim_start_matches('.');
        if extension.is_empty() {
            return Err(LangstatError::InvalidOverride(spec.to_string()));
        }
        Ok(Self {
            extension: extension.to_string(),
            label: label.trim().to_string(),
        })
    }

    /// Parse a list of overrides, failing on the first invalid one.
    ///
    /// # Errors
    /// Returns `InvalidOverride` for the first malformed entry.
    pub fn parse_all<S: AsRef<str>>(specs: &[S]) -> Result<Vec<Self>> {
        specs.iter().map(|s| Self::parse(s.as_ref())).collect()
    }
}

/// Read-only extension → label map built once per run.
///
/// Precedence per extension: caller override > static override > base
/// taxonomy > fallback.
#[derive(Debug, Clone, Default)]
pub struct LanguageCatalog {
    labels: HashMap<String, String>,
    colors: HashMap<String, Option<String>>,
    collided: HashSet<String>,
}

impl LanguageCatalog {
    /// Build from the base taxonomy, the static corrections, then `overrides`.
    #[must_use]
    pub fn build(taxonomy: &Taxonomy, overrides: &[LanguageOverride]) -> Self {
        let mut catalog = Self::from_taxonomy(taxonomy);
        for (ext, label) in STATIC_OVERRIDES {
            catalog.labels.insert((*ext).to_string(), (*label).to_string());
        }
        for o in overrides {
            catalog.labels.insert(o.extension.clone(), o.label.clone());
        }
        tracing::debug!(
            extensions = catalog.labels.len(),
            collisions = catalog.collided.len(),
            overrides = overrides.len(),
            "Built language catalog"
        );
        catalog
    }

    fn from_taxonomy(taxonomy: &Taxonomy) -> Self {
        // extension -> first claiming language
        let mut claimed: HashMap<String, &str> = HashMap::new();
        let mut collided = HashSet::new();
        let mut colors = HashMap::new();

        for (language, descriptor) in taxonomy.iter() {
            colors.insert(language.to_string(), descriptor.color.clone());
            for raw in descriptor.claims() {
                let ext = raw.trim_start_matches('.').to_lowercase();
                match claimed.get(&ext) {
                    None => {
                        claimed.insert(ext, language);
                    }
                    Some(owner) if *owner != language => {
                        collided.insert(ext);
                    }
                    Some(_) => {}
                }
            }
        }

        let mut labels = HashMap::with_capacity(claimed.len());
        for (ext, language) in claimed {
            if collided.contains(&ext) {
                labels.insert(ext.clone(), ext);
            } else {
                labels.insert(ext, language.to_string());
            }
        }
        for ext in &collided {
            colors.insert(ext.clone(), None);
        }

        Self {
            labels,
            colors,
            collided,
        }
    }

    /// Label for `extension`, trying the exact text first, then lower-case.
    /// An empty label counts as unmapped.
    #[must_use]
    pub fn lookup(&self, extension: &str) -> Option<&str> {
        self.labels
            .get(extension)
            .or_else(|| self.labels.get(&extension.to_lowercase()))
            .map(String::as_str)
            .filter(|label| !label.is_empty())
    }

    /// The configured fallback label, if `_default_` was set to a non-empty label.
    #[must_use]
    pub fn fallback(&self) -> Option<&str> {
        self.labels
            .get(DEFAULT_KEY)
            .map(String::as_str)
            .filter(|label| !label.is_empty())
    }

    /// Display color recorded for `label`; `None` for collided extensions.
    #[must_use]
    pub fn color_for(&self, label: &str) -> Option<&str> {
        self.colors
            .get(label)
            .and_then(Option::as_deref)
            .filter(|color| !color.is_empty())
    }

    #[cfg(test)]
    pub(crate) fn is_collided(&self, extension: &str) -> bool {
        self.collided.contains(&extension.to_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
