use std::collections::HashSet;

use super::catalog::LanguageCatalog;
use super::rules::{SPECIAL_RULES, SpecialRule, match_special};

/// Split a filename on its last dot. Without a dot the whole name is the extension.
#[must_use]
pub fn split_extension(filename: &str) -> (&str, &str) {
    filename.rsplit_once('.').unwrap_or(("", filename))
}

/// Maps filenames to language labels.
///
/// Owns the set of extensions already reported as unknown, so each one is
/// warned about once per classifier rather than once per process.
#[derive(Debug)]
pub struct Classifier<'a> {
    catalog: &'a LanguageCatalog,
    rules: &'a [SpecialRule],
    warned: HashSet<String>,
}

impl<'a> Classifier<'a> {
    #[must_use]
    pub fn new(catalog: &'a LanguageCatalog) -> Self {
        Self::with_rules(catalog, SPECIAL_RULES)
    }

    #[must_use]
    pub fn with_rules(catalog: &'a LanguageCatalog, rules: &'a [SpecialRule]) -> Self {
        Self {
            catalog,
            rules,
            warned: HashSet::new(),
        }
    }

    /// Label for a bare filename (no directory part).
    pub fn classify(&mut self, filename: &str) -> String {
        let (base, extension) = split_extension(filename);

        if let Some(label) = match_special(self.rules, base, extension) {
            return label.to_string();
        }

        if let Some(label) = self.catalog.lookup(extension) {
            return label.to_string();
        }

        self.warn_unknown(extension);
        self.catalog
            .fallback()
            .map_or_else(|| extension.to_lowercase(), ToString::to_string)
    }

    /// Returns true the first time `extension` is seen.
    fn warn_unknown(&mut self, extension: &str) -> bool {
        if self.warned.contains(extension) {
            return false;
        }
        tracing::warn!(extension, "Unknown extension: {extension}");
        self.warned.insert(extension.to_string());
        true
    }

    #[cfg(test)]
    pub(crate) fn unknown_extensions(&self) -> impl Iterator<Item = &str> {
        self.warned.iter().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
