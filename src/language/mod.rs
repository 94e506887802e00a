mod catalog;
mod classifier;
mod rules;
mod taxonomy;

pub use catalog::{DEFAULT_KEY, LanguageCatalog, LanguageOverride, STATIC_OVERRIDES};
pub use classifier::{Classifier, split_extension};
pub use rules::{SPECIAL_RULES, SpecialRule, match_special};
pub use taxonomy::{LanguageDescriptor, Taxonomy, TaxonomyFormat};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
