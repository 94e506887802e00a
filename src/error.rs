use std::path::PathBuf;

use thiserror::Error;

/// Where operators can fetch the linguist taxonomy when none is found locally.
pub const TAXONOMY_URL: &str =
    "https://github.com/github/linguist/raw/master/lib/linguist/languages.yml";

#[derive(Error, Debug)]
pub enum LangstatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to access file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Language taxonomy not found (searched: {}); please download {url}",
        format_searched(.searched),
        url = TAXONOMY_URL
    )]
    TaxonomyNotFound { searched: Vec<PathBuf> },

    #[error("Failed to parse language taxonomy {path}: {message}")]
    TaxonomyParse { path: PathBuf, message: String },

    #[error("Invalid language override '{0}': expected 'extension:Label'")]
    InvalidOverride(String),

    #[error("Malformed numstat record on line {line}: {content:?}")]
    MalformedRecord { line: usize, content: String },

    #[error("Line count overflow on line {line}: totals no longer fit in 64 bits")]
    CountOverflow { line: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

fn format_searched(searched: &[PathBuf]) -> String {
    if searched.is_empty() {
        return "no candidate paths".to_string();
    }
    searched
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl LangstatError {
    /// Short category name, stable across message wording changes.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::InvalidOverride(_) => "Config",
            Self::FileAccess { .. } => "FileAccess",
            Self::TaxonomyNotFound { .. } | Self::TaxonomyParse { .. } => "Taxonomy",
            Self::MalformedRecord { .. } | Self::CountOverflow { .. } => "Input",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    /// True for errors caused by the history stream rather than the setup.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedRecord { .. } | Self::CountOverflow { .. }
        )
    }

    /// Actionable hint shown under the error message, if there is one.
    #[must_use]
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Config(_) => Some("Check the config file format and value ranges".to_string()),
            Self::TaxonomyNotFound { .. } => Some(format!(
                "Download {TAXONOMY_URL} into the working directory or pass --taxonomy"
            )),
            Self::TaxonomyParse { .. } => {
                Some("The taxonomy must map language names to {extensions|filenames, color}".to_string())
            }
            Self::InvalidOverride(_) => {
                Some("Write overrides as extension:Label, e.g. conf:INI".to_string())
            }
            Self::MalformedRecord { .. } => {
                Some("Generate input with: git log --format=\"\" --numstat".to_string())
            }
            Self::CountOverflow { .. } => {
                Some("Check the history for corrupted line counts".to_string())
            }
            Self::FileAccess { source, .. } | Self::Io(source) => io_suggestion(source),
            Self::TomlParse(_) => Some("Check TOML syntax in the config file".to_string()),
            Self::JsonSerialize(_) => None,
        }
    }
}

fn io_suggestion(err: &std::io::Error) -> Option<String> {
    match err.kind() {
        std::io::ErrorKind::NotFound => Some("Check that the file path exists".to_string()),
        std::io::ErrorKind::PermissionDenied => Some("Check file permissions".to_string()),
        _ => None,
    }
}

pub type Result<T> = std::result::Result<T, LangstatError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
