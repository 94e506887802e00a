mod json;
mod progress;
pub mod svg;
mod text;

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use json::JsonFormatter;
pub use progress::RecordProgress;
pub use text::{ColorMode, TextFormatter};

use crate::error::{LangstatError, Result};
use crate::ranking::RankedView;

/// Trait for formatting a ranked view into a report.
pub trait ReportFormatter {
    /// Format the ranked view into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, view: &RankedView) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Write `content` to stdout.
///
/// # Errors
/// Returns an error if stdout cannot be written.
pub fn write_stdout(content: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Write a rendered chart to `path`, creating parent directories if needed.
///
/// # Errors
/// Returns `FileAccess` if the directory or file cannot be written.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| LangstatError::FileAccess {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, content).map_err(|source| LangstatError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "wrote chart");
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
