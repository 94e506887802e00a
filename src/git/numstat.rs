//! Decoding of `git log --format="" --numstat` lines.

use crate::error::{LangstatError, Result};

/// Placeholder git prints instead of line counts for binary files.
pub const BINARY_PLACEHOLDER: &str = "-";

/// One changed file: lines added and the raw (possibly rename-encoded) path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub added: u64,
    pub path: String,
}

/// Outcome of decoding one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Record(ChangeRecord),
    /// Binary file; not line-counted and not classified.
    Binary,
    /// Blank separator line between commits.
    Blank,
}

/// Decode `<added>\t<removed>\t<path>`.
///
/// The first and last tab-separated fields are used as count and path, so a
/// two-field line is accepted too. `line_number` is 1-based and only used for
/// error reporting.
///
/// # Errors
/// Returns `MalformedRecord` when the line has no tab or the count is not a
/// non-negative integer.
pub fn parse_line(line: &str, line_number: usize) -> Result<ParsedLine> {
    if line.trim().is_empty() {
        return Ok(ParsedLine::Blank);
    }

    let malformed = || LangstatError::MalformedRecord {
        line: line_number,
        content: line.trim_end().to_string(),
    };

    let mut fields = line.split('\t');
    let count = fields.next().map(str::trim).ok_or_else(malformed)?;
    let path = fields.next_back().map(str::trim).ok_or_else(malformed)?;

    if count == BINARY_PLACEHOLDER {
        return Ok(ParsedLine::Binary);
    }

    let added = count.parse::<u64>().map_err(|_| malformed())?;
    Ok(ParsedLine::Record(ChangeRecord {
        added,
        path: path.to_string(),
    }))
}

#[cfg(test)]
#[path = "numstat_tests.rs"]
mod tests;
