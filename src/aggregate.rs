//! Per-language accumulation of numstat line counts.

use std::collections::HashSet;
use std::io::BufRead;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{LangstatError, Result};
use crate::git::{ChangeRecord, ParsedLine, PathResolver, parse_line};
use crate::language::{Classifier, LanguageCatalog};

/// Label an override can map an extension to so its lines are dropped.
pub const SKIP_LABEL: &str = "skip";

/// Labels never reported, compared case-insensitively.
pub const DEFAULT_IGNORED_LABELS: &[&str] =
    &["licence", "license", "postscript", "csv", "svg", SKIP_LABEL];

/// Case-insensitive set of labels removed before ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredLabels {
    labels: HashSet<String>,
}

impl Default for IgnoredLabels {
    fn default() -> Self {
        Self::with_extra(std::iter::empty::<&str>())
    }
}

impl IgnoredLabels {
    /// The default set plus `extra`.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let labels = DEFAULT_IGNORED_LABELS
            .iter()
            .map(|l| (*l).to_string())
            .chain(extra.into_iter().map(|l| l.as_ref().to_lowercase()))
            .collect();
        Self { labels }
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(&label.to_lowercase())
    }
}

/// Counters describing what the aggregator saw, for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InputSummary {
    pub records: usize,
    pub binary: usize,
    pub blank: usize,
}

/// Finalized per-label totals, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageTotals {
    entries: IndexMap<String, u64>,
}

impl LanguageTotals {
    #[must_use]
    pub fn get(&self, label: &str) -> Option<u64> {
        self.entries.get(label).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum of all counts, saturating at `u64::MAX`.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries.values().fold(0, |acc, count| acc.saturating_add(*count))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for LanguageTotals {
    fn from_iter<T: IntoIterator<Item = (S, u64)>>(iter: T) -> Self {
        let mut entries = IndexMap::new();
        for (label, count) in iter {
            let entry = entries.entry(label.into()).or_insert(0);
            *entry = u64::saturating_add(*entry, count);
        }
        Self { entries }
    }
}

/// Running totals over a stream of change records.
#[derive(Debug)]
pub struct Aggregator<'a> {
    classifier: Classifier<'a>,
    resolver: PathResolver,
    totals: IndexMap<String, u64>,
    grand_total: u64,
    summary: InputSummary,
}

impl<'a> Aggregator<'a> {
    #[must_use]
    pub fn new(catalog: &'a LanguageCatalog) -> Self {
        Self::with_classifier(Classifier::new(catalog))
    }

    #[must_use]
    pub fn with_classifier(classifier: Classifier<'a>) -> Self {
        Self {
            classifier,
            resolver: PathResolver::new(),
            totals: IndexMap::new(),
            grand_total: 0,
            summary: InputSummary::default(),
        }
    }

    /// Classify one record and add its count to its label.
    ///
    /// The running sum over all labels is checked, so every per-label total
    /// and the report total fit in a `u64` once aggregation succeeds.
    ///
    /// # Errors
    /// Returns `CountOverflow` when the running sum would exceed `u64::MAX`.
    pub fn push_record(&mut self, record: &ChangeRecord, line_number: usize) -> Result<()> {
        let overflow = || LangstatError::CountOverflow { line: line_number };
        self.grand_total = self.grand_total.checked_add(record.added).ok_or_else(overflow)?;

        let file_name = self.resolver.resolve_file_name(&record.path);
        let label = self.classifier.classify(&file_name);
        let entry = self.totals.entry(label).or_insert(0);
        *entry = entry.checked_add(record.added).ok_or_else(overflow)?;
        self.summary.records += 1;
        Ok(())
    }

    /// Decode and accumulate one numstat line.
    ///
    /// # Errors
    /// Returns `MalformedRecord` for lines that are not blank, binary or a
    /// valid record, and `CountOverflow` when the totals overflow.
    pub fn push_line(&mut self, line: &str, line_number: usize) -> Result<()> {
        match parse_line(line, line_number)? {
            ParsedLine::Record(record) => self.push_record(&record, line_number)?,
            ParsedLine::Binary => self.summary.binary += 1,
            ParsedLine::Blank => self.summary.blank += 1,
        }
        Ok(())
    }

    /// Consume every line of `reader`, calling `on_line` after each one.
    ///
    /// # Errors
    /// Stops at the first read error or malformed record.
    pub fn consume<R: BufRead>(&mut self, reader: R, mut on_line: impl FnMut()) -> Result<()> {
        for (idx, line) in reader.lines().enumerate() {
            self.push_line(&line?, idx + 1)?;
            on_line();
        }
        Ok(())
    }

    #[must_use]
    pub const fn summary(&self) -> InputSummary {
        self.summary
    }

    /// Raw totals so far, before ignored labels and zero counts are dropped.
    #[cfg(test)]
    pub(crate) fn raw_totals(&self) -> impl Iterator<Item = (&str, u64)> {
        self.totals.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Remove ignored labels, then non-positive counts.
    #[must_use]
    pub fn finish(self, ignored: &IgnoredLabels) -> LanguageTotals {
        let before = self.totals.len();
        let entries: IndexMap<String, u64> = self
            .totals
            .into_iter()
            .filter(|(label, _)| !ignored.contains(label))
            .filter(|(_, count)| *count > 0)
            .collect();
        tracing::debug!(
            records = self.summary.records,
            binary = self.summary.binary,
            labels = entries.len(),
            dropped = before - entries.len(),
            "Aggregated numstat records"
        );
        LanguageTotals { entries }
    }
}

/// Aggregate a whole stream in one call.
///
/// # Errors
/// Propagates read errors and malformed records.
pub fn aggregate<R: BufRead>(
    reader: R,
    catalog: &LanguageCatalog,
    ignored: &IgnoredLabels,
) -> Result<LanguageTotals> {
    let mut aggregator = Aggregator::new(catalog);
    aggregator.consume(reader, || {})?;
    Ok(aggregator.finish(ignored))
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
