//! Ascending, colored, bucketed view over language totals.

mod humanize;
mod palette;

use serde::{Deserialize, Serialize};

pub use humanize::{display_label, humanize_count};
pub use palette::{OTHER_COLOR, PALETTE, palette_color};

use crate::aggregate::LanguageTotals;
use crate::language::LanguageCatalog;

/// Label of the synthetic overflow row.
pub const OTHER_LABEL: &str = "Other";

/// Number of rows kept individually by the top-N policy unless configured.
pub const DEFAULT_TOP_N: usize = 15;

/// Minimum share of the total for a row to be kept by the threshold policy.
pub const DEFAULT_THRESHOLD: f64 = 0.005;

/// Policy selector as written in config files and on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    /// Keep the N largest rows
    #[default]
    TopN,
    /// Keep rows above a fraction of the total
    Threshold,
    /// Keep every row
    All,
}

/// How rows are split between individual display and the "Other" bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BucketPolicy {
    All,
    TopN(usize),
    Threshold(f64),
}

impl Default for BucketPolicy {
    fn default() -> Self {
        Self::TopN(DEFAULT_TOP_N)
    }
}

impl BucketPolicy {
    #[must_use]
    pub const fn from_kind(kind: PolicyKind, top: usize, threshold: f64) -> Self {
        match kind {
            PolicyKind::TopN => Self::TopN(top),
            PolicyKind::Threshold => Self::Threshold(threshold),
            PolicyKind::All => Self::All,
        }
    }

    /// Number of leading (smallest) rows of `counts` that go into "Other".
    /// `counts` must be sorted ascending.
    #[allow(clippy::cast_precision_loss)]
    fn overflow_len(self, counts: &[u64], total: u64) -> usize {
        match self {
            Self::All => 0,
            Self::TopN(n) => counts.len().saturating_sub(n),
            Self::Threshold(fraction) => {
                let cutoff = total as f64 * fraction;
                counts
                    .iter()
                    .position(|&c| c as f64 >= cutoff)
                    .unwrap_or(counts.len())
            }
        }
    }
}

/// One displayable row: a language label with its count and color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedRow {
    pub label: String,
    pub count: u64,
    pub display: String,
    pub color: String,
}

impl RankedRow {
    #[must_use]
    pub fn new(label: impl Into<String>, count: u64, color: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            display: display_label(&label, count),
            label,
            count,
            color: color.into(),
        }
    }
}

/// Rows ascending by count plus the optional overflow row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RankedView {
    pub rows: Vec<RankedRow>,
    pub other: Option<RankedRow>,
    pub total: u64,
}

impl RankedView {
    /// Individual rows followed by "Other" when present.
    pub fn iter_with_other(&self) -> impl Iterator<Item = &RankedRow> {
        self.rows.iter().chain(self.other.iter())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.other.is_none()
    }

    /// `<humanized total> lines of code written`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} lines of code written", humanize_count(self.total))
    }
}

/// Sort `totals` ascending, color every row, then bucket per `policy`.
///
/// Colors are assigned over the full sequence before bucketing, so a label
/// keeps the same color whichever policy is used.
#[must_use]
pub fn rank(totals: &LanguageTotals, catalog: &LanguageCatalog, policy: BucketPolicy) -> RankedView {
    let mut entries: Vec<(&str, u64)> = totals.iter().filter(|(_, count)| *count > 0).collect();
    entries.sort_by_key(|(_, count)| *count);

    let mut generated = 0;
    let mut rows: Vec<RankedRow> = entries
        .into_iter()
        .map(|(label, count)| {
            let color = catalog.color_for(label).unwrap_or_else(|| {
                let color = palette_color(generated);
                generated += 1;
                color
            });
            RankedRow::new(label, count, color)
        })
        .collect();

    let total = rows.iter().fold(0, |acc: u64, r| acc.saturating_add(r.count));
    let counts: Vec<u64> = rows.iter().map(|r| r.count).collect();
    let split = policy.overflow_len(&counts, total);

    let kept = rows.split_off(split);
    let other = (split > 0).then(|| {
        let count = rows.iter().fold(0, |acc: u64, r| acc.saturating_add(r.count));
        RankedRow::new(OTHER_LABEL, count, OTHER_COLOR)
    });

    RankedView {
        rows: kept,
        other,
        total,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
