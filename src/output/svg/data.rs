//! Chart data model.

use super::style::ChartColor;
use crate::ranking::RankedRow;

/// A single data point for charts.
#[derive(Debug, Clone)]
pub struct DataPoint {
    /// Label for this data point (shown next to the bar or slice)
    pub label: String,
    /// Numeric value
    pub value: f64,
    /// Optional color override
    pub color: Option<ChartColor>,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Point labelled with the row's display text and colored with its color.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_row(row: &RankedRow) -> Self {
        Self::new(&row.display, row.count as f64).with_color(ChartColor::hex(&row.color))
    }
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
