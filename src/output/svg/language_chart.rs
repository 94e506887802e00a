//! Language breakdown charts built from a ranked view.

use super::chart::{BarScale, HorizontalBarChart, PieChart};
use super::data::DataPoint;
use crate::ranking::RankedView;

/// Log-scaled horizontal bar chart with one bar per language.
///
/// Intended for a view ranked with `BucketPolicy::All`; an "Other" row is
/// still drawn last (top) if present.
#[derive(Debug)]
pub struct LanguageBarChart {
    chart: HorizontalBarChart,
}

impl LanguageBarChart {
    #[must_use]
    pub fn from_view(view: &RankedView) -> Self {
        let data = view.iter_with_other().map(DataPoint::from_row).collect();
        let chart = HorizontalBarChart::new(view.title(), data).with_scale(BarScale::Log);
        Self { chart }
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.chart = self.chart.with_width(width);
        self
    }

    #[must_use]
    pub fn render(&self) -> String {
        self.chart.render()
    }
}

/// Pie chart of the kept languages plus the "Other" wedge.
#[derive(Debug)]
pub struct LanguagePieChart {
    chart: PieChart,
}

impl LanguagePieChart {
    #[must_use]
    pub fn from_view(view: &RankedView) -> Self {
        let data = view.iter_with_other().map(DataPoint::from_row).collect();
        Self {
            chart: PieChart::new(view.title(), data),
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        self.chart.render()
    }
}

#[cfg(test)]
#[path = "language_chart_tests.rs"]
mod tests;
