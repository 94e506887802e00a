//! Standalone SVG chart generation.
//!
//! Charts render as complete `<svg>` documents with a `<title>` as first
//! child, concrete fill colors, and `viewBox` scaling.

mod builder;
mod chart;
mod data;
mod element;
mod format;
mod language_chart;
mod style;

pub use builder::SvgBuilder;
pub use chart::{BarScale, HorizontalBarChart, PieChart};
pub use data::DataPoint;
pub use element::{Bar, Label, PieSlice, SvgElement};
pub use format::html_escape;
pub use language_chart::{LanguageBarChart, LanguagePieChart};
pub use style::{ChartColor, TextAnchor};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
