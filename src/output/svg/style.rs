//! SVG styling primitives: colors and text anchoring.

use std::fmt;

/// Fill or stroke color written into SVG attributes.
///
/// Charts are written as standalone files, so colors are concrete values
/// rather than CSS variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartColor(String);

impl ChartColor {
    /// Create a hex (or any CSS color literal) color.
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self(color.to_string())
    }

    /// Primary label text.
    #[must_use]
    pub fn text() -> Self {
        Self::hex("#1e293b")
    }

    /// Secondary text such as values and empty-state messages.
    #[must_use]
    pub fn text_muted() -> Self {
        Self::hex("#64748b")
    }

    /// Default bar fill when a data point carries no color.
    #[must_use]
    pub fn primary() -> Self {
        Self::hex("#3b82f6")
    }

    /// Convert to CSS value string.
    #[must_use]
    pub fn to_css(&self) -> &str {
        &self.0
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
