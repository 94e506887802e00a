//! Primitive SVG elements: bars, pie slices, and labels.

use std::f64::consts::TAU;
use std::fmt::Write;

use super::format::{coord, html_escape};
use super::style::{ChartColor, TextAnchor};

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// A single bar in a bar chart.
#[derive(Debug, Clone)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ChartColor,
    pub label: String,
    pub value: f64,
}

impl SvgElement for Bar {
    fn render(&self) -> String {
        let color = self.color.to_css();
        let escaped_label = html_escape(&self.label);
        // <title> doubles as hover tooltip
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{color}" rx="2">
    <title>{escaped_label}: {}</title>
</rect>"#,
            coord(self.x),
            coord(self.y),
            coord(self.width),
            coord(self.height),
            self.value
        )
    }
}

/// A wedge of a pie chart.
///
/// Angles are fractions of a full turn, measured counter-clockwise from the
/// positive x axis (3 o'clock), so `start = 0.0, sweep = 0.25` covers the
/// upper right quadrant.
#[derive(Debug, Clone)]
pub struct PieSlice {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub start: f64,
    pub sweep: f64,
    pub color: ChartColor,
    pub label: String,
}

impl PieSlice {
    /// Point on the circle of radius `r` at turn fraction `turn`.
    #[must_use]
    pub fn point_at(&self, r: f64, turn: f64) -> (f64, f64) {
        let angle = turn * TAU;
        // SVG y grows downwards
        (r.mul_add(angle.cos(), self.cx), r.mul_add(-angle.sin(), self.cy))
    }

    /// Turn fraction at the middle of the wedge.
    #[must_use]
    pub fn mid(&self) -> f64 {
        self.sweep.mul_add(0.5, self.start)
    }

    fn path(&self) -> String {
        if self.sweep >= 1.0 {
            return format!(
                r#"<circle cx="{}" cy="{}" r="{}""#,
                coord(self.cx),
                coord(self.cy),
                coord(self.radius)
            );
        }

        let (x1, y1) = self.point_at(self.radius, self.start);
        let (x2, y2) = self.point_at(self.radius, self.start + self.sweep);
        let large_arc = u8::from(self.sweep > 0.5);
        format!(
            r#"<path d="M{},{} L{},{} A{r},{r} 0 {large_arc} 0 {},{} Z""#,
            coord(self.cx),
            coord(self.cy),
            coord(x1),
            coord(y1),
            coord(x2),
            coord(y2),
            r = coord(self.radius),
        )
    }
}

impl SvgElement for PieSlice {
    fn render(&self) -> String {
        let color = self.color.to_css();
        let escaped_label = html_escape(&self.label);
        format!(
            r##"{} fill="{color}" stroke="#ffffff" stroke-width="1">
    <title>{escaped_label}</title>
</{}>"##,
            self.path(),
            if self.sweep >= 1.0 { "circle" } else { "path" }
        )
    }
}

/// Free-standing text label.
#[derive(Debug, Clone)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: TextAnchor,
    pub color: ChartColor,
    pub font_size: f64,
}

impl Label {
    #[must_use]
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            anchor: TextAnchor::Start,
            color: ChartColor::text(),
            font_size: 12.0,
        }
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }
}

impl SvgElement for Label {
    fn render(&self) -> String {
        let mut output = String::new();
        let _ = write!(
            output,
            r#"<text x="{}" y="{}" text-anchor="{}" fill="{}" font-size="{}" dominant-baseline="middle">{}</text>"#,
            coord(self.x),
            coord(self.y),
            self.anchor,
            self.color.to_css(),
            self.font_size,
            html_escape(&self.text)
        );
        output
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
