//! Composite chart types: horizontal bar chart and pie chart.

use super::builder::SvgBuilder;
use super::data::DataPoint;
use super::element::{Bar, Label, PieSlice};
use super::style::{ChartColor, TextAnchor};

/// How bar lengths relate to values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BarScale {
    #[default]
    Linear,
    /// Length proportional to `ln(1 + value)`, so small counts stay visible
    /// next to very large ones.
    Log,
}

impl BarScale {
    fn fraction(self, value: f64, max: f64) -> f64 {
        match self {
            Self::Linear => value / max,
            Self::Log => value.max(0.0).ln_1p() / max.ln_1p(),
        }
    }
}

/// Horizontal bar chart, one bar per data point.
///
/// Data is given smallest first; the last point is drawn at the top.
#[derive(Debug)]
pub struct HorizontalBarChart {
    pub title: String,
    pub data: Vec<DataPoint>,
    pub width: f64,
    pub height: f64,
    pub padding_left: f64,
    pub padding_right: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
    pub bar_height: f64,
    pub bar_gap: f64,
    pub bar_color: ChartColor,
    pub scale: BarScale,
}

impl Default for HorizontalBarChart {
    fn default() -> Self {
        Self {
            title: String::new(),
            data: Vec::new(),
            width: 640.0,
            height: 78.0, // one bar: padding_top + bar_height + bar_gap + padding_bottom
            padding_left: 180.0,
            padding_right: 20.0,
            padding_top: 36.0,
            padding_bottom: 10.0,
            bar_height: 24.0,
            bar_gap: 8.0,
            bar_color: ChartColor::primary(),
            scale: BarScale::Linear,
        }
    }
}

impl HorizontalBarChart {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(title: impl Into<String>, data: Vec<DataPoint>) -> Self {
        let defaults = Self::default();
        let data_len = data.len().max(1);
        let height = (defaults.bar_height + defaults.bar_gap).mul_add(
            data_len as f64,
            defaults.padding_top + defaults.padding_bottom,
        );

        Self {
            title: title.into(),
            data,
            height,
            ..defaults
        }
    }

    #[must_use]
    pub const fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.bar_color = color;
        self
    }

    #[must_use]
    pub const fn with_scale(mut self, scale: BarScale) -> Self {
        self.scale = scale;
        self
    }

    /// Render as a standalone SVG document.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn render(&self) -> String {
        let mut svg = SvgBuilder::new(self.width, self.height)
            .with_title(&self.title)
            .push_element(
                &Label::new(self.width / 2.0, self.padding_top / 2.0, &self.title)
                    .with_anchor(TextAnchor::Middle)
                    .with_font_size(14.0),
            );

        if self.data.is_empty() {
            return svg
                .push_element(
                    &Label::new(self.width / 2.0, self.height / 2.0, "No language data")
                        .with_anchor(TextAnchor::Middle)
                        .with_color(ChartColor::text_muted()),
                )
                .build();
        }

        let chart_width = self.width - self.padding_left - self.padding_right;
        let max_value = self
            .data
            .iter()
            .map(|d| d.value)
            .fold(0.0_f64, f64::max)
            .max(1.0);

        for (i, point) in self.data.iter().rev().enumerate() {
            let y = (self.bar_height + self.bar_gap).mul_add(i as f64, self.padding_top);
            let bar_width = self.scale.fraction(point.value, max_value) * chart_width;

            svg = svg
                .push_element(&Bar {
                    x: self.padding_left,
                    y,
                    width: bar_width,
                    height: self.bar_height,
                    color: point.color.clone().unwrap_or_else(|| self.bar_color.clone()),
                    label: point.label.clone(),
                    value: point.value,
                })
                .push_element(
                    &Label::new(self.padding_left - 8.0, y + self.bar_height / 2.0, &point.label)
                        .with_anchor(TextAnchor::End),
                );
        }

        svg.build()
    }
}

/// Pie chart with one labelled wedge per data point.
///
/// Wedges start at 3 o'clock and run counter-clockwise in data order.
#[derive(Debug)]
pub struct PieChart {
    pub title: String,
    pub data: Vec<DataPoint>,
    pub size: f64,
    pub radius: f64,
    pub title_height: f64,
}

impl Default for PieChart {
    fn default() -> Self {
        Self {
            title: String::new(),
            data: Vec::new(),
            size: 640.0,
            radius: 200.0,
            title_height: 40.0,
        }
    }
}

impl PieChart {
    #[must_use]
    pub fn new(title: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self {
            title: title.into(),
            data,
            ..Default::default()
        }
    }

    /// Lay out wedges. Points with a non-positive value get no wedge.
    #[must_use]
    pub fn slices(&self) -> Vec<PieSlice> {
        let total: f64 = self.data.iter().map(|d| d.value.max(0.0)).sum();
        if total <= 0.0 {
            return Vec::new();
        }

        let cx = self.size / 2.0;
        let cy = self.title_height + (self.size - self.title_height) / 2.0;
        let mut start = 0.0;
        let mut slices = Vec::with_capacity(self.data.len());
        for (i, point) in self.data.iter().enumerate() {
            if point.value <= 0.0 {
                continue;
            }
            let sweep = point.value / total;
            slices.push(PieSlice {
                cx,
                cy,
                radius: self.radius,
                start,
                sweep,
                color: point
                    .color
                    .clone()
                    .unwrap_or_else(|| ChartColor::hex(crate::ranking::palette_color(i))),
                label: point.label.clone(),
            });
            start += sweep;
        }
        slices
    }

    /// Render as a standalone SVG document.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = SvgBuilder::new(self.size, self.size)
            .with_title(&self.title)
            .push_element(
                &Label::new(self.size / 2.0, self.title_height / 2.0, &self.title)
                    .with_anchor(TextAnchor::Middle)
                    .with_font_size(16.0),
            );

        let slices = self.slices();
        if slices.is_empty() {
            return svg
                .push_element(
                    &Label::new(self.size / 2.0, self.size / 2.0, "No language data")
                        .with_anchor(TextAnchor::Middle)
                        .with_color(ChartColor::text_muted()),
                )
                .build();
        }

        for slice in &slices {
            svg = svg.push_element(slice);
        }

        // Labels sit just outside the rim, anchored away from the centre.
        for slice in &slices {
            let mid = slice.mid();
            let (x, y) = slice.point_at(self.radius * 1.1, mid);
            let anchor = if (mid * std::f64::consts::TAU).cos() >= 0.0 {
                TextAnchor::Start
            } else {
                TextAnchor::End
            };
            svg = svg.push_element(&Label::new(x, y, &slice.label).with_anchor(anchor));
        }

        svg.build()
    }
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
