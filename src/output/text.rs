use std::fmt::Write;

use crate::error::Result;
use crate::ranking::{RankedRow, RankedView, humanize_count};

use super::ReportFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI escape codes
mod ansi {
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";

    /// 24-bit foreground color.
    pub fn rgb(r: u8, g: u8, b: u8) -> String {
        format!("\x1b[38;2;{r};{g};{b}m")
    }
}

/// Plain-text table, largest language first.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn swatch(&self, color: &str) -> String {
        if !self.use_colors {
            return String::new();
        }
        match parse_hex(color) {
            Some((r, g, b)) => format!("{}\u{25a0}{} ", ansi::rgb(r, g, b), ansi::RESET),
            None => "  ".to_string(),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn format_row(&self, row: &RankedRow, total: u64, width: usize, output: &mut String) {
        let share = if total == 0 {
            0.0
        } else {
            row.count as f64 * 100.0 / total as f64
        };
        let _ = writeln!(
            output,
            "{}{:<width$}  {:>6}  {:>5.1}%",
            self.swatch(&row.color),
            row.label,
            humanize_count(row.count),
            share
        );
    }
}

/// `#rrggbb` (or `#rgb`) to components.
fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#').filter(|h| h.is_ascii())?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        3 => {
            let expand = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
            Some((expand(0)?, expand(1)?, expand(2)?))
        }
        _ => None,
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, view: &RankedView) -> Result<String> {
        let mut output = String::new();

        if view.is_empty() {
            output.push_str("No language data\n");
            return Ok(output);
        }

        let width = view
            .iter_with_other()
            .map(|r| r.label.chars().count())
            .max()
            .unwrap_or(0);

        for row in view.rows.iter().rev() {
            self.format_row(row, view.total, width, &mut output);
        }
        if let Some(other) = &view.other {
            if self.use_colors {
                output.push_str(ansi::DIM);
            }
            self.format_row(other, view.total, width, &mut output);
            if self.use_colors {
                output.push_str(ansi::RESET);
            }
        }

        output.push('\n');
        if self.use_colors {
            let _ = writeln!(output, "{}{}{}", ansi::BOLD, view.title(), ansi::RESET);
        } else {
            let _ = writeln!(output, "{}", view.title());
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
