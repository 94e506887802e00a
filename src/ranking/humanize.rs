//! Compact count formatting for chart labels.

const UNITS: [&str; 8] = ["", "k", "M", "G", "T", "P", "E", "Z"];

/// Counts up to 99 print as integers; larger ones use three significant
/// digits and an SI suffix (`100`, `1.00k`, `12.3k`, `2.50M`).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn humanize_count(count: u64) -> String {
    if count <= 99 {
        return count.to_string();
    }
    format_si(count as f64)
}

fn format_si(value: f64) -> String {
    let mut num = value;
    for unit in UNITS {
        if num.abs() < 999.5 {
            if num.abs() < 99.95 {
                if num.abs() < 9.995 {
                    return format!("{num:1.2}{unit}");
                }
                return format!("{num:2.1}{unit}");
            }
            return format!("{num:3.0}{unit}");
        }
        num /= 1000.0;
    }
    format!("{num:3.1}Y")
}

/// `<label> <humanized count>`, the text shown next to a bar or pie slice.
#[must_use]
pub fn display_label(label: &str, count: u64) -> String {
    format!("{label} {}", humanize_count(count))
}
