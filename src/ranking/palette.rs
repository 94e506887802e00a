/// Ten-color categorical palette used for labels without a taxonomy color.
pub const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Color of the overflow ("Other") row.
pub const OTHER_COLOR: &str = "#000000";

/// Palette entry for the `index`-th generated color, wrapping after ten.
#[must_use]
pub const fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}
