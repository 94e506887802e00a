//! Tests for SVG styling primitives.

use super::*;

mod chart_color_tests {
    use super::*;

    #[test]
    fn hex_format() {
        let color = ChartColor::hex("#22c55e");
        assert_eq!(color.to_css(), "#22c55e");
    }

    #[test]
    fn named_text_colors() {
        assert_eq!(ChartColor::text().to_css(), "#1e293b");
        assert_eq!(ChartColor::text_muted().to_css(), "#64748b");
    }
}

mod text_anchor_tests {
    use super::*;

    #[test]
    fn display_formats() {
        assert_eq!(format!("{}", TextAnchor::Start), "start");
        assert_eq!(format!("{}", TextAnchor::Middle), "middle");
        assert_eq!(format!("{}", TextAnchor::End), "end");
    }

    #[test]
    fn default_is_start() {
        assert!(matches!(TextAnchor::default(), TextAnchor::Start));
    }
}
