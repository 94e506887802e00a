//! Tests for SVG text formatting.

use super::*;

mod html_escape_tests {
    use super::*;

    #[test]
    fn escapes_ampersand() {
        assert_eq!(html_escape("A & B"), "A &amp; B");
    }

    #[test]
    fn escapes_angle_brackets() {
        assert_eq!(html_escape("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn escapes_quotes() {
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(html_escape("'single'"), "&#39;single&#39;");
    }

    #[test]
    fn language_names_pass_through() {
        assert_eq!(html_escape("C++ 1.20k"), "C++ 1.20k");
        assert_eq!(html_escape("F# 12"), "F# 12");
    }
}

mod coord_tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert!((coord(1.23456) - 1.23).abs() < f64::EPSILON);
        assert!((coord(10.0) - 10.0).abs() < f64::EPSILON);
    }
}
