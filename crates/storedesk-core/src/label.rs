//! Combination labels: building `7.5" x 3.75" (inch)` from a size, and
//! reading the two numbers back out as default shipping dimensions.

use std::sync::LazyLock;

use regex::Regex;

use crate::input::format_number;
use crate::types::SizeUnit;

static DIMENSIONS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(\d+(?:\.\d+)?)\s*["']?\s*x\s*(\d+(?:\.\d+)?)"#)
        .expect("valid dimensions regex")
});

/// Two numbers read from a combination label, in label order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelDimensions {
    pub length: f64,
    pub width: f64,
}

/// Formats the display label of a size variant.
pub fn size_label(width: f64, height: f64, unit: SizeUnit) -> String {
    format!(
        "{}\" x {}\" ({})",
        format_number(width),
        format_number(height),
        unit
    )
}

/// Extracts `{number}" x {number}"` from free text.
///
/// ## Example
/// ```rust
/// use storedesk_core::label::parse_dimensions;
///
/// let dims = parse_dimensions("7\" x 5\" (inch)").unwrap();
/// assert_eq!((dims.length, dims.width), (7.0, 5.0));
/// assert!(parse_dimensions("Large").is_none());
/// ```
pub fn parse_dimensions(label: &str) -> Option<LabelDimensions> {
    let caps = DIMENSIONS_RE.captures(label)?;
    let length = caps.get(1)?.as_str().parse().ok()?;
    let width = caps.get(2)?.as_str().parse().ok()?;
    Some(LabelDimensions { length, width })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_label() {
        assert_eq!(size_label(7.5, 3.75, SizeUnit::Inch), "7.5\" x 3.75\" (inch)");
        assert_eq!(size_label(20.0, 10.0, SizeUnit::Cm), "20\" x 10\" (cm)");
    }

    #[test]
    fn test_parse_dimensions_variants() {
        let dims = parse_dimensions("7.5\" x 3.75\" (inch)").unwrap();
        assert_eq!(dims, LabelDimensions { length: 7.5, width: 3.75 });

        let dims = parse_dimensions("3' X 2'").unwrap();
        assert_eq!(dims, LabelDimensions { length: 3.0, width: 2.0 });

        let dims = parse_dimensions("12x8").unwrap();
        assert_eq!(dims, LabelDimensions { length: 12.0, width: 8.0 });
    }

    #[test]
    fn test_parse_dimensions_no_match() {
        assert!(parse_dimensions("").is_none());
        assert!(parse_dimensions("Red / Matte").is_none());
        assert!(parse_dimensions("7\" by 5\"").is_none());
    }

    #[test]
    fn test_label_roundtrips_through_parser() {
        let label = size_label(4.25, 6.0, SizeUnit::Inch);
        let dims = parse_dimensions(&label).unwrap();
        assert_eq!((dims.length, dims.width), (4.25, 6.0));
    }
}
