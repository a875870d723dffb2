//! # Input Module
//!
//! Parsing of raw form input and the single zero-fallback coercion policy.
//!
//! ## Coercion Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   typing "1"  →  "12"  →  "12."  →  "12.5"      kept as raw strings     │
//! │                                    │                                    │
//! │                                 commit                                  │
//! │                                    │                                    │
//! │                                    ▼                                    │
//! │                         decimal_or_zero("12.5") = 12.5                  │
//! │                         decimal_or_zero("")     = 0.0                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Parsing reads the leading numeric prefix after optional whitespace, so
//! `"12.5 lbs"` is 12.5 and `"abc"` is empty. Non-finite results count as
//! empty.

use std::sync::LazyLock;

use regex::Regex;

static DECIMAL_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").expect("valid decimal regex")
});
static INTEGER_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid integer regex"));

// =============================================================================
// Parsing
// =============================================================================

/// Parses a decimal, or `None` for empty / non-numeric input.
///
/// ## Example
/// ```rust
/// use storedesk_core::input::parse_decimal;
///
/// assert_eq!(parse_decimal("2.80"), Some(2.8));
/// assert_eq!(parse_decimal(" .5"), Some(0.5));
/// assert_eq!(parse_decimal(""), None);
/// ```
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let caps = DECIMAL_PREFIX_RE.captures(raw)?;
    caps.get(1)?
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Parses an integer, truncating anything after the digits (`"50.9"` → 50).
///
/// Digit runs beyond the `i64` range saturate to `i64::MAX` / `i64::MIN`.
pub fn parse_integer(raw: &str) -> Option<i64> {
    let caps = INTEGER_PREFIX_RE.captures(raw)?;
    let digits = caps.get(1)?.as_str();
    match digits.parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) if digits.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

// =============================================================================
// Commit-time Coercion
// =============================================================================

/// Decimal with unparsable input treated as 0.
#[inline]
pub fn decimal_or_zero(raw: &str) -> f64 {
    parse_decimal(raw).unwrap_or(0.0)
}

/// Integer with unparsable input treated as 0.
#[inline]
pub fn integer_or_zero(raw: &str) -> i64 {
    parse_integer(raw).unwrap_or(0)
}

// =============================================================================
// Rendering
// =============================================================================

/// Renders a number back into an input value in its shortest form
/// (`7.0` → `"7"`, `3.75` → `"3.75"`).
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // also folds -0.0
        return "0".to_string();
    }
    value.to_string()
}

/// Renders an optional measurement; `None` becomes the empty input.
pub fn format_optional(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_default()
}
