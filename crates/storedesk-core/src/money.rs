//! # Money Module
//!
//! Discount and line-total arithmetic for pricing tiers.
//!
//! ## Precision
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  STORED vs DISPLAYED                                                    │
//! │                                                                         │
//! │  Stored / derived values keep full f64 precision:                      │
//! │    base 2.80, discount 12.5%  →  final 2.45                            │
//! │    final 2.45 × 150 pcs       →  367.49999999999994                    │
//! │                                                                         │
//! │  Rounding to 2 places happens ONLY when rendering:                     │
//! │    format_amount(367.49999999999994)  →  "367.50"                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storedesk_core::money::{discounted_price, format_amount, line_total};
//!
//! let final_price = discounted_price(5.0, 10.0);   // 4.5
//! let total = line_total(final_price, 100);         // 450.0
//! assert_eq!(format_amount(total), "450.00");
//! ```

use crate::types::PricingTier;

// =============================================================================
// Arithmetic
// =============================================================================

/// Applies a percentage discount: `base - base * discount / 100`.
///
/// No clamping: a discount above 100 yields a negative price and a negative
/// discount yields a markup.
#[inline]
pub fn discounted_price(base_price: f64, discount_percent: f64) -> f64 {
    base_price - (base_price * discount_percent) / 100.0
}

/// Multiplies a per-piece price by an order quantity.
#[inline]
pub fn line_total(final_price: f64, quantity: i64) -> f64 {
    final_price * quantity as f64
}

/// Line total of a tier rendered for display, e.g. `"225.00"`.
///
/// ## Example
/// ```rust
/// use storedesk_core::{money, PricingTier};
///
/// let tier = PricingTier::new(100, 2.25);
/// assert_eq!(money::tier_line_total(&tier), "225.00");
/// ```
pub fn tier_line_total(tier: &PricingTier) -> String {
    format_amount(tier.line_total())
}

// =============================================================================
// Display
// =============================================================================

/// Rounds to two decimal places for display.
///
/// Negative zero renders as `"0.00"`.
pub fn format_amount(value: f64) -> String {
    let rounded = format!("{:.2}", value);
    if rounded == "-0.00" {
        "0.00".to_string()
    } else {
        rounded
    }
}

/// Display amount prefixed with the store's currency symbol, `"$ 4.50"`.
pub fn format_money(symbol: &str, value: f64) -> String {
    format!("{} {}", symbol, format_amount(value))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discounted_price() {
        assert!((discounted_price(5.0, 10.0) - 4.5).abs() < 1e-9);
        assert!((discounted_price(5.0, 0.0) - 5.0).abs() < 1e-9);
        assert!((discounted_price(2.8, 12.5) - 2.45).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_discount_is_not_clamped() {
        assert!((discounted_price(10.0, 120.0) - -2.0).abs() < 1e-9);
        assert!((discounted_price(10.0, -10.0) - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_line_total_scenario() {
        let tier = PricingTier {
            quantity: 100,
            base_price: 2.25,
            discount: 0.0,
            final_price: 2.25,
            length: None,
            width: None,
            height: None,
            weight: None,
        };
        assert!((tier.line_total() - 225.0).abs() < 1e-9);
        assert_eq!(tier_line_total(&tier), "225.00");
    }

    #[test]
    fn test_display_rounds_but_value_keeps_precision() {
        let total = line_total(discounted_price(2.8, 12.5), 150);
        assert!((total - 367.5).abs() < 1e-9);
        assert_eq!(format_amount(total), "367.50");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(-0.0), "0.00");
        assert_eq!(format_amount(4.5), "4.50");
        assert_eq!(format_amount(-2.0), "-2.00");
        assert_eq!(format_money("$", 4.5), "$ 4.50");
    }
}
