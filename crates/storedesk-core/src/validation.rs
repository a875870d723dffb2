//! # Validation Module
//!
//! Optional business-rule checks applied to a tier at commit time.
//!
//! ## Validation Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Tier Validation Policies                           │
//! │                                                                         │
//! │  Permissive (default)                                                  │
//! │  └── Accept whatever survives numeric coercion. Negative prices,       │
//! │      discounts above 100 and zero quantities are stored as entered.    │
//! │                                                                         │
//! │  Strict                                                                │
//! │  ├── discount within 0..=100                                           │
//! │  ├── base price >= 0                                                   │
//! │  ├── quantity > 0                                                      │
//! │  └── length, width, height, weight >= 0 when present                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storedesk_core::validation::{validate_tier, TierPolicy};
//! use storedesk_core::PricingTier;
//!
//! let tier = PricingTier::new(50, 5.0).with_discount(120.0);
//! assert!(validate_tier(&tier, TierPolicy::Permissive).is_ok());
//! assert!(validate_tier(&tier, TierPolicy::Strict).is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::PricingTier;
use crate::MAX_DISCOUNT_PERCENT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Policy
// =============================================================================

/// How much checking a committed tier gets beyond numeric coercion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum TierPolicy {
    #[default]
    Permissive,
    Strict,
}

impl fmt::Display for TierPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TierPolicy::Permissive => write!(f, "permissive"),
            TierPolicy::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for TierPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "permissive" => Ok(TierPolicy::Permissive),
            "strict" => Ok(TierPolicy::Strict),
            _ => Err(ValidationError::NotAllowed {
                field: "tier policy".to_string(),
                allowed: vec!["permissive".to_string(), "strict".to_string()],
            }),
        }
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a percentage discount.
///
/// ## Rules
/// - Must be between 0 and 100 inclusive
pub fn validate_discount(discount: f64) -> ValidationResult<()> {
    if !(0.0..=MAX_DISCOUNT_PERCENT as f64).contains(&discount) {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: MAX_DISCOUNT_PERCENT,
        });
    }

    Ok(())
}

/// Validates a base price.
///
/// ## Rules
/// - Must be non-negative (zero is allowed for free samples)
pub fn validate_base_price(price: f64) -> ValidationResult<()> {
    if price < 0.0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "base price".to_string(),
        });
    }

    Ok(())
}

/// Validates a tier's minimum order quantity.
pub fn validate_tier_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates an optional shipping measurement.
pub fn validate_measurement(field: &str, value: Option<f64>) -> ValidationResult<()> {
    match value {
        Some(v) if v < 0.0 => Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
        }),
        _ => Ok(()),
    }
}

// =============================================================================
// Tier Validator
// =============================================================================

/// Checks a coerced tier against the policy.
pub fn validate_tier(tier: &PricingTier, policy: TierPolicy) -> ValidationResult<()> {
    if policy == TierPolicy::Permissive {
        return Ok(());
    }

    validate_tier_quantity(tier.quantity)?;
    validate_base_price(tier.base_price)?;
    validate_discount(tier.discount)?;
    validate_measurement("length", tier.length)?;
    validate_measurement("width", tier.width)?;
    validate_measurement("height", tier.height)?;
    validate_measurement("weight", tier.weight)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_discount() {
        assert!(validate_discount(0.0).is_ok());
        assert!(validate_discount(12.5).is_ok());
        assert!(validate_discount(100.0).is_ok());

        assert!(validate_discount(-0.1).is_err());
        assert!(validate_discount(100.5).is_err());
    }

    #[test]
    fn test_validate_base_price() {
        assert!(validate_base_price(0.0).is_ok());
        assert!(validate_base_price(2.8).is_ok());
        assert!(validate_base_price(-1.0).is_err());
    }

    #[test]
    fn test_validate_tier_quantity() {
        assert!(validate_tier_quantity(1).is_ok());
        assert!(validate_tier_quantity(0).is_err());
        assert!(validate_tier_quantity(-50).is_err());
    }

    #[test]
    fn test_permissive_accepts_anything() {
        let tier = PricingTier {
            quantity: -5,
            base_price: -2.0,
            discount: 150.0,
            final_price: 1.0,
            length: Some(-1.0),
            width: None,
            height: None,
            weight: None,
        };
        assert!(validate_tier(&tier, TierPolicy::Permissive).is_ok());
        assert!(validate_tier(&tier, TierPolicy::Strict).is_err());
    }

    #[test]
    fn test_strict_reports_first_failure() {
        let tier = PricingTier::new(50, 5.0).with_weight(-1.0);
        let err = validate_tier(&tier, TierPolicy::Strict).unwrap_err();
        assert_eq!(err.to_string(), "weight must not be negative");

        let ok = PricingTier::new(50, 5.0)
            .with_discount(25.0)
            .with_dimensions(7.0, 5.0, 0.0)
            .with_weight(0.0);
        assert!(validate_tier(&ok, TierPolicy::Strict).is_ok());
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("STRICT".parse::<TierPolicy>().unwrap(), TierPolicy::Strict);
        assert_eq!(" permissive ".parse::<TierPolicy>().unwrap(), TierPolicy::Permissive);
        assert!("lenient".parse::<TierPolicy>().is_err());
        assert_eq!(TierPolicy::default(), TierPolicy::Permissive);
    }
}
