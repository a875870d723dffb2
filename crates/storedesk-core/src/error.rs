//! # Error Types
//!
//! Domain-specific error types for storedesk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storedesk-core errors (this file)                                     │
//! │  ├── CoreError        - Refusals and lookup failures                   │
//! │  └── ValidationError  - Strict-policy and field-name failures          │
//! │                                                                         │
//! │  storedesk-editor errors (separate crate)                              │
//! │  └── EditorError      - Focus, config and I/O failures                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → EditorError → Notifier            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Refusal messages are the exact text shown to the merchant
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing-model errors.
///
/// Only [`CoreError::LastTier`] is an expected, user-facing refusal. The
/// lookup variants mean the caller passed an index that no longer exists.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Deleting the sole remaining tier of a variant.
    ///
    /// ## User Workflow
    /// ```text
    /// Variant with tiers: [50 pcs]
    ///      │
    ///      ▼
    /// delete tier 0
    ///      │
    ///      ▼
    /// LastTier → "At least one pricing tier is required" (state unchanged)
    /// ```
    #[error("At least one pricing tier is required")]
    LastTier,

    /// No variant at this position in the collection.
    #[error("Variant not found at index {index}")]
    VariantNotFound { index: usize },

    /// The variant exists but has no tier at this position.
    #[error("Pricing tier {tier_index} not found on variant {variant_index}")]
    TierNotFound {
        variant_index: usize,
        tier_index: usize,
    },

    /// The size form has no tier at this position.
    #[error("Pricing tier {tier_index} not found on the size form")]
    FormTierNotFound { tier_index: usize },

    /// Tier operations only apply to size variants.
    #[error("Variant at index {index} is not a size variant")]
    NotSizeVariant { index: usize },

    /// Size form submitted without width or height.
    #[error("Please enter both width and height")]
    MissingDimensions,

    /// Size form submitted with a zero or negative first base price.
    #[error("Please enter a valid base price")]
    InvalidBasePrice,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Returns true for refusals the merchant can fix by changing input,
    /// as opposed to stale indices coming from the caller.
    pub fn is_refusal(&self) -> bool {
        matches!(
            self,
            CoreError::LastTier
                | CoreError::MissingDimensions
                | CoreError::InvalidBasePrice
                | CoreError::Validation(_)
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or more.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refusal_messages() {
        assert_eq!(
            CoreError::LastTier.to_string(),
            "At least one pricing tier is required"
        );
        assert_eq!(
            CoreError::MissingDimensions.to_string(),
            "Please enter both width and height"
        );
        assert_eq!(
            CoreError::InvalidBasePrice.to_string(),
            "Please enter a valid base price"
        );
    }

    #[test]
    fn test_lookup_messages() {
        let err = CoreError::TierNotFound {
            variant_index: 2,
            tier_index: 4,
        };
        assert_eq!(err.to_string(), "Pricing tier 4 not found on variant 2");
        assert!(!err.is_refusal());
        assert!(CoreError::LastTier.is_refusal());
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 100,
        };
        assert_eq!(
            validation_err.to_string(),
            "discount must be between 0 and 100"
        );
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert!(core_err.is_refusal());
    }
}
