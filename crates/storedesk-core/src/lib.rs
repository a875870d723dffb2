//! # storedesk-core: Pure Variant Pricing Logic for Storedesk
//!
//! This crate is the pricing-tier model behind the Storedesk admin dashboard.
//! It owns the data shape and arithmetic of size-based product variants and
//! their quantity-discount ladders, as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storedesk Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Admin Dashboard (front-end)                    │   │
//! │  │    Variant table ──► Tier rows ──► Edit / Save / Delete         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 storedesk-editor (UI state)                     │   │
//! │  │    TierEditor (edit focus), VariantFormSession, config          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storedesk-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │  types   │ │  tiers   │ │   form   │ │ input / label    │  │   │
//! │  │   │ Variant  │ │ add/del  │ │ new size │ │ coercion, dims   │  │   │
//! │  │   │ Tier     │ │ commit   │ │ variant  │ │ money, policy    │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO RENDERING • PURE FUNCTIONS      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Variant, PricingTier, TierRef, ...)
//! - [`draft`] - Uncommitted, string-backed copy of a tier being edited
//! - [`tiers`] - Tier operations over a variant list
//! - [`form`] - Standalone form for creating a size variant
//! - [`money`] - Discount and line-total arithmetic, display rounding
//! - [`input`] - Raw input parsing and the zero-fallback coercion policy
//! - [`label`] - Combination label formatting and dimension parsing
//! - [`validation`] - Optional strict tier validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: operations take `&[Variant]` and return a
//!    [`VariantChange`]; nothing is mutated in place
//! 2. **Derived Final Price**: `final = base - base * discount / 100`, never
//!    entered directly
//! 3. **At Least One Tier**: every size variant keeps one or more tiers
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use storedesk_core::{tiers, PricingTier, SizeUnit, SizeVariant, TierRef, TierRules, Variant};
//!
//! let variant = SizeVariant::new(7.0, 5.0, SizeUnit::Inch, vec![PricingTier::new(50, 5.0)]);
//! let variants = vec![Variant::Size(variant)];
//!
//! let mut draft = tiers::begin_edit(&variants, TierRef::new(0, 0)).unwrap();
//! draft.set_raw("discount", "10").unwrap();
//! assert!((draft.final_price() - 4.5).abs() < 1e-9);
//!
//! let change = tiers::commit_edit(&variants, TierRef::new(0, 0), &draft, &TierRules::default()).unwrap();
//! let tier = &change.variant.as_size().unwrap().pricing_tiers[0];
//! assert_eq!(tier.discount, 10.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod draft;
pub mod error;
pub mod form;
pub mod input;
pub mod label;
pub mod money;
pub mod tiers;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use draft::{TierDraft, TierField};
pub use error::{CoreError, CoreResult, ValidationError};
pub use form::SizeVariantForm;
pub use tiers::TierRules;
pub use types::*;
pub use validation::TierPolicy;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantity of the tier seeded when a size variant is created.
pub const INITIAL_TIER_QUANTITY: i64 = 50;

/// Quantity increment between a tier and the one appended after it.
///
/// ## Business Reason
/// Wholesale print orders are quoted in batches of 50 pieces.
pub const TIER_QUANTITY_STEP: i64 = 50;

/// Upper bound of a percentage discount under the strict policy.
pub const MAX_DISCOUNT_PERCENT: i64 = 100;
