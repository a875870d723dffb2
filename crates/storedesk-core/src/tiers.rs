//! # Tier Operations
//!
//! Read, edit, append and delete operations on the pricing tiers of a
//! variant collection.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  &[Variant] ──► operation(TierRef / index) ──► VariantChange            │
//! │                                                { index, variant }       │
//! │                                                                         │
//! │  • The input slice is never mutated                                    │
//! │  • A change always replaces exactly one variant                        │
//! │  • Every returned size variant keeps at least one tier                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The edit focus is not stored here: callers pass the [`TierRef`] they are
//! editing and keep the [`TierDraft`] themselves.

use crate::draft::TierDraft;
use crate::error::{CoreError, CoreResult};
use crate::label;
use crate::types::{PricingTier, SizeVariant, TierRef, Variant, VariantChange};
use crate::validation::{self, TierPolicy};
use crate::{INITIAL_TIER_QUANTITY, TIER_QUANTITY_STEP};

// =============================================================================
// Rules
// =============================================================================

/// Tunable numbers of the tier model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierRules {
    /// Added to the last tier's quantity when appending.
    pub quantity_step: i64,
    /// Quantity of the tier seeded on a new size variant.
    pub initial_quantity: i64,
    /// Checks applied on commit.
    pub policy: TierPolicy,
}

impl Default for TierRules {
    fn default() -> Self {
        TierRules {
            quantity_step: TIER_QUANTITY_STEP,
            initial_quantity: INITIAL_TIER_QUANTITY,
            policy: TierPolicy::Permissive,
        }
    }
}

// =============================================================================
// Lookups
// =============================================================================

/// The size variant at `index`.
pub fn size_variant_at(variants: &[Variant], index: usize) -> CoreResult<&SizeVariant> {
    match variants.get(index) {
        Some(Variant::Size(v)) => Ok(v),
        Some(Variant::Attribute(_)) => Err(CoreError::NotSizeVariant { index }),
        None => Err(CoreError::VariantNotFound { index }),
    }
}

/// The tier at `at`.
pub fn tier_at(variants: &[Variant], at: TierRef) -> CoreResult<&PricingTier> {
    size_variant_at(variants, at.variant_index)?
        .pricing_tiers
        .get(at.tier_index)
        .ok_or(CoreError::TierNotFound {
            variant_index: at.variant_index,
            tier_index: at.tier_index,
        })
}

// =============================================================================
// Edit Cycle
// =============================================================================

/// Opens a draft copy of the tier at `at`.
pub fn begin_edit(variants: &[Variant], at: TierRef) -> CoreResult<TierDraft> {
    tier_at(variants, at).map(TierDraft::from_tier)
}

/// Coerces `draft` and writes it over the tier at `at`.
///
/// Only the strict policy can refuse; the permissive default stores whatever
/// coercion produced.
pub fn commit_edit(
    variants: &[Variant],
    at: TierRef,
    draft: &TierDraft,
    rules: &TierRules,
) -> CoreResult<VariantChange> {
    let variant = size_variant_at(variants, at.variant_index)?;
    if at.tier_index >= variant.pricing_tiers.len() {
        return Err(CoreError::TierNotFound {
            variant_index: at.variant_index,
            tier_index: at.tier_index,
        });
    }

    let tier = draft.to_tier();
    validation::validate_tier(&tier, rules.policy)?;

    let mut updated = variant.clone();
    updated.pricing_tiers[at.tier_index] = tier;
    Ok(VariantChange::new(at.variant_index, updated))
}

// =============================================================================
// Structure Changes
// =============================================================================

/// Removes the tier at `at`, keeping the others in order.
///
/// ## Errors
/// [`CoreError::LastTier`] when the variant has a single tier.
pub fn delete_tier(variants: &[Variant], at: TierRef) -> CoreResult<VariantChange> {
    let variant = size_variant_at(variants, at.variant_index)?;

    if variant.pricing_tiers.len() <= 1 {
        return Err(CoreError::LastTier);
    }
    if at.tier_index >= variant.pricing_tiers.len() {
        return Err(CoreError::TierNotFound {
            variant_index: at.variant_index,
            tier_index: at.tier_index,
        });
    }

    let mut updated = variant.clone();
    updated.pricing_tiers.remove(at.tier_index);
    Ok(VariantChange::new(at.variant_index, updated))
}

/// Builds the tier that [`add_tier`] would append to `variant`.
pub fn next_tier(variant: &SizeVariant, rules: &TierRules) -> Option<PricingTier> {
    let last = variant.last_tier()?;
    let quantity = last.quantity.saturating_add(rules.quantity_step);
    let mut tier = PricingTier::new(quantity, last.base_price);

    if let Some(dims) = label::parse_dimensions(&variant.combination) {
        tier.length = Some(dims.length);
        tier.width = Some(dims.width);
    }

    Some(tier)
}

/// Appends a breakpoint after the last tier.
///
/// ## New Tier
/// ```text
/// last tier            { qty: 150, base: 4.00, disc: 10, final: 3.60 }
///                                      │
///                                      ▼
/// appended tier        { qty: 200, base: 4.00, disc: 0,  final: 4.00,
///                        length/width ← combination label, height/weight empty }
/// ```
pub fn add_tier(
    variants: &[Variant],
    variant_index: usize,
    rules: &TierRules,
) -> CoreResult<VariantChange> {
    let variant = size_variant_at(variants, variant_index)?;
    let tier = next_tier(variant, rules).ok_or(CoreError::TierNotFound {
        variant_index,
        tier_index: 0,
    })?;

    let mut updated = variant.clone();
    updated.pricing_tiers.push(tier);
    Ok(VariantChange::new(variant_index, updated))
}

// =============================================================================
// Unit Tests
// =============================================================================
