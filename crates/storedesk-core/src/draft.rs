//! # Tier Drafts
//!
//! A [`TierDraft`] is the in-progress, uncommitted copy of a pricing tier.
//!
//! ## Draft Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PricingTier ──from_tier──► TierDraft ──set(field, raw)──► TierDraft   │
//! │  (numbers)                  (raw strings,             (final price     │
//! │                              final price)              refreshed)      │
//! │                                  │                                      │
//! │                              to_tier()                                  │
//! │                                  ▼                                      │
//! │                    PricingTier (every field coerced, 0 fallback)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Final Price Rule
//! The final price is a pure function of base price and discount. It is
//! refreshed after *every* field change instead of on a list of trigger
//! fields, so a field added later can never leave it stale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreResult, ValidationError};
use crate::input::{decimal_or_zero, format_number, format_optional, integer_or_zero};
use crate::money;
use crate::types::PricingTier;

// =============================================================================
// Tier Field
// =============================================================================

/// An editable field of a tier. `finalPrice` is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum TierField {
    Quantity,
    BasePrice,
    Discount,
    Length,
    Width,
    Height,
    Weight,
}

impl TierField {
    pub const ALL: [TierField; 7] = [
        TierField::Quantity,
        TierField::BasePrice,
        TierField::Discount,
        TierField::Length,
        TierField::Width,
        TierField::Height,
        TierField::Weight,
    ];

    /// Front-end field name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TierField::Quantity => "quantity",
            TierField::BasePrice => "basePrice",
            TierField::Discount => "discount",
            TierField::Length => "length",
            TierField::Width => "width",
            TierField::Height => "height",
            TierField::Weight => "weight",
        }
    }
}

impl fmt::Display for TierField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TierField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TierField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "field".to_string(),
                allowed: TierField::ALL.iter().map(|f| f.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Tier Draft
// =============================================================================

/// Editable copy of a tier.
///
/// Numeric fields stay strings so partial input such as `""` or `"12."`
/// survives until commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TierDraft {
    pub quantity: String,
    pub base_price: String,
    pub discount: String,
    pub length: String,
    pub width: String,
    pub height: String,
    pub weight: String,
    /// Read-only preview, refreshed on every change.
    final_price: f64,
}

impl TierDraft {
    /// Copies a committed tier into a draft.
    pub fn from_tier(tier: &PricingTier) -> Self {
        let mut draft = TierDraft {
            quantity: tier.quantity.to_string(),
            base_price: format_number(tier.base_price),
            discount: format_number(tier.discount),
            length: format_optional(tier.length),
            width: format_optional(tier.width),
            height: format_optional(tier.height),
            weight: format_optional(tier.weight),
            final_price: tier.final_price,
        };
        draft.refresh_final_price();
        draft
    }

    /// Current raw value of a field.
    pub fn get(&self, field: TierField) -> &str {
        match field {
            TierField::Quantity => &self.quantity,
            TierField::BasePrice => &self.base_price,
            TierField::Discount => &self.discount,
            TierField::Length => &self.length,
            TierField::Width => &self.width,
            TierField::Height => &self.height,
            TierField::Weight => &self.weight,
        }
    }

    fn slot_mut(&mut self, field: TierField) -> &mut String {
        match field {
            TierField::Quantity => &mut self.quantity,
            TierField::BasePrice => &mut self.base_price,
            TierField::Discount => &mut self.discount,
            TierField::Length => &mut self.length,
            TierField::Width => &mut self.width,
            TierField::Height => &mut self.height,
            TierField::Weight => &mut self.weight,
        }
    }

    /// Stores a raw value and refreshes the final price.
    pub fn set(&mut self, field: TierField, raw: impl Into<String>) {
        *self.slot_mut(field) = raw.into();
        self.refresh_final_price();
    }

    /// Like [`TierDraft::set`] but takes the front-end field name.
    pub fn set_raw(&mut self, field_name: &str, raw: impl Into<String>) -> CoreResult<()> {
        let field: TierField = field_name.parse()?;
        self.set(field, raw);
        Ok(())
    }

    /// Final price preview (unparsable base price or discount count as 0).
    pub fn final_price(&self) -> f64 {
        self.final_price
    }

    fn refresh_final_price(&mut self) {
        self.final_price = money::discounted_price(
            decimal_or_zero(&self.base_price),
            decimal_or_zero(&self.discount),
        );
    }

    /// Coerces every field and rebuilds a committed tier.
    ///
    /// ## Example
    /// ```rust
    /// use storedesk_core::{PricingTier, TierDraft, TierField};
    ///
    /// let mut draft = TierDraft::from_tier(&PricingTier::new(50, 5.0));
    /// draft.set(TierField::Weight, "");
    /// draft.set(TierField::Quantity, "75.9");
    /// let tier = draft.to_tier();
    /// assert_eq!(tier.quantity, 75);
    /// assert_eq!(tier.weight, Some(0.0));
    /// ```
    pub fn to_tier(&self) -> PricingTier {
        let base_price = decimal_or_zero(&self.base_price);
        let discount = decimal_or_zero(&self.discount);
        PricingTier {
            quantity: integer_or_zero(&self.quantity),
            base_price,
            discount,
            final_price: money::discounted_price(base_price, discount),
            length: Some(decimal_or_zero(&self.length)),
            width: Some(decimal_or_zero(&self.width)),
            height: Some(decimal_or_zero(&self.height)),
            weight: Some(decimal_or_zero(&self.weight)),
        }
    }

    /// Parsed base price, 0 when empty.
    pub(crate) fn base_price_value(&self) -> f64 {
        decimal_or_zero(&self.base_price)
    }

    /// Parsed quantity, 0 when empty.
    pub(crate) fn quantity_value(&self) -> i64 {
        integer_or_zero(&self.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
