//! # Size Variant Form
//!
//! The standalone "Add New Size Variant" form: width, height, unit,
//! identifiers and a pricing ladder edited before the variant exists.
//!
//! ## Form Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SizeVariantForm::new(default_price)                                    │
//! │      │   one seeded tier { qty: 50, base: default_price }               │
//! │      ▼                                                                  │
//! │  set_dimensions("7.5", "3.75")  ──► empty tier length/width filled      │
//! │  add_tier / remove_tier / update_tier                                   │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  submit()  ──► SizeVariant { combination: 7.5" x 3.75" (inch), ... }    │
//! │      │                                                                  │
//! │      ├── width or height missing → MissingDimensions                   │
//! │      └── first base price <= 0   → InvalidBasePrice                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unlike [`crate::tiers::add_tier`], a tier appended here takes its shipping
//! length and width from the form's own width and height inputs.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::draft::{TierDraft, TierField};
use crate::error::{CoreError, CoreResult};
use crate::input::{format_number, integer_or_zero, parse_decimal};
use crate::label;
use crate::tiers::TierRules;
use crate::types::{PricingTier, SizeUnit, SizeVariant};
use crate::validation;

/// Raw, in-progress state of the size variant form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SizeVariantForm {
    /// Id of the variant being edited, `None` for a new one.
    pub id: Option<String>,
    pub width: String,
    pub height: String,
    pub unit: SizeUnit,
    pub image: String,
    pub sku: String,
    pub barcode: String,
    /// Stock count input.
    pub quantity: String,
    pub pricing_tiers: Vec<TierDraft>,
    default_price: f64,
}

impl SizeVariantForm {
    /// Empty form with one seeded tier priced at `default_price`.
    pub fn new(default_price: f64, rules: &TierRules) -> Self {
        let seed = PricingTier::new(rules.initial_quantity, default_price);
        SizeVariantForm {
            id: None,
            width: String::new(),
            height: String::new(),
            unit: SizeUnit::Inch,
            image: String::new(),
            sku: String::new(),
            barcode: String::new(),
            quantity: String::new(),
            pricing_tiers: vec![TierDraft::from_tier(&seed)],
            default_price,
        }
    }

    /// Loads an existing variant for editing; submitting keeps its id.
    pub fn from_variant(variant: &SizeVariant, default_price: f64) -> Self {
        SizeVariantForm {
            id: Some(variant.id.clone()),
            width: format_number(variant.width),
            height: format_number(variant.height),
            unit: variant.unit,
            image: variant.image.clone().unwrap_or_default(),
            sku: variant.sku.clone().unwrap_or_default(),
            barcode: variant.barcode.clone().unwrap_or_default(),
            quantity: variant.quantity.to_string(),
            pricing_tiers: variant.pricing_tiers.iter().map(TierDraft::from_tier).collect(),
            default_price,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    pub fn tier_count(&self) -> usize {
        self.pricing_tiers.len()
    }

    /// Stores the size inputs. Once both are filled, every tier with an
    /// empty shipping length or width inherits them.
    pub fn set_dimensions(&mut self, width: impl Into<String>, height: impl Into<String>) {
        self.width = width.into();
        self.height = height.into();

        if self.width.is_empty() || self.height.is_empty() {
            return;
        }
        for tier in &mut self.pricing_tiers {
            if tier.length.is_empty() {
                tier.set(TierField::Length, self.width.clone());
            }
            if tier.width.is_empty() {
                tier.set(TierField::Width, self.height.clone());
            }
        }
    }

    /// Adopts a new product-level default price. Tiers still priced at zero
    /// take it; tiers with a price keep theirs.
    pub fn apply_default_price(&mut self, price: f64) {
        if price <= 0.0 {
            return;
        }
        self.default_price = price;
        for tier in &mut self.pricing_tiers {
            if tier.base_price_value() == 0.0 {
                tier.set(TierField::BasePrice, format_number(price));
            }
        }
    }

    /// Appends a tier `step` pieces above the last one.
    pub fn add_tier(&mut self, rules: &TierRules) {
        let (quantity, base_price) = match self.pricing_tiers.last() {
            Some(last) => {
                let base = last.base_price_value();
                let base = if base != 0.0 { base } else { self.default_price };
                (last.quantity_value().saturating_add(rules.quantity_step), base)
            }
            None => (rules.initial_quantity, self.default_price),
        };

        let mut draft = TierDraft::from_tier(&PricingTier::new(quantity, base_price));
        draft.set(TierField::Length, self.width.clone());
        draft.set(TierField::Width, self.height.clone());
        self.pricing_tiers.push(draft);
    }

    /// Removes a tier; the last one cannot go.
    pub fn remove_tier(&mut self, tier_index: usize) -> CoreResult<()> {
        if self.pricing_tiers.len() <= 1 {
            return Err(CoreError::LastTier);
        }
        if tier_index >= self.pricing_tiers.len() {
            return Err(CoreError::FormTierNotFound { tier_index });
        }
        self.pricing_tiers.remove(tier_index);
        Ok(())
    }

    /// Edits one field of one tier.
    pub fn update_tier(
        &mut self,
        tier_index: usize,
        field: TierField,
        raw: impl Into<String>,
    ) -> CoreResult<()> {
        let draft = self
            .pricing_tiers
            .get_mut(tier_index)
            .ok_or(CoreError::FormTierNotFound { tier_index })?;
        draft.set(field, raw);
        Ok(())
    }

    /// Validates the form and builds the variant.
    ///
    /// ## Example
    /// ```rust
    /// use storedesk_core::{SizeVariantForm, TierRules};
    ///
    /// let rules = TierRules::default();
    /// let mut form = SizeVariantForm::new(2.8, &rules);
    /// form.set_dimensions("7.5", "3.75");
    /// let variant = form.submit(&rules).unwrap();
    /// assert_eq!(variant.combination, "7.5\" x 3.75\" (inch)");
    /// assert_eq!(variant.pricing_tiers[0].quantity, 50);
    /// ```
    pub fn submit(&self, rules: &TierRules) -> CoreResult<SizeVariant> {
        let (width, height) = match (parse_decimal(&self.width), parse_decimal(&self.height)) {
            (Some(w), Some(h)) => (w, h),
            _ => return Err(CoreError::MissingDimensions),
        };

        let first_price = self
            .pricing_tiers
            .first()
            .map(TierDraft::base_price_value)
            .unwrap_or(0.0);
        if first_price <= 0.0 {
            return Err(CoreError::InvalidBasePrice);
        }

        let pricing_tiers: Vec<PricingTier> =
            self.pricing_tiers.iter().map(TierDraft::to_tier).collect();
        for tier in &pricing_tiers {
            validation::validate_tier(tier, rules.policy)?;
        }

        Ok(SizeVariant {
            id: self
                .id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            combination: label::size_label(width, height, self.unit),
            width,
            height,
            unit: self.unit,
            sku: non_empty(&self.sku),
            barcode: non_empty(&self.barcode),
            quantity: integer_or_zero(&self.quantity),
            image: non_empty(&self.image),
            pricing_tiers,
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
