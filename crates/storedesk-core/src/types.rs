//! # Domain Types
//!
//! Core domain types shared with the Storedesk dashboard.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Variant collection (owned by the host)                                │
//! │  ├── Variant::Size(SizeVariant)                                        │
//! │  │     ├── combination  "7.5\" x 3.75\" (inch)"                        │
//! │  │     ├── width, height, unit                                         │
//! │  │     └── pricing_tiers  [PricingTier; ≥ 1]                           │
//! │  │            ├── quantity, base_price, discount, final_price          │
//! │  │            └── length, width, height (in), weight (lbs)             │
//! │  └── Variant::Attribute(AttributeVariant)   (no tiers)                 │
//! │                                                                         │
//! │  TierRef        - (variant_index, tier_index) edit focus               │
//! │  VariantChange  - "replace variant at index with this value"           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Units
//! Tier shipping dimensions are always inches and weight always pounds,
//! whatever the variant's own [`SizeUnit`] is.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::label;
use crate::money;

// =============================================================================
// Size Unit
// =============================================================================

/// Unit of a size variant's own width and height.
///
/// Informational only: nothing is converted between units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SizeUnit {
    #[default]
    Inch,
    Cm,
}

impl SizeUnit {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SizeUnit::Inch => "inch",
            SizeUnit::Cm => "cm",
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeUnit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inch" | "in" => Ok(SizeUnit::Inch),
            "cm" => Ok(SizeUnit::Cm),
            _ => Err(ValidationError::NotAllowed {
                field: "unit".to_string(),
                allowed: vec!["inch".to_string(), "cm".to_string()],
            }),
        }
    }
}

// =============================================================================
// Pricing Tier
// =============================================================================

/// A quantity breakpoint with its own price, discount and shipping metadata.
///
/// ## Invariant
/// `final_price == base_price - base_price * discount / 100`. Every
/// constructor and [`PricingTier::recompute_final_price`] keep it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingTier {
    /// Minimum order quantity for this price.
    pub quantity: i64,

    /// Price per piece before discount, in the store currency.
    pub base_price: f64,

    /// Percentage discount (0-100 expected, not clamped).
    pub discount: f64,

    /// Price per piece after discount. Derived.
    pub final_price: f64,

    /// Shipping length in inches. `None` until entered.
    #[serde(default)]
    pub length: Option<f64>,

    /// Shipping width in inches.
    #[serde(default)]
    pub width: Option<f64>,

    /// Shipping height in inches.
    #[serde(default)]
    pub height: Option<f64>,

    /// Shipping weight in pounds.
    #[serde(default)]
    pub weight: Option<f64>,
}

impl PricingTier {
    /// Creates an undiscounted tier with empty shipping fields.
    pub fn new(quantity: i64, base_price: f64) -> Self {
        PricingTier {
            quantity,
            base_price,
            discount: 0.0,
            final_price: base_price,
            length: None,
            width: None,
            height: None,
            weight: None,
        }
    }

    /// Sets the discount and refreshes the final price.
    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self.recompute_final_price();
        self
    }

    /// Sets the shipping box in inches.
    pub fn with_dimensions(mut self, length: f64, width: f64, height: f64) -> Self {
        self.length = Some(length);
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Sets the shipping weight in pounds.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Recomputes `final_price` from `base_price` and `discount`.
    pub fn recompute_final_price(&mut self) {
        self.final_price = money::discounted_price(self.base_price, self.discount);
    }

    /// `final_price × quantity`, full precision.
    pub fn line_total(&self) -> f64 {
        money::line_total(self.final_price, self.quantity)
    }

    /// True when length, width and height are all filled in.
    pub fn has_dimensions(&self) -> bool {
        self.length.is_some() && self.width.is_some() && self.height.is_some()
    }
}

// =============================================================================
// Size Variant
// =============================================================================

/// A size-based product variant owning a quantity pricing ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SizeVariant {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display label, e.g. `7.5" x 3.75" (inch)`.
    pub combination: String,

    /// The variant's own width, in `unit`.
    pub width: f64,

    /// The variant's own height, in `unit`.
    pub height: f64,

    pub unit: SizeUnit,

    #[serde(default)]
    pub sku: Option<String>,

    #[serde(default)]
    pub barcode: Option<String>,

    /// Stock count, independent of tier quantities.
    #[serde(default)]
    pub quantity: i64,

    /// Media asset URL.
    #[serde(default)]
    pub image: Option<String>,

    /// Ordered ascending quantity breakpoints. Never empty.
    pub pricing_tiers: Vec<PricingTier>,
}

impl SizeVariant {
    /// Creates a variant with a fresh id and a label derived from its size.
    ///
    /// ## Example
    /// ```rust
    /// use storedesk_core::{PricingTier, SizeUnit, SizeVariant};
    ///
    /// let v = SizeVariant::new(7.5, 3.75, SizeUnit::Inch, vec![PricingTier::new(50, 2.8)]);
    /// assert_eq!(v.combination, "7.5\" x 3.75\" (inch)");
    /// ```
    pub fn new(width: f64, height: f64, unit: SizeUnit, pricing_tiers: Vec<PricingTier>) -> Self {
        SizeVariant {
            id: Uuid::new_v4().to_string(),
            combination: label::size_label(width, height, unit),
            width,
            height,
            unit,
            sku: None,
            barcode: None,
            quantity: 0,
            image: None,
            pricing_tiers,
        }
    }

    /// The highest breakpoint (last in insertion order).
    pub fn last_tier(&self) -> Option<&PricingTier> {
        self.pricing_tiers.last()
    }

    pub fn tier_count(&self) -> usize {
        self.pricing_tiers.len()
    }
}

// =============================================================================
// Attribute Variant
// =============================================================================

/// A traditional attribute-combination variant (colour, material, ...).
///
/// Shares the collection with size variants but has a single flat price and
/// no tiers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AttributeVariant {
    pub combination: String,
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub barcode: Option<String>,
    /// Sale price.
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub original_price: f64,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub image: Option<String>,
}

// =============================================================================
// Variant
// =============================================================================

/// One entry of the host's variant collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "variantType", rename_all = "lowercase")]
pub enum Variant {
    Size(SizeVariant),
    Attribute(AttributeVariant),
}

impl Variant {
    pub fn combination(&self) -> &str {
        match self {
            Variant::Size(v) => &v.combination,
            Variant::Attribute(v) => &v.combination,
        }
    }

    pub fn as_size(&self) -> Option<&SizeVariant> {
        match self {
            Variant::Size(v) => Some(v),
            Variant::Attribute(_) => None,
        }
    }

    pub fn is_size(&self) -> bool {
        matches!(self, Variant::Size(_))
    }
}

impl From<SizeVariant> for Variant {
    fn from(v: SizeVariant) -> Self {
        Variant::Size(v)
    }
}

impl From<AttributeVariant> for Variant {
    fn from(v: AttributeVariant) -> Self {
        Variant::Attribute(v)
    }
}

// =============================================================================
// Tier Reference & Change
// =============================================================================

/// Position of one tier across the whole variant collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TierRef {
    pub variant_index: usize,
    pub tier_index: usize,
}

impl TierRef {
    pub const fn new(variant_index: usize, tier_index: usize) -> Self {
        TierRef {
            variant_index,
            tier_index,
        }
    }
}

impl fmt::Display for TierRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.variant_index, self.tier_index)
    }
}

/// The outcome of a tier operation: replace the variant at `index`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct VariantChange {
    pub index: usize,
    pub variant: Variant,
}

impl VariantChange {
    pub fn new(index: usize, variant: impl Into<Variant>) -> Self {
        VariantChange {
            index,
            variant: variant.into(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_final_price_follows_discount() {
        let tier = PricingTier::new(50, 5.0).with_discount(10.0);
        assert!((tier.final_price - 4.5).abs() < 1e-9);
        assert!((tier.line_total() - 225.0).abs() < 1e-9);
    }

    #[test]
    fn test_has_dimensions() {
        let tier = PricingTier::new(50, 1.0);
        assert!(!tier.has_dimensions());
        assert!(tier.with_dimensions(7.0, 5.0, 1.0).has_dimensions());
    }

    #[test]
    fn test_size_unit_parse() {
        assert_eq!("inch".parse::<SizeUnit>().unwrap(), SizeUnit::Inch);
        assert_eq!("CM".parse::<SizeUnit>().unwrap(), SizeUnit::Cm);
        assert!("ft".parse::<SizeUnit>().is_err());
        assert_eq!(SizeUnit::default(), SizeUnit::Inch);
    }

    #[test]
    fn test_variant_serializes_with_type_tag() {
        let variant = Variant::Size(SizeVariant::new(
            3.0,
            2.0,
            SizeUnit::Inch,
            vec![PricingTier::new(50, 2.8)],
        ));
        let json = serde_json::to_value(&variant).unwrap();
        assert_eq!(json["variantType"], "size");
        assert_eq!(json["combination"], "3\" x 2\" (inch)");
        assert_eq!(json["pricingTiers"][0]["basePrice"], 2.8);
        assert_eq!(json["pricingTiers"][0]["finalPrice"], 2.8);
        assert!(json["pricingTiers"][0]["length"].is_null());
    }

    #[test]
    fn test_attribute_variant_deserializes() {
        let json = r#"{
            "variantType": "attribute",
            "combination": "Red / Matte",
            "price": 12.5,
            "originalPrice": 15.0,
            "quantity": 3
        }"#;
        let variant: Variant = serde_json::from_str(json).unwrap();
        assert!(!variant.is_size());
        assert_eq!(variant.combination(), "Red / Matte");
        assert!(variant.as_size().is_none());
    }
}
