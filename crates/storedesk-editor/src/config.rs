//! # Editor Configuration
//!
//! Settings for the variant pricing editor.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOREDESK_TIER_STEP=25                                             │
//! │     STOREDESK_TIER_POLICY=strict                                       │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/storedesk/editor.toml (Linux)                            │
//! │     ~/Library/Application Support/com.storedesk.storedesk/editor.toml  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     "$", step 50, first tier 50 pieces, permissive                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # editor.toml
//! [display]
//! currency_symbol = "$"
//!
//! [pricing]
//! default_price = 2.8
//!
//! [tiers]
//! quantity_step = 50
//! initial_quantity = 50
//! policy = "permissive"  # permissive | strict
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use storedesk_core::{money, TierPolicy, TierRules, INITIAL_TIER_QUANTITY, TIER_QUANTITY_STEP};
use tracing::{debug, info, warn};

use crate::error::{EditorError, EditorResult};

// =============================================================================
// Sections
// =============================================================================

/// How amounts are shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Product-level pricing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingSettings {
    /// Seeds the base price of new size variants. 0 leaves them unpriced.
    #[serde(default)]
    pub default_price: f64,
}

/// Tier ladder behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierSettings {
    /// Pieces added to the last tier's quantity by "Add Tier".
    #[serde(default = "default_quantity_step")]
    pub quantity_step: i64,

    /// Quantity of the first tier on a new size variant.
    #[serde(default = "default_initial_quantity")]
    pub initial_quantity: i64,

    #[serde(default)]
    pub policy: TierPolicy,
}

fn default_quantity_step() -> i64 {
    TIER_QUANTITY_STEP
}

fn default_initial_quantity() -> i64 {
    INITIAL_TIER_QUANTITY
}

impl Default for TierSettings {
    fn default() -> Self {
        TierSettings {
            quantity_step: default_quantity_step(),
            initial_quantity: default_initial_quantity(),
            policy: TierPolicy::default(),
        }
    }
}

// =============================================================================
// Editor Config
// =============================================================================

/// Complete editor configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub display: DisplaySettings,

    #[serde(default)]
    pub pricing: PricingSettings,

    #[serde(default)]
    pub tiers: TierSettings,
}

impl EditorConfig {
    /// Loads configuration from file and environment.
    ///
    /// ## Loading Order
    /// 1. Start with defaults
    /// 2. Load from TOML file if it exists
    /// 3. Override with environment variables
    /// 4. Validate
    pub fn load(config_path: Option<PathBuf>) -> EditorResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading editor config from file");
                config = Self::read_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load editor config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document without touching the environment.
    pub fn from_toml_str(contents: &str) -> EditorResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    fn read_file(path: &Path) -> EditorResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> EditorResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| EditorError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| EditorError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .map_err(|e| EditorError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Editor config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> EditorResult<()> {
        if self.tiers.quantity_step <= 0 {
            return Err(EditorError::InvalidConfig(
                "quantity_step must be greater than 0".into(),
            ));
        }

        if self.tiers.initial_quantity <= 0 {
            return Err(EditorError::InvalidConfig(
                "initial_quantity must be greater than 0".into(),
            ));
        }

        if !self.pricing.default_price.is_finite() || self.pricing.default_price < 0.0 {
            return Err(EditorError::InvalidConfig(
                "default_price must not be negative".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup. Unparsable values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(symbol) = lookup("STOREDESK_CURRENCY_SYMBOL") {
            self.display.currency_symbol = symbol;
        }

        if let Some(price) = lookup("STOREDESK_DEFAULT_PRICE") {
            match price.trim().parse::<f64>() {
                Ok(p) => self.pricing.default_price = p,
                Err(_) => warn!(value = %price, "Ignoring invalid default price in environment"),
            }
        }

        if let Some(step) = lookup("STOREDESK_TIER_STEP") {
            if let Ok(s) = step.trim().parse::<i64>() {
                debug!(step = s, "Overriding tier step from environment");
                self.tiers.quantity_step = s;
            }
        }

        if let Some(quantity) = lookup("STOREDESK_INITIAL_TIER_QUANTITY") {
            if let Ok(q) = quantity.trim().parse::<i64>() {
                self.tiers.initial_quantity = q;
            }
        }

        if let Some(policy) = lookup("STOREDESK_TIER_POLICY") {
            match policy.parse::<TierPolicy>() {
                Ok(parsed) => {
                    debug!(policy = %parsed, "Overriding tier policy from environment");
                    self.tiers.policy = parsed;
                }
                Err(_) => warn!(policy = %policy, "Unknown tier policy in environment"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storedesk", "storedesk")
            .map(|dirs| dirs.config_dir().join("editor.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// The tier numbers the core model works with.
    pub fn tier_rules(&self) -> TierRules {
        TierRules {
            quantity_step: self.tiers.quantity_step,
            initial_quantity: self.tiers.initial_quantity,
            policy: self.tiers.policy,
        }
    }

    pub fn default_price(&self) -> f64 {
        self.pricing.default_price
    }

    /// Amount with the configured currency symbol, e.g. `$ 4.50`.
    pub fn format_price(&self, value: f64) -> String {
        money::format_money(&self.display.currency_symbol, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.display.currency_symbol, "$");
        assert_eq!(config.tier_rules(), TierRules::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config = EditorConfig::from_toml_str(
            r#"
            [tiers]
            quantity_step = 25
            policy = "strict"
            "#,
        )
        .unwrap();

        assert_eq!(config.tiers.quantity_step, 25);
        assert_eq!(config.tiers.initial_quantity, 50);
        assert_eq!(config.tiers.policy, TierPolicy::Strict);
        assert_eq!(config.display.currency_symbol, "$");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let err = EditorConfig::from_toml_str("[tiers]\nquantity_step = \"many\"").unwrap_err();
        assert!(matches!(err, EditorError::ConfigLoadFailed(_)));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let mut config = EditorConfig::from_toml_str(
            r#"
            [display]
            currency_symbol = "€"

            [tiers]
            quantity_step = 25
            "#,
        )
        .unwrap();
        let vars = env(&[
            ("STOREDESK_TIER_STEP", "100"),
            ("STOREDESK_DEFAULT_PRICE", "2.8"),
            ("STOREDESK_TIER_POLICY", "strict"),
        ]);

        config.apply_overrides(|key| vars.get(key).cloned());

        assert_eq!(config.tiers.quantity_step, 100);
        assert_eq!(config.default_price(), 2.8);
        assert_eq!(config.tiers.policy, TierPolicy::Strict);
        assert_eq!(config.display.currency_symbol, "€");
    }

    #[test]
    fn test_unparsable_overrides_are_ignored() {
        let mut config = EditorConfig::default();
        let vars = env(&[
            ("STOREDESK_TIER_STEP", "lots"),
            ("STOREDESK_TIER_POLICY", "lenient"),
        ]);

        config.apply_overrides(|key| vars.get(key).cloned());

        assert_eq!(config.tiers.quantity_step, 50);
        assert_eq!(config.tiers.policy, TierPolicy::Permissive);
    }

    #[test]
    fn test_config_validation() {
        let mut config = EditorConfig::default();

        config.tiers.quantity_step = 0;
        assert!(config.validate().is_err());

        config.tiers.quantity_step = 50;
        config.tiers.initial_quantity = -5;
        assert!(config.validate().is_err());

        config.tiers.initial_quantity = 50;
        config.pricing.default_price = -1.0;
        assert!(config.validate().is_err());

        config.pricing.default_price = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir()
            .join(format!("storedesk-config-{}", std::process::id()))
            .join("editor.toml");
        let mut config = EditorConfig::default();
        config.tiers.quantity_step = 30;
        config.display.currency_symbol = "Rs".to_string();

        config.save(Some(path.clone())).unwrap();
        let loaded = EditorConfig::read_file(&path).unwrap();
        assert_eq!(loaded, config);

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_save_into_unwritable_path_reports_save_failure() {
        let blocker =
            std::env::temp_dir().join(format!("storedesk-blocker-{}", std::process::id()));
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = EditorConfig::default()
            .save(Some(blocker.join("editor.toml")))
            .unwrap_err();
        assert!(matches!(err, EditorError::ConfigSaveFailed(_)));
        assert!(err.to_string().starts_with("Failed to save config"));

        let _ = std::fs::remove_file(&blocker);
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&EditorConfig::default()).unwrap();
        assert!(toml_str.contains("[display]"));
        assert!(toml_str.contains("[tiers]"));
        assert!(toml_str.contains("policy = \"permissive\""));
    }

    #[test]
    fn test_format_price() {
        let config = EditorConfig::default();
        assert_eq!(config.format_price(4.5), "$ 4.50");
    }
}
