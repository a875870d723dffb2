//! # Editor Error Type
//!
//! Unified error type for the editor layer.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Dashboard action                                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  TierEditor / VariantFormSession                                        │
//! │         │                                                               │
//! │         ├── refusal (last tier, strict policy)                          │
//! │         │      └──► Notifier::failure + Outcome::Refused   (not an Err) │
//! │         │                                                               │
//! │         └── stale index, no draft, config / I/O failure                 │
//! │                └──► Err(EditorError)                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use storedesk_core::CoreError;
use thiserror::Error;

/// Errors surfaced by the editor layer.
#[derive(Debug, Error)]
pub enum EditorError {
    // =========================================================================
    // Edit Errors
    // =========================================================================
    /// A draft operation was issued while no tier is being edited.
    #[error("No pricing tier is being edited")]
    NoActiveDraft,

    /// Error from the pricing model.
    #[error(transparent)]
    Core(#[from] CoreError),

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Config file could not be read or parsed.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Config could not be written.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    /// Config values are out of bounds.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<std::io::Error> for EditorError {
    fn from(err: std::io::Error) -> Self {
        EditorError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for EditorError {
    fn from(err: toml::de::Error) -> Self {
        EditorError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for EditorError {
    fn from(err: toml::ser::Error) -> Self {
        EditorError::ConfigSaveFailed(err.to_string())
    }
}

/// Convenience type alias for Results with EditorError.
pub type EditorResult<T> = Result<T, EditorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_pass_through() {
        let err: EditorError = CoreError::LastTier.into();
        assert_eq!(err.to_string(), "At least one pricing tier is required");
    }

    #[test]
    fn test_no_draft_message() {
        assert_eq!(
            EditorError::NoActiveDraft.to_string(),
            "No pricing tier is being edited"
        );
    }
}
