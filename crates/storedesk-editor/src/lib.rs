//! # Storedesk Editor
//!
//! Stateful edit layer for the variant pricing table. Holds what the dashboard
//! keeps between clicks and forwards every change to the host.
//!
//! ## Module Organization
//! ```text
//! storedesk_editor/
//! ├── lib.rs          ◄─── You are here (exports, tracing setup)
//! ├── editor.rs       ◄─── TierEditor: the single tier edit focus
//! ├── session.rs      ◄─── VariantFormSession: add/edit a size variant
//! ├── store.rs        ◄─── VariantStore / VariantCollection seams
//! ├── notify.rs       ◄─── Notifier seam + tracing/recording sinks
//! ├── config.rs       ◄─── EditorConfig (TOML + environment)
//! └── error.rs        ◄─── EditorError
//! ```
//!
//! ## Usage
//! ```rust
//! use storedesk_core::{PricingTier, SizeUnit, SizeVariant, TierField, TierRef, Variant};
//! use storedesk_editor::{EditorConfig, RecordingNotifier, TierEditor};
//!
//! let config = EditorConfig::default();
//! let mut variants = vec![Variant::Size(SizeVariant::new(
//!     7.0,
//!     5.0,
//!     SizeUnit::Inch,
//!     vec![PricingTier::new(50, 3.0)],
//! ))];
//! let notifier = RecordingNotifier::new();
//! let mut editor = TierEditor::new(config.tier_rules());
//!
//! let at = TierRef::new(0, 0);
//! editor.begin_edit(&variants, at).unwrap();
//! editor.update_draft_field(TierField::Discount, "10").unwrap();
//! editor.commit_edit(&mut variants, at, &notifier).unwrap();
//!
//! assert_eq!(notifier.successes(), vec!["Pricing tier updated"]);
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod notify;
pub mod session;
pub mod store;

use tracing::debug;
use tracing_subscriber::EnvFilter;

pub use config::EditorConfig;
pub use editor::{EditFocus, Outcome, TierEditor};
pub use error::{EditorError, EditorResult};
pub use notify::{Notice, NoticeKind, Notifier, RecordingNotifier, TracingNotifier};
pub use session::VariantFormSession;
pub use store::{CallbackStore, VariantCollection, VariantStore};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storedesk=trace` - Show trace for storedesk crates only
/// - Default: INFO, DEBUG for storedesk
///
/// A subscriber installed earlier by the host is left in place.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,storedesk=debug"));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        debug!("Tracing subscriber already installed");
    }
}
