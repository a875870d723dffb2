//! # Tier Editor
//!
//! Stateful wrapper over [`storedesk_core::tiers`] for the variant table.
//!
//! ## Focus Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Idle ──begin_edit(at)──► Editing { at, draft }                       │
//! │    ▲                          │   │                                     │
//! │    │                          │   └─ update_draft_field (final price)   │
//! │    │                          │                                         │
//! │    ├──── cancel_edit ─────────┤                                         │
//! │    ├──── commit_edit (ok) ────┤  store.replace_variant + success        │
//! │    └──── delete_tier(at) ─────┘  focus on a later tier shifts down      │
//! │                                                                         │
//! │   Refusals (last tier, strict policy) notify failure and keep state.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::cmp::Ordering;

use storedesk_core::{
    money, tiers, CoreError, PricingTier, TierDraft, TierField, TierRef, TierRules, VariantChange,
};
use tracing::debug;

use crate::error::{EditorError, EditorResult};
use crate::notify::Notifier;
use crate::store::VariantStore;

pub const TIER_UPDATED: &str = "Pricing tier updated";
pub const TIER_DELETED: &str = "Pricing tier deleted";

/// Result of an action that may be refused with a merchant-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Refused(String),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Message shown to the merchant for a refusal.
pub(crate) fn refusal_message(err: &CoreError) -> String {
    match err {
        CoreError::Validation(inner) => inner.to_string(),
        other => other.to_string(),
    }
}

/// Turns refusals into [`Outcome::Refused`] plus one failure notice.
/// Anything else is a caller error and propagates.
pub(crate) fn refuse_or_fail<N>(err: CoreError, notifier: &N) -> EditorResult<Outcome>
where
    N: Notifier + ?Sized,
{
    if !err.is_refusal() {
        return Err(err.into());
    }
    let message = refusal_message(&err);
    debug!(reason = %message, "Action refused");
    notifier.failure(&message);
    Ok(Outcome::Refused(message))
}

/// The tier being edited and its draft.
#[derive(Debug, Clone, PartialEq)]
pub struct EditFocus {
    pub at: TierRef,
    pub draft: TierDraft,
}

/// Holds at most one open draft across the whole variant table.
#[derive(Debug, Default)]
pub struct TierEditor {
    rules: TierRules,
    focus: Option<EditFocus>,
}

impl TierEditor {
    pub fn new(rules: TierRules) -> Self {
        TierEditor { rules, focus: None }
    }

    pub fn rules(&self) -> &TierRules {
        &self.rules
    }

    pub fn focus(&self) -> Option<&EditFocus> {
        self.focus.as_ref()
    }

    pub fn draft(&self) -> Option<&TierDraft> {
        self.focus.as_ref().map(|f| &f.draft)
    }

    pub fn is_editing(&self, at: TierRef) -> bool {
        self.focus.as_ref().is_some_and(|f| f.at == at)
    }

    /// Opens a draft for the tier at `at`, discarding any other open draft.
    pub fn begin_edit<S>(&mut self, store: &S, at: TierRef) -> EditorResult<&TierDraft>
    where
        S: VariantStore + ?Sized,
    {
        let draft = tiers::begin_edit(store.variants(), at)?;
        if let Some(previous) = &self.focus {
            if previous.at != at {
                debug!(discarded = %previous.at, "Replacing unsaved tier draft");
            }
        }
        debug!(tier = %at, "Editing pricing tier");
        let focus = self.focus.insert(EditFocus { at, draft });
        Ok(&focus.draft)
    }

    /// Stores raw input in the open draft and returns the new final price.
    pub fn update_draft_field(
        &mut self,
        field: TierField,
        raw: impl Into<String>,
    ) -> EditorResult<f64> {
        let focus = self.focus.as_mut().ok_or(EditorError::NoActiveDraft)?;
        focus.draft.set(field, raw);
        Ok(focus.draft.final_price())
    }

    /// [`TierEditor::update_draft_field`] keyed by the front-end field name.
    pub fn update_draft_field_named(
        &mut self,
        field_name: &str,
        raw: impl Into<String>,
    ) -> EditorResult<f64> {
        let field: TierField = field_name.parse().map_err(CoreError::from)?;
        self.update_draft_field(field, raw)
    }

    /// Writes the open draft over the tier at `at`.
    ///
    /// A strict-policy refusal keeps the draft open so the merchant can fix it.
    pub fn commit_edit<S, N>(
        &mut self,
        store: &mut S,
        at: TierRef,
        notifier: &N,
    ) -> EditorResult<Outcome>
    where
        S: VariantStore + ?Sized,
        N: Notifier + ?Sized,
    {
        let focus = self.focus.as_ref().ok_or(EditorError::NoActiveDraft)?;
        let change = match tiers::commit_edit(store.variants(), at, &focus.draft, &self.rules) {
            Ok(change) => change,
            Err(err) => return refuse_or_fail(err, notifier),
        };

        apply(store, change)?;
        self.focus = None;
        debug!(tier = %at, "Committed pricing tier");
        notifier.success(TIER_UPDATED);
        Ok(Outcome::Applied)
    }

    /// Drops the open draft. Calling it again is a no-op.
    pub fn cancel_edit(&mut self) {
        if let Some(focus) = self.focus.take() {
            debug!(tier = %focus.at, "Discarded tier draft");
        }
    }

    /// Removes the tier at `at` unless it is the variant's last one.
    pub fn delete_tier<S, N>(
        &mut self,
        store: &mut S,
        at: TierRef,
        notifier: &N,
    ) -> EditorResult<Outcome>
    where
        S: VariantStore + ?Sized,
        N: Notifier + ?Sized,
    {
        let change = match tiers::delete_tier(store.variants(), at) {
            Ok(change) => change,
            Err(err) => return refuse_or_fail(err, notifier),
        };

        apply(store, change)?;
        self.shift_focus_after_delete(at);
        debug!(tier = %at, "Deleted pricing tier");
        notifier.success(TIER_DELETED);
        Ok(Outcome::Applied)
    }

    /// Appends a tier one quantity step past the variant's last tier.
    pub fn add_tier<S, N>(
        &mut self,
        store: &mut S,
        variant_index: usize,
        notifier: &N,
    ) -> EditorResult<Outcome>
    where
        S: VariantStore + ?Sized,
        N: Notifier + ?Sized,
    {
        let change = match tiers::add_tier(store.variants(), variant_index, &self.rules) {
            Ok(change) => change,
            Err(err) => return refuse_or_fail(err, notifier),
        };
        let quantity = change
            .variant
            .as_size()
            .and_then(|v| v.last_tier())
            .map(|t| t.quantity)
            .unwrap_or_default();

        apply(store, change)?;
        debug!(variant = variant_index, quantity, "Added pricing tier");
        notifier.success(&format!("New tier added: {} pieces", quantity));
        Ok(Outcome::Applied)
    }

    /// Formatted `finalPrice × quantity` for a table row.
    pub fn line_total(tier: &PricingTier) -> String {
        money::tier_line_total(tier)
    }

    /// Keeps the focus on the same tier after the variant at `index` left
    /// the collection. A focus inside the removed variant is dropped.
    pub fn on_variant_removed(&mut self, index: usize) {
        let ordering = match &self.focus {
            Some(focus) => focus.at.variant_index.cmp(&index),
            None => return,
        };

        match ordering {
            Ordering::Less => {}
            Ordering::Equal => {
                debug!(variant = index, "Dropped tier draft of removed variant");
                self.focus = None;
            }
            Ordering::Greater => {
                if let Some(focus) = self.focus.as_mut() {
                    focus.at.variant_index -= 1;
                }
            }
        }
    }

    fn shift_focus_after_delete(&mut self, deleted: TierRef) {
        let ordering = match &self.focus {
            Some(focus) if focus.at.variant_index == deleted.variant_index => {
                focus.at.tier_index.cmp(&deleted.tier_index)
            }
            _ => return,
        };

        match ordering {
            Ordering::Less => {}
            Ordering::Equal => self.focus = None,
            Ordering::Greater => {
                if let Some(focus) = self.focus.as_mut() {
                    focus.at.tier_index -= 1;
                }
            }
        }
    }
}

fn apply<S>(store: &mut S, change: VariantChange) -> EditorResult<()>
where
    S: VariantStore + ?Sized,
{
    store.replace_variant(change.index, change.variant)
}
