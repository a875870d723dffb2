//! # Size Variant Form Session
//!
//! Drives one [`SizeVariantForm`] against the host's variant collection:
//! either adding a new size or replacing the one being edited.

use storedesk_core::{tiers, SizeVariantForm, TierField, TierRules};
use tracing::{debug, info};

use crate::editor::{refuse_or_fail, Outcome, TierEditor};
use crate::error::EditorResult;
use crate::notify::Notifier;
use crate::store::{VariantCollection, VariantStore};

pub const VARIANT_ADDED: &str = "Size variant added";
pub const VARIANT_UPDATED: &str = "Size variant updated";
pub const VARIANT_DELETED: &str = "Size variant deleted";

#[derive(Debug, Clone)]
pub struct VariantFormSession {
    rules: TierRules,
    default_price: f64,
    form: SizeVariantForm,
    /// Position of the variant loaded by [`VariantFormSession::edit_existing`].
    editing_index: Option<usize>,
}

impl VariantFormSession {
    pub fn new(rules: TierRules, default_price: f64) -> Self {
        VariantFormSession {
            rules,
            default_price,
            form: SizeVariantForm::new(default_price, &rules),
            editing_index: None,
        }
    }

    pub fn form(&self) -> &SizeVariantForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SizeVariantForm {
        &mut self.form
    }

    pub fn editing_index(&self) -> Option<usize> {
        self.editing_index
    }

    /// Resets to an empty "add" form.
    pub fn start_new(&mut self) {
        self.form = SizeVariantForm::new(self.default_price, &self.rules);
        self.editing_index = None;
    }

    /// Loads the size variant at `index` into the form.
    pub fn edit_existing<S>(&mut self, store: &S, index: usize) -> EditorResult<&SizeVariantForm>
    where
        S: VariantStore + ?Sized,
    {
        let variant = tiers::size_variant_at(store.variants(), index)?;
        debug!(index, combination = %variant.combination, "Editing size variant");
        self.form = SizeVariantForm::from_variant(variant, self.default_price);
        self.editing_index = Some(index);
        Ok(&self.form)
    }

    /// Abandons the current form without touching the store.
    pub fn cancel(&mut self) {
        self.start_new();
    }

    /// Takes a new product default price. A form for a new variant fills its
    /// unpriced tiers with it.
    pub fn set_default_price(&mut self, price: f64) {
        if price <= 0.0 {
            return;
        }
        self.default_price = price;
        if self.editing_index.is_none() {
            self.form.apply_default_price(price);
        }
    }

    pub fn set_dimensions(&mut self, width: impl Into<String>, height: impl Into<String>) {
        self.form.set_dimensions(width, height);
    }

    pub fn add_tier(&mut self) {
        self.form.add_tier(&self.rules);
    }

    pub fn update_tier(
        &mut self,
        tier_index: usize,
        field: TierField,
        raw: impl Into<String>,
    ) -> EditorResult<()> {
        Ok(self.form.update_tier(tier_index, field, raw)?)
    }

    /// Removes a form tier; refused when it is the only one.
    pub fn remove_tier<N>(&mut self, tier_index: usize, notifier: &N) -> EditorResult<Outcome>
    where
        N: Notifier + ?Sized,
    {
        match self.form.remove_tier(tier_index) {
            Ok(()) => Ok(Outcome::Applied),
            Err(err) => refuse_or_fail(err, notifier),
        }
    }

    /// Builds the variant and adds it, or replaces the one being edited.
    /// The form resets on success only.
    pub fn submit<C, N>(&mut self, store: &mut C, notifier: &N) -> EditorResult<Outcome>
    where
        C: VariantCollection + ?Sized,
        N: Notifier + ?Sized,
    {
        let variant = match self.form.submit(&self.rules) {
            Ok(variant) => variant,
            Err(err) => return refuse_or_fail(err, notifier),
        };
        let combination = variant.combination.clone();

        let message = match self.editing_index {
            Some(index) => {
                store.replace_variant(index, variant.into())?;
                VARIANT_UPDATED
            }
            None => {
                store.push_variant(variant.into());
                VARIANT_ADDED
            }
        };

        info!(combination = %combination, "{}", message);
        notifier.success(message);
        self.start_new();
        Ok(Outcome::Applied)
    }

    /// Deletes the variant at `index`. Both the form's edit position and the
    /// tier editor's focus follow the shifted indices.
    pub fn remove_variant<C, N>(
        &mut self,
        store: &mut C,
        index: usize,
        editor: &mut TierEditor,
        notifier: &N,
    ) -> EditorResult<()>
    where
        C: VariantCollection + ?Sized,
        N: Notifier + ?Sized,
    {
        let removed = store.remove_variant(index)?;
        debug!(index, combination = %removed.combination(), "Removed variant");

        match self.editing_index {
            Some(editing) if editing == index => self.start_new(),
            Some(editing) if editing > index => self.editing_index = Some(editing - 1),
            _ => {}
        }
        editor.on_variant_removed(index);

        notifier.success(VARIANT_DELETED);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EditorError;
    use crate::notify::RecordingNotifier;
    use storedesk_core::{
        AttributeVariant, CoreError, PricingTier, SizeUnit, SizeVariant, TierRef, Variant,
    };

    fn size(width: f64, height: f64) -> Variant {
        Variant::Size(SizeVariant::new(
            width,
            height,
            SizeUnit::Inch,
            vec![PricingTier::new(50, 3.0), PricingTier::new(100, 2.75)],
        ))
    }

    #[test]
    fn test_submit_new_variant() {
        let mut store: Vec<Variant> = Vec::new();
        let notifier = RecordingNotifier::new();
        let mut session = VariantFormSession::new(TierRules::default(), 2.8);

        session.set_dimensions("7.5", "3.75");
        session.add_tier();
        let outcome = session.submit(&mut store, &notifier).unwrap();

        assert!(outcome.is_applied());
        assert_eq!(store.len(), 1);
        let added = store[0].as_size().unwrap();
        assert_eq!(added.combination, "7.5\" x 3.75\" (inch)");
        let quantities: Vec<i64> = added.pricing_tiers.iter().map(|t| t.quantity).collect();
        assert_eq!(quantities, vec![50, 100]);
        assert_eq!(added.pricing_tiers[1].length, Some(7.5));
        assert_eq!(notifier.successes(), vec![VARIANT_ADDED]);
        assert!(session.form().width.is_empty());
    }

    #[test]
    fn test_submit_without_dimensions_is_refused() {
        let mut store: Vec<Variant> = Vec::new();
        let notifier = RecordingNotifier::new();
        let mut session = VariantFormSession::new(TierRules::default(), 2.8);
        session.set_dimensions("7", "");

        let outcome = session.submit(&mut store, &notifier).unwrap();

        assert_eq!(
            outcome,
            Outcome::Refused("Please enter both width and height".to_string())
        );
        assert!(store.is_empty());
        assert_eq!(session.form().width, "7");
        assert!(notifier.successes().is_empty());
    }

    #[test]
    fn test_submit_without_price_is_refused() {
        let mut store: Vec<Variant> = Vec::new();
        let notifier = RecordingNotifier::new();
        let mut session = VariantFormSession::new(TierRules::default(), 0.0);
        session.set_dimensions("7", "5");

        let outcome = session.submit(&mut store, &notifier).unwrap();
        assert_eq!(
            outcome,
            Outcome::Refused("Please enter a valid base price".to_string())
        );
        assert_eq!(notifier.failures().len(), 1);
    }

    #[test]
    fn test_edit_existing_replaces_in_place() {
        let mut store = vec![size(7.0, 5.0), size(4.0, 2.0)];
        let original_id = store[1].as_size().unwrap().id.clone();
        let notifier = RecordingNotifier::new();
        let mut session = VariantFormSession::new(TierRules::default(), 2.8);

        let form = session.edit_existing(&store, 1).unwrap();
        assert_eq!(form.width, "4");
        assert_eq!(form.tier_count(), 2);

        session.set_dimensions("4.5", "2");
        session.submit(&mut store, &notifier).unwrap();

        assert_eq!(store.len(), 2);
        let updated = store[1].as_size().unwrap();
        assert_eq!(updated.id, original_id);
        assert_eq!(updated.combination, "4.5\" x 2\" (inch)");
        assert_eq!(notifier.successes(), vec![VARIANT_UPDATED]);
        assert_eq!(session.editing_index(), None);
    }

    #[test]
    fn test_edit_existing_rejects_attribute_variant() {
        let store = vec![Variant::Attribute(AttributeVariant::default())];
        let mut session = VariantFormSession::new(TierRules::default(), 2.8);
        let err = session.edit_existing(&store, 0).unwrap_err();
        assert!(matches!(
            err,
            EditorError::Core(CoreError::NotSizeVariant { index: 0 })
        ));
    }

    #[test]
    fn test_cancel_leaves_store_untouched() {
        let store = vec![size(7.0, 5.0)];
        let before = store.clone();
        let mut session = VariantFormSession::new(TierRules::default(), 2.8);

        session.edit_existing(&store, 0).unwrap();
        session.set_dimensions("9", "9");
        session.cancel();
        session.cancel();

        assert_eq!(store, before);
        assert_eq!(session.editing_index(), None);
        assert!(!session.form().is_editing());
    }

    #[test]
    fn test_remove_last_form_tier_is_refused() {
        let notifier = RecordingNotifier::new();
        let mut session = VariantFormSession::new(TierRules::default(), 2.8);

        let outcome = session.remove_tier(0, &notifier).unwrap();
        assert!(!outcome.is_applied());
        assert_eq!(
            notifier.failures(),
            vec!["At least one pricing tier is required"]
        );
        assert_eq!(session.form().tier_count(), 1);
    }

    #[test]
    fn test_remove_variant_tracks_edit_position() {
        let mut store = vec![size(1.0, 1.0), size(2.0, 2.0), size(3.0, 3.0)];
        let notifier = RecordingNotifier::new();
        let mut session = VariantFormSession::new(TierRules::default(), 2.8);

        let mut editor = TierEditor::default();

        session.edit_existing(&store, 2).unwrap();
        session
            .remove_variant(&mut store, 0, &mut editor, &notifier)
            .unwrap();
        assert_eq!(session.editing_index(), Some(1));

        session
            .remove_variant(&mut store, 1, &mut editor, &notifier)
            .unwrap();
        assert_eq!(session.editing_index(), None);
        assert_eq!(store.len(), 1);
        assert_eq!(notifier.successes(), vec![VARIANT_DELETED, VARIANT_DELETED]);
    }

    #[test]
    fn test_removing_variant_retargets_open_tier_draft() {
        let mut store = vec![size(1.0, 1.0), size(2.0, 2.0), size(3.0, 3.0)];
        let notifier = RecordingNotifier::new();
        let mut session = VariantFormSession::new(TierRules::default(), 2.8);
        let mut editor = TierEditor::default();

        editor.begin_edit(&store, TierRef::new(1, 0)).unwrap();
        editor.update_draft_field(TierField::Discount, "50").unwrap();
        session
            .remove_variant(&mut store, 0, &mut editor, &notifier)
            .unwrap();

        let at = editor.focus().unwrap().at;
        assert_eq!(at, TierRef::new(0, 0));
        editor.commit_edit(&mut store, at, &notifier).unwrap();

        let edited = store[0].as_size().unwrap();
        assert_eq!(edited.combination, "2\" x 2\" (inch)");
        assert_eq!(edited.pricing_tiers[0].discount, 50.0);
        let untouched = store[1].as_size().unwrap();
        assert_eq!(untouched.pricing_tiers[0].discount, 0.0);
    }

    #[test]
    fn test_removing_variant_drops_its_tier_draft() {
        let mut store = vec![size(1.0, 1.0), size(2.0, 2.0)];
        let notifier = RecordingNotifier::new();
        let mut session = VariantFormSession::new(TierRules::default(), 2.8);
        let mut editor = TierEditor::default();

        editor.begin_edit(&store, TierRef::new(1, 1)).unwrap();
        session
            .remove_variant(&mut store, 1, &mut editor, &notifier)
            .unwrap();
        assert!(editor.focus().is_none());
    }

    #[test]
    fn test_default_price_fills_new_form_only() {
        let store = vec![size(7.0, 5.0)];
        let mut session = VariantFormSession::new(TierRules::default(), 0.0);

        session.set_default_price(3.5);
        assert_eq!(session.form().pricing_tiers[0].base_price, "3.5");

        session.edit_existing(&store, 0).unwrap();
        session.set_default_price(9.0);
        assert_eq!(session.form().pricing_tiers[0].base_price, "3");

        session.start_new();
        assert_eq!(session.form().pricing_tiers[0].base_price, "9");
    }
}
