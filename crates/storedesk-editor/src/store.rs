//! # Variant Store
//!
//! The seams between the editor and the host's variant collection.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  VariantStore                                                           │
//! │  ├── variants()                  read the current list                 │
//! │  └── replace_variant(i, v)       "replace variant i with v"            │
//! │                                                                         │
//! │  VariantCollection : VariantStore                                       │
//! │  ├── push_variant(v)             size form "Add Size"                  │
//! │  └── remove_variant(i)           size form delete                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The editor reads through [`VariantStore::variants`] only for the duration
//! of one operation and never keeps a reference across calls.

use storedesk_core::{CoreError, Variant};

use crate::error::EditorResult;

/// Read access plus the single "replace at index" write.
pub trait VariantStore {
    fn variants(&self) -> &[Variant];

    fn replace_variant(&mut self, index: usize, variant: Variant) -> EditorResult<()>;
}

/// A store that can also grow and shrink.
pub trait VariantCollection: VariantStore {
    fn push_variant(&mut self, variant: Variant);

    fn remove_variant(&mut self, index: usize) -> EditorResult<Variant>;
}

impl VariantStore for Vec<Variant> {
    fn variants(&self) -> &[Variant] {
        self
    }

    fn replace_variant(&mut self, index: usize, variant: Variant) -> EditorResult<()> {
        let slot = self
            .get_mut(index)
            .ok_or(CoreError::VariantNotFound { index })?;
        *slot = variant;
        Ok(())
    }
}

impl VariantCollection for Vec<Variant> {
    fn push_variant(&mut self, variant: Variant) {
        self.push(variant);
    }

    fn remove_variant(&mut self, index: usize) -> EditorResult<Variant> {
        if index >= self.len() {
            return Err(CoreError::VariantNotFound { index }.into());
        }
        Ok(self.remove(index))
    }
}

/// Adapts a borrowed list and an `on_change(index, variant)` callback, for
/// hosts that keep the list themselves.
///
/// ## Usage
/// ```rust
/// use storedesk_core::Variant;
/// use storedesk_editor::{CallbackStore, VariantStore};
///
/// let variants: Vec<Variant> = Vec::new();
/// let mut changes = Vec::new();
/// let store = CallbackStore::new(&variants, |index, variant| changes.push((index, variant)));
/// assert!(store.variants().is_empty());
/// ```
pub struct CallbackStore<'a, F>
where
    F: FnMut(usize, Variant),
{
    variants: &'a [Variant],
    on_change: F,
}

impl<'a, F> CallbackStore<'a, F>
where
    F: FnMut(usize, Variant),
{
    pub fn new(variants: &'a [Variant], on_change: F) -> Self {
        CallbackStore {
            variants,
            on_change,
        }
    }
}

impl<F> VariantStore for CallbackStore<'_, F>
where
    F: FnMut(usize, Variant),
{
    fn variants(&self) -> &[Variant] {
        self.variants
    }

    fn replace_variant(&mut self, index: usize, variant: Variant) -> EditorResult<()> {
        (self.on_change)(index, variant);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storedesk_core::AttributeVariant;

    fn attribute(name: &str) -> Variant {
        Variant::Attribute(AttributeVariant {
            combination: name.to_string(),
            ..AttributeVariant::default()
        })
    }

    #[test]
    fn test_vec_store_replace() {
        let mut store = vec![attribute("Red"), attribute("Blue")];
        store.replace_variant(1, attribute("Green")).unwrap();
        assert_eq!(store.variants()[1].combination(), "Green");
        assert!(store.replace_variant(5, attribute("Gray")).is_err());
    }

    #[test]
    fn test_vec_collection_push_remove() {
        let mut store: Vec<Variant> = Vec::new();
        store.push_variant(attribute("Red"));
        store.push_variant(attribute("Blue"));
        let removed = store.remove_variant(0).unwrap();
        assert_eq!(removed.combination(), "Red");
        assert_eq!(store.len(), 1);
        assert!(store.remove_variant(3).is_err());
    }

    #[test]
    fn test_callback_store_forwards_changes() {
        let variants = vec![attribute("Red")];
        let mut seen = Vec::new();
        {
            let mut store = CallbackStore::new(&variants, |i, v: Variant| {
                seen.push((i, v.combination().to_string()))
            });
            store.replace_variant(0, attribute("Teal")).unwrap();
        }
        assert_eq!(seen, vec![(0, "Teal".to_string())]);
        assert_eq!(variants[0].combination(), "Red");
    }
}
