//! Committed selection module.
//!
//! The ordered list of products shown on the page, plus the discount,
//! visibility and removal operations that edit it in place.

mod annotate;
mod product;
mod remove;

pub use product::{SelectedProduct, SelectedVariant};

use crate::ids::ProductId;
use crate::reconcile::CommitDefaults;
use serde::{Deserialize, Serialize};

/// The committed, user-ordered product list.
///
/// Mutators return `true` when something changed. A missing target is never
/// an error: the presentation layer may be a step ahead of the store.
///
/// Deserializing goes through [`SelectionStore::from_products`], so duplicate
/// ids on the wire collapse to the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<SelectedProduct>", into = "Vec<SelectedProduct>")]
pub struct SelectionStore {
    products: Vec<SelectedProduct>,
}

impl SelectionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from products, keeping the first of any duplicate id.
    pub fn from_products(products: impl IntoIterator<Item = SelectedProduct>) -> Self {
        let mut store = Self::new();
        for product in products {
            if store.position(&product.id).is_none() {
                store.products.push(product);
            }
        }
        store
    }

    /// Committed products, in display order.
    pub fn products(&self) -> &[SelectedProduct] {
        &self.products
    }

    /// Product ids, in display order.
    pub fn ids(&self) -> Vec<&ProductId> {
        self.products.iter().map(|p| &p.id).collect()
    }

    /// Get a product by ID.
    pub fn get(&self, product_id: &ProductId) -> Option<&SelectedProduct> {
        self.products.iter().find(|p| &p.id == product_id)
    }

    pub(crate) fn get_mut(&mut self, product_id: &ProductId) -> Option<&mut SelectedProduct> {
        self.products.iter_mut().find(|p| &p.id == product_id)
    }

    /// Position of a product.
    pub fn position(&self, product_id: &ProductId) -> Option<usize> {
        self.products.iter().position(|p| &p.id == product_id)
    }

    /// Check if a product is in the list.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.position(product_id).is_some()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Append an empty placeholder slot and return its id.
    pub fn add_placeholder(&mut self, defaults: &CommitDefaults) -> ProductId {
        let product = SelectedProduct::placeholder(defaults);
        let id = product.id.clone();
        self.products.push(product);
        id
    }

    /// Flip whether a product's variant sub-list is expanded.
    pub fn toggle_show_variants(&mut self, product_id: &ProductId) -> bool {
        match self.get_mut(product_id) {
            Some(product) => {
                product.show_variants = !product.show_variants;
                true
            }
            None => false,
        }
    }

    pub(crate) fn products_mut(&mut self) -> &mut Vec<SelectedProduct> {
        &mut self.products
    }

    pub(crate) fn replace(&mut self, products: Vec<SelectedProduct>) {
        self.products = products;
    }
}

impl From<Vec<SelectedProduct>> for SelectionStore {
    fn from(products: Vec<SelectedProduct>) -> Self {
        Self::from_products(products)
    }
}

impl From<SelectionStore> for Vec<SelectedProduct> {
    fn from(store: SelectionStore) -> Self {
        store.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_placeholder() {
        let mut store = SelectionStore::new();
        let first = store.add_placeholder(&CommitDefaults::default());
        let second = store.add_placeholder(&CommitDefaults::default());

        assert_ne!(first, second);
        assert_eq!(store.ids(), vec![&first, &second]);
        assert!(store.get(&first).unwrap().placeholder);
    }

    #[test]
    fn test_toggle_show_variants() {
        let mut store = SelectionStore::new();
        let id = store.add_placeholder(&CommitDefaults::default());

        assert!(store.toggle_show_variants(&id));
        assert!(store.get(&id).unwrap().show_variants);
        assert!(!store.toggle_show_variants(&ProductId::new("missing")));
    }

    #[test]
    fn test_from_products_drops_duplicate_ids() {
        let defaults = CommitDefaults::default();
        let mut a = SelectedProduct::placeholder(&defaults);
        a.id = ProductId::new("5");
        let mut b = a.clone();
        b.title = "second".to_string();

        let store = SelectionStore::from_products([a, b]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.products()[0].title, "");
    }

    #[test]
    fn test_deserialize_drops_duplicate_ids() {
        let mut store = SelectionStore::new();
        store.add_placeholder(&CommitDefaults::default());

        let one = serde_json::to_value(&store).unwrap();
        let entry = one.as_array().unwrap()[0].clone();
        let doubled = serde_json::Value::Array(vec![entry.clone(), entry]);

        let restored: SelectionStore = serde_json::from_value(doubled).unwrap();
        assert_eq!(restored.len(), 1);
        assert_eq!(restored, store);
    }
}
