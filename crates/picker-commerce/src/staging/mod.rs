//! Staging module.
//!
//! Holds the tentative selection of one open picker and the toggle engine
//! that edits it. A staging list never outlives its picker session.

mod entry;
mod toggle;

pub use entry::{StagedProduct, StagedVariant};
pub use toggle::{toggle, TogglePolicy};

use crate::ids::{ProductId, VariantId};
use serde::{Deserialize, Serialize};

/// Products ticked in the open picker, in the order they were ticked.
///
/// Holds at most one entry per product id, and within an entry at most one
/// record per variant id. Deserializing goes through
/// [`StagingList::from_entries`] to keep it that way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<StagedProduct>", into = "Vec<StagedProduct>")]
pub struct StagingList {
    entries: Vec<StagedProduct>,
}

impl StagingList {
    /// Create an empty staging list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a staging list from entries, keeping the first of any duplicate
    /// product or variant id.
    pub fn from_entries(entries: impl IntoIterator<Item = StagedProduct>) -> Self {
        let mut list = Self::new();
        for mut entry in entries {
            if list.position(&entry.id).is_some() {
                continue;
            }
            let mut seen: Vec<VariantId> = Vec::new();
            entry.variants.retain(|v| {
                if seen.contains(&v.id) {
                    false
                } else {
                    seen.push(v.id.clone());
                    true
                }
            });
            list.entries.push(entry);
        }
        list
    }

    /// Staged entries.
    pub fn entries(&self) -> &[StagedProduct] {
        &self.entries
    }

    /// Consume and return the entries.
    pub fn into_entries(self) -> Vec<StagedProduct> {
        self.entries
    }

    /// Get a staged product by ID.
    pub fn get(&self, product_id: &ProductId) -> Option<&StagedProduct> {
        self.entries.iter().find(|p| &p.id == product_id)
    }

    /// Position of a staged product.
    pub fn position(&self, product_id: &ProductId) -> Option<usize> {
        self.entries.iter().position(|p| &p.id == product_id)
    }

    /// Check if a product is ticked.
    pub fn is_product_selected(&self, product_id: &ProductId) -> bool {
        self.position(product_id).is_some()
    }

    /// Check if a variant is ticked.
    pub fn is_variant_selected(&self, product_id: &ProductId, variant_id: &VariantId) -> bool {
        self.get(product_id)
            .map(|p| p.has_variant(variant_id))
            .unwrap_or(false)
    }

    /// Number of ticked products.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is ticked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<StagedProduct>> for StagingList {
    fn from(entries: Vec<StagedProduct>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<StagingList> for Vec<StagedProduct> {
    fn from(list: StagingList) -> Self {
        list.into_entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogProduct, CatalogVariant};

    fn towel() -> CatalogProduct {
        CatalogProduct::new("77", "Fog Linen Chambray Towel")
            .with_variant(CatalogVariant::new("1", "S / White", "49", 5))
            .with_variant(CatalogVariant::new("2", "M / White", "49", 5))
    }

    #[test]
    fn test_selection_queries() {
        let list = StagingList::from_entries([StagedProduct::from_catalog(&towel())]);
        let product_id = ProductId::new("77");

        assert!(list.is_product_selected(&product_id));
        assert!(list.is_variant_selected(&product_id, &VariantId::new("2")));
        assert!(!list.is_variant_selected(&product_id, &VariantId::new("9")));
        assert!(!list.is_variant_selected(&ProductId::new("80"), &VariantId::new("1")));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_from_entries_drops_duplicates() {
        let mut entry = StagedProduct::from_catalog(&towel());
        let repeated = entry.variants[0].clone();
        entry.variants.push(repeated);

        let list = StagingList::from_entries([entry, StagedProduct::from_catalog(&towel())]);
        assert_eq!(list.len(), 1);
        assert_eq!(list.entries()[0].variants.len(), 2);
    }

    #[test]
    fn test_deserialize_drops_duplicates() {
        let list = StagingList::from_entries([StagedProduct::from_catalog(&towel())]);
        let entry = serde_json::to_value(&list).unwrap()[0].clone();
        let doubled = serde_json::Value::Array(vec![entry.clone(), entry]);

        let restored: StagingList = serde_json::from_value(doubled).unwrap();
        assert_eq!(restored, list);
    }
}
