//! Removal and cascade.

use crate::ids::{ProductId, VariantId};
use crate::selection::SelectionStore;

impl SelectionStore {
    /// Remove a product, placeholder or not.
    pub fn remove_product(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.len();
        self.products_mut().retain(|p| &p.id != product_id);
        self.len() < len_before
    }

    /// Remove a variant from its product.
    ///
    /// When this removes the product's last variant, the product goes too,
    /// unless it is a placeholder slot.
    pub fn remove_variant(&mut self, product_id: &ProductId, variant_id: &VariantId) -> bool {
        let Some(index) = self.position(product_id) else {
            return false;
        };

        let product = &mut self.products_mut()[index];
        let Some(variant_index) = product.variant_index(variant_id) else {
            return false;
        };
        product.variants.remove(variant_index);

        if product.variants.is_empty() && !product.placeholder {
            tracing::debug!(product_id = %product_id, "last variant removed, dropping product");
            self.products_mut().remove(index);
        }

        true
    }
}
