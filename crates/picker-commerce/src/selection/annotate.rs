//! Discount annotator.

use crate::discount::{DiscountAnnotation, DiscountType};
use crate::ids::{ProductId, VariantId};
use crate::selection::SelectionStore;

impl SelectionStore {
    /// Show or hide a product's discount inputs.
    pub fn toggle_product_discount(&mut self, product_id: &ProductId) -> bool {
        self.with_product_discount(product_id, DiscountAnnotation::toggle_visible)
    }

    /// Store a product's raw discount text.
    pub fn set_product_discount_value(&mut self, product_id: &ProductId, value: impl Into<String>) -> bool {
        let value = value.into();
        self.with_product_discount(product_id, |d| d.set_value(value))
    }

    /// Set a product's discount type.
    pub fn set_product_discount_type(&mut self, product_id: &ProductId, kind: DiscountType) -> bool {
        self.with_product_discount(product_id, |d| d.set_kind(kind))
    }

    /// Show or hide a variant's discount inputs.
    pub fn toggle_variant_discount(&mut self, product_id: &ProductId, variant_id: &VariantId) -> bool {
        self.with_variant_discount(product_id, variant_id, DiscountAnnotation::toggle_visible)
    }

    /// Store a variant's raw discount text.
    pub fn set_variant_discount_value(
        &mut self,
        product_id: &ProductId,
        variant_id: &VariantId,
        value: impl Into<String>,
    ) -> bool {
        let value = value.into();
        self.with_variant_discount(product_id, variant_id, |d| d.set_value(value))
    }

    /// Set a variant's discount type.
    pub fn set_variant_discount_type(
        &mut self,
        product_id: &ProductId,
        variant_id: &VariantId,
        kind: DiscountType,
    ) -> bool {
        self.with_variant_discount(product_id, variant_id, |d| d.set_kind(kind))
    }

    fn with_product_discount(
        &mut self,
        product_id: &ProductId,
        edit: impl FnOnce(&mut DiscountAnnotation),
    ) -> bool {
        match self.get_mut(product_id) {
            Some(product) => {
                edit(&mut product.discount);
                true
            }
            None => false,
        }
    }

    fn with_variant_discount(
        &mut self,
        product_id: &ProductId,
        variant_id: &VariantId,
        edit: impl FnOnce(&mut DiscountAnnotation),
    ) -> bool {
        match self
            .get_mut(product_id)
            .and_then(|product| product.variant_mut(variant_id))
        {
            Some(variant) => {
                edit(&mut variant.discount);
                true
            }
            None => false,
        }
    }
}
