//! Committed product and variant records.

use crate::catalog::CatalogImage;
use crate::discount::DiscountAnnotation;
use crate::ids::{ProductId, VariantId};
use crate::reconcile::CommitDefaults;
use crate::staging::{StagedProduct, StagedVariant};
use serde::{Deserialize, Serialize};

/// A product in the committed list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectedProduct {
    /// Product ID (unique within the list).
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Product image.
    #[serde(default)]
    pub image: Option<CatalogImage>,
    /// Variants, in user-controlled order.
    pub variants: Vec<SelectedVariant>,
    /// Whether the variant sub-list is expanded.
    pub show_variants: bool,
    /// Product-level discount.
    pub discount: DiscountAnnotation,
    /// Empty slot added by "Add Product", not yet filled from the catalog.
    #[serde(default)]
    pub placeholder: bool,
}

impl SelectedProduct {
    /// Create an empty placeholder slot.
    pub fn placeholder(defaults: &CommitDefaults) -> Self {
        Self {
            id: ProductId::generate(),
            title: String::new(),
            image: None,
            variants: Vec::new(),
            show_variants: false,
            discount: DiscountAnnotation::hidden(defaults.discount_type),
            placeholder: true,
        }
    }

    /// Normalize a staged product into the committed shape.
    pub fn from_staged(staged: StagedProduct, defaults: &CommitDefaults) -> Self {
        Self {
            id: staged.id,
            title: staged.title,
            image: staged.image,
            variants: staged
                .variants
                .into_iter()
                .map(|v| SelectedVariant::from_staged(v, defaults))
                .collect(),
            show_variants: defaults.show_variants,
            discount: DiscountAnnotation::hidden(defaults.discount_type),
            placeholder: false,
        }
    }

    /// Get a variant by ID.
    pub fn variant(&self, variant_id: &VariantId) -> Option<&SelectedVariant> {
        self.variants.iter().find(|v| &v.id == variant_id)
    }

    pub(crate) fn variant_mut(&mut self, variant_id: &VariantId) -> Option<&mut SelectedVariant> {
        self.variants.iter_mut().find(|v| &v.id == variant_id)
    }

    /// Position of a variant.
    pub fn variant_index(&self, variant_id: &VariantId) -> Option<usize> {
        self.variants.iter().position(|v| &v.id == variant_id)
    }
}

/// A variant in the committed list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectedVariant {
    /// Variant ID (unique within its product).
    pub id: VariantId,
    /// Parent product ID.
    pub product_id: ProductId,
    /// Variant title.
    pub title: String,
    /// Price as text.
    pub price: String,
    /// Units on hand when committed.
    pub inventory_quantity: i64,
    /// Variant-level discount.
    pub discount: DiscountAnnotation,
}

impl SelectedVariant {
    /// Normalize a staged variant into the committed shape.
    pub fn from_staged(staged: StagedVariant, defaults: &CommitDefaults) -> Self {
        Self {
            id: staged.id,
            product_id: staged.product_id,
            title: staged.title,
            price: staged.price,
            inventory_quantity: staged.inventory_quantity,
            discount: DiscountAnnotation::hidden(defaults.discount_type),
        }
    }
}
