//! Staged product and variant records.

use crate::catalog::{CatalogImage, CatalogProduct, CatalogVariant};
use crate::ids::{ProductId, VariantId};
use serde::{Deserialize, Serialize};

/// A product ticked in the open picker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StagedProduct {
    /// Catalog product ID.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Product image.
    pub image: Option<CatalogImage>,
    /// Ticked variants, in the order they were ticked.
    pub variants: Vec<StagedVariant>,
}

impl StagedProduct {
    /// Stage a catalog product with every one of its variants.
    pub fn from_catalog(product: &CatalogProduct) -> Self {
        Self {
            variants: product.variants.iter().map(StagedVariant::from_catalog).collect(),
            ..Self::without_variants(product)
        }
    }

    /// Stage a catalog product with no variants yet.
    pub fn without_variants(product: &CatalogProduct) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            image: product.image.clone(),
            variants: Vec::new(),
        }
    }

    /// Position of a staged variant.
    pub fn variant_index(&self, variant_id: &VariantId) -> Option<usize> {
        self.variants.iter().position(|v| &v.id == variant_id)
    }

    /// Check if a variant is staged.
    pub fn has_variant(&self, variant_id: &VariantId) -> bool {
        self.variant_index(variant_id).is_some()
    }
}

/// A variant ticked in the open picker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StagedVariant {
    /// Catalog variant ID.
    pub id: VariantId,
    /// Parent product ID.
    pub product_id: ProductId,
    /// Variant title.
    pub title: String,
    /// Price as text.
    pub price: String,
    /// Units on hand.
    pub inventory_quantity: i64,
}

impl StagedVariant {
    /// Stage a catalog variant.
    pub fn from_catalog(variant: &CatalogVariant) -> Self {
        Self {
            id: variant.id.clone(),
            product_id: variant.product_id.clone(),
            title: variant.title.clone(),
            price: variant.price.clone(),
            inventory_quantity: variant.inventory_quantity,
        }
    }
}
