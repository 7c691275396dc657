//! Catalog product and variant types.
//!
//! These are read-only snapshots of what the catalog returned. They are never
//! stored in the committed list directly; see [`crate::staging`] and
//! [`crate::selection`] for the shapes they are converted into.

use crate::ids::{ProductId, VariantId};
use serde::{Deserialize, Serialize};

/// Product image reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogImage {
    /// Image identifier, when the catalog provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Image URL.
    pub src: String,
}

/// A product as returned by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogProduct {
    /// Catalog product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Product image.
    #[serde(default)]
    pub image: Option<CatalogImage>,
    /// Variants in catalog order.
    #[serde(default)]
    pub variants: Vec<CatalogVariant>,
}

impl CatalogProduct {
    /// Create a product with no variants.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: None,
            variants: Vec::new(),
        }
    }

    /// Add a variant, binding it to this product.
    pub fn with_variant(mut self, mut variant: CatalogVariant) -> Self {
        variant.product_id = self.id.clone();
        self.variants.push(variant);
        self
    }

    /// Set the image.
    pub fn with_image(mut self, src: impl Into<String>) -> Self {
        self.image = Some(CatalogImage {
            id: None,
            src: src.into(),
        });
        self
    }

    /// Get a variant by ID.
    pub fn variant(&self, variant_id: &VariantId) -> Option<&CatalogVariant> {
        self.variants.iter().find(|v| &v.id == variant_id)
    }

    /// Check if any variant reports negative inventory (oversold).
    pub fn has_negative_inventory(&self) -> bool {
        self.variants.iter().any(|v| v.inventory_quantity < 0)
    }

    /// Check if the title matches a search query (case-insensitive).
    ///
    /// An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.title.to_lowercase().contains(&query.to_lowercase())
    }
}

/// A variant as returned by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogVariant {
    /// Catalog variant identifier.
    pub id: VariantId,
    /// Parent product ID.
    #[serde(default)]
    pub product_id: ProductId,
    /// Variant title (e.g., "S / White").
    pub title: String,
    /// Price as text, exactly as the catalog formats it.
    pub price: String,
    /// Units on hand; negative when oversold.
    #[serde(default)]
    pub inventory_quantity: i64,
}

impl CatalogVariant {
    /// Create a variant. The parent id is filled in by [`CatalogProduct::with_variant`].
    pub fn new(
        id: impl Into<VariantId>,
        title: impl Into<String>,
        price: impl Into<String>,
        inventory_quantity: i64,
    ) -> Self {
        Self {
            id: id.into(),
            product_id: ProductId::default(),
            title: title.into(),
            price: price.into(),
            inventory_quantity,
        }
    }

    /// Check if the variant has stock on hand.
    pub fn is_available(&self) -> bool {
        self.inventory_quantity > 0
    }
}
