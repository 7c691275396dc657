//! Checkbox toggling inside the picker.

use crate::catalog::{CatalogProduct, CatalogVariant};
use crate::ids::{ProductId, VariantId};
use crate::staging::{StagedProduct, StagedVariant, StagingList};
use serde::{Deserialize, Serialize};

/// Which catalog entries the toggle engine refuses to stage.
///
/// Presentation layers usually gray these out as well; the policy is what
/// keeps them out of the staging list when they don't.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TogglePolicy {
    /// Refuse whole-product ticks on products with an oversold variant.
    #[serde(default = "default_true")]
    pub block_negative_inventory_products: bool,
    /// Refuse ticking single variants with no stock on hand.
    #[serde(default = "default_true")]
    pub block_unavailable_variants: bool,
}

fn default_true() -> bool {
    true
}

impl TogglePolicy {
    /// A policy that stages anything.
    pub fn permissive() -> Self {
        Self {
            block_negative_inventory_products: false,
            block_unavailable_variants: false,
        }
    }

    /// Check if a whole product may be staged.
    pub fn allows_product(&self, product: &CatalogProduct) -> bool {
        !(self.block_negative_inventory_products && product.has_negative_inventory())
    }

    /// Check if a single variant may be staged.
    pub fn allows_variant(&self, variant: &CatalogVariant) -> bool {
        !(self.block_unavailable_variants && !variant.is_available())
    }
}

impl Default for TogglePolicy {
    fn default() -> Self {
        Self {
            block_negative_inventory_products: true,
            block_unavailable_variants: true,
        }
    }
}

/// Toggle a product (`variant_id = None`) or one of its variants.
///
/// Returns a new staging list; `staging` is left untouched. Unknown products
/// or variants, and entries the policy refuses, produce an unchanged copy.
///
/// Toggling the same target twice restores `staging` when the target starts
/// out absent. When it starts out staged, the second toggle re-adds it at the
/// end, so the contents are restored but not the order.
pub fn toggle(
    staging: &StagingList,
    catalog: &[CatalogProduct],
    product_id: &ProductId,
    variant_id: Option<&VariantId>,
    policy: &TogglePolicy,
) -> StagingList {
    let mut next = staging.clone();
    let catalog_product = catalog.iter().find(|p| &p.id == product_id);

    match (next.position(product_id), variant_id) {
        // Whole product, not staged yet.
        (None, None) => {
            let Some(product) = catalog_product else {
                return next;
            };
            if !policy.allows_product(product) {
                tracing::debug!(product_id = %product_id, "whole-product toggle refused by policy");
                return next;
            }
            next.entries.push(StagedProduct::from_catalog(product));
        }

        // Whole product, already staged.
        (Some(index), None) => {
            next.entries.remove(index);
        }

        // Single variant of a product that isn't staged.
        (None, Some(variant_id)) => {
            let Some(product) = catalog_product else {
                return next;
            };
            let Some(variant) = stageable_variant(product, variant_id, policy) else {
                return next;
            };
            let mut entry = StagedProduct::without_variants(product);
            entry.variants.push(variant);
            next.entries.push(entry);
        }

        // Single variant of a staged product.
        (Some(index), Some(variant_id)) => {
            let entry = &mut next.entries[index];
            match entry.variant_index(variant_id) {
                Some(variant_index) => {
                    entry.variants.remove(variant_index);
                    if entry.variants.is_empty() {
                        next.entries.remove(index);
                    }
                }
                None => {
                    let Some(product) = catalog_product else {
                        return next;
                    };
                    let Some(variant) = stageable_variant(product, variant_id, policy) else {
                        return next;
                    };
                    entry.variants.push(variant);
                }
            }
        }
    }

    next
}

fn stageable_variant(
    product: &CatalogProduct,
    variant_id: &VariantId,
    policy: &TogglePolicy,
) -> Option<StagedVariant> {
    let variant = product.variant(variant_id)?;
    if !policy.allows_variant(variant) {
        tracing::debug!(
            product_id = %product.id,
            variant_id = %variant_id,
            inventory = variant.inventory_quantity,
            "variant toggle refused by policy"
        );
        return None;
    }
    Some(StagedVariant::from_catalog(variant))
}
