//! Drag-driven reordering of products and variants.
//!
//! A drag host reports `(dragged_index, target_index)` on every pointer hover,
//! often repeating the same pair many times in one gesture. Moves are
//! therefore resolved against the dragged element's *current* position: a
//! drag session remembers which element is being dragged, and each hover
//! moves that element to the target index, which is a no-op once it is there.

use crate::ids::{ProductId, VariantId};
use crate::selection::SelectionStore;
use serde::{Deserialize, Serialize};

/// One hover reported by a drag host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    /// Index the host believes the dragged element is at.
    pub from: usize,
    /// Index under the pointer.
    pub to: usize,
}

impl MoveIntent {
    /// Create a move from `from` to `to`.
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

/// Remove the element at `from` and insert it at `to`.
///
/// `from == to` and out-of-range indices leave `items` untouched.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

impl SelectionStore {
    /// Move a product from one index to another.
    pub fn move_product(&mut self, from: usize, to: usize) -> bool {
        move_item(self.products_mut(), from, to)
    }

    /// Move a variant within one product.
    pub fn move_variant(&mut self, from: usize, to: usize, product_id: &ProductId) -> bool {
        match self.get_mut(product_id) {
            Some(product) => move_item(&mut product.variants, from, to),
            None => false,
        }
    }

    /// Start dragging the product at `index`.
    pub fn begin_product_drag(&self, index: usize) -> Option<ProductDrag> {
        self.products().get(index).map(|p| ProductDrag {
            dragged: p.id.clone(),
        })
    }

    /// Start dragging the variant at `index` of a product.
    pub fn begin_variant_drag(&self, product_id: &ProductId, index: usize) -> Option<VariantDrag> {
        let variant = self.get(product_id)?.variants.get(index)?;
        Some(VariantDrag {
            product_id: product_id.clone(),
            dragged: variant.id.clone(),
        })
    }
}

/// An in-progress product drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDrag {
    dragged: ProductId,
}

impl ProductDrag {
    /// The product being dragged.
    pub fn dragged(&self) -> &ProductId {
        &self.dragged
    }

    /// Move the dragged product to `target`, wherever it currently is.
    pub fn hover(&self, store: &mut SelectionStore, target: usize) -> bool {
        let Some(from) = store.position(&self.dragged) else {
            return false;
        };
        let moved = store.move_product(from, target);
        if moved {
            tracing::debug!(product_id = %self.dragged, from, to = target, "product moved");
        }
        moved
    }
}

/// An in-progress variant drag within one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantDrag {
    product_id: ProductId,
    dragged: VariantId,
}

impl VariantDrag {
    /// The variant being dragged.
    pub fn dragged(&self) -> &VariantId {
        &self.dragged
    }

    /// Move the dragged variant to `target`, wherever it currently is.
    pub fn hover(&self, store: &mut SelectionStore, target: usize) -> bool {
        let Some(from) = store
            .get(&self.product_id)
            .and_then(|p| p.variant_index(&self.dragged))
        else {
            return false;
        };
        let moved = store.move_variant(from, target, &self.product_id);
        if moved {
            tracing::debug!(
                product_id = %self.product_id,
                variant_id = %self.dragged,
                from,
                to = target,
                "variant moved"
            );
        }
        moved
    }
}

/// Apply one gesture's worth of product hovers.
///
/// The dragged product is the one at the first intent's `from` index; later
/// `from` values are ignored. Returns the number of hovers that moved it.
pub fn apply_product_hovers(
    store: &mut SelectionStore,
    intents: impl IntoIterator<Item = MoveIntent>,
) -> usize {
    let mut intents = intents.into_iter().peekable();
    let Some(drag) = intents.peek().and_then(|first| store.begin_product_drag(first.from)) else {
        return 0;
    };
    intents.filter(|intent| drag.hover(store, intent.to)).count()
}

/// Apply one gesture's worth of variant hovers within a product.
pub fn apply_variant_hovers(
    store: &mut SelectionStore,
    product_id: &ProductId,
    intents: impl IntoIterator<Item = MoveIntent>,
) -> usize {
    let mut intents = intents.into_iter().peekable();
    let Some(drag) = intents
        .peek()
        .and_then(|first| store.begin_variant_drag(product_id, first.from))
    else {
        return 0;
    };
    intents.filter(|intent| drag.hover(store, intent.to)).count()
}
