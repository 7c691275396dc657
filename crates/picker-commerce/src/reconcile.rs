//! Merging a picker's staging list into the committed list.

use crate::discount::DiscountType;
use crate::selection::SelectedProduct;
use crate::staging::StagingList;
use serde::{Deserialize, Serialize};

/// Defaults given to entries as they are committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitDefaults {
    /// Discount type for fresh annotations.
    pub discount_type: DiscountType,
    /// Whether committed products start with their variants expanded.
    pub show_variants: bool,
}

impl Default for CommitDefaults {
    fn default() -> Self {
        Self {
            discount_type: DiscountType::default(),
            show_variants: true,
        }
    }
}

/// Result of a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Nothing new survived deduplication; the list is as it was.
    Unchanged,
    /// The merged list.
    Merged {
        /// New committed list.
        products: Vec<SelectedProduct>,
        /// Number of staged products that made it in.
        added: usize,
        /// Number of staged products dropped as duplicates.
        skipped: usize,
    },
}

impl CommitOutcome {
    /// Check if the commit changed anything.
    pub fn is_merged(&self) -> bool {
        matches!(self, CommitOutcome::Merged { .. })
    }
}

/// Merge `staging` into `committed`.
///
/// Staged products already present in `committed` are dropped whole; no
/// variant-level merging happens. Survivors replace the element at
/// `edit_slot`, or are appended when there is no slot (or the slot is past
/// the end). Neither input is modified.
pub fn commit(
    staging: &StagingList,
    committed: &[SelectedProduct],
    edit_slot: Option<usize>,
    defaults: &CommitDefaults,
) -> CommitOutcome {
    let survivors: Vec<SelectedProduct> = staging
        .entries()
        .iter()
        .filter(|staged| !committed.iter().any(|p| p.id == staged.id))
        .cloned()
        .map(|staged| SelectedProduct::from_staged(staged, defaults))
        .collect();

    let skipped = staging.len() - survivors.len();
    if survivors.is_empty() {
        tracing::debug!(staged = staging.len(), skipped, "commit produced nothing new");
        return CommitOutcome::Unchanged;
    }

    let added = survivors.len();
    let mut products = Vec::with_capacity(committed.len() + added);

    match edit_slot {
        Some(slot) if slot < committed.len() => {
            products.extend_from_slice(&committed[..slot]);
            products.extend(survivors);
            products.extend_from_slice(&committed[slot + 1..]);
        }
        _ => {
            products.extend_from_slice(committed);
            products.extend(survivors);
        }
    }

    tracing::debug!(?edit_slot, added, skipped, total = products.len(), "committed staging");

    CommitOutcome::Merged {
        products,
        added,
        skipped,
    }
}
