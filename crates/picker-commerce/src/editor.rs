//! The store handle driven by the presentation layer.

use crate::catalog::{CatalogProduct, PageRequest};
use crate::config::PickerConfig;
use crate::ids::{ProductId, VariantId};
use crate::reconcile::{self, CommitOutcome};
use crate::selection::SelectionStore;
use crate::session::PickerSession;

/// Owns the committed list and, while a picker is open, its session.
///
/// Every user action maps to one method call; the caller re-renders from
/// [`ProductListEditor::store`] afterwards.
#[derive(Debug, Clone)]
pub struct ProductListEditor {
    config: PickerConfig,
    store: SelectionStore,
    session: Option<PickerSession>,
}

impl ProductListEditor {
    /// Create an editor with an empty list.
    pub fn new(config: PickerConfig) -> Self {
        Self::with_store(config, SelectionStore::new())
    }

    /// Create an editor over an existing list.
    pub fn with_store(config: PickerConfig, store: SelectionStore) -> Self {
        Self {
            config,
            store,
            session: None,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// The committed list.
    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    /// The committed list, for reorder, discount and removal operations.
    pub fn store_mut(&mut self) -> &mut SelectionStore {
        &mut self.store
    }

    /// The open picker, if any.
    pub fn session(&self) -> Option<&PickerSession> {
        self.session.as_ref()
    }

    /// Check if a picker is open.
    pub fn is_picker_open(&self) -> bool {
        self.session.is_some()
    }

    /// Append an empty placeholder slot ("Add Product").
    pub fn add_placeholder(&mut self) -> ProductId {
        self.store.add_placeholder(&self.config.commit_defaults())
    }

    /// Open the picker, replacing any session that is still open.
    ///
    /// With `edit_slot`, the merged result will take the place of the product
    /// currently at that index. The slot is pinned to that product's id, so
    /// it still resolves correctly if the list shifts before commit. A slot
    /// past the end behaves like `None`.
    pub fn open_picker(&mut self, edit_slot: Option<usize>) -> PageRequest {
        let edit_target = edit_slot
            .and_then(|slot| self.store.products().get(slot))
            .map(|p| p.id.clone());

        if let Some(previous) = self.session.take() {
            tracing::debug!(session_id = %previous.id(), "discarding open picker session");
        }

        let (session, request) = PickerSession::open(edit_target, self.config.page_size);
        tracing::debug!(session_id = %session.id(), ?edit_slot, "picker opened");
        self.session = Some(session);
        request
    }

    /// Search the catalog. Returns `None` when no picker is open.
    pub fn search(&mut self, query: &str) -> Option<PageRequest> {
        self.session.as_mut().map(|s| s.search(query))
    }

    /// Request the next catalog page, if there is one.
    pub fn load_more(&mut self) -> Option<PageRequest> {
        self.session.as_mut().and_then(PickerSession::load_more)
    }

    /// Hand a fetched page to the open picker.
    ///
    /// Pages for a closed or superseded session, or for an outdated query,
    /// are dropped. Returns `true` if the page was applied.
    pub fn receive_page(&mut self, request: &PageRequest, products: Option<Vec<CatalogProduct>>) -> bool {
        let applied = self
            .session
            .as_mut()
            .map(|s| s.receive_page(request, products))
            .unwrap_or(false);

        if !applied {
            tracing::debug!(
                session_id = %request.session_id,
                page = request.page,
                query = %request.query,
                "dropping stale catalog page"
            );
        }
        applied
    }

    /// Tick or untick a product (`variant_id = None`) or variant in the picker.
    pub fn toggle(&mut self, product_id: &ProductId, variant_id: Option<&VariantId>) -> bool {
        let policy = self.config.toggle;
        self.session
            .as_mut()
            .map(|s| s.toggle(product_id, variant_id, &policy))
            .unwrap_or(false)
    }

    /// Check if a product is ticked in the open picker.
    pub fn is_product_selected(&self, product_id: &ProductId) -> bool {
        self.session
            .as_ref()
            .map(|s| s.staging().is_product_selected(product_id))
            .unwrap_or(false)
    }

    /// Check if a variant is ticked in the open picker.
    pub fn is_variant_selected(&self, product_id: &ProductId, variant_id: &VariantId) -> bool {
        self.session
            .as_ref()
            .map(|s| s.staging().is_variant_selected(product_id, variant_id))
            .unwrap_or(false)
    }

    /// Merge the picker's selection into the list ("Add") and close it.
    ///
    /// The session is closed whatever the outcome.
    pub fn confirm_picker(&mut self) -> CommitOutcome {
        let Some(session) = self.session.take() else {
            return CommitOutcome::Unchanged;
        };

        let edit_slot = session.edit_target().and_then(|id| self.store.position(id));
        let staging = session.into_staging();
        let outcome = reconcile::commit(
            &staging,
            self.store.products(),
            edit_slot,
            &self.config.commit_defaults(),
        );

        if let CommitOutcome::Merged { products, .. } = &outcome {
            self.store.replace(products.clone());
        }
        outcome
    }

    /// Close the picker without committing ("Cancel").
    pub fn cancel_picker(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                tracing::debug!(session_id = %session.id(), staged = session.staging().len(), "picker cancelled");
                true
            }
            None => false,
        }
    }
}

impl Default for ProductListEditor {
    fn default() -> Self {
        Self::new(PickerConfig::default())
    }
}
