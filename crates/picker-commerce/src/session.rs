//! One open picker: its staging list, catalog feed and edit target.

use crate::catalog::{CatalogFeed, CatalogProduct, PageRequest};
use crate::ids::{ProductId, SessionId, VariantId};
use crate::staging::{self, StagingList, TogglePolicy};

/// State that lives exactly as long as an open picker.
///
/// Dropping the session drops its staging list and feed, so catalog pages
/// that arrive afterwards have nothing to land in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerSession {
    id: SessionId,
    edit_target: Option<ProductId>,
    staging: StagingList,
    feed: CatalogFeed,
}

impl PickerSession {
    /// Open a session and request the first, unfiltered catalog page.
    ///
    /// `edit_target` is the committed product the merged result will replace.
    pub fn open(edit_target: Option<ProductId>, page_size: usize) -> (Self, PageRequest) {
        let id = SessionId::generate();
        let mut feed = CatalogFeed::new(id.clone(), page_size);
        let request = feed.search("");
        let session = Self {
            id,
            edit_target,
            staging: StagingList::new(),
            feed,
        };
        (session, request)
    }

    /// Session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Product this session replaces on commit, if any.
    pub fn edit_target(&self) -> Option<&ProductId> {
        self.edit_target.as_ref()
    }

    /// Ticked products.
    pub fn staging(&self) -> &StagingList {
        &self.staging
    }

    /// Loaded catalog pages.
    pub fn feed(&self) -> &CatalogFeed {
        &self.feed
    }

    /// Restart the feed with a new search.
    pub fn search(&mut self, query: &str) -> PageRequest {
        self.feed.search(query)
    }

    /// Request the next catalog page.
    pub fn load_more(&mut self) -> Option<PageRequest> {
        self.feed.next_page()
    }

    /// Apply a fetched page; `false` if it was stale.
    pub fn receive_page(&mut self, request: &PageRequest, products: Option<Vec<CatalogProduct>>) -> bool {
        self.feed.apply(request, products)
    }

    /// Toggle a product or variant against the loaded catalog.
    pub fn toggle(
        &mut self,
        product_id: &ProductId,
        variant_id: Option<&VariantId>,
        policy: &TogglePolicy,
    ) -> bool {
        let next = staging::toggle(&self.staging, self.feed.products(), product_id, variant_id, policy);
        if next == self.staging {
            return false;
        }
        self.staging = next;
        true
    }

    /// Consume the session, keeping only what it staged.
    pub fn into_staging(self) -> StagingList {
        self.staging
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogVariant;

    fn page() -> Vec<CatalogProduct> {
        vec![CatalogProduct::new("77", "Fog Linen Chambray Towel")
            .with_variant(CatalogVariant::new("1", "S / White", "49", 5))]
    }

    #[test]
    fn test_open_requests_first_page() {
        let (session, request) = PickerSession::open(None, 10);
        assert_eq!(&request.session_id, session.id());
        assert_eq!(request.page, 1);
        assert_eq!(request.query, "");
        assert!(session.staging().is_empty());
    }

    #[test]
    fn test_toggle_needs_loaded_catalog() {
        let (mut session, request) = PickerSession::open(None, 10);
        let product = ProductId::new("77");

        assert!(!session.toggle(&product, None, &TogglePolicy::default()));

        session.receive_page(&request, Some(page()));
        assert!(session.toggle(&product, None, &TogglePolicy::default()));
        assert!(session.staging().is_product_selected(&product));
    }

    #[test]
    fn test_sessions_do_not_share_requests() {
        let (_old, old_request) = PickerSession::open(None, 10);
        let (mut session, _request) = PickerSession::open(None, 10);

        assert!(!session.receive_page(&old_request, Some(page())));
        assert!(session.feed().products().is_empty());
    }
}
