//! Paged catalog feed for one picker session.
//!
//! The feed remembers which page it asked for last. Responses are matched
//! against that request, so a page that arrives after the query changed (or
//! after the session closed) is dropped instead of merged.

use crate::catalog::CatalogProduct;
use crate::ids::{ProductId, SessionId};
use serde::{Deserialize, Serialize};

/// Default number of products per catalog page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A page the feed wants fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Session that issued the request.
    pub session_id: SessionId,
    /// Query generation; bumped by every new search.
    pub generation: u64,
    /// Search text; empty for an unfiltered listing.
    pub query: String,
    /// Page number (1-indexed).
    pub page: usize,
    /// Items per page.
    pub page_size: usize,
}

impl PageRequest {
    /// Check if this is the first page of its query.
    pub fn is_first_page(&self) -> bool {
        self.page == 1
    }
}

/// Accumulated catalog results for the open picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFeed {
    session_id: SessionId,
    page_size: usize,
    query: String,
    page: usize,
    generation: u64,
    in_flight: bool,
    products: Vec<CatalogProduct>,
    has_more: bool,
    is_empty_search: bool,
}

impl CatalogFeed {
    /// Create an empty feed for a session.
    pub fn new(session_id: SessionId, page_size: usize) -> Self {
        Self {
            session_id,
            page_size: page_size.max(1),
            query: String::new(),
            page: 1,
            generation: 0,
            in_flight: false,
            products: Vec::new(),
            has_more: true,
            is_empty_search: false,
        }
    }

    /// Start over with the first page of a query.
    ///
    /// Any request still in flight becomes stale.
    pub fn search(&mut self, query: &str) -> PageRequest {
        self.generation += 1;
        self.query = query.trim().to_string();
        self.page = 1;
        self.has_more = true;
        self.is_empty_search = false;
        self.in_flight = true;
        self.request()
    }

    /// Request the next page of the current query.
    ///
    /// Returns `None` before the first search, when the catalog is exhausted,
    /// or while a page is already being fetched.
    pub fn next_page(&mut self) -> Option<PageRequest> {
        if self.generation == 0 || !self.has_more || self.in_flight {
            return None;
        }
        self.page += 1;
        self.in_flight = true;
        Some(self.request())
    }

    /// Apply a fetched page.
    ///
    /// `None` (a failed or undefined response) counts as an empty page.
    /// Returns `false` if the request is stale and nothing was applied.
    pub fn apply(&mut self, request: &PageRequest, products: Option<Vec<CatalogProduct>>) -> bool {
        if !self.is_current(request) {
            return false;
        }

        let products = products.unwrap_or_default();
        self.in_flight = false;
        self.has_more = products.len() >= self.page_size;

        if request.is_first_page() {
            self.is_empty_search = products.is_empty() && !self.query.is_empty();
            self.products.clear();
        }

        for product in products {
            if !self.products.iter().any(|p| p.id == product.id) {
                self.products.push(product);
            }
        }

        true
    }

    /// Check if a request is the latest one this feed issued.
    pub fn is_current(&self, request: &PageRequest) -> bool {
        self.in_flight
            && request.session_id == self.session_id
            && request.generation == self.generation
            && request.page == self.page
    }

    /// Get a loaded product by ID.
    pub fn product(&self, product_id: &ProductId) -> Option<&CatalogProduct> {
        self.products.iter().find(|p| &p.id == product_id)
    }

    /// Products loaded so far, in catalog order.
    pub fn products(&self) -> &[CatalogProduct] {
        &self.products
    }

    /// Current search text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Last requested page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Items per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Whether another page may exist.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Whether a non-empty search came back with nothing.
    pub fn is_empty_search(&self) -> bool {
        self.is_empty_search
    }

    /// Whether a page request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    fn request(&self) -> PageRequest {
        PageRequest {
            session_id: self.session_id.clone(),
            generation: self.generation,
            query: self.query.clone(),
            page: self.page,
            page_size: self.page_size,
        }
    }
}
