//! The catalog provider seam.

use crate::error::FetchError;
use async_trait::async_trait;
use picker_commerce::catalog::CatalogProduct;

/// A paginated, searchable product catalog.
///
/// `page` is 1-indexed. An empty `query` lists everything. A page shorter
/// than `page_size` is the last one.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch one page of products whose title matches `query`.
    async fn fetch_page(
        &self,
        query: &str,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<CatalogProduct>, FetchError>;
}

#[async_trait]
impl<P: CatalogProvider + ?Sized> CatalogProvider for std::sync::Arc<P> {
    async fn fetch_page(
        &self,
        query: &str,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<CatalogProduct>, FetchError> {
        (**self).fetch_page(query, page, page_size).await
    }
}
