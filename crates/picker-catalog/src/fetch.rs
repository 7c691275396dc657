//! Resolving page requests against a provider.

use crate::error::FetchError;
use crate::provider::CatalogProvider;
use crate::retry::RetryPolicy;
use picker_commerce::catalog::{CatalogProduct, PageRequest};
use std::time::Duration;

/// Fetch policy combining timeout and retry configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPolicy {
    /// Bound on each attempt.
    pub timeout: Duration,
    /// Retry policy.
    pub retry: RetryPolicy,
}

impl FetchPolicy {
    /// Create a new fetch policy.
    pub fn new(timeout: Duration, retry: RetryPolicy) -> Self {
        Self { timeout, retry }
    }
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            retry: RetryPolicy::default(),
        }
    }
}

/// Fetch the page a request asks for, retrying transient failures.
pub async fn fetch_page<P>(
    provider: &P,
    request: &PageRequest,
    policy: &FetchPolicy,
) -> Result<Vec<CatalogProduct>, FetchError>
where
    P: CatalogProvider + ?Sized,
{
    let mut attempt = 0;
    loop {
        let fetch = provider.fetch_page(&request.query, request.page, request.page_size);
        let error = match tokio::time::timeout(policy.timeout, fetch).await {
            Ok(Ok(products)) => return Ok(products),
            Ok(Err(err)) => err,
            Err(_) => FetchError::Timeout(policy.timeout),
        };

        if !policy.retry.should_retry(&error, attempt) {
            return Err(error);
        }

        let delay = policy.retry.backoff.delay_for_attempt(attempt);
        tracing::debug!(
            query = %request.query,
            page = request.page,
            attempt,
            ?delay,
            error = %error,
            "retrying catalog fetch"
        );
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}

/// Fetch a page for the editor.
///
/// A final failure becomes `None`, which the editor treats as an empty
/// page, so the picker stops paging instead of surfacing an error.
pub async fn fetch_page_with_policy<P>(
    provider: &P,
    request: &PageRequest,
    policy: &FetchPolicy,
) -> Option<Vec<CatalogProduct>>
where
    P: CatalogProvider + ?Sized,
{
    match fetch_page(provider, request, policy).await {
        Ok(products) => Some(products),
        Err(err) => {
            tracing::warn!(
                query = %request.query,
                page = request.page,
                error = %err,
                "catalog fetch failed"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryCatalog;
    use crate::retry::BackoffStrategy;
    use async_trait::async_trait;
    use picker_commerce::prelude::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Fails with a connection error a fixed number of times, then serves.
    struct Flaky {
        failures: u32,
        calls: AtomicU32,
        inner: InMemoryCatalog,
    }

    #[async_trait]
    impl CatalogProvider for Flaky {
        async fn fetch_page(
            &self,
            query: &str,
            page: usize,
            page_size: usize,
        ) -> Result<Vec<CatalogProduct>, FetchError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                return Err(FetchError::Connection("connection reset".to_string()));
            }
            self.inner.fetch_page(query, page, page_size).await
        }
    }

    struct Slow;

    #[async_trait]
    impl CatalogProvider for Slow {
        async fn fetch_page(&self, _: &str, _: usize, _: usize) -> Result<Vec<CatalogProduct>, FetchError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(Vec::new())
        }
    }

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new(vec![
            CatalogProduct::new("1", "Terrarium"),
            CatalogProduct::new("2", "Towel").with_variant(CatalogVariant::new("20", "Blue", "12", 4)),
        ])
    }

    fn flaky(failures: u32) -> Flaky {
        Flaky {
            failures,
            calls: AtomicU32::new(0),
            inner: catalog(),
        }
    }

    fn policy(retries: u32) -> FetchPolicy {
        FetchPolicy::new(
            Duration::from_millis(50),
            RetryPolicy::new(retries).with_backoff(BackoffStrategy::None),
        )
    }

    fn first_page() -> PageRequest {
        let mut editor = ProductListEditor::default();
        editor.open_picker(None)
    }

    #[tokio::test]
    async fn test_retries_transient_failures() {
        let provider = flaky(2);
        let products = fetch_page(&provider, &first_page(), &policy(2)).await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_retries() {
        let provider = flaky(5);
        let err = fetch_page(&provider, &first_page(), &policy(1)).await.unwrap_err();

        assert!(matches!(err, FetchError::Connection(_)));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_timeout() {
        let err = fetch_page(&Slow, &first_page(), &policy(0)).await.unwrap_err();
        assert!(matches!(err, FetchError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_failure_becomes_empty_page() {
        let mut editor = ProductListEditor::default();
        let request = editor.open_picker(None);

        let page = fetch_page_with_policy(&Slow, &request, &policy(0)).await;
        assert!(page.is_none());

        assert!(editor.receive_page(&request, page));
        let feed = editor.session().unwrap().feed();
        assert!(feed.products().is_empty());
        assert!(!feed.has_more());
    }

    #[tokio::test]
    async fn test_feeds_editor() {
        let provider = catalog();
        let mut editor = ProductListEditor::default();
        editor.open_picker(None);
        let request = editor.search("tow").unwrap();

        let page = fetch_page_with_policy(&provider, &request, &FetchPolicy::default()).await;
        assert!(editor.receive_page(&request, page));
        editor.toggle(&ProductId::new("2"), None);
        assert!(editor.is_product_selected(&ProductId::new("2")));
    }
}
