//! Catalog access for the product picker.
//!
//! This crate provides:
//! - `CatalogProvider` - Async source of catalog pages
//! - `InMemoryCatalog` - Provider over a JSON fixture
//! - `RetryPolicy` / `FetchPolicy` - Retry and timeout around a provider
//! - `fetch_page_with_policy` - Resolve a `PageRequest` into a page for the editor

mod error;
mod fetch;
mod memory;
mod provider;
mod retry;

pub use error::*;
pub use fetch::*;
pub use memory::*;
pub use provider::*;
pub use retry::*;
