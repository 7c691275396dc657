//! Product catalog module.
//!
//! Contains read-only catalog types and the paged feed that loads them.

mod feed;
mod product;

pub use feed::{CatalogFeed, PageRequest, DEFAULT_PAGE_SIZE};
pub use product::{CatalogImage, CatalogProduct, CatalogVariant};
