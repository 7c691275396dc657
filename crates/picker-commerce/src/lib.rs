//! Product selection engine for the product picker.
//!
//! A merchant builds an ordered list of products (each with an ordered list of
//! variants) from a paginated catalog, annotates entries with discounts and
//! reorders them by drag. This crate holds the logic behind that list:
//!
//! - **Catalog**: read-only products and variants, paging feed
//! - **Staging**: the tentative selection of one open picker, toggle engine
//! - **Reconcile**: merging staging into the committed list at an edit slot
//! - **Selection**: the committed list, discount annotator, removal cascade
//! - **Reorder**: single-splice moves and drag sessions
//! - **Editor**: the store handle tying a picker session to the list
//!
//! # Example
//!
//! ```rust,ignore
//! use picker_commerce::prelude::*;
//!
//! let mut editor = ProductListEditor::new(PickerConfig::default());
//! let request = editor.open_picker(None);
//! let page = provider.fetch_page(&request.query, request.page, request.page_size).await?;
//! editor.receive_page(&request, Some(page));
//!
//! editor.toggle(&ProductId::new("77"), None);
//! editor.confirm_picker();
//!
//! editor.store_mut().move_product(0, 2);
//! editor.store_mut().toggle_product_discount(&ProductId::new("77"));
//! ```

pub mod config;
pub mod error;
pub mod ids;

pub mod catalog;
pub mod discount;
pub mod editor;
pub mod reconcile;
pub mod reorder;
pub mod selection;
pub mod session;
pub mod staging;

pub use config::PickerConfig;
pub use error::PickerError;
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::PickerConfig;
    pub use crate::error::PickerError;
    pub use crate::ids::*;

    // Catalog
    pub use crate::catalog::{CatalogFeed, CatalogImage, CatalogProduct, CatalogVariant, PageRequest};

    // Discounts
    pub use crate::discount::{DiscountAnnotation, DiscountConfig, DiscountLabels, DiscountType};

    // Staging and commit
    pub use crate::reconcile::{commit, CommitDefaults, CommitOutcome};
    pub use crate::staging::{toggle, StagedProduct, StagedVariant, StagingList, TogglePolicy};

    // Committed list
    pub use crate::reorder::{ProductDrag, VariantDrag};
    pub use crate::selection::{SelectedProduct, SelectedVariant, SelectionStore};

    // Session handle
    pub use crate::editor::ProductListEditor;
    pub use crate::session::PickerSession;
}
