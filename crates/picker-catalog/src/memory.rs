//! In-memory catalog backed by a JSON fixture.

use crate::error::FetchError;
use crate::provider::CatalogProvider;
use async_trait::async_trait;
use picker_commerce::catalog::CatalogProduct;
use serde::Deserialize;
use std::path::Path;

/// Fixture layout: a bare array, or an object with a `products` array.
#[derive(Deserialize)]
#[serde(untagged)]
enum Fixture {
    Products(Vec<CatalogProduct>),
    Wrapped { products: Vec<CatalogProduct> },
}

/// A catalog held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<CatalogProduct>,
}

impl InMemoryCatalog {
    /// Create a catalog from products.
    ///
    /// Each variant's parent id is set to the product it is listed under.
    pub fn new(products: Vec<CatalogProduct>) -> Self {
        let products = products
            .into_iter()
            .map(|mut product| {
                for variant in &mut product.variants {
                    variant.product_id = product.id.clone();
                }
                product
            })
            .collect();
        Self { products }
    }

    /// Parse a JSON fixture.
    pub fn from_json_str(json: &str) -> Result<Self, FetchError> {
        let products = match serde_json::from_str(json)? {
            Fixture::Products(products) => products,
            Fixture::Wrapped { products } => products,
        };
        Ok(Self::new(products))
    }

    /// Load a JSON fixture from disk.
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, FetchError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| FetchError::Fixture {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), products = catalog.len(), "catalog fixture loaded");
        Ok(catalog)
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[CatalogProduct] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl CatalogProvider for InMemoryCatalog {
    async fn fetch_page(
        &self,
        query: &str,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<CatalogProduct>, FetchError> {
        if page == 0 || page_size == 0 {
            return Ok(Vec::new());
        }
        Ok(self
            .products
            .iter()
            .filter(|p| p.matches_query(query))
            .skip((page - 1) * page_size)
            .take(page_size)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picker_commerce::ids::ProductId;
    use std::io::Write;

    const FIXTURE: &str = r#"[
        {
            "id": 1,
            "title": "Fog Linen Chambray Towel - Beige Stripe",
            "variants": [
                {"id": 1, "product_id": 1, "title": "XS / Silver", "price": "49"},
                {"id": 2, "product_id": 1, "title": "S / Silver", "price": "49", "inventory_quantity": 3}
            ],
            "image": {"id": "266", "src": "https://cdn.example.com/towel.png"}
        },
        {"id": 2, "title": "Orbit Terrarium - Large", "variants": []},
        {"id": 3, "title": "Orbit Terrarium - Small", "variants": []}
    ]"#;

    fn titles(products: &[CatalogProduct]) -> Vec<&str> {
        products.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_parse_fixture() {
        let catalog = InMemoryCatalog::from_json_str(FIXTURE).unwrap();
        assert_eq!(catalog.len(), 3);
        let towel = &catalog.products()[0];
        assert_eq!(towel.id, ProductId::new("1"));
        assert_eq!(towel.variants[1].inventory_quantity, 3);
        assert_eq!(towel.variants[0].inventory_quantity, 0);
        assert!(towel.image.is_some());
    }

    #[test]
    fn test_parse_wrapped_fixture() {
        let catalog = InMemoryCatalog::from_json_str(r#"{"products": []}"#).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_parse_malformed_fixture() {
        let err = InMemoryCatalog::from_json_str("[{\"id\": 1}").unwrap_err();
        assert!(matches!(err, FetchError::Deserialization(_)));
        assert!(!err.is_transient());
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let catalog = InMemoryCatalog::from_json_str(FIXTURE).unwrap();
        let page = catalog.fetch_page("TERRARIUM", 1, 10).await.unwrap();
        assert_eq!(titles(&page), vec!["Orbit Terrarium - Large", "Orbit Terrarium - Small"]);
    }

    #[tokio::test]
    async fn test_pages_are_one_indexed() {
        let catalog = InMemoryCatalog::from_json_str(FIXTURE).unwrap();

        let first = catalog.fetch_page("", 1, 2).await.unwrap();
        let second = catalog.fetch_page("", 2, 2).await.unwrap();
        let third = catalog.fetch_page("", 3, 2).await.unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(titles(&second), vec!["Orbit Terrarium - Small"]);
        assert!(third.is_empty());
        assert!(catalog.fetch_page("", 0, 2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();

        let catalog = InMemoryCatalog::from_json_file(file.path()).await.unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = InMemoryCatalog::from_json_file("/nonexistent/catalog.json")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Fixture { .. }));
    }
}
