//! # Product Catalog
//!
//! Where label batches get their product records.
//!
//! | Source | Backing |
//! |--------|---------|
//! | [`FileCatalog`] | JSON array of products on disk |
//! | [`HttpCatalog`] | Storefront REST backend, `GET {base}/products/{id}` |
//!
//! Failures are terminal for the batch and reported to the caller; nothing
//! is retried.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::path::{Path, PathBuf};

use crate::error::{HangtagError, Result};
use crate::label::Product;

/// A source of product records.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch products by ID, in the order given.
    async fn products(&self, ids: &[String]) -> Result<Vec<Product>>;
}

/// Products read from a local JSON file.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every product in the file.
    pub fn load(&self) -> Result<Vec<Product>> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            HangtagError::Catalog(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        parse_products(&text)
    }
}

#[async_trait]
impl ProductSource for FileCatalog {
    /// An empty `ids` slice returns every product in the file.
    async fn products(&self, ids: &[String]) -> Result<Vec<Product>> {
        let all = self.load()?;
        if ids.is_empty() {
            return Ok(all);
        }
        ids.iter()
            .map(|id| {
                all.iter()
                    .find(|p| &p.id == id)
                    .cloned()
                    .ok_or_else(|| HangtagError::Catalog(format!("Product '{}' not found", id)))
            })
            .collect()
    }
}

/// Accepts either a bare array or `{"products": [...]}`.
pub fn parse_products(text: &str) -> Result<Vec<Product>> {
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Payload {
        List(Vec<Product>),
        Wrapped { products: Vec<Product> },
    }

    let payload: Payload = serde_json::from_str(text)?;
    match payload {
        Payload::List(products) | Payload::Wrapped { products } => Ok(products),
    }
}

/// Products fetched from the storefront backend.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    base_url: Url,
    client: Client,
}

impl HttpCatalog {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("hangtag/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HangtagError::Catalog(format!("HTTP client error: {}", e)))?;
        Self::with_client(base_url, client)
    }

    pub fn with_client(base_url: &str, client: Client) -> Result<Self> {
        // A trailing slash makes Url::join append instead of replace
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized)
            .map_err(|e| HangtagError::Config(format!("Invalid catalog URL '{}': {}", base_url, e)))?;
        Ok(Self { base_url, client })
    }

    /// URL of one product record.
    pub fn product_url(&self, id: &str) -> Result<Url> {
        let mut url = self
            .base_url
            .join("products/")
            .map_err(|e| HangtagError::Config(format!("Invalid catalog URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| HangtagError::Config(format!("Catalog URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    async fn fetch_one(&self, id: &str) -> Result<Product> {
        let url = self.product_url(id)?;
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| HangtagError::Catalog(format!("Failed to fetch {}: {}", url, e)))?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::NOT_FOUND => {
                return Err(HangtagError::Catalog(format!("Product '{}' not found", id)));
            }
            status => {
                return Err(HangtagError::Catalog(format!(
                    "Failed to fetch {}: HTTP {}",
                    url, status
                )));
            }
        }

        response
            .json::<Product>()
            .await
            .map_err(|e| HangtagError::Catalog(format!("Invalid product JSON from {}: {}", url, e)))
    }
}

#[async_trait]
impl ProductSource for HttpCatalog {
    async fn products(&self, ids: &[String]) -> Result<Vec<Product>> {
        let mut products = Vec::with_capacity(ids.len());
        for id in ids {
            products.push(self.fetch_one(id).await?);
        }
        log::info!("fetched {} products from {}", products.len(), self.base_url);
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCTS: &str = r#"[
        {"id": "A1", "name": "Linen Shirt", "price": 450000, "sku": "A1_ffffff_S"},
        {"id": "A2", "name": "Denim Jacket", "price": 990000}
    ]"#;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("hangtag-{}-{}.json", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parse_products_list_and_wrapped() {
        assert_eq!(parse_products(PRODUCTS).unwrap().len(), 2);
        let wrapped = format!(r#"{{"products": {}}}"#, PRODUCTS);
        assert_eq!(parse_products(&wrapped).unwrap().len(), 2);
        assert!(parse_products("{}").is_err());
    }

    #[tokio::test]
    async fn test_file_catalog_all_and_selected() {
        let path = temp_file("all", PRODUCTS);
        let catalog = FileCatalog::new(&path);

        let all = catalog.products(&[]).await.unwrap();
        assert_eq!(all.len(), 2);

        let picked = catalog.products(&["A2".to_string(), "A1".to_string()]).await.unwrap();
        assert_eq!(picked[0].id, "A2");
        assert_eq!(picked[1].id, "A1");

        let missing = catalog.products(&["Z9".to_string()]).await.unwrap_err();
        assert!(matches!(missing, HangtagError::Catalog(_)));

        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_file_catalog_missing_file() {
        let catalog = FileCatalog::new("/nonexistent/hangtag/products.json");
        assert!(matches!(
            catalog.products(&[]).await.unwrap_err(),
            HangtagError::Catalog(_)
        ));
    }

    #[test]
    fn test_product_url() {
        let catalog = HttpCatalog::new("http://shop.local/api").unwrap();
        assert_eq!(
            catalog.product_url("A1").unwrap().as_str(),
            "http://shop.local/api/products/A1"
        );
        // IDs are escaped as one path segment
        assert_eq!(
            catalog.product_url("A1#ff/S").unwrap().as_str(),
            "http://shop.local/api/products/A1%23ff%2FS"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpCatalog::new("not a url").unwrap_err(),
            HangtagError::Config(_)
        ));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_reported() {
        // Port 9 (discard) on localhost is not expected to serve HTTP
        let catalog = HttpCatalog::new("http://127.0.0.1:9").unwrap();
        let err = catalog.products(&["A1".to_string()]).await.unwrap_err();
        assert!(matches!(err, HangtagError::Catalog(_)));
    }
}
