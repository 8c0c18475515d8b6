//! Catalog fetch over HTTP
//!
//! One blocking GET against the demo store API with a request timeout and a
//! versioned user agent. Failures are reported as crate errors for the caller
//! to degrade on; the fetcher never panics and never retries.

use crate::catalog::models::Product;
use crate::error::{Result, VitrinaError};
use tracing::{debug, info, warn};

/// Default catalog endpoint
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// Fetches the product catalog from the demo store API
pub struct CatalogFetcher {
    url: String,
}

impl CatalogFetcher {
    /// Create a fetcher against the default endpoint
    pub fn new() -> Self {
        Self::with_url(DEFAULT_CATALOG_URL)
    }

    /// Create a fetcher against an explicit endpoint (used by tests)
    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Fetch and decode the full product list
    pub fn fetch(&self) -> Result<Vec<Product>> {
        info!("Fetching product catalog from {}", self.url);

        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .user_agent(format!("vitrina/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                warn!("Failed to create HTTP client: {e}");
                VitrinaError::CatalogFetchFailed(Box::new(e))
            })?;

        let response = client.get(&self.url).send().map_err(|e| {
            warn!("Failed to fetch product catalog: {e}");
            VitrinaError::CatalogFetchFailed(Box::new(e))
        })?;

        if !response.status().is_success() {
            warn!("Catalog API returned error status: {}", response.status());
            return Err(VitrinaError::CatalogFetchFailed(
                crate::error::StringError::new(format!(
                    "Catalog API returned error status: {}",
                    response.status()
                )),
            ));
        }

        let products: Vec<Product> = response.json().map_err(|e| {
            warn!("Failed to decode catalog response: {e}");
            VitrinaError::CatalogFetchFailed(Box::new(e))
        })?;

        debug!("Fetched {} products", products.len());
        Ok(products)
    }
}

impl Default for CatalogFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_reports_unreachable_endpoint() {
        // Reserved TEST-NET-1 address; connection fails fast without touching
        // any real service
        let fetcher = CatalogFetcher::with_url("http://192.0.2.1:9/products");
        let result = fetcher.fetch();
        assert!(matches!(result, Err(VitrinaError::CatalogFetchFailed(_))));
    }
}
