//! Product catalog module
//!
//! Fetches the demo product catalog over HTTP and manages the fetched list
//! entirely in memory: client-side filtering, sorting, and create/update/
//! delete. Nothing here is persisted and nothing talks back to the API.

pub mod fetcher;
pub mod list;
pub mod models;

pub use fetcher::CatalogFetcher;
pub use list::{CategoryFilter, ProductList, SortDirection, SortField};
pub use models::{NewProduct, Product, Rating};
