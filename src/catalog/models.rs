//! Product catalog data models
//!
//! Field names match the demo store API wire format, so fetched documents
//! decode directly into these types.

use serde::{Deserialize, Serialize};

/// Placeholder image used when a new product is added without one
pub const PLACEHOLDER_IMAGE: &str = "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg";

/// Aggregate customer rating of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating, 1.0-5.0
    pub rate: f64,
    /// Number of ratings the average is based on
    pub count: u32,
}

/// A product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog-unique identifier
    pub id: u32,
    /// Display title
    pub title: String,
    /// Price in the store currency
    pub price: f64,
    /// Category name as reported by the API
    pub category: String,
    /// Long description
    pub description: String,
    /// Image URL
    pub image: String,
    /// Aggregate rating
    pub rating: Rating,
}

/// Input for creating a product locally
///
/// The list assigns the id; an empty image URL falls back to
/// [`PLACEHOLDER_IMAGE`].
#[derive(Debug, Clone, Default)]
pub struct NewProduct {
    /// Display title
    pub title: String,
    /// Price in the store currency
    pub price: f64,
    /// Category name
    pub category: String,
    /// Long description
    pub description: String,
    /// Image URL; empty means placeholder
    pub image: String,
    /// Average rating, 1.0-5.0
    pub rating_rate: f64,
    /// Number of ratings; defaults to 0
    pub rating_count: u32,
}
