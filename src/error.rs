//! Error types for the `vitrina` application
//!
//! This module defines all error types used throughout the application,
//! providing clear error messages and proper error propagation.
//!
//! Error variants use `#[source]` to preserve error chains for better
//! observability and debugging.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for the `vitrina` application
#[derive(Debug, Error)]
pub enum VitrinaError {
    /// Persisted settings were present but not parseable as the expected structure
    #[error("Persisted settings corrupt: {0}")]
    SettingsCorrupt(String),

    /// Settings storage error (read or write)
    /// Preserves the underlying error source for full error chain transparency
    #[error("Settings storage error: {0}")]
    StorageError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Catalog fetch error (network, HTTP status, or response decoding)
    /// Preserves the underlying error source for full error chain transparency
    #[error("Catalog fetch failed: {0}")]
    CatalogFetchFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Referenced product does not exist in the catalog list
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    /// Logging setup error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Logging error: {0}")]
    LoggingError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for `vitrina` operations
pub type Result<T> = std::result::Result<T, VitrinaError>;

/// Convert an error to a user-friendly message
///
/// This function takes a `VitrinaError` and returns a message suitable
/// for displaying to end users.
pub fn get_user_friendly_error(error: &VitrinaError) -> String {
    match error {
        VitrinaError::SettingsCorrupt(_) | VitrinaError::JsonError(_) => {
            "Saved settings could not be read.\n\n\
             The application will use default settings.\n\
             Your preferences will be saved again on the next change."
                .to_string()
        }
        VitrinaError::StorageError(_) => "Failed to load or save settings.\n\n\
             Your preferences may not persist.\n\
             Check that you have write permissions to the application data directory."
            .to_string(),
        VitrinaError::CatalogFetchFailed(_) => "Failed to fetch the product catalog.\n\n\
             Please check your network connection and try again."
            .to_string(),
        VitrinaError::ProductNotFound(id) => {
            format!(
                "Product {id} no longer exists.\n\n\
                 It may have been removed from the list."
            )
        }
        VitrinaError::LoggingError(_) => "Failed to initialize logging.\n\n\
             The application will continue without a log file."
            .to_string(),
        VitrinaError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
    }
}
