//! `vitrina` - core of a small showcase application
//!
//! Holds the stateful heart of the showcase app: a persisted settings store
//! that drives document-level presentation (text scale, color scheme, dark
//! mode), plus the collaborator surfaces around it - a product catalog with
//! client-side filter/sort/CRUD, a validating contact form, and an image
//! slideshow with a timed player.
//!
//! The settings store is the single source of truth for presentation
//! preferences. It loads once from persisted storage at startup, merges the
//! persisted record over documented defaults, and pushes every change both
//! back to storage and to a [`presentation::PresentationSink`].

// Module declarations
pub mod catalog;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod presentation;
pub mod settings;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{Result, VitrinaError};
