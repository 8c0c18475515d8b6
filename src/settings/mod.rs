//! Settings management module
//!
//! This module owns the user preference record: the data model, the key-value
//! storage it is persisted into under the `appSettings` key, and the store
//! that loads it once at startup and synchronizes every change back to
//! storage and to the presentation sink.

pub mod model;
pub mod storage;
pub mod store;

pub use model::{ColorScheme, SettingUpdate, Settings, TEXT_SIZE_MAX, TEXT_SIZE_MIN};
pub use storage::{FileStorage, MemoryStorage, SettingsStorage};
pub use store::SettingsStore;
