//! Persisted key-value storage for settings
//!
//! Storage has the shape of browser local storage: opaque string values under
//! string keys, surviving restarts within the same profile. `FileStorage`
//! keeps one JSON document per key in the application profile directory with
//! atomic writes to prevent corruption; `MemoryStorage` backs tests and
//! embedders that do not want a disk footprint.

use crate::error::{Result, VitrinaError};
use crate::utils::paths::profile_dir;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::PathBuf;

/// Storage key for the serialized settings record
pub const SETTINGS_KEY: &str = "appSettings";

/// Profile-scoped key-value storage
///
/// `read` returns `None` when the key has never been written. Implementations
/// must overwrite any prior value on `write`.
pub trait SettingsStorage: Send {
    /// Read the value stored under `key`, if any
    fn read(&self, key: &str) -> Result<Option<String>>;
    /// Write `value` under `key`, replacing any prior value
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed storage rooted at the application profile directory
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at the default profile directory
    pub fn new() -> Self {
        Self { root: profile_dir() }
    }

    /// Create storage rooted at an explicit directory
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the file holding `key`
    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let value =
            std::fs::read_to_string(path).map_err(|e| VitrinaError::StorageError(Box::new(e)))?;
        Ok(Some(value))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.root)
            .map_err(|e| VitrinaError::StorageError(Box::new(e)))?;

        // Atomic write: write to temp file, then rename
        let temp_path = self.root.join(format!("{key}.json.tmp"));
        std::fs::write(&temp_path, value).map_err(|e| VitrinaError::StorageError(Box::new(e)))?;
        std::fs::rename(temp_path, self.key_path(key))
            .map_err(|e| VitrinaError::StorageError(Box::new(e)))?;
        Ok(())
    }
}

/// In-memory storage, shared-safe for multi-threaded tests
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-seeded with a single key
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .lock()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl SettingsStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
