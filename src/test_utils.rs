#![expect(
    clippy::unwrap_used,
    reason = "Test utilities use .unwrap() for brevity"
)]

//! Shared test utilities for `vitrina` unit tests.
//!
//! This module provides common test infrastructure used across multiple test
//! modules. It is only compiled during testing (`#[cfg(test)]`).

use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize tests that modify the APPDATA environment variable.
/// This prevents race conditions when multiple tests run in parallel and try to
/// set different APPDATA values.
static APPDATA_LOCK: Mutex<()> = Mutex::new(());

/// Helper function to create a temporary test directory using tempfile.
/// Returns a `TempDir` that automatically cleans up when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// RAII guard that sets the APPDATA environment variable for a test scope
/// and restores the original value when dropped.
///
/// Profile directory resolution reads APPDATA, so tests exercising the
/// default storage and logging paths point it at a private temp directory.
/// The global `APPDATA_LOCK` serializes those tests; each guard restores the
/// original value on drop, even on panic.
pub struct AppdataGuard {
    original: Option<String>,
    // Lock guard must be held for the lifetime of this struct to ensure exclusive
    // access to APPDATA environment variable across parallel tests
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[expect(
    unsafe_code,
    reason = "Test-only code that modifies environment variables under a global lock"
)]
impl AppdataGuard {
    /// Create a new guard that sets APPDATA to the given temp directory path.
    pub fn new(temp_dir: &TempDir) -> Self {
        // Acquire lock to serialize APPDATA modifications across parallel tests
        let lock = APPDATA_LOCK.lock().unwrap();

        let original = std::env::var("APPDATA").ok();
        // SAFETY: the APPDATA_LOCK mutex ensures only one test mutates APPDATA
        // at a time, and the guard restores the original value on drop.
        unsafe {
            std::env::set_var("APPDATA", temp_dir.path());
        }
        Self {
            original,
            _lock: lock,
        }
    }
}

#[expect(
    unsafe_code,
    reason = "Test-only code that restores environment variables under a global lock"
)]
impl Drop for AppdataGuard {
    fn drop(&mut self) {
        // SAFETY: still holding the APPDATA_LOCK acquired in new(); restoring
        // the original value cannot race with another guard.
        if let Some(ref original) = self.original {
            unsafe {
                std::env::set_var("APPDATA", original);
            }
        } else {
            unsafe {
                std::env::remove_var("APPDATA");
            }
        }
    }
}
