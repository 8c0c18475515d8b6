//! Settings store with persistence and presentation side effects
//!
//! The store is created with default values before persisted data is read, so
//! there is never an undefined-state window. `load` then consults storage
//! exactly once: a persisted record is merged over the defaults per field,
//! while missing or corrupt data keeps the defaults. Only after that single
//! `Uninitialized -> Ready` transition are presentation side effects applied,
//! which prevents a flash of default state overwriting a soon-to-be-loaded
//! persisted one.

use crate::error::Result;
use crate::presentation::{PresentationSink, PresentationState};
use crate::settings::model::{SettingUpdate, Settings};
use crate::settings::storage::{SETTINGS_KEY, SettingsStorage};
use tracing::{debug, info, warn};

/// Store lifecycle
///
/// `Uninitialized` means defaults are active and storage has not been
/// consulted; `Ready` means the persisted record has been merged in and side
/// effects are live. The transition happens exactly once and never reverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Uninitialized,
    Ready,
}

/// The single source of truth for user presentation preferences
///
/// Owns the one live [`Settings`] record, the storage it persists into, and
/// the sink receiving derived presentation updates.
pub struct SettingsStore {
    settings: Settings,
    lifecycle: Lifecycle,
    storage: Box<dyn SettingsStorage>,
    sink: Box<dyn PresentationSink>,
}

impl SettingsStore {
    /// Create a store holding default values, persisted data not yet consulted
    pub fn new(storage: Box<dyn SettingsStorage>, sink: Box<dyn PresentationSink>) -> Self {
        Self {
            settings: Settings::default(),
            lifecycle: Lifecycle::Uninitialized,
            storage,
            sink,
        }
    }

    /// Consult persisted storage and transition to `Ready`
    ///
    /// Persisted fields win over defaults per field; missing or corrupt data
    /// keeps the defaults. The transition happens whether or not the read
    /// succeeds, and this method never fails the application start. Repeated
    /// calls are ignored.
    pub fn load(&mut self) {
        if self.lifecycle == Lifecycle::Ready {
            warn!("Settings already loaded; load() call ignored");
            return;
        }

        match self.storage.read(SETTINGS_KEY) {
            Ok(Some(raw)) => match Settings::from_persisted(&raw) {
                Ok(persisted) => {
                    info!("Settings loaded from storage");
                    self.settings = persisted;
                }
                Err(e) => {
                    warn!("Persisted settings corrupt, using defaults: {e}");
                }
            },
            Ok(None) => {
                info!("No persisted settings found, using defaults");
            }
            Err(e) => {
                warn!("Failed to read persisted settings, using defaults: {e}");
            }
        }

        self.lifecycle = Lifecycle::Ready;
        self.persist_and_apply();
    }

    /// Current, fully-populated settings record. No side effects.
    pub fn get(&self) -> &Settings {
        &self.settings
    }

    /// Whether the persisted record has been merged in
    pub fn is_ready(&self) -> bool {
        self.lifecycle == Lifecycle::Ready
    }

    /// Replace exactly one field, then persist and re-apply presentation
    ///
    /// Calls before `load` are ignored with a warning: the store is not
    /// authoritative until persisted state has been consulted, and a mutation
    /// accepted earlier would be silently overwritten by the merge.
    pub fn update(&mut self, update: SettingUpdate) {
        if self.lifecycle == Lifecycle::Uninitialized {
            warn!("Settings update before load ignored: {update:?}");
            return;
        }

        debug!("Applying settings update: {update:?}");
        self.settings.apply(update);
        self.persist_and_apply();
    }

    /// Derive and emit presentation state, then write the full record back
    ///
    /// Persistence is best effort: a failed write leaves the in-memory record
    /// authoritative for the session and is never surfaced to the user.
    fn persist_and_apply(&mut self) {
        let state = PresentationState::from_settings(&self.settings);
        self.sink.apply(&state);

        if let Err(e) = self.persist() {
            warn!("Failed to persist settings, in-memory record stays authoritative: {e}");
        }
    }

    fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.settings)?;
        self.storage.write(SETTINGS_KEY, &json)
    }
}
