//! Document-level presentation state
//!
//! The settings store never touches presentation surfaces directly. It derives
//! a [`PresentationState`] from the current record and pushes it through a
//! [`PresentationSink`], so any surface (GUI shell, test harness, event log)
//! can consume style updates the same way.

use crate::settings::{ColorScheme, Settings};
use std::sync::mpsc;
use tracing::warn;

/// Dark background applied when no color scheme owns the background
pub const DARK_BACKGROUND: &str = "#111827";

/// Light background applied when no color scheme owns the background
pub const LIGHT_BACKGROUND: &str = "#ffffff";

/// Foreground color in dark mode
pub const DARK_FOREGROUND: &str = "#f9fafb";

/// Foreground color in light mode
pub const LIGHT_FOREGROUND: &str = "#111827";

/// Snapshot of the document-level presentation derived from a settings record
///
/// At most one scheme marker is ever active: `scheme_marker` is `None` for the
/// base palette and the marker of exactly one scheme otherwise. The background
/// override is only present when the scheme is `Default`; non-default schemes
/// own their background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationState {
    /// Base text size in pixels
    pub base_text_size_px: u32,
    /// Active scheme marker, if any
    pub scheme_marker: Option<&'static str>,
    /// Whether the dark presentation marker is active
    pub dark: bool,
    /// Background color override; `None` leaves the background to the scheme
    pub background: Option<&'static str>,
    /// Foreground color
    pub foreground: &'static str,
    /// Whether UI animations are enabled
    pub animations: bool,
}

impl PresentationState {
    /// Derive the presentation state for a settings record
    pub fn from_settings(settings: &Settings) -> Self {
        let scheme_owns_background = settings.color_scheme != ColorScheme::Default;
        let background = if scheme_owns_background {
            None
        } else if settings.dark_mode {
            Some(DARK_BACKGROUND)
        } else {
            Some(LIGHT_BACKGROUND)
        };

        Self {
            base_text_size_px: settings.text_size,
            scheme_marker: settings.color_scheme.marker(),
            dark: settings.dark_mode,
            background,
            foreground: if settings.dark_mode {
                DARK_FOREGROUND
            } else {
                LIGHT_FOREGROUND
            },
            animations: settings.animations,
        }
    }
}

/// Consumer of presentation updates
pub trait PresentationSink: Send {
    /// Apply a freshly derived presentation state
    fn apply(&mut self, state: &PresentationState);
}

/// Sink that forwards presentation updates over a channel to the UI shell
pub struct ChannelSink {
    sender: mpsc::SyncSender<PresentationState>,
}

impl ChannelSink {
    /// Create a sink sending on `sender`
    pub fn new(sender: mpsc::SyncSender<PresentationState>) -> Self {
        Self { sender }
    }
}

impl PresentationSink for ChannelSink {
    fn apply(&mut self, state: &PresentationState) {
        // A full or disconnected shell must never block or fail the store
        if let Err(e) = self.sender.try_send(state.clone()) {
            warn!("Presentation update dropped: {e}");
        }
    }
}

/// Sink that discards presentation updates
#[derive(Default)]
pub struct NullSink;

impl PresentationSink for NullSink {
    fn apply(&mut self, _state: &PresentationState) {}
}
