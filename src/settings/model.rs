//! Settings data model
//!
//! This module defines the user preference record and its persisted JSON
//! shape. Field names follow the persisted document (`textSize`, `darkMode`,
//! `animations`, `colorScheme`) so existing saved settings load unchanged.

use crate::error::VitrinaError;
use serde::{Deserialize, Serialize};

/// Smallest base text size the UI offers (pixels)
pub const TEXT_SIZE_MIN: u32 = 12;

/// Largest base text size the UI offers (pixels)
pub const TEXT_SIZE_MAX: u32 = 24;

/// Color scheme applied across the application
///
/// `Default` means no scheme marker is active and the application owns the
/// background; any other value activates exactly one scheme marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// No scheme marker; base palette
    #[default]
    Default,
    /// Blue scheme
    Blue,
    /// Green scheme
    Green,
    /// Purple scheme
    Purple,
}

impl ColorScheme {
    /// Marker string for this scheme, `None` for the base palette
    pub fn marker(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Blue => Some("theme-blue"),
            Self::Green => Some("theme-green"),
            Self::Purple => Some("theme-purple"),
        }
    }
}

/// User preference record
///
/// Exactly one live instance exists per running application; it is the single
/// source of truth for presentation preferences. Every field always holds a
/// defined value: each field deserializes independently with its documented
/// default, so a partial or extended persisted document still yields a fully
/// populated record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Base text size in pixels; the UI constrains input to 12-24
    #[serde(rename = "textSize", default = "default_text_size")]
    pub text_size: u32,
    /// Whether the dark presentation marker is active
    #[serde(rename = "darkMode", default)]
    pub dark_mode: bool,
    /// Whether UI animations are enabled
    #[serde(default = "default_animations")]
    pub animations: bool,
    /// Active color scheme
    #[serde(rename = "colorScheme", default)]
    pub color_scheme: ColorScheme,
}

fn default_text_size() -> u32 {
    16
}

fn default_animations() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            text_size: default_text_size(),
            dark_mode: false,
            animations: default_animations(),
            color_scheme: ColorScheme::Default,
        }
    }
}

impl Settings {
    /// Parse a persisted document
    ///
    /// Malformed data is reported as [`VitrinaError::SettingsCorrupt`];
    /// callers discard it and fall back to defaults.
    pub fn from_persisted(raw: &str) -> crate::error::Result<Self> {
        serde_json::from_str(raw).map_err(|e| VitrinaError::SettingsCorrupt(e.to_string()))
    }
}

/// A single-field mutation of the settings record
///
/// The closed set of variants makes an unrecognized field name
/// unrepresentable. Out-of-range values (e.g. a text size outside 12-24) are
/// accepted as given; constraining input is the UI layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingUpdate {
    /// Replace the base text size (pixels)
    TextSize(u32),
    /// Replace the dark mode flag
    DarkMode(bool),
    /// Replace the animations flag
    Animations(bool),
    /// Replace the color scheme
    ColorScheme(ColorScheme),
}

impl Settings {
    /// Apply a single-field update, leaving all other fields unchanged
    pub fn apply(&mut self, update: SettingUpdate) {
        match update {
            SettingUpdate::TextSize(px) => self.text_size = px,
            SettingUpdate::DarkMode(on) => self.dark_mode = on,
            SettingUpdate::Animations(on) => self.animations = on,
            SettingUpdate::ColorScheme(scheme) => self.color_scheme = scheme,
        }
    }
}
