//! Session settings
//!
//! Read from a JSON file by the native driver. Missing fields take their
//! defaults; an unreadable file falls back to defaults entirely.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::Geometry;

/// Settings for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Logical viewport width in pixels
    pub viewport_width: f32,
    /// Logical viewport height in pixels
    pub viewport_height: f32,
    /// RNG seed; `None` derives one from the clock
    pub seed: Option<u64>,

    // === Headless driver ===
    /// Shots the scripted player fires before stopping
    pub scripted_shots: u32,
    /// Restart automatically after game over
    pub auto_restart: bool,
    /// Print a JSON snapshot after every landing
    pub dump_snapshots: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: 430.0,
            viewport_height: 800.0,
            seed: None,

            scripted_shots: 200,
            auto_restart: false,
            dump_snapshots: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize settings to pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a file, using defaults when it is missing or bad
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    /// Pixel layout for the configured viewport
    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.viewport_width, self.viewport_height)
    }
}
