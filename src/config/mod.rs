// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Persisted preferences cover the measurement calibration constant and the
//! default state of the pane synchronization flag. Everything else (viewport
//! state, annotations, measurements) is session-scoped by design.

mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
pub const APP_NAME: &str = "CardioLens";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Pixel-to-time calibration used by the measurement tool, in ms per pixel.
    #[serde(default)]
    pub calibration_ms_per_px: Option<f32>,
    /// Whether the pane pair starts with scroll/zoom synchronization enabled.
    #[serde(default)]
    pub sync_enabled: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            calibration_ms_per_px: Some(DEFAULT_CALIBRATION_MS_PER_PX),
            sync_enabled: Some(true),
        }
    }
}

impl Config {
    /// Returns the calibration constant, clamped to the supported range so a
    /// hand-edited config cannot request a nonsensical conversion.
    #[must_use]
    pub fn calibration(&self) -> f32 {
        self.calibration_ms_per_px
            .unwrap_or(DEFAULT_CALIBRATION_MS_PER_PX)
            .clamp(MIN_CALIBRATION_MS_PER_PX, MAX_CALIBRATION_MS_PER_PX)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the platform config directory.
/// A missing file yields the defaults rather than an error.
pub fn load() -> Result<Config> {
    match get_default_config_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => Ok(Config::default()),
    }
}

/// Loads the configuration from a specific path (used by tests).
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

/// Saves the configuration to the platform config directory.
pub fn save(config: &Config) -> Result<()> {
    let Some(path) = get_default_config_path() else {
        log::warn!("no config directory available; preferences not persisted");
        return Ok(());
    };
    save_to_path(config, &path)
}

/// Saves the configuration to a specific path (used by tests).
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}
