// SPDX-License-Identifier: MPL-2.0
//! This module handles the queue configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use toast_queue::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Keep toasts on screen a little longer
//! config.display_duration_ms = Some(6_000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.display_duration_ms, Some(6_000));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;

pub use defaults::*;

use crate::diagnostics::BufferCapacity;
use crate::domain::toast::{DisplayDuration, SettleDelay};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ToastQueue";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// How long an auto-dismissing toast stays visible.
    #[serde(default)]
    pub display_duration_ms: Option<u64>,
    /// Pause between one toast leaving and the next one appearing.
    #[serde(default)]
    pub settle_delay_ms: Option<u64>,
    /// Height requested from the presentation surface.
    #[serde(default)]
    pub toast_height: Option<f32>,
    #[serde(default)]
    pub diagnostics_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_duration_ms: Some(DEFAULT_DISPLAY_DURATION_MS),
            settle_delay_ms: Some(DEFAULT_SETTLE_DELAY_MS),
            toast_height: Some(DEFAULT_TOAST_HEIGHT),
            diagnostics_capacity: Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        }
    }
}

impl Config {
    /// Display duration with missing or out-of-range values resolved.
    #[must_use]
    pub fn display_duration(&self) -> DisplayDuration {
        self.display_duration_ms
            .map(DisplayDuration::from_millis)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn settle_delay(&self) -> SettleDelay {
        self.settle_delay_ms
            .map(SettleDelay::from_millis)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn toast_height(&self) -> f32 {
        self.toast_height
            .filter(|height| height.is_finite() && *height > 0.0)
            .unwrap_or(DEFAULT_TOAST_HEIGHT)
    }

    #[must_use]
    pub fn diagnostics_capacity(&self) -> BufferCapacity {
        self.diagnostics_capacity
            .map(BufferCapacity::new)
            .unwrap_or_default()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid config, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_values() {
        let config = Config {
            display_duration_ms: Some(2_000),
            settle_delay_ms: Some(250),
            toast_height: Some(64.0),
            diagnostics_capacity: Some(200),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_path_fills_missing_fields_with_none() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "settle_delay_ms = 100\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.settle_delay_ms, Some(100));
        assert!(loaded.display_duration_ms.is_none());
        assert_eq!(
            loaded.display_duration().as_duration(),
            Duration::from_millis(DEFAULT_DISPLAY_DURATION_MS)
        );
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn accessors_clamp_out_of_range_values() {
        let config = Config {
            display_duration_ms: Some(10 * MAX_DISPLAY_DURATION_MS),
            settle_delay_ms: Some(10 * MAX_SETTLE_DELAY_MS),
            toast_height: Some(-3.0),
            diagnostics_capacity: Some(1),
        };

        assert_eq!(
            config.display_duration().as_duration(),
            Duration::from_millis(MAX_DISPLAY_DURATION_MS)
        );
        assert_eq!(
            config.settle_delay().as_duration(),
            Duration::from_millis(MAX_SETTLE_DELAY_MS)
        );
        assert_eq!(config.toast_height(), DEFAULT_TOAST_HEIGHT);
        assert_eq!(
            config.diagnostics_capacity().value(),
            MIN_DIAGNOSTICS_BUFFER_CAPACITY
        );
    }
}
