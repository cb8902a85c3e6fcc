//! User settings stored as settings.json in the app data directory

use crate::constants::DEFAULT_SAMPLE_TEXT;
use crate::types::Platform;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Appearance. None follows the system theme on first launch.
    pub dark_mode: Option<bool>,

    // View
    pub selected_grid: usize,
    pub platform: Platform,
    pub sample_text: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            dark_mode: None,
            selected_grid: 0,
            platform: Platform::Desktop,
            sample_text: DEFAULT_SAMPLE_TEXT.to_string(),
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            window_w: Some(1024.0),
            window_h: Some(700.0),
            dark_mode: Some(true),
            selected_grid: 3,
            platform: Platform::Tv,
            sample_text: "Sphinx of black quartz".to_string(),
            ..Settings::default()
        };
        settings.save(dir.path());
        assert_eq!(Settings::load(dir.path()), settings);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{ "platform": "watch", "dark_mode": false }"#,
        )
        .unwrap();

        let settings = Settings::load(dir.path());
        assert_eq!(settings.platform, Platform::Watch);
        assert_eq!(settings.dark_mode, Some(false));
        assert_eq!(settings.sample_text, DEFAULT_SAMPLE_TEXT);
        assert_eq!(settings.selected_grid, 0);
    }
}
