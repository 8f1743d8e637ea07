//! User settings stored as settings.json in the app data directory

use crate::constants::DEFAULT_API_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Backend
    pub api_base_url: Option<String>,

    // Remembered sign-in (the sessionStorage analog)
    pub session_user_id: Option<i64>,

    // View
    pub browse_cards_view: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            api_base_url: None,
            session_user_id: None,
            browse_cards_view: true,
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

    pub fn api_base_url_or_default(&self) -> String {
        match self.api_base_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path());
        assert!(settings.session_user_id.is_none());
        assert!(settings.browse_cards_view);
        assert_eq!(settings.api_base_url_or_default(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            window_w: Some(1200.0),
            session_user_id: Some(42),
            api_base_url: Some("http://10.0.0.5:5000/api".to_string()),
            browse_cards_view: false,
            ..Settings::default()
        };
        settings.save(dir.path());

        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.session_user_id, Some(42));
        assert_eq!(loaded.window_w, Some(1200.0));
        assert!(!loaded.browse_cards_view);
        assert_eq!(loaded.api_base_url_or_default(), "http://10.0.0.5:5000/api");
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{not json").unwrap();
        let settings = Settings::load(dir.path());
        assert!(settings.session_user_id.is_none());
    }

    #[test]
    fn blank_base_url_override_is_ignored() {
        let settings = Settings {
            api_base_url: Some("   ".to_string()),
            ..Settings::default()
        };
        assert_eq!(settings.api_base_url_or_default(), DEFAULT_API_BASE_URL);
    }
}
