//! Configuration - Application settings for the demo page
//!
//! Loads settings from ~/.notespage/config.json: an optional override for
//! the preferences file location and the note cards seeded onto the demo
//! page. Any failure falls back to defaults so a broken config never keeps
//! the page from coming up.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, instrument, warn};

use crate::prefs::FilePreferenceStore;

/// Default location of the config file
pub const DEFAULT_CONFIG_PATH: &str = "~/.notespage/config.json";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Preferences file location override (tilde-expanded)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences_file: Option<String>,
    /// Note cards seeded onto the demo page
    #[serde(default = "default_cards")]
    pub cards: Vec<CardConfig>,
}

/// One seeded note card. Either part may be omitted to model a card whose
/// title or content element is missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

fn default_cards() -> Vec<CardConfig> {
    vec![
        CardConfig {
            title: Some("Groceries".to_string()),
            content: Some("milk, eggs".to_string()),
        },
        CardConfig {
            title: Some("Work".to_string()),
            content: Some("finish report".to_string()),
        },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            preferences_file: None,
            cards: default_cards(),
        }
    }
}

impl Config {
    /// Resolved preferences file path: the configured override or the
    /// store's default.
    pub fn preferences_path(&self) -> PathBuf {
        match &self.preferences_file {
            Some(path) => PathBuf::from(shellexpand::tilde(path).as_ref()),
            None => FilePreferenceStore::default_path(),
        }
    }
}

/// Load configuration, from `path` if given, else from
/// ~/.notespage/config.json.
///
/// Returns `Config::default()` if the file is missing or unreadable.
#[instrument(name = "load_config")]
pub fn load_config(path: Option<PathBuf>) -> Config {
    let config_path =
        path.unwrap_or_else(|| PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG_PATH).as_ref()));

    if !config_path.exists() {
        info!(path = %config_path.display(), "Config file not found, using defaults");
        return Config::default();
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(e) => {
            warn!(error = %e, path = %config_path.display(), "Failed to read config, using defaults");
            return Config::default();
        }
    };

    match serde_json::from_str::<Config>(&content) {
        Ok(config) => {
            info!(path = %config_path.display(), cards = config.cards.len(), "Successfully loaded config");
            config
        }
        Err(e) => {
            warn!(error = %e, path = %config_path.display(), "Failed to parse config JSON, using defaults");
            Config::default()
        }
    }
}
