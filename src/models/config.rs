//! Configuration model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// OMDb catalog configuration.
    pub omdb: OmdbSettings,
}

/// OMDb catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmdbSettings {
    /// API key.
    pub api_key: Option<String>,
    /// Base URL of the catalog endpoint.
    pub base_url: String,
}

impl Default for OmdbSettings {
    fn default() -> Self {
        Self {
            api_key: std::env::var("OMDB_API_KEY").ok(),
            base_url: "https://www.omdbapi.com/".to_string(),
        }
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("popcorn")
}

/// Load configuration from file, falling back to defaults.
pub fn load_config() -> Config {
    let config_path = dirs_config_path().join("config.toml");

    if config_path.exists() {
        if let Ok(content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str(&content) {
                return config;
            }
        }
    }

    Config::default()
}
