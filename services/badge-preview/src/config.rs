//! Configuration types for the badge preview service

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

/// What the preview page shows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Status strings rendered on the index page, in order
    #[serde(default = "default_samples")]
    pub samples: Vec<String>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            samples: default_samples(),
        }
    }
}

fn default_port() -> u16 {
    11120
}

fn default_title() -> String {
    "Status Badges".to_string()
}

fn default_samples() -> Vec<String> {
    status_badge::sample_statuses()
        .into_iter()
        .map(String::from)
        .collect()
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::BadgePreviewError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
