//! Application configuration (config.toml).

use crate::paths::PairlabPaths;
use pairlab_core::{PairlabError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Storage section of the configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Overrides the platform data directory for the JSON collections.
    pub data_dir: Option<PathBuf>,
}

/// Chat section of the configuration.
///
/// Everything here is an override; the chat client carries the defaults.
/// The API key is deliberately absent: credentials belong in secret.json
/// or the environment, never in config files that get shared around.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

/// Root application configuration, loaded from `config.toml`.
///
/// Every field has a default, so an absent file, an empty file and a file
/// with only some sections all work.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub chat: ChatConfig,
}

impl AppConfig {
    /// Loads the configuration from the default platform location.
    pub fn load_default() -> Result<Self> {
        let path = PairlabPaths::config_file()
            .map_err(|e| PairlabError::config(e.to_string()))?;
        Self::load_from(&path)
    }

    /// Loads the configuration from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}
