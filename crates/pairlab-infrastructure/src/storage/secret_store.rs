//! Secret configuration file storage.
//!
//! Provides read-only loading of API credentials from
//! `~/.config/pairlab/secret.json`. Credentials live only here or in the
//! environment; nothing in the codebase embeds a key.

use crate::paths::PairlabPaths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Root structure of `secret.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub deepseek: Option<DeepseekConfig>,
}

/// DeepSeek API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepseekConfig {
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
}

/// Errors that can occur during secret storage operations.
#[derive(Debug)]
pub enum SecretStoreError {
    /// Secrets file not found.
    NotFound(PathBuf),
    /// File I/O error.
    IoError(std::io::Error),
    /// JSON parsing error.
    ParseError(serde_json::Error),
    /// Config directory not found.
    ConfigDirNotFound,
}

impl std::fmt::Display for SecretStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecretStoreError::NotFound(path) => {
                write!(f, "Secrets file not found at: {}", path.display())
            }
            SecretStoreError::IoError(e) => write!(f, "I/O error: {}", e),
            SecretStoreError::ParseError(e) => write!(f, "JSON parse error: {}", e),
            SecretStoreError::ConfigDirNotFound => {
                write!(f, "Could not determine home directory")
            }
        }
    }
}

impl std::error::Error for SecretStoreError {}

impl From<std::io::Error> for SecretStoreError {
    fn from(e: std::io::Error) -> Self {
        SecretStoreError::IoError(e)
    }
}

impl From<serde_json::Error> for SecretStoreError {
    fn from(e: serde_json::Error) -> Self {
        SecretStoreError::ParseError(e)
    }
}

/// Storage for the secrets file (secret.json).
///
/// Responsibilities:
/// - Load secret.json from the pairlab config directory
/// - Parse JSON into [`SecretConfig`]
///
/// Does NOT:
/// - Write or modify secret files (read-only)
/// - Validate credentials against the remote service
/// - Handle encryption (plaintext JSON with 600 permissions)
pub struct SecretStore {
    path: PathBuf,
}

impl SecretStore {
    /// Creates a store pointing at the default secrets path.
    pub fn new() -> Result<Self, SecretStoreError> {
        let path =
            PairlabPaths::secret_file().map_err(|_| SecretStoreError::ConfigDirNotFound)?;
        Ok(Self { path })
    }

    /// Creates a store with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads and parses the secrets file.
    pub fn load(&self) -> Result<SecretConfig, SecretStoreError> {
        if !self.path.exists() {
            return Err(SecretStoreError::NotFound(self.path.clone()));
        }

        let content = fs::read_to_string(&self.path)?;
        let config = serde_json::from_str(&content)?;

        Ok(config)
    }

    /// Returns the path to the secrets file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
