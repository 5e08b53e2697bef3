//! Unified path management for pairlab configuration and data files.
//!
//! All paths are resolved through the `dirs` crate so the layout is
//! consistent across platforms (XDG on Linux, the platform equivalents
//! elsewhere).

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for pairlab.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/pairlab/           # Config directory
/// ├── config.toml              # Application configuration
/// └── secret.json              # API keys (never committed, never embedded)
///
/// ~/.local/share/pairlab/      # Data directory (JSON collections)
/// ├── users.json
/// ├── matches.json
/// ├── sessions.json
/// ├── waitlist.json
/// ├── registration_logs.json
/// └── state.json
/// ```
pub struct PairlabPaths;

impl PairlabPaths {
    /// Returns the pairlab configuration directory, e.g. `~/.config/pairlab/`.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("pairlab"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the pairlab data directory, e.g. `~/.local/share/pairlab/`.
    ///
    /// This is where the JSON collection files live unless the config or
    /// the CLI overrides it.
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join("pairlab"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the secrets file.
    ///
    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions (e.g., 600) to prevent
    /// unauthorized access.
    pub fn secret_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("secret.json"))
    }

    /// Ensures the secret file exists, creating it with a template if it doesn't.
    ///
    /// The template carries an empty `deepseek.api_key` placeholder for the
    /// operator to fill in; credentials are only ever read from this file or
    /// the environment.
    ///
    /// # Security Note
    ///
    /// This function sets file permissions to 600 (user read/write only) on
    /// Unix systems.
    pub fn ensure_secret_file() -> Result<PathBuf, std::io::Error> {
        let secret_path = Self::secret_file()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()))?;

        // If file already exists, return the path
        if secret_path.exists() {
            return Ok(secret_path);
        }

        // Ensure parent directory exists
        if let Some(parent) = secret_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        use crate::storage::{DeepseekConfig, SecretConfig};

        let template_config = SecretConfig {
            deepseek: Some(DeepseekConfig {
                api_key: String::new(),
                model_name: Some("deepseek-chat".to_string()),
            }),
        };

        let template_json = serde_json::to_string_pretty(&template_config)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

        std::fs::write(&secret_path, template_json)?;

        // Set file permissions to 600 (user read/write only) on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&secret_path, permissions)?;
        }

        Ok(secret_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = PairlabPaths::config_dir().unwrap();
        assert!(config_dir.ends_with("pairlab"));
    }

    #[test]
    fn test_config_file() {
        let config_file = PairlabPaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        let config_dir = PairlabPaths::config_dir().unwrap();
        assert!(config_file.starts_with(&config_dir));
    }

    #[test]
    fn test_secret_file() {
        let secret_file = PairlabPaths::secret_file().unwrap();
        assert!(secret_file.ends_with("secret.json"));
        let config_dir = PairlabPaths::config_dir().unwrap();
        assert!(secret_file.starts_with(&config_dir));
    }

    #[test]
    fn test_data_dir() {
        let data_dir = PairlabPaths::data_dir().unwrap();
        assert!(data_dir.ends_with("pairlab"));
    }
}
