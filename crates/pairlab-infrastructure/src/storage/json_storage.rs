//! Atomic JSON file storage.
//!
//! One handle per stored document (a collection array or the console state
//! object). The web original kept these as browser local-storage values;
//! here each value is its own JSON file with atomic replacement.

use pairlab_core::PairlabError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, File};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

/// Errors that can occur during JSON storage operations.
#[derive(Debug)]
pub enum JsonStorageError {
    /// File I/O error.
    IoError(std::io::Error),
    /// JSON parsing or serialization error.
    JsonError(serde_json::Error),
}

impl std::fmt::Display for JsonStorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonStorageError::IoError(e) => write!(f, "I/O error: {}", e),
            JsonStorageError::JsonError(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for JsonStorageError {}

impl From<std::io::Error> for JsonStorageError {
    fn from(e: std::io::Error) -> Self {
        JsonStorageError::IoError(e)
    }
}

impl From<serde_json::Error> for JsonStorageError {
    fn from(e: serde_json::Error) -> Self {
        JsonStorageError::JsonError(e)
    }
}

impl From<JsonStorageError> for PairlabError {
    fn from(e: JsonStorageError) -> Self {
        match e {
            JsonStorageError::IoError(io) => io.into(),
            JsonStorageError::JsonError(json) => json.into(),
        }
    }
}

/// A JSON document file with atomic replacement.
///
/// Provides:
/// - **Atomicity**: Updates are all-or-nothing via tmp file + atomic rename
/// - **Durability**: Explicit fsync before rename
/// - **Missing means empty**: A file that does not exist (or holds only
///   whitespace) loads as `None`; callers substitute their empty value
///
/// There is no file locking: the console is a single-process tool and the
/// collections follow last-write-wins semantics.
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Creates a new storage handle for the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and deserializes the stored document.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Successfully loaded and parsed
    /// - `Ok(None)`: File doesn't exist or is empty
    /// - `Err`: Failed to read or parse the file
    pub fn load<T: DeserializeOwned>(&self) -> Result<Option<T>, JsonStorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let value = serde_json::from_str(&content)?;
        Ok(Some(value))
    }

    /// Saves the document atomically.
    ///
    /// Writes pretty JSON to a temporary file in the same directory, fsyncs
    /// it, then renames over the target. Parent directories are created on
    /// demand.
    pub fn save<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), JsonStorageError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json_string = serde_json::to_string_pretty(value)?;

        // Write to temporary file in the same directory
        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json_string.as_bytes())?;

        // Ensure data is written to disk
        tmp_file.sync_all()?;
        drop(tmp_file);

        // Atomic rename
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Removes the backing file; a missing file is not an error.
    pub fn remove(&self) -> Result<(), JsonStorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Gets a temporary file path for atomic writes.
    fn temp_path(&self) -> Result<PathBuf, JsonStorageError> {
        let parent = self.path.parent().ok_or_else(|| {
            JsonStorageError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no parent directory",
            ))
        })?;

        let file_name = self.path.file_name().ok_or_else(|| {
            JsonStorageError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no file name",
            ))
        })?;

        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(parent.join(tmp_name))
    }
}
