//! JSON-file-based RegistrationLogRepository implementation.

use crate::storage::JsonStorage;
use async_trait::async_trait;
use pairlab_core::Result;
use pairlab_core::registration::{RegistrationLogEntry, RegistrationLogRepository};
use std::path::Path;
use tracing::debug;

/// Reads the registration log from `registration_logs.json`, written by
/// the registration site.
pub struct JsonRegistrationLogRepository {
    storage: JsonStorage,
}

impl JsonRegistrationLogRepository {
    pub const FILE_NAME: &'static str = "registration_logs.json";

    /// Creates a repository over `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            storage: JsonStorage::new(data_dir.as_ref().join(Self::FILE_NAME)),
        }
    }
}

#[async_trait]
impl RegistrationLogRepository for JsonRegistrationLogRepository {
    async fn list_all(&self) -> Result<Vec<RegistrationLogEntry>> {
        let entries: Vec<RegistrationLogEntry> = self.storage.load()?.unwrap_or_default();
        debug!(count = entries.len(), "Loaded registration log");
        Ok(entries)
    }
}
