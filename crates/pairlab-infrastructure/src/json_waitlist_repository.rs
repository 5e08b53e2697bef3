//! JSON-file-based WaitlistRepository implementation.

use crate::storage::JsonStorage;
use async_trait::async_trait;
use pairlab_core::Result;
use pairlab_core::waitlist::{WaitlistEntry, WaitlistRepository};
use std::path::Path;
use tracing::debug;

/// Reads the waitlist collection from `waitlist.json`. The public site
/// writes this file; the console never does.
pub struct JsonWaitlistRepository {
    storage: JsonStorage,
}

impl JsonWaitlistRepository {
    pub const FILE_NAME: &'static str = "waitlist.json";

    /// Creates a repository over `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            storage: JsonStorage::new(data_dir.as_ref().join(Self::FILE_NAME)),
        }
    }
}

#[async_trait]
impl WaitlistRepository for JsonWaitlistRepository {
    async fn list_all(&self) -> Result<Vec<WaitlistEntry>> {
        let entries: Vec<WaitlistEntry> = self.storage.load()?.unwrap_or_default();
        debug!(count = entries.len(), "Loaded waitlist collection");
        Ok(entries)
    }
}
