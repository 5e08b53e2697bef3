//! JSON-file-based MatchRepository implementation.

use crate::storage::JsonStorage;
use async_trait::async_trait;
use pairlab_core::Result;
use pairlab_core::matching::{MatchRecord, MatchRepository};
use std::path::Path;
use tracing::debug;

/// Stores the match collection in `matches.json` under the data directory.
pub struct JsonMatchRepository {
    storage: JsonStorage,
}

impl JsonMatchRepository {
    pub const FILE_NAME: &'static str = "matches.json";

    /// Creates a repository over `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            storage: JsonStorage::new(data_dir.as_ref().join(Self::FILE_NAME)),
        }
    }
}

#[async_trait]
impl MatchRepository for JsonMatchRepository {
    async fn list_all(&self) -> Result<Vec<MatchRecord>> {
        let matches: Vec<MatchRecord> = self.storage.load()?.unwrap_or_default();
        debug!(count = matches.len(), "Loaded match collection");
        Ok(matches)
    }

    async fn replace_all(&self, matches: &[MatchRecord]) -> Result<()> {
        self.storage.save(matches)?;
        debug!(count = matches.len(), "Replaced match collection");
        Ok(())
    }
}
