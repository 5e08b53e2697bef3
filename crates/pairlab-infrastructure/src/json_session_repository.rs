//! JSON-file-based SessionRepository implementation.

use crate::storage::JsonStorage;
use async_trait::async_trait;
use pairlab_core::Result;
use pairlab_core::session::{SessionRecord, SessionRepository};
use std::path::Path;
use tracing::debug;

/// Stores the session collection in `sessions.json` under the data
/// directory. Written by the conversation runtime in production; the
/// console only replaces it for seeding and clear-all.
pub struct JsonSessionRepository {
    storage: JsonStorage,
}

impl JsonSessionRepository {
    pub const FILE_NAME: &'static str = "sessions.json";

    /// Creates a repository over `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            storage: JsonStorage::new(data_dir.as_ref().join(Self::FILE_NAME)),
        }
    }
}

#[async_trait]
impl SessionRepository for JsonSessionRepository {
    async fn list_all(&self) -> Result<Vec<SessionRecord>> {
        let sessions: Vec<SessionRecord> = self.storage.load()?.unwrap_or_default();
        debug!(count = sessions.len(), "Loaded session collection");
        Ok(sessions)
    }

    async fn replace_all(&self, sessions: &[SessionRecord]) -> Result<()> {
        self.storage.save(sessions)?;
        debug!(count = sessions.len(), "Replaced session collection");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonSessionRepository::new(temp_dir.path());

        assert!(repo.list_all().await.unwrap().is_empty());

        let mut session = SessionRecord::new("match_1");
        session.message_count = 12;
        session.depth_score = Some(6);
        repo.replace_all(std::slice::from_ref(&session)).await.unwrap();

        let loaded = repo.list_all().await.unwrap();
        assert_eq!(loaded, vec![session]);
    }
}
