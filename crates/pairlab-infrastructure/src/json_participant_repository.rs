//! JSON-file-based ParticipantRepository implementation.

use crate::storage::JsonStorage;
use async_trait::async_trait;
use pairlab_core::Result;
use pairlab_core::participant::{Participant, ParticipantRepository};
use std::path::Path;
use tracing::debug;

/// Stores the participant collection in `users.json` under the data
/// directory. The whole array is read and replaced wholesale; a missing
/// file reads as an empty queue.
pub struct JsonParticipantRepository {
    storage: JsonStorage,
}

impl JsonParticipantRepository {
    pub const FILE_NAME: &'static str = "users.json";

    /// Creates a repository over `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            storage: JsonStorage::new(data_dir.as_ref().join(Self::FILE_NAME)),
        }
    }
}

#[async_trait]
impl ParticipantRepository for JsonParticipantRepository {
    async fn list_all(&self) -> Result<Vec<Participant>> {
        let participants: Vec<Participant> = self.storage.load()?.unwrap_or_default();
        debug!(count = participants.len(), "Loaded participant collection");
        Ok(participants)
    }

    async fn replace_all(&self, participants: &[Participant]) -> Result<()> {
        self.storage.save(participants)?;
        debug!(count = participants.len(), "Replaced participant collection");
        Ok(())
    }
}
