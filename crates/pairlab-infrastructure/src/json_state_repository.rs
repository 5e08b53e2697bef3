//! JSON-file-based StateRepository implementation.

use crate::storage::JsonStorage;
use async_trait::async_trait;
use pairlab_core::Result;
use pairlab_core::state::{ConsoleState, StateRepository};
use std::path::Path;
use tracing::debug;

/// Persists the console state (selection + action log) in `state.json`.
pub struct JsonStateRepository {
    storage: JsonStorage,
}

impl JsonStateRepository {
    pub const FILE_NAME: &'static str = "state.json";

    /// Creates a repository over `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            storage: JsonStorage::new(data_dir.as_ref().join(Self::FILE_NAME)),
        }
    }
}

#[async_trait]
impl StateRepository for JsonStateRepository {
    async fn load(&self) -> Result<ConsoleState> {
        let state: ConsoleState = self.storage.load()?.unwrap_or_default();
        debug!(
            selected = state.selection.len(),
            actions = state.action_log.len(),
            "Loaded console state"
        );
        Ok(state)
    }

    async fn save(&self, state: &ConsoleState) -> Result<()> {
        self.storage.save(state)?;
        debug!("Saved console state");
        Ok(())
    }
}
