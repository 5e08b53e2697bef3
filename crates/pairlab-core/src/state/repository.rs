//! Console state repository trait.

use super::model::ConsoleState;
use crate::error::Result;
use async_trait::async_trait;

/// Persistence for [`ConsoleState`].
///
/// # Implementation Notes
///
/// - `load` returns the default (empty) state when nothing was stored yet.
/// - `save` overwrites the stored state atomically.
#[async_trait]
pub trait StateRepository: Send + Sync {
    /// Loads the stored console state, or the default when absent.
    async fn load(&self) -> Result<ConsoleState>;

    /// Persists the console state.
    async fn save(&self, state: &ConsoleState) -> Result<()>;
}
