//! Session repository trait.

use super::model::SessionRecord;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for session persistence.
///
/// The conversation runtime owns session writes in production; the console
/// only replaces the collection for demo seeding and clear-all.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Loads every stored session.
    async fn list_all(&self) -> Result<Vec<SessionRecord>>;

    /// Replaces the stored collection with `sessions`.
    async fn replace_all(&self, sessions: &[SessionRecord]) -> Result<()>;
}
