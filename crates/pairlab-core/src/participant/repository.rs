//! Participant repository trait.

use super::model::Participant;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for participant persistence.
///
/// The queue is small and every view needs the whole of it, so the contract
/// is wholesale: read the full collection, write the full collection. The
/// write replaces whatever was stored before (last write wins).
///
/// # Implementation Notes
///
/// - A missing backing store reads as an empty collection, never an error.
/// - `replace_all` must be atomic: readers see the old collection or the
///   new one, never a torn mix.
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Loads every stored participant.
    async fn list_all(&self) -> Result<Vec<Participant>>;

    /// Replaces the stored collection with `participants`.
    async fn replace_all(&self, participants: &[Participant]) -> Result<()>;
}
