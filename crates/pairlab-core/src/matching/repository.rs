//! Match repository trait.

use super::model::MatchRecord;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for match persistence.
///
/// Same wholesale contract as the participant repository: the whole
/// collection in, the whole collection out, missing store reads as empty.
#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Loads every stored match.
    async fn list_all(&self) -> Result<Vec<MatchRecord>>;

    /// Replaces the stored collection with `matches`.
    async fn replace_all(&self, matches: &[MatchRecord]) -> Result<()>;
}
