//! Registration log entries, written by the registration site.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One registration-flow event (signup, confirmation, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationLogEntry {
    pub email: String,
    /// Free-form event name, e.g. `"signup"`
    pub event: String,
    /// Event timestamp (RFC 3339)
    pub created_at: String,
}

/// Read-only access to the registration log collection.
#[async_trait]
pub trait RegistrationLogRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<RegistrationLogEntry>>;
}
