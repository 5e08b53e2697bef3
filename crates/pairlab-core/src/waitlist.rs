//! Waitlist entries, written by the public site and read-only here.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One signup on the public waitlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    pub email: String,
    /// Signup timestamp (RFC 3339)
    pub joined_at: String,
}

/// Read-only access to the waitlist collection.
#[async_trait]
pub trait WaitlistRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<WaitlistEntry>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let entry = WaitlistEntry {
            email: "new@pairlab.dev".to_string(),
            joined_at: "2026-02-10T09:30:00+00:00".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["email"], "new@pairlab.dev");
        assert_eq!(json["joinedAt"], "2026-02-10T09:30:00+00:00");
    }
}
