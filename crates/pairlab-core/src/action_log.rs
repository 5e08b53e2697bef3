//! Capped operator action log.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Maximum number of retained action log entries.
pub const ACTION_LOG_CAP: usize = 50;

/// One logged operator action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionEntry {
    pub message: String,
    /// When the action happened (RFC 3339)
    pub created_at: String,
}

/// Rolling log of the operator's last actions, newest first.
///
/// Bounded at [`ACTION_LOG_CAP`] entries; recording a new action evicts the
/// oldest once the cap is reached. The log is informational only and never
/// fails an operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionLog {
    entries: Vec<ActionEntry>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an action with the current timestamp.
    pub fn record(&mut self, message: impl Into<String>) {
        self.entries.insert(
            0,
            ActionEntry {
                message: message.into(),
                created_at: Utc::now().to_rfc3339(),
            },
        );
        self.entries.truncate(ACTION_LOG_CAP);
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[ActionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut log = ActionLog::new();
        log.record("first");
        log.record("second");
        assert_eq!(log.entries()[0].message, "second");
        assert_eq!(log.entries()[1].message, "first");
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut log = ActionLog::new();
        for i in 0..60 {
            log.record(format!("action {}", i));
        }
        assert_eq!(log.len(), ACTION_LOG_CAP);
        assert_eq!(log.entries()[0].message, "action 59");
        // "action 9" and older are gone.
        assert_eq!(log.entries()[49].message, "action 10");
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let mut log = ActionLog::new();
        log.record("paired A with B");
        let json = serde_json::to_value(&log).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["message"], "paired A with B");
    }
}
