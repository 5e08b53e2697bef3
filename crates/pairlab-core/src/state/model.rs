//! Console state model.

use crate::action_log::ActionLog;
use crate::matching::Selection;
use serde::{Deserialize, Serialize};

/// Console state that persists across invocations.
///
/// # Fields
///
/// * `selection` - The operator's current manual-pairing selection.
/// * `action_log` - Rolling log of recent operator actions, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleState {
    #[serde(default)]
    pub selection: Selection,
    #[serde(default)]
    pub action_log: ActionLog,
}

impl ConsoleState {
    /// Creates an empty console state.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let state = ConsoleState::new();
        assert!(state.selection.is_empty());
        assert!(state.action_log.is_empty());
    }

    #[test]
    fn test_round_trips_through_json() {
        let mut state = ConsoleState::new();
        state.selection.toggle("user_a").unwrap();
        state.action_log.record("selected user_a");
        let json = serde_json::to_string(&state).unwrap();
        let back: ConsoleState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_missing_fields_default() {
        let state: ConsoleState = serde_json::from_str("{}").unwrap();
        assert!(state.selection.is_empty());
        assert!(state.action_log.is_empty());
    }
}
