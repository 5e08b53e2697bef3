//! Participant domain model.

use crate::timeslot::TimeSlot;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Queue status of a participant.
///
/// The service writes `Pending` for everyone today; `Paused` is accepted in
/// stored data so an operator can park a record by hand without losing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantStatus {
    #[default]
    Pending,
    Paused,
}

/// A person waiting in the pairing queue.
///
/// Participants carry their weekly availability and a running count of how
/// many matches they have been placed into. Timestamps are RFC 3339 strings,
/// the format the stored JSON collections use throughout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Unique participant identifier (`user_` prefix + UUID)
    pub id: String,
    /// Contact email, also the human-facing identifier in notices
    pub email: String,
    /// Optional display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Weekly availability windows
    #[serde(default)]
    pub times: Vec<TimeSlot>,
    /// Number of matches this participant has been placed into
    #[serde(default)]
    pub match_count: u32,
    /// Queue status
    #[serde(default)]
    pub status: ParticipantStatus,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
    /// Last activity timestamp (RFC 3339), if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active: Option<String>,
}

impl Participant {
    /// Creates a new pending participant with a fresh id and zero matches.
    pub fn new(email: impl Into<String>, times: Vec<TimeSlot>) -> Self {
        Self {
            id: format!("user_{}", Uuid::new_v4().simple()),
            email: email.into(),
            name: None,
            times,
            match_count: 0,
            status: ParticipantStatus::default(),
            created_at: Utc::now().to_rfc3339(),
            last_active: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name for display contexts, falling back to the email.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }

    /// Whether this participant listed the given slot.
    pub fn is_available_at(&self, slot: TimeSlot) -> bool {
        self.times.contains(&slot)
    }

    /// Case-insensitive substring match against email and name.
    ///
    /// An empty query matches everyone.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        if self.email.to_lowercase().contains(&query) {
            return true;
        }
        self.name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(&query))
    }
}
