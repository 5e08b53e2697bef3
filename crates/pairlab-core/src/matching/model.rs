//! Match domain models.

use crate::error::{PairlabError, Result};
use crate::participant::Participant;
use crate::timeslot::TimeSlot;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// Lifecycle status of a match.
///
/// The legal transitions are `Scheduled -> Active -> Completed` and
/// `Scheduled -> Cancelled`. Status never changes implicitly; the console
/// applies transitions through [`MatchRecord::transition`] only.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Active,
    Completed,
    Cancelled,
}

impl MatchStatus {
    /// Whether moving from `self` to `next` is a legal transition.
    pub fn can_transition_to(self, next: MatchStatus) -> bool {
        matches!(
            (self, next),
            (Self::Scheduled, Self::Active)
                | (Self::Scheduled, Self::Cancelled)
                | (Self::Active, Self::Completed)
        )
    }
}

/// A pairing the engine proposes but has not committed.
///
/// Carries everything the console needs to build a [`MatchRecord`]: both
/// participant ids, both emails (denormalized for display), and the shared
/// slot the pair would meet in. Proposals have no identity and no side
/// effects; dropping one changes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairProposal {
    pub participant_a: String,
    pub participant_b: String,
    pub email_a: String,
    pub email_b: String,
    pub time_slot: TimeSlot,
}

impl PairProposal {
    pub(crate) fn new(a: &Participant, b: &Participant, time_slot: TimeSlot) -> Self {
        Self {
            participant_a: a.id.clone(),
            participant_b: b.id.clone(),
            email_a: a.email.clone(),
            email_b: b.email.clone(),
            time_slot,
        }
    }
}

/// A committed pairing of two participants in one shared weekly slot.
///
/// Both participant references are distinct and both listed `time_slot`
/// at creation time (the engine refuses to propose otherwise).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    /// Unique match identifier (`match_` prefix + UUID)
    pub id: String,
    pub participant_a: String,
    pub participant_b: String,
    pub email_a: String,
    pub email_b: String,
    /// The weekly slot the pair meets in
    pub time_slot: TimeSlot,
    /// Date the match was scheduled (`YYYY-MM-DD`)
    pub scheduled_date: String,
    pub status: MatchStatus,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
}

impl MatchRecord {
    /// Builds a scheduled match from an engine proposal.
    pub fn from_proposal(proposal: &PairProposal, scheduled_date: NaiveDate) -> Self {
        Self {
            id: format!("match_{}", Uuid::new_v4().simple()),
            participant_a: proposal.participant_a.clone(),
            participant_b: proposal.participant_b.clone(),
            email_a: proposal.email_a.clone(),
            email_b: proposal.email_b.clone(),
            time_slot: proposal.time_slot,
            scheduled_date: scheduled_date.format("%Y-%m-%d").to_string(),
            status: MatchStatus::Scheduled,
            created_at: Utc::now().to_rfc3339(),
        }
    }

    /// Applies a validated status transition.
    ///
    /// Returns `InvalidTransition` and leaves the record untouched when the
    /// state machine forbids the move.
    pub fn transition(&mut self, next: MatchStatus) -> Result<()> {
        if !self.status.can_transition_to(next) {
            return Err(PairlabError::InvalidTransition {
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }
        self.status = next;
        Ok(())
    }

    /// Parses the scheduled date; `None` if the stored string is malformed.
    pub fn scheduled_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.scheduled_date, "%Y-%m-%d").ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(email: &str, times: Vec<TimeSlot>) -> Participant {
        Participant::new(email, times)
    }

    fn sample_record() -> MatchRecord {
        let a = participant("a@pairlab.dev", vec![TimeSlot::Mon19]);
        let b = participant("b@pairlab.dev", vec![TimeSlot::Mon19]);
        let proposal = PairProposal::new(&a, &b, TimeSlot::Mon19);
        MatchRecord::from_proposal(
            &proposal,
            NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        )
    }

    #[test]
    fn test_from_proposal() {
        let record = sample_record();
        assert!(record.id.starts_with("match_"));
        assert_eq!(record.status, MatchStatus::Scheduled);
        assert_eq!(record.scheduled_date, "2026-03-02");
        assert_eq!(record.time_slot, TimeSlot::Mon19);
        assert_ne!(record.participant_a, record.participant_b);
    }

    #[test]
    fn test_legal_transitions() {
        let mut record = sample_record();
        record.transition(MatchStatus::Active).unwrap();
        assert_eq!(record.status, MatchStatus::Active);
        record.transition(MatchStatus::Completed).unwrap();
        assert_eq!(record.status, MatchStatus::Completed);

        let mut record = sample_record();
        record.transition(MatchStatus::Cancelled).unwrap();
        assert_eq!(record.status, MatchStatus::Cancelled);
    }

    #[test]
    fn test_illegal_transitions_leave_record_untouched() {
        let mut record = sample_record();
        let err = record.transition(MatchStatus::Completed).unwrap_err();
        assert!(matches!(err, PairlabError::InvalidTransition { .. }));
        assert_eq!(record.status, MatchStatus::Scheduled);

        record.transition(MatchStatus::Active).unwrap();
        assert!(record.transition(MatchStatus::Cancelled).is_err());
        assert!(record.transition(MatchStatus::Scheduled).is_err());
        assert_eq!(record.status, MatchStatus::Active);
    }

    #[test]
    fn test_completed_is_terminal() {
        let mut record = sample_record();
        record.transition(MatchStatus::Active).unwrap();
        record.transition(MatchStatus::Completed).unwrap();
        for next in [
            MatchStatus::Scheduled,
            MatchStatus::Active,
            MatchStatus::Cancelled,
        ] {
            assert!(record.transition(next).is_err());
        }
    }

    #[test]
    fn test_status_wire_values() {
        assert_eq!(
            serde_json::to_string(&MatchStatus::Scheduled).unwrap(),
            "\"scheduled\""
        );
        assert_eq!(MatchStatus::Cancelled.to_string(), "cancelled");
        assert_eq!(
            "active".parse::<MatchStatus>().unwrap(),
            MatchStatus::Active
        );
    }

    #[test]
    fn test_scheduled_on_parses_date() {
        let record = sample_record();
        assert_eq!(
            record.scheduled_on(),
            NaiveDate::from_ymd_opt(2026, 3, 2)
        );
        let mut broken = sample_record();
        broken.scheduled_date = "03/02/2026".to_string();
        assert!(broken.scheduled_on().is_none());
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = sample_record();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["timeSlot"], "mon-19");
        assert_eq!(json["scheduledDate"], "2026-03-02");
        assert_eq!(json["emailA"], "a@pairlab.dev");
        assert_eq!(json["status"], "scheduled");
    }
}
