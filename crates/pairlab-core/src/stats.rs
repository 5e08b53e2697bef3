//! Dashboard summary statistics.

use crate::matching::{MatchRecord, MatchStatus};
use crate::participant::Participant;
use crate::session::{SessionRecord, SessionStatus};
use crate::waitlist::WaitlistEntry;
use serde::Serialize;

/// The headline numbers of the dashboard overview.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_participants: usize,
    pub total_waitlist: usize,
    pub matches_made: usize,
    pub completed_matches: usize,
    pub active_sessions: usize,
    /// Average matches per participant, rounded to one decimal
    pub avg_match_count: f64,
}

impl DashboardStats {
    /// Computes the stats over the current collections.
    pub fn compute(
        participants: &[Participant],
        waitlist: &[WaitlistEntry],
        matches: &[MatchRecord],
        sessions: &[SessionRecord],
    ) -> Self {
        let avg_match_count = if participants.is_empty() {
            0.0
        } else {
            let total: u64 = participants.iter().map(|p| u64::from(p.match_count)).sum();
            let avg = total as f64 / participants.len() as f64;
            (avg * 10.0).round() / 10.0
        };
        Self {
            total_participants: participants.len(),
            total_waitlist: waitlist.len(),
            matches_made: matches.len(),
            completed_matches: matches
                .iter()
                .filter(|m| m.status == MatchStatus::Completed)
                .count(),
            active_sessions: sessions
                .iter()
                .filter(|s| s.status == SessionStatus::Active)
                .count(),
            avg_match_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{PairProposal, propose_pair};
    use crate::timeslot::TimeSlot;
    use chrono::NaiveDate;

    fn participant(email: &str, match_count: u32) -> Participant {
        let mut p = Participant::new(email, vec![TimeSlot::Mon19]);
        p.match_count = match_count;
        p
    }

    fn match_with_status(status: MatchStatus) -> MatchRecord {
        let a = participant("a@pairlab.dev", 0);
        let b = participant("b@pairlab.dev", 0);
        let proposal: PairProposal = propose_pair(&a, &b).unwrap();
        let mut record = MatchRecord::from_proposal(
            &proposal,
            NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        );
        record.status = status;
        record
    }

    #[test]
    fn test_empty_collections() {
        let stats = DashboardStats::compute(&[], &[], &[], &[]);
        assert_eq!(stats.total_participants, 0);
        assert_eq!(stats.avg_match_count, 0.0);
    }

    #[test]
    fn test_average_rounds_to_one_decimal() {
        let pool = vec![
            participant("a@pairlab.dev", 1),
            participant("b@pairlab.dev", 1),
            participant("c@pairlab.dev", 2),
        ];
        // 4 / 3 = 1.333... -> 1.3
        let stats = DashboardStats::compute(&pool, &[], &[], &[]);
        assert_eq!(stats.avg_match_count, 1.3);

        let pool = vec![participant("a@pairlab.dev", 1), participant("b@pairlab.dev", 2)];
        // 3 / 2 = 1.5
        let stats = DashboardStats::compute(&pool, &[], &[], &[]);
        assert_eq!(stats.avg_match_count, 1.5);
    }

    #[test]
    fn test_status_counts() {
        let matches = vec![
            match_with_status(MatchStatus::Scheduled),
            match_with_status(MatchStatus::Completed),
            match_with_status(MatchStatus::Completed),
            match_with_status(MatchStatus::Cancelled),
        ];
        let mut active = SessionRecord::new("match_1");
        active.status = SessionStatus::Active;
        let mut done = SessionRecord::new("match_2");
        done.status = SessionStatus::Completed;
        let sessions = vec![active, done];

        let stats = DashboardStats::compute(&[], &[], &matches, &sessions);
        assert_eq!(stats.matches_made, 4);
        assert_eq!(stats.completed_matches, 2);
        assert_eq!(stats.active_sessions, 1);
    }
}
