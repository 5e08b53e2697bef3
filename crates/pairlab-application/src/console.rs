//! Admin console service.
//!
//! This module provides the `AdminConsole` which orchestrates the pairing
//! engine, the persisted collections and the operator's console state, so
//! that every mutation keeps the stored data and the in-memory dashboard
//! consistent.

use crate::views::{self, CalendarWeek, QueueEntry, SessionsBoard};
use chrono::{Duration, Utc};
use pairlab_core::Result;
use pairlab_core::action_log::ActionEntry;
use pairlab_core::error::PairlabError;
use pairlab_core::matching::{
    BatchPolicy, MatchRecord, MatchRepository, MatchStatus, PairProposal, SelectionChange,
    find_auto_pair, generate_batch_pairs, propose_pair,
};
use pairlab_core::participant::{Participant, ParticipantRepository};
use pairlab_core::registration::{RegistrationLogEntry, RegistrationLogRepository};
use pairlab_core::session::{SessionRecord, SessionRepository, SessionStatus};
use pairlab_core::state::{ConsoleState, StateRepository};
use pairlab_core::stats::DashboardStats;
use pairlab_core::timeslot::TimeSlot;
use pairlab_core::waitlist::{WaitlistEntry, WaitlistRepository};
use pairlab_infrastructure::LocalStore;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Email domain of the seeded demo participants.
///
/// `seed_demo_data` replaces every participant carrying this domain, so
/// repeated seeding never accumulates fixtures.
pub const DEMO_EMAIL_DOMAIN: &str = "@pairlab.dev";

/// In-memory copy of the three dashboard collections.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub participants: Vec<Participant>,
    pub matches: Vec<MatchRecord>,
    pub sessions: Vec<SessionRecord>,
}

/// Service coordinating the pairing console.
///
/// `AdminConsole` holds repository handles for every collection plus a
/// cached [`DashboardData`] snapshot behind a `tokio::sync::RwLock`. The
/// cache is refreshed wholesale by [`reload`](Self::reload); there is no
/// incremental invalidation and no concurrent writer to defend against.
///
/// # Responsibilities
///
/// - Maintaining the operator's manual-pairing selection and action log
///   (persisted between invocations through the state repository)
/// - Committing engine proposals: match records, counter increments,
///   persistence ordering (matches before participants)
/// - Explicit match status transitions
/// - Demo seeding and the destructive clear-all
pub struct AdminConsole {
    store: LocalStore,
    /// Repository for participant persistence
    participants: Arc<dyn ParticipantRepository>,
    /// Repository for match persistence
    matches: Arc<dyn MatchRepository>,
    /// Repository for session persistence
    sessions: Arc<dyn SessionRepository>,
    /// Read-only waitlist access (written by the public site, not us)
    waitlist: Arc<dyn WaitlistRepository>,
    /// Read-only registration log access
    registration_logs: Arc<dyn RegistrationLogRepository>,
    /// Persistence for selection and action log
    state: Arc<dyn StateRepository>,
    /// Cached dashboard collections
    data: RwLock<DashboardData>,
    /// Selection and action log, mirrored to `state` on every change
    console_state: RwLock<ConsoleState>,
}

impl AdminConsole {
    /// Opens the console over a local store.
    ///
    /// Loads all collections and the persisted console state before
    /// returning, so the first render works from warm data.
    ///
    /// # Errors
    ///
    /// Returns an error when any collection or the console state cannot be
    /// read or parsed.
    pub async fn open(store: LocalStore) -> Result<Self> {
        let console = Self {
            participants: store.participants(),
            matches: store.matches(),
            sessions: store.sessions(),
            waitlist: store.waitlist(),
            registration_logs: store.registration_logs(),
            state: store.state(),
            store,
            data: RwLock::new(DashboardData::default()),
            console_state: RwLock::new(ConsoleState::new()),
        };
        console.reload().await?;
        let stored = console.state.load().await?;
        *console.console_state.write().await = stored;
        Ok(console)
    }

    /// Refreshes the cached collections from storage.
    ///
    /// All three collections are loaded before the cache is touched; on
    /// failure the previous snapshot stays in place.
    pub async fn reload(&self) -> Result<()> {
        let participants = self.participants.list_all().await?;
        let matches = self.matches.list_all().await?;
        let sessions = self.sessions.list_all().await?;
        tracing::debug!(
            "[AdminConsole] Reloaded {} participants, {} matches, {} sessions",
            participants.len(),
            matches.len(),
            sessions.len()
        );
        let mut data = self.data.write().await;
        data.participants = participants;
        data.matches = matches;
        data.sessions = sessions;
        Ok(())
    }

    /// A clone of the cached collections.
    pub async fn dashboard(&self) -> DashboardData {
        self.data.read().await.clone()
    }

    /// Ids currently selected for manual pairing, in selection order.
    pub async fn selection_ids(&self) -> Vec<String> {
        self.console_state.read().await.selection.ids().to_vec()
    }

    /// Selected participants resolved against the cache.
    ///
    /// Ids whose participant has disappeared since selection are skipped.
    pub async fn selected_participants(&self) -> Vec<Participant> {
        let state = self.console_state.read().await;
        let data = self.data.read().await;
        state
            .selection
            .ids()
            .iter()
            .filter_map(|id| data.participants.iter().find(|p| &p.id == id))
            .cloned()
            .collect()
    }

    /// The operator action log, newest first.
    pub async fn recent_actions(&self) -> Vec<ActionEntry> {
        self.console_state.read().await.action_log.entries().to_vec()
    }

    /// Adds or removes a participant from the manual-pairing selection.
    ///
    /// The change and a matching action-log entry are persisted before
    /// returning.
    ///
    /// # Errors
    ///
    /// - `NotFound` when the id matches no cached participant
    /// - `CapacityExceeded` when two participants are already selected;
    ///   the selection is left unchanged
    pub async fn toggle_selection(&self, participant_id: &str) -> Result<SelectionChange> {
        let email = {
            let data = self.data.read().await;
            data.participants
                .iter()
                .find(|p| p.id == participant_id)
                .map(|p| p.email.clone())
                .ok_or_else(|| PairlabError::not_found("participant", participant_id))?
        };

        let mut state = self.console_state.write().await;
        let change = state.selection.toggle(participant_id)?;
        match change {
            SelectionChange::Added => state.action_log.record(format!("Selected {}", email)),
            SelectionChange::Removed => state.action_log.record(format!("Deselected {}", email)),
        }
        self.state.save(&state).await?;
        Ok(change)
    }

    /// Empties the manual-pairing selection.
    pub async fn clear_selection(&self) -> Result<()> {
        let mut state = self.console_state.write().await;
        state.selection.clear();
        self.state.save(&state).await
    }

    /// Commits the current selection as a match.
    ///
    /// Requires exactly two selected participants. On success the match is
    /// appended, both `match_count` values increment, matches persist
    /// before participants, the action is logged and the selection clears.
    /// Any refusal (`IncompleteSelection`, `NotFound`, `NoOverlap`) leaves
    /// every collection, counter and the selection untouched.
    pub async fn create_pair(&self) -> Result<MatchRecord> {
        let (id_a, id_b) = {
            let state = self.console_state.read().await;
            match state.selection.pair() {
                Some((a, b)) => (a.to_string(), b.to_string()),
                None => {
                    return Err(PairlabError::IncompleteSelection {
                        selected: state.selection.len(),
                    });
                }
            }
        };

        let proposal = {
            let data = self.data.read().await;
            let a = data
                .participants
                .iter()
                .find(|p| p.id == id_a)
                .ok_or_else(|| PairlabError::not_found("participant", id_a.clone()))?;
            let b = data
                .participants
                .iter()
                .find(|p| p.id == id_b)
                .ok_or_else(|| PairlabError::not_found("participant", id_b.clone()))?;
            propose_pair(a, b)?
        };

        let record = self.commit_proposal(&proposal).await?;
        tracing::info!(
            "[AdminConsole] Manual match {} committed ({} / {})",
            record.id,
            record.email_a,
            record.email_b
        );

        let mut state = self.console_state.write().await;
        state.action_log.record(format!(
            "Manual match created: {} ↔ {}",
            proposal.email_a, proposal.email_b
        ));
        state.selection.clear();
        self.state.save(&state).await?;
        Ok(record)
    }

    /// Pair proposals for the given filters, without committing anything.
    pub async fn preview_batch(
        &self,
        slot_filter: Option<TimeSlot>,
        policy: BatchPolicy,
    ) -> Vec<PairProposal> {
        let data = self.data.read().await;
        generate_batch_pairs(&data.participants, slot_filter, policy)
    }

    /// Generates and commits a whole round of batch pairs.
    ///
    /// Every proposal becomes a match record and bumps both counters; both
    /// collections are persisted once for the whole round.
    ///
    /// # Errors
    ///
    /// `NoCandidates` when the greedy scan produces no proposals.
    pub async fn execute_batch(
        &self,
        slot_filter: Option<TimeSlot>,
        policy: BatchPolicy,
    ) -> Result<Vec<MatchRecord>> {
        let proposals = self.preview_batch(slot_filter, policy).await;
        if proposals.is_empty() {
            return Err(PairlabError::no_candidates("No matches to create"));
        }
        let records = self.commit_proposals(&proposals).await?;
        tracing::info!("[AdminConsole] Batch committed {} matches", records.len());

        let mut state = self.console_state.write().await;
        state
            .action_log
            .record(format!("Batch matches created: {} pairs", records.len()));
        self.state.save(&state).await?;
        Ok(records)
    }

    /// Commits the first compatible pair in queue order.
    ///
    /// # Errors
    ///
    /// `NoCandidates` when no two participants share a slot.
    pub async fn auto_match(&self) -> Result<MatchRecord> {
        let proposal = {
            let data = self.data.read().await;
            find_auto_pair(&data.participants)
        }
        .ok_or_else(|| PairlabError::no_candidates("No compatible matches found"))?;

        let record = self.commit_proposal(&proposal).await?;
        tracing::info!(
            "[AdminConsole] Auto match {} committed ({} / {})",
            record.id,
            record.email_a,
            record.email_b
        );

        let mut state = self.console_state.write().await;
        state.action_log.record(format!(
            "Manual match created: {} ↔ {}",
            proposal.email_a, proposal.email_b
        ));
        self.state.save(&state).await?;
        Ok(record)
    }

    /// Applies an explicit match status transition and persists it.
    ///
    /// # Errors
    ///
    /// - `NotFound` when no match carries the id
    /// - `InvalidTransition` when the state machine forbids the move; the
    ///   stored record keeps its previous status
    pub async fn set_match_status(
        &self,
        match_id: &str,
        new_status: MatchStatus,
    ) -> Result<MatchRecord> {
        let (matches, record) = {
            let data = self.data.read().await;
            let mut matches = data.matches.clone();
            let record = matches
                .iter_mut()
                .find(|m| m.id == match_id)
                .ok_or_else(|| PairlabError::not_found("match", match_id))?;
            record.transition(new_status)?;
            let record = record.clone();
            (matches, record)
        };

        self.matches.replace_all(&matches).await?;
        self.reload().await?;
        tracing::info!(
            "[AdminConsole] Match {} moved to {}",
            record.id,
            record.status
        );

        let mut state = self.console_state.write().await;
        state.action_log.record(format!(
            "Match status updated: {} → {}",
            record.id, record.status
        ));
        self.state.save(&state).await?;
        Ok(record)
    }

    /// Headline dashboard numbers over the cached collections.
    pub async fn stats(&self) -> Result<DashboardStats> {
        let waitlist = self.waitlist.list_all().await?;
        let data = self.data.read().await;
        Ok(DashboardStats::compute(
            &data.participants,
            &waitlist,
            &data.matches,
            &data.sessions,
        ))
    }

    /// The waitlist as the public site recorded it.
    pub async fn waitlist(&self) -> Result<Vec<WaitlistEntry>> {
        self.waitlist.list_all().await
    }

    /// Registration events as the public site recorded them.
    pub async fn registration_logs(&self) -> Result<Vec<RegistrationLogEntry>> {
        self.registration_logs.list_all().await
    }

    /// Appends a free-form action-log entry and persists it.
    pub async fn log_action(&self, message: impl Into<String>) -> Result<()> {
        let mut state = self.console_state.write().await;
        state.action_log.record(message);
        self.state.save(&state).await
    }

    /// Replaces the demo fixtures with the three canonical demo
    /// participants.
    ///
    /// Existing participants outside [`DEMO_EMAIL_DOMAIN`] are kept.
    /// Matches between two demo participants, and the sessions hanging off
    /// them, are swept out before reseeding. With `with_sessions` the seed
    /// also creates one active demo match plus a live and a completed
    /// session so the sessions board has something to show.
    pub async fn seed_demo_data(&self, with_sessions: bool) -> Result<Vec<Participant>> {
        let demo = demo_participants();

        let (mut participants, mut matches, mut sessions) = {
            let data = self.data.read().await;
            let participants: Vec<Participant> = data
                .participants
                .iter()
                .filter(|p| !p.email.contains(DEMO_EMAIL_DOMAIN))
                .cloned()
                .collect();
            (participants, data.matches.clone(), data.sessions.clone())
        };
        participants.extend(demo.iter().cloned());

        let removed: Vec<String> = matches
            .iter()
            .filter(|m| {
                m.email_a.contains(DEMO_EMAIL_DOMAIN) && m.email_b.contains(DEMO_EMAIL_DOMAIN)
            })
            .map(|m| m.id.clone())
            .collect();
        matches.retain(|m| !removed.contains(&m.id));
        sessions.retain(|s| !removed.contains(&s.match_id));

        if with_sessions {
            let proposal = propose_pair(&demo[0], &demo[1])?;
            let mut record = MatchRecord::from_proposal(&proposal, Utc::now().date_naive());
            record.transition(MatchStatus::Active)?;

            let now = Utc::now();
            let mut live = SessionRecord::new(&record.id);
            live.started_at = (now - Duration::minutes(25)).to_rfc3339();
            live.message_count = 12;
            live.depth_score = Some(6);
            live.ai_interventions = 1;

            let mut finished = SessionRecord::new(&record.id);
            finished.status = SessionStatus::Completed;
            finished.started_at = (now - Duration::hours(3)).to_rfc3339();
            finished.ended_at = Some((now - Duration::hours(2)).to_rfc3339());
            finished.message_count = 47;
            finished.depth_score = Some(8);
            finished.ai_interventions = 2;

            matches.push(record);
            sessions.push(live);
            sessions.push(finished);
        }

        self.participants.replace_all(&participants).await?;
        self.matches.replace_all(&matches).await?;
        self.sessions.replace_all(&sessions).await?;
        self.reload().await?;
        tracing::info!(
            "[AdminConsole] Seeded {} demo participants (with_sessions: {})",
            demo.len(),
            with_sessions
        );

        let mut state = self.console_state.write().await;
        state
            .action_log
            .record(format!("Demo data seeded: {} participants", demo.len()));
        self.state.save(&state).await?;
        Ok(demo.to_vec())
    }

    /// Deletes every collection file and resets the in-memory state.
    ///
    /// Destructive and unconfirmed at this level; the caller is expected
    /// to have asked.
    pub async fn clear_all_data(&self) -> Result<()> {
        self.store.clear_all_data()?;
        *self.data.write().await = DashboardData::default();
        *self.console_state.write().await = ConsoleState::new();
        tracing::info!("[AdminConsole] All data cleared");
        Ok(())
    }

    /// Queue rows under the given search and slot filters.
    pub async fn queue_view(
        &self,
        search: Option<&str>,
        slot_filter: Option<TimeSlot>,
    ) -> Vec<QueueEntry> {
        let data = self.data.read().await;
        let state = self.console_state.read().await;
        views::queue(&data.participants, &state.selection, search, slot_filter)
    }

    /// The calendar week `week_offset` weeks away from the current one.
    pub async fn calendar_view(&self, week_offset: i64) -> CalendarWeek {
        let data = self.data.read().await;
        views::calendar_week(&data.matches, Utc::now().date_naive(), week_offset)
    }

    /// Active and recently completed sessions for the live board.
    pub async fn sessions_board(&self) -> SessionsBoard {
        let data = self.data.read().await;
        views::sessions_board(&data.sessions)
    }

    /// Builds the match record for one proposal and commits it.
    async fn commit_proposal(&self, proposal: &PairProposal) -> Result<MatchRecord> {
        let mut records = self
            .commit_proposals(std::slice::from_ref(proposal))
            .await?;
        records
            .pop()
            .ok_or_else(|| PairlabError::internal("commit produced no match record"))
    }

    /// Commits a set of proposals: one match record and two counter
    /// increments each, persisted matches-first, then a cache refresh.
    async fn commit_proposals(&self, proposals: &[PairProposal]) -> Result<Vec<MatchRecord>> {
        let today = Utc::now().date_naive();

        let (participants, matches, records) = {
            let data = self.data.read().await;
            let mut participants = data.participants.clone();
            let mut matches = data.matches.clone();
            let mut records = Vec::with_capacity(proposals.len());
            for proposal in proposals {
                let record = MatchRecord::from_proposal(proposal, today);
                matches.push(record.clone());
                records.push(record);
                for participant in participants.iter_mut() {
                    if participant.id == proposal.participant_a
                        || participant.id == proposal.participant_b
                    {
                        participant.match_count += 1;
                    }
                }
            }
            (participants, matches, records)
        };

        self.matches.replace_all(&matches).await?;
        self.participants.replace_all(&participants).await?;
        self.reload().await?;
        Ok(records)
    }
}

/// The three demo participants of the original debug fixtures.
fn demo_participants() -> [Participant; 3] {
    [
        Participant::new(
            format!("alice{}", DEMO_EMAIL_DOMAIN),
            vec![TimeSlot::Mon19, TimeSlot::Wed19, TimeSlot::Sat15],
        ),
        Participant::new(
            format!("bob{}", DEMO_EMAIL_DOMAIN),
            vec![TimeSlot::Mon19, TimeSlot::Tue20, TimeSlot::Sat15],
        ),
        Participant::new(
            format!("charlie{}", DEMO_EMAIL_DOMAIN),
            vec![TimeSlot::Wed19, TimeSlot::Thu20, TimeSlot::Sat20],
        ),
    ]
}
