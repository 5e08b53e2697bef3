//! Pure pairing engine.
//!
//! Every function here is a pure computation over participant data: no
//! storage handles, no clocks, no globals. Committing a proposal (creating
//! the match record, bumping counters, persisting) is the application
//! layer's job, so the engine can be tested exhaustively without any setup.

use crate::error::{PairlabError, Result};
use crate::participant::Participant;
use crate::timeslot::TimeSlot;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::model::PairProposal;

/// Maximum number of participants in the manual-pairing selection.
pub const MAX_SELECTED: usize = 2;

/// What a [`Selection::toggle`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Added,
    Removed,
}

/// The operator's working set for manual pairing.
///
/// Toggle semantics: an id not in the set is added, an id already in the
/// set is removed. The set never grows past [`MAX_SELECTED`]; a toggle that
/// would is refused with `CapacityExceeded` and leaves the set unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or removes `participant_id`, reporting which happened.
    pub fn toggle(&mut self, participant_id: &str) -> Result<SelectionChange> {
        if let Some(pos) = self.ids.iter().position(|id| id == participant_id) {
            self.ids.remove(pos);
            return Ok(SelectionChange::Removed);
        }
        if self.ids.len() >= MAX_SELECTED {
            return Err(PairlabError::CapacityExceeded {
                limit: MAX_SELECTED,
            });
        }
        self.ids.push(participant_id.to_string());
        Ok(SelectionChange::Added)
    }

    pub fn contains(&self, participant_id: &str) -> bool {
        self.ids.iter().any(|id| id == participant_id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// The two selected ids, in selection order, once the set is full.
    pub fn pair(&self) -> Option<(&str, &str)> {
        match self.ids.as_slice() {
            [a, b] => Some((a.as_str(), b.as_str())),
            _ => None,
        }
    }
}

/// Slots present in both participants' availability, in `a`'s order.
///
/// An empty result means the two cannot be paired. The content is
/// symmetric in the arguments; only the ordering follows `a`.
pub fn common_slots(a: &Participant, b: &Participant) -> Vec<TimeSlot> {
    a.times
        .iter()
        .copied()
        .filter(|slot| b.times.contains(slot))
        .collect()
}

/// Proposes pairing two participants in their first shared slot.
///
/// Fails with `DuplicateParticipant` when both arguments are the same
/// participant and `NoOverlap` when they share no slot. The chosen slot is
/// always the first entry of [`common_slots`]; there is no preference
/// weighting.
pub fn propose_pair(a: &Participant, b: &Participant) -> Result<PairProposal> {
    if a.id == b.id {
        return Err(PairlabError::DuplicateParticipant { id: a.id.clone() });
    }
    let shared = common_slots(a, b);
    match shared.first() {
        Some(&slot) => Ok(PairProposal::new(a, b, slot)),
        None => Err(PairlabError::NoOverlap {
            a: a.email.clone(),
            b: b.email.clone(),
        }),
    }
}

/// Candidate ordering applied before the greedy batch scan.
///
/// The policy is purely a comparator; the scan itself is identical for all
/// three. Wire codes (`common-time`, ...) double as CLI values.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BatchPolicy {
    /// Keep the input order unchanged.
    #[default]
    CommonTime,
    /// Stable sort by match count ascending, so adjacent candidates have
    /// the most similar counts.
    SimilarCount,
    /// Match count ascending, ties broken by newest `created_at` first.
    NewUsers,
}

/// Generates as many disjoint pair proposals as one greedy scan finds.
///
/// With a `slot_filter`, only participants listing that slot are eligible
/// and every proposal is stamped with it; without one, each pair uses the
/// first slot of [`common_slots`]. The scan is first-fit: for each not yet
/// consumed candidate, the first compatible later candidate is taken and
/// both leave the pool. The result is order-dependent and not a maximum
/// matching, but deterministic for a given input order and policy, and no
/// participant appears in two proposals.
pub fn generate_batch_pairs(
    participants: &[Participant],
    slot_filter: Option<TimeSlot>,
    policy: BatchPolicy,
) -> Vec<PairProposal> {
    let mut pool: Vec<&Participant> = match slot_filter {
        Some(slot) => participants
            .iter()
            .filter(|p| p.is_available_at(slot))
            .collect(),
        None => participants.iter().collect(),
    };

    match policy {
        BatchPolicy::CommonTime => {}
        BatchPolicy::SimilarCount => pool.sort_by_key(|p| p.match_count),
        BatchPolicy::NewUsers => pool.sort_by(|a, b| {
            // Timestamps come from a single RFC 3339 writer, so the string
            // order is the chronological order.
            a.match_count
                .cmp(&b.match_count)
                .then_with(|| b.created_at.cmp(&a.created_at))
        }),
    }

    let mut consumed = vec![false; pool.len()];
    let mut proposals = Vec::new();

    for i in 0..pool.len() {
        if consumed[i] {
            continue;
        }
        for j in (i + 1)..pool.len() {
            if consumed[j] {
                continue;
            }
            let slot = match slot_filter {
                Some(slot) => Some(slot),
                None => common_slots(pool[i], pool[j]).first().copied(),
            };
            if let Some(slot) = slot {
                proposals.push(PairProposal::new(pool[i], pool[j], slot));
                consumed[i] = true;
                consumed[j] = true;
                break;
            }
        }
    }

    proposals
}

/// Finds the first compatible pair in index order, if any.
///
/// Scans all index pairs `i < j` and returns the first proposal
/// [`propose_pair`] accepts. O(n²) worst case, which is fine for a queue
/// this size. `None` means no two participants share a slot.
pub fn find_auto_pair(participants: &[Participant]) -> Option<PairProposal> {
    for i in 0..participants.len() {
        for j in (i + 1)..participants.len() {
            if let Ok(proposal) = propose_pair(&participants[i], &participants[j]) {
                return Some(proposal);
            }
        }
    }
    None
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn slot_strategy() -> impl Strategy<Value = TimeSlot> {
        prop::sample::select(vec![
            TimeSlot::Mon19,
            TimeSlot::Tue20,
            TimeSlot::Wed19,
            TimeSlot::Thu20,
            TimeSlot::Fri19,
            TimeSlot::Sat15,
            TimeSlot::Sat20,
            TimeSlot::Sun15,
        ])
    }

    fn participant_strategy() -> impl Strategy<Value = Participant> {
        (
            prop::collection::vec(slot_strategy(), 0..5),
            0u32..10,
        )
            .prop_map(|(times, match_count)| {
                let mut times = times;
                times.dedup();
                let mut p = Participant::new(
                    format!("{}@pairlab.dev", uuid::Uuid::new_v4().simple()),
                    times,
                );
                p.match_count = match_count;
                p
            })
    }

    proptest! {
        #[test]
        fn selection_never_exceeds_two(toggles in prop::collection::vec(0usize..6, 0..40)) {
            let ids = ["u0", "u1", "u2", "u3", "u4", "u5"];
            let mut selection = Selection::new();
            for idx in toggles {
                let _ = selection.toggle(ids[idx]);
                prop_assert!(selection.len() <= MAX_SELECTED);
            }
        }

        #[test]
        fn common_slots_content_is_symmetric(
            a in participant_strategy(),
            b in participant_strategy(),
        ) {
            let mut ab = common_slots(&a, &b);
            let mut ba = common_slots(&b, &a);
            ab.sort();
            ba.sort();
            prop_assert_eq!(ab, ba);
        }

        #[test]
        fn proposed_slot_is_listed_by_both(
            a in participant_strategy(),
            b in participant_strategy(),
        ) {
            if let Ok(proposal) = propose_pair(&a, &b) {
                prop_assert!(a.is_available_at(proposal.time_slot));
                prop_assert!(b.is_available_at(proposal.time_slot));
            }
        }

        #[test]
        fn batch_never_reuses_a_participant(
            pool in prop::collection::vec(participant_strategy(), 0..12),
            policy in prop::sample::select(vec![
                BatchPolicy::CommonTime,
                BatchPolicy::SimilarCount,
                BatchPolicy::NewUsers,
            ]),
        ) {
            let proposals = generate_batch_pairs(&pool, None, policy);
            let mut seen = std::collections::HashSet::new();
            for proposal in &proposals {
                prop_assert!(seen.insert(proposal.participant_a.clone()));
                prop_assert!(seen.insert(proposal.participant_b.clone()));
            }
        }

        #[test]
        fn batch_is_deterministic(
            pool in prop::collection::vec(participant_strategy(), 0..12),
            policy in prop::sample::select(vec![
                BatchPolicy::CommonTime,
                BatchPolicy::SimilarCount,
                BatchPolicy::NewUsers,
            ]),
        ) {
            let first = generate_batch_pairs(&pool, None, policy);
            let second = generate_batch_pairs(&pool, None, policy);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn batch_slot_filter_only_emits_that_slot(
            pool in prop::collection::vec(participant_strategy(), 0..12),
            slot in slot_strategy(),
        ) {
            let proposals = generate_batch_pairs(&pool, Some(slot), BatchPolicy::CommonTime);
            for proposal in &proposals {
                prop_assert_eq!(proposal.time_slot, slot);
            }
        }
    }
}
