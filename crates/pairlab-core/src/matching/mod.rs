//! Matching domain module.
//!
//! # Module Structure
//!
//! - `model`: Match records, status state machine, pair proposals
//! - `engine`: Pure pairing engine (selection, overlap, batch, auto)
//! - `repository`: Repository trait for match persistence

mod engine;
mod model;
mod repository;

pub use engine::{
    BatchPolicy, MAX_SELECTED, Selection, SelectionChange, common_slots, find_auto_pair,
    generate_batch_pairs, propose_pair,
};
pub use model::{MatchRecord, MatchStatus, PairProposal};
pub use repository::MatchRepository;
