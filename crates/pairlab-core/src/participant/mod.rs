//! Participant domain module.
//!
//! Contains the participant model (people waiting in the pairing queue)
//! and the repository trait for participant persistence.

mod model;
mod repository;

pub use model::{Participant, ParticipantStatus};
pub use repository::ParticipantRepository;
