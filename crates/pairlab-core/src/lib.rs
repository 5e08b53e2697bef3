pub mod action_log;
pub mod error;
pub mod matching;
pub mod participant;
pub mod registration;
pub mod session;
pub mod state;
pub mod stats;
pub mod timeslot;
pub mod waitlist;

// Re-export common error type
pub use error::{PairlabError, Result};
