//! Live session domain module.
//!
//! Sessions are produced by the conversation runtime; the console reads
//! them for the live board and only ever replaces the collection wholesale
//! (demo seeding, clear-all).

mod model;
mod repository;

pub use model::{DepthBand, SessionRecord, SessionStatus};
pub use repository::SessionRepository;
