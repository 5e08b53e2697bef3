pub mod admin;
pub mod calendar;
pub mod chat;
pub mod export;
pub mod overview;
pub mod pairing;
pub mod queue;
pub mod selection;
pub mod sessions;
pub mod status;
pub mod utils;
