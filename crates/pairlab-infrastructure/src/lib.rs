pub mod config;
pub mod json_match_repository;
pub mod json_participant_repository;
pub mod json_registration_log_repository;
pub mod json_session_repository;
pub mod json_state_repository;
pub mod json_waitlist_repository;
pub mod paths;
pub mod storage;
pub mod store;

pub use crate::config::AppConfig;
pub use crate::json_match_repository::JsonMatchRepository;
pub use crate::json_participant_repository::JsonParticipantRepository;
pub use crate::json_registration_log_repository::JsonRegistrationLogRepository;
pub use crate::json_session_repository::JsonSessionRepository;
pub use crate::json_state_repository::JsonStateRepository;
pub use crate::json_waitlist_repository::JsonWaitlistRepository;
pub use crate::paths::PairlabPaths;
pub use crate::store::LocalStore;
