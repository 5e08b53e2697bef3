//! Local data store bundling every collection repository.

use crate::json_match_repository::JsonMatchRepository;
use crate::json_participant_repository::JsonParticipantRepository;
use crate::json_registration_log_repository::JsonRegistrationLogRepository;
use crate::json_session_repository::JsonSessionRepository;
use crate::json_state_repository::JsonStateRepository;
use crate::json_waitlist_repository::JsonWaitlistRepository;
use pairlab_core::Result;
use pairlab_core::matching::MatchRepository;
use pairlab_core::participant::ParticipantRepository;
use pairlab_core::registration::RegistrationLogRepository;
use pairlab_core::session::SessionRepository;
use pairlab_core::state::StateRepository;
use pairlab_core::waitlist::WaitlistRepository;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// The JSON-file data store, one repository per collection.
///
/// `open` creates the data directory and hands out `Arc` repository
/// handles for wiring into the console. Every repository shares the same
/// directory; each owns exactly one file in it.
pub struct LocalStore {
    data_dir: PathBuf,
    participants: Arc<JsonParticipantRepository>,
    matches: Arc<JsonMatchRepository>,
    sessions: Arc<JsonSessionRepository>,
    waitlist: Arc<JsonWaitlistRepository>,
    registration_logs: Arc<JsonRegistrationLogRepository>,
    state: Arc<JsonStateRepository>,
}

impl LocalStore {
    /// The collection files this store manages.
    const FILE_NAMES: [&'static str; 6] = [
        JsonParticipantRepository::FILE_NAME,
        JsonMatchRepository::FILE_NAME,
        JsonSessionRepository::FILE_NAME,
        JsonWaitlistRepository::FILE_NAME,
        JsonRegistrationLogRepository::FILE_NAME,
        JsonStateRepository::FILE_NAME,
    ];

    /// Opens the store at `data_dir`, creating the directory if needed.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir)?;

        Ok(Self {
            participants: Arc::new(JsonParticipantRepository::new(&data_dir)),
            matches: Arc::new(JsonMatchRepository::new(&data_dir)),
            sessions: Arc::new(JsonSessionRepository::new(&data_dir)),
            waitlist: Arc::new(JsonWaitlistRepository::new(&data_dir)),
            registration_logs: Arc::new(JsonRegistrationLogRepository::new(&data_dir)),
            state: Arc::new(JsonStateRepository::new(&data_dir)),
            data_dir,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn participants(&self) -> Arc<dyn ParticipantRepository> {
        self.participants.clone()
    }

    pub fn matches(&self) -> Arc<dyn MatchRepository> {
        self.matches.clone()
    }

    pub fn sessions(&self) -> Arc<dyn SessionRepository> {
        self.sessions.clone()
    }

    pub fn waitlist(&self) -> Arc<dyn WaitlistRepository> {
        self.waitlist.clone()
    }

    pub fn registration_logs(&self) -> Arc<dyn RegistrationLogRepository> {
        self.registration_logs.clone()
    }

    pub fn state(&self) -> Arc<dyn StateRepository> {
        self.state.clone()
    }

    /// Deletes every collection file, including the console state.
    ///
    /// Missing files are skipped. This is the destructive reset behind the
    /// CLI's `reset --yes`.
    pub fn clear_all_data(&self) -> Result<()> {
        for file_name in Self::FILE_NAMES {
            let path = self.data_dir.join(file_name);
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        info!(data_dir = %self.data_dir.display(), "Cleared all collection files");
        Ok(())
    }
}
