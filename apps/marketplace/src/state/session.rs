//! # Session State
//!
//! The "has entered" flag, backed by whichever storage the config picked.

use barberhub_store::{FileStorage, MemoryStorage, SessionStore, StorageBackend};
use tracing::{debug, warn};

use crate::config::{AppConfig, SessionBackendKind};
use crate::error::AppResult;

/// Wrapper around the session flag store for commands and screens.
#[derive(Debug, Clone)]
pub struct SessionState {
    store: SessionStore<StorageBackend>,
}

impl SessionState {
    pub fn new(store: SessionStore<StorageBackend>) -> Self {
        SessionState { store }
    }

    /// Picks the backend named in `[session]`.
    ///
    /// A file backend with no resolvable path degrades to no storage.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let storage = match config.session.backend {
            SessionBackendKind::Memory => Some(StorageBackend::Memory(MemoryStorage::new())),
            SessionBackendKind::File => match config.session_path() {
                Some(path) => {
                    debug!(?path, "session flag stored on disk");
                    Some(StorageBackend::File(FileStorage::new(path)))
                }
                None => {
                    warn!("no data directory for the session file; flag will not persist");
                    None
                }
            },
            SessionBackendKind::None => None,
        };
        Ok(SessionState::new(SessionStore::new(storage)))
    }

    /// In-memory flag, forgotten on exit.
    pub fn memory() -> Self {
        SessionState::new(SessionStore::new(Some(StorageBackend::Memory(
            MemoryStorage::new(),
        ))))
    }

    pub fn inner(&self) -> &SessionStore<StorageBackend> {
        &self.store
    }
}
