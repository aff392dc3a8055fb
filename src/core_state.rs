//! Application state handed to the command layer.
//!
//! Owns the record store, the alert capability and the chat session so the
//! host only has to keep one value alive.

use crate::alert::{AlertNotifier, SilentNotifier};
use crate::chat::ChatSession;
use crate::config;
use crate::db::{KeyValueStore, MemoryStore, RecordStore, SqliteStore, StoreError};

pub struct CoreState<S: KeyValueStore> {
    pub store: RecordStore<S>,
    pub notifier: Box<dyn AlertNotifier>,
    pub chat: ChatSession,
}

impl<S: KeyValueStore> CoreState<S> {
    /// Build state over `backend`, initializing missing collections.
    pub fn new(backend: S, notifier: Box<dyn AlertNotifier>) -> Result<Self, StoreError> {
        Ok(Self {
            store: RecordStore::open(backend)?,
            notifier,
            chat: ChatSession::new(),
        })
    }

    pub fn with_chat(mut self, chat: ChatSession) -> Self {
        self.chat = chat;
        self
    }
}

impl CoreState<SqliteStore> {
    /// State backed by the SQLite file under the app data directory.
    pub fn open_default() -> Result<Self, StoreError> {
        let path = config::storage_path();
        tracing::info!("Opening local storage at {}", path.display());
        Self::new(SqliteStore::open(&path)?, Box::new(SilentNotifier))
    }
}

impl CoreState<MemoryStore> {
    /// Throwaway state with no persistence and no audio.
    pub fn in_memory() -> Result<Self, StoreError> {
        Self::new(MemoryStore::new(), Box::new(SilentNotifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::STATS_KEY;

    #[test]
    fn in_memory_state_is_initialized() {
        let state = CoreState::in_memory().unwrap();
        assert!(state.store.backend().get(STATS_KEY).unwrap().is_some());
        assert_eq!(state.store.stats().unwrap().total, 0);
    }

    #[test]
    fn file_state_reopens_with_same_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local_storage.db");
        {
            let state =
                CoreState::new(SqliteStore::open(&path).unwrap(), Box::new(SilentNotifier)).unwrap();
            state
                .store
                .backend()
                .set(STATS_KEY, r#"{"Low":1,"Medium":0,"High":0,"total":1,"totalScore":2}"#)
                .unwrap();
        }
        let state =
            CoreState::new(SqliteStore::open(&path).unwrap(), Box::new(SilentNotifier)).unwrap();
        assert_eq!(state.store.stats().unwrap().low, 1);
    }
}
