//! Persistence port for the tracker.
//!
//! The tracker only needs string slots addressed by key. [`Store`] is that
//! port; the SQLite implementation lives in [`crate::db::store`] and
//! [`MemoryStore`] stands in for it in tests.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Slot holding the JSON-serialized log.
pub const LOG_KEY: &str = "time_logs";
/// Slot holding the raw title text.
pub const TITLE_KEY: &str = "title";
/// Slot holding the JSON-serialized running session, empty when idle.
pub const SESSION_KEY: &str = "active_session";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage query failed: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("storage location unavailable: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable string key/value storage.
pub trait Store {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// In-memory store.
///
/// Clones share the same slots, so a test can hand one clone to a tracker and
/// read back what it wrote through another. A store built with
/// [`MemoryStore::failing`] rejects every write.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        MemoryStore {
            slots: Arc::default(),
            fail_writes: true,
        }
    }

    pub fn with_slot(self, key: &str, value: &str) -> Self {
        self.slots.lock().insert(key.to_string(), value.to_string());
        self
    }

    pub fn slot(&self, key: &str) -> Option<String> {
        self.slots.lock().get(key).cloned()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.slot(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Unavailable(format!("write to '{}' rejected", key)));
        }
        self.slots.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
