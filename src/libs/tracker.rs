//! Timer & log manager.
//!
//! [`Tracker`] owns the running session, the log of completed entries and the
//! title. It is generic over its [`Clock`] and [`Store`] so the same code runs
//! against the system clock and SQLite in the CLI and against a
//! [`ManualClock`](crate::libs::clock::ManualClock) and
//! [`MemoryStore`](crate::libs::store::MemoryStore) in tests.
//!
//! ## Lifecycle
//!
//! ```text
//!            start(task)                 stop()
//!   Idle ─────────────────▶ Running ─────────────────▶ Idle
//!                             │  ▲        (appends one entry)
//!                             └──┘
//!                        start() ignored
//! ```
//!
//! State is loaded from the store once in [`Tracker::load`] and written back
//! after every mutation. Writes are fire-and-forget: a failed write is logged
//! and the in-memory state stays authoritative.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{Duration, NaiveDate};
//! use tasktime::libs::clock::ManualClock;
//! use tasktime::libs::store::MemoryStore;
//! use tasktime::libs::tracker::Tracker;
//!
//! let nine = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let clock = ManualClock::new(nine);
//! let mut tracker = Tracker::load(clock.clone(), MemoryStore::new())?;
//!
//! tracker.start("Write report");
//! clock.advance(Duration::seconds(5));
//! let entry = tracker.stop().unwrap();
//! assert_eq!(entry.duration, "00:00:05");
//! # Ok::<(), tasktime::libs::tracker::TrackerError>(())
//! ```

use crate::libs::clock::Clock;
use crate::libs::entry::{EntryField, LogEntry};
use crate::libs::formatter::parse_duration;
use crate::libs::session::{ActiveSession, StartOutcome};
use crate::libs::store::{Store, StoreError, LOG_KEY, SESSION_KEY, TITLE_KEY};
use chrono::{Duration, NaiveDateTime};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_TITLE: &str = "⏱ Time Tracker";

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("entry index {index} is out of range (log has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Storage(#[from] StoreError),
    #[error("stored '{key}' is corrupted: {source}")]
    Corrupted {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub struct Tracker<C: Clock, S: Store> {
    clock: C,
    store: S,
    entries: Vec<LogEntry>,
    active: Option<ActiveSession>,
    last_stop: Option<NaiveDateTime>,
    title: String,
}

impl<C: Clock, S: Store> Tracker<C, S> {
    /// Restores the log, title and running session from `store`.
    ///
    /// Missing slots fall back to an empty log, [`DEFAULT_TITLE`] and no
    /// session. A stored session without a task name is dropped so it cannot
    /// block later starts. A slot holding malformed JSON is an error rather
    /// than being silently replaced on the next write.
    pub fn load(clock: C, store: S) -> Result<Self, TrackerError> {
        let entries: Vec<LogEntry> = read_json(&store, LOG_KEY)?.unwrap_or_default();
        let active = match read_json::<S, ActiveSession>(&store, SESSION_KEY)? {
            Some(session) if session.task.trim().is_empty() => {
                warn!(key = SESSION_KEY, "stored session has no task name, starting idle");
                None
            }
            other => other,
        };
        let title = store.get(TITLE_KEY)?.unwrap_or_else(|| DEFAULT_TITLE.to_string());

        debug!(entries = entries.len(), running = active.is_some(), "tracker loaded");

        Ok(Tracker {
            clock,
            store,
            entries,
            active,
            last_stop: None,
            title,
        })
    }

    /// Starts timing `task`.
    ///
    /// Blank names and a second start while a session runs are ignored and
    /// reported through the returned [`StartOutcome`].
    pub fn start(&mut self, task: &str) -> StartOutcome<'_> {
        let task = task.trim();
        if task.is_empty() {
            return StartOutcome::EmptyTaskName;
        }

        match self.active {
            Some(ref session) => StartOutcome::AlreadyRunning(session),
            None => {
                let session = ActiveSession::new(task, self.clock.now());
                debug!(task = %session.task, started_at = %session.started_at, "session started");
                self.last_stop = None;
                self.persist_session_value(Some(&session));
                StartOutcome::Started(self.active.insert(session))
            }
        }
    }

    /// Stops the running session and appends its entry to the log.
    ///
    /// Returns `None` without touching the log when nothing is running.
    pub fn stop(&mut self) -> Option<LogEntry> {
        let session = self.active.take()?;

        let stopped_at = self.clock.now();
        self.last_stop = Some(stopped_at);

        let entry = LogEntry::from_session(&session.task, session.started_at, stopped_at);
        debug!(task = %entry.task, duration = %entry.duration, "session stopped");
        self.entries.push(entry.clone());

        self.persist_log();
        self.persist_session_value(None);
        Some(entry)
    }

    /// Replaces one field of the entry at `index`.
    ///
    /// The duration is left as is even when a start or stop time changes.
    pub fn edit_entry(&mut self, index: usize, field: EntryField, value: &str) -> Result<&LogEntry, TrackerError> {
        let len = self.entries.len();
        let current = self.entries.get(index).ok_or(TrackerError::IndexOutOfRange { index, len })?;

        let updated = current.with_field(field, value);
        debug!(index, field = %field, "entry edited");
        self.entries[index] = updated;

        self.persist_log();
        Ok(&self.entries[index])
    }

    /// Removes and returns the entry at `index`; later entries shift down.
    pub fn delete_entry(&mut self, index: usize) -> Result<LogEntry, TrackerError> {
        let len = self.entries.len();
        if index >= len {
            return Err(TrackerError::IndexOutOfRange { index, len });
        }

        let removed = self.entries.remove(index);
        debug!(index, task = %removed.task, "entry deleted");

        self.persist_log();
        Ok(removed)
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        debug!(title = %self.title, "title changed");
        if let Err(e) = self.store.set(TITLE_KEY, &self.title) {
            warn!(key = TITLE_KEY, error = %e, "failed to persist title");
        }
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn active(&self) -> Option<&ActiveSession> {
        self.active.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Instant of the most recent stop in this process, cleared by the next start.
    pub fn last_stop(&self) -> Option<NaiveDateTime> {
        self.last_stop
    }

    /// Time elapsed in the running session so far.
    pub fn elapsed(&self) -> Option<Duration> {
        self.active.as_ref().map(|session| session.elapsed(self.clock.now()))
    }

    /// Sum of all entry durations that still parse as `HH:MM:SS`.
    pub fn total_duration(&self) -> Duration {
        self.entries
            .iter()
            .filter_map(|entry| parse_duration(&entry.duration))
            .fold(Duration::zero(), |acc, d| acc + d)
    }

    fn persist_log(&mut self) {
        match serde_json::to_string(&self.entries) {
            Ok(json) => {
                if let Err(e) = self.store.set(LOG_KEY, &json) {
                    warn!(key = LOG_KEY, error = %e, "failed to persist log");
                }
            }
            Err(e) => warn!(key = LOG_KEY, error = %e, "failed to serialize log"),
        }
    }

    fn persist_session_value(&mut self, session: Option<&ActiveSession>) {
        let value = match session.map(serde_json::to_string).transpose() {
            Ok(json) => json.unwrap_or_default(),
            Err(e) => {
                warn!(key = SESSION_KEY, error = %e, "failed to serialize session");
                return;
            }
        };
        if let Err(e) = self.store.set(SESSION_KEY, &value) {
            warn!(key = SESSION_KEY, error = %e, "failed to persist session");
        }
    }
}

/// Reads and decodes a JSON slot; a missing or empty slot is `None`.
fn read_json<S: Store, T: DeserializeOwned>(store: &S, key: &'static str) -> Result<Option<T>, TrackerError> {
    match store.get(key)? {
        Some(raw) if !raw.trim().is_empty() => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| TrackerError::Corrupted { key, source }),
        _ => Ok(None),
    }
}
