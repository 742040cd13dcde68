//! Database layer for tasktime.
//!
//! The log, the title and the running session are kept as string slots in a
//! single SQLite table. The tracker talks to it only through the
//! [`Store`](crate::libs::store::Store) port.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasktime::db::store::SqliteStore;
//! use tasktime::libs::store::Store;
//!
//! let mut store = SqliteStore::new()?;
//! store.set("title", "Sprint 12")?;
//! assert_eq!(store.get("title")?.as_deref(), Some("Sprint 12"));
//! # Ok::<(), tasktime::libs::store::StoreError>(())
//! ```

/// Connection management.
///
/// Opens `tasktime.db` in the platform data directory, or an in-memory
/// database for tests.
pub mod db;

/// Key/value slot storage implementing the tracker's persistence port.
pub mod store;
