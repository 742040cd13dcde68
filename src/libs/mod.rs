//! Core library modules for tasktime.
//!
//! ## Features
//!
//! - **Tracking**: [`tracker`] drives sessions and the log through the
//!   [`clock`] and [`store`] ports
//! - **Data**: [`entry`] and [`session`] records, [`formatter`] for times
//! - **Output**: [`view`] tables, [`export`] files, [`celebration`] frames
//! - **Infrastructure**: [`config`], [`data_storage`], [`logging`], [`messages`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasktime::db::store::SqliteStore;
//! use tasktime::libs::clock::SystemClock;
//! use tasktime::libs::tracker::Tracker;
//!
//! let mut tracker = Tracker::load(SystemClock, SqliteStore::new()?)?;
//! tracker.start("Review pull requests");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod celebration;
pub mod clock;
pub mod config;
pub mod data_storage;
pub mod entry;
pub mod export;
pub mod formatter;
pub mod logging;
pub mod messages;
pub mod session;
pub mod store;
pub mod tracker;
pub mod view;
