//! # tasktime - a small task time logger
//!
//! Times one task at a time, keeps a log of completed sessions and exports
//! it as a spreadsheet.
//!
//! ## Features
//!
//! - **Timer**: start and stop a named task; one session runs at a time
//! - **Log**: every stop appends an entry with date, start, stop and duration
//! - **Editing**: any field of a logged entry can be changed or the entry removed
//! - **Persistence**: log, title and running session survive restarts (SQLite)
//! - **Export**: Excel, CSV or JSON
//! - **Celebration**: a short terminal animation when a session stops
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasktime::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
