//! Command-line interface.
//!
//! Each subcommand lives in its own module with an `Args` struct and a `cmd`
//! function. Commands that touch the log open a [`Tracker`] on the system
//! clock and the SQLite store, do one thing and exit; the running session is
//! carried between invocations by the store.

pub mod delete;
pub mod edit;
pub mod export;
pub mod init;
pub mod log;
pub mod start;
pub mod status;
pub mod stop;
pub mod title;

use crate::db::store::SqliteStore;
use crate::libs::clock::SystemClock;
use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure celebration and export defaults")]
    Init(init::InitArgs),
    #[command(about = "Start timing a task", arg_required_else_help = true)]
    Start(start::StartArgs),
    #[command(about = "Stop the running task and log it")]
    Stop,
    #[command(about = "Show the running task")]
    Status,
    #[command(about = "Show the time log")]
    Log,
    #[command(about = "Change one field of a logged entry", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Remove a logged entry", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Show or change the log title")]
    Title(title::TitleArgs),
    #[command(about = "Export the log to Excel, CSV or JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Start(args) => start::cmd(args),
            Commands::Stop => stop::cmd().await,
            Commands::Status => status::cmd(),
            Commands::Log => log::cmd(),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Title(args) => title::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Opens the tracker on the system clock and the on-disk store.
pub(crate) fn open_tracker() -> Result<Tracker<SystemClock, SqliteStore>> {
    let store = SqliteStore::new()?;
    Tracker::load(SystemClock, store).map_err(|e| msg_error_anyhow!(Message::StorageLoadFailed(e.to_string())))
}

/// Maps a row number as shown by `tasktime log` (from 1) to a log index.
pub(crate) fn entry_index(number: usize, len: usize) -> Result<usize> {
    match number.checked_sub(1) {
        Some(index) if index < len => Ok(index),
        _ => msg_bail_anyhow!(Message::EntryNotFound(number, len)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::entry::EntryField;

    #[test]
    fn entry_numbers_start_at_one() {
        assert_eq!(entry_index(1, 3).unwrap(), 0);
        assert_eq!(entry_index(3, 3).unwrap(), 2);
        assert!(entry_index(0, 3).is_err());
        assert!(entry_index(4, 3).is_err());
        assert!(entry_index(1, 0).is_err());
    }

    #[test]
    fn cli_parses_edit_fields() {
        let cli = Cli::try_parse_from(["tasktime", "edit", "2", "start-time", "09:30:00"]).unwrap();
        assert!(matches!(cli.command, Commands::Edit(_)));
        assert!(Cli::try_parse_from(["tasktime", "edit", "2", "owner", "x"]).is_err());
    }

    #[test]
    fn cli_accepts_stored_field_spelling() {
        for name in ["startTime", "start_time", "stopTime", "stop_time"] {
            let cli = Cli::try_parse_from(["tasktime", "edit", "1", name, "09:30:00"]);
            assert!(cli.is_ok(), "{} should parse", name);
        }

        let cli = Cli::try_parse_from(["tasktime", "edit", "1", "startTime", "09:30:00"]).unwrap();
        match cli.command {
            Commands::Edit(args) => assert_eq!(args.field, EntryField::StartTime),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
