//! Export of the time log.
//!
//! Without flags the format and file name come from the `export` section of
//! the configuration, falling back to an Excel file named `time_logs.xlsx`
//! in the current directory.

use super::open_tracker;
use crate::{
    libs::{
        config::Config,
        export::{ExportError, ExportFormat, Exporter},
        messages::Message,
    },
    msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format; overrides the configured default
    #[arg(short, long, value_enum)]
    format: Option<ExportFormat>,

    /// Output file path; defaults to `<file name>.<extension>`
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Writes the log to a file. An empty log is reported and nothing is written.
pub fn cmd(args: ExportArgs) -> Result<()> {
    let tracker = open_tracker()?;
    let config = Config::read()?.export.unwrap_or_default();
    let exporter = Exporter::from_config(&config, args.format, args.output);

    let entries = tracker.entries();
    if !entries.is_empty() {
        msg_info!(Message::ExportingLog(entries.len(), exporter.format().to_string()));
    }

    match exporter.export(entries) {
        Ok(path) => msg_success!(Message::ExportCompleted(path.display().to_string())),
        Err(ExportError::EmptyLog) => msg_warning!(Message::ExportEmptyLog),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
