//! Export of the time log to spreadsheet and data files.
//!
//! The log is written as one table: a header row followed by one row per
//! entry, in log order. Three formats are available:
//!
//! - **Excel** (default): a single `Time Logs` worksheet with a bold header
//!   row and auto-fitted columns
//! - **CSV**: the same table as comma-separated values
//! - **JSON**: the entries exactly as they are stored
//!
//! Exporting an empty log is refused with [`ExportError::EmptyLog`]. Nothing
//! flows back into the tracker.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasktime::libs::export::{ExportFormat, Exporter};
//! # let entries = Vec::new();
//!
//! let exporter = Exporter::new(ExportFormat::Excel, None);
//! let path = exporter.export(&entries)?;
//! println!("written to {}", path.display());
//! # Ok::<(), tasktime::libs::export::ExportError>(())
//! ```

use crate::libs::config::ExportConfig;
use crate::libs::entry::{EntryField, LogEntry};
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_FILE_NAME: &str = "time_logs";
pub const SHEET_NAME: &str = "Time Logs";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Microsoft Excel workbook (.xlsx).
    Excel,
    /// Comma-separated values.
    Csv,
    /// Pretty-printed JSON array.
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Excel, ExportFormat::Csv, ExportFormat::Json];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ExportFormat::Excel => "Excel",
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("the log is empty")]
    EmptyLog,
    #[error("failed to write export file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to serialize entries: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write workbook: {0}")]
    Excel(#[from] XlsxError),
}

/// Writes the log to a file in one of the [`ExportFormat`]s.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter writing to `output_path`, or to
    /// `time_logs.<ext>` in the current directory when none is given.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| default_path(DEFAULT_FILE_NAME, format));
        Self { format, output_path }
    }

    /// Creates an exporter from configured defaults; `format` and
    /// `output_path` override them when given.
    pub fn from_config(config: &ExportConfig, format: Option<ExportFormat>, output_path: Option<PathBuf>) -> Self {
        let format = format.unwrap_or(config.format);
        let output_path = output_path.unwrap_or_else(|| default_path(&config.file_name, format));
        Self { format, output_path }
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes `entries` and returns the path of the created file.
    pub fn export(&self, entries: &[LogEntry]) -> Result<PathBuf, ExportError> {
        if entries.is_empty() {
            return Err(ExportError::EmptyLog);
        }

        match self.format {
            ExportFormat::Excel => self.export_excel(entries)?,
            ExportFormat::Csv => self.export_csv(entries)?,
            ExportFormat::Json => self.export_json(entries)?,
        }

        tracing::debug!(path = %self.output_path.display(), format = %self.format, entries = entries.len(), "log exported");
        Ok(self.output_path.clone())
    }

    fn export_excel(&self, entries: &[LogEntry]) -> Result<(), ExportError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        for (col, field) in EntryField::ALL.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, field.title(), &header_format)?;
        }

        for (i, entry) in entries.iter().enumerate() {
            let row = i as u32 + 1;
            for (col, field) in EntryField::ALL.iter().enumerate() {
                worksheet.write_string(row, col as u16, entry.field(*field))?;
            }
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn export_csv(&self, entries: &[LogEntry]) -> Result<(), ExportError> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(EntryField::ALL.iter().map(|field| field.title()))?;

        for entry in entries {
            wtr.write_record(EntryField::ALL.iter().map(|field| entry.field(*field)))?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, entries: &[LogEntry]) -> Result<(), ExportError> {
        let json = serde_json::to_string_pretty(entries)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }
}

fn default_path(file_name: &str, format: ExportFormat) -> PathBuf {
    PathBuf::from(format!("{}.{}", file_name, format.extension()))
}
