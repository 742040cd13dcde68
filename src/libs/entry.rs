//! Log entry model.
//!
//! A [`LogEntry`] is one completed timing session. Entries are plain values:
//! editing produces a new entry through [`LogEntry::with_field`] rather than
//! mutating a shared one.

use crate::libs::formatter::{format_date, format_duration, format_time};
use chrono::NaiveDateTime;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One completed timing session.
///
/// Serialized with the camelCase keys used by the stored log
/// (`startTime`, `stopTime`). Logs written before the `date` column existed
/// load with an empty date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub task: String,
    #[serde(default)]
    pub date: String,
    pub start_time: String,
    pub stop_time: String,
    pub duration: String,
}

impl LogEntry {
    /// Builds an entry from the start and stop instants of a session.
    ///
    /// The date is the one the session started on. A stop that precedes the
    /// start yields a `00:00:00` duration.
    pub fn from_session(task: &str, started_at: NaiveDateTime, stopped_at: NaiveDateTime) -> Self {
        LogEntry {
            task: task.to_string(),
            date: format_date(&started_at.date()),
            start_time: format_time(&started_at),
            stop_time: format_time(&stopped_at),
            duration: format_duration(&stopped_at.signed_duration_since(started_at)),
        }
    }

    pub fn field(&self, field: EntryField) -> &str {
        match field {
            EntryField::Task => &self.task,
            EntryField::Date => &self.date,
            EntryField::StartTime => &self.start_time,
            EntryField::StopTime => &self.stop_time,
            EntryField::Duration => &self.duration,
        }
    }

    /// Returns a copy of this entry with one field replaced.
    ///
    /// No other field is touched; in particular `duration` is not re-derived
    /// when `start_time` or `stop_time` change.
    pub fn with_field(&self, field: EntryField, value: &str) -> Self {
        let mut entry = self.clone();
        let slot = match field {
            EntryField::Task => &mut entry.task,
            EntryField::Date => &mut entry.date,
            EntryField::StartTime => &mut entry.start_time,
            EntryField::StopTime => &mut entry.stop_time,
            EntryField::Duration => &mut entry.duration,
        };
        *slot = value.to_string();
        entry
    }
}

/// Names one editable column of a [`LogEntry`].
///
/// On the command line the time columns are `start-time`/`stop-time`; the
/// storage key spellings are accepted as aliases.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntryField {
    Task,
    Date,
    #[value(alias = "startTime", alias = "start_time")]
    StartTime,
    #[value(alias = "stopTime", alias = "stop_time")]
    StopTime,
    Duration,
}

impl EntryField {
    pub const ALL: [EntryField; 5] = [
        EntryField::Task,
        EntryField::Date,
        EntryField::StartTime,
        EntryField::StopTime,
        EntryField::Duration,
    ];

    /// Column heading used by tables and exports.
    pub fn title(&self) -> &'static str {
        match self {
            EntryField::Task => "Task",
            EntryField::Date => "Date",
            EntryField::StartTime => "Start Time",
            EntryField::StopTime => "Stop Time",
            EntryField::Duration => "Duration",
        }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
