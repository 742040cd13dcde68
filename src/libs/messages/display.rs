//! Display implementation for tasktime messages.
//!
//! Single source of truth for every string the CLI prints. Messages with
//! dynamic content carry their parameters in the variant, so call sites
//! never format user-facing text themselves.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SESSION MESSAGES ===
            Message::SessionStarted(task) => format!("Started '{}'", task),
            Message::SessionAlreadyRunning(task, since) => {
                format!("'{}' is already running since {}. Stop it before starting another task.", task, since)
            }
            Message::EmptyTaskName => "Task name must not be empty.".to_string(),
            Message::SessionStopped { task, duration } => format!("Stopped '{}' after {}", task, duration),
            Message::NoActiveSession => "No task is running.".to_string(),
            Message::StatusRunning { task, since, elapsed } => format!("Running '{}' since {} ({})", task, since, elapsed),
            Message::StatusIdle => "Idle. Start a task with 'tasktime start <TASK>'.".to_string(),

            // === LOG MESSAGES ===
            Message::LogEmpty => "The log is empty.".to_string(),
            Message::EntryUpdated(number) => format!("Entry #{} updated.", number),
            Message::EntryDeleted(number, task) => format!("Entry #{} '{}' deleted.", number, task),
            Message::EntryNotFound(number, count) => match count {
                0 => format!("Entry #{} not found: the log is empty.", number),
                _ => format!("Entry #{} not found. Valid entries are #1 to #{}.", number, count),
            },

            // === TITLE MESSAGES ===
            Message::TitleCurrent(title) => title.clone(),
            Message::TitleUpdated(title) => format!("Title set to '{}'", title),

            // === EXPORT MESSAGES ===
            Message::ExportingLog(count, format) => format!("Exporting {} entries in {} format...", count, format),
            Message::ExportCompleted(path) => format!("Export completed successfully: {}", path),
            Message::ExportEmptyLog => "Nothing to export: the log is empty.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file to remove".to_string(),
            Message::ConfigModuleCelebration => "Celebration settings".to_string(),
            Message::ConfigModuleExport => "Export settings".to_string(),

            // === STORAGE MESSAGES ===
            Message::StorageLoadFailed(error) => format!("Failed to load the time log: {}", error),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select settings to configure".to_string(),
            Message::PromptCelebrationEnabled => "Play a celebration when a task stops?".to_string(),
            Message::PromptCelebrationTicks => "Number of animation frames".to_string(),
            Message::PromptCelebrationInterval => "Delay between frames (milliseconds)".to_string(),
            Message::PromptExportFormat => "Default export format".to_string(),
            Message::PromptExportFileName => "Default export file name (without extension)".to_string(),
        };
        write!(f, "{}", text)
    }
}
