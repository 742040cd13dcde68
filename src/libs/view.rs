use super::entry::LogEntry;
use super::formatter::format_duration;
use chrono::Duration;
use prettytable::{format, row, Table};

pub struct View {}

impl View {
    /// Builds the log table with a total row; entries are numbered from 1.
    pub fn log_table(entries: &[LogEntry], total: &Duration) -> Table {
        let mut table = Self::table();
        for (i, entry) in entries.iter().enumerate() {
            Self::add_entry(&mut table, i + 1, entry);
        }
        table.add_row(row!["", "TOTAL", "", "", "", format_duration(total)]);

        table
    }

    pub fn log(entries: &[LogEntry], total: &Duration) {
        Self::log_table(entries, total).printstd();
    }

    /// Prints a single entry under its row number.
    pub fn entry(number: usize, entry: &LogEntry) {
        let mut table = Self::table();
        Self::add_entry(&mut table, number, entry);
        table.printstd();
    }

    fn table() -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["#", "TASK", "DATE", "START", "STOP", "DURATION"]);
        table
    }

    fn add_entry(table: &mut Table, number: usize, entry: &LogEntry) {
        table.add_row(row![
            number,
            entry.task,
            entry.date,
            entry.start_time,
            entry.stop_time,
            entry.duration
        ]);
    }
}
