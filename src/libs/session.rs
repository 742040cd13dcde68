use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A started task that has not been stopped yet.
///
/// Stored as `{"task": .., "startedAt": "YYYY-MM-DD HH:MM:SS"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSession {
    pub task: String,
    #[serde(with = "started_at")]
    pub started_at: NaiveDateTime,
}

impl ActiveSession {
    pub fn new(task: &str, started_at: NaiveDateTime) -> Self {
        ActiveSession {
            task: task.to_string(),
            started_at,
        }
    }

    pub fn elapsed(&self, now: NaiveDateTime) -> Duration {
        now.signed_duration_since(self.started_at).max(Duration::zero())
    }
}

/// Result of a start request.
#[derive(Debug, PartialEq, Eq)]
pub enum StartOutcome<'a> {
    Started(&'a ActiveSession),
    /// Another session is running; nothing changed.
    AlreadyRunning(&'a ActiveSession),
    /// The task name was blank; nothing changed.
    EmptyTaskName,
}

mod started_at {
    use crate::libs::formatter::{DATE_FORMAT, TIME_FORMAT};
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    fn format() -> String {
        format!("{} {}", DATE_FORMAT, TIME_FORMAT)
    }

    pub fn serialize<S: Serializer>(at: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&at.format(&format()).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, &format()).map_err(de::Error::custom)
    }
}
