use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub at: DateTime<Local>,
    pub text: String,
}

/// In-memory activity log shown to the user, newest entry first.
#[derive(Debug, Default)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
}

impl ActivityLog {
    pub fn push(&mut self, text: impl Into<String>) {
        self.entries.push(LogEntry {
            at: Local::now(),
            text: text.into(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render(&self) -> String {
        self.entries
            .iter()
            .rev()
            .map(|entry| format!("[{}] {}", entry.at.format("%H:%M:%S"), entry.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
