//! Time entry model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One committed record of work on a project.
///
/// `end_time` is `None` only for the transient still-running sentinel;
/// persisted entries always carry an end. A persisted entry never spans
/// more than one local calendar day; longer spans are split at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    pub project_id: String,
    pub start_time: DateTime<Local>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Local>>,
    pub description: String,
    pub created_at: DateTime<Local>,
    pub updated_at: DateTime<Local>,
}

impl TimeEntry {
    /// Create a completed entry for the given span.
    pub fn new(
        project_id: impl Into<String>,
        description: impl Into<String>,
        start_time: DateTime<Local>,
        end_time: DateTime<Local>,
    ) -> Self {
        let now = Local::now();
        Self {
            id: Uuid::new_v4().to_string(),
            project_id: project_id.into(),
            start_time,
            end_time: Some(end_time),
            description: description.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The effective end of the entry: its recorded end, or `now` while the
    /// running sentinel is still open.
    pub fn end_or(&self, now: DateTime<Local>) -> DateTime<Local> {
        self.end_time.unwrap_or(now)
    }

    /// Entry duration in seconds, measuring open entries against `now`.
    pub fn duration_secs(&self, now: DateTime<Local>) -> i64 {
        (self.end_or(now) - self.start_time).num_seconds().max(0)
    }

    /// Refresh `updated_at` after an edit.
    pub fn touch(&mut self) {
        self.updated_at = Local::now();
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn duration_of_completed_entry_ignores_now() {
        let start = Local::now() - Duration::hours(5);
        let entry = TimeEntry::new("p1", "work", start, start + Duration::minutes(90));
        assert_eq!(entry.duration_secs(Local::now()), 90 * 60);
    }

    #[test]
    fn open_entry_measures_against_now() {
        let start = Local::now();
        let mut entry = TimeEntry::new("p1", "work", start, start);
        entry.end_time = None;
        assert_eq!(entry.duration_secs(start + Duration::minutes(10)), 600);
    }

    #[test]
    fn serializes_camel_case_and_skips_open_end() {
        let start = Local::now();
        let mut entry = TimeEntry::new("p1", "work", start, start + Duration::hours(1));
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("projectId"));
        assert!(json.contains("startTime"));
        assert!(json.contains("endTime"));

        entry.end_time = None;
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("endTime"));
    }
}
