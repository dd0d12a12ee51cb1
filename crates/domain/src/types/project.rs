//! Project model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project time is booked against.
///
/// `monthly_capacity` is a fraction in `[0, 1]` of the baseline
/// monthly-hours figure, not an absolute hour count. Archived projects are
/// excluded from aggregation and can no longer be started against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub monthly_capacity: f64,
    pub is_archived: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<DateTime<Local>>,
    pub created_at: DateTime<Local>,
    pub updated_at: DateTime<Local>,
}

impl Project {
    /// Create a new active project. Capacity is clamped to `[0, 1]`.
    pub fn new(name: impl Into<String>, description: impl Into<String>, capacity: f64) -> Self {
        let now = Local::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: description.into(),
            monthly_capacity: capacity.clamp(0.0, 1.0),
            is_archived: false,
            archived_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Capacity expressed as a 0-100 allocation percentage.
    pub fn allocation_percent(&self) -> f64 {
        self.monthly_capacity * 100.0
    }

    /// Mark the project archived, stamping `archived_at`.
    pub fn archive(&mut self) {
        let now = Local::now();
        self.is_archived = true;
        self.archived_at = Some(now);
        self.updated_at = now;
    }

    /// Clear the archived flag.
    pub fn unarchive(&mut self) {
        self.is_archived = false;
        self.archived_at = None;
        self.updated_at = Local::now();
    }

    /// Refresh `updated_at` after an edit.
    pub fn touch(&mut self) {
        self.updated_at = Local::now();
    }
}
