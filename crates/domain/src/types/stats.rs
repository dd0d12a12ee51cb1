//! Aggregate and report types
//!
//! This module centralizes the derived shapes handed to the host shell:
//! - Per-project hour totals and distribution rows
//! - Daily / weekly bucket rows
//! - Heatmap grid cells
//! - Target and prediction summaries
//! - Timer status and stop outcomes

use chrono::{DateTime, Local, NaiveDate};
use hourglass_common::DateRange;
use serde::{Deserialize, Serialize};

use crate::types::TimeEntry;

/* -------------------------------------------------------------------------- */
/* Distribution Rows                                                          */
/* -------------------------------------------------------------------------- */

/// Hours booked against one project over some range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectHours {
    pub project_id: String,
    pub name: String,
    /// Fractional hours, rounded to one decimal.
    pub hours: f64,
}

/// Hours worked on a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayBucket {
    pub date: NaiveDate,
    pub hours: f64,
}

/// Hours worked in one month-relative week.
///
/// Week numbering is month-relative (`ceil((day_of_month + offset) / 7)`),
/// not ISO; a bucket can straddle two months' display windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekBucket {
    pub week_of_month: u32,
    pub hours: f64,
}

/* -------------------------------------------------------------------------- */
/* Session Statistics                                                         */
/* -------------------------------------------------------------------------- */

/// Longest and mean session length for a single day, in whole minutes.
/// Both are 0 for days without entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub longest_minutes: i64,
    pub average_minutes: i64,
}

/* -------------------------------------------------------------------------- */
/* Heatmap                                                                    */
/* -------------------------------------------------------------------------- */

/// One day cell of the activity heatmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub hours: f64,
    /// Intensity bucket 0-4 derived from daily hours.
    pub level: u8,
}

/// Sunday-aligned heatmap grid.
///
/// Each row holds exactly 7 cells; days outside the requested range are
/// `None` so the grid mirrors a calendar layout rather than a flat list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapData {
    pub range: DateRange,
    pub weeks: Vec<Vec<Option<HeatmapCell>>>,
}

/* -------------------------------------------------------------------------- */
/* Targets & Predictions                                                      */
/* -------------------------------------------------------------------------- */

/// Monthly target progress for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetSummary {
    /// Sum of per-project monthly targets over non-archived projects.
    pub target_hours: f64,
    /// Hours booked so far this month.
    pub current_hours: f64,
    /// Weekdays left in the month, including today.
    pub remaining_working_days: u32,
    /// Hours per remaining working day needed to reach the target.
    pub recommended_daily_hours: f64,
    /// Projected completion date, absent once the target is met or no
    /// meaningful daily average exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_completion: Option<NaiveDate>,
}

/* -------------------------------------------------------------------------- */
/* Timer                                                                      */
/* -------------------------------------------------------------------------- */

/// Snapshot of the timer state handed to subscribers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerStatus {
    pub is_running: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Local>>,
    pub elapsed_secs: i64,
}

impl TimerStatus {
    /// The idle snapshot.
    pub fn idle() -> Self {
        Self { is_running: false, project_id: None, start_time: None, elapsed_secs: 0 }
    }
}

/// Result of committing a stopped timer span.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopOutcome {
    /// Day-bounded entries created from the span, in chronological order.
    pub entries: Vec<TimeEntry>,
    /// Split fragments below the minimum persistable duration. Reported so
    /// the caller can surface the loss instead of it vanishing silently.
    pub discarded_fragments: usize,
}

/* -------------------------------------------------------------------------- */
/* Dashboard Aggregate                                                        */
/* -------------------------------------------------------------------------- */

/// Everything the dashboard needs for one day, bundled for a single call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub day: NaiveDate,
    pub daily_hours: f64,
    pub daily_project_hours: Vec<ProjectHours>,
    pub session_stats: SessionStats,
    pub target: TargetSummary,
}
