//! Single-day aggregation
//!
//! An entry belongs to the day its `start_time` falls on; entries without
//! an end are measured against `now`.

use std::collections::HashMap;

use chrono::{DateTime, Local, NaiveDate};
use hourglass_common::{duration_hours, round_to_tenth, whole_minutes, DateRange};
use hourglass_domain::{Project, ProjectHours, SessionStats, TimeEntry};

/// Entries whose start time falls on the given local day.
fn entries_on_day<'a>(entries: &'a [TimeEntry], day: NaiveDate) -> impl Iterator<Item = &'a TimeEntry> {
    let range = DateRange::single_day(day);
    entries.iter().filter(move |entry| range.contains(entry.start_time))
}

/// Total hours worked on a day, rounded to one decimal.
pub fn daily_work_hours(entries: &[TimeEntry], day: NaiveDate, now: DateTime<Local>) -> f64 {
    let total: f64 = entries_on_day(entries, day)
        .map(|entry| duration_hours(entry.start_time, entry.end_or(now)))
        .sum();
    round_to_tenth(total)
}

/// Hours worked on a day grouped by project name, non-archived projects
/// only. Hours booked against archived projects are excluded even when the
/// archived project had entries that day.
pub fn daily_project_hours(
    entries: &[TimeEntry],
    projects: &[Project],
    day: NaiveDate,
    now: DateTime<Local>,
) -> Vec<ProjectHours> {
    let active: HashMap<&str, &Project> = projects
        .iter()
        .filter(|project| !project.is_archived)
        .map(|project| (project.id.as_str(), project))
        .collect();

    let mut totals: HashMap<&str, f64> = HashMap::new();
    for entry in entries_on_day(entries, day) {
        if active.contains_key(entry.project_id.as_str()) {
            *totals.entry(entry.project_id.as_str()).or_insert(0.0) +=
                duration_hours(entry.start_time, entry.end_or(now));
        }
    }

    let mut rows: Vec<ProjectHours> = totals
        .into_iter()
        .filter_map(|(project_id, hours)| {
            active.get(project_id).map(|project| ProjectHours {
                project_id: project.id.clone(),
                name: project.name.clone(),
                hours: round_to_tenth(hours),
            })
        })
        .collect();
    rows.sort_by(|a, b| b.hours.partial_cmp(&a.hours).unwrap_or(std::cmp::Ordering::Equal).then_with(|| a.name.cmp(&b.name)));
    rows
}

/// Longest session on a day in whole minutes; 0 when the day has no entries.
pub fn longest_work_session(entries: &[TimeEntry], day: NaiveDate, now: DateTime<Local>) -> i64 {
    entries_on_day(entries, day)
        .map(|entry| whole_minutes(entry.start_time, entry.end_or(now)))
        .max()
        .unwrap_or(0)
}

/// Mean session length on a day in whole minutes; 0 when the day has no
/// entries (never NaN).
pub fn average_work_session(entries: &[TimeEntry], day: NaiveDate, now: DateTime<Local>) -> i64 {
    let minutes: Vec<i64> = entries_on_day(entries, day)
        .map(|entry| whole_minutes(entry.start_time, entry.end_or(now)))
        .collect();
    if minutes.is_empty() {
        return 0;
    }
    let total: i64 = minutes.iter().sum();
    (total as f64 / minutes.len() as f64).round() as i64
}

/// Longest and mean session lengths bundled for the dashboard.
pub fn session_stats(entries: &[TimeEntry], day: NaiveDate, now: DateTime<Local>) -> SessionStats {
    SessionStats {
        longest_minutes: longest_work_session(entries, day, now),
        average_minutes: average_work_session(entries, day, now),
    }
}
