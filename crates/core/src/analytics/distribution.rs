//! Range distributions
//!
//! Per-project totals over a range, and the 7-day / week-of-month tilings
//! behind the weekly and monthly charts. Week-of-month numbering is
//! month-relative, `ceil((day_of_month + first_weekday_offset) / 7)` with a
//! Sunday-indexed offset, not ISO calendar weeks.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};
use hourglass_common::{duration_hours, round_to_tenth, DateRange};
use hourglass_domain::{DayBucket, Project, ProjectHours, TimeEntry, WeekBucket};

use super::daily::daily_work_hours;

/// Hours per project across a range: archived projects, unknown project
/// ids, and zero-hour results are dropped; rows sort descending by hours.
pub fn project_distribution(
    entries: &[TimeEntry],
    projects: &[Project],
    range: DateRange,
    now: DateTime<Local>,
) -> Vec<ProjectHours> {
    let active: HashMap<&str, &Project> = projects
        .iter()
        .filter(|project| !project.is_archived)
        .map(|project| (project.id.as_str(), project))
        .collect();

    let mut totals: HashMap<&str, f64> = HashMap::new();
    for entry in entries.iter().filter(|entry| range.contains(entry.start_time)) {
        if active.contains_key(entry.project_id.as_str()) {
            *totals.entry(entry.project_id.as_str()).or_insert(0.0) +=
                duration_hours(entry.start_time, entry.end_or(now));
        }
    }

    let mut rows: Vec<ProjectHours> = totals
        .into_iter()
        .filter_map(|(project_id, hours)| {
            let rounded = round_to_tenth(hours);
            if rounded == 0.0 {
                return None;
            }
            active.get(project_id).map(|project| ProjectHours {
                project_id: project.id.clone(),
                name: project.name.clone(),
                hours: rounded,
            })
        })
        .collect();
    rows.sort_by(|a, b| {
        b.hours.partial_cmp(&a.hours).unwrap_or(Ordering::Equal).then_with(|| a.name.cmp(&b.name))
    });
    rows
}

/// Tile the 7 days beginning at `week_start` into daily totals.
pub fn weekly_distribution(
    entries: &[TimeEntry],
    week_start: NaiveDate,
    now: DateTime<Local>,
) -> Vec<DayBucket> {
    (0..7)
        .map(|offset| {
            let date = week_start + Duration::days(offset);
            DayBucket { date, hours: daily_work_hours(entries, date, now) }
        })
        .collect()
}

/// Month-relative week index of a date, 1-based.
///
/// The offset is the Sunday-indexed weekday of the 1st of the month, so a
/// month starting on Saturday pushes its first full week to index 2.
pub fn week_of_month(date: NaiveDate) -> u32 {
    let first_weekday_offset = first_weekday_offset(date);
    (date.day() + first_weekday_offset).div_ceil(7)
}

/// Sunday-indexed weekday of the 1st of the date's month.
fn first_weekday_offset(date: NaiveDate) -> u32 {
    date.with_day(1).unwrap_or(date).weekday().num_days_from_sunday()
}

/// Number of days in the date's month.
fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    let next_month_start = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (next_month_start, date.with_day(1)) {
        (Some(next), Some(first)) => (next - first).num_days() as u32,
        _ => 30,
    }
}

/// Tile the month containing `month_day` into week-of-month buckets.
pub fn monthly_distribution(
    entries: &[TimeEntry],
    month_day: NaiveDate,
    now: DateTime<Local>,
) -> Vec<WeekBucket> {
    let offset = first_weekday_offset(month_day);
    let day_count = days_in_month(month_day);
    let week_count = (day_count + offset).div_ceil(7);

    let mut buckets: Vec<WeekBucket> =
        (1..=week_count).map(|week| WeekBucket { week_of_month: week, hours: 0.0 }).collect();

    for day in 1..=day_count {
        let Some(date) = month_day.with_day(day) else { continue };
        let week = week_of_month(date) as usize;
        if let Some(bucket) = buckets.get_mut(week - 1) {
            bucket.hours += daily_work_hours(entries, date, now);
        }
    }

    for bucket in &mut buckets {
        bucket.hours = round_to_tenth(bucket.hours);
    }
    buckets
}
