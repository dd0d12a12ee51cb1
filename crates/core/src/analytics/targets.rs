//! Monthly targets and completion predictions

use std::collections::HashSet;

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, Weekday};
use hourglass_common::{duration_hours, round_to_tenth, DateRange};
use hourglass_domain::constants::BASE_MONTHLY_HOURS;
use hourglass_domain::{Project, TargetSummary, TimeEntry};

/// Target hours for one allocation percentage against a baseline monthly
/// figure. The percentage is clamped to `[0, 100]`.
pub fn monthly_target_hours(allocation_percent: f64, base_monthly_hours: f64) -> f64 {
    round_to_tenth(allocation_percent.clamp(0.0, 100.0) / 100.0 * base_monthly_hours)
}

/// Sum of monthly targets over all non-archived projects.
pub fn total_monthly_target(projects: &[Project]) -> f64 {
    let total: f64 = projects
        .iter()
        .filter(|project| !project.is_archived)
        .map(|project| monthly_target_hours(project.allocation_percent(), BASE_MONTHLY_HOURS))
        .sum();
    round_to_tenth(total)
}

/// Weekdays (Mon-Fri) from `date` through the last day of its month,
/// inclusive of `date` itself.
pub fn remaining_working_days(date: NaiveDate) -> u32 {
    let last = last_day_of_month(date);
    DateRange::new(date, last)
        .days()
        .filter(|day| !matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
        .count() as u32
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    match next_month {
        Some(first) => first - Duration::days(1),
        None => date,
    }
}

/// Projected completion date for a target.
///
/// Returns `None` when the target is already met or the daily average is
/// not positive; otherwise `today + ceil((target - current) / average)`.
pub fn predict_completion_date(
    today: NaiveDate,
    current_hours: f64,
    target_hours: f64,
    daily_average: f64,
) -> Option<NaiveDate> {
    if current_hours >= target_hours || daily_average <= 0.0 {
        return None;
    }
    let days_needed = ((target_hours - current_hours) / daily_average).ceil() as i64;
    Some(today + Duration::days(days_needed))
}

/// Hours per remaining working day needed to reach the target; 0 once the
/// target is met or when no working days remain.
pub fn recommended_daily_hours(today: NaiveDate, current_hours: f64, target_hours: f64) -> f64 {
    if current_hours >= target_hours {
        return 0.0;
    }
    let days = remaining_working_days(today);
    if days == 0 {
        return 0.0;
    }
    round_to_tenth((target_hours - current_hours) / f64::from(days))
}

/// Bundle the month-to-date target picture for the dashboard.
///
/// The daily average feeding the prediction is month-to-date hours divided
/// by the number of distinct days with entries.
pub fn target_summary(
    entries: &[TimeEntry],
    projects: &[Project],
    today: NaiveDate,
    now: DateTime<Local>,
) -> TargetSummary {
    let month_range = DateRange::new(
        today.with_day(1).unwrap_or(today),
        last_day_of_month(today),
    );

    let mut current = 0.0;
    let mut worked_days: HashSet<NaiveDate> = HashSet::new();
    for entry in entries.iter().filter(|entry| month_range.contains(entry.start_time)) {
        current += duration_hours(entry.start_time, entry.end_or(now));
        worked_days.insert(entry.start_time.date_naive());
    }
    let current = round_to_tenth(current);

    let target = total_monthly_target(projects);
    let daily_average =
        if worked_days.is_empty() { 0.0 } else { current / worked_days.len() as f64 };

    TargetSummary {
        target_hours: target,
        current_hours: current,
        remaining_working_days: remaining_working_days(today),
        recommended_daily_hours: recommended_daily_hours(today, current, target),
        predicted_completion: predict_completion_date(today, current, target, daily_average),
    }
}
