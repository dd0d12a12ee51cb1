//! Calendar heatmap bucketing
//!
//! Levels bucket daily hours into five intensities; the grid contract is a
//! Sunday-aligned calendar layout (7-cell week rows, `None` padding outside
//! the requested range), mirroring what the visualization consumes.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Duration, Local, Months, NaiveDate};
use hourglass_common::{duration_hours, round_to_tenth, DateRange};
use hourglass_domain::{HeatmapCell, HeatmapData, TimeEntry};

/// Intensity bucket for a day's hours:
/// `0h -> 0, (0,2) -> 1, [2,4) -> 2, [4,6) -> 3, [6,inf) -> 4`.
pub fn heatmap_level(hours: f64) -> u8 {
    if hours <= 0.0 {
        0
    } else if hours < 2.0 {
        1
    } else if hours < 4.0 {
        2
    } else if hours < 6.0 {
        3
    } else {
        4
    }
}

/// The rolling year window `[today - 1 year + 1 day, today]`.
pub fn rolling_12_month_range(today: NaiveDate) -> DateRange {
    let start = today
        .checked_sub_months(Months::new(12))
        .map(|d| d + Duration::days(1))
        .unwrap_or(today);
    DateRange::new(start, today)
}

/// Build the Sunday-aligned heatmap grid for a range.
pub fn generate_heatmap_data(
    entries: &[TimeEntry],
    range: DateRange,
    now: DateTime<Local>,
) -> HeatmapData {
    // One pass over the entries, then cell lookups are O(1).
    let mut totals: HashMap<NaiveDate, f64> = HashMap::new();
    for entry in entries.iter().filter(|entry| range.contains(entry.start_time)) {
        *totals.entry(entry.start_time.date_naive()).or_insert(0.0) +=
            duration_hours(entry.start_time, entry.end_or(now));
    }

    let lead = range.start.weekday().num_days_from_sunday() as i64;
    let grid_start = range.start - Duration::days(lead);

    let mut weeks = Vec::new();
    let mut cursor = grid_start;
    while cursor <= range.end {
        let week: Vec<Option<HeatmapCell>> = (0..7)
            .map(|offset| {
                let date = cursor + Duration::days(offset);
                if date < range.start || date > range.end {
                    return None;
                }
                let hours = round_to_tenth(totals.get(&date).copied().unwrap_or(0.0));
                Some(HeatmapCell { date, hours, level: heatmap_level(hours) })
            })
            .collect();
        weeks.push(week);
        cursor += Duration::days(7);
    }

    HeatmapData { range, weeks }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;
    use hourglass_common::day_start;
    use hourglass_domain::TimeEntry;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn level_boundaries_match_the_bucket_table() {
        assert_eq!(heatmap_level(0.0), 0);
        assert_eq!(heatmap_level(0.1), 1);
        assert_eq!(heatmap_level(1.999), 1);
        assert_eq!(heatmap_level(2.0), 2);
        assert_eq!(heatmap_level(3.999), 2);
        assert_eq!(heatmap_level(4.0), 3);
        assert_eq!(heatmap_level(5.999), 3);
        assert_eq!(heatmap_level(6.0), 4);
        assert_eq!(heatmap_level(14.0), 4);
    }

    #[test]
    fn level_is_monotonic() {
        let samples = [0.0, 0.5, 1.9, 2.0, 3.5, 4.0, 5.9, 6.0, 10.0];
        let levels: Vec<u8> = samples.iter().map(|h| heatmap_level(*h)).collect();
        let mut sorted = levels.clone();
        sorted.sort_unstable();
        assert_eq!(levels, sorted);
    }

    #[test]
    fn rolling_range_spans_one_year() {
        let range = rolling_12_month_range(date(2025, 6, 15));
        assert_eq!(range.start, date(2024, 6, 16));
        assert_eq!(range.end, date(2025, 6, 15));
    }

    #[test]
    fn grid_rows_are_sunday_aligned_and_padded() {
        // 2025-06-04 is a Wednesday, 2025-06-10 a Tuesday.
        let range = DateRange::new(date(2025, 6, 4), date(2025, 6, 10));
        let data = generate_heatmap_data(&[], range, Local::now());

        assert_eq!(data.weeks.len(), 2);
        for week in &data.weeks {
            assert_eq!(week.len(), 7);
        }
        // First row: Sun-Tue padded, Wed-Sat present.
        assert!(data.weeks[0][0].is_none());
        assert!(data.weeks[0][2].is_none());
        let first = data.weeks[0][3].as_ref().unwrap();
        assert_eq!(first.date, date(2025, 6, 4));
        assert_eq!(first.date.weekday(), Weekday::Wed);
        // Second row: Sun-Tue present, rest padded.
        assert!(data.weeks[1][2].is_some());
        assert!(data.weeks[1][3].is_none());
    }

    #[test]
    fn cells_carry_hours_and_levels() {
        let day = date(2025, 6, 4);
        let start = day_start(day) + Duration::hours(9);
        let entries = vec![TimeEntry::new("p1", "work", start, start + Duration::hours(5))];
        let range = DateRange::new(day, date(2025, 6, 5));
        let data = generate_heatmap_data(&entries, range, Local::now());

        let cell = data.weeks[0][3].as_ref().unwrap();
        assert_eq!(cell.hours, 5.0);
        assert_eq!(cell.level, 3);
        let empty = data.weeks[0][4].as_ref().unwrap();
        assert_eq!(empty.hours, 0.0);
        assert_eq!(empty.level, 0);
    }
}
