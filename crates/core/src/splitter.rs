//! Calendar-day time-entry splitter
//!
//! A raw timer span may cross any number of local midnights. Splitting
//! walks day by day: the first fragment is clipped to 23:59:59.999, the
//! last begins at 00:00:00.000, and intermediate days get full-day spans.
//! Fragments after the first are labelled as continuations so the UI can
//! distinguish them from the original note.
//!
//! The splitter itself handles arbitrarily long spans exactly; duration
//! policy (minimum persistable length, confirmation for very long spans)
//! belongs to callers.

use chrono::{DateTime, Local};
use hourglass_domain::validation::validate_span_order;
use hourglass_domain::{Result, TimeEntry};
use hourglass_common::{day_end, local_date, next_day_start};

/// One day-bounded fragment of a split span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSegment {
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    /// 0-based index of the fragment within its span.
    pub day_index: u32,
}

/// Split a span into day-bounded segments.
///
/// Segments are chronological; consecutive segments are separated by the
/// 1 ms day-end step (`23:59:59.999` to `00:00:00.000`). A span ending
/// exactly at midnight produces no empty trailing segment.
pub fn split_span(start: DateTime<Local>, end: DateTime<Local>) -> Result<Vec<SplitSegment>> {
    validate_span_order(start, end)?;

    let mut segments = Vec::new();
    let mut cursor = start;
    let mut day_index = 0u32;

    while local_date(cursor) < local_date(end) {
        segments.push(SplitSegment { start: cursor, end: day_end(local_date(cursor)), day_index });
        cursor = next_day_start(cursor);
        day_index += 1;
    }
    if cursor < end {
        segments.push(SplitSegment { start: cursor, end, day_index });
    }
    Ok(segments)
}

/// Split a span into day-bounded `TimeEntry` records for a project.
///
/// Continuation fragments get a "(day N)" description suffix, 1-based over
/// the whole span.
pub fn split_into_entries(
    project_id: &str,
    description: &str,
    start: DateTime<Local>,
    end: DateTime<Local>,
) -> Result<Vec<TimeEntry>> {
    let segments = split_span(start, end)?;
    Ok(segments
        .into_iter()
        .map(|segment| {
            let text = continuation_description(description, segment.day_index);
            TimeEntry::new(project_id, text, segment.start, segment.end)
        })
        .collect())
}

fn continuation_description(base: &str, day_index: u32) -> String {
    if day_index == 0 {
        return base.to_string();
    }
    let day = day_index + 1;
    if base.is_empty() {
        format!("day {day}")
    } else {
        format!("{base} (day {day})")
    }
}
