//! Duration math
//!
//! Aggregates are reported in fractional hours rounded to one decimal;
//! session lengths are reported in whole minutes. Millisecond precision is
//! kept internally so the 23:59:59.999 day-end convention does not leak
//! into displayed totals.

use chrono::{DateTime, Local};

/// Round to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Span length in fractional hours, millisecond precision.
///
/// Returns 0.0 for reversed spans rather than a negative duration.
pub fn duration_hours(start: DateTime<Local>, end: DateTime<Local>) -> f64 {
    let millis = (end - start).num_milliseconds();
    if millis <= 0 {
        return 0.0;
    }
    millis as f64 / 3_600_000.0
}

/// Span length in whole minutes, truncated.
pub fn whole_minutes(start: DateTime<Local>, end: DateTime<Local>) -> i64 {
    (end - start).num_minutes().max(0)
}
