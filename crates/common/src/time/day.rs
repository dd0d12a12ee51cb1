//! Local calendar-day boundaries
//!
//! Day boundaries are resolved in the system's local timezone. DST
//! transitions can make a wall-clock instant ambiguous or nonexistent;
//! ambiguous instants resolve to the earlier offset and nonexistent ones
//! fall back to interpreting the wall-clock value as UTC, so these helpers
//! never panic.

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// Last millisecond of a local day, `23:59:59.999`.
const DAY_END_TIME: NaiveTime = match NaiveTime::from_hms_milli_opt(23, 59, 59, 999) {
    Some(t) => t,
    None => NaiveTime::MIN,
};

/// Resolve a naive wall-clock value to a concrete local instant.
fn resolve_local(naive: NaiveDateTime) -> DateTime<Local> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        // Skipped by a DST jump; reinterpreting as UTC always yields an instant.
        LocalResult::None => Local.from_utc_datetime(&naive),
    }
}

/// Start of a local day, `00:00:00.000`.
pub fn day_start(date: NaiveDate) -> DateTime<Local> {
    resolve_local(date.and_time(NaiveTime::MIN))
}

/// End of a local day, `23:59:59.999`.
///
/// The 999 ms convention is load-bearing: split entries end at `day_end`
/// and the continuation starts at the next `day_start`.
pub fn day_end(date: NaiveDate) -> DateTime<Local> {
    resolve_local(date.and_time(DAY_END_TIME))
}

/// Start of the day after the given instant's local day.
pub fn next_day_start(moment: DateTime<Local>) -> DateTime<Local> {
    day_start(moment.date_naive() + Duration::days(1))
}

/// The local calendar date an instant falls on.
pub fn local_date(moment: DateTime<Local>) -> NaiveDate {
    moment.date_naive()
}
