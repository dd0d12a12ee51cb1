//! Inclusive whole-day date ranges
//!
//! Callers pass arbitrary mid-day timestamps; ranges normalize both bounds
//! to whole-day boundaries so containment checks never depend on the time
//! of day a caller happened to construct.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::day::{day_end, day_start};

/// An inclusive range of local calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range from two dates, swapping if given in reverse order.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if end < start {
            Self { start: end, end: start }
        } else {
            Self { start, end }
        }
    }

    /// Range covering a single day.
    pub fn single_day(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    /// Normalized start instant, `start 00:00:00.000`.
    pub fn start_instant(&self) -> DateTime<Local> {
        day_start(self.start)
    }

    /// Normalized end instant, `end 23:59:59.999`.
    pub fn end_instant(&self) -> DateTime<Local> {
        day_end(self.end)
    }

    /// Whether an instant falls within the range, inclusive on both bounds.
    pub fn contains(&self, moment: DateTime<Local>) -> bool {
        moment >= self.start_instant() && moment <= self.end_instant()
    }

    /// Iterate the days of the range in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take_while({
            let end = self.end;
            move |d| *d <= end
        })
    }

    /// Number of days covered, inclusive.
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Whether `moment` falls between `start` and `end`, both normalized to
/// whole-day boundaries and inclusive.
pub fn is_within_date_range(
    moment: DateTime<Local>,
    start: DateTime<Local>,
    end: DateTime<Local>,
) -> bool {
    DateRange::new(start.date_naive(), end.date_naive()).contains(moment)
}
