//! Entry validation rules
//!
//! Validation errors surface synchronously and abort the operation before
//! any state is committed.

use chrono::{DateTime, Local};

use crate::constants::MIN_ENTRY_DURATION_SECS;
use crate::errors::{HourglassError, Result};

/// Validate that a span runs strictly forward.
pub fn validate_span_order(start: DateTime<Local>, end: DateTime<Local>) -> Result<()> {
    if end <= start {
        return Err(HourglassError::InvalidInput(format!(
            "end time {} must be after start time {}",
            end.to_rfc3339(),
            start.to_rfc3339()
        )));
    }
    Ok(())
}

/// Validate that a span reaches the minimum persistable duration.
pub fn validate_min_duration(start: DateTime<Local>, end: DateTime<Local>) -> Result<()> {
    let secs = (end - start).num_seconds();
    if secs < MIN_ENTRY_DURATION_SECS {
        return Err(HourglassError::InvalidInput(format!(
            "duration of {secs}s is below the {MIN_ENTRY_DURATION_SECS}s minimum"
        )));
    }
    Ok(())
}

/// Validate that a span stays within a single local calendar day.
/// Manual entries are created single-day; only the timer path may produce
/// multi-day spans, and those are split before persistence.
pub fn validate_single_day(start: DateTime<Local>, end: DateTime<Local>) -> Result<()> {
    if start.date_naive() != end.date_naive() {
        return Err(HourglassError::InvalidInput(format!(
            "span from {} to {} crosses a day boundary",
            start.date_naive(),
            end.date_naive()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::errors::HourglassError;

    fn base() -> DateTime<Local> {
        Local::now()
    }

    #[test]
    fn span_order_rejects_reversed_and_zero_spans() {
        let start = base();
        assert!(validate_span_order(start, start + Duration::seconds(1)).is_ok());
        assert!(validate_span_order(start, start).is_err());
        assert!(validate_span_order(start, start - Duration::seconds(1)).is_err());
    }

    #[test]
    fn min_duration_boundary() {
        let start = base();
        assert!(validate_min_duration(start, start + Duration::seconds(59)).is_err());
        assert!(validate_min_duration(start, start + Duration::seconds(60)).is_ok());
    }

    #[test]
    fn min_duration_error_is_invalid_input() {
        let start = base();
        let err = validate_min_duration(start, start + Duration::seconds(30)).unwrap_err();
        assert!(matches!(err, HourglassError::InvalidInput(_)));
    }

    #[test]
    fn single_day_rejects_midnight_crossing() {
        use chrono::NaiveDate;
        use hourglass_common::{day_end, day_start};

        let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let ok = validate_single_day(day_start(day), day_end(day));
        assert!(ok.is_ok());

        let crossing =
            validate_single_day(day_end(day) - Duration::hours(1), day_start(day) + Duration::days(1));
        assert!(crossing.is_err());
    }
}
