//! # Hourglass Common
//!
//! Leaf utilities shared by every Hourglass crate.
//!
//! This crate contains:
//! - Local calendar-day boundary helpers
//! - Inclusive whole-day date ranges
//! - Duration math (fractional hours, whole minutes, one-decimal rounding)
//!
//! ## Architecture
//! - No dependencies on other Hourglass crates
//! - Pure functions only, no I/O and no hidden state

pub mod time;

// Re-export commonly used items
pub use time::day::{day_end, day_start, local_date, next_day_start};
pub use time::hours::{duration_hours, round_to_tenth, whole_minutes};
pub use time::range::{is_within_date_range, DateRange};
