//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

/// Baseline monthly-hours figure that `monthly_capacity` fractions apply to.
pub const BASE_MONTHLY_HOURS: f64 = 140.0;

/// Minimum duration an entry must reach to be persisted.
pub const MIN_ENTRY_DURATION_SECS: i64 = 60;

/// Hard ceiling on a single timer session. Not configurable.
pub const MAX_SESSION_SECS: i64 = 8 * 3600;

/// Timer elapsed-time recompute interval.
pub const TIMER_TICK_INTERVAL_MS: u64 = 1_000;

/// Debounce window for coalescing storage writes.
pub const SAVE_DEBOUNCE_MS: u64 = 1_000;

/// Environment variable gating whether test mode can ever be enabled.
pub const ENV_ALLOW_TEST_MODE: &str = "HOURGLASS_ALLOW_TEST_MODE";

/// Environment variable overriding the data directory.
pub const ENV_DATA_DIR: &str = "HOURGLASS_DATA_DIR";
