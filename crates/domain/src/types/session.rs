//! Timer session model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::constants::MAX_SESSION_SECS;

/// An in-progress, not-yet-committed timer run.
///
/// Persisted as a side-channel record distinct from `TimeEntry` so that a
/// running session survives process restart without being a committed
/// entry. Elapsed time is always recomputed live from `start_time`, never
/// restored from a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSession {
    pub project_id: String,
    pub start_time: DateTime<Local>,
    pub is_running: bool,
}

impl TimerSession {
    /// A running session starting at `start_time`.
    pub fn running(project_id: impl Into<String>, start_time: DateTime<Local>) -> Self {
        Self { project_id: project_id.into(), start_time, is_running: true }
    }

    /// Seconds elapsed since the session started.
    pub fn elapsed_secs(&self, now: DateTime<Local>) -> i64 {
        (now - self.start_time).num_seconds().max(0)
    }

    /// Whether the session is too old to resume. Stale sessions are
    /// discarded at recovery rather than resurrected as ghost timers.
    pub fn is_stale(&self, now: DateTime<Local>) -> bool {
        self.elapsed_secs(now) > MAX_SESSION_SECS
    }
}
