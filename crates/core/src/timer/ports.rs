//! Port interfaces for the timer lifecycle
//!
//! These traits define the boundaries between the timer controller and
//! infrastructure implementations.

use async_trait::async_trait;
use chrono::{DateTime, Local};
use hourglass_domain::{Project, Result, TimeEntry, TimerSession};
use tokio::sync::broadcast;

/// Source of the current instant. Injected so time-dependent logic is
/// deterministic under test.
pub trait Clock: Send + Sync {
    /// The current local instant.
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock implementation of [`Clock`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Read access to the project set, as the timer sees it.
#[async_trait]
pub trait ProjectCatalog: Send + Sync {
    /// Look up a project by id.
    async fn find_project(&self, id: &str) -> Result<Option<Project>>;
}

/// Destination for committed time entries.
#[async_trait]
pub trait EntrySink: Send + Sync {
    /// Append entries to the store.
    async fn append_entries(&self, entries: Vec<TimeEntry>) -> Result<()>;
}

/// Side-channel persistence for the in-progress session, so a running
/// timer survives process restart without being a committed entry.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the persisted session, if any.
    async fn load_session(&self) -> Result<Option<TimerSession>>;

    /// Persist the session.
    async fn save_session(&self, session: &TimerSession) -> Result<()>;

    /// Remove the persisted session.
    async fn clear_session(&self) -> Result<()>;
}

/// Best-effort notifications to the host process (tray label updates).
///
/// Calls are infallible by contract: implementations swallow and log their
/// own failures so a broken bridge can never block a state transition.
#[async_trait]
pub trait HostBridge: Send + Sync {
    /// The timer started for the named project.
    async fn timer_started(&self, project_name: &str);

    /// The timer stopped.
    async fn timer_stopped(&self);

    /// Stream of host-initiated stop requests (tray menu).
    fn subscribe_stop_requests(&self) -> broadcast::Receiver<()>;
}
