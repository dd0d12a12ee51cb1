//! Timer lifecycle service - core business logic
//!
//! States: Idle -> Running -> Idle. There is no paused state in the
//! committed model. At most one session runs system-wide; starting while
//! running stops the previous session first. Elapsed time is always
//! recomputed from the session start, never accumulated.

use std::sync::Arc;

use chrono::Duration;
use hourglass_domain::constants::{MAX_SESSION_SECS, MIN_ENTRY_DURATION_SECS};
use hourglass_domain::{
    HourglassError, Result, StopOutcome, TimeEntry, TimerSession, TimerStatus,
};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, warn};

use super::ports::{Clock, EntrySink, HostBridge, ProjectCatalog, SessionStore};
use crate::splitter::split_into_entries;

/// Events emitted on timer state transitions.
#[derive(Debug, Clone)]
pub enum TimerEvent {
    /// A session started (or resumed after recovery).
    Started { project_id: String },
    /// A session stopped and its entries were committed.
    Stopped { entries_created: usize },
    /// The 8-hour ceiling forced a stop.
    MaxTimeExceeded { project_id: String },
}

/// Result of one tick of the running timer.
#[derive(Debug, Clone)]
pub enum TickOutcome {
    /// No session is running.
    Idle,
    /// Session still running; elapsed seconds recomputed.
    Running { elapsed_secs: i64 },
    /// The ceiling was hit; the session was stopped and committed.
    AutoStopped(StopOutcome),
}

/// Timer lifecycle service
pub struct TimerService {
    projects: Arc<dyn ProjectCatalog>,
    entries: Arc<dyn EntrySink>,
    sessions: Arc<dyn SessionStore>,
    bridge: Arc<dyn HostBridge>,
    clock: Arc<dyn Clock>,
    active: Mutex<Option<TimerSession>>,
    events: broadcast::Sender<TimerEvent>,
}

impl TimerService {
    /// Create a new timer service.
    pub fn new(
        projects: Arc<dyn ProjectCatalog>,
        entries: Arc<dyn EntrySink>,
        sessions: Arc<dyn SessionStore>,
        bridge: Arc<dyn HostBridge>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let (events, _) = broadcast::channel(16);
        Self { projects, entries, sessions, bridge, clock, active: Mutex::new(None), events }
    }

    /// Subscribe to timer state transitions.
    pub fn subscribe(&self) -> broadcast::Receiver<TimerEvent> {
        self.events.subscribe()
    }

    /// Snapshot of the current timer state.
    pub async fn status(&self) -> TimerStatus {
        let active = self.active.lock().await;
        match active.as_ref() {
            Some(session) => TimerStatus {
                is_running: true,
                project_id: Some(session.project_id.clone()),
                start_time: Some(session.start_time),
                elapsed_secs: session.elapsed_secs(self.clock.now()),
            },
            None => TimerStatus::idle(),
        }
    }

    /// Start a session for a project.
    ///
    /// Rejected for missing or archived projects. If another session is
    /// already running it is stopped first; a too-short previous session
    /// is discarded rather than failing the new start.
    pub async fn start(&self, project_id: &str) -> Result<TimerStatus> {
        let project = self
            .projects
            .find_project(project_id)
            .await?
            .ok_or_else(|| HourglassError::NotFound(format!("project {project_id}")))?;
        if project.is_archived {
            return Err(HourglassError::ProjectArchived(project.name));
        }

        let mut active = self.active.lock().await;
        if let Some(previous) = active.take() {
            info!(project_id = %previous.project_id, "stopping previous session before start");
            if let Err(err) = self.finish_session(previous, None).await {
                // A sub-minimum previous session is discarded, not fatal.
                debug!(error = %err, "previous session discarded on start");
            }
        }

        let session = TimerSession::running(project_id, self.clock.now());
        if let Err(err) = self.sessions.save_session(&session).await {
            warn!(error = %err, "failed to persist timer session; timer runs unrecovered");
        }
        *active = Some(session.clone());
        drop(active);

        self.bridge.timer_started(&project.name).await;
        let _ = self.events.send(TimerEvent::Started { project_id: project_id.to_string() });
        info!(project_id, "timer started");

        Ok(TimerStatus {
            is_running: true,
            project_id: Some(session.project_id),
            start_time: Some(session.start_time),
            elapsed_secs: 0,
        })
    }

    /// Stop the running session and commit its span.
    ///
    /// A stop before the 60-second minimum fails with a validation error,
    /// but the session state is cleared regardless: the attempted work is
    /// discarded, not queued for retry.
    pub async fn stop(&self) -> Result<StopOutcome> {
        let mut active = self.active.lock().await;
        let session = active
            .take()
            .ok_or_else(|| HourglassError::InvalidInput("no timer is running".to_string()))?;
        drop(active);

        self.finish_session(session, None).await
    }

    /// Recompute elapsed time; force-stop at the ceiling.
    ///
    /// Called every second by the tick scheduler while the process runs.
    pub async fn tick(&self) -> Result<TickOutcome> {
        let mut active = self.active.lock().await;
        let Some(session) = active.as_ref() else {
            return Ok(TickOutcome::Idle);
        };

        let elapsed = session.elapsed_secs(self.clock.now());
        if elapsed < MAX_SESSION_SECS {
            return Ok(TickOutcome::Running { elapsed_secs: elapsed });
        }

        // Ceiling reached: clamp the committed span to exactly eight hours.
        let session = match active.take() {
            Some(session) => session,
            None => return Ok(TickOutcome::Idle),
        };
        drop(active);

        warn!(project_id = %session.project_id, "max session time exceeded; auto-stopping");
        let _ = self
            .events
            .send(TimerEvent::MaxTimeExceeded { project_id: session.project_id.clone() });
        let clamped_end = session.start_time + Duration::seconds(MAX_SESSION_SECS);
        let outcome = self.finish_session(session, Some(clamped_end)).await?;
        Ok(TickOutcome::AutoStopped(outcome))
    }

    /// Restore a persisted session after process restart.
    ///
    /// The session resumes with its original start time (elapsed time is
    /// recomputed live). Sessions older than the ceiling, or referencing a
    /// missing or archived project, are discarded rather than resumed.
    pub async fn recover(&self) -> Result<TimerStatus> {
        let persisted = match self.sessions.load_session().await {
            Ok(persisted) => persisted,
            Err(err) => {
                warn!(error = %err, "failed to read persisted session; starting idle");
                self.discard_persisted().await;
                return Ok(TimerStatus::idle());
            }
        };
        let Some(session) = persisted else {
            return Ok(TimerStatus::idle());
        };

        if !session.is_running {
            self.discard_persisted().await;
            return Ok(TimerStatus::idle());
        }
        if session.is_stale(self.clock.now()) {
            info!(project_id = %session.project_id, "persisted session is stale; discarding");
            self.discard_persisted().await;
            return Ok(TimerStatus::idle());
        }

        let project = match self.projects.find_project(&session.project_id).await {
            Ok(project) => project,
            Err(err) => {
                warn!(error = %err, "project lookup failed during recovery; starting idle");
                self.discard_persisted().await;
                return Ok(TimerStatus::idle());
            }
        };
        let Some(project) = project.filter(|p| !p.is_archived) else {
            info!(
                project_id = %session.project_id,
                "persisted session references missing or archived project; discarding"
            );
            self.discard_persisted().await;
            return Ok(TimerStatus::idle());
        };

        let status = TimerStatus {
            is_running: true,
            project_id: Some(session.project_id.clone()),
            start_time: Some(session.start_time),
            elapsed_secs: session.elapsed_secs(self.clock.now()),
        };
        *self.active.lock().await = Some(session.clone());
        self.bridge.timer_started(&project.name).await;
        let _ = self.events.send(TimerEvent::Started { project_id: session.project_id });
        info!(project = %project.name, "timer session recovered");
        Ok(status)
    }

    /// Tear down a session: clear persisted state, notify the bridge, then
    /// validate and commit the span. Clearing happens before validation so
    /// a rejected stop still leaves the controller idle.
    async fn finish_session(
        &self,
        session: TimerSession,
        end_override: Option<chrono::DateTime<chrono::Local>>,
    ) -> Result<StopOutcome> {
        if let Err(err) = self.sessions.clear_session().await {
            warn!(error = %err, "failed to clear persisted session");
        }
        self.bridge.timer_stopped().await;

        let now = self.clock.now();
        let end = end_override.unwrap_or_else(|| {
            let ceiling = session.start_time + Duration::seconds(MAX_SESSION_SECS);
            now.min(ceiling)
        });

        let elapsed = (end - session.start_time).num_seconds();
        if elapsed < MIN_ENTRY_DURATION_SECS {
            return Err(HourglassError::InvalidInput(format!(
                "session of {elapsed}s is below the {MIN_ENTRY_DURATION_SECS}s minimum"
            )));
        }

        let fragments = split_into_entries(&session.project_id, "", session.start_time, end)?;
        let (kept, discarded): (Vec<TimeEntry>, Vec<TimeEntry>) =
            fragments.into_iter().partition(|entry| {
                entry.duration_secs(now) >= MIN_ENTRY_DURATION_SECS
            });
        if !discarded.is_empty() {
            warn!(count = discarded.len(), "discarding split fragments below minimum duration");
        }

        self.entries.append_entries(kept.clone()).await?;
        let _ = self.events.send(TimerEvent::Stopped { entries_created: kept.len() });
        info!(
            project_id = %session.project_id,
            entries = kept.len(),
            "timer session committed"
        );
        Ok(StopOutcome { entries: kept, discarded_fragments: discarded.len() })
    }

    async fn discard_persisted(&self) {
        if let Err(err) = self.sessions.clear_session().await {
            warn!(error = %err, "failed to discard persisted session");
        }
    }
}
