//! In-memory mock ports for timer lifecycle tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Local};
use hourglass_core::timer::ports::{Clock, EntrySink, HostBridge, ProjectCatalog, SessionStore};
use hourglass_domain::{Project, Result as DomainResult, TimeEntry, TimerSession};
use tokio::sync::broadcast;

/// Clock fixed at a settable instant, advanced explicitly by tests.
#[derive(Clone)]
pub struct FixedClock {
    now: Arc<Mutex<DateTime<Local>>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Local>) -> Self {
        Self { now: Arc::new(Mutex::new(now)) }
    }

    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += delta;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        *self.now.lock().unwrap()
    }
}

/// In-memory project catalog seeded with a fixed set of projects.
#[derive(Default, Clone)]
pub struct MockCatalog {
    projects: Arc<Mutex<Vec<Project>>>,
}

impl MockCatalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects: Arc::new(Mutex::new(projects)) }
    }

    pub fn archive(&self, id: &str) {
        let mut projects = self.projects.lock().unwrap();
        if let Some(project) = projects.iter_mut().find(|p| p.id == id) {
            project.archive();
        }
    }
}

#[async_trait]
impl ProjectCatalog for MockCatalog {
    async fn find_project(&self, id: &str) -> DomainResult<Option<Project>> {
        Ok(self.projects.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }
}

/// Entry sink collecting everything appended to it.
#[derive(Default, Clone)]
pub struct MockEntrySink {
    entries: Arc<Mutex<Vec<TimeEntry>>>,
}

impl MockEntrySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<TimeEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl EntrySink for MockEntrySink {
    async fn append_entries(&self, entries: Vec<TimeEntry>) -> DomainResult<()> {
        self.entries.lock().unwrap().extend(entries);
        Ok(())
    }
}

/// Session store holding at most one persisted session.
#[derive(Default, Clone)]
pub struct MockSessionStore {
    session: Arc<Mutex<Option<TimerSession>>>,
}

impl MockSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: TimerSession) -> Self {
        Self { session: Arc::new(Mutex::new(Some(session))) }
    }

    pub fn persisted(&self) -> Option<TimerSession> {
        self.session.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn load_session(&self) -> DomainResult<Option<TimerSession>> {
        Ok(self.session.lock().unwrap().clone())
    }

    async fn save_session(&self, session: &TimerSession) -> DomainResult<()> {
        *self.session.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    async fn clear_session(&self) -> DomainResult<()> {
        *self.session.lock().unwrap() = None;
        Ok(())
    }
}

/// Host bridge counting notifications and exposing a stop-request channel.
pub struct MockBridge {
    pub started_calls: AtomicUsize,
    pub stopped_calls: AtomicUsize,
    stop_requests: broadcast::Sender<()>,
}

impl Default for MockBridge {
    fn default() -> Self {
        let (stop_requests, _) = broadcast::channel(4);
        Self {
            started_calls: AtomicUsize::new(0),
            stopped_calls: AtomicUsize::new(0),
            stop_requests,
        }
    }
}

impl MockBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_stop(&self) {
        let _ = self.stop_requests.send(());
    }

    pub fn started(&self) -> usize {
        self.started_calls.load(Ordering::SeqCst)
    }

    pub fn stopped(&self) -> usize {
        self.stopped_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HostBridge for MockBridge {
    async fn timer_started(&self, _project_name: &str) {
        self.started_calls.fetch_add(1, Ordering::SeqCst);
    }

    async fn timer_stopped(&self) {
        self.stopped_calls.fetch_add(1, Ordering::SeqCst);
    }

    fn subscribe_stop_requests(&self) -> broadcast::Receiver<()> {
        self.stop_requests.subscribe()
    }
}
