//! Storage synchronization layer
//!
//! One store fronts two independent data universes, production and test;
//! a mode flag selects which universe is exposed and which receives
//! writes. The universes are never merged.
//!
//! Persistence is debounced: every mutation schedules a save one debounce
//! window out, and a newer mutation cancels and reschedules the pending
//! one, so at most one save is logically in flight. The integrity pass
//! runs at schedule time, before the snapshot is taken: entries whose
//! project no longer exists are pruned from memory, and that pruned set is
//! exactly what lands on disk, so the two never diverge.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Local;
use hourglass_core::storage::ports::PersistenceBackend;
use hourglass_core::timer::ports::{EntrySink, ProjectCatalog};
use hourglass_domain::{DataMode, HourglassError, Project, Result, TimeEntry};
use parking_lot::RwLock;
use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::seed;

/// Events emitted by the store for cross-window observers.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    /// The active data universe changed.
    ModeChanged(DataMode),
}

#[derive(Debug, Default, Clone)]
struct Universe {
    projects: Vec<Project>,
    entries: Vec<TimeEntry>,
}

impl Universe {
    fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.entries.is_empty()
    }

    /// Remove entries referencing a project id that no longer exists.
    /// Returns how many were pruned.
    fn prune_orphaned_entries(&mut self) -> usize {
        let before = self.entries.len();
        let ids: HashSet<&str> = self.projects.iter().map(|p| p.id.as_str()).collect();
        self.entries.retain(|entry| ids.contains(entry.project_id.as_str()));
        before - self.entries.len()
    }
}

#[derive(Debug, Default)]
struct Universes {
    production: Universe,
    test: Universe,
}

impl Universes {
    fn get_mut(&mut self, mode: DataMode) -> &mut Universe {
        match mode {
            DataMode::Production => &mut self.production,
            DataMode::Test => &mut self.test,
        }
    }

    fn get(&self, mode: DataMode) -> &Universe {
        match mode {
            DataMode::Production => &self.production,
            DataMode::Test => &self.test,
        }
    }
}

struct PendingSave {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

/// Debounced, dual-universe store for projects and time entries.
pub struct DataStore {
    backend: Arc<dyn PersistenceBackend>,
    universes: RwLock<Universes>,
    mode: RwLock<DataMode>,
    allow_test_mode: bool,
    debounce: Duration,
    pending: Mutex<Option<PendingSave>>,
    events: broadcast::Sender<StoreEvent>,
}

impl DataStore {
    /// Load the store: production data always, plus the test universe when
    /// starting in test mode (synthesized if the namespace is empty).
    ///
    /// A requested test mode without the capability flag degrades to
    /// production rather than failing startup.
    pub async fn load(
        backend: Arc<dyn PersistenceBackend>,
        requested_mode: DataMode,
        allow_test_mode: bool,
        debounce: Duration,
    ) -> Result<Arc<Self>> {
        let mode = if requested_mode == DataMode::Test && !allow_test_mode {
            warn!("test mode requested without capability; loading production data");
            DataMode::Production
        } else {
            requested_mode
        };

        let production = Universe {
            projects: backend.load_projects(DataMode::Production).await?,
            entries: backend.load_entries(DataMode::Production).await?,
        };
        info!(
            projects = production.projects.len(),
            entries = production.entries.len(),
            "production data loaded"
        );

        let (events, _) = broadcast::channel(16);
        let store = Arc::new(Self {
            backend,
            universes: RwLock::new(Universes { production, test: Universe::default() }),
            mode: RwLock::new(mode),
            allow_test_mode,
            debounce,
            pending: Mutex::new(None),
            events,
        });

        if mode == DataMode::Test {
            store.ensure_test_universe().await?;
        }
        Ok(store)
    }

    /// Subscribe to store events.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// The currently active data universe.
    pub fn mode(&self) -> DataMode {
        *self.mode.read()
    }

    /// Projects of the active universe.
    pub fn projects(&self) -> Vec<Project> {
        let mode = self.mode();
        self.universes.read().get(mode).projects.clone()
    }

    /// Entries of the active universe.
    pub fn entries(&self) -> Vec<TimeEntry> {
        let mode = self.mode();
        self.universes.read().get(mode).entries.clone()
    }

    /* ---------------------------------------------------------------- */
    /* Mutations                                                        */
    /* ---------------------------------------------------------------- */

    /// Add a project to the active universe.
    pub async fn create_project(&self, project: Project) -> Result<Project> {
        {
            let mode = self.mode();
            let mut universes = self.universes.write();
            universes.get_mut(mode).projects.push(project.clone());
        }
        self.schedule_save().await;
        Ok(project)
    }

    /// Apply an edit to a project through a closure; returns the updated
    /// project.
    pub async fn update_project<F>(&self, id: &str, apply: F) -> Result<Project>
    where
        F: FnOnce(&mut Project),
    {
        let updated = {
            let mode = self.mode();
            let mut universes = self.universes.write();
            let project = universes
                .get_mut(mode)
                .projects
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| HourglassError::NotFound(format!("project {id}")))?;
            apply(project);
            project.touch();
            project.clone()
        };
        self.schedule_save().await;
        Ok(updated)
    }

    /// Delete a project, cascading to all of its entries.
    pub async fn delete_project(&self, id: &str) -> Result<()> {
        {
            let mode = self.mode();
            let mut universes = self.universes.write();
            let universe = universes.get_mut(mode);
            let before = universe.projects.len();
            universe.projects.retain(|p| p.id != id);
            if universe.projects.len() == before {
                return Err(HourglassError::NotFound(format!("project {id}")));
            }
            universe.entries.retain(|entry| entry.project_id != id);
        }
        self.schedule_save().await;
        Ok(())
    }

    /// Append entries to the active universe.
    pub async fn add_entries(&self, entries: Vec<TimeEntry>) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }
        {
            let mode = self.mode();
            let mut universes = self.universes.write();
            universes.get_mut(mode).entries.extend(entries);
        }
        self.schedule_save().await;
        Ok(())
    }

    /// Replace an entry by id.
    pub async fn update_entry(&self, mut updated: TimeEntry) -> Result<TimeEntry> {
        updated.updated_at = Local::now();
        {
            let mode = self.mode();
            let mut universes = self.universes.write();
            let slot = universes
                .get_mut(mode)
                .entries
                .iter_mut()
                .find(|entry| entry.id == updated.id)
                .ok_or_else(|| HourglassError::NotFound(format!("entry {}", updated.id)))?;
            *slot = updated.clone();
        }
        self.schedule_save().await;
        Ok(updated)
    }

    /// Delete an entry by id.
    pub async fn delete_entry(&self, id: &str) -> Result<()> {
        {
            let mode = self.mode();
            let mut universes = self.universes.write();
            let universe = universes.get_mut(mode);
            let before = universe.entries.len();
            universe.entries.retain(|entry| entry.id != id);
            if universe.entries.len() == before {
                return Err(HourglassError::NotFound(format!("entry {id}")));
            }
        }
        self.schedule_save().await;
        Ok(())
    }

    /* ---------------------------------------------------------------- */
    /* Mode switching                                                   */
    /* ---------------------------------------------------------------- */

    /// Switch the active universe.
    ///
    /// Enabling test mode requires the capability flag. The outgoing
    /// universe is flushed first; the incoming one is loaded (and the test
    /// universe synthesized if empty) and then persisted, so disk reflects
    /// the now-active dataset.
    pub async fn set_mode(&self, mode: DataMode) -> Result<()> {
        if mode == DataMode::Test && !self.allow_test_mode {
            return Err(HourglassError::Capability(
                "test mode is not enabled in this environment".to_string(),
            ));
        }
        if self.mode() == mode {
            return Ok(());
        }

        // Flush outgoing state so nothing pending is lost across the switch.
        self.flush().await?;

        match mode {
            DataMode::Test => self.ensure_test_universe().await?,
            DataMode::Production => {
                let production = Universe {
                    projects: self.backend.load_projects(DataMode::Production).await?,
                    entries: self.backend.load_entries(DataMode::Production).await?,
                };
                self.universes.write().production = production;
            }
        }

        *self.mode.write() = mode;
        self.save_snapshot(mode, self.snapshot(mode)).await?;
        let _ = self.events.send(StoreEvent::ModeChanged(mode));
        info!(mode = %mode, "data mode switched");
        Ok(())
    }

    /// Load the test universe, synthesizing a dataset when the namespace
    /// is absent or empty.
    async fn ensure_test_universe(&self) -> Result<()> {
        let mut test = Universe {
            projects: self.backend.load_projects(DataMode::Test).await?,
            entries: self.backend.load_entries(DataMode::Test).await?,
        };
        if test.is_empty() {
            let (projects, entries) = seed::generate(Local::now().date_naive());
            info!(projects = projects.len(), entries = entries.len(), "seeded test dataset");
            test = Universe { projects, entries };
            self.backend.save_projects(DataMode::Test, &test.projects).await?;
            self.backend.save_entries(DataMode::Test, &test.entries).await?;
        }
        self.universes.write().test = test;
        Ok(())
    }

    /* ---------------------------------------------------------------- */
    /* Persistence                                                      */
    /* ---------------------------------------------------------------- */

    /// Run the integrity pass and snapshot the universe for persistence.
    fn snapshot(&self, mode: DataMode) -> Universe {
        let mut universes = self.universes.write();
        let universe = universes.get_mut(mode);
        let pruned = universe.prune_orphaned_entries();
        if pruned > 0 && cfg!(debug_assertions) {
            warn!(pruned, "pruned entries referencing missing projects");
        }
        universe.clone()
    }

    /// Schedule a debounced save of the active universe, cancelling any
    /// save already pending. At most one save is logically in flight;
    /// because every mutation reschedules, the snapshot taken here is the
    /// state the fired save would have seen.
    async fn schedule_save(&self) {
        let mode = self.mode();
        let snapshot = self.snapshot(mode);

        let mut pending = self.pending.lock().await;
        if let Some(previous) = pending.take() {
            previous.token.cancel();
        }

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let backend = Arc::clone(&self.backend);
        let debounce = self.debounce;
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {
                    debug!("pending save superseded");
                }
                _ = tokio::time::sleep(debounce) => {
                    if let Err(err) = Self::persist(&backend, mode, &snapshot).await {
                        warn!(error = %err, "debounced save failed; state kept in memory");
                    }
                }
            }
        });
        *pending = Some(PendingSave { token, handle });
    }

    /// Cancel any pending save and persist immediately.
    pub async fn flush(&self) -> Result<()> {
        self.cancel_pending().await;
        let mode = self.mode();
        self.save_snapshot(mode, self.snapshot(mode)).await
    }

    async fn save_snapshot(&self, mode: DataMode, snapshot: Universe) -> Result<()> {
        Self::persist(&self.backend, mode, &snapshot).await
    }

    /// Write a universe snapshot to disk. Saving an entirely empty state
    /// is suppressed so a blank in-memory universe can never clobber real
    /// data.
    async fn persist(
        backend: &Arc<dyn PersistenceBackend>,
        mode: DataMode,
        universe: &Universe,
    ) -> Result<()> {
        if universe.is_empty() {
            debug!(mode = %mode, "skipping save of empty state");
            return Ok(());
        }
        backend.save_projects(mode, &universe.projects).await?;
        backend.save_entries(mode, &universe.entries).await?;
        debug!(
            mode = %mode,
            projects = universe.projects.len(),
            entries = universe.entries.len(),
            "state persisted"
        );
        Ok(())
    }

    /// Cancel any pending save without persisting. Used at teardown after
    /// an explicit flush.
    pub async fn cancel_pending(&self) {
        let mut pending = self.pending.lock().await;
        if let Some(previous) = pending.take() {
            previous.token.cancel();
            previous.handle.abort();
        }
    }
}

impl Drop for DataStore {
    fn drop(&mut self) {
        if let Ok(mut pending) = self.pending.try_lock() {
            if let Some(previous) = pending.take() {
                previous.token.cancel();
            }
        }
    }
}

#[async_trait]
impl ProjectCatalog for DataStore {
    async fn find_project(&self, id: &str) -> Result<Option<Project>> {
        Ok(self.projects().into_iter().find(|project| project.id == id))
    }
}

#[async_trait]
impl EntrySink for DataStore {
    async fn append_entries(&self, entries: Vec<TimeEntry>) -> Result<()> {
        self.add_entries(entries).await
    }
}
