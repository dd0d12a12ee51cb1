//! Local state store
//!
//! Small key-shaped state that must survive restarts but is not user data:
//! the in-progress timer session and the test-mode flag. The store reads
//! its file exactly once at `init()`; afterwards every write is an explicit
//! command that updates the cache and writes through to disk. Nothing here
//! writes implicitly on reads or renders.

use std::path::PathBuf;

use async_trait::async_trait;
use hourglass_core::timer::ports::SessionStore;
use hourglass_domain::{Result, TimerSession};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::fs::{read_json_or_default, write_json_atomic};

const STATE_FILE: &str = "state.json";

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PersistedState {
    timer_session: Option<TimerSession>,
    test_mode: bool,
}

/// File-backed store for persisted local state.
pub struct LocalStateStore {
    path: PathBuf,
    state: RwLock<PersistedState>,
}

impl LocalStateStore {
    /// Create a store under the given data directory. Call [`init`] before
    /// reading; until then the cache holds defaults.
    ///
    /// [`init`]: LocalStateStore::init
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { path: data_dir.into().join(STATE_FILE), state: RwLock::new(PersistedState::default()) }
    }

    /// Read the persisted state once at startup. A missing or corrupt file
    /// degrades to defaults.
    pub async fn init(&self) -> Result<()> {
        let loaded: PersistedState = read_json_or_default(&self.path).await?;
        debug!(
            has_session = loaded.timer_session.is_some(),
            test_mode = loaded.test_mode,
            "local state loaded"
        );
        *self.state.write() = loaded;
        Ok(())
    }

    /// Whether the persisted test-mode flag is set. The capability gate is
    /// applied by callers; a stored `true` alone does not enable test mode.
    pub fn test_mode(&self) -> bool {
        self.state.read().test_mode
    }

    /// Persist the test-mode flag.
    pub async fn set_test_mode(&self, enabled: bool) -> Result<()> {
        let snapshot = {
            let mut state = self.state.write();
            state.test_mode = enabled;
            state.clone()
        };
        write_json_atomic(&self.path, &snapshot).await
    }

    async fn write_session(&self, session: Option<TimerSession>) -> Result<()> {
        let snapshot = {
            let mut state = self.state.write();
            state.timer_session = session;
            state.clone()
        };
        write_json_atomic(&self.path, &snapshot).await
    }
}

#[async_trait]
impl SessionStore for LocalStateStore {
    async fn load_session(&self) -> Result<Option<TimerSession>> {
        Ok(self.state.read().timer_session.clone())
    }

    async fn save_session(&self, session: &TimerSession) -> Result<()> {
        self.write_session(Some(session.clone())).await
    }

    async fn clear_session(&self) -> Result<()> {
        self.write_session(None).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Local;

    use super::*;

    #[tokio::test]
    async fn session_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStateStore::new(dir.path());
        store.init().await.unwrap();

        let session = TimerSession::running("p1", Local::now());
        store.save_session(&session).await.unwrap();

        let reloaded = LocalStateStore::new(dir.path());
        reloaded.init().await.unwrap();
        let loaded = reloaded.load_session().await.unwrap().unwrap();
        assert_eq!(loaded.project_id, "p1");
        assert!(loaded.is_running);
    }

    #[tokio::test]
    async fn clear_removes_persisted_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStateStore::new(dir.path());
        store.init().await.unwrap();

        store.save_session(&TimerSession::running("p1", Local::now())).await.unwrap();
        store.clear_session().await.unwrap();

        let reloaded = LocalStateStore::new(dir.path());
        reloaded.init().await.unwrap();
        assert!(reloaded.load_session().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_mode_flag_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStateStore::new(dir.path());
        store.init().await.unwrap();
        assert!(!store.test_mode());

        store.set_test_mode(true).await.unwrap();

        let reloaded = LocalStateStore::new(dir.path());
        reloaded.init().await.unwrap();
        assert!(reloaded.test_mode());
    }

    #[tokio::test]
    async fn corrupt_state_file_degrades_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("state.json"), b"###").await.unwrap();

        let store = LocalStateStore::new(dir.path());
        store.init().await.unwrap();
        assert!(!store.test_mode());
        assert!(store.load_session().await.unwrap().is_none());
    }
}
