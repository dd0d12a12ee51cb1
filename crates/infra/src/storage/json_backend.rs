//! JSON-file persistence backend
//!
//! Whole-document storage under one data directory. The test universe
//! lives in a `test-data/` subdirectory so the two namespaces can never
//! collide; settings are production-only.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use hourglass_core::storage::ports::PersistenceBackend;
use hourglass_domain::{DataMode, Project, Result, Settings, TimeEntry};
use tracing::debug;

use super::fs::{read_json_or_default, write_json_atomic};

const PROJECTS_FILE: &str = "projects.json";
const ENTRIES_FILE: &str = "time_entries.json";
const SETTINGS_FILE: &str = "settings.json";
const TEST_NAMESPACE_DIR: &str = "test-data";

/// File-backed implementation of [`PersistenceBackend`].
pub struct JsonFileBackend {
    data_dir: PathBuf,
}

impl JsonFileBackend {
    /// Create a backend rooted at `data_dir`. The directory is created on
    /// first write; reads from a missing directory yield empty documents.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    fn namespace_dir(&self, mode: DataMode) -> PathBuf {
        match mode {
            DataMode::Production => self.data_dir.clone(),
            DataMode::Test => self.data_dir.join(TEST_NAMESPACE_DIR),
        }
    }

    fn document_path(&self, mode: DataMode, file: &str) -> PathBuf {
        self.namespace_dir(mode).join(file)
    }

    /// Root directory of this backend.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[async_trait]
impl PersistenceBackend for JsonFileBackend {
    async fn load_projects(&self, mode: DataMode) -> Result<Vec<Project>> {
        read_json_or_default(&self.document_path(mode, PROJECTS_FILE)).await
    }

    async fn save_projects(&self, mode: DataMode, projects: &[Project]) -> Result<()> {
        debug!(mode = %mode, count = projects.len(), "saving projects");
        write_json_atomic(&self.document_path(mode, PROJECTS_FILE), &projects).await
    }

    async fn load_entries(&self, mode: DataMode) -> Result<Vec<TimeEntry>> {
        read_json_or_default(&self.document_path(mode, ENTRIES_FILE)).await
    }

    async fn save_entries(&self, mode: DataMode, entries: &[TimeEntry]) -> Result<()> {
        debug!(mode = %mode, count = entries.len(), "saving time entries");
        write_json_atomic(&self.document_path(mode, ENTRIES_FILE), &entries).await
    }

    async fn load_settings(&self) -> Result<Settings> {
        read_json_or_default(&self.document_path(DataMode::Production, SETTINGS_FILE)).await
    }

    async fn save_settings(&self, settings: &Settings) -> Result<()> {
        write_json_atomic(&self.document_path(DataMode::Production, SETTINGS_FILE), settings).await
    }
}
