//! Port interfaces for persistence and host-side data exchange
//!
//! These traits define the boundaries between core business logic and
//! infrastructure implementations. All operations are async and fallible;
//! callers treat failures as non-fatal (logged, retried on the next
//! mutation cycle) per the storage error policy.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use hourglass_domain::{CsvEntryRow, DataMode, Project, Result, Settings, TimeEntry};

/// Whole-document persistence for projects, entries, and settings.
///
/// Production and test data live in separate namespaces selected by
/// `DataMode`; implementations must never merge them.
#[async_trait]
pub trait PersistenceBackend: Send + Sync {
    /// Load all projects from the given namespace.
    async fn load_projects(&self, mode: DataMode) -> Result<Vec<Project>>;

    /// Replace all projects in the given namespace.
    async fn save_projects(&self, mode: DataMode, projects: &[Project]) -> Result<()>;

    /// Load all time entries from the given namespace.
    async fn load_entries(&self, mode: DataMode) -> Result<Vec<TimeEntry>>;

    /// Replace all time entries in the given namespace.
    async fn save_entries(&self, mode: DataMode, entries: &[TimeEntry]) -> Result<()>;

    /// Load persisted settings, falling back to defaults when absent.
    async fn load_settings(&self) -> Result<Settings>;

    /// Persist settings.
    async fn save_settings(&self, settings: &Settings) -> Result<()>;
}

/// Host-side CSV exchange and file dialogs.
///
/// File parsing happens on the host side; the engine only consumes and
/// produces the row shape.
#[async_trait]
pub trait CsvExchange: Send + Sync {
    /// Export entries and their projects; returns the written file path.
    async fn export_csv(&self, entries: &[TimeEntry], projects: &[Project]) -> Result<PathBuf>;

    /// Parse an import file into rows.
    async fn import_csv(&self, path: &Path) -> Result<Vec<CsvEntryRow>>;

    /// Ask the host to pick a file; `None` when the user cancels.
    async fn show_open_file_dialog(&self) -> Result<Option<PathBuf>>;
}
