//! Shared fixtures for command integration tests
//!
//! Builds an [`AppContext`] against a temporary data directory with a
//! controllable clock and a recording CSV exchange double.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Local, NaiveDate};
use hourglass_api::context::AppContext;
use hourglass_core::storage::ports::CsvExchange;
use hourglass_core::timer::ports::Clock;
use hourglass_domain::{
    Config, CsvEntryRow, Project, Result as DomainResult, StorageConfig, TimeEntry, TimerConfig,
};
use parking_lot::Mutex;

/// Clock fixed at a settable instant, shared across context restarts.
#[derive(Clone)]
pub struct TestClock {
    now: Arc<Mutex<DateTime<Local>>>,
}

impl TestClock {
    pub fn new(now: DateTime<Local>) -> Self {
        Self { now: Arc::new(Mutex::new(now)) }
    }

    pub fn advance(&self, delta: Duration) {
        *self.now.lock() += delta;
    }
}

impl Clock for TestClock {
    fn now(&self) -> DateTime<Local> {
        *self.now.lock()
    }
}

/// CSV exchange double: serves configured rows, records exports.
#[derive(Default)]
pub struct RecordingCsvExchange {
    pub dialog_path: Mutex<Option<PathBuf>>,
    pub rows: Mutex<Vec<CsvEntryRow>>,
    pub exported: Mutex<Vec<(usize, usize)>>,
}

impl RecordingCsvExchange {
    pub fn with_rows(path: impl Into<PathBuf>, rows: Vec<CsvEntryRow>) -> Self {
        Self {
            dialog_path: Mutex::new(Some(path.into())),
            rows: Mutex::new(rows),
            exported: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CsvExchange for RecordingCsvExchange {
    async fn export_csv(
        &self,
        entries: &[TimeEntry],
        projects: &[Project],
    ) -> DomainResult<PathBuf> {
        self.exported.lock().push((entries.len(), projects.len()));
        Ok(PathBuf::from("export.csv"))
    }

    async fn import_csv(&self, _path: &Path) -> DomainResult<Vec<CsvEntryRow>> {
        Ok(self.rows.lock().clone())
    }

    async fn show_open_file_dialog(&self) -> DomainResult<Option<PathBuf>> {
        Ok(self.dialog_path.lock().clone())
    }
}

/// A deterministic weekday instant so tests never straddle a real midnight.
pub fn base_instant() -> DateTime<Local> {
    // Monday 2025-06-02, 09:00 local.
    hourglass_common::day_start(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()) + Duration::hours(9)
}

pub fn test_config(data_dir: &Path) -> Config {
    Config {
        storage: StorageConfig {
            data_dir: data_dir.to_path_buf(),
            save_debounce_ms: 50,
            allow_test_mode: true,
        },
        timer: TimerConfig { tick_interval_ms: 1_000 },
    }
}

/// Context plus the doubles the tests poke at. The temp directory lives as
/// long as the fixture.
pub struct TestFixture {
    pub ctx: Arc<AppContext>,
    pub clock: TestClock,
    pub csv: Arc<RecordingCsvExchange>,
    pub dir: tempfile::TempDir,
}

/// Install a subscriber once so failing runs show the structured logs.
/// `RUST_LOG` filters as usual; later calls are no-ops.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub async fn setup() -> TestFixture {
    setup_with_csv(Arc::new(RecordingCsvExchange::default())).await
}

pub async fn setup_with_csv(csv: Arc<RecordingCsvExchange>) -> TestFixture {
    init_tracing();
    let dir = tempfile::tempdir().expect("failed to create temp data directory");
    let clock = TestClock::new(base_instant());
    let ctx = AppContext::new_with_ports(
        test_config(dir.path()),
        Arc::clone(&csv) as Arc<dyn CsvExchange>,
        Arc::new(clock.clone()),
    )
    .await
    .expect("failed to initialise AppContext");

    TestFixture { ctx, clock, csv, dir }
}

/// Rebuild the context over an existing data directory, keeping the clock.
pub async fn reopen(fixture: &TestFixture) -> Arc<AppContext> {
    AppContext::new_with_ports(
        test_config(fixture.dir.path()),
        Arc::clone(&fixture.csv) as Arc<dyn CsvExchange>,
        Arc::new(fixture.clock.clone()),
    )
    .await
    .expect("failed to reopen AppContext")
}
