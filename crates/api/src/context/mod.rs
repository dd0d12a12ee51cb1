//! Application context - dependency injection container

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use hourglass_core::storage::ports::{CsvExchange, PersistenceBackend};
use hourglass_core::timer::ports::{Clock, HostBridge, SystemClock};
use hourglass_core::timer::service::TimerService;
use hourglass_domain::{
    Config, CsvEntryRow, DataMode, HourglassError, Project, Result, TimeEntry,
};
use hourglass_infra::{
    DataStore, JsonFileBackend, LocalStateStore, NullHostBridge, TimerTicker, TimerTickerConfig,
};
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Application context - holds all services and dependencies
///
/// Explicitly constructed and passed around rather than living in a
/// process-wide singleton, so tests can build isolated instances against
/// temporary directories.
pub struct AppContext {
    pub config: Config,
    pub backend: Arc<dyn PersistenceBackend>,
    pub store: Arc<DataStore>,
    pub state: Arc<LocalStateStore>,
    pub timer: Arc<TimerService>,
    pub bridge: Arc<NullHostBridge>,
    pub clock: Arc<dyn Clock>,
    pub csv: Arc<dyn CsvExchange>,

    ticker: Mutex<TimerTicker>,
    stop_relay: CancellationToken,
}

/// Start the tick scheduler with a fail-fast timeout.
async fn start_ticker(timer: Arc<TimerService>, interval_ms: u64) -> Result<TimerTicker> {
    let config = TimerTickerConfig { interval: Duration::from_millis(interval_ms.max(1)) };
    let mut ticker = TimerTicker::new(timer, config);

    let start_timeout = Duration::from_secs(10);
    tokio::time::timeout(start_timeout, ticker.start())
        .await
        .map_err(|_| {
            tracing::error!(timeout_secs = 10, "TimerTicker start timed out");
            HourglassError::Internal("TimerTicker start timed out after 10s".into())
        })?
        .map_err(|err| {
            tracing::error!(error = %err, "failed to start TimerTicker");
            HourglassError::Internal(format!("failed to start TimerTicker: {err}"))
        })?;

    Ok(ticker)
}

/// Placeholder CSV exchange until a host shell attaches a real one.
///
/// Import and export report the missing capability; the file dialog
/// behaves as if the user cancelled.
#[derive(Default)]
struct HostlessCsvExchange;

#[async_trait]
impl CsvExchange for HostlessCsvExchange {
    async fn export_csv(&self, _entries: &[TimeEntry], _projects: &[Project]) -> Result<PathBuf> {
        Err(HourglassError::Capability("no CSV host attached".into()))
    }

    async fn import_csv(&self, _path: &Path) -> Result<Vec<CsvEntryRow>> {
        Err(HourglassError::Capability("no CSV host attached".into()))
    }

    async fn show_open_file_dialog(&self) -> Result<Option<PathBuf>> {
        tracing::debug!("HostlessCsvExchange::show_open_file_dialog (placeholder, no dialog)");
        Ok(None)
    }
}

impl AppContext {
    /// Create a new application context with environment configuration
    pub async fn new() -> Result<Arc<Self>> {
        Self::new_with_config(Config::from_env()).await
    }

    /// Create a new application context with custom configuration
    ///
    /// This method is primarily for testing, allowing tests to point the
    /// data directory at a temporary location.
    pub async fn new_with_config(config: Config) -> Result<Arc<Self>> {
        Self::new_with_ports(config, Arc::new(HostlessCsvExchange), Arc::new(SystemClock)).await
    }

    /// Create a new application context with injected ports
    ///
    /// Tests use this to supply a controlled clock and a CSV exchange
    /// double instead of the hostless placeholders.
    pub async fn new_with_ports(
        config: Config,
        csv: Arc<dyn CsvExchange>,
        clock: Arc<dyn Clock>,
    ) -> Result<Arc<Self>> {
        // Local state first: the persisted test-mode flag decides which
        // universe the store exposes on startup.
        let state = Arc::new(LocalStateStore::new(&config.storage.data_dir));
        state.init().await?;

        let requested_mode =
            if state.test_mode() { DataMode::Test } else { DataMode::Production };

        let backend: Arc<dyn PersistenceBackend> =
            Arc::new(JsonFileBackend::new(&config.storage.data_dir));
        let store = DataStore::load(
            Arc::clone(&backend),
            requested_mode,
            config.storage.allow_test_mode,
            Duration::from_millis(config.storage.save_debounce_ms),
        )
        .await?;

        let bridge = Arc::new(NullHostBridge::new());

        let timer = Arc::new(TimerService::new(
            Arc::clone(&store) as Arc<dyn hourglass_core::timer::ports::ProjectCatalog>,
            Arc::clone(&store) as Arc<dyn hourglass_core::timer::ports::EntrySink>,
            Arc::clone(&state) as Arc<dyn hourglass_core::timer::ports::SessionStore>,
            Arc::clone(&bridge) as Arc<dyn hourglass_core::timer::ports::HostBridge>,
            Arc::clone(&clock),
        ));

        // Crash recovery before anything can tick: a persisted running
        // session either resumes or is discarded here.
        let recovered = timer.recover().await?;
        if recovered.is_running {
            info!(project_id = ?recovered.project_id, "resumed timer session from saved state");
        }

        // Start the tick scheduler (fail-fast)
        let ticker = start_ticker(Arc::clone(&timer), config.timer.tick_interval_ms).await?;

        let stop_relay = CancellationToken::new();
        // Detached; the token cancels it at shutdown.
        let _relay_task = Self::spawn_stop_relay(&bridge, Arc::clone(&timer), stop_relay.clone());

        Ok(Arc::new(Self {
            config,
            backend,
            store,
            state,
            timer,
            bridge,
            clock,
            csv,
            ticker: Mutex::new(ticker),
            stop_relay,
        }))
    }

    /// Relay tray-initiated stop requests to the timer service.
    ///
    /// Best-effort: a stop that fails (no timer running, sub-minimum
    /// session) is logged and the relay keeps listening.
    fn spawn_stop_relay(
        bridge: &NullHostBridge,
        timer: Arc<TimerService>,
        cancel: CancellationToken,
    ) -> tokio::task::JoinHandle<()> {
        let mut requests = bridge.subscribe_stop_requests();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    request = requests.recv() => match request {
                        Ok(()) => {
                            if let Err(err) = timer.stop().await {
                                warn!(error = %err, "host stop request not honored");
                            }
                        }
                        Err(RecvError::Lagged(skipped)) => {
                            warn!(skipped, "stop-request relay lagged");
                        }
                        Err(RecvError::Closed) => break,
                    },
                }
            }
        })
    }

    /// Shutdown the application context gracefully
    ///
    /// Stops the tick scheduler, cancels the stop-request relay, and
    /// flushes any pending debounced save so nothing writes after
    /// teardown. Dropping the context without calling this still cancels
    /// the background tasks via their `Drop` impls; the explicit call
    /// only adds the final flush.
    pub async fn shutdown(&self) -> Result<()> {
        info!("shutting down application context");

        self.stop_relay.cancel();

        let mut ticker = self.ticker.lock().await;
        if ticker.is_running() {
            if let Err(err) = ticker.stop().await {
                warn!(error = %err, "ticker did not stop cleanly");
            }
        }
        drop(ticker);

        self.store.flush().await?;
        Ok(())
    }
}
