//! Timer tick scheduler
//!
//! Drives the timer service's elapsed-time recompute once per second with
//! lifecycle management. The tick interval and the storage debounce are
//! independent timers; stopping the ticker clears its task so nothing
//! ticks after teardown.

use std::sync::Arc;
use std::time::Duration;

use hourglass_core::timer::service::{TickOutcome, TimerService};
use hourglass_domain::constants::TIMER_TICK_INTERVAL_MS;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Type alias for task handle to avoid complexity warnings
type TaskHandle = Arc<Mutex<Option<JoinHandle<()>>>>;

/// Errors raised by the ticker lifecycle.
#[derive(Debug, Error)]
pub enum TickerError {
    #[error("ticker is already running")]
    AlreadyRunning,

    #[error("ticker is not running")]
    NotRunning,
}

/// Configuration for the timer ticker
#[derive(Debug, Clone)]
pub struct TimerTickerConfig {
    /// Tick interval
    pub interval: Duration,
}

impl Default for TimerTickerConfig {
    fn default() -> Self {
        Self { interval: Duration::from_millis(TIMER_TICK_INTERVAL_MS) }
    }
}

/// Interval scheduler driving [`TimerService::tick`]
pub struct TimerTicker {
    timer: Arc<TimerService>,
    config: TimerTickerConfig,
    cancellation_token: CancellationToken,
    task_handle: TaskHandle,
}

impl TimerTicker {
    /// Create a new ticker for a timer service.
    pub fn new(timer: Arc<TimerService>, config: TimerTickerConfig) -> Self {
        Self {
            timer,
            config,
            cancellation_token: CancellationToken::new(),
            task_handle: Arc::new(Mutex::new(None)),
        }
    }

    /// Start the ticker.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticker is already running.
    pub async fn start(&mut self) -> Result<(), TickerError> {
        if self.is_running() {
            return Err(TickerError::AlreadyRunning);
        }

        info!(interval_ms = self.config.interval.as_millis() as u64, "starting timer ticker");

        // Fresh token so the ticker can be restarted after a stop.
        self.cancellation_token = CancellationToken::new();
        let cancel = self.cancellation_token.clone();
        let timer = Arc::clone(&self.timer);
        let interval = self.config.interval;

        let handle = tokio::spawn(async move {
            Self::tick_loop(timer, interval, cancel).await;
        });
        *self.task_handle.lock().await = Some(handle);
        Ok(())
    }

    /// Stop the ticker gracefully.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticker is not running.
    pub async fn stop(&mut self) -> Result<(), TickerError> {
        if !self.is_running() {
            return Err(TickerError::NotRunning);
        }

        info!("stopping timer ticker");
        self.cancellation_token.cancel();
        if let Some(handle) = self.task_handle.lock().await.take() {
            if let Err(err) = handle.await {
                warn!(error = %err, "ticker task ended abnormally");
            }
        }
        Ok(())
    }

    /// Whether the ticker has an unfinished background task.
    pub fn is_running(&self) -> bool {
        self.task_handle
            .try_lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(|h| !h.is_finished()))
            .unwrap_or(false)
    }

    async fn tick_loop(timer: Arc<TimerService>, interval: Duration, cancel: CancellationToken) {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("tick loop cancelled");
                    break;
                }
                _ = tokio::time::sleep(interval) => {
                    match timer.tick().await {
                        Ok(TickOutcome::AutoStopped(outcome)) => {
                            info!(
                                entries = outcome.entries.len(),
                                "session auto-stopped at the ceiling"
                            );
                        }
                        Ok(_) => {}
                        Err(err) => {
                            // A failed tick must not kill the loop.
                            error!(error = %err, "timer tick failed");
                        }
                    }
                }
            }
        }
    }
}

/// Ensure the ticker is stopped when dropped
impl Drop for TimerTicker {
    fn drop(&mut self) {
        if !self.cancellation_token.is_cancelled() {
            self.cancellation_token.cancel();
        }
    }
}
