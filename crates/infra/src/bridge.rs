//! Host bridge implementations
//!
//! The tray integration is owned by the host shell; the engine only needs
//! a best-effort notification surface. This implementation logs transitions
//! and relays host-initiated stop requests through a broadcast channel, so
//! headless runs and tests work without any host process attached.

use async_trait::async_trait;
use hourglass_core::timer::ports::HostBridge;
use tokio::sync::broadcast;
use tracing::debug;

/// Logging, no-op implementation of [`HostBridge`].
pub struct NullHostBridge {
    stop_requests: broadcast::Sender<()>,
}

impl NullHostBridge {
    /// Create a bridge with an open stop-request channel.
    pub fn new() -> Self {
        let (stop_requests, _) = broadcast::channel(4);
        Self { stop_requests }
    }

    /// Forward a host-initiated stop request (e.g. a tray menu click) to
    /// subscribers. Dropped silently when nobody listens.
    pub fn request_stop(&self) {
        let _ = self.stop_requests.send(());
    }
}

impl Default for NullHostBridge {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostBridge for NullHostBridge {
    async fn timer_started(&self, project_name: &str) {
        debug!(project = project_name, "host bridge: timer started");
    }

    async fn timer_stopped(&self) {
        debug!("host bridge: timer stopped");
    }

    fn subscribe_stop_requests(&self) -> broadcast::Receiver<()> {
        self.stop_requests.subscribe()
    }
}
