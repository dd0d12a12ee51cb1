//! Timer lifecycle commands
//!
//! Thin wrappers over the timer service; the service owns the state
//! machine and the tick scheduler drives elapsed-time recomputation in the
//! background. Presentation components subscribe to the service's event
//! stream for transitions instead of polling these commands.

use std::sync::Arc;

use hourglass_domain::{Result, StopOutcome, TimerStatus};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Start the timer for a project. A session already running is stopped
/// first; missing or archived projects are rejected.
pub async fn start_timer(ctx: &Arc<AppContext>, project_id: String) -> Result<TimerStatus> {
    execute_command("timer::start_timer", || async move { ctx.timer.start(&project_id).await }).await
}

/// Stop the running timer and commit its span as day-bounded entries.
pub async fn stop_timer(ctx: &Arc<AppContext>) -> Result<StopOutcome> {
    execute_command("timer::stop_timer", || async move { ctx.timer.stop().await }).await
}

/// Snapshot of the current timer state.
pub async fn get_timer_status(ctx: &Arc<AppContext>) -> Result<TimerStatus> {
    execute_command("timer::get_timer_status", || async move { Ok(ctx.timer.status().await) }).await
}
