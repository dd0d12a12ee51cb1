//! Data universe commands
//!
//! Test mode exposes a synthetic dataset behind the same interface as
//! production data. Switching is gated by the environment capability flag;
//! the stored flag alone never enables it. Observers react through the
//! store's broadcast event rather than polling.

use std::sync::Arc;

use hourglass_domain::{DataMode, Result};
use tracing::{info, warn};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// The currently active data universe.
pub async fn get_data_mode(ctx: &Arc<AppContext>) -> Result<DataMode> {
    execute_command("data_mode::get_data_mode", || async move { Ok(ctx.store.mode()) }).await
}

/// Switch between the production and test universes.
///
/// Switches the store first (capability check, flush, seed-on-demand,
/// event), then persists the flag so the same universe is exposed on the
/// next start. A failed flag write leaves the switch in effect for this
/// run and is logged, not surfaced.
pub async fn set_data_mode(ctx: &Arc<AppContext>, mode: DataMode) -> Result<DataMode> {
    execute_command("data_mode::set_data_mode", || async move {
        ctx.store.set_mode(mode).await?;
        if let Err(err) = ctx.state.set_test_mode(mode == DataMode::Test).await {
            warn!(error = %err, "failed to persist test-mode flag");
        }
        info!(mode = %mode, "data mode set");
        Ok(mode)
    })
    .await
}
