//! Settings commands
//!
//! Settings are persisted through the backend contract with explicit write
//! commands. Nothing here writes implicitly on reads or renders.

use std::sync::Arc;

use hourglass_domain::{Result, Settings, ThemeMode};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Load the persisted settings, falling back to defaults when absent.
pub async fn get_settings(ctx: &Arc<AppContext>) -> Result<Settings> {
    execute_command("settings::get_settings", || async move {
        ctx.backend.load_settings().await
    })
    .await
}

/// Persist the theme preference.
pub async fn set_theme(ctx: &Arc<AppContext>, theme: ThemeMode) -> Result<Settings> {
    execute_command("settings::set_theme", || async move {
        let mut settings = ctx.backend.load_settings().await?;
        settings.theme = theme;
        ctx.backend.save_settings(&settings).await?;
        Ok(settings)
    })
    .await
}

/// Persist the page the user last had open.
pub async fn set_last_active_page(ctx: &Arc<AppContext>, page: String) -> Result<Settings> {
    execute_command("settings::set_last_active_page", || async move {
        let mut settings = ctx.backend.load_settings().await?;
        settings.last_active_page = page;
        ctx.backend.save_settings(&settings).await?;
        Ok(settings)
    })
    .await
}
