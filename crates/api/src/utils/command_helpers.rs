//! Command execution helpers
//!
//! Provides a single wrapper so every command times its execution and logs
//! the outcome the same way instead of repeating the boilerplate.

use std::time::Instant;

use hourglass_domain::Result as DomainResult;
use tracing::debug;

use crate::utils::logging::{error_label, log_command_execution};

/// Execute a command with automatic timing and logging
///
/// # Example
///
/// ```rust,ignore
/// pub async fn my_command(ctx: &Arc<AppContext>) -> Result<MyResponse> {
///     execute_command("my_module::my_command", || async {
///         ctx.some_service.do_something().await
///     })
///     .await
/// }
/// ```
pub async fn execute_command<F, Fut, T>(command_name: &str, command_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = DomainResult<T>>,
{
    let start = Instant::now();

    let result = command_fn().await;

    let elapsed = start.elapsed();
    let success = result.is_ok();
    if let Err(err) = &result {
        debug!(command = command_name, error_type = error_label(err), "command returned error");
    }
    log_command_execution(command_name, elapsed, success);

    result
}
