use std::time::Duration;

use hourglass_domain::HourglassError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"projects::create_project"`).
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
///
/// The helper keeps the command wrappers concise and the log shape uniform.
/// Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `HourglassError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &HourglassError) -> &'static str {
    match error {
        HourglassError::Storage(_) => "storage",
        HourglassError::Serialization(_) => "serialization",
        HourglassError::Config(_) => "config",
        HourglassError::NotFound(_) => "not_found",
        HourglassError::ProjectArchived(_) => "project_archived",
        HourglassError::InvalidInput(_) => "invalid_input",
        HourglassError::Capability(_) => "capability",
        HourglassError::Internal(_) => "internal",
    }
}
