//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Hourglass
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum HourglassError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Project is archived: {0}")]
    ProjectArchived(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Capability not available: {0}")]
    Capability(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Hourglass operations
pub type Result<T> = std::result::Result<T, HourglassError>;
