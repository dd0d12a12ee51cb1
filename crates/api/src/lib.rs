//! # Hourglass API
//!
//! Application layer - command facade and composition root.
//!
//! This crate contains:
//! - Async commands consumed by the host shell
//! - Application context (dependency injection)
//! - Structured command logging
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Provides the command surface for the host shell

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::AppContext;
