//! # Hourglass Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The JSON-file persistence backend (atomic writes, corrupt-file
//!   recovery)
//! - The local state store (timer session, test-mode flag)
//! - The debounced dual-universe data store
//! - The timer tick scheduler
//! - A no-op host bridge
//!
//! ## Architecture
//! - Implements traits defined in `hourglass-core`
//! - Contains all "impure" code (filesystem, timers)

pub mod bridge;
pub mod scheduling;
pub mod storage;

// Re-export commonly used items
pub use bridge::NullHostBridge;
pub use scheduling::ticker::{TimerTicker, TimerTickerConfig};
pub use storage::data_store::{DataStore, StoreEvent};
pub use storage::json_backend::JsonFileBackend;
pub use storage::state_store::LocalStateStore;
