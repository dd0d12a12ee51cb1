//! Mock port implementations for testing
//!
//! Provides in-memory mocks for the timer ports, enabling deterministic
//! unit tests without filesystem or host dependencies.

pub mod stores;

pub use stores::{FixedClock, MockBridge, MockCatalog, MockEntrySink, MockSessionStore};
