//! # Hourglass Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The analytics engine (pure functions over entries and projects)
//! - The calendar-day time-entry splitter
//! - The timer lifecycle service
//! - Port/adapter interfaces (traits)
//!
//! ## Architecture Principles
//! - Only depends on `hourglass-common` and `hourglass-domain`
//! - No filesystem, database, or platform code
//! - All external collaborators behind traits
//! - Pure, testable business logic

pub mod analytics;
pub mod splitter;
pub mod storage;
pub mod timer;

// Re-export specific items to avoid ambiguity
pub use splitter::{split_into_entries, split_span, SplitSegment};
pub use storage::ports::{CsvExchange, PersistenceBackend};
pub use timer::ports::{Clock, EntrySink, HostBridge, ProjectCatalog, SessionStore, SystemClock};
pub use timer::service::{TickOutcome, TimerEvent, TimerService};
