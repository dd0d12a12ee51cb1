//! Timer lifecycle
//!
//! One controller owns the start/stop state machine; presentation
//! components subscribe to its event stream instead of re-implementing
//! interval logic.

pub mod ports;
pub mod service;

pub use ports::{Clock, EntrySink, HostBridge, ProjectCatalog, SessionStore, SystemClock};
pub use service::{TickOutcome, TimerEvent, TimerService};
