//! Domain types and models

pub mod csv;
pub mod entry;
pub mod project;
pub mod session;
pub mod settings;
pub mod stats;

pub use csv::CsvEntryRow;
pub use entry::TimeEntry;
pub use project::Project;
pub use session::TimerSession;
pub use settings::{DataMode, Settings, ThemeMode};
pub use stats::{
    DashboardStats, DayBucket, HeatmapCell, HeatmapData, ProjectHours, SessionStats, StopOutcome,
    TargetSummary, TimerStatus, WeekBucket,
};
