//! CSV exchange row shape
//!
//! The engine does not parse CSV files itself; the host-side importer hands
//! rows over in this shape and the exporter consumes entries and projects
//! through the same contract.

use serde::{Deserialize, Serialize};

/// One row of an imported CSV file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvEntryRow {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Start of the span, `HH:MM`.
    pub start_time: String,
    /// End of the span, `HH:MM`.
    pub end_time: String,
    pub duration_minutes: i64,
    pub project_name: String,
    pub project_description: String,
    pub notes: String,
}
