//! CSV exchange commands
//!
//! File parsing and dialogs live on the host side behind the `CsvExchange`
//! port; these commands only move data between the row shape and the
//! store. Imported rows are validated with the same rules as manual
//! entries, and rows that fail validation are counted rather than aborting
//! the whole import.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use hourglass_common::day_start;
use hourglass_domain::validation::{validate_min_duration, validate_span_order};
use hourglass_domain::{CsvEntryRow, Project, Result, TimeEntry};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Result of an import run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvImportOutcome {
    pub imported: usize,
    pub skipped: usize,
    pub projects_created: usize,
}

/// Export the active universe's entries and projects; returns the path the
/// host wrote.
pub async fn export_csv(ctx: &Arc<AppContext>) -> Result<PathBuf> {
    execute_command("csv::export_csv", || async move {
        let entries = ctx.store.entries();
        let projects = ctx.store.projects();
        let path = ctx.csv.export_csv(&entries, &projects).await?;
        info!(entries = entries.len(), path = %path.display(), "entries exported");
        Ok(path)
    })
    .await
}

/// Ask the host for a file and import its rows.
///
/// Returns `None` when the user cancels the dialog. Projects named in the
/// file but unknown to the store are created with zero capacity.
pub async fn import_csv(ctx: &Arc<AppContext>) -> Result<Option<CsvImportOutcome>> {
    execute_command("csv::import_csv", || async move {
        let Some(path) = ctx.csv.show_open_file_dialog().await? else {
            return Ok(None);
        };
        let rows = ctx.csv.import_csv(&path).await?;
        let outcome = import_rows(ctx, rows).await?;
        info!(
            imported = outcome.imported,
            skipped = outcome.skipped,
            projects_created = outcome.projects_created,
            "CSV import finished"
        );
        Ok(Some(outcome))
    })
    .await
}

async fn import_rows(ctx: &Arc<AppContext>, rows: Vec<CsvEntryRow>) -> Result<CsvImportOutcome> {
    let mut projects = ctx.store.projects();
    let mut outcome = CsvImportOutcome { imported: 0, skipped: 0, projects_created: 0 };
    let mut entries = Vec::new();

    for row in rows {
        let Some((start, end)) = parse_row_span(&row) else {
            warn!(date = %row.date, project = %row.project_name, "skipping unparseable row");
            outcome.skipped += 1;
            continue;
        };
        if validate_span_order(start, end).is_err() || validate_min_duration(start, end).is_err() {
            warn!(date = %row.date, project = %row.project_name, "skipping invalid span");
            outcome.skipped += 1;
            continue;
        }

        let project_id = match projects.iter().find(|p| p.name == row.project_name) {
            Some(project) => project.id.clone(),
            None => {
                let created = ctx
                    .store
                    .create_project(Project::new(&row.project_name, &row.project_description, 0.0))
                    .await?;
                outcome.projects_created += 1;
                let id = created.id.clone();
                projects.push(created);
                id
            }
        };

        entries.push(TimeEntry::new(project_id, &row.notes, start, end));
        outcome.imported += 1;
    }

    ctx.store.add_entries(entries).await?;
    Ok(outcome)
}

/// Parse a row's `date` + `start_time`/`end_time` fields into a local span.
///
/// Times are applied as offsets from the local day start, so a row never
/// lands on a neighboring day through DST resolution. End-before-start
/// rows parse fine here and are rejected by span validation.
fn parse_row_span(
    row: &CsvEntryRow,
) -> Option<(chrono::DateTime<chrono::Local>, chrono::DateTime<chrono::Local>)> {
    let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d").ok()?;
    let start_tod = NaiveTime::parse_from_str(&row.start_time, "%H:%M").ok()?;
    let end_tod = NaiveTime::parse_from_str(&row.end_time, "%H:%M").ok()?;

    let midnight = NaiveTime::MIN;
    let day = day_start(date);
    let start = day + (start_tod - midnight);
    let end = day + (end_tod - midnight);
    Some((start, end))
}
