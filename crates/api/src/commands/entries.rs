//! Manual time-entry commands
//!
//! Manual entries are single-day by construction: creation validates the
//! span against one calendar day, and edits keep the entry pinned to the
//! day it was created on. Multi-day spans only ever come out of the timer
//! path, already split.

use std::sync::Arc;

use chrono::{DateTime, Local};
use hourglass_domain::validation::{
    validate_min_duration, validate_single_day, validate_span_order,
};
use hourglass_domain::{HourglassError, Result, TimeEntry};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Get all time entries of the active universe.
pub async fn list_time_entries(ctx: &Arc<AppContext>) -> Result<Vec<TimeEntry>> {
    execute_command("entries::list_time_entries", || async move { Ok(ctx.store.entries()) }).await
}

/// Create a manual entry for a project.
pub async fn create_time_entry(
    ctx: &Arc<AppContext>,
    project_id: String,
    description: String,
    start_time: DateTime<Local>,
    end_time: DateTime<Local>,
) -> Result<TimeEntry> {
    execute_command("entries::create_time_entry", || async move {
        validate_span_order(start_time, end_time)?;
        validate_single_day(start_time, end_time)?;
        validate_min_duration(start_time, end_time)?;

        let project = ctx
            .store
            .projects()
            .into_iter()
            .find(|project| project.id == project_id)
            .ok_or_else(|| HourglassError::NotFound(format!("project {project_id}")))?;
        if project.is_archived {
            return Err(HourglassError::ProjectArchived(project.name));
        }

        let entry = TimeEntry::new(project_id, description, start_time, end_time);
        ctx.store.add_entries(vec![entry.clone()]).await?;
        Ok(entry)
    })
    .await
}

/// Edit a manual entry.
///
/// The entry's calendar day is locked at creation: the new span must stay
/// on the day the entry already occupies.
pub async fn update_time_entry(
    ctx: &Arc<AppContext>,
    id: String,
    description: String,
    start_time: DateTime<Local>,
    end_time: DateTime<Local>,
) -> Result<TimeEntry> {
    execute_command("entries::update_time_entry", || async move {
        let existing = ctx
            .store
            .entries()
            .into_iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| HourglassError::NotFound(format!("entry {id}")))?;

        validate_span_order(start_time, end_time)?;
        validate_single_day(start_time, end_time)?;
        validate_min_duration(start_time, end_time)?;
        if start_time.date_naive() != existing.start_time.date_naive() {
            return Err(HourglassError::InvalidInput(format!(
                "entry is locked to {}; move is not allowed",
                existing.start_time.date_naive()
            )));
        }

        let mut updated = existing;
        updated.description = description;
        updated.start_time = start_time;
        updated.end_time = Some(end_time);
        ctx.store.update_entry(updated).await
    })
    .await
}

/// Delete an entry.
pub async fn delete_time_entry(ctx: &Arc<AppContext>, id: String) -> Result<()> {
    execute_command("entries::delete_time_entry", || async move {
        ctx.store.delete_entry(&id).await
    })
    .await
}
