//! Project management commands

use std::sync::Arc;

use hourglass_domain::{HourglassError, Project, Result};
use tracing::info;

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Get all projects of the active universe, archived ones included.
/// Presentation decides whether to show archived projects; aggregation
/// excludes them on its own.
pub async fn list_projects(ctx: &Arc<AppContext>) -> Result<Vec<Project>> {
    execute_command("projects::list_projects", || async move { Ok(ctx.store.projects()) }).await
}

/// Create a project. Capacity is a fraction of the baseline monthly hours
/// and gets clamped to `[0, 1]`.
pub async fn create_project(
    ctx: &Arc<AppContext>,
    name: String,
    description: String,
    monthly_capacity: f64,
) -> Result<Project> {
    execute_command("projects::create_project", || async move {
        let name = name.trim();
        if name.is_empty() {
            return Err(HourglassError::InvalidInput("project name must not be empty".into()));
        }
        let project = ctx.store.create_project(Project::new(name, description, monthly_capacity)).await?;
        info!(project_id = %project.id, "project created");
        Ok(project)
    })
    .await
}

/// Update a project's name, description, and capacity.
pub async fn update_project(
    ctx: &Arc<AppContext>,
    id: String,
    name: String,
    description: String,
    monthly_capacity: f64,
) -> Result<Project> {
    execute_command("projects::update_project", || async move {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(HourglassError::InvalidInput("project name must not be empty".into()));
        }
        ctx.store
            .update_project(&id, |project| {
                project.name = name;
                project.description = description;
                project.monthly_capacity = monthly_capacity.clamp(0.0, 1.0);
            })
            .await
    })
    .await
}

/// Archive a project. Archived projects drop out of aggregation and can no
/// longer be started against; their entries remain.
pub async fn archive_project(ctx: &Arc<AppContext>, id: String) -> Result<Project> {
    execute_command("projects::archive_project", || async move {
        let project = ctx.store.update_project(&id, Project::archive).await?;
        info!(project_id = %project.id, "project archived");
        Ok(project)
    })
    .await
}

/// Clear a project's archived flag.
pub async fn unarchive_project(ctx: &Arc<AppContext>, id: String) -> Result<Project> {
    execute_command("projects::unarchive_project", || async move {
        ctx.store.update_project(&id, Project::unarchive).await
    })
    .await
}

/// Delete a project, cascading to all of its time entries.
pub async fn delete_project(ctx: &Arc<AppContext>, id: String) -> Result<()> {
    execute_command("projects::delete_project", || async move {
        ctx.store.delete_project(&id).await?;
        info!(project_id = %id, "project deleted with its entries");
        Ok(())
    })
    .await
}
