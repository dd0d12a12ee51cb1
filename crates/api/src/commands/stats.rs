//! Aggregate statistics commands
//!
//! Every command here reads a snapshot of the active universe and hands it
//! to the pure analytics functions with the context clock's `now`, so the
//! results are re-derivable and never cached.

use std::sync::Arc;

use chrono::NaiveDate;
use hourglass_common::{local_date, DateRange};
use hourglass_core::analytics;
use hourglass_domain::{
    DashboardStats, DayBucket, HeatmapData, ProjectHours, Result, WeekBucket,
};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Everything the dashboard shows for one day, bundled in a single call.
pub async fn get_dashboard_stats(ctx: &Arc<AppContext>, day: NaiveDate) -> Result<DashboardStats> {
    execute_command("stats::get_dashboard_stats", || async move {
        let entries = ctx.store.entries();
        let projects = ctx.store.projects();
        let now = ctx.clock.now();

        Ok(DashboardStats {
            day,
            daily_hours: analytics::daily_work_hours(&entries, day, now),
            daily_project_hours: analytics::daily_project_hours(&entries, &projects, day, now),
            session_stats: analytics::session_stats(&entries, day, now),
            target: analytics::target_summary(&entries, &projects, day, now),
        })
    })
    .await
}

/// Hours per project across an inclusive date range, sorted descending.
pub async fn get_project_distribution(
    ctx: &Arc<AppContext>,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<ProjectHours>> {
    execute_command("stats::get_project_distribution", || async move {
        let entries = ctx.store.entries();
        let projects = ctx.store.projects();
        Ok(analytics::project_distribution(
            &entries,
            &projects,
            DateRange::new(start, end),
            ctx.clock.now(),
        ))
    })
    .await
}

/// Daily totals for the 7 days beginning at `week_start`.
pub async fn get_weekly_distribution(
    ctx: &Arc<AppContext>,
    week_start: NaiveDate,
) -> Result<Vec<DayBucket>> {
    execute_command("stats::get_weekly_distribution", || async move {
        Ok(analytics::weekly_distribution(&ctx.store.entries(), week_start, ctx.clock.now()))
    })
    .await
}

/// Week-of-month totals for the month containing `month_day`.
pub async fn get_monthly_distribution(
    ctx: &Arc<AppContext>,
    month_day: NaiveDate,
) -> Result<Vec<WeekBucket>> {
    execute_command("stats::get_monthly_distribution", || async move {
        Ok(analytics::monthly_distribution(&ctx.store.entries(), month_day, ctx.clock.now()))
    })
    .await
}

/// Sunday-aligned heatmap grid over the rolling 12-month window ending
/// today.
pub async fn get_heatmap(ctx: &Arc<AppContext>) -> Result<HeatmapData> {
    execute_command("stats::get_heatmap", || async move {
        let now = ctx.clock.now();
        let range = analytics::rolling_12_month_range(local_date(now));
        Ok(analytics::generate_heatmap_data(&ctx.store.entries(), range, now))
    })
    .await
}
