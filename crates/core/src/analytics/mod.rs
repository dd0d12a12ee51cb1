//! Analytics engine
//!
//! Pure functions over `(entries, projects, range)`. Nothing here keeps
//! state or mutates its inputs; functions that must measure still-open
//! entries take `now` explicitly so results are re-derivable under test.

pub mod daily;
pub mod distribution;
pub mod heatmap;
pub mod targets;

pub use daily::{average_work_session, daily_project_hours, daily_work_hours, longest_work_session, session_stats};
pub use distribution::{monthly_distribution, project_distribution, week_of_month, weekly_distribution};
pub use heatmap::{generate_heatmap_data, heatmap_level, rolling_12_month_range};
pub use targets::{
    monthly_target_hours, predict_completion_date, recommended_daily_hours, remaining_working_days,
    target_summary, total_monthly_target,
};
