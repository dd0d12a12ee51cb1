//! Statistics command integration tests
//!
//! Seeds the store through the command surface and checks the aggregate
//! shapes handed to the dashboard.

mod support;

use chrono::{Datelike, Duration, NaiveDate};
use hourglass_api::commands;
use hourglass_common::local_date;
use hourglass_core::Clock;
use support::{base_instant, setup};

#[tokio::test]
async fn dashboard_bundles_the_day() {
    let f = setup().await;
    let alpha =
        commands::create_project(&f.ctx, "Alpha".into(), String::new(), 0.5).await.unwrap();
    let beta = commands::create_project(&f.ctx, "Beta".into(), String::new(), 0.25).await.unwrap();

    let start = base_instant();
    let day = local_date(start);
    commands::create_time_entry(&f.ctx, alpha.id.clone(), "a".into(), start, start + Duration::hours(3))
        .await
        .unwrap();
    commands::create_time_entry(
        &f.ctx,
        beta.id.clone(),
        "b".into(),
        start + Duration::hours(4),
        start + Duration::hours(5),
    )
    .await
    .unwrap();

    let stats = commands::get_dashboard_stats(&f.ctx, day).await.unwrap();
    assert_eq!(stats.day, day);
    assert_eq!(stats.daily_hours, 4.0);
    assert_eq!(stats.daily_project_hours.len(), 2);
    assert_eq!(stats.daily_project_hours[0].name, "Alpha");
    assert_eq!(stats.session_stats.longest_minutes, 180);
    assert_eq!(stats.session_stats.average_minutes, 120);
    // 0.5 + 0.25 of the 140-hour baseline.
    assert_eq!(stats.target.target_hours, 105.0);
    assert_eq!(stats.target.current_hours, 4.0);

    f.ctx.shutdown().await.unwrap();
}

#[tokio::test]
async fn distribution_excludes_archived_projects() {
    let f = setup().await;
    let kept = commands::create_project(&f.ctx, "Kept".into(), String::new(), 0.5).await.unwrap();
    let gone = commands::create_project(&f.ctx, "Gone".into(), String::new(), 0.5).await.unwrap();

    let start = base_instant();
    commands::create_time_entry(&f.ctx, kept.id.clone(), String::new(), start, start + Duration::hours(2))
        .await
        .unwrap();
    commands::create_time_entry(
        &f.ctx,
        gone.id.clone(),
        String::new(),
        start + Duration::hours(3),
        start + Duration::hours(4),
    )
    .await
    .unwrap();
    commands::archive_project(&f.ctx, gone.id).await.unwrap();

    let day = local_date(start);
    let rows = commands::get_project_distribution(&f.ctx, day, day).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Kept");
    assert_eq!(rows[0].hours, 2.0);

    f.ctx.shutdown().await.unwrap();
}

#[tokio::test]
async fn weekly_and_monthly_tilings() {
    let f = setup().await;
    let project =
        commands::create_project(&f.ctx, "Tiled".into(), String::new(), 0.5).await.unwrap();

    let start = base_instant();
    commands::create_time_entry(&f.ctx, project.id.clone(), String::new(), start, start + Duration::hours(2))
        .await
        .unwrap();

    // Week starting Sunday 2025-06-01; the entry sits on Monday the 2nd.
    let week_start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let week = commands::get_weekly_distribution(&f.ctx, week_start).await.unwrap();
    assert_eq!(week.len(), 7);
    assert_eq!(week[1].date, local_date(start));
    assert_eq!(week[1].hours, 2.0);

    // June 2025 starts on a Sunday: five month-relative weeks.
    let month = commands::get_monthly_distribution(&f.ctx, week_start).await.unwrap();
    assert_eq!(month.len(), 5);
    assert_eq!(month[0].hours, 2.0);

    f.ctx.shutdown().await.unwrap();
}

#[tokio::test]
async fn heatmap_covers_the_rolling_year() {
    let f = setup().await;
    let project =
        commands::create_project(&f.ctx, "Heat".into(), String::new(), 0.5).await.unwrap();
    let start = base_instant();
    commands::create_time_entry(&f.ctx, project.id, String::new(), start, start + Duration::hours(5))
        .await
        .unwrap();

    let heatmap = commands::get_heatmap(&f.ctx).await.unwrap();
    let today = local_date(f.clock.now());
    assert_eq!(heatmap.range.end, today);
    assert_eq!(heatmap.range.start, today - chrono::Months::new(12) + Duration::days(1));

    for week in &heatmap.weeks {
        assert_eq!(week.len(), 7);
    }
    let cell = heatmap
        .weeks
        .iter()
        .flatten()
        .flatten()
        .find(|cell| cell.date == local_date(start))
        .expect("entry day missing from the grid");
    assert_eq!(cell.hours, 5.0);
    assert_eq!(cell.level, 3);
    // The grid is Sunday-aligned: the first row begins on a Sunday or pads
    // up to the range start.
    assert_eq!(heatmap.range.start.weekday().num_days_from_sunday() as usize, {
        heatmap.weeks[0].iter().take_while(|cell| cell.is_none()).count()
    });

    f.ctx.shutdown().await.unwrap();
}
