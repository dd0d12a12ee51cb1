//! CSV exchange command integration tests
//!
//! The host side is a recording double; these tests cover the row-to-entry
//! conversion and the dialog-cancel path.

mod support;

use std::sync::Arc;

use hourglass_api::commands;
use hourglass_domain::CsvEntryRow;
use support::{setup, setup_with_csv, RecordingCsvExchange};

fn row(date: &str, start: &str, end: &str, project: &str) -> CsvEntryRow {
    CsvEntryRow {
        date: date.into(),
        start_time: start.into(),
        end_time: end.into(),
        duration_minutes: 60,
        project_name: project.into(),
        project_description: "imported project".into(),
        notes: "imported note".into(),
    }
}

#[tokio::test]
async fn cancelled_dialog_imports_nothing() {
    let f = setup().await;
    let outcome = commands::import_csv(&f.ctx).await.unwrap();
    assert!(outcome.is_none());
    assert!(commands::list_time_entries(&f.ctx).await.unwrap().is_empty());
    f.ctx.shutdown().await.unwrap();
}

#[tokio::test]
async fn import_creates_projects_and_entries() {
    let csv = Arc::new(RecordingCsvExchange::with_rows(
        "entries.csv",
        vec![
            row("2025-06-02", "09:00", "11:00", "Imported Alpha"),
            row("2025-06-02", "13:00", "14:30", "Imported Alpha"),
            row("2025-06-03", "10:00", "12:00", "Imported Beta"),
        ],
    ));
    let f = setup_with_csv(csv).await;

    let outcome = commands::import_csv(&f.ctx).await.unwrap().unwrap();
    assert_eq!(outcome.imported, 3);
    assert_eq!(outcome.skipped, 0);
    assert_eq!(outcome.projects_created, 2);

    let projects = commands::list_projects(&f.ctx).await.unwrap();
    assert_eq!(projects.len(), 2);
    let entries = commands::list_time_entries(&f.ctx).await.unwrap();
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|entry| entry.description == "imported note"));

    f.ctx.shutdown().await.unwrap();
}

#[tokio::test]
async fn import_reuses_existing_projects_by_name() {
    let csv = Arc::new(RecordingCsvExchange::with_rows(
        "entries.csv",
        vec![row("2025-06-02", "09:00", "10:00", "Existing")],
    ));
    let f = setup_with_csv(csv).await;
    let existing =
        commands::create_project(&f.ctx, "Existing".into(), String::new(), 0.4).await.unwrap();

    let outcome = commands::import_csv(&f.ctx).await.unwrap().unwrap();
    assert_eq!(outcome.projects_created, 0);
    assert_eq!(outcome.imported, 1);

    let entries = commands::list_time_entries(&f.ctx).await.unwrap();
    assert_eq!(entries[0].project_id, existing.id);

    f.ctx.shutdown().await.unwrap();
}

#[tokio::test]
async fn invalid_rows_are_counted_not_fatal() {
    let csv = Arc::new(RecordingCsvExchange::with_rows(
        "entries.csv",
        vec![
            row("2025-06-02", "09:00", "10:00", "Good"),
            // Unparseable date.
            row("02.06.2025", "09:00", "10:00", "Bad"),
            // End before start.
            row("2025-06-02", "12:00", "11:00", "Bad"),
            // Sub-minimum duration.
            row("2025-06-02", "09:00", "09:00", "Bad"),
        ],
    ));
    let f = setup_with_csv(csv).await;

    let outcome = commands::import_csv(&f.ctx).await.unwrap().unwrap();
    assert_eq!(outcome.imported, 1);
    assert_eq!(outcome.skipped, 3);
    // No project is created for rows that never import.
    assert_eq!(outcome.projects_created, 1);
    assert_eq!(commands::list_time_entries(&f.ctx).await.unwrap().len(), 1);

    f.ctx.shutdown().await.unwrap();
}

#[tokio::test]
async fn export_hands_the_active_universe_to_the_host() {
    let f = setup().await;
    let project =
        commands::create_project(&f.ctx, "Exported".into(), String::new(), 0.5).await.unwrap();
    let start = support::base_instant();
    commands::create_time_entry(
        &f.ctx,
        project.id,
        String::new(),
        start,
        start + chrono::Duration::hours(1),
    )
    .await
    .unwrap();

    let path = commands::export_csv(&f.ctx).await.unwrap();
    assert_eq!(path, std::path::PathBuf::from("export.csv"));
    assert_eq!(*f.csv.exported.lock(), vec![(1, 1)]);

    f.ctx.shutdown().await.unwrap();
}
