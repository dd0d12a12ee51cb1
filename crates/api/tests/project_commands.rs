//! Project command integration tests

mod support;

use chrono::Duration;
use hourglass_api::commands;
use hourglass_domain::HourglassError;
use support::setup;

#[tokio::test]
async fn create_and_list_projects() {
    let f = setup().await;

    let created =
        commands::create_project(&f.ctx, "Client Work".into(), "retainer".into(), 0.5)
            .await
            .unwrap();
    assert_eq!(created.name, "Client Work");
    assert!(!created.is_archived);

    let listed = commands::list_projects(&f.ctx).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);

    f.ctx.shutdown().await.unwrap();
}

#[tokio::test]
async fn create_rejects_blank_name_and_clamps_capacity() {
    let f = setup().await;

    let err = commands::create_project(&f.ctx, "   ".into(), String::new(), 0.5)
        .await
        .unwrap_err();
    assert!(matches!(err, HourglassError::InvalidInput(_)));

    let over = commands::create_project(&f.ctx, "Big".into(), String::new(), 3.0).await.unwrap();
    assert_eq!(over.monthly_capacity, 1.0);

    f.ctx.shutdown().await.unwrap();
}

#[tokio::test]
async fn update_edits_fields() {
    let f = setup().await;
    let project =
        commands::create_project(&f.ctx, "Draft".into(), String::new(), 0.2).await.unwrap();

    let updated = commands::update_project(
        &f.ctx,
        project.id.clone(),
        "Final".into(),
        "renamed".into(),
        0.4,
    )
    .await
    .unwrap();
    assert_eq!(updated.name, "Final");
    assert_eq!(updated.description, "renamed");
    assert_eq!(updated.monthly_capacity, 0.4);

    let err = commands::update_project(&f.ctx, "missing".into(), "X".into(), String::new(), 0.1)
        .await
        .unwrap_err();
    assert!(matches!(err, HourglassError::NotFound(_)));

    f.ctx.shutdown().await.unwrap();
}

#[tokio::test]
async fn archive_blocks_timer_start_until_unarchived() {
    let f = setup().await;
    let project =
        commands::create_project(&f.ctx, "Paused Client".into(), String::new(), 0.3).await.unwrap();

    let archived = commands::archive_project(&f.ctx, project.id.clone()).await.unwrap();
    assert!(archived.is_archived);
    assert!(archived.archived_at.is_some());

    let err = commands::start_timer(&f.ctx, project.id.clone()).await.unwrap_err();
    assert!(matches!(err, HourglassError::ProjectArchived(_)));

    commands::unarchive_project(&f.ctx, project.id.clone()).await.unwrap();
    commands::start_timer(&f.ctx, project.id.clone()).await.unwrap();
    f.clock.advance(Duration::minutes(5));
    commands::stop_timer(&f.ctx).await.unwrap();

    f.ctx.shutdown().await.unwrap();
}

#[tokio::test]
async fn delete_cascades_to_entries() {
    let f = setup().await;
    let project =
        commands::create_project(&f.ctx, "Doomed".into(), String::new(), 0.3).await.unwrap();

    commands::start_timer(&f.ctx, project.id.clone()).await.unwrap();
    f.clock.advance(Duration::minutes(30));
    commands::stop_timer(&f.ctx).await.unwrap();
    assert_eq!(commands::list_time_entries(&f.ctx).await.unwrap().len(), 1);

    commands::delete_project(&f.ctx, project.id.clone()).await.unwrap();
    assert!(commands::list_projects(&f.ctx).await.unwrap().is_empty());
    assert!(commands::list_time_entries(&f.ctx).await.unwrap().is_empty());

    f.ctx.shutdown().await.unwrap();
}

#[tokio::test]
async fn projects_survive_restart() {
    let f = setup().await;
    commands::create_project(&f.ctx, "Persisted".into(), String::new(), 0.6).await.unwrap();
    f.ctx.shutdown().await.unwrap();

    let reopened = support::reopen(&f).await;
    let listed = commands::list_projects(&reopened).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Persisted");
    reopened.shutdown().await.unwrap();
}
