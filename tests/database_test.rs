// ABOUTME: Integration tests for the database layer
// ABOUTME: Validates CRUD behavior, per-user scoping, and upsert semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use myfit_core::models::{MuscleGroup, User};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

async fn create_user(db: &myfit_server::database::Database, username: &str) -> User {
    let user = User::new(username.into(), "test_hash".into());
    db.create_user(&user).await.unwrap();
    user
}

#[tokio::test]
async fn test_duplicate_username_rejected() {
    let db = common::create_test_database().await;
    create_user(&db, "alice").await;

    let duplicate = User::new("alice".into(), "other_hash".into());
    let err = db.create_user(&duplicate).await.unwrap_err();
    assert_eq!(err.http_status(), 409);
}

#[tokio::test]
async fn test_workout_crud_round_trip() {
    let db = common::create_test_database().await;
    let user = create_user(&db, "alice").await;

    let created = db
        .create_workout(
            user.id,
            date("2024-03-02"),
            &[MuscleGroup::Chest, MuscleGroup::Triceps],
            Some("bench day"),
        )
        .await
        .unwrap();
    assert_eq!(
        created.muscle_groups,
        vec![MuscleGroup::Chest, MuscleGroup::Triceps]
    );

    let listed = db.list_workouts(user.id, None, None).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].notes.as_deref(), Some("bench day"));

    let updated = db
        .update_workout(user.id, created.id, &[MuscleGroup::Back], None)
        .await
        .unwrap();
    assert_eq!(updated.muscle_groups, vec![MuscleGroup::Back]);
    assert_eq!(updated.notes, None);

    db.delete_workout(user.id, created.id).await.unwrap();
    assert!(db.list_workouts(user.id, None, None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_workout_date_range_filter() {
    let db = common::create_test_database().await;
    let user = create_user(&db, "alice").await;

    for day in ["2024-03-01", "2024-03-05", "2024-03-10"] {
        db.create_workout(user.id, date(day), &[MuscleGroup::Legs], None)
            .await
            .unwrap();
    }

    let bounded = db
        .list_workouts(user.id, Some(date("2024-03-02")), Some(date("2024-03-09")))
        .await
        .unwrap();
    assert_eq!(bounded.len(), 1);
    assert_eq!(bounded[0].date, date("2024-03-05"));

    let newest_first = db.list_workouts(user.id, None, None).await.unwrap();
    assert_eq!(newest_first[0].date, date("2024-03-10"));
}

#[tokio::test]
async fn test_workouts_scoped_per_user() {
    let db = common::create_test_database().await;
    let alice = create_user(&db, "alice").await;
    let bob = create_user(&db, "bob").await;

    let workout = db
        .create_workout(alice.id, date("2024-03-02"), &[MuscleGroup::Abs], None)
        .await
        .unwrap();

    assert!(db.list_workouts(bob.id, None, None).await.unwrap().is_empty());

    // Bob cannot update or delete Alice's entry
    let err = db
        .update_workout(bob.id, workout.id, &[MuscleGroup::Back], None)
        .await
        .unwrap_err();
    assert_eq!(err.http_status(), 404);
    let err = db.delete_workout(bob.id, workout.id).await.unwrap_err();
    assert_eq!(err.http_status(), 404);
}

#[tokio::test]
async fn test_weight_logs_allow_multiple_per_date() {
    let db = common::create_test_database().await;
    let user = create_user(&db, "alice").await;

    db.create_weight_log(user.id, date("2024-03-02"), 80.0, None)
        .await
        .unwrap();
    db.create_weight_log(user.id, date("2024-03-02"), 79.8, Some("evening"))
        .await
        .unwrap();

    let logs = db
        .list_weight_logs(user.id, None, None, None)
        .await
        .unwrap();
    assert_eq!(logs.len(), 2);

    let limited = db
        .list_weight_logs(user.id, None, None, Some(1))
        .await
        .unwrap();
    assert_eq!(limited.len(), 1);
}

#[tokio::test]
async fn test_hydration_defaults_and_upsert() {
    let db = common::create_test_database().await;
    let user = create_user(&db, "alice").await;
    let day = date("2024-03-02");

    let empty = db.get_hydration(user.id, day).await.unwrap();
    assert_eq!(empty.volume_ml, 0);
    assert_eq!(empty.goal_ml, 2500);

    db.upsert_hydration(user.id, day, 750, 2500).await.unwrap();
    db.upsert_hydration(user.id, day, 1500, 3000).await.unwrap();

    let log = db.get_hydration(user.id, day).await.unwrap();
    assert_eq!(log.volume_ml, 1500);
    assert_eq!(log.goal_ml, 3000);
}

#[tokio::test]
async fn test_supplements_upsert_by_day() {
    let db = common::create_test_database().await;
    let user = create_user(&db, "alice").await;
    let day = date("2024-03-02");

    let empty = db.get_supplements(user.id, day).await.unwrap();
    assert!(!empty.taken_morning && !empty.taken_evening);

    db.upsert_supplements(user.id, day, true, false).await.unwrap();
    db.upsert_supplements(user.id, day, true, true).await.unwrap();

    let log = db.get_supplements(user.id, day).await.unwrap();
    assert!(log.taken_morning && log.taken_evening);
}

#[tokio::test]
async fn test_plans_seed_exactly_once() {
    let db = common::create_test_database().await;
    let user = create_user(&db, "alice").await;

    let first = db.list_plans(user.id).await.unwrap();
    assert_eq!(first.len(), 5);
    assert!(first.iter().all(|p| !p.exercises.is_empty()));

    // A second listing must not reseed
    let second = db.list_plans(user.id).await.unwrap();
    assert_eq!(second.len(), 5);
    assert_eq!(
        first.iter().map(|p| p.id).collect::<Vec<_>>(),
        second.iter().map(|p| p.id).collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn test_plan_exercise_ordering_and_removal() {
    let db = common::create_test_database().await;
    let user = create_user(&db, "alice").await;

    let plans = db.list_plans(user.id).await.unwrap();
    let plan = &plans[0];
    let last_index = plan.exercises.last().unwrap().order_index;

    let added = db
        .add_plan_exercise(user.id, plan.id, "Dips", 3, Some(8), Some(12), None)
        .await
        .unwrap();
    assert_eq!(added.order_index, last_index + 1);

    db.delete_plan_exercise(user.id, plan.id, added.id)
        .await
        .unwrap();
    let err = db
        .delete_plan_exercise(user.id, plan.id, added.id)
        .await
        .unwrap_err();
    assert_eq!(err.http_status(), 404);
}

#[tokio::test]
async fn test_file_backed_database_persists_across_reopen() {
    common::init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("myfit.db").display());

    let user_id = {
        let db = myfit_server::database::Database::new(&url).await.unwrap();
        let user = create_user(&db, "alice").await;
        db.create_workout(user.id, date("2024-03-02"), &[MuscleGroup::Chest], None)
            .await
            .unwrap();
        user.id
    };

    let reopened = myfit_server::database::Database::new(&url).await.unwrap();
    let workouts = reopened.list_workouts(user_id, None, None).await.unwrap();
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0].muscle_groups, vec![MuscleGroup::Chest]);
}

#[tokio::test]
async fn test_settings_default_and_update() {
    let db = common::create_test_database().await;
    let user = create_user(&db, "alice").await;

    let defaults = db.get_settings(user.id).await.unwrap();
    assert_eq!(defaults.weekly_goal, 4);

    db.update_settings(user.id, 6).await.unwrap();
    assert_eq!(db.get_settings(user.id).await.unwrap().weekly_goal, 6);
}
