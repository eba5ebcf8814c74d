// ABOUTME: Integration tests for workout CRUD and statistics routes
// ABOUTME: Drives the full register -> log -> stats flow through the router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use axum::http::StatusCode;
use chrono::{Days, Utc};
use serde_json::json;

#[tokio::test]
async fn test_workout_crud_over_http() {
    let (app, _resources) = common::create_test_app().await;
    let token = common::register_user(&app, "alice").await;

    let (status, created) = common::request_json(
        &app,
        "POST",
        "/api/workouts",
        Some(&token),
        Some(json!({
            "date": "2024-03-02",
            "muscle_groups": ["chest", "triceps"],
            "notes": "bench day"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["muscle_groups"], json!(["chest", "triceps"]));
    let id = created["id"].as_i64().unwrap();

    let (status, listed) =
        common::request_json(&app, "GET", "/api/workouts", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, by_date) = common::request_json(
        &app,
        "GET",
        "/api/workouts/date/2024-03-02",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_date.as_array().unwrap().len(), 1);

    let (status, updated) = common::request_json(
        &app,
        "PUT",
        &format!("/api/workouts/{id}"),
        Some(&token),
        Some(json!({ "muscle_groups": ["back"] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["muscle_groups"], json!(["back"]));

    let (status, _) = common::request_json(
        &app,
        "DELETE",
        &format!("/api/workouts/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = common::request_json(
        &app,
        "DELETE",
        &format!("/api/workouts/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_muscle_group_is_rejected() {
    let (app, _resources) = common::create_test_app().await;
    let token = common::register_user(&app, "alice").await;

    let (status, body) = common::request_json(
        &app,
        "POST",
        "/api/workouts",
        Some(&token),
        Some(json!({ "date": "2024-03-02", "muscle_groups": ["wings"] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");

    let (status, _) = common::request_json(
        &app,
        "POST",
        "/api/workouts",
        Some(&token),
        Some(json!({ "date": "2024-03-02", "muscle_groups": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_stats_reflect_logged_workouts() {
    let (app, _resources) = common::create_test_app().await;
    let token = common::register_user(&app, "alice").await;

    // Before logging anything: all defaults
    let (status, empty) =
        common::request_json(&app, "GET", "/api/workouts/stats", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(empty["streak"], 0);
    assert_eq!(empty["weekly_pct"], 0);
    assert!(empty["most_trained"].is_null());

    // Log a session today and yesterday
    let today = Utc::now().date_naive();
    let yesterday = today - Days::new(1);
    for (day, group) in [(today, "chest"), (yesterday, "back")] {
        let (status, _) = common::request_json(
            &app,
            "POST",
            "/api/workouts",
            Some(&token),
            Some(json!({ "date": day.to_string(), "muscle_groups": [group] })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, stats) =
        common::request_json(&app, "GET", "/api/workouts/stats", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["streak"], 2);
    assert!(stats["weekly_count"].as_u64().unwrap() >= 1);

    let (status, streak) = common::request_json(
        &app,
        "GET",
        "/api/workouts/stats/streak",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(streak["streak"], 2);
}

#[tokio::test]
async fn test_monthly_stats_endpoint() {
    let (app, _resources) = common::create_test_app().await;
    let token = common::register_user(&app, "alice").await;

    for body in [
        json!({ "date": "2024-03-01", "muscle_groups": ["chest", "triceps"] }),
        json!({ "date": "2024-03-01", "muscle_groups": ["chest"] }),
        json!({ "date": "2024-03-05", "muscle_groups": ["back"] }),
        json!({ "date": "2024-04-02", "muscle_groups": ["legs"] }),
    ] {
        let (status, _) =
            common::request_json(&app, "POST", "/api/workouts", Some(&token), Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, stats) = common::request_json(
        &app,
        "GET",
        "/api/workouts/stats/monthly?month=2024-03",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["month"], "2024-03");
    assert_eq!(stats["training_days"], 2);
    assert_eq!(stats["most_trained"], "chest");

    let (status, _) = common::request_json(
        &app,
        "GET",
        "/api/workouts/stats/monthly?month=2024-13",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_weekly_stats_groups_by_day() {
    let (app, _resources) = common::create_test_app().await;
    let token = common::register_user(&app, "alice").await;

    let today = Utc::now().date_naive();
    for groups in [json!(["chest"]), json!(["back"])] {
        let (status, _) = common::request_json(
            &app,
            "POST",
            "/api/workouts",
            Some(&token),
            Some(json!({ "date": today.to_string(), "muscle_groups": groups })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, weekly) = common::request_json(
        &app,
        "GET",
        "/api/workouts/stats/weekly",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let days = weekly.as_array().unwrap();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0]["workout_count"], 2);
    assert_eq!(days[0]["muscle_groups"], json!(["chest", "back"]));
    assert_eq!(days[0]["date"], today.to_string());
}

#[tokio::test]
async fn test_users_cannot_see_each_others_workouts() {
    let (app, _resources) = common::create_test_app().await;
    let alice = common::register_user(&app, "alice").await;
    let bob = common::register_user(&app, "bob").await;

    let (status, created) = common::request_json(
        &app,
        "POST",
        "/api/workouts",
        Some(&alice),
        Some(json!({ "date": "2024-03-02", "muscle_groups": ["abs"] })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, listed) =
        common::request_json(&app, "GET", "/api/workouts", Some(&bob), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(listed.as_array().unwrap().is_empty());

    let (status, _) = common::request_json(
        &app,
        "DELETE",
        &format!("/api/workouts/{id}"),
        Some(&bob),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
