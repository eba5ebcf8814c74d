// ABOUTME: Integration tests for workout plan routes
// ABOUTME: Validates default seeding, exercise management, and ownership checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_first_listing_seeds_default_rotation() {
    let (app, _resources) = common::create_test_app().await;
    let token = common::register_user(&app, "alice").await;

    let (status, plans) = common::request_json(&app, "GET", "/api/plans", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let plans = plans.as_array().unwrap();
    assert_eq!(plans.len(), 5);
    assert_eq!(plans[0]["day_number"], 1);
    assert!(!plans[0]["exercises"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_add_and_remove_exercise() {
    let (app, _resources) = common::create_test_app().await;
    let token = common::register_user(&app, "alice").await;

    let (_, plans) = common::request_json(&app, "GET", "/api/plans", Some(&token), None).await;
    let plan_id = plans[0]["id"].as_i64().unwrap();

    let (status, exercise) = common::request_json(
        &app,
        "POST",
        &format!("/api/plans/{plan_id}/exercises"),
        Some(&token),
        Some(json!({ "name": "Dips", "sets": 3, "reps_min": 8, "reps_max": 12 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let exercise_id = exercise["id"].as_i64().unwrap();

    let (status, plan) = common::request_json(
        &app,
        "GET",
        &format!("/api/plans/{plan_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = plan["exercises"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Dips"));

    let (status, _) = common::request_json(
        &app,
        "DELETE",
        &format!("/api/plans/{plan_id}/exercises/{exercise_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_exercise_validation() {
    let (app, _resources) = common::create_test_app().await;
    let token = common::register_user(&app, "alice").await;

    let (_, plans) = common::request_json(&app, "GET", "/api/plans", Some(&token), None).await;
    let plan_id = plans[0]["id"].as_i64().unwrap();

    let (status, _) = common::request_json(
        &app,
        "POST",
        &format!("/api/plans/{plan_id}/exercises"),
        Some(&token),
        Some(json!({ "name": "  ", "sets": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = common::request_json(
        &app,
        "POST",
        &format!("/api/plans/{plan_id}/exercises"),
        Some(&token),
        Some(json!({ "name": "Dips", "sets": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_plans_scoped_per_user() {
    let (app, _resources) = common::create_test_app().await;
    let alice = common::register_user(&app, "alice").await;
    let bob = common::register_user(&app, "bob").await;

    let (_, plans) = common::request_json(&app, "GET", "/api/plans", Some(&alice), None).await;
    let alice_plan = plans[0]["id"].as_i64().unwrap();

    // Bob has his own seeded plans with different ids; Alice's are invisible
    let (status, _) = common::request_json(
        &app,
        "POST",
        &format!("/api/plans/{alice_plan}/exercises"),
        Some(&bob),
        Some(json!({ "name": "Dips", "sets": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
