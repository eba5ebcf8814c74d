// ABOUTME: Integration tests for hydration and supplement routes
// ABOUTME: Validates default reads, upsert semantics, and input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_hydration_defaults_then_upsert() {
    let (app, _resources) = common::create_test_app().await;
    let token = common::register_user(&app, "alice").await;

    let (status, empty) = common::request_json(
        &app,
        "GET",
        "/api/hydration/2024-03-02",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(empty["volume_ml"], 0);
    assert_eq!(empty["goal_ml"], 2500);

    let (status, _) = common::request_json(
        &app,
        "POST",
        "/api/hydration",
        Some(&token),
        Some(json!({ "date": "2024-03-02", "volume_ml": 750 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Second write replaces the first
    let (status, log) = common::request_json(
        &app,
        "POST",
        "/api/hydration",
        Some(&token),
        Some(json!({ "date": "2024-03-02", "volume_ml": 1500, "goal_ml": 3000 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(log["volume_ml"], 1500);
    assert_eq!(log["goal_ml"], 3000);
}

#[tokio::test]
async fn test_hydration_rejects_negative_volume() {
    let (app, _resources) = common::create_test_app().await;
    let token = common::register_user(&app, "alice").await;

    let (status, _) = common::request_json(
        &app,
        "POST",
        "/api/hydration",
        Some(&token),
        Some(json!({ "date": "2024-03-02", "volume_ml": -1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_supplements_round_trip() {
    let (app, _resources) = common::create_test_app().await;
    let token = common::register_user(&app, "alice").await;

    let (status, empty) = common::request_json(
        &app,
        "GET",
        "/api/supplements/2024-03-02",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(empty["taken_morning"], false);

    let (status, _) = common::request_json(
        &app,
        "POST",
        "/api/supplements",
        Some(&token),
        Some(json!({ "date": "2024-03-02", "taken_morning": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, log) = common::request_json(
        &app,
        "POST",
        "/api/supplements",
        Some(&token),
        Some(json!({ "date": "2024-03-02", "taken_morning": true, "taken_evening": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(log["taken_morning"], true);
    assert_eq!(log["taken_evening"], true);
}

#[tokio::test]
async fn test_settings_validation_bounds() {
    let (app, _resources) = common::create_test_app().await;
    let token = common::register_user(&app, "alice").await;

    for bad_goal in [0, 8] {
        let (status, _) = common::request_json(
            &app,
            "PUT",
            "/api/settings",
            Some(&token),
            Some(json!({ "weekly_goal": bad_goal })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "goal {bad_goal} accepted");
    }

    let (status, settings) = common::request_json(
        &app,
        "PUT",
        "/api/settings",
        Some(&token),
        Some(json!({ "weekly_goal": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(settings["weekly_goal"], 5);
}
