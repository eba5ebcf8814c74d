// ABOUTME: Integration tests for body metrics routes
// ABOUTME: Validates weight bounds, photo payload checks, and per-user scoping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_weight_log_round_trip() {
    let (app, _resources) = common::create_test_app().await;
    let token = common::register_user(&app, "alice").await;

    let (status, created) = common::request_json(
        &app,
        "POST",
        "/api/metrics/weight",
        Some(&token),
        Some(json!({ "date": "2024-03-02", "weight_kg": 80.5, "notes": "morning" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, listed) = common::request_json(
        &app,
        "GET",
        "/api/metrics/weight?limit=10",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, _) = common::request_json(
        &app,
        "DELETE",
        &format!("/api/metrics/weight/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_weight_bounds_rejected() {
    let (app, _resources) = common::create_test_app().await;
    let token = common::register_user(&app, "alice").await;

    for bad in [0.0, -5.0, 600.0] {
        let (status, body) = common::request_json(
            &app,
            "POST",
            "/api/metrics/weight",
            Some(&token),
            Some(json!({ "date": "2024-03-02", "weight_kg": bad })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "weight {bad} accepted");
        assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");
    }
}

#[tokio::test]
async fn test_measurements_optional_fields() {
    let (app, _resources) = common::create_test_app().await;
    let token = common::register_user(&app, "alice").await;

    let (status, created) = common::request_json(
        &app,
        "POST",
        "/api/metrics/measurements",
        Some(&token),
        Some(json!({ "date": "2024-03-02", "waist": 82.0, "chest": 101.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["waist"], 82.0);
    assert!(created["hips"].is_null());
}

#[tokio::test]
async fn test_photo_payload_validation() {
    let (app, _resources) = common::create_test_app().await;
    let token = common::register_user(&app, "alice").await;

    let (status, _) = common::request_json(
        &app,
        "POST",
        "/api/metrics/photos",
        Some(&token),
        Some(json!({
            "date": "2024-03-02",
            "image_data": "data:image/png;base64,aGVsbG8=",
            "caption": "week 1"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = common::request_json(
        &app,
        "POST",
        "/api/metrics/photos",
        Some(&token),
        Some(json!({ "date": "2024-03-02", "image_data": "!!! not base64 !!!" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, photos) =
        common::request_json(&app, "GET", "/api/metrics/photos", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(photos.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_metrics_scoped_per_user() {
    let (app, _resources) = common::create_test_app().await;
    let alice = common::register_user(&app, "alice").await;
    let bob = common::register_user(&app, "bob").await;

    let (status, created) = common::request_json(
        &app,
        "POST",
        "/api/metrics/weight",
        Some(&alice),
        Some(json!({ "date": "2024-03-02", "weight_kg": 80.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, _) = common::request_json(
        &app,
        "DELETE",
        &format!("/api/metrics/weight/{id}"),
        Some(&bob),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
