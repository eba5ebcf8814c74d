// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory database, auth, router, and request helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

#![allow(dead_code, clippy::unwrap_used, clippy::missing_panics_doc)]

//! Shared test utilities for `myfit_server`
//!
//! Common setup to reduce duplication across integration tests: an in-memory
//! database, a router over fresh resources, and a JSON request helper.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use myfit_server::{
    auth::{generate_jwt_secret, AuthManager},
    database::Database,
    server::{self, ServerResources},
};
use std::sync::{Arc, Once};
use tower::ServiceExt;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// Standard in-memory test database
pub async fn create_test_database() -> Database {
    init_test_logging();
    Database::new("sqlite::memory:")
        .await
        .unwrap_or_else(|e| panic!("test database setup failed: {e}"))
}

/// Test authentication manager with a fresh secret
pub fn create_test_auth_manager() -> AuthManager {
    AuthManager::new(&generate_jwt_secret(), 24)
}

/// Fresh server resources over an in-memory database
pub async fn create_test_resources() -> Arc<ServerResources> {
    let database = create_test_database().await;
    Arc::new(ServerResources::new(database, create_test_auth_manager()))
}

/// Full application router over fresh resources
pub async fn create_test_app() -> (Router, Arc<ServerResources>) {
    let resources = create_test_resources().await;
    (server::router(resources.clone()), resources)
}

/// Issue a JSON request and return status plus parsed body
pub async fn request_json(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Register a user through the API and return their bearer token
pub async fn register_user(app: &Router, username: &str) -> String {
    let (status, body) = request_json(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(serde_json::json!({ "username": username, "password": "hunter22" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "registration failed: {body}");
    body["token"]
        .as_str()
        .unwrap_or_else(|| panic!("no token in response: {body}"))
        .to_owned()
}
