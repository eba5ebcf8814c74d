// ABOUTME: HTTP route modules for the MyFit REST API
// ABOUTME: One axum router per domain plus the shared bearer-auth helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

//! # REST API Routes
//!
//! Each domain contributes one router assembled in [`crate::server`]. All
//! handlers except health and auth require a JWT bearer token, extracted
//! through [`authenticate`].

pub mod auth;
pub mod health;
pub mod hydration;
pub mod metrics;
pub mod plans;
pub mod settings;
pub mod supplements;
pub mod workouts;

use crate::auth::AuthenticatedUser;
use crate::server::ServerResources;
use axum::http::HeaderMap;
use myfit_core::errors::AppResult;
use std::sync::Arc;

/// Extract and authenticate the caller from the `Authorization` header
///
/// # Errors
///
/// Returns an auth error when the header is missing or the token is invalid
pub fn authenticate(
    headers: &HeaderMap,
    resources: &Arc<ServerResources>,
) -> AppResult<AuthenticatedUser> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());
    resources.auth.authenticate_header(header)
}
