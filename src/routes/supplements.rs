// ABOUTME: Supplement route handlers for daily intake flags
// ABOUTME: One upsertable row per (user, date) with morning and evening doses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

//! Supplement routes: read and upsert daily intake flags

use super::authenticate;
use crate::server::ServerResources;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use myfit_core::errors::AppError;
use serde::Deserialize;
use std::sync::Arc;

/// Request to record a day's supplement intake
#[derive(Debug, Deserialize)]
pub struct UpsertSupplementRequest {
    /// Calendar day
    pub date: NaiveDate,
    /// Morning dose taken
    #[serde(default)]
    pub taken_morning: bool,
    /// Evening dose taken
    #[serde(default)]
    pub taken_evening: bool,
}

/// Supplement routes handler
pub struct SupplementRoutes;

impl SupplementRoutes {
    /// Create all supplement routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/supplements/:date", get(Self::get_supplements))
            .route("/api/supplements", post(Self::upsert_supplements))
            .with_state(resources)
    }

    /// A day's log; days with no record read as nothing taken
    async fn get_supplements(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(date): Path<NaiveDate>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let log = resources
            .database
            .get_supplements(auth.user_id, date)
            .await?;
        Ok(Json(log).into_response())
    }

    /// Record a day's intake, creating or replacing the row
    async fn upsert_supplements(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<UpsertSupplementRequest>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let log = resources
            .database
            .upsert_supplements(
                auth.user_id,
                request.date,
                request.taken_morning,
                request.taken_evening,
            )
            .await?;
        Ok(Json(log).into_response())
    }
}
