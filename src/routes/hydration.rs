// ABOUTME: Hydration route handlers for daily water-intake tracking
// ABOUTME: One upsertable row per (user, date) with a default goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

//! Hydration routes: read and upsert daily water intake

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
use myfit_core::models::DEFAULT_HYDRATION_GOAL_ML;
use serde::Deserialize;
use std::sync::Arc;

/// Request to set a day's water intake
#[derive(Debug, Deserialize)]
pub struct UpsertHydrationRequest {
    /// Calendar day
    pub date: NaiveDate,
    /// Volume drunk so far, in milliliters
    pub volume_ml: i64,
    /// Daily goal; defaults when omitted
    #[serde(default)]
    pub goal_ml: Option<i64>,
}

/// Hydration routes handler
pub struct HydrationRoutes;

impl HydrationRoutes {
    /// Create all hydration routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/hydration/:date", get(Self::get_hydration))
            .route("/api/hydration", post(Self::upsert_hydration))
            .with_state(resources)
    }

    /// A day's log; days with no record read as zero intake
    async fn get_hydration(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(date): Path<NaiveDate>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let log = resources.database.get_hydration(auth.user_id, date).await?;
        Ok(Json(log).into_response())
    }

    /// Set a day's intake, creating or replacing the row
    async fn upsert_hydration(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<UpsertHydrationRequest>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;

        if request.volume_ml < 0 {
            return Err(AppError::out_of_range("volume_ml must be non-negative"));
        }
        let goal_ml = request.goal_ml.unwrap_or(DEFAULT_HYDRATION_GOAL_ML);
        if goal_ml <= 0 {
            return Err(AppError::out_of_range("goal_ml must be positive"));
        }

        let log = resources
            .database
            .upsert_hydration(auth.user_id, request.date, request.volume_ml, goal_ml)
            .await?;
        Ok(Json(log).into_response())
    }
}
