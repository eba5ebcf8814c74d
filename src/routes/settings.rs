// ABOUTME: Per-user settings route handlers
// ABOUTME: Reads and updates the weekly training-day goal with range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

//! Settings routes: the weekly training goal

use super::authenticate;
use crate::server::ServerResources;
use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use myfit_core::errors::AppError;
use myfit_core::models::MAX_WEEKLY_GOAL;
use serde::Deserialize;
use std::sync::Arc;

/// Request to update settings
#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    /// Target distinct training days per week, 1..=7
    pub weekly_goal: u32,
}

/// Settings routes handler
pub struct SettingsRoutes;

impl SettingsRoutes {
    /// Create all settings routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/settings", get(Self::get_settings))
            .route("/api/settings", put(Self::update_settings))
            .with_state(resources)
    }

    /// Current settings; users who never saved get defaults
    async fn get_settings(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let settings = resources.database.get_settings(auth.user_id).await?;
        Ok(Json(settings).into_response())
    }

    /// Update the weekly goal
    async fn update_settings(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<UpdateSettingsRequest>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;

        if !(1..=MAX_WEEKLY_GOAL).contains(&request.weekly_goal) {
            return Err(AppError::out_of_range(
                "Weekly goal must be between 1 and 7",
            ));
        }

        let settings = resources
            .database
            .update_settings(auth.user_id, request.weekly_goal)
            .await?;
        Ok(Json(settings).into_response())
    }
}
