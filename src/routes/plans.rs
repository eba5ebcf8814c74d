// ABOUTME: Workout plan route handlers with default-rotation auto-seeding
// ABOUTME: Plans are read-mostly; users add and remove exercises within a plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

//! Workout plan routes
//!
//! A user's first plan listing seeds the default five-day rotation, so the
//! client always has something to render.

use super::authenticate;
use crate::server::ServerResources;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use myfit_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Request to append an exercise to a plan
#[derive(Debug, Deserialize)]
pub struct AddExerciseRequest {
    /// Exercise name
    pub name: String,
    /// Number of sets
    pub sets: i64,
    /// Lower bound of the rep range
    #[serde(default)]
    pub reps_min: Option<i64>,
    /// Upper bound of the rep range
    #[serde(default)]
    pub reps_max: Option<i64>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Exercise removal acknowledgement
#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseRemovedResponse {
    /// Confirmation message
    pub message: String,
}

/// Plan routes handler
pub struct PlanRoutes;

impl PlanRoutes {
    /// Create all plan routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/plans", get(Self::list_plans))
            .route("/api/plans/:id", get(Self::get_plan))
            .route("/api/plans/:id/exercises", post(Self::add_exercise))
            .route(
                "/api/plans/:plan_id/exercises/:exercise_id",
                delete(Self::delete_exercise),
            )
            .with_state(resources)
    }

    /// All plans with exercises, seeding defaults on first call
    async fn list_plans(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let plans = resources.database.list_plans(auth.user_id).await?;
        Ok(Json(plans).into_response())
    }

    /// One plan with exercises
    async fn get_plan(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(plan_id): Path<i64>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let plan = resources.database.get_plan(auth.user_id, plan_id).await?;
        Ok(Json(plan).into_response())
    }

    /// Append an exercise to a plan
    async fn add_exercise(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(plan_id): Path<i64>,
        Json(request): Json<AddExerciseRequest>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;

        let name = request.name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("Exercise name is required"));
        }
        if request.sets <= 0 {
            return Err(AppError::out_of_range("sets must be positive"));
        }

        let exercise = resources
            .database
            .add_plan_exercise(
                auth.user_id,
                plan_id,
                name,
                request.sets,
                request.reps_min,
                request.reps_max,
                request.notes.as_deref(),
            )
            .await?;
        Ok((StatusCode::CREATED, Json(exercise)).into_response())
    }

    /// Remove an exercise from a plan
    async fn delete_exercise(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path((plan_id, exercise_id)): Path<(i64, i64)>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        resources
            .database
            .delete_plan_exercise(auth.user_id, plan_id, exercise_id)
            .await?;
        Ok(Json(ExerciseRemovedResponse {
            message: "Exercise removed".to_owned(),
        })
        .into_response())
    }
}
