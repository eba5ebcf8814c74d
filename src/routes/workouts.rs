// ABOUTME: Workout route handlers: CRUD over entries plus derived-statistics endpoints
// ABOUTME: Statistics are computed per-request by the pure myfit-stats engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

//! Workout routes: logging, editing, and the statistics views
//!
//! The statistics endpoints never read derived state from the database; they
//! load the user's history and hand it to the `myfit-stats` engine with the
//! current timestamp, so a summary is always consistent with the rows that
//! back it.

use super::authenticate;
use crate::server::ServerResources;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::{Datelike, NaiveDate, Utc};
use myfit_core::errors::AppError;
use myfit_core::models::{MuscleGroup, Workout};
use myfit_stats::StatsEngine;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Number of recent weight logs fed to the trend computation
const TREND_LOG_COUNT: i64 = 14;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request to log a workout
#[derive(Debug, Deserialize)]
pub struct CreateWorkoutRequest {
    /// Calendar day of the session
    pub date: NaiveDate,
    /// Muscle groups trained, validated against the fixed vocabulary
    pub muscle_groups: Vec<String>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request to update an existing workout
#[derive(Debug, Deserialize)]
pub struct UpdateWorkoutRequest {
    /// Replacement muscle groups
    pub muscle_groups: Vec<String>,
    /// Replacement notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Date-range filter for listing workouts
#[derive(Debug, Deserialize, Default)]
pub struct ListWorkoutsQuery {
    /// Inclusive lower bound
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound
    pub end_date: Option<NaiveDate>,
}

/// Month selector for the monthly statistics view
#[derive(Debug, Deserialize, Default)]
pub struct MonthQuery {
    /// Month in `YYYY-MM` form; defaults to the current month
    pub month: Option<String>,
}

/// One day's aggregate in the weekly view
#[derive(Debug, Serialize, Deserialize)]
pub struct DaySummary {
    /// Calendar day
    pub date: NaiveDate,
    /// Number of entries logged that day
    pub workout_count: usize,
    /// Union of groups trained that day, in first-logged order
    pub muscle_groups: Vec<MuscleGroup>,
}

/// Monthly statistics response
#[derive(Debug, Serialize, Deserialize)]
pub struct MonthlyStatsResponse {
    /// The month in `YYYY-MM` form
    pub month: String,
    /// Distinct training days
    pub training_days: u32,
    /// Occurrence tallies
    pub muscle_groups: Vec<myfit_stats::MuscleGroupCount>,
    /// Highest-count group
    pub most_trained: Option<MuscleGroup>,
}

/// Streak response
#[derive(Debug, Serialize, Deserialize)]
pub struct StreakResponse {
    /// Current consecutive-day streak
    pub streak: u32,
}

/// Parse and validate a muscle-group list from the wire
///
/// # Errors
///
/// Returns `InvalidInput` for an empty list or any name outside the
/// vocabulary
fn parse_muscle_groups(raw: &[String]) -> Result<Vec<MuscleGroup>, AppError> {
    if raw.is_empty() {
        return Err(AppError::invalid_input(
            "At least one muscle group is required",
        ));
    }
    raw.iter()
        .map(|name| {
            name.parse::<MuscleGroup>()
                .map_err(|_| AppError::invalid_input(format!("Invalid muscle group: {name}")))
        })
        .collect()
}

// ============================================================================
// Workout Routes
// ============================================================================

/// Workout routes handler
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/workouts", get(Self::list_workouts))
            .route("/api/workouts", post(Self::create_workout))
            .route("/api/workouts/date/:date", get(Self::workouts_for_date))
            .route("/api/workouts/stats", get(Self::stats_summary))
            .route("/api/workouts/stats/weekly", get(Self::weekly_stats))
            .route("/api/workouts/stats/monthly", get(Self::monthly_stats))
            .route("/api/workouts/stats/streak", get(Self::streak))
            .route("/api/workouts/:id", put(Self::update_workout))
            .route("/api/workouts/:id", delete(Self::delete_workout))
            .with_state(resources)
    }

    /// List workouts, newest first, with optional date bounds
    async fn list_workouts(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<ListWorkoutsQuery>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let workouts = resources
            .database
            .list_workouts(auth.user_id, query.start_date, query.end_date)
            .await?;
        Ok(Json(workouts).into_response())
    }

    /// Entries for one calendar day
    async fn workouts_for_date(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(date): Path<NaiveDate>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let workouts = resources
            .database
            .workouts_for_date(auth.user_id, date)
            .await?;
        Ok(Json(workouts).into_response())
    }

    /// Log a new workout
    async fn create_workout(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<CreateWorkoutRequest>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let groups = parse_muscle_groups(&request.muscle_groups)?;

        let workout = resources
            .database
            .create_workout(
                auth.user_id,
                request.date,
                &groups,
                request.notes.as_deref(),
            )
            .await?;

        debug!(user_id = %auth.user_id, date = %workout.date, "logged workout");
        Ok((StatusCode::CREATED, Json(workout)).into_response())
    }

    /// Update an entry's muscle groups and notes
    async fn update_workout(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(workout_id): Path<i64>,
        Json(request): Json<UpdateWorkoutRequest>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let groups = parse_muscle_groups(&request.muscle_groups)?;

        let workout = resources
            .database
            .update_workout(
                auth.user_id,
                workout_id,
                &groups,
                request.notes.as_deref(),
            )
            .await?;
        Ok(Json(workout).into_response())
    }

    /// Delete an entry
    async fn delete_workout(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(workout_id): Path<i64>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        resources
            .database
            .delete_workout(auth.user_id, workout_id)
            .await?;
        Ok(Json(serde_json::json!({ "message": "Workout deleted" })).into_response())
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Full derived-statistics summary from the engine
    async fn stats_summary(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let db = &resources.database;

        let settings = db.get_settings(auth.user_id).await?;
        let workouts = db.list_workouts(auth.user_id, None, None).await?;
        let weight_logs = db
            .list_weight_logs(auth.user_id, None, None, Some(TREND_LOG_COUNT))
            .await?;

        let summary = StatsEngine::new(settings.weekly_goal).summarize(
            &workouts,
            &weight_logs,
            Utc::now(),
        );
        Ok(Json(summary).into_response())
    }

    /// Per-day aggregates for the current week (Sunday-anchored)
    async fn weekly_stats(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;

        let today = Utc::now().date_naive();
        let week_start =
            today - chrono::Days::new(u64::from(today.weekday().num_days_from_sunday()));
        let workouts = resources
            .database
            .list_workouts(auth.user_id, Some(week_start), Some(today))
            .await?;

        Ok(Json(group_by_day(&workouts)).into_response())
    }

    /// Training-day count and muscle tallies for one month
    async fn monthly_stats(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<MonthQuery>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;

        let (year, month, label) = match query.month {
            Some(raw) => parse_month(&raw)?,
            None => {
                let today = Utc::now().date_naive();
                (
                    today.year(),
                    today.month(),
                    format!("{:04}-{:02}", today.year(), today.month()),
                )
            }
        };

        let workouts = resources
            .database
            .list_workouts(auth.user_id, None, None)
            .await?;
        let breakdown = myfit_stats::monthly_breakdown(&workouts, year, month);

        Ok(Json(MonthlyStatsResponse {
            month: label,
            training_days: breakdown.training_days,
            muscle_groups: breakdown.muscle_groups,
            most_trained: breakdown.most_trained,
        })
        .into_response())
    }

    /// Current consecutive-day streak
    async fn streak(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;

        let settings = resources.database.get_settings(auth.user_id).await?;
        let workouts = resources
            .database
            .list_workouts(auth.user_id, None, None)
            .await?;

        let summary = StatsEngine::new(settings.weekly_goal).summarize(&workouts, &[], Utc::now());
        Ok(Json(StreakResponse {
            streak: summary.streak,
        })
        .into_response())
    }
}

/// Collapse entries into one row per day, newest day first
fn group_by_day(workouts: &[Workout]) -> Vec<DaySummary> {
    let mut days: Vec<DaySummary> = Vec::new();
    for workout in workouts {
        match days.iter_mut().find(|d| d.date == workout.date) {
            Some(day) => {
                day.workout_count += 1;
                for &group in &workout.muscle_groups {
                    if !day.muscle_groups.contains(&group) {
                        day.muscle_groups.push(group);
                    }
                }
            }
            None => days.push(DaySummary {
                date: workout.date,
                workout_count: 1,
                muscle_groups: workout.muscle_groups.clone(),
            }),
        }
    }
    days.sort_unstable_by(|a, b| b.date.cmp(&a.date));
    days
}

/// Parse a `YYYY-MM` month selector
fn parse_month(raw: &str) -> Result<(i32, u32, String), AppError> {
    let bad = || AppError::invalid_input(format!("Invalid month (expected YYYY-MM): {raw}"));

    let (year_part, month_part) = raw.split_once('-').ok_or_else(bad)?;
    let year: i32 = year_part.parse().map_err(|_| bad())?;
    let month: u32 = month_part.parse().map_err(|_| bad())?;
    if !(1..=12).contains(&month) {
        return Err(bad());
    }
    Ok((year, month, format!("{year:04}-{month:02}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_muscle_groups_rejects_unknown() {
        let err = parse_muscle_groups(&["chest".into(), "wings".into()]).unwrap_err();
        assert_eq!(err.http_status(), 400);
    }

    #[test]
    fn test_parse_muscle_groups_rejects_empty() {
        assert!(parse_muscle_groups(&[]).is_err());
    }

    #[test]
    fn test_parse_month() {
        let (year, month, label) = parse_month("2024-03").unwrap();
        assert_eq!((year, month), (2024, 3));
        assert_eq!(label, "2024-03");
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("march").is_err());
    }
}
