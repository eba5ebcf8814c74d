// ABOUTME: Body metrics route handlers: weight logs, measurements, progress photos
// ABOUTME: Append-only time-series endpoints with range validation at the boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

//! Body metrics routes: weight, measurements, and progress photos

use super::authenticate;
use crate::server::ServerResources;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use base64::Engine as _;
use chrono::NaiveDate;
use myfit_core::errors::AppError;
use myfit_core::models::Measurement;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Upper bound accepted for a body-weight log, in kilograms
const MAX_WEIGHT_KG: f64 = 500.0;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Date-range and limit filter shared by the list endpoints
#[derive(Debug, Deserialize, Default)]
pub struct MetricsQuery {
    /// Inclusive lower bound
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound
    pub end_date: Option<NaiveDate>,
    /// Maximum rows to return
    pub limit: Option<i64>,
}

/// Request to log a body weight
#[derive(Debug, Deserialize)]
pub struct CreateWeightRequest {
    /// Calendar day of the measurement
    pub date: NaiveDate,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request to log body measurements; every site optional
#[derive(Debug, Deserialize)]
pub struct CreateMeasurementRequest {
    /// Calendar day of the measurement
    pub date: NaiveDate,
    /// Chest circumference (cm)
    #[serde(default)]
    pub chest: Option<f64>,
    /// Waist circumference (cm)
    #[serde(default)]
    pub waist: Option<f64>,
    /// Hip circumference (cm)
    #[serde(default)]
    pub hips: Option<f64>,
    /// Left upper-arm circumference (cm)
    #[serde(default)]
    pub left_arm: Option<f64>,
    /// Right upper-arm circumference (cm)
    #[serde(default)]
    pub right_arm: Option<f64>,
    /// Left thigh circumference (cm)
    #[serde(default)]
    pub left_thigh: Option<f64>,
    /// Right thigh circumference (cm)
    #[serde(default)]
    pub right_thigh: Option<f64>,
    /// Left calf circumference (cm)
    #[serde(default)]
    pub left_calf: Option<f64>,
    /// Right calf circumference (cm)
    #[serde(default)]
    pub right_calf: Option<f64>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request to store a progress photo
#[derive(Debug, Deserialize)]
pub struct CreatePhotoRequest {
    /// Calendar day the photo was taken
    pub date: NaiveDate,
    /// Base64 payload, with or without a `data:` URI prefix
    pub image_data: String,
    /// Optional caption
    #[serde(default)]
    pub caption: Option<String>,
}

/// Generic deletion acknowledgement
#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedResponse {
    /// Confirmation message
    pub message: String,
}

/// Reject payloads that are not base64 image data
///
/// Accepts an optional `data:<mime>;base64,` prefix, since clients upload
/// straight from a canvas data URI.
fn validate_image_payload(image_data: &str) -> Result<(), AppError> {
    if image_data.is_empty() {
        return Err(AppError::invalid_input("image_data is required"));
    }
    let payload = image_data
        .split_once(',')
        .map_or(image_data, |(prefix, rest)| {
            if prefix.starts_with("data:") {
                rest
            } else {
                image_data
            }
        });
    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map(|_| ())
        .map_err(|_| AppError::invalid_input("image_data is not valid base64"))
}

// ============================================================================
// Metrics Routes
// ============================================================================

/// Body metrics routes handler
pub struct MetricsRoutes;

impl MetricsRoutes {
    /// Create all body-metrics routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/metrics/weight", get(Self::list_weight))
            .route("/api/metrics/weight", post(Self::create_weight))
            .route("/api/metrics/weight/:id", delete(Self::delete_weight))
            .route("/api/metrics/measurements", get(Self::list_measurements))
            .route("/api/metrics/measurements", post(Self::create_measurement))
            .route(
                "/api/metrics/measurements/:id",
                delete(Self::delete_measurement),
            )
            .route("/api/metrics/photos", get(Self::list_photos))
            .route("/api/metrics/photos", post(Self::create_photo))
            .route("/api/metrics/photos/:id", delete(Self::delete_photo))
            .with_state(resources)
    }

    // ========================================================================
    // Weight
    // ========================================================================

    async fn list_weight(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<MetricsQuery>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let logs = resources
            .database
            .list_weight_logs(auth.user_id, query.start_date, query.end_date, query.limit)
            .await?;
        Ok(Json(logs).into_response())
    }

    async fn create_weight(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<CreateWeightRequest>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;

        if request.weight_kg <= 0.0 || request.weight_kg > MAX_WEIGHT_KG {
            return Err(AppError::out_of_range("Invalid weight value"));
        }

        let log = resources
            .database
            .create_weight_log(
                auth.user_id,
                request.date,
                request.weight_kg,
                request.notes.as_deref(),
            )
            .await?;
        Ok((StatusCode::CREATED, Json(log)).into_response())
    }

    async fn delete_weight(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(log_id): Path<i64>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        resources
            .database
            .delete_weight_log(auth.user_id, log_id)
            .await?;
        Ok(deleted("Weight log deleted"))
    }

    // ========================================================================
    // Measurements
    // ========================================================================

    async fn list_measurements(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<MetricsQuery>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let measurements = resources
            .database
            .list_measurements(auth.user_id, query.start_date, query.end_date, query.limit)
            .await?;
        Ok(Json(measurements).into_response())
    }

    async fn create_measurement(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<CreateMeasurementRequest>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;

        let measurement = resources
            .database
            .create_measurement(&request.into_measurement(auth.user_id))
            .await?;
        Ok((StatusCode::CREATED, Json(measurement)).into_response())
    }

    async fn delete_measurement(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(measurement_id): Path<i64>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        resources
            .database
            .delete_measurement(auth.user_id, measurement_id)
            .await?;
        Ok(deleted("Measurement deleted"))
    }

    // ========================================================================
    // Photos
    // ========================================================================

    async fn list_photos(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let photos = resources.database.list_photos(auth.user_id).await?;
        Ok(Json(photos).into_response())
    }

    async fn create_photo(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<CreatePhotoRequest>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        validate_image_payload(&request.image_data)?;

        let photo = resources
            .database
            .create_photo(
                auth.user_id,
                request.date,
                &request.image_data,
                request.caption.as_deref(),
            )
            .await?;
        Ok((StatusCode::CREATED, Json(photo)).into_response())
    }

    async fn delete_photo(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(photo_id): Path<i64>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        resources.database.delete_photo(auth.user_id, photo_id).await?;
        Ok(deleted("Photo deleted"))
    }
}

impl CreateMeasurementRequest {
    fn into_measurement(self, user_id: Uuid) -> Measurement {
        Measurement {
            id: 0,
            user_id,
            date: self.date,
            chest: self.chest,
            waist: self.waist,
            hips: self.hips,
            left_arm: self.left_arm,
            right_arm: self.right_arm,
            left_thigh: self.left_thigh,
            right_thigh: self.right_thigh,
            left_calf: self.left_calf,
            right_calf: self.right_calf,
            notes: self.notes,
            created_at: chrono::Utc::now(),
        }
    }
}

fn deleted(message: &str) -> Response {
    Json(DeletedResponse {
        message: message.to_owned(),
    })
    .into_response()
}
