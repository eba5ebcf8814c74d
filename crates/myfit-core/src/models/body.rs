// ABOUTME: Body tracking records: weight logs, circumference measurements, progress photos
// ABOUTME: All are append-only time series scoped by user and calendar day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single body-weight measurement in kilograms
///
/// Multiple entries per date are allowed; consumers treat the list as a time
/// series sorted descending by date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightLog {
    /// Row identifier
    pub id: i64,
    /// Owning user
    pub user_id: Uuid,
    /// Calendar day of the measurement
    pub date: NaiveDate,
    /// Body weight in kilograms, positive
    pub weight_kg: f64,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// When the row was created
    pub created_at: DateTime<Utc>,
}

/// Body circumference measurements in centimeters
///
/// Every site is optional; users log whichever they track.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Measurement {
    /// Row identifier
    pub id: i64,
    /// Owning user
    pub user_id: Uuid,
    /// Calendar day of the measurement
    pub date: NaiveDate,
    /// Chest circumference (cm)
    pub chest: Option<f64>,
    /// Waist circumference (cm)
    pub waist: Option<f64>,
    /// Hip circumference (cm)
    pub hips: Option<f64>,
    /// Left upper-arm circumference (cm)
    pub left_arm: Option<f64>,
    /// Right upper-arm circumference (cm)
    pub right_arm: Option<f64>,
    /// Left thigh circumference (cm)
    pub left_thigh: Option<f64>,
    /// Right thigh circumference (cm)
    pub right_thigh: Option<f64>,
    /// Left calf circumference (cm)
    pub left_calf: Option<f64>,
    /// Right calf circumference (cm)
    pub right_calf: Option<f64>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// When the row was created
    pub created_at: DateTime<Utc>,
}

/// A progress photo stored as a base64 text payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressPhoto {
    /// Row identifier
    pub id: i64,
    /// Owning user
    pub user_id: Uuid,
    /// Calendar day the photo was taken
    pub date: NaiveDate,
    /// Base64-encoded image payload
    pub image_data: String,
    /// Optional caption
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// When the row was created
    pub created_at: DateTime<Utc>,
}
