// ABOUTME: Workout entry record for muscle-group training logs
// ABOUTME: One row per logged session; multiple entries may share a calendar day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::MuscleGroup;

/// A single logged workout session
///
/// Owned by a user. The date is a calendar day with no time component;
/// multiple entries may share the same date. Only `muscle_groups` and
/// `notes` are mutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Workout {
    /// Row identifier
    pub id: i64,
    /// Owning user
    pub user_id: Uuid,
    /// Calendar day the session took place
    pub date: NaiveDate,
    /// Muscle groups trained, non-empty, in the order the user selected them
    pub muscle_groups: Vec<MuscleGroup>,
    /// Free-form session notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// When the row was created
    pub created_at: DateTime<Utc>,
}
