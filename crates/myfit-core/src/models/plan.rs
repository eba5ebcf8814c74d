// ABOUTME: Workout plan and plan exercise records
// ABOUTME: A plan is an ordered list of exercises for one training day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::MuscleGroup;

/// A named training-day plan (e.g. "Day 1 - Chest + Triceps")
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutPlan {
    /// Row identifier
    pub id: i64,
    /// Owning user
    pub user_id: Uuid,
    /// Display name
    pub name: String,
    /// Ordinal within the user's weekly rotation
    pub day_number: i64,
    /// Muscle groups this day targets
    pub muscle_groups: Vec<MuscleGroup>,
    /// Ordered exercises for the day
    pub exercises: Vec<PlanExercise>,
}

/// One exercise within a plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanExercise {
    /// Row identifier
    pub id: i64,
    /// Owning plan
    pub plan_id: i64,
    /// Exercise name
    pub name: String,
    /// Number of sets
    pub sets: i64,
    /// Lower bound of the rep range, if rep-based
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps_min: Option<i64>,
    /// Upper bound of the rep range, if rep-based
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps_max: Option<i64>,
    /// Free-form notes (e.g. "30-45 seconds" for timed holds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Position within the plan
    pub order_index: i64,
}
