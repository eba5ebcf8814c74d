// ABOUTME: Core data models for the MyFit fitness tracking platform
// ABOUTME: Re-exports MuscleGroup, Workout, WeightLog and other fundamental records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

//! # Data Models
//!
//! Core data structures used throughout the MyFit server.
//!
//! ## Design Principles
//!
//! - **Calendar-day semantics**: workout and log dates are `NaiveDate` values;
//!   all comparisons are by (year, month, day) only, never by timestamp
//! - **Serializable**: all models support JSON serialization for the REST API
//! - **Type Safe**: the muscle-group vocabulary is a closed enum, so invalid
//!   values are rejected at the boundary and cannot reach the statistics engine

// Domain modules
mod body;
mod daily;
mod muscle;
mod plan;
mod user;
mod workout;

// Re-export all public types for convenience
pub use body::{Measurement, ProgressPhoto, WeightLog};
pub use daily::{HydrationLog, SupplementLog, DEFAULT_HYDRATION_GOAL_ML};
pub use muscle::{MuscleGroup, ParseMuscleGroupError};
pub use plan::{PlanExercise, WorkoutPlan};
pub use user::{User, UserSettings, DEFAULT_WEEKLY_GOAL, MAX_WEEKLY_GOAL};
pub use workout::Workout;
