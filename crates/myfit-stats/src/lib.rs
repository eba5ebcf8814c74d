// ABOUTME: Pure derived-statistics engine for workout and weight-log time series
// ABOUTME: Computes streaks, goal percentages, muscle-group tallies, and weight trends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

#![deny(unsafe_code)]

//! # MyFit Stats
//!
//! The derived-statistics engine: a pure projection over a user's full workout
//! list (and optionally their recent weight logs) into an aggregate summary:
//! weekly and monthly goal completion, current streak, distinct training days
//! this week, most-trained and most-neglected muscle groups, and a short-term
//! weight trend.
//!
//! The engine is deliberately boring to call:
//!
//! - **Pure**: no I/O, no mutation of inputs, no internal state. Safe to
//!   invoke on every request.
//! - **Deterministic**: `now` is injected, so the same inputs and the same
//!   timestamp always produce the same summary.
//! - **Total**: there are no error conditions. Absence of data is a normal
//!   state for a fitness log, so insufficient input degrades to zero/`None`
//!   fields instead of failing.

mod engine;
mod summary;

pub use engine::{monthly_breakdown, StatsEngine};
pub use summary::{
    MonthlyBreakdown, MuscleGroupCount, NeglectRecommendation, StatsSummary, TrendDirection,
    WeightTrend,
};
