// ABOUTME: Output types of the statistics engine
// ABOUTME: Aggregate summary record plus the recommendation and weight-trend sub-records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

use myfit_core::models::MuscleGroup;
use serde::{Deserialize, Serialize};

/// Aggregate statistics derived from a user's workout and weight history
///
/// Every field degrades gracefully: a brand-new user with no history gets
/// zeroes and `None`s, never an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsSummary {
    /// Weekly goal completion, clamped to 0..=100
    pub weekly_pct: u8,
    /// Monthly goal completion, clamped to 0..=100
    pub monthly_pct: u8,
    /// Current consecutive-day streak, anchored to today with a one-day grace
    pub streak: u32,
    /// Distinct training days since the start of the current week
    pub weekly_count: u32,
    /// Most-trained muscle group this calendar month
    pub most_trained: Option<MuscleGroup>,
    /// Muscle group most in need of attention
    pub recommendation: Option<NeglectRecommendation>,
    /// Short-term weight trend over the last ~two weeks of logs
    pub weight_trend: Option<WeightTrend>,
}

impl StatsSummary {
    /// Summary for a user with no history at all
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            weekly_pct: 0,
            monthly_pct: 0,
            streak: 0,
            weekly_count: 0,
            most_trained: None,
            recommendation: None,
            weight_trend: None,
        }
    }
}

/// A muscle group the user has neglected longest
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NeglectRecommendation {
    /// The neglected group
    pub muscle: MuscleGroup,
    /// Whole days since it was last trained; 0 when `never_trained`
    pub days_since: u32,
    /// The group has never appeared in any workout entry
    pub never_trained: bool,
}

impl NeglectRecommendation {
    /// Human-readable nudge for the client to display
    #[must_use]
    pub fn message(&self) -> String {
        if self.never_trained {
            format!("You haven't trained {} yet", self.muscle)
        } else {
            format!(
                "You haven't trained {} in {} day{}",
                self.muscle,
                self.days_since,
                if self.days_since == 1 { "" } else { "s" }
            )
        }
    }
}

/// Occurrence count for one muscle group within a month
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MuscleGroupCount {
    /// The tallied group
    pub muscle_group: MuscleGroup,
    /// Times it appeared across the month's entries
    pub count: u32,
}

/// Per-month training breakdown for the monthly statistics view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlyBreakdown {
    /// Distinct training days in the month
    pub training_days: u32,
    /// Occurrence tallies in first-encountered order
    pub muscle_groups: Vec<MuscleGroupCount>,
    /// Highest-count group, ties going to the group tallied first
    pub most_trained: Option<MuscleGroup>,
}

/// Direction of the short-term weight trend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Recent average is above the previous average
    Up,
    /// Recent average is at or below the previous average
    Down,
}

/// Short-term weight trend: recent 7-log mean vs. the prior 7-log mean
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeightTrend {
    /// Direction of the change
    pub direction: TrendDirection,
    /// Absolute change in kilograms, rounded to one decimal place
    pub magnitude: f64,
    /// The change is under 0.1 kg and should read as "holding steady"
    pub stable: bool,
}
