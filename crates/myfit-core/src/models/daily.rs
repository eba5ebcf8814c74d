// ABOUTME: Per-day tracking records: hydration volume and supplement intake
// ABOUTME: One row per (user, date) with upsert semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default daily hydration goal in milliliters
pub const DEFAULT_HYDRATION_GOAL_ML: i64 = 2500;

/// Water intake for one calendar day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HydrationLog {
    /// Owning user
    pub user_id: Uuid,
    /// Calendar day
    pub date: NaiveDate,
    /// Volume drunk so far, in milliliters
    pub volume_ml: i64,
    /// Daily goal in milliliters
    pub goal_ml: i64,
}

impl HydrationLog {
    /// Empty log for a day with no record yet
    #[must_use]
    pub const fn empty(user_id: Uuid, date: NaiveDate) -> Self {
        Self {
            user_id,
            date,
            volume_ml: 0,
            goal_ml: DEFAULT_HYDRATION_GOAL_ML,
        }
    }
}

/// Supplement intake flags for one calendar day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupplementLog {
    /// Owning user
    pub user_id: Uuid,
    /// Calendar day
    pub date: NaiveDate,
    /// Morning dose taken
    pub taken_morning: bool,
    /// Evening dose taken
    pub taken_evening: bool,
}

impl SupplementLog {
    /// Empty log for a day with no record yet
    #[must_use]
    pub const fn empty(user_id: Uuid, date: NaiveDate) -> Self {
        Self {
            user_id,
            date,
            taken_morning: false,
            taken_evening: false,
        }
    }
}
