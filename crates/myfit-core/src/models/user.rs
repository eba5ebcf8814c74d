// ABOUTME: User account and per-user settings records
// ABOUTME: Users own every other row in the system; settings hold the weekly training goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default weekly training-day goal
pub const DEFAULT_WEEKLY_GOAL: u32 = 4;

/// Upper bound on the weekly goal (days per week)
pub const MAX_WEEKLY_GOAL: u32 = 7;

/// A registered user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Stable user identifier
    pub id: Uuid,
    /// Unique login name
    pub username: String,
    /// bcrypt password hash, never serialized to clients
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the account was created
    pub created_at: DateTime<Utc>,
    /// Last authenticated activity
    pub last_active: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh id and current timestamps
    #[must_use]
    pub fn new(username: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            created_at: now,
            last_active: now,
        }
    }
}

/// Per-user application settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSettings {
    /// Owning user
    pub user_id: Uuid,
    /// Target number of distinct training days per week, 1..=7
    pub weekly_goal: u32,
}

impl UserSettings {
    /// Default settings for a user with no stored row
    #[must_use]
    pub const fn defaults(user_id: Uuid) -> Self {
        Self {
            user_id,
            weekly_goal: DEFAULT_WEEKLY_GOAL,
        }
    }
}
