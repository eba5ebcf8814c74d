// ABOUTME: Per-user settings database operations
// ABOUTME: Weekly training goal with defaults for users who never saved settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

use super::Database;
use myfit_core::errors::{AppError, AppResult};
use myfit_core::models::UserSettings;
use sqlx::Row;
use uuid::Uuid;

impl Database {
    /// Create the settings table
    pub(super) async fn migrate_settings(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS user_settings (
                user_id TEXT PRIMARY KEY REFERENCES users(id) ON DELETE CASCADE,
                weekly_goal INTEGER NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to migrate user_settings: {e}")))?;

        Ok(())
    }

    /// Settings for one user; absent rows read as defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_settings(&self, user_id: Uuid) -> AppResult<UserSettings> {
        let row = sqlx::query("SELECT weekly_goal FROM user_settings WHERE user_id = $1")
            .bind(user_id.to_string())
            .fetch_optional(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to get settings: {e}")))?;

        Ok(row.map_or_else(
            || UserSettings::defaults(user_id),
            |r| UserSettings {
                user_id,
                weekly_goal: r.get::<i64, _>("weekly_goal") as u32,
            },
        ))
    }

    /// Upsert settings for one user and return the stored row
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn update_settings(&self, user_id: Uuid, weekly_goal: u32) -> AppResult<UserSettings> {
        sqlx::query(
            r"
            INSERT INTO user_settings (user_id, weekly_goal)
            VALUES ($1, $2)
            ON CONFLICT (user_id) DO UPDATE SET weekly_goal = excluded.weekly_goal
            ",
        )
        .bind(user_id.to_string())
        .bind(i64::from(weekly_goal))
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to update settings: {e}")))?;

        Ok(UserSettings {
            user_id,
            weekly_goal,
        })
    }
}
