// ABOUTME: Daily log database operations: hydration volume and supplement intake
// ABOUTME: One row per (user, date) with upsert-on-conflict writes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

use super::Database;
use chrono::NaiveDate;
use myfit_core::errors::{AppError, AppResult};
use myfit_core::models::{HydrationLog, SupplementLog};
use sqlx::Row;
use uuid::Uuid;

impl Database {
    /// Create the hydration and supplement tables
    pub(super) async fn migrate_daily(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS hydration_logs (
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                date TEXT NOT NULL,
                volume_ml INTEGER NOT NULL,
                goal_ml INTEGER NOT NULL,
                PRIMARY KEY (user_id, date)
            )
            ",
        )
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to migrate hydration_logs: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS supplement_logs (
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                date TEXT NOT NULL,
                taken_morning INTEGER NOT NULL DEFAULT 0,
                taken_evening INTEGER NOT NULL DEFAULT 0,
                PRIMARY KEY (user_id, date)
            )
            ",
        )
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to migrate supplement_logs: {e}")))?;

        Ok(())
    }

    /// Hydration for one day; absent rows read as an empty log
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_hydration(&self, user_id: Uuid, date: NaiveDate) -> AppResult<HydrationLog> {
        let row =
            sqlx::query("SELECT * FROM hydration_logs WHERE user_id = $1 AND date = $2")
                .bind(user_id.to_string())
                .bind(date)
                .fetch_optional(self.pool())
                .await
                .map_err(|e| AppError::database(format!("Failed to get hydration: {e}")))?;

        Ok(row.map_or_else(
            || HydrationLog::empty(user_id, date),
            |r| HydrationLog {
                user_id,
                date,
                volume_ml: r.get("volume_ml"),
                goal_ml: r.get("goal_ml"),
            },
        ))
    }

    /// Upsert hydration for one day and return the stored row
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn upsert_hydration(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        volume_ml: i64,
        goal_ml: i64,
    ) -> AppResult<HydrationLog> {
        sqlx::query(
            r"
            INSERT INTO hydration_logs (user_id, date, volume_ml, goal_ml)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, date) DO UPDATE SET
                volume_ml = excluded.volume_ml,
                goal_ml = excluded.goal_ml
            ",
        )
        .bind(user_id.to_string())
        .bind(date)
        .bind(volume_ml)
        .bind(goal_ml)
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to upsert hydration: {e}")))?;

        Ok(HydrationLog {
            user_id,
            date,
            volume_ml,
            goal_ml,
        })
    }

    /// Supplement intake for one day; absent rows read as an empty log
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_supplements(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<SupplementLog> {
        let row =
            sqlx::query("SELECT * FROM supplement_logs WHERE user_id = $1 AND date = $2")
                .bind(user_id.to_string())
                .bind(date)
                .fetch_optional(self.pool())
                .await
                .map_err(|e| AppError::database(format!("Failed to get supplements: {e}")))?;

        Ok(row.map_or_else(
            || SupplementLog::empty(user_id, date),
            |r| SupplementLog {
                user_id,
                date,
                taken_morning: r.get::<i64, _>("taken_morning") != 0,
                taken_evening: r.get::<i64, _>("taken_evening") != 0,
            },
        ))
    }

    /// Upsert supplement intake for one day and return the stored row
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn upsert_supplements(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        taken_morning: bool,
        taken_evening: bool,
    ) -> AppResult<SupplementLog> {
        sqlx::query(
            r"
            INSERT INTO supplement_logs (user_id, date, taken_morning, taken_evening)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, date) DO UPDATE SET
                taken_morning = excluded.taken_morning,
                taken_evening = excluded.taken_evening
            ",
        )
        .bind(user_id.to_string())
        .bind(date)
        .bind(i64::from(taken_morning))
        .bind(i64::from(taken_evening))
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to upsert supplements: {e}")))?;

        Ok(SupplementLog {
            user_id,
            date,
            taken_morning,
            taken_evening,
        })
    }
}
