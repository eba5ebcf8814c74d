// ABOUTME: Workout entry database operations
// ABOUTME: CRUD over the workouts table with date-range filtering, scoped by user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

use super::Database;
use chrono::{DateTime, NaiveDate, Utc};
use myfit_core::errors::{AppError, AppResult};
use myfit_core::models::{MuscleGroup, Workout};
use sqlx::Row;
use uuid::Uuid;

fn row_to_workout(row: &sqlx::sqlite::SqliteRow) -> AppResult<Workout> {
    let user_id: String = row.get("user_id");
    let muscle_groups: String = row.get("muscle_groups");
    Ok(Workout {
        id: row.get("id"),
        user_id: Uuid::parse_str(&user_id)
            .map_err(|e| AppError::database(format!("Corrupt user id {user_id}: {e}")))?,
        date: row.get::<NaiveDate, _>("date"),
        muscle_groups: MuscleGroup::parse_csv(&muscle_groups),
        notes: row.get("notes"),
        created_at: row.get::<DateTime<Utc>, _>("created_at"),
    })
}

impl Database {
    /// Create the workouts table
    pub(super) async fn migrate_workouts(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                date TEXT NOT NULL,
                muscle_groups TEXT NOT NULL,
                notes TEXT,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to migrate workouts: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_workouts_user_date ON workouts(user_id, date)",
        )
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to index workouts: {e}")))?;

        Ok(())
    }

    /// List a user's workouts, newest first, optionally bounded by date
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list_workouts(
        &self,
        user_id: Uuid,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> AppResult<Vec<Workout>> {
        let rows = sqlx::query(
            r"
            SELECT * FROM workouts
            WHERE user_id = $1
              AND ($2 IS NULL OR date >= $2)
              AND ($3 IS NULL OR date <= $3)
            ORDER BY date DESC, created_at DESC
            ",
        )
        .bind(user_id.to_string())
        .bind(start_date)
        .bind(end_date)
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to list workouts: {e}")))?;

        rows.iter().map(row_to_workout).collect()
    }

    /// All of a user's entries for one calendar day, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn workouts_for_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Vec<Workout>> {
        let rows = sqlx::query(
            "SELECT * FROM workouts WHERE user_id = $1 AND date = $2 ORDER BY created_at DESC",
        )
        .bind(user_id.to_string())
        .bind(date)
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to get workouts for date: {e}")))?;

        rows.iter().map(row_to_workout).collect()
    }

    /// Insert a workout entry and return the stored row
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create_workout(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        muscle_groups: &[MuscleGroup],
        notes: Option<&str>,
    ) -> AppResult<Workout> {
        let created_at = Utc::now();
        let result = sqlx::query(
            r"
            INSERT INTO workouts (user_id, date, muscle_groups, notes, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(user_id.to_string())
        .bind(date)
        .bind(MuscleGroup::join_csv(muscle_groups))
        .bind(notes)
        .bind(created_at)
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to create workout: {e}")))?;

        Ok(Workout {
            id: result.last_insert_rowid(),
            user_id,
            date,
            muscle_groups: muscle_groups.to_vec(),
            notes: notes.map(ToOwned::to_owned),
            created_at,
        })
    }

    /// Update an entry's muscle groups and notes
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the row does not exist or belongs to
    /// another user
    pub async fn update_workout(
        &self,
        user_id: Uuid,
        workout_id: i64,
        muscle_groups: &[MuscleGroup],
        notes: Option<&str>,
    ) -> AppResult<Workout> {
        let result = sqlx::query(
            r"
            UPDATE workouts
            SET muscle_groups = $1, notes = $2
            WHERE id = $3 AND user_id = $4
            ",
        )
        .bind(MuscleGroup::join_csv(muscle_groups))
        .bind(notes)
        .bind(workout_id)
        .bind(user_id.to_string())
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to update workout: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Workout"));
        }

        let row = sqlx::query("SELECT * FROM workouts WHERE id = $1")
            .bind(workout_id)
            .fetch_one(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to reload workout: {e}")))?;
        row_to_workout(&row)
    }

    /// Delete an entry
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the row does not exist or belongs to
    /// another user
    pub async fn delete_workout(&self, user_id: Uuid, workout_id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1 AND user_id = $2")
            .bind(workout_id)
            .bind(user_id.to_string())
            .execute(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to delete workout: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Workout"));
        }
        Ok(())
    }
}
