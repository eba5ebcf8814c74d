// ABOUTME: Body metrics database operations: weight logs, measurements, progress photos
// ABOUTME: Append-only time series with date filtering, scoped by user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

use super::Database;
use chrono::{DateTime, NaiveDate, Utc};
use myfit_core::errors::{AppError, AppResult};
use myfit_core::models::{Measurement, ProgressPhoto, WeightLog};
use sqlx::Row;
use uuid::Uuid;

fn parse_user_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|e| AppError::database(format!("Corrupt user id {raw}: {e}")))
}

fn row_to_weight_log(row: &sqlx::sqlite::SqliteRow) -> AppResult<WeightLog> {
    Ok(WeightLog {
        id: row.get("id"),
        user_id: parse_user_id(&row.get::<String, _>("user_id"))?,
        date: row.get::<NaiveDate, _>("date"),
        weight_kg: row.get("weight_kg"),
        notes: row.get("notes"),
        created_at: row.get::<DateTime<Utc>, _>("created_at"),
    })
}

fn row_to_measurement(row: &sqlx::sqlite::SqliteRow) -> AppResult<Measurement> {
    Ok(Measurement {
        id: row.get("id"),
        user_id: parse_user_id(&row.get::<String, _>("user_id"))?,
        date: row.get::<NaiveDate, _>("date"),
        chest: row.get("chest"),
        waist: row.get("waist"),
        hips: row.get("hips"),
        left_arm: row.get("left_arm"),
        right_arm: row.get("right_arm"),
        left_thigh: row.get("left_thigh"),
        right_thigh: row.get("right_thigh"),
        left_calf: row.get("left_calf"),
        right_calf: row.get("right_calf"),
        notes: row.get("notes"),
        created_at: row.get::<DateTime<Utc>, _>("created_at"),
    })
}

fn row_to_photo(row: &sqlx::sqlite::SqliteRow) -> AppResult<ProgressPhoto> {
    Ok(ProgressPhoto {
        id: row.get("id"),
        user_id: parse_user_id(&row.get::<String, _>("user_id"))?,
        date: row.get::<NaiveDate, _>("date"),
        image_data: row.get("image_data"),
        caption: row.get("caption"),
        created_at: row.get::<DateTime<Utc>, _>("created_at"),
    })
}

impl Database {
    /// Create the weight, measurement, and photo tables
    pub(super) async fn migrate_body(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS weight_logs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                date TEXT NOT NULL,
                weight_kg REAL NOT NULL,
                notes TEXT,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to migrate weight_logs: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_weight_logs_user_date ON weight_logs(user_id, date)",
        )
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to index weight_logs: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS measurements (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                date TEXT NOT NULL,
                chest REAL,
                waist REAL,
                hips REAL,
                left_arm REAL,
                right_arm REAL,
                left_thigh REAL,
                right_thigh REAL,
                left_calf REAL,
                right_calf REAL,
                notes TEXT,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to migrate measurements: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS progress_photos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                date TEXT NOT NULL,
                image_data TEXT NOT NULL,
                caption TEXT,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to migrate progress_photos: {e}")))?;

        Ok(())
    }

    // ========================================================================
    // Weight logs
    // ========================================================================

    /// List weight logs, newest first, with optional date bounds and limit
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list_weight_logs(
        &self,
        user_id: Uuid,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        limit: Option<i64>,
    ) -> AppResult<Vec<WeightLog>> {
        let rows = sqlx::query(
            r"
            SELECT * FROM weight_logs
            WHERE user_id = $1
              AND ($2 IS NULL OR date >= $2)
              AND ($3 IS NULL OR date <= $3)
            ORDER BY date DESC, created_at DESC
            LIMIT $4
            ",
        )
        .bind(user_id.to_string())
        .bind(start_date)
        .bind(end_date)
        .bind(limit.unwrap_or(-1))
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to list weight logs: {e}")))?;

        rows.iter().map(row_to_weight_log).collect()
    }

    /// Insert a weight log and return the stored row
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create_weight_log(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        weight_kg: f64,
        notes: Option<&str>,
    ) -> AppResult<WeightLog> {
        let created_at = Utc::now();
        let result = sqlx::query(
            r"
            INSERT INTO weight_logs (user_id, date, weight_kg, notes, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(user_id.to_string())
        .bind(date)
        .bind(weight_kg)
        .bind(notes)
        .bind(created_at)
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to create weight log: {e}")))?;

        Ok(WeightLog {
            id: result.last_insert_rowid(),
            user_id,
            date,
            weight_kg,
            notes: notes.map(ToOwned::to_owned),
            created_at,
        })
    }

    /// Delete a weight log
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the row does not exist or belongs to
    /// another user
    pub async fn delete_weight_log(&self, user_id: Uuid, log_id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM weight_logs WHERE id = $1 AND user_id = $2")
            .bind(log_id)
            .bind(user_id.to_string())
            .execute(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to delete weight log: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Weight log"));
        }
        Ok(())
    }

    // ========================================================================
    // Measurements
    // ========================================================================

    /// List measurements, newest first, with optional date bounds and limit
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list_measurements(
        &self,
        user_id: Uuid,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        limit: Option<i64>,
    ) -> AppResult<Vec<Measurement>> {
        let rows = sqlx::query(
            r"
            SELECT * FROM measurements
            WHERE user_id = $1
              AND ($2 IS NULL OR date >= $2)
              AND ($3 IS NULL OR date <= $3)
            ORDER BY date DESC, created_at DESC
            LIMIT $4
            ",
        )
        .bind(user_id.to_string())
        .bind(start_date)
        .bind(end_date)
        .bind(limit.unwrap_or(-1))
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to list measurements: {e}")))?;

        rows.iter().map(row_to_measurement).collect()
    }

    /// Insert a measurement row and return it
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create_measurement(&self, measurement: &Measurement) -> AppResult<Measurement> {
        let created_at = Utc::now();
        let result = sqlx::query(
            r"
            INSERT INTO measurements (
                user_id, date, chest, waist, hips, left_arm, right_arm,
                left_thigh, right_thigh, left_calf, right_calf, notes, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ",
        )
        .bind(measurement.user_id.to_string())
        .bind(measurement.date)
        .bind(measurement.chest)
        .bind(measurement.waist)
        .bind(measurement.hips)
        .bind(measurement.left_arm)
        .bind(measurement.right_arm)
        .bind(measurement.left_thigh)
        .bind(measurement.right_thigh)
        .bind(measurement.left_calf)
        .bind(measurement.right_calf)
        .bind(&measurement.notes)
        .bind(created_at)
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to create measurement: {e}")))?;

        Ok(Measurement {
            id: result.last_insert_rowid(),
            created_at,
            ..measurement.clone()
        })
    }

    /// Delete a measurement
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the row does not exist or belongs to
    /// another user
    pub async fn delete_measurement(&self, user_id: Uuid, measurement_id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM measurements WHERE id = $1 AND user_id = $2")
            .bind(measurement_id)
            .bind(user_id.to_string())
            .execute(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to delete measurement: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Measurement"));
        }
        Ok(())
    }

    // ========================================================================
    // Progress photos
    // ========================================================================

    /// List all photos, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list_photos(&self, user_id: Uuid) -> AppResult<Vec<ProgressPhoto>> {
        let rows = sqlx::query(
            "SELECT * FROM progress_photos WHERE user_id = $1 ORDER BY date DESC, created_at DESC",
        )
        .bind(user_id.to_string())
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to list photos: {e}")))?;

        rows.iter().map(row_to_photo).collect()
    }

    /// Insert a photo and return the stored row
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create_photo(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        image_data: &str,
        caption: Option<&str>,
    ) -> AppResult<ProgressPhoto> {
        let created_at = Utc::now();
        let result = sqlx::query(
            r"
            INSERT INTO progress_photos (user_id, date, image_data, caption, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(user_id.to_string())
        .bind(date)
        .bind(image_data)
        .bind(caption)
        .bind(created_at)
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to create photo: {e}")))?;

        Ok(ProgressPhoto {
            id: result.last_insert_rowid(),
            user_id,
            date,
            image_data: image_data.to_owned(),
            caption: caption.map(ToOwned::to_owned),
            created_at,
        })
    }

    /// Delete a photo
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the row does not exist or belongs to
    /// another user
    pub async fn delete_photo(&self, user_id: Uuid, photo_id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM progress_photos WHERE id = $1 AND user_id = $2")
            .bind(photo_id)
            .bind(user_id.to_string())
            .execute(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to delete photo: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Photo"));
        }
        Ok(())
    }
}
