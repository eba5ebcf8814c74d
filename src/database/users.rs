// ABOUTME: User account database operations
// ABOUTME: Handles registration lookups, creation, and activity timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

use super::Database;
use chrono::{DateTime, Utc};
use myfit_core::errors::{AppError, AppResult};
use myfit_core::models::User;
use sqlx::Row;
use uuid::Uuid;

fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> AppResult<User> {
    let id: String = row.get("id");
    Ok(User {
        id: Uuid::parse_str(&id)
            .map_err(|e| AppError::database(format!("Corrupt user id {id}: {e}")))?,
        username: row.get("username"),
        password_hash: row.get("password_hash"),
        created_at: row.get::<DateTime<Utc>, _>("created_at"),
        last_active: row.get::<DateTime<Utc>, _>("last_active"),
    })
}

impl Database {
    /// Create the users table
    pub(super) async fn migrate_users(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                created_at TEXT NOT NULL,
                last_active TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to migrate users: {e}")))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_username ON users(username)")
            .execute(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to index users: {e}")))?;

        Ok(())
    }

    /// Insert a new user
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` when the username is taken
    pub async fn create_user(&self, user: &User) -> AppResult<()> {
        let result = sqlx::query(
            r"
            INSERT INTO users (id, username, password_hash, created_at, last_active)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .bind(user.last_active)
        .execute(self.pool())
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(AppError::already_exists("User"))
            }
            Err(e) => Err(AppError::database(format!("Failed to create user: {e}"))),
        }
    }

    /// Look up a user by login name
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to get user: {e}")))?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// Look up a user by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_user(&self, user_id: Uuid) -> AppResult<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE id = $1")
            .bind(user_id.to_string())
            .fetch_optional(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to get user: {e}")))?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// Record authenticated activity for a user
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn update_last_active(&self, user_id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE users SET last_active = $1 WHERE id = $2")
            .bind(Utc::now())
            .bind(user_id.to_string())
            .execute(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to update last_active: {e}")))?;
        Ok(())
    }
}
