// ABOUTME: SQLite database handle and schema migration entry point
// ABOUTME: Per-domain operations live in sibling files as impl blocks on Database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

//! # Database Layer
//!
//! A single [`Database`] handle wraps a `SqlitePool`; each domain (users,
//! workouts, body metrics, daily logs, plans, settings) contributes its
//! operations from its own file as an `impl Database` block. The schema is
//! created on startup with idempotent DDL, so there is no external migration
//! step.
//!
//! Every row in the system is scoped by `user_id`; a lookup that crosses a
//! user boundary behaves exactly like a missing row.

mod body;
mod daily;
mod plans;
mod settings;
mod users;
mod workouts;

use myfit_core::errors::{AppError, AppResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::info;

/// Shared database handle
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if necessary) the database and run schema migration
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails or migration DDL fails
    pub async fn new(connection_string: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(connection_string)
            .map_err(|e| AppError::database(format!("Invalid database URL: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true);

        // An in-memory database exists per-connection, so the pool must not
        // fan out or later connections would see an empty schema.
        let max_connections = if connection_string.contains(":memory:") {
            1
        } else {
            5
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;
        info!("database ready at {connection_string}");
        Ok(db)
    }

    /// The underlying pool, for domain impls in this module
    pub(crate) const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create all tables and indexes
    async fn migrate(&self) -> AppResult<()> {
        self.migrate_users().await?;
        self.migrate_workouts().await?;
        self.migrate_body().await?;
        self.migrate_daily().await?;
        self.migrate_plans().await?;
        self.migrate_settings().await?;
        Ok(())
    }
}
