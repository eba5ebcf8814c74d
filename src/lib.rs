// ABOUTME: Main library entry point for the MyFit fitness tracking API
// ABOUTME: Provides the REST API, database layer, and authentication for workout logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

#![deny(unsafe_code)]

//! # MyFit Server
//!
//! A multi-user fitness-tracking backend: users log workouts by muscle group,
//! track body weight, measurements, and progress photos, monitor hydration and
//! supplement intake, manage workout plans, and view aggregated statistics
//! (streaks, weekly/monthly goals, trends).
//!
//! ## Architecture
//!
//! The server follows a modular architecture:
//! - **Routes**: axum REST handlers, one router per domain
//! - **Database**: sqlx/SQLite managers, one per domain, over a shared pool
//! - **Auth**: JWT session tokens and bcrypt password hashing
//! - **Stats**: derived statistics delegated to the pure `myfit-stats` engine
//! - **Config**: environment-based configuration management
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use myfit_server::config::ServerConfig;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("MyFit server configured for port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Authentication and session management
pub mod auth;

/// Configuration management from environment variables
pub mod config;

/// SQLite database layer with per-domain managers
pub mod database;

/// Production logging and structured output
pub mod logging;

/// HTTP routes for the REST API
pub mod routes;

/// Server assembly: shared resources, router construction, and serving
pub mod server;

// Re-export the core error types so binaries and tests use one path
pub use myfit_core::errors;
