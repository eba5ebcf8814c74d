// ABOUTME: Core domain types for the MyFit fitness tracking platform
// ABOUTME: Foundation crate with muscle-group vocabulary, record types, and unified errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

#![deny(unsafe_code)]

//! # MyFit Core
//!
//! Foundation crate providing the shared domain types for the MyFit platform.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and HTTP response mapping
//! - **models**: Domain records (workouts, weight logs, measurements, plans, users)

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Domain records (workouts, weight logs, measurements, hydration, plans, users)
pub mod models;
