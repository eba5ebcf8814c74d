// ABOUTME: User authentication route handlers for registration and login
// ABOUTME: Provides REST endpoints issuing JWT session tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

//! Authentication routes for account creation and login
//!
//! Registration is open (personal-use deployment model): anyone may create an
//! account with a unique username. Both endpoints return a session token so
//! the client can log the user straight in.

use crate::auth::AuthManager;
use crate::server::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use myfit_core::errors::AppError;
use myfit_core::models::User;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Longest accepted username
const MAX_USERNAME_LEN: usize = 64;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Registration request
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Desired login name
    pub username: String,
    /// Plaintext password, hashed before storage
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Login name
    pub username: String,
    /// Plaintext password
    pub password: String,
}

/// Public user info embedded in auth responses
#[derive(Debug, Serialize, Deserialize)]
pub struct UserInfo {
    /// User id
    pub id: String,
    /// Login name
    pub username: String,
}

/// Successful auth response carrying a session token
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// JWT bearer token
    pub token: String,
    /// Token expiry (RFC 3339)
    pub expires_at: String,
    /// The authenticated user
    pub user: UserInfo,
}

// ============================================================================
// Auth Routes
// ============================================================================

/// Authentication routes handler
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/auth/register", post(Self::register))
            .route("/api/auth/login", post(Self::login))
            .with_state(resources)
    }

    /// Register a new account and issue a session token
    async fn register(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<RegisterRequest>,
    ) -> Result<Response, AppError> {
        let username = request.username.trim();
        if username.is_empty() || request.password.is_empty() {
            return Err(AppError::invalid_input(
                "Username and password are required",
            ));
        }
        if username.len() > MAX_USERNAME_LEN {
            return Err(AppError::invalid_input("Username is too long"));
        }

        let password_hash = AuthManager::hash_password(&request.password)?;
        let user = User::new(username.to_owned(), password_hash);
        resources.database.create_user(&user).await?;

        info!(user_id = %user.id, "registered new user");
        let response = Self::session_response(&resources, &user)?;
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Verify credentials and issue a session token
    async fn login(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<LoginRequest>,
    ) -> Result<Response, AppError> {
        if request.username.is_empty() || request.password.is_empty() {
            return Err(AppError::invalid_input(
                "Username and password are required",
            ));
        }

        // Unknown user and wrong password return the same message
        let user = resources
            .database
            .get_user_by_username(request.username.trim())
            .await?
            .ok_or_else(|| AppError::auth_invalid("Invalid credentials"))?;

        if !AuthManager::verify_password(&request.password, &user.password_hash)? {
            return Err(AppError::auth_invalid("Invalid credentials"));
        }

        resources.database.update_last_active(user.id).await?;

        let response = Self::session_response(&resources, &user)?;
        Ok(Json(response).into_response())
    }

    fn session_response(
        resources: &Arc<ServerResources>,
        user: &User,
    ) -> Result<AuthResponse, AppError> {
        Ok(AuthResponse {
            token: resources.auth.generate_token(user)?,
            expires_at: resources.auth.token_expiry().to_rfc3339(),
            user: UserInfo {
                id: user.id.to_string(),
                username: user.username.clone(),
            },
        })
    }
}
