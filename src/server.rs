// ABOUTME: Server assembly: shared resources, router construction, and serving
// ABOUTME: Wires every domain router behind tracing, CORS, and body-limit layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

//! Server assembly and lifecycle

use crate::auth::AuthManager;
use crate::database::Database;
use crate::routes::{
    auth::AuthRoutes, health::HealthRoutes, hydration::HydrationRoutes, metrics::MetricsRoutes,
    plans::PlanRoutes, settings::SettingsRoutes, supplements::SupplementRoutes,
    workouts::WorkoutRoutes,
};
use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Request body ceiling; generous because progress photos arrive as base64
const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Shared state handed to every route handler
pub struct ServerResources {
    /// Database handle
    pub database: Database,
    /// JWT and password manager
    pub auth: AuthManager,
}

impl ServerResources {
    /// Bundle the shared resources
    #[must_use]
    pub const fn new(database: Database, auth: AuthManager) -> Self {
        Self { database, auth }
    }
}

/// Assemble the full application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(AuthRoutes::routes(resources.clone()))
        .merge(WorkoutRoutes::routes(resources.clone()))
        .merge(MetricsRoutes::routes(resources.clone()))
        .merge(HydrationRoutes::routes(resources.clone()))
        .merge(SupplementRoutes::routes(resources.clone()))
        .merge(PlanRoutes::routes(resources.clone()))
        .merge(SettingsRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

/// Bind and serve until interrupted
///
/// # Errors
///
/// Returns an error if binding or serving fails
pub async fn serve(resources: Arc<ServerResources>, http_port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", http_port))
        .await
        .with_context(|| format!("failed to bind port {http_port}"))?;

    info!("listening on 0.0.0.0:{http_port}");
    axum::serve(listener, router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install ctrl-c handler: {e}");
        return;
    }
    info!("shutdown signal received");
}
