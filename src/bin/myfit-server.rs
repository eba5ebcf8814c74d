// ABOUTME: Server binary: loads configuration, opens the database, and serves the API
// ABOUTME: Production entry point with structured logging and graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

//! # MyFit API Server Binary

use anyhow::Result;
use clap::Parser;
use myfit_server::{
    auth::{generate_jwt_secret, AuthManager},
    config::ServerConfig,
    database::Database,
    logging,
    server::{self, ServerResources},
};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "myfit-server")]
#[command(about = "MyFit - multi-user fitness tracking API")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL (e.g. sqlite:./data/myfit.db)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(url) = args.database_url {
        config.database_url = myfit_server::config::DatabaseUrl::parse_url(&url);
    }

    logging::init_from_env()?;
    info!("starting MyFit server");
    info!("{}", config.summary());

    let database = Database::new(&config.database_url.to_connection_string()).await?;

    let jwt_secret = config.auth.jwt_secret.clone().unwrap_or_else(|| {
        warn!("JWT_SECRET not set; using a generated secret (tokens will not survive restarts)");
        generate_jwt_secret()
    });
    let auth = AuthManager::new(&jwt_secret, config.auth.jwt_expiry_hours);

    let resources = Arc::new(ServerResources::new(database, auth));
    server::serve(resources, config.http_port).await
}
