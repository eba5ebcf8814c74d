// ABOUTME: Seeds a demo user with a few weeks of workouts and weight logs
// ABOUTME: Development utility so the client has data to render on first run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

//! # Demo Data Seeder
//!
//! Creates (or reuses) a `demo` user and backfills four weeks of plausible
//! workouts plus daily weight logs trending gently downward. Intended for
//! local development only.

use anyhow::{anyhow, Result};
use chrono::{Days, Utc};
use clap::Parser;
use myfit_server::{
    auth::AuthManager,
    config::ServerConfig,
    database::Database,
    logging,
};
use myfit_core::models::{MuscleGroup, User};
use tracing::info;

#[derive(Parser)]
#[command(name = "seed-demo-data")]
#[command(about = "Seed a demo user with workout and weight history")]
struct Args {
    /// Demo account username
    #[arg(long, default_value = "demo")]
    username: String,

    /// Demo account password
    #[arg(long, default_value = "demo1234")]
    password: String,
}

/// Rotation used to backfill workouts, one entry per weekday index
const ROTATION: [&[MuscleGroup]; 7] = [
    &[],                                          // Sunday: rest
    &[MuscleGroup::Chest, MuscleGroup::Triceps],  // Monday
    &[MuscleGroup::Back, MuscleGroup::Biceps],    // Tuesday
    &[MuscleGroup::Legs],                         // Wednesday
    &[MuscleGroup::Shoulders, MuscleGroup::Abs],  // Thursday
    &[MuscleGroup::Cardio, MuscleGroup::Stretching], // Friday
    &[],                                          // Saturday: rest
];

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_from_env()?;

    let config = ServerConfig::from_env()?;
    let database = Database::new(&config.database_url.to_connection_string()).await?;

    let user = match database.get_user_by_username(&args.username).await? {
        Some(existing) => {
            info!("reusing existing user {}", existing.username);
            existing
        }
        None => {
            let password_hash = AuthManager::hash_password(&args.password)
                .map_err(|e| anyhow!("hashing failed: {e}"))?;
            let user = User::new(args.username.clone(), password_hash);
            database.create_user(&user).await?;
            info!("created demo user {} ({})", user.username, user.id);
            user
        }
    };

    let today = Utc::now().date_naive();
    let mut workouts = 0;
    let mut weights = 0;

    for offset in 0..28u64 {
        let day = today - Days::new(offset);
        let weekday = chrono::Datelike::weekday(&day).num_days_from_sunday() as usize;

        let groups = ROTATION[weekday];
        if !groups.is_empty() {
            database
                .create_workout(user.id, day, groups, Some("seeded session"))
                .await?;
            workouts += 1;
        }

        // Gentle downward trend with a small wobble
        let weight_kg = 80.0 + (offset as f64) * 0.05 + f64::from(weekday as u8 % 2) * 0.1;
        database
            .create_weight_log(user.id, day, weight_kg, None)
            .await?;
        weights += 1;
    }

    info!("seeded {workouts} workouts and {weights} weight logs for {}", user.username);
    Ok(())
}
