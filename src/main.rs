// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout Map Log headless host
//!
//! Restores the saved workout history from the data directory and prints
//! it, using logging stand-ins for the map and form.

use workout_map_log::{
    config::Config, db::FileStore, error::AppError, services::WorkoutFactory,
    surfaces::headless, AppController,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        data_dir = %config.data_dir.display(),
        key = %config.storage_key,
        "Starting Workout Map Log"
    );

    // Open the file-backed store
    let kv = FileStore::open(&config.data_dir)?;

    let surfaces = headless::stdout_surfaces(config.home);
    let mut app = AppController::new(&config, kv, WorkoutFactory::new(), surfaces);

    match app.start() {
        Ok(()) => {}
        // Already reported to the user; the history is still listed.
        Err(AppError::LocationUnavailable(_)) => {}
        Err(e) => return Err(e.into()),
    }

    tracing::info!(count = app.workouts().len(), "History listed");
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,workout_map_log=debug")),
        )
        .with(format)
        .init();
}
