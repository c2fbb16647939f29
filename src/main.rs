// SPDX-License-Identifier: MIT

//! Fitness-Tracker API Server
//!
//! Serves the user and training endpoints over an in-memory record store.

use fitness_tracker::{
    config::Config,
    db::{MemoryStore, TrainingRepository, UserRepository},
    mapper::TrainingMapper,
    services::{TrainingService, UserService},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Fitness-Tracker API");

    // One store behind both repository ports
    let store = Arc::new(MemoryStore::new());
    let users: Arc<dyn UserRepository> = store.clone();
    let trainings: Arc<dyn TrainingRepository> = store;

    let user_service = UserService::new(users.clone(), trainings.clone());
    let training_service = TrainingService::new(trainings, TrainingMapper::new(users));

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        user_service,
        training_service,
    });

    // Build router
    let app = fitness_tracker::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fitness_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
