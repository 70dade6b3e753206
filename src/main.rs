// SPDX-License-Identifier: MIT

//! Challenge-Board API Server
//!
//! Serves the fitness-challenge scoring engine over a snapshot-in,
//! ranking-out JSON contract.

use challenge_board::{config::Config, services::ScoringEngine, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(
        port = config.port,
        rule_version = %config.rules.version,
        collective_day_points = config.rules.collective_day_points,
        "Starting Challenge-Board API"
    );

    // The engine is pure; one instance serves every request
    let engine = ScoringEngine::new(config.rules.clone());

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        engine,
    });

    // Build router
    let app = challenge_board::routes::create_router(state);

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
                .add_directive("challenge_board=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
