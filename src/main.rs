// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tracing_subscriber::EnvFilter;

use school_timetable::application::timetable_service::{TimetableService, ViewGrids};
use school_timetable::infrastructure::api_provider::ApiScheduleProvider;
use school_timetable::infrastructure::config::load_app_config;
use school_timetable::presentation::app_state::AppState;
use school_timetable::presentation::routes::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Create provider (infrastructure layer)
    let provider = Arc::new(ApiScheduleProvider::new(
        &config.backend.base_url,
        Duration::from_secs(config.backend.timeout_secs),
        config.backend.endpoints.clone(),
    )?);

    // Create services (application layer)
    let grids = ViewGrids::with_min_rows(
        config.grid.public_min_rows,
        config.grid.operator_min_rows,
    );
    let timetable_service = TimetableService::new(provider, grids);

    // Create application state
    let state = Arc::new(AppState { timetable_service });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config.server.listen_addr.parse()?;
    tracing::info!(
        "Starting school-timetable service on {} (backend {})",
        addr,
        config.backend.base_url
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
