//! Green Wave - A state-managed HTTP server simulating traffic-light control
//!
//! This is the main entry point for the green-wave application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use green_wave::{api::create_router, config::Config, state::AppState, utils::shutdown_signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "green_wave={},tower_http=info",
            config.log_level()
        ))
        .init();

    info!("Starting green-wave server v0.2.0");
    info!("Configuration: host={}, port={}", config.host, config.port);

    // Create application state and start the simulation
    let state = Arc::new(AppState::new(config.port, config.host.clone()));
    state.scheduler.initialize();

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /toggle - Switch between fixed and adaptive control");
    info!("  GET  /status - Check scheduler and panel state");
    info!("  GET  /health - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
