//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};
use tracing::{error, info};

use crate::state::AppState;

use super::responses::{ApiResponse, HealthResponse, StatusResponse};

/// Handle POST /toggle - switch between fixed and adaptive control
pub async fn toggle_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, StatusCode> {
    let snapshot = match state.scheduler.toggle_mode() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Failed to toggle simulation mode: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    state.record_action(&format!("toggle -> {}", snapshot.mode));

    let panel = match state.panel.snapshot() {
        Ok(panel) => panel,
        Err(e) => {
            error!("Failed to read panel: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    info!(
        "Toggle endpoint called - simulation now under {} control",
        snapshot.mode
    );
    Ok(Json(ApiResponse::switched(
        format!("Simulation switched to {} control", snapshot.mode),
        snapshot.mode,
        panel,
    )))
}

/// Handle GET /status - return scheduler and panel state
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, StatusCode> {
    let snapshot = match state.scheduler.snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Failed to get scheduler state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let panel = match state.panel.snapshot() {
        Ok(panel) => panel,
        Err(e) => {
            error!("Failed to read panel: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        mode: snapshot.mode,
        cycle_index: snapshot.cycle_index,
        running: snapshot.running,
        panel,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
