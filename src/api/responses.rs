//! API response structures

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::Mode;
use crate::surface::PanelSnapshot;

/// API response structure for the toggle endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub mode: Mode,
    pub panel: PanelSnapshot,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, mode: Mode, panel: PanelSnapshot) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            mode,
            panel,
        }
    }

    /// Create a response for a completed mode switch
    pub fn switched(message: String, mode: Mode, panel: PanelSnapshot) -> Self {
        Self::new("switched".to_string(), message, mode, panel)
    }
}

/// Full status response with scheduler and panel state
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub mode: Mode,
    pub cycle_index: u64,
    pub running: bool,
    pub panel: PanelSnapshot,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: "0.2.0".to_string(),
        }
    }
}
