//! Green Wave - A state-managed HTTP server simulating traffic-light control
//!
//! This library simulates a single intersection switching between a fixed
//! signal plan and an adaptive one, and serves the live panel state over
//! HTTP. The scheduler drives an abstract presentation surface, so the same
//! core runs against the in-memory panel or a test fake.

pub mod api;
pub mod config;
pub mod scheduler;
pub mod state;
pub mod surface;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use scheduler::TrafficScheduler;
pub use state::AppState;
pub use surface::{PanelSurface, SimulationSurface};
pub use utils::signals::shutdown_signal;
