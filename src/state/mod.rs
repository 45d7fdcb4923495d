//! State management module
//!
//! This module contains the simulation's data model and the application
//! state shared with the HTTP layer.

pub mod app_state;
pub mod mode;
pub mod phase;
pub mod scheduler_state;

// Re-export main types
pub use app_state::AppState;
pub use mode::{Mode, ModeReadout, Styled};
pub use phase::{LightColor, Phase, Schedule, ADAPTIVE_SCHEDULE, FIXED_SCHEDULE};
pub use scheduler_state::SchedulerState;
