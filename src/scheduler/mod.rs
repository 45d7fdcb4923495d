//! Traffic-light scheduler module
//!
//! This module contains the component that advances the simulated
//! intersection through its signal schedules.

pub mod controller;

// Re-export main types
pub use controller::{SchedulerSnapshot, TrafficScheduler};
