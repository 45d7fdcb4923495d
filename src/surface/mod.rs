//! Presentation surface module
//!
//! The scheduler never talks to a display directly; it drives whatever
//! implements [`SimulationSurface`]. The production surface is an in-memory
//! panel snapshot served over HTTP, and tests substitute a recording fake.

pub mod panel;

use std::time::Duration;

use thiserror::Error;

use crate::state::{LightColor, ModeReadout};

// Re-export main types
pub use panel::{PanelSnapshot, PanelSurface};

/// A required panel element was absent when the simulation started
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("missing simulation element: {0}")]
    MissingElement(&'static str),
}

/// Motion state applied to the car elements of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficMotion {
    /// Cars hold in place
    Paused,
    /// Cars loop across the intersection, one lap per `lap`
    Running { lap: Duration },
}

/// Capability interface the scheduler drives
///
/// All mutators are infallible overwrites; element presence is checked once
/// up front via [`SimulationSurface::probe`].
pub trait SimulationSurface: Send + Sync + 'static {
    /// Check that every element the simulation needs is present
    fn probe(&self) -> Result<(), SurfaceError>;

    /// Mark one light active, exclusive of all others
    fn set_light(&self, light: LightColor);

    /// Set the motion state of all car elements
    fn set_traffic(&self, motion: TrafficMotion);

    /// Set the mode labels, their colors and the toggle cue
    fn set_readout(&self, readout: &ModeReadout);
}
