//! Light phases and the two signal schedules

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Color of the intersection's signal head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightColor {
    Red,
    Green,
    Yellow,
}

impl fmt::Display for LightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightColor::Red => write!(f, "red"),
            LightColor::Green => write!(f, "green"),
            LightColor::Yellow => write!(f, "yellow"),
        }
    }
}

/// One timed step of a schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    /// Light shown while this phase is active
    pub light: LightColor,
    /// How long the phase holds before the next advance
    pub duration: Duration,
    /// Whether cars move during this phase
    pub traffic_flows: bool,
}

/// An ordered, cyclic sequence of phases plus the car pace used while
/// traffic flows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub phases: &'static [Phase],
    /// Duration of one car loop across the intersection in flowing phases
    pub car_lap: Duration,
}

impl Schedule {
    /// Number of phases in one cycle
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Whether the schedule has no phases (never true for the built-in ones)
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Select the phase for a given advance count, wrapping cyclically
    pub fn phase_at(&self, cycle_index: u64) -> &Phase {
        &self.phases[(cycle_index % self.phases.len() as u64) as usize]
    }
}

/// Fixed signal plan: long red, medium green, short yellow
pub const FIXED_SCHEDULE: Schedule = Schedule {
    phases: &[
        Phase {
            light: LightColor::Red,
            duration: Duration::from_millis(4000),
            traffic_flows: false,
        },
        Phase {
            light: LightColor::Green,
            duration: Duration::from_millis(3000),
            traffic_flows: true,
        },
        Phase {
            light: LightColor::Yellow,
            duration: Duration::from_millis(1000),
            traffic_flows: false,
        },
    ],
    car_lap: Duration::from_millis(4000),
};

/// Adaptive signal plan: shorter red, longer green, quicker car loops
pub const ADAPTIVE_SCHEDULE: Schedule = Schedule {
    phases: &[
        Phase {
            light: LightColor::Red,
            duration: Duration::from_millis(2000),
            traffic_flows: false,
        },
        Phase {
            light: LightColor::Green,
            duration: Duration::from_millis(5000),
            traffic_flows: true,
        },
        Phase {
            light: LightColor::Yellow,
            duration: Duration::from_millis(800),
            traffic_flows: false,
        },
    ],
    car_lap: Duration::from_millis(2500),
};
