//! Control modes and their panel readout

use std::fmt;

use serde::{Deserialize, Serialize};

use super::phase::{Schedule, ADAPTIVE_SCHEDULE, FIXED_SCHEDULE};

/// Which signal plan currently governs phase advances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Conventional fixed-schedule control
    Fixed,
    /// Simulated AI adaptive control
    Adaptive,
}

impl Mode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            Mode::Fixed => Mode::Adaptive,
            Mode::Adaptive => Mode::Fixed,
        }
    }

    /// Signal plan for this mode
    pub fn schedule(&self) -> &'static Schedule {
        match self {
            Mode::Fixed => &FIXED_SCHEDULE,
            Mode::Adaptive => &ADAPTIVE_SCHEDULE,
        }
    }

    /// Panel readout for this mode
    pub fn readout(&self) -> ModeReadout {
        match self {
            Mode::Fixed => FIXED_READOUT,
            Mode::Adaptive => ADAPTIVE_READOUT,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Fixed => write!(f, "fixed"),
            Mode::Adaptive => write!(f, "adaptive"),
        }
    }
}

/// A piece of panel text with its display color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styled {
    pub text: &'static str,
    pub color: &'static str,
}

/// Everything the panel shows for one mode besides the light itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeReadout {
    pub waiting_time: Styled,
    pub emissions: Styled,
    pub system_type: Styled,
    /// Label offered on the toggle control while this mode is active
    pub toggle_label: &'static str,
    /// Two-stop background gradient behind the toggle control
    pub toggle_gradient: (&'static str, &'static str),
}

// Comparison figures are fixed display copy, not derived from the schedules.
const FIXED_READOUT: ModeReadout = ModeReadout {
    waiting_time: Styled {
        text: "High",
        color: "#ff3333",
    },
    emissions: Styled {
        text: "High",
        color: "#ff3333",
    },
    system_type: Styled {
        text: "Fixed Schedule",
        color: "#ff9933",
    },
    toggle_label: "Switch to AI Control",
    toggle_gradient: ("#ff6600", "#ff9933"),
};

const ADAPTIVE_READOUT: ModeReadout = ModeReadout {
    waiting_time: Styled {
        text: "Low (-21.6%)",
        color: "#00ff88",
    },
    emissions: Styled {
        text: "Low (-31.73%)",
        color: "#00ff88",
    },
    system_type: Styled {
        text: "AI Adaptive",
        color: "#00d4ff",
    },
    toggle_label: "Switch to Fixed Schedule",
    toggle_gradient: ("#00ff88", "#66ff99"),
};
