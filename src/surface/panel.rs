//! In-memory simulation panel

use std::sync::Mutex;

use serde::Serialize;
use tracing::{debug, warn};

use crate::state::{LightColor, ModeReadout, Styled};

use super::{SimulationSurface, SurfaceError, TrafficMotion};

/// A panel label as reported over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelView {
    pub text: String,
    pub color: String,
}

impl LabelView {
    fn empty() -> Self {
        Self {
            text: String::new(),
            color: String::new(),
        }
    }
}

impl From<Styled> for LabelView {
    fn from(styled: Styled) -> Self {
        Self {
            text: styled.text.to_string(),
            color: styled.color.to_string(),
        }
    }
}

/// The toggle control as reported over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleView {
    pub label: String,
    pub gradient: [String; 2],
}

impl ToggleView {
    fn empty() -> Self {
        Self {
            label: String::new(),
            gradient: [String::new(), String::new()],
        }
    }
}

/// Car motion as reported over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrafficView {
    pub moving: bool,
    pub lap_ms: Option<u64>,
}

/// Everything the panel currently shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelSnapshot {
    /// Active light, if the simulation has rendered one yet
    pub light: Option<LightColor>,
    pub traffic: TrafficView,
    pub waiting_time: LabelView,
    pub emissions: LabelView,
    pub system_type: LabelView,
    pub toggle: ToggleView,
}

impl PanelSnapshot {
    fn blank() -> Self {
        Self {
            light: None,
            traffic: TrafficView {
                moving: false,
                lap_ms: None,
            },
            waiting_time: LabelView::empty(),
            emissions: LabelView::empty(),
            system_type: LabelView::empty(),
            toggle: ToggleView::empty(),
        }
    }
}

/// Production presentation surface: a snapshot of the simulation panel,
/// mutated by the scheduler and reported by the /status endpoint
#[derive(Debug)]
pub struct PanelSurface {
    panel: Mutex<PanelSnapshot>,
}

impl PanelSurface {
    /// Create a blank panel
    pub fn new() -> Self {
        Self {
            panel: Mutex::new(PanelSnapshot::blank()),
        }
    }

    /// Clone out the current panel contents
    pub fn snapshot(&self) -> Result<PanelSnapshot, String> {
        self.panel
            .lock()
            .map(|panel| panel.clone())
            .map_err(|e| format!("Failed to lock panel: {}", e))
    }
}

impl Default for PanelSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationSurface for PanelSurface {
    fn probe(&self) -> Result<(), SurfaceError> {
        // The in-memory panel carries all of its elements by construction.
        Ok(())
    }

    fn set_light(&self, light: LightColor) {
        match self.panel.lock() {
            Ok(mut panel) => {
                panel.light = Some(light);
                debug!("panel light -> {}", light);
            }
            Err(e) => warn!("Failed to lock panel for light update: {}", e),
        }
    }

    fn set_traffic(&self, motion: TrafficMotion) {
        match self.panel.lock() {
            Ok(mut panel) => {
                panel.traffic = match motion {
                    TrafficMotion::Paused => TrafficView {
                        moving: false,
                        lap_ms: None,
                    },
                    TrafficMotion::Running { lap } => TrafficView {
                        moving: true,
                        lap_ms: Some(lap.as_millis() as u64),
                    },
                };
                debug!("panel traffic -> moving={}", panel.traffic.moving);
            }
            Err(e) => warn!("Failed to lock panel for traffic update: {}", e),
        }
    }

    fn set_readout(&self, readout: &ModeReadout) {
        match self.panel.lock() {
            Ok(mut panel) => {
                panel.waiting_time = readout.waiting_time.into();
                panel.emissions = readout.emissions.into();
                panel.system_type = readout.system_type.into();
                panel.toggle = ToggleView {
                    label: readout.toggle_label.to_string(),
                    gradient: [
                        readout.toggle_gradient.0.to_string(),
                        readout.toggle_gradient.1.to_string(),
                    ],
                };
                debug!("panel readout -> {}", panel.system_type.text);
            }
            Err(e) => warn!("Failed to lock panel for readout update: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::state::Mode;

    use super::*;

    #[test]
    fn blank_panel_has_no_light() {
        let panel = PanelSurface::new();
        let snapshot = panel.snapshot().unwrap();
        assert_eq!(snapshot.light, None);
        assert!(!snapshot.traffic.moving);
        assert!(snapshot.system_type.text.is_empty());
    }

    #[test]
    fn light_and_traffic_writes_overwrite() {
        let panel = PanelSurface::new();
        panel.set_light(LightColor::Red);
        panel.set_light(LightColor::Green);
        panel.set_traffic(TrafficMotion::Running {
            lap: Duration::from_millis(2500),
        });

        let snapshot = panel.snapshot().unwrap();
        assert_eq!(snapshot.light, Some(LightColor::Green));
        assert_eq!(
            snapshot.traffic,
            TrafficView {
                moving: true,
                lap_ms: Some(2500),
            }
        );

        panel.set_traffic(TrafficMotion::Paused);
        assert!(!panel.snapshot().unwrap().traffic.moving);
    }

    #[test]
    fn readout_reflects_mode_copy() {
        let panel = PanelSurface::new();
        panel.set_readout(&Mode::Adaptive.readout());

        let snapshot = panel.snapshot().unwrap();
        assert_eq!(snapshot.system_type.text, "AI Adaptive");
        assert_eq!(snapshot.waiting_time.text, "Low (-21.6%)");
        assert_eq!(snapshot.toggle.label, "Switch to Fixed Schedule");
        assert_eq!(snapshot.toggle.gradient[0], "#00ff88");
    }

    #[test]
    fn snapshot_serializes() {
        let panel = PanelSurface::new();
        panel.set_light(LightColor::Yellow);
        panel.set_readout(&Mode::Fixed.readout());

        let value = serde_json::to_value(panel.snapshot().unwrap()).unwrap();
        assert_eq!(value["light"], "yellow");
        assert_eq!(value["system_type"]["text"], "Fixed Schedule");
    }
}
