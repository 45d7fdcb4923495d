//! The traffic-light scheduler

use std::sync::{Arc, Mutex};

use serde::Serialize;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::state::{Mode, SchedulerState};
use crate::surface::{SimulationSurface, TrafficMotion};

/// Read-only view of the scheduler for status reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchedulerSnapshot {
    pub mode: Mode,
    pub cycle_index: u64,
    pub running: bool,
}

/// Advances a simulated intersection through the active signal schedule
/// and renders each phase onto the presentation surface.
///
/// One run task is live at a time. Toggling the mode cancels the stored
/// task, resets the cycle index and starts a fresh chain under the new
/// schedule; the epoch carried by each chain keeps a superseded task from
/// writing to the panel after its replacement has started.
pub struct TrafficScheduler<S> {
    surface: Arc<S>,
    state: Arc<Mutex<SchedulerState>>,
}

impl<S> std::fmt::Debug for TrafficScheduler<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrafficScheduler").finish_non_exhaustive()
    }
}

impl<S: SimulationSurface> TrafficScheduler<S> {
    /// Create a scheduler over the given surface; call
    /// [`TrafficScheduler::initialize`] to start it
    pub fn new(surface: Arc<S>) -> Self {
        Self {
            surface,
            state: Arc::new(Mutex::new(SchedulerState::new())),
        }
    }

    /// Probe the surface and start the fixed-schedule run
    ///
    /// If a required element is missing the whole simulation stays off:
    /// a warning is logged, no timer starts and later toggles are rejected.
    pub fn initialize(&self) {
        if let Err(e) = self.surface.probe() {
            warn!("Traffic simulation disabled: {}", e);
            return;
        }

        let mut state = match self.state.lock() {
            Ok(state) => state,
            Err(e) => {
                error!("Failed to lock scheduler state: {}", e);
                return;
            }
        };

        state.enabled = true;
        state.mode = Mode::Fixed;
        state.cycle_index = 0;
        self.surface.set_readout(&state.mode.readout());
        self.start_run(&mut state);
        info!("Traffic simulation started in {} mode", state.mode);
    }

    /// Switch between fixed and adaptive control
    ///
    /// Cancels the outstanding run, re-renders the mode readout, resets the
    /// cycle index and starts a fresh chain at the new schedule's first
    /// phase.
    pub fn toggle_mode(&self) -> Result<SchedulerSnapshot, String> {
        let mut state = self
            .state
            .lock()
            .map_err(|e| format!("Failed to lock scheduler state: {}", e))?;

        if !state.enabled {
            return Err("Traffic simulation is disabled".to_string());
        }

        state.mode = state.mode.toggled();
        state.cycle_index = 0;
        self.surface.set_readout(&state.mode.readout());
        self.start_run(&mut state);
        info!("Simulation switched to {} mode", state.mode);

        Ok(Self::view(&state))
    }

    /// Get the current scheduler state
    pub fn snapshot(&self) -> Result<SchedulerSnapshot, String> {
        self.state
            .lock()
            .map(|state| Self::view(&state))
            .map_err(|e| format!("Failed to lock scheduler state: {}", e))
    }

    /// Cancel the stored run, bump the epoch and spawn a new chain
    fn start_run(&self, state: &mut SchedulerState) {
        state.cancel_run();
        let epoch = state.next_epoch();
        let handle = tokio::spawn(run_chain(
            Arc::clone(&self.state),
            Arc::clone(&self.surface),
            epoch,
        ));
        state.store_run(handle);
    }

    fn view(state: &SchedulerState) -> SchedulerSnapshot {
        SchedulerSnapshot {
            mode: state.mode,
            cycle_index: state.cycle_index,
            running: state.has_run(),
        }
    }
}

impl<S> Drop for TrafficScheduler<S> {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            state.cancel_run();
        }
    }
}

/// One simulation run: apply the phase at the current cycle index, then
/// sleep that phase's own duration and repeat
///
/// Each phase supplies the wait before the next advance, so at most one
/// advance is ever pending. The chain stops on its own when a newer epoch
/// has taken over.
async fn run_chain<S: SimulationSurface>(
    state: Arc<Mutex<SchedulerState>>,
    surface: Arc<S>,
    epoch: u64,
) {
    loop {
        let wait = {
            let mut state = match state.lock() {
                Ok(state) => state,
                Err(e) => {
                    error!("Failed to lock scheduler state in run: {}", e);
                    return;
                }
            };

            if state.epoch != epoch {
                // A newer run owns the panel now.
                return;
            }

            let schedule = state.mode.schedule();
            let phase = *schedule.phase_at(state.cycle_index);

            surface.set_light(phase.light);
            if phase.traffic_flows {
                surface.set_traffic(TrafficMotion::Running {
                    lap: schedule.car_lap,
                });
            } else {
                surface.set_traffic(TrafficMotion::Paused);
            }

            state.cycle_index += 1;
            debug!(
                "advance {}: {} light for {:?}",
                state.cycle_index, phase.light, phase.duration
            );
            phase.duration
        };

        sleep(wait).await;
    }
}
