//! Mutable scheduler record behind the simulation

use tokio::task::JoinHandle;
use tracing::debug;

use super::Mode;

/// State owned by the traffic scheduler: current mode, advance counter and
/// the single outstanding run task
#[derive(Debug)]
pub struct SchedulerState {
    /// Signal plan currently governing phase advances
    pub mode: Mode,
    /// Count of phase advances since the current run started; indexes the
    /// active schedule modulo its length
    pub cycle_index: u64,
    /// Bumped on every run start; a run that observes a newer epoch stops
    /// without touching the panel
    pub epoch: u64,
    /// Set once the presentation surface has been probed successfully
    pub enabled: bool,
    run: Option<JoinHandle<()>>,
}

impl SchedulerState {
    /// Create the initial record: fixed mode, no run, disabled until probed
    pub fn new() -> Self {
        Self {
            mode: Mode::Fixed,
            cycle_index: 0,
            epoch: 0,
            enabled: false,
            run: None,
        }
    }

    /// Abort and drop the outstanding run task, if any
    pub fn cancel_run(&mut self) {
        if let Some(handle) = self.run.take() {
            handle.abort();
            debug!("cancelled outstanding simulation run");
        }
    }

    /// Store a freshly spawned run task, cancelling any previous one first
    pub fn store_run(&mut self, handle: JoinHandle<()>) {
        self.cancel_run();
        self.run = Some(handle);
    }

    /// Whether a run task is currently stored
    pub fn has_run(&self) -> bool {
        self.run.is_some()
    }

    /// Advance the epoch and return the new value
    pub fn next_epoch(&mut self) -> u64 {
        self.epoch += 1;
        self.epoch
    }
}

impl Default for SchedulerState {
    fn default() -> Self {
        Self::new()
    }
}
