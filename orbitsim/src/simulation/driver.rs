//! Simulation loop
//!
//! The [`Driver`] owns a [`Scenario`], steps it with the integrator and commits
//! a [`Snapshot`] after every tick. [`Driver::spawn`] moves it onto its own
//! thread; the returned [`DriverHandle`] is how the render side reads state and
//! asks the loop to stop. Stopping is only observed between ticks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, error, info, trace};

use crate::configuration::config::DriverConfig;
use crate::error::SimError;
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::scenario::Scenario;
use crate::simulation::snapshot::{Snapshot, SnapshotBuffer, SnapshotReader};
use crate::simulation::states::System;

/// How fast and for how long the loop runs
#[derive(Debug, Clone, Default)]
pub struct Pacing {
    pub tick_interval: Option<Duration>, // None = unthrottled
    pub max_ticks: Option<u64>, // None = until stopped
}

impl From<&DriverConfig> for Pacing {
    fn from(cfg: &DriverConfig) -> Self {
        Self {
            tick_interval: cfg.tick_interval(),
            max_ticks: cfg.max_ticks,
        }
    }
}

pub struct Driver {
    scenario: Scenario,
    pacing: Pacing,
    tick: u64,
    buffer: SnapshotBuffer,
}

impl Driver {
    pub fn new(scenario: Scenario, pacing: Pacing) -> Self {
        let buffer = SnapshotBuffer::new(Snapshot::capture(0, &scenario.system));
        Self {
            scenario,
            pacing,
            tick: 0,
            buffer,
        }
    }

    pub fn reader(&self) -> SnapshotReader {
        self.buffer.reader()
    }

    pub fn ticks(&self) -> u64 {
        self.tick
    }

    pub fn system(&self) -> &System {
        &self.scenario.system
    }

    /// One integrator step followed by a snapshot commit
    pub fn tick(&mut self) -> Result<(), SimError> {
        let Scenario {
            system,
            parameters,
            forces,
        } = &mut self.scenario;

        semi_implicit_euler(system, forces, parameters)?;
        self.tick += 1;
        self.buffer.commit(Snapshot::capture(self.tick, system));
        trace!("tick {} committed, t = {}", self.tick, system.t());
        Ok(())
    }

    /// Run until `stop` is set or `max_ticks` is reached, then hand back the
    /// final system. A non-finite state ends the run with an error.
    pub fn run(mut self, stop: &AtomicBool) -> Result<System, SimError> {
        info!(
            "simulation starting with {} bodies, dt = {}",
            self.scenario.system.len(),
            self.scenario.parameters.dt
        );

        while !stop.load(Ordering::Relaxed) {
            if self.pacing.max_ticks.is_some_and(|max| self.tick >= max) {
                debug!("tick limit {} reached", self.tick);
                break;
            }
            if let Err(err) = self.tick() {
                error!("simulation aborted after {} ticks: {err}", self.tick);
                return Err(err);
            }
            if let Some(interval) = self.pacing.tick_interval {
                thread::sleep(interval);
            }
        }

        info!("simulation stopped after {} ticks, t = {}", self.tick, self.scenario.system.t());
        Ok(self.scenario.system)
    }

    /// Move the loop onto a dedicated thread
    pub fn spawn(self) -> std::io::Result<DriverHandle> {
        let stop = Arc::new(AtomicBool::new(false));
        let reader = self.reader();
        let flag = Arc::clone(&stop);
        let join = thread::Builder::new()
            .name("simulation".into())
            .spawn(move || self.run(&flag))?;

        Ok(DriverHandle { stop, reader, join })
    }
}

pub struct DriverHandle {
    stop: Arc<AtomicBool>,
    reader: SnapshotReader,
    join: JoinHandle<Result<System, SimError>>,
}

impl DriverHandle {
    pub fn reader(&self) -> &SnapshotReader {
        &self.reader
    }

    /// The loop has exited on its own (tick limit or fault)
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Ask the loop to exit before its next tick and wait for it
    pub fn stop(self) -> Result<System, SimError> {
        self.stop.store(true, Ordering::Relaxed);
        match self.join.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}
