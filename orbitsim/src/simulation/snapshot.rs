//! Committed per-tick state shared between the simulation and render threads
//!
//! The simulation thread builds a whole [`Snapshot`] after a tick and swaps it
//! in; readers clone the `Arc` of the last committed one. A reader therefore
//! never sees bodies from two different ticks, or a body with half its fields
//! updated.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::simulation::states::{Body, System};

#[derive(Debug, Clone)]
pub struct Snapshot {
    pub tick: u64, // completed ticks
    pub t: f64, // simulated time
    pub bodies: Vec<Body>,
}

impl Snapshot {
    pub fn capture(tick: u64, sys: &System) -> Self {
        Self {
            tick,
            t: sys.t(),
            bodies: sys.bodies().to_vec(),
        }
    }
}

/// Double buffer: the write side only replaces the pointer
#[derive(Debug, Clone)]
pub struct SnapshotBuffer {
    current: Arc<RwLock<Arc<Snapshot>>>,
}

impl SnapshotBuffer {
    pub fn new(initial: Snapshot) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(initial))),
        }
    }

    pub(crate) fn commit(&self, snapshot: Snapshot) {
        let next = Arc::new(snapshot);
        *self.current.write() = next;
    }

    pub fn reader(&self) -> SnapshotReader {
        SnapshotReader {
            current: Arc::clone(&self.current),
        }
    }
}

/// Read-only handle for the rendering side
#[derive(Debug, Clone)]
pub struct SnapshotReader {
    current: Arc<RwLock<Arc<Snapshot>>>,
}

impl SnapshotReader {
    pub fn latest(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current.read())
    }
}
