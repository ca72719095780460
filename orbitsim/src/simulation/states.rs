//! Core state types for the N-body simulation.
//!
//! - `Body`   kinematic state of one point mass
//! - `System` the fixed-size ordered set of bodies plus the simulated time `t`
//!
//! A body's acceleration is the value from the last completed tick and is
//! only written by the integrator. Before the first tick it is zero.

use crate::error::SimError;
use crate::simulation::vector::NVec3;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub(crate) a: NVec3, // acceleration, last tick
    m: f64, // mass, always > 0
}

impl Body {
    /// Create a body at rest acceleration-wise
    /// Fails with [`SimError::InvalidMass`] unless `m` is finite and strictly positive,
    /// and with [`SimError::NonFiniteInitialState`] if `x` or `v` has a NaN or infinite component
    pub fn new(x: NVec3, v: NVec3, m: f64) -> Result<Self, SimError> {
        if !(m > 0.0 && m.is_finite()) {
            return Err(SimError::InvalidMass { mass: m });
        }
        if !x.iter().chain(v.iter()).all(|c| c.is_finite()) {
            return Err(SimError::NonFiniteInitialState);
        }
        Ok(Self {
            x,
            v,
            a: NVec3::zeros(),
            m,
        })
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn acceleration(&self) -> NVec3 {
        self.a
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).chain(self.a.iter()).all(|c| c.is_finite())
    }
}

#[derive(Debug, Clone)]
pub struct System {
    bodies: Vec<Body>, // ordered, length fixed for the run
    pub(crate) t: f64, // time
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable access to the bodies; the slice cannot grow or shrink
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn t(&self) -> f64 {
        self.t
    }
}
