//! 3-vector helpers on top of nalgebra
//!
//! `NVec3` already provides add, subtract, scale and `norm()`. This module adds
//! a direction that never divides by zero, and construction from loose
//! component lists (2-D input is the 3-D case with z = 0).

use nalgebra::Vector3;

pub type NVec3 = Vector3<f64>;

/// Below this length a vector has no meaningful direction
pub const DIRECTION_EPSILON: f64 = 1e-12;

pub trait Direction {
    /// Unit vector along `self`, or zero if `self` is shorter than [`DIRECTION_EPSILON`]
    fn direction(&self) -> Self;
}

impl Direction for NVec3 {
    fn direction(&self) -> Self {
        self.try_normalize(DIRECTION_EPSILON)
            .unwrap_or_else(NVec3::zeros)
    }
}

/// Build a vector from 2 or 3 components
pub fn vec3_from_components(c: &[f64]) -> Option<NVec3> {
    match *c {
        [x, y] => Some(NVec3::new(x, y, 0.0)),
        [x, y, z] => Some(NVec3::new(x, y, z)),
        _ => None,
    }
}
