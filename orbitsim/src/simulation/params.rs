//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed step size `dt`,
//! - gravitational constant `G`,
//! - softening length and the collision cutoff distance

use crate::error::SimError;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // step size
    pub G: f64, // gravitational constant
    pub softening: f64, // epsilon, bounds force as r -> 0
    pub min_separation: f64, // below this the pair is touching, no force
}

impl Parameters {
    /// Check every field is finite and in range: `dt > 0`, the rest `>= 0`
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.dt > 0.0 && self.dt.is_finite()) {
            return Err(SimError::InvalidParameter { name: "dt", value: self.dt });
        }
        let non_negative = [
            ("G", self.G),
            ("softening", self.softening),
            ("min_separation", self.min_separation),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(SimError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}
