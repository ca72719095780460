//! Force / acceleration contributors for the n-body engine
//!
//! `NewtonianGravity` is the pairwise force model. Terms implement
//! [`Acceleration`] and are summed by an [`AccelSet`]; every term reads an
//! immutable [`System`], so all bodies see the same pre-step configuration.

use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System};
use crate::simulation::vector::{Direction, NVec3, DIRECTION_EPSILON};

/// Collection of acceleration terms (gravity, drag, etc)
/// Their contributions are summed into a single acceleration vector per body
#[derive(Default)]
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

/// Acceleration source operating on a [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec3]);
}

/// Newtonian gravity between point masses, softened and with a contact cutoff
#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub softening: f64, // epsilon
    pub min_separation: f64, // collision cutoff
}

impl NewtonianGravity {
    pub fn from_params(p: &Parameters) -> Self {
        Self {
            G: p.G,
            softening: p.softening,
            min_separation: p.min_separation,
        }
    }

    /// Force exerted on `a` by `b`
    ///
    /// Magnitude is `G * m_a * m_b / (r^2 + eps^2)` along the unit displacement
    /// from `a` toward `b`. Pairs closer than `min_separation` are touching and
    /// get no force at all, as do coincident bodies which have no direction.
    pub fn force(&self, a: &Body, b: &Body) -> NVec3 {
        let d = b.x - a.x;
        let r = d.norm();

        if r < self.min_separation || r < DIRECTION_EPSILON {
            return NVec3::zeros();
        }

        let eps2 = self.softening * self.softening;
        let magnitude = self.G * a.mass() * b.mass() / (r * r + eps2);

        d.direction() * magnitude
    }
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec3]) {
        let bodies = sys.bodies();

        for (i, bi) in bodies.iter().enumerate() {
            let mut net = NVec3::zeros();
            for (j, bj) in bodies.iter().enumerate() {
                if i != j {
                    net += self.force(bi, bj);
                }
            }
            out[i] += net / bi.mass();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(x: [f64; 3], m: f64) -> Body {
        Body::new(x.into(), NVec3::zeros(), m).unwrap()
    }

    fn gravity() -> NewtonianGravity {
        NewtonianGravity {
            G: 1.0,
            softening: 0.0,
            min_separation: 0.5,
        }
    }

    #[test]
    fn axis_aligned_pair_has_no_stray_components() {
        let a = body([0.0, 0.0, 0.0], 1.0);
        let b = body([2.0, 0.0, 0.0], 1.0);
        let f = gravity().force(&a, &b);
        assert_eq!(f, NVec3::new(0.25, 0.0, 0.0));
    }

    #[test]
    fn coincident_bodies_get_zero_force() {
        let a = body([1.0, 1.0, 1.0], 1.0);
        let b = body([1.0, 1.0, 1.0], 1.0);
        let mut g = gravity();
        g.min_separation = 0.0;
        g.softening = 1.0;
        assert_eq!(g.force(&a, &b), NVec3::zeros());
    }

    #[test]
    fn softening_bounds_magnitude() {
        let a = body([0.0, 0.0, 0.0], 1.0);
        let b = body([1e-6, 0.0, 0.0], 1.0);
        let g = NewtonianGravity {
            G: 1.0,
            softening: 0.1,
            min_separation: 0.0,
        };
        assert!(g.force(&a, &b).norm() <= 1.0 / 0.01);
    }
}
