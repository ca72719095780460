//! Fixed-step time integrator for the N-body system
//!
//! Semi-implicit (symplectic) Euler driven by an [`AccelSet`] and [`Parameters`]

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::System;
use super::vector::NVec3;
use crate::error::SimError;

/// Advance the system by one step of semi-implicit Euler
///
/// Accelerations for every body are computed from the pre-step configuration
/// before anything moves, then velocities are kicked with them, then positions
/// drift with the new velocities. Updates bodies and `sys.t` in place.
///
/// Returns [`SimError::NonFiniteState`] if any body ends the step with a NaN or
/// infinite component. The system is left in that state and must not be
/// stepped again.
pub fn semi_implicit_euler(sys: &mut System, forces: &AccelSet, params: &Parameters) -> Result<(), SimError> {
    let n = sys.len();
    if n == 0 { // no bodies, return
        return Ok(());
    }

    let dt = params.dt;

    // a_n from x_n, read-only view of the whole system
    let mut acc = vec![NVec3::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut acc);

    // Kick: v_n+1 = v_n + dt * a_n
    for (b, a) in sys.bodies_mut().iter_mut().zip(acc.iter()) {
        b.a = *a;
        b.v += *a * dt;
    }

    // Drift, only after every velocity is final: x_n+1 = x_n + dt * v_n+1
    for b in sys.bodies_mut().iter_mut() {
        b.x += b.v * dt;
    }

    sys.t += dt;

    if let Some(body) = sys.bodies().iter().position(|b| !b.is_finite()) {
        return Err(SimError::NonFiniteState { body, t: sys.t });
    }

    Ok(())
}
