//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::SimError;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System};
use crate::simulation::vector::vec3_from_components;

pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn new(parameters: Parameters, bodies: Vec<Body>) -> Result<Self, SimError> {
        parameters.validate()?;

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity::from_params(&parameters));

        Ok(Self {
            parameters,
            system: System::new(bodies),
            forces,
        })
    }

    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self, SimError> {
        let bodies = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| body_from_config(i, bc))
            .collect::<Result<Vec<_>, _>>()?;

        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            G: p_cfg.G,
            softening: p_cfg.softening,
            min_separation: p_cfg.min_separation,
        };

        Self::new(parameters, bodies)
    }

    /// Same parameters and forces, fresh system built from `bodies` at t = 0
    pub fn with_bodies(self, bodies: Vec<Body>) -> Self {
        Self {
            system: System::new(bodies),
            ..self
        }
    }
}

fn body_from_config(i: usize, bc: &BodyConfig) -> Result<Body, SimError> {
    let malformed = |what: &str, len: usize| SimError::MalformedBodyConfig {
        body: i,
        reason: format!("`{what}` has {len} components, expected 2 or 3"),
    };
    let x = vec3_from_components(&bc.x).ok_or_else(|| malformed("x", bc.x.len()))?;
    let v = vec3_from_components(&bc.v).ok_or_else(|| malformed("v", bc.v.len()))?;
    Body::new(x, v, bc.m)
}
