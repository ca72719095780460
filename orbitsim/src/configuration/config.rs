//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – step size and physical constants
//! - [`DriverConfig`]     – optional pacing of the simulation thread
//! - [`DisplayConfig`]    – optional viewer settings (colour stretch, refresh rate)
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   dt: 0.01                # fixed step size
//!   G: 6.674e-10            # gravitational constant
//!   softening: 1.0          # epsilon
//!   min_separation: 5.0     # collision cutoff
//!
//! driver:                   # optional
//!   tick_interval_us: 0     # 0 or absent -> unthrottled
//!   max_ticks: 100000       # absent -> run until stopped
//!
//! display:                  # optional
//!   stretch: 0.01           # depth colour squashing
//!   fps: 30
//!
//! bodies:
//!   - x: [ -100.0, 0.0, 0.0 ]
//!     v: [ 34.7, 53.3, 0.0 ]
//!     m: 1.0e15
//!   - x: [ 100.0, 0.0 ]     # 2-D entries get z = 0
//!     v: [ -30.0, -50.0 ]
//!     m: 1.0e15
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,             // time step size
    pub G: f64,              // gravitational constant
    pub softening: f64,      // bounds the force at very small separations
    pub min_separation: f64, // bodies closer than this are touching
}

/// Pacing of the simulation loop
#[derive(Deserialize, Debug, Clone, Default)]
pub struct DriverConfig {
    #[serde(default)]
    pub tick_interval_us: u64, // sleep between ticks, 0 = as fast as possible
    #[serde(default)]
    pub max_ticks: Option<u64>,
}

impl DriverConfig {
    pub fn tick_interval(&self) -> Option<Duration> {
        (self.tick_interval_us > 0).then(|| Duration::from_micros(self.tick_interval_us))
    }
}

/// Viewer settings, display policy only
#[derive(Deserialize, Debug, Clone)]
pub struct DisplayConfig {
    #[serde(default = "default_stretch")]
    pub stretch: f64,
    #[serde(default = "default_fps")]
    pub fps: u32,
}

fn default_stretch() -> f64 {
    0.01
}

fn default_fps() -> u32 {
    30
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            stretch: default_stretch(),
            fps: default_fps(),
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // position, 2 or 3 components
    pub v: Vec<f64>, // velocity, 2 or 3 components
    pub m: f64,      // mass, must be > 0
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub driver: DriverConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).context("invalid scenario yaml")
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("cannot open scenario {}", path.display()))?;
        let reader = BufReader::new(file);
        serde_yaml::from_reader(reader).with_context(|| format!("invalid scenario yaml in {}", path.display()))
    }
}
