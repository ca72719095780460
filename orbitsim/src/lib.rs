pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use error::SimError;

pub use simulation::vector::{Direction, NVec3};
pub use simulation::states::{Body, System};
pub use simulation::params::Parameters;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::scenario::Scenario;
pub use simulation::snapshot::{Snapshot, SnapshotReader};
pub use simulation::driver::{Driver, DriverHandle, Pacing};

pub use configuration::config::{ScenarioConfig, ParametersConfig, BodyConfig, DriverConfig, DisplayConfig};
pub use configuration::record::{encode_record, parse_record, load_record, append_record};

pub use visualization::depth::{depth_hint, DepthColor};
pub use visualization::console::{Renderer, ConsoleRenderer, ViewerConfig, run_viewer};
