pub mod simulation;
pub mod configuration;
pub mod error;

pub use simulation::states::{Body, BodySnapshot, System, TrackedBody, NVec3};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::recovery::EscapeRecovery;
pub use simulation::params::{Parameters, AU_KM, DAY, G_SI, UNIT_SCALE};
pub use simulation::scenario::Scenario;
pub use simulation::engine::Engine;

pub use configuration::config::{load_scenario, BodyConfig, ParametersConfig, RecoveryConfig, ScenarioConfig};
pub use configuration::roster::{canonical_roster, TRACKED_BODY};

pub use error::{SimError, SimResult};
