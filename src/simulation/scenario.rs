//! Build fully-initialized scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - physical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0 and the tracked snapshot)
//! - active force set (`AccelSet`)
//! - escape recovery policy, if the config names a tracked body
//!
//! `Scenario::canonical` is the bootstrap used at start-up and on reset.

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::configuration::roster::canonical_roster;
use crate::error::{SimError, SimResult};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::Parameters;
use crate::simulation::recovery::EscapeRecovery;
use crate::simulation::states::{Body, BodySnapshot, System, NVec3};

/// The runtime bundle: current state plus everything needed to step it
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    pub recovery: Option<EscapeRecovery>,
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> SimResult<Self> {
        let parameters = Parameters::from(&cfg.parameters);
        parameters.validate()?;

        // Bodies: map `BodyConfig` -> runtime `Body`
        let bodies = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| {
                Body::new(
                    bc.name.clone(),
                    bc.m,
                    NVec3::from(bc.x),
                    NVec3::from(bc.v),
                    bc.color.clone(),
                    bc.size_scale,
                )
            })
            .collect::<SimResult<Vec<_>>>()?;

        // Tracked body is resolved to an index here, once
        let (system, recovery) = match &cfg.recovery {
            Some(rc) => {
                if !(rc.threshold_au.is_finite() && rc.threshold_au > 0.0) {
                    return Err(SimError::InvalidParameter {
                        name: "threshold_au",
                        value: rc.threshold_au,
                    });
                }
                let system = System::with_tracked(bodies, &rc.tracked)?;
                (system, Some(EscapeRecovery::new(rc.threshold_au, parameters.au)))
            }
            None => (System::new(bodies)?, None),
        };

        // Forces: direct Newtonian gravity is the only term
        let forces = AccelSet::new().with(NewtonianGravity {
            G: parameters.G,
            unit_scale: parameters.unit_scale,
        });

        log::info!(
            "built scenario with {} bodies, tracked: {}",
            system.bodies.len(),
            system
                .tracked()
                .map(|tb| system.bodies[tb.index].name.as_str())
                .unwrap_or("none")
        );

        Ok(Self {
            parameters,
            system,
            forces,
            recovery,
        })
    }

    /// Fresh system from the canonical roster
    pub fn canonical() -> SimResult<Self> {
        Self::build_scenario(&canonical_roster())
    }

    /// Advance by one step of `dt`, then apply escape recovery.
    ///
    /// `dt` must be finite and non-negative; a rejected step leaves the
    /// state untouched.
    pub fn advance(&mut self, dt: f64) -> SimResult<()> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(SimError::InvalidTimeStep(dt));
        }

        semi_implicit_euler(&mut self.system, &self.forces, dt);

        if let Some(recovery) = &self.recovery {
            recovery.apply(&mut self.system);
        }

        log::debug!("stepped dt = {} to t = {}", dt, self.system.t);

        if let Some(b) = self.system.bodies.iter().find(|b| !b.is_finite()) {
            log::warn!("{} is no longer finite at t = {}", b.name, self.system.t);
            return Err(SimError::NonFiniteState { name: b.name.clone() });
        }
        Ok(())
    }

    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.system.snapshot()
    }
}
