//! Shared handle the presentation layer talks to
//!
//! `Engine` owns the live `Scenario` behind a mutex so advance, read and
//! reset are serialized. A reset builds the replacement outside the lock and
//! swaps it in whole, so no caller ever sees a mix of old and new bodies.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::configuration::config::ScenarioConfig;
use crate::configuration::roster::canonical_roster;
use crate::error::{SimError, SimResult};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::BodySnapshot;

#[derive(Clone)]
pub struct Engine {
    config: Arc<ScenarioConfig>, // what reset rebuilds from
    live: Arc<Mutex<Scenario>>,
}

impl Engine {
    /// Engine bootstrapped from the canonical roster
    pub fn canonical() -> SimResult<Self> {
        Self::from_config(canonical_roster())
    }

    pub fn from_config(config: ScenarioConfig) -> SimResult<Self> {
        let scenario = Scenario::build_scenario(&config)?;
        Ok(Self {
            config: Arc::new(config),
            live: Arc::new(Mutex::new(scenario)),
        })
    }

    fn lock(&self) -> SimResult<MutexGuard<'_, Scenario>> {
        self.live.lock().map_err(|_| SimError::StatePoisoned)
    }

    /// Step once and return the resulting snapshots.
    /// `None` steps by the configured default (one day for the canonical roster).
    pub fn advance_state(&self, dt: Option<f64>) -> SimResult<Vec<BodySnapshot>> {
        let mut scenario = self.lock()?;
        let dt = dt.unwrap_or(scenario.parameters.dt);
        scenario.advance(dt)?;
        Ok(scenario.snapshot())
    }

    pub fn read_state(&self) -> SimResult<Vec<BodySnapshot>> {
        Ok(self.lock()?.snapshot())
    }

    /// Elapsed simulated time of the live system
    pub fn time(&self) -> SimResult<f64> {
        Ok(self.lock()?.system.t)
    }

    /// Replace the live system with a freshly built one
    pub fn reset_system(&self) -> SimResult<Vec<BodySnapshot>> {
        let fresh = Scenario::build_scenario(&self.config)?;
        let snapshot = fresh.snapshot();

        *self.lock()? = fresh;
        log::info!("system reset to its initial roster");
        Ok(snapshot)
    }
}
