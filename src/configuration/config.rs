//! Configuration types for loading a system roster from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants and the default step size
//! - [`RecoveryConfig`]   – optional tracked body and its escape threshold
//! - [`BodyConfig`]       – initial state and display attributes per body
//! - [`ScenarioConfig`]   – top-level wrapper
//!
//! # YAML format
//!
//! ```yaml
//! parameters:               # every field optional
//!   G: 6.67e-11
//!   unit_scale: 1.0e-9
//!   au: 149597870.7
//!   dt: 86400.0
//!
//! recovery:                 # optional
//!   tracked: Earth
//!   threshold_au: 100.0
//!
//! bodies:
//!   - name: Sun
//!     m: 2.0e30
//!     x: [0.0, 0.0, 0.0]
//!     v: [0.0, 0.0, 0.0]
//!     color: "#ffff00"
//!     size_scale: 50.0
//!   - name: Earth
//!     m: 5.972e24
//!     x: [149597870.7, 0.0, 0.0]
//!     v: [0.0, 29.8, 0.0]
//!     color: "#0000ff"
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SimResult;
use crate::simulation::params::{Parameters, AU_KM, DAY, G_SI, UNIT_SCALE};

/// Physical constants and default step size
#[allow(non_snake_case)]
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64,          // gravitational constant
    pub unit_scale: f64, // applied to every gravity term
    pub au: f64,         // AU in position units
    pub dt: f64,         // step used when the caller passes none
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G: G_SI,
            unit_scale: UNIT_SCALE,
            au: AU_KM,
            dt: DAY,
        }
    }
}

impl From<&ParametersConfig> for Parameters {
    fn from(cfg: &ParametersConfig) -> Self {
        Parameters {
            G: cfg.G,
            unit_scale: cfg.unit_scale,
            au: cfg.au,
            dt: cfg.dt,
        }
    }
}

/// Which body gets reset on escape, and how far is too far
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RecoveryConfig {
    pub tracked: String, // name of the tracked body
    #[serde(default = "default_threshold_au")]
    pub threshold_au: f64, // escape distance from the origin
}

fn default_threshold_au() -> f64 {
    100.0
}

fn default_size_scale() -> f64 {
    1.0
}

/// Initial state of a single body
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,  // unique within the roster
    pub m: f64,        // mass
    pub x: [f64; 3],   // initial position, km
    pub v: [f64; 3],   // initial velocity, km/s
    pub color: String, // display color, passed through untouched
    #[serde(default = "default_size_scale")]
    pub size_scale: f64, // display scale, passed through untouched
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub recovery: Option<RecoveryConfig>,
    pub bodies: Vec<BodyConfig>, // ordered roster
}

/// Read a scenario from a YAML file
pub fn load_scenario(path: impl AsRef<Path>) -> SimResult<ScenarioConfig> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
    log::debug!("loaded {} bodies from {}", cfg.bodies.len(), path.as_ref().display());
    Ok(cfg)
}
