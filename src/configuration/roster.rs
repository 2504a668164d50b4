//! The canonical roster: three massive suns and one tracked planet.
//!
//! Kept in sync with `scenarios/three_body.yaml`.

use super::config::{BodyConfig, ParametersConfig, RecoveryConfig, ScenarioConfig};

pub const TRACKED_BODY: &str = "Earth";

fn body(name: &str, m: f64, x: [f64; 3], v: [f64; 3], color: &str, size_scale: f64) -> BodyConfig {
    BodyConfig {
        name: name.to_string(),
        m,
        x,
        v,
        color: color.to_string(),
        size_scale,
    }
}

/// Scenario the system is bootstrapped from and reset to
pub fn canonical_roster() -> ScenarioConfig {
    ScenarioConfig {
        parameters: ParametersConfig::default(),
        recovery: Some(RecoveryConfig {
            tracked: TRACKED_BODY.to_string(),
            threshold_au: 100.0,
        }),
        bodies: vec![
            body("Sun1", 1.5e30, [849_597_870.700, 0.0, 100_000_000.0], [0.0, 14.0, 2.0], "#ff0000", 5e1),
            body("Sun2", 2e30, [0.0, 0.0, -100_000_000.0], [0.0, -16.0, -3.0], "#ff6600", 5e1),
            body("Sun3", 2.5e30, [0.0, -849_597_870.700, 50_000_000.0], [36.0, 0.0, 1.5], "#ffff00", 5e1),
            body(TRACKED_BODY, 5.972e24, [0.0, -349_597_870.700, -50_000_000.0], [31.0, 0.0, -2.5], "#0000ff", 4e3),
        ],
    }
}
