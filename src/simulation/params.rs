//! Physical constants and step settings for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant `G` (SI) and the `unit_scale` reconciling it with km
//! - the AU length in km, used by the escape check
//! - default step size `dt` used when a caller does not pass one

use crate::error::{SimError, SimResult};

/// One astronomical unit in km
pub const AU_KM: f64 = 149_597_870.700;

/// Gravitational constant, SI
pub const G_SI: f64 = 6.67e-11;

/// Applied to G * m / r^2 with r in km
pub const UNIT_SCALE: f64 = 1e-9;

/// One day in seconds
pub const DAY: f64 = 86_400.0;

#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub G: f64,          // gravitational constant
    pub unit_scale: f64, // unit conversion applied to every gravity term
    pub au: f64,         // AU in position units
    pub dt: f64,         // default step size
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: G_SI,
            unit_scale: UNIT_SCALE,
            au: AU_KM,
            dt: DAY,
        }
    }
}

impl Parameters {
    /// Every field has to be finite and strictly positive
    pub fn validate(&self) -> SimResult<()> {
        let fields = [
            ("G", self.G),
            ("unit_scale", self.unit_scale),
            ("au", self.au),
            ("dt", self.dt),
        ];
        for (name, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}
