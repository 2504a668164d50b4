//! Escape recovery for the tracked body
//!
//! Once a step has completed, a tracked body farther than `threshold_au`
//! from the origin is put back at the position and velocity captured when
//! the system was built.

use super::states::System;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeRecovery {
    pub threshold_au: f64, // escape distance from the origin, in AU
    pub au: f64,           // AU in position units
}

impl EscapeRecovery {
    pub fn new(threshold_au: f64, au: f64) -> Self {
        Self { threshold_au, au }
    }

    /// Reset the tracked body if it has escaped. Returns whether a reset fired.
    pub fn apply(&self, sys: &mut System) -> bool {
        let Some(tracked) = sys.tracked().copied() else {
            return false;
        };

        let Some(body) = sys.bodies.get_mut(tracked.index) else {
            return false;
        };
        let dist_au = body.distance_from_origin_au(self.au);
        if !(dist_au > self.threshold_au) {
            return false;
        }

        log::info!(
            "{} escaped to {:.2} AU at t = {}, restoring initial state",
            body.name,
            dist_au,
            sys.t
        );
        body.x = tracked.x0;
        body.v = tracked.v0;
        true
    }
}
