//! Fixed-step time integrator for the system
//!
//! Provides a semi-implicit (symplectic) Euler step driven by an `AccelSet`.

use super::forces::AccelSet;
use super::states::{System, NVec3};

/// Advance the system by one step of size `dt` using semi-implicit Euler.
///
/// All accelerations are evaluated from the positions at the start of the
/// step before any body moves. Then, per body:
///   v_n+1 = v_n + dt * a_n
///   x_n+1 = x_n + dt * v_n+1
pub fn semi_implicit_euler(sys: &mut System, forces: &AccelSet, dt: f64) {
    // a_n from x_n, for every body, before anything moves
    let mut accels = vec![NVec3::zeros(); sys.bodies.len()];
    forces.accumulate_accels(&*sys, &mut accels);

    for (b, a) in sys.bodies.iter_mut().zip(accels) {
        b.a = a;
    }

    // Kick then drift with the updated velocity
    for b in sys.bodies.iter_mut() {
        b.v += dt * b.a;
        b.x += dt * b.v;
    }

    sys.t += dt;
}
