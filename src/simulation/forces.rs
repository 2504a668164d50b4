//! Acceleration contributors for the integrator
//!
//! Defines the acceleration trait, the `AccelSet` that sums terms, and
//! direct-sum Newtonian gravity with the km unit conversion

use crate::simulation::states::{System, NVec3};

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, sys: &System, out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        for term in &self.terms {
            term.acceleration(sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Acceleration source operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, sys: &System, out: &mut [NVec3]);
}

/// Direct n^2 Newtonian gravity without softening
///
/// a_i = unit_scale * sum_j G * m_j * (x_j - x_i) / |x_j - x_i|^3
///
/// Pairs at zero separation contribute nothing.
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64,
    pub unit_scale: f64,
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, sys: &System, out: &mut [NVec3]) {
        let n = sys.bodies.len();
        let g = self.G * self.unit_scale;

        // Each unordered pair (i, j) with i < j is visited once and applied
        // to both bodies, equal and opposite
        for i in 0..n {
            let bi = &sys.bodies[i];
            let mi = bi.mass();

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];
                let mj = bj.mass();

                // displacement from i to j: i is pulled along +r, j along -r
                let r = bj.x - bi.x;
                let d = r.norm();
                if d == 0.0 {
                    log::trace!("skipping coincident pair {} / {}", bi.name, bj.name);
                    continue;
                }

                // G / |r|^3
                let coef = g / (d * d * d);

                out[i] += coef * mj * r;
                out[j] -= coef * mi * r;
            }
        }
    }
}
