//! Core state types for the simulation.
//!
//! - `Body`: a point mass with display attributes
//! - `System`: the ordered bodies, elapsed time `t`, and the optional
//!   tracked body captured at construction
//! - `BodySnapshot`: the read-only projection handed to callers
//!
//! Positions are in km, velocities in km/s.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub(crate) a: NVec3, // acceleration from the last step (scratch)
    m: f64,       // mass, fixed at construction
    color: String,
    size_scale: f64,
}

impl Body {
    /// Build a body, rejecting masses that are not finite and positive
    pub fn new(
        name: impl Into<String>,
        m: f64,
        x: NVec3,
        v: NVec3,
        color: impl Into<String>,
        size_scale: f64,
    ) -> SimResult<Self> {
        let name = name.into();
        if !(m.is_finite() && m > 0.0) {
            return Err(SimError::InvalidBody { name, mass: m });
        }

        Ok(Self {
            name,
            x,
            v,
            a: NVec3::zeros(),
            m,
            color: color.into(),
            size_scale,
        })
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn size_scale(&self) -> f64 {
        self.size_scale
    }

    pub fn momentum(&self) -> NVec3 {
        self.m * self.v
    }

    /// Distance from the coordinate origin measured in AU
    pub fn distance_from_origin_au(&self, au: f64) -> f64 {
        self.x.norm() / au
    }

    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).all(|c| c.is_finite())
    }

    /// External view of the body; acceleration is never exposed
    pub fn snapshot(&self) -> BodySnapshot {
        BodySnapshot {
            name: self.name.clone(),
            position: [self.x.x, self.x.y, self.x.z],
            velocity: [self.v.x, self.v.y, self.v.z],
            color: self.color.clone(),
            size_scale: self.size_scale,
        }
    }
}

/// Read-only projection of a body for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub name: String,
    pub position: [f64; 3],
    pub velocity: [f64; 3],
    pub color: String,
    pub size_scale: f64,
}

/// Initial state of the tracked body, captured once when the system is built
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedBody {
    pub index: usize,
    pub x0: NVec3,
    pub v0: NVec3,
}

#[derive(Debug, Clone)]
pub struct System {
    pub(crate) bodies: Vec<Body>, // ordered, fixed length and order after construction
    pub t: f64,            // elapsed time
    tracked: Option<TrackedBody>,
}

impl System {
    /// Build a system from an ordered roster. Names must be unique.
    pub fn new(bodies: Vec<Body>) -> SimResult<Self> {
        for (i, b) in bodies.iter().enumerate() {
            if bodies[..i].iter().any(|other| other.name == b.name) {
                return Err(SimError::DuplicateBody(b.name.clone()));
            }
        }

        Ok(Self {
            bodies,
            t: 0.0,
            tracked: None,
        })
    }

    /// Build a system and capture the named body's current position and
    /// velocity as its recovery snapshot
    pub fn with_tracked(bodies: Vec<Body>, tracked: &str) -> SimResult<Self> {
        let mut sys = Self::new(bodies)?;
        let index = sys
            .index_of(tracked)
            .ok_or_else(|| SimError::UnknownTrackedBody(tracked.to_string()))?;

        let b = &sys.bodies[index];
        sys.tracked = Some(TrackedBody {
            index,
            x0: b.x,
            v0: b.v,
        });
        Ok(sys)
    }

    pub fn tracked(&self) -> Option<&TrackedBody> {
        self.tracked.as_ref()
    }

    /// Read-only view of the roster, in construction order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Overwrite one body's position and velocity. The roster itself
    /// cannot be reordered or resized once built.
    pub fn set_state(&mut self, name: &str, x: NVec3, v: NVec3) -> SimResult<()> {
        let index = self
            .index_of(name)
            .ok_or_else(|| SimError::UnknownBody(name.to_string()))?;
        let b = &mut self.bodies[index];
        b.x = x;
        b.v = v;
        Ok(())
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.name == name)
    }

    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.bodies.iter().map(Body::snapshot).collect()
    }

    /// Total linear momentum, sum of m * v
    pub fn total_momentum(&self) -> NVec3 {
        self.bodies
            .iter()
            .fold(NVec3::zeros(), |p, b| p + b.momentum())
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies
            .iter()
            .map(|b| 0.5 * b.m * b.v.norm_squared())
            .sum()
    }
}
