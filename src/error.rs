//! Error types for building and stepping a system

use thiserror::Error;

/// Result type for simulation operations
pub type SimResult<T> = Result<T, SimError>;

/// Errors surfaced by the simulation core and its configuration layer
#[derive(Error, Debug)]
pub enum SimError {
    #[error("invalid body `{name}`: mass must be finite and positive, got {mass}")]
    InvalidBody { name: String, mass: f64 },

    #[error("duplicate body name `{0}`")]
    DuplicateBody(String),

    #[error("no body named `{0}`")]
    UnknownBody(String),

    #[error("tracked body `{0}` is not part of the roster")]
    UnknownTrackedBody(String),

    #[error("invalid time step {0}: must be finite and non-negative")]
    InvalidTimeStep(f64),

    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("body `{name}` left the finite range after a step")]
    NonFiniteState { name: String },

    #[error("shared system state was poisoned by a panicking writer")]
    StatePoisoned,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
