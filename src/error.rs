//! Error taxonomy for simulation requests.
//!
//! Every variant is a validation failure raised before any simulation work
//! starts. Once inputs pass validation the engine is total.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result alias for simulation entry points.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Reasons a simulation request is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// One or more processes carry malformed or out-of-range values.
    #[error("invalid process input: {}", describe(.0))]
    InvalidProcess(Vec<ValidationError>),

    /// The policy selector names none of the supported algorithms.
    #[error("invalid scheduling algorithm '{0}' (expected one of FCFS, SJF, SRTF, RR, PriorityNonPreemptive, PriorityPreemptive)")]
    InvalidAlgorithm(String),

    /// Round Robin was requested with a non-positive quantum.
    #[error("invalid round robin quantum {0} (must be > 0)")]
    InvalidQuantum(i64),
}

fn describe(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
