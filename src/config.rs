//! Simulation parameters.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

/// Default Round Robin quantum.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Tunable parameters for a simulation run.
///
/// Missing fields fall back to their defaults when deserialized, so an empty
/// JSON object is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round Robin time quantum (ticks). Must be positive when RR runs.
    pub quantum: i64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Checks the quantum, returning it when usable.
    pub fn validated_quantum(&self) -> Result<i64> {
        if self.quantum > 0 {
            Ok(self.quantum)
        } else {
            Err(SimulationError::InvalidQuantum(self.quantum))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_quantum() {
        assert_eq!(SimulationConfig::default().quantum, 2);
        assert_eq!(SimulationConfig::new().validated_quantum(), Ok(2));
    }

    #[test]
    fn test_invalid_quantum() {
        let cfg = SimulationConfig::new().with_quantum(0);
        assert_eq!(
            cfg.validated_quantum(),
            Err(SimulationError::InvalidQuantum(0))
        );
        assert!(SimulationConfig::new()
            .with_quantum(-3)
            .validated_quantum()
            .is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let cfg: SimulationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SimulationConfig::default());
        let cfg: SimulationConfig = serde_json::from_str(r#"{"quantum": 4}"#).unwrap();
        assert_eq!(cfg.quantum, 4);
    }
}
