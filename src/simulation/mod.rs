//! Scheduling simulation engine and KPI evaluation.
//!
//! [`Simulator`] validates a process set, builds a private [`ProcessTable`]
//! and dispatches to one policy keyed on [`Algorithm`]. Every run is a pure
//! computation: the caller's processes are only borrowed and nothing is
//! shared between calls, so independent runs may execute in parallel.
//!
//! # Policies
//!
//! | Algorithm | Preemptive | Selection |
//! |-----------|-----------|-----------|
//! | FCFS | no | arrival |
//! | SJF | no | burst, arrival |
//! | SRTF | yes (strictly shorter remaining) | remaining, arrival |
//! | RR | yes (quantum) | FIFO queue |
//! | Priority NP | no | priority, arrival |
//! | Priority P | yes (every tick) | priority, arrival |
//!
//! Remaining ties are broken by input position.
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::{Algorithm, ProcessSpec};
//! use cpu_sched::simulation::Simulator;
//!
//! let procs = ProcessSpec::from_tuples(&[(0, 8, 0), (1, 4, 0)]);
//! let timeline = Simulator::new().simulate(&procs, Algorithm::Srtf).unwrap();
//! let rows: Vec<_> = timeline
//!     .intervals
//!     .iter()
//!     .map(|i| (i.process_id.as_str(), i.start, i.end))
//!     .collect();
//! assert_eq!(rows, vec![("P1", 0, 1), ("P2", 1, 5), ("P1", 5, 12)]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod kpi;
mod nonpreemptive;
mod priority_preemptive;
mod round_robin;
mod srtf;
mod state;

pub use kpi::{ProcessMetrics, ScheduleKpi};
pub use nonpreemptive::{first_come_first_served, priority_non_preemptive, shortest_job_first};
pub use priority_preemptive::priority_preemptive;
pub use round_robin::round_robin;
pub use srtf::shortest_remaining_time_first;
pub use state::{ProcessKey, ProcessState, ProcessTable, TimelineBuilder};

use log::info;

use crate::config::SimulationConfig;
use crate::error::{Result, SimulationError};
use crate::models::{Algorithm, ProcessSpec, Timeline};
use crate::validation::validate_input;

/// Entry point for running scheduling policies.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator with the default configuration (quantum 2).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator with an explicit configuration.
    pub fn with_config(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.config.quantum = quantum;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Computes the timeline `algorithm` produces for `processes`.
    ///
    /// # Errors
    /// - [`SimulationError::InvalidProcess`] listing every malformed process.
    /// - [`SimulationError::InvalidQuantum`] for Round Robin with quantum <= 0.
    ///
    /// No partial timeline is produced on error.
    pub fn simulate(&self, processes: &[ProcessSpec], algorithm: Algorithm) -> Result<Timeline> {
        validate_input(processes).map_err(SimulationError::InvalidProcess)?;
        if algorithm == Algorithm::RoundRobin {
            self.config.validated_quantum()?;
        }

        info!(
            "simulating {algorithm} ({}) over {} processes",
            if algorithm.is_preemptive() { "preemptive" } else { "non-preemptive" },
            processes.len()
        );

        let mut table = ProcessTable::new(processes);
        let timeline = match algorithm {
            Algorithm::Fcfs => first_come_first_served(&mut table),
            Algorithm::Sjf => shortest_job_first(&mut table),
            Algorithm::Srtf => shortest_remaining_time_first(&mut table),
            Algorithm::RoundRobin => round_robin(&mut table, self.config.quantum),
            Algorithm::PriorityNonPreemptive => priority_non_preemptive(&mut table),
            Algorithm::PriorityPreemptive => priority_preemptive(&mut table),
        };

        info!(
            "{algorithm} finished: {} intervals, makespan {}",
            timeline.interval_count(),
            timeline.makespan()
        );
        Ok(timeline)
    }

    /// Like [`simulate`](Self::simulate), with the policy given by name.
    ///
    /// # Errors
    /// [`SimulationError::InvalidAlgorithm`] if `name` is not a known policy,
    /// plus everything `simulate` can return.
    pub fn simulate_named(&self, processes: &[ProcessSpec], name: &str) -> Result<Timeline> {
        let algorithm: Algorithm = name.parse()?;
        self.simulate(processes, algorithm)
    }

    /// Runs every policy on the same input, in [`Algorithm::ALL`] order.
    pub fn simulate_all(&self, processes: &[ProcessSpec]) -> Result<Vec<(Algorithm, Timeline)>> {
        Algorithm::ALL
            .iter()
            .map(|&algo| self.simulate(processes, algo).map(|t| (algo, t)))
            .collect()
    }
}

/// Runs one policy with the given configuration.
///
/// Shorthand for `Simulator::with_config(config.clone()).simulate(..)`.
pub fn simulate(
    processes: &[ProcessSpec],
    algorithm: Algorithm,
    config: &SimulationConfig,
) -> Result<Timeline> {
    Simulator::with_config(config.clone()).simulate(processes, algorithm)
}
