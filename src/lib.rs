//! CPU scheduling simulation engine.
//!
//! Given processes described by arrival time, burst length and priority,
//! computes the execution timeline each classical scheduling policy would
//! produce. Presentation (forms, text rendering, charts) is left to the
//! caller, which supplies processes plus an [`Algorithm`](models::Algorithm)
//! and consumes a [`Timeline`](models::Timeline).
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessSpec`, `ExecutionInterval`,
//!   `Timeline`, `Algorithm`
//! - **`dispatching`**: Ready-set selection rules and the rule engine
//! - **`simulation`**: The six policies, the `Simulator` entry point, KPIs
//! - **`validation`**: Input checks and timeline invariant checks
//! - **`workload`**: Random process-set generation
//! - **`config`** / **`error`**: Run parameters and the error taxonomy
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::{Algorithm, ProcessSpec};
//! use cpu_sched::simulation::Simulator;
//!
//! let procs = ProcessSpec::from_tuples(&[(0, 5, 0), (0, 3, 0)]);
//! let timeline = Simulator::new().simulate(&procs, Algorithm::RoundRobin)?;
//! assert_eq!(timeline.interval_count(), 5);
//! assert_eq!(timeline.makespan(), 8);
//! # Ok::<(), cpu_sched::SimulationError>(())
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use config::SimulationConfig;
pub use error::{Result, SimulationError};
