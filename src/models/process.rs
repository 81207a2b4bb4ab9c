//! Process model.
//!
//! A process is a single CPU burst to be scheduled: it becomes ready at its
//! arrival time and needs `burst_time` units of CPU before it completes.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process submitted to the scheduler.
///
/// Immutable input to a simulation run. The engine copies what it needs into
/// its own working state and never mutates the caller's collection.
///
/// # Time Representation
/// Times are abstract integer ticks relative to the simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Display identifier, fixed at construction (e.g. `"P1"`).
    pub id: String,
    /// Tick at which the process becomes ready.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Scheduling priority (lower = more important).
    pub priority: i32,
}

impl ProcessSpec {
    /// Creates a process with priority 0.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Builds processes from `(arrival, burst, priority)` rows.
    ///
    /// Identifiers are assigned once, in input order: `P1`, `P2`, ...
    ///
    /// ```
    /// use cpu_sched::models::ProcessSpec;
    ///
    /// let procs = ProcessSpec::from_tuples(&[(0, 5, 2), (1, 3, 1)]);
    /// assert_eq!(procs[1].id, "P2");
    /// assert_eq!(procs[1].priority, 1);
    /// ```
    pub fn from_tuples(rows: &[(i64, i64, i32)]) -> Vec<Self> {
        rows.iter()
            .enumerate()
            .map(|(i, &(arrival, burst, priority))| {
                Self::new(format!("P{}", i + 1), arrival, burst).with_priority(priority)
            })
            .collect()
    }
}
