//! Timeline (solution) model.
//!
//! A timeline is the ordered sequence of execution intervals one policy
//! produced for one set of processes. It is the only thing a presenter
//! needs to draw a Gantt chart or print a textual schedule.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};
use std::fmt;

/// A contiguous stretch of CPU time given to one process.
///
/// `process_id` always refers to [`ProcessSpec::id`](super::ProcessSpec::id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Owning process identifier.
    pub process_id: String,
    /// Start tick (inclusive).
    pub start: i64,
    /// End tick (exclusive).
    pub end: i64,
}

impl ExecutionInterval {
    /// Creates a new interval.
    pub fn new(process_id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
        }
    }

    /// Length of the interval (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl fmt::Display for ExecutionInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Process: {}, Start: {}, End: {}",
            self.process_id, self.start, self.end
        )
    }
}

/// An ordered execution timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Intervals in non-decreasing start order.
    pub intervals: Vec<ExecutionInterval>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interval.
    pub fn add_interval(&mut self, interval: ExecutionInterval) {
        self.intervals.push(interval);
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Number of intervals.
    pub fn interval_count(&self) -> usize {
        self.intervals.len()
    }

    /// Latest end tick across all intervals.
    pub fn makespan(&self) -> i64 {
        self.intervals.iter().map(|i| i.end).max().unwrap_or(0)
    }

    /// Total ticks the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.intervals.iter().map(ExecutionInterval::duration).sum()
    }

    /// All intervals belonging to one process, in timeline order.
    pub fn intervals_for(&self, process_id: &str) -> Vec<&ExecutionInterval> {
        self.intervals
            .iter()
            .filter(|i| i.process_id == process_id)
            .collect()
    }

    /// Tick at which the process first got the CPU.
    pub fn first_start(&self, process_id: &str) -> Option<i64> {
        self.intervals
            .iter()
            .find(|i| i.process_id == process_id)
            .map(|i| i.start)
    }

    /// Tick at which the process finished (end of its last interval).
    pub fn completion_time(&self, process_id: &str) -> Option<i64> {
        self.intervals
            .iter()
            .filter(|i| i.process_id == process_id)
            .map(|i| i.end)
            .max()
    }

    /// Distinct process ids in order of first appearance.
    pub fn process_ids(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for i in &self.intervals {
            if !seen.contains(&i.process_id.as_str()) {
                seen.push(&i.process_id);
            }
        }
        seen
    }

    /// Number of dispatches that switch to a different process.
    pub fn context_switches(&self) -> usize {
        self.intervals
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count()
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for interval in &self.intervals {
            writeln!(f, "{interval}")?;
        }
        Ok(())
    }
}

impl FromIterator<ExecutionInterval> for Timeline {
    fn from_iter<I: IntoIterator<Item = ExecutionInterval>>(iter: I) -> Self {
        Self {
            intervals: iter.into_iter().collect(),
        }
    }
}
