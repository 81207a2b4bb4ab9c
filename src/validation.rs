//! Input and output validation.
//!
//! Input checks run before every simulation and detect:
//! - Non-positive burst times
//! - Negative arrival times
//! - Empty or duplicate process IDs
//! - Process sets whose simulated clock would overflow
//!
//! [`check_timeline`] verifies the invariants every produced timeline must
//! satisfy: ordered starts, no overlap, no start before arrival, and exact
//! conservation of each process's burst time.

use crate::models::{ProcessSpec, Timeline};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A process has `burst_time <= 0`.
    NonPositiveBurst,
    /// A process has `arrival_time < 0`.
    NegativeArrival,
    /// A process has an empty identifier.
    EmptyId,
    /// Two processes share the same ID.
    DuplicateId,
    /// The latest reachable tick does not fit in an `i64`.
    TimeOverflow,
    /// A timeline interval starts before its predecessor.
    UnorderedInterval,
    /// A timeline interval overlaps its predecessor.
    OverlappingInterval,
    /// A timeline interval has `end <= start`.
    EmptyInterval,
    /// A timeline interval starts before its process arrives.
    EarlyStart,
    /// Scheduled time for a process differs from its burst time.
    WorkMismatch,
    /// A timeline interval names a process that was never submitted.
    UnknownProcess,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a process set before simulation.
///
/// Checks:
/// 1. Every ID is non-empty
/// 2. No duplicate IDs
/// 3. `arrival_time >= 0`
/// 4. `burst_time > 0`
/// 5. `max(arrival_time) + sum(burst_time)` fits in an `i64`; no policy can
///    advance the clock past that tick
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for (pos, p) in processes.iter().enumerate() {
        if p.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process at position {} has an empty ID", pos + 1),
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.id, p.burst_time
                ),
            ));
        }
    }

    if errors.is_empty() && latest_reachable_tick(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time exceeds the representable clock range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on any tick a policy can reach, or `None` on overflow.
///
/// Assumes non-negative arrivals and positive bursts.
fn latest_reachable_tick(processes: &[ProcessSpec]) -> Option<i64> {
    let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |tick, p| tick.checked_add(p.burst_time))
}

/// Checks a produced timeline against the processes it was computed from.
///
/// Reports every violation rather than stopping at the first one, so a
/// failing policy shows the whole picture.
pub fn check_timeline(timeline: &Timeline, processes: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();
    let by_id: HashMap<&str, &ProcessSpec> =
        processes.iter().map(|p| (p.id.as_str(), p)).collect();
    let mut scheduled: HashMap<&str, i64> = HashMap::new();

    for (pos, interval) in timeline.intervals.iter().enumerate() {
        if interval.end <= interval.start {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyInterval,
                format!(
                    "Interval #{pos} for '{}' is empty ({}..{})",
                    interval.process_id, interval.start, interval.end
                ),
            ));
        }

        if pos > 0 {
            let prev = &timeline.intervals[pos - 1];
            if interval.start < prev.start {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnorderedInterval,
                    format!(
                        "Interval #{pos} starts at {} before interval #{} at {}",
                        interval.start,
                        pos - 1,
                        prev.start
                    ),
                ));
            } else if interval.start < prev.end {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OverlappingInterval,
                    format!(
                        "Interval #{pos} starts at {} while '{}' runs until {}",
                        interval.start, prev.process_id, prev.end
                    ),
                ));
            }
        }

        match by_id.get(interval.process_id.as_str()) {
            Some(p) => {
                if interval.start < p.arrival_time {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::EarlyStart,
                        format!(
                            "'{}' runs at {} before arriving at {}",
                            p.id, interval.start, p.arrival_time
                        ),
                    ));
                }
                *scheduled.entry(p.id.as_str()).or_insert(0) += interval.duration();
            }
            None => errors.push(ValidationError::new(
                ValidationErrorKind::UnknownProcess,
                format!("Interval #{pos} names unknown process '{}'", interval.process_id),
            )),
        }
    }

    for p in processes {
        let got = scheduled.get(p.id.as_str()).copied().unwrap_or(0);
        if got != p.burst_time {
            errors.push(ValidationError::new(
                ValidationErrorKind::WorkMismatch,
                format!(
                    "'{}' received {got} ticks but needs {}",
                    p.id, p.burst_time
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
