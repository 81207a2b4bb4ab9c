//! Per-run working state shared by all policies.
//!
//! A [`ProcessTable`] is an arena of [`ProcessState`] records created from
//! the caller's processes at the start of a run. Records are addressed by a
//! [`ProcessKey`] fixed at creation and never move, so the identifier carried
//! into each emitted interval is always the one the process was built with.

use log::debug;

use crate::models::{ExecutionInterval, ProcessSpec, Timeline};

/// Stable arena index of a process (its position in the caller's input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProcessKey(usize);

/// Mutable simulation state of one process.
#[derive(Debug, Clone)]
pub struct ProcessState<'a> {
    /// Arena key.
    pub key: ProcessKey,
    /// The immutable input record.
    pub spec: &'a ProcessSpec,
    /// CPU time still needed. Starts at `spec.burst_time`.
    pub remaining: i64,
}

impl ProcessState<'_> {
    /// Whether the process has received its whole burst.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining <= 0
    }

    /// Whether the process is eligible to run at `now`.
    #[inline]
    pub fn is_ready(&self, now: i64) -> bool {
        self.spec.arrival_time <= now && !self.is_complete()
    }
}

/// Arena of process states for a single simulation run.
#[derive(Debug, Clone)]
pub struct ProcessTable<'a> {
    states: Vec<ProcessState<'a>>,
}

impl<'a> ProcessTable<'a> {
    /// Creates working state for every process. The input is only borrowed.
    pub fn new(processes: &'a [ProcessSpec]) -> Self {
        let states = processes
            .iter()
            .enumerate()
            .map(|(i, spec)| ProcessState {
                key: ProcessKey(i),
                spec,
                remaining: spec.burst_time,
            })
            .collect();
        Self { states }
    }

    /// Looks up a process.
    #[inline]
    pub fn get(&self, key: ProcessKey) -> &ProcessState<'a> {
        &self.states[key.0]
    }

    /// All keys in input order.
    pub fn keys(&self) -> impl Iterator<Item = ProcessKey> + '_ {
        self.states.iter().map(|s| s.key)
    }

    /// All states in input order, complete or not.
    pub fn iter(&self) -> impl Iterator<Item = &ProcessState<'a>> {
        self.states.iter()
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the table holds no processes.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The ready set at `now`: arrived and not yet complete.
    pub fn ready(&self, now: i64) -> impl Iterator<Item = &ProcessState<'a>> {
        self.states.iter().filter(move |s| s.is_ready(now))
    }

    /// Earliest arrival among processes that still need CPU time.
    pub fn next_pending_arrival(&self) -> Option<i64> {
        self.states
            .iter()
            .filter(|s| !s.is_complete())
            .map(|s| s.spec.arrival_time)
            .min()
    }

    /// Whether every process has completed.
    pub fn all_complete(&self) -> bool {
        self.states.iter().all(ProcessState::is_complete)
    }

    /// Time of the next dispatch decision.
    ///
    /// Returns `now` when something is ready, otherwise jumps forward to the
    /// earliest pending arrival. `None` once every process has completed.
    /// The returned time is never earlier than `now`.
    pub fn next_decision_time(&self, now: i64) -> Option<i64> {
        if self.ready(now).next().is_some() {
            return Some(now);
        }
        let next = self.next_pending_arrival()?.max(now);
        debug!("CPU idle from {now} to {next}");
        Some(next)
    }

    /// Charges `ticks` of CPU time to a process.
    ///
    /// Callers never run a process past its remaining burst.
    pub fn run(&mut self, key: ProcessKey, ticks: i64) {
        let state = &mut self.states[key.0];
        debug_assert!(ticks > 0 && ticks <= state.remaining);
        state.remaining -= ticks;
    }
}

/// Accumulates intervals into a [`Timeline`].
///
/// In coalescing mode an interval that directly continues the previous one
/// for the same process extends it instead of starting a new one.
#[derive(Debug, Clone, Default)]
pub struct TimelineBuilder {
    timeline: Timeline,
    coalesce: bool,
}

impl TimelineBuilder {
    /// Emits every pushed interval as-is.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges back-to-back intervals of the same process.
    pub fn coalescing() -> Self {
        Self {
            timeline: Timeline::new(),
            coalesce: true,
        }
    }

    /// Records that `state` held the CPU over `start..end`.
    pub fn push(&mut self, state: &ProcessState<'_>, start: i64, end: i64) {
        if self.coalesce {
            if let Some(last) = self.timeline.intervals.last_mut() {
                if last.process_id == state.spec.id && last.end == start {
                    last.end = end;
                    return;
                }
            }
        }
        self.timeline
            .add_interval(ExecutionInterval::new(state.spec.id.clone(), start, end));
    }

    /// Returns the finished timeline.
    pub fn finish(self) -> Timeline {
        self.timeline
    }
}
