//! Round Robin with a fixed quantum.
//!
//! # Algorithm
//!
//! 1. Processes join a FIFO ready queue in arrival order (input order on
//!    ties).
//! 2. The head of the queue runs for `min(quantum, remaining)` ticks and
//!    that slice is emitted as one interval.
//! 3. Processes that arrived up to the end of the slice are enqueued
//!    **before** the preempted process is re-queued at the tail.
//! 4. If the queue is empty, the clock jumps to the next arrival.
//!
//! Slices are not coalesced: a process alone on the CPU still shows one
//! interval per quantum.

use std::collections::VecDeque;

use log::{debug, trace};

use super::state::{ProcessKey, ProcessTable, TimelineBuilder};
use crate::dispatching::RuleEngine;
use crate::models::Timeline;

/// Runs Round Robin with the given quantum. `quantum` must be positive.
pub fn round_robin(table: &mut ProcessTable<'_>, quantum: i64) -> Timeline {
    debug_assert!(quantum > 0);

    let arrivals = RuleEngine::first_come().sort_keys(table.iter());
    let mut arrivals = arrivals.into_iter().peekable();
    let mut queue: VecDeque<ProcessKey> = VecDeque::with_capacity(table.len());
    let mut builder = TimelineBuilder::new();
    let mut now = 0;

    loop {
        while let Some(&key) = arrivals.peek() {
            if table.get(key).spec.arrival_time > now {
                break;
            }
            queue.push_back(key);
            arrivals.next();
        }

        let Some(key) = queue.pop_front() else {
            match arrivals.peek() {
                Some(&key) => {
                    let next = table.get(key).spec.arrival_time;
                    debug!("CPU idle from {now} to {next}");
                    now = next;
                    continue;
                }
                None => break,
            }
        };

        let state = table.get(key);
        let slice = state.remaining.min(quantum);
        trace!("slice {} at {now} for {slice}", state.spec.id);
        builder.push(state, now, now + slice);
        table.run(key, slice);
        now += slice;

        while let Some(&arrived) = arrivals.peek() {
            if table.get(arrived).spec.arrival_time > now {
                break;
            }
            queue.push_back(arrived);
            arrivals.next();
        }

        if !table.get(key).is_complete() {
            queue.push_back(key);
        }
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;

    fn rows(t: &Timeline) -> Vec<(&str, i64, i64)> {
        t.intervals
            .iter()
            .map(|i| (i.process_id.as_str(), i.start, i.end))
            .collect()
    }

    fn run(rows_in: &[(i64, i64, i32)], quantum: i64) -> Timeline {
        let procs = ProcessSpec::from_tuples(rows_in);
        round_robin(&mut ProcessTable::new(&procs), quantum)
    }

    #[test]
    fn test_rr_alternates() {
        let t = run(&[(0, 5, 0), (0, 3, 0)], 2);
        assert_eq!(
            rows(&t),
            vec![("P1", 0, 2), ("P2", 2, 4), ("P1", 4, 6), ("P2", 6, 7), ("P1", 7, 8)]
        );
    }

    #[test]
    fn test_rr_arrival_during_slice_goes_before_requeue() {
        // P2 arrives at 1 while P1 runs 0..2, so P2 is queued ahead of P1.
        // P3 arrives exactly at 2, the slice end, and is also ahead of P1.
        let t = run(&[(0, 4, 0), (1, 2, 0), (2, 2, 0)], 2);
        assert_eq!(
            rows(&t),
            vec![("P1", 0, 2), ("P2", 2, 4), ("P3", 4, 6), ("P1", 6, 8)]
        );
    }

    #[test]
    fn test_rr_single_process_keeps_slices() {
        let t = run(&[(0, 5, 0)], 2);
        assert_eq!(rows(&t), vec![("P1", 0, 2), ("P1", 2, 4), ("P1", 4, 5)]);
    }

    #[test]
    fn test_rr_idle_gap() {
        let t = run(&[(0, 1, 0), (7, 3, 0)], 2);
        assert_eq!(rows(&t), vec![("P1", 0, 1), ("P2", 7, 9), ("P2", 9, 10)]);
    }

    #[test]
    fn test_rr_queue_seeded_by_arrival() {
        let t = run(&[(2, 1, 0), (0, 1, 0)], 4);
        assert_eq!(rows(&t), vec![("P2", 0, 1), ("P1", 2, 3)]);
    }

    #[test]
    fn test_rr_large_quantum_is_fcfs() {
        let t = run(&[(0, 3, 0), (1, 2, 0), (1, 4, 0)], 100);
        assert_eq!(rows(&t), vec![("P1", 0, 3), ("P2", 3, 5), ("P3", 5, 9)]);
    }

    #[test]
    fn test_rr_quantum_one() {
        let t = run(&[(0, 2, 0), (0, 2, 0)], 1);
        assert_eq!(
            rows(&t),
            vec![("P1", 0, 1), ("P2", 1, 2), ("P1", 2, 3), ("P2", 3, 4)]
        );
    }
}
