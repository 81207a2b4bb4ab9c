//! Run-to-completion policies: FCFS, SJF and non-preemptive Priority.
//!
//! # Algorithm
//!
//! 1. At each decision point (start, a completion, or the end of an idle
//!    gap), pick the best ready process with the policy's rule engine.
//! 2. Run it to completion as a single interval; arrivals during the run
//!    are only considered at the next decision point.
//! 3. If nothing is ready, jump to the earliest pending arrival.
//!
//! Each process therefore yields exactly one interval.
//!
//! # Complexity
//! O(n²) for n processes.

use log::debug;

use super::state::{ProcessTable, TimelineBuilder};
use crate::dispatching::RuleEngine;
use crate::models::Timeline;

/// First-Come-First-Served: arrival order, ties by input order.
pub fn first_come_first_served(table: &mut ProcessTable<'_>) -> Timeline {
    run_to_completion(table, &RuleEngine::first_come())
}

/// Shortest Job First: smallest burst, then arrival, then input order.
pub fn shortest_job_first(table: &mut ProcessTable<'_>) -> Timeline {
    run_to_completion(table, &RuleEngine::shortest_burst())
}

/// Priority: lowest priority value, then arrival, then input order.
pub fn priority_non_preemptive(table: &mut ProcessTable<'_>) -> Timeline {
    run_to_completion(table, &RuleEngine::priority())
}

fn run_to_completion(table: &mut ProcessTable<'_>, engine: &RuleEngine) -> Timeline {
    let mut builder = TimelineBuilder::new();
    let mut now = 0;

    while let Some(t) = table.next_decision_time(now) {
        now = t;
        let Some(key) = engine.select_best(table.ready(now)) else {
            break;
        };

        let state = table.get(key);
        let end = now + state.remaining;
        debug!("dispatch {} at {now} until {end}", state.spec.id);
        builder.push(state, now, end);

        let ticks = state.remaining;
        table.run(key, ticks);
        now = end;
    }

    builder.finish()
}
