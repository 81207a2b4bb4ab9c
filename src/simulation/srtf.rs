//! Shortest Remaining Time First (preemptive SJF).
//!
//! # Algorithm
//!
//! The clock advances one tick at a time. At every tick the best ready
//! process by (remaining, arrival, input order) is compared against the
//! process that ran during the previous tick:
//!
//! - the running process keeps the CPU unless the best candidate has
//!   **strictly** less remaining time;
//! - otherwise the running process is preempted.
//!
//! Consecutive ticks of one process are coalesced, so every interval is a
//! maximal run without preemption.
//!
//! # Complexity
//! O(n * B) where B is the sum of burst times.

use log::{debug, trace};

use super::state::{ProcessKey, ProcessTable, TimelineBuilder};
use crate::dispatching::RuleEngine;
use crate::models::Timeline;

/// Runs SRTF over the table.
pub fn shortest_remaining_time_first(table: &mut ProcessTable<'_>) -> Timeline {
    let engine = RuleEngine::shortest_remaining();
    let mut builder = TimelineBuilder::coalescing();
    let mut running: Option<ProcessKey> = None;
    let mut now = 0;

    while let Some(t) = table.next_decision_time(now) {
        now = t;
        let Some(best) = engine.select_best(table.ready(now)) else {
            break;
        };

        let current = running.filter(|&k| !table.get(k).is_complete());
        let next = match current {
            Some(cur) if table.get(best).remaining < table.get(cur).remaining => {
                trace!(
                    "{} preempts {} at {now} ({} < {})",
                    table.get(best).spec.id,
                    table.get(cur).spec.id,
                    table.get(best).remaining,
                    table.get(cur).remaining
                );
                best
            }
            Some(cur) => cur,
            None => {
                debug!("dispatch {} at {now}", table.get(best).spec.id);
                best
            }
        };

        builder.push(table.get(next), now, now + 1);
        table.run(next, 1);
        running = Some(next);
        now += 1;
    }

    builder.finish()
}
