//! Preemptive Priority scheduling.
//!
//! Time slice of one tick: at every tick the ready process with the lowest
//! priority value runs (ties: earlier arrival, then input order). Adjacent
//! ticks of the same process are coalesced into one interval.
//!
//! A process is preempted only by a strictly more important arrival, since
//! an equal-priority latecomer always loses the arrival tie-break.

use log::trace;

use super::state::{ProcessKey, ProcessTable, TimelineBuilder};
use crate::dispatching::RuleEngine;
use crate::models::Timeline;

/// Runs preemptive Priority scheduling over the table.
pub fn priority_preemptive(table: &mut ProcessTable<'_>) -> Timeline {
    let engine = RuleEngine::priority();
    let mut builder = TimelineBuilder::coalescing();
    let mut previous: Option<ProcessKey> = None;
    let mut now = 0;

    while let Some(t) = table.next_decision_time(now) {
        now = t;
        let Some(key) = engine.select_best(table.ready(now)) else {
            break;
        };

        if let Some(prev) = previous.filter(|&p| p != key && !table.get(p).is_complete()) {
            trace!(
                "{} preempts {} at {now}",
                table.get(key).spec.id,
                table.get(prev).spec.id
            );
        }

        builder.push(table.get(key), now, now + 1);
        table.run(key, 1);
        previous = Some(key);
        now += 1;
    }

    builder.finish()
}
