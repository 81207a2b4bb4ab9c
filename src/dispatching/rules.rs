//! Built-in dispatching rules.
//!
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore};
use crate::simulation::ProcessState;

/// Earliest arrival first (FCFS order).
#[derive(Debug, Clone, Copy)]
pub struct ArrivalTime;

impl DispatchingRule for ArrivalTime {
    fn name(&self) -> &'static str {
        "AT"
    }

    fn evaluate(&self, state: &ProcessState<'_>) -> RuleScore {
        state.spec.arrival_time
    }
}

/// Shortest total burst first.
///
/// Looks at the original burst, never at work already done, so a choice
/// made with it stays valid until the process completes.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SB"
    }

    fn evaluate(&self, state: &ProcessState<'_>) -> RuleScore {
        state.spec.burst_time
    }
}

/// Shortest remaining burst first.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SR"
    }

    fn evaluate(&self, state: &ProcessState<'_>) -> RuleScore {
        state.remaining
    }
}

/// Lowest priority number first.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl DispatchingRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIO"
    }

    fn evaluate(&self, state: &ProcessState<'_>) -> RuleScore {
        RuleScore::from(state.spec.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;
    use crate::simulation::ProcessTable;

    #[test]
    fn test_rule_scores() {
        let procs = vec![ProcessSpec::new("P1", 3, 8).with_priority(-2)];
        let mut table = ProcessTable::new(&procs);
        let key = table.keys().next().unwrap();
        table.run(key, 5);

        let state = table.get(key);
        assert_eq!(ArrivalTime.evaluate(state), 3);
        assert_eq!(ShortestBurst.evaluate(state), 8);
        assert_eq!(ShortestRemaining.evaluate(state), 3);
        assert_eq!(HighestPriority.evaluate(state), -2);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(ArrivalTime.name(), "AT");
        assert_eq!(ShortestRemaining.name(), "SR");
        assert_eq!(HighestPriority.name(), "PRIO");
    }
}
