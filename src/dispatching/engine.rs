//! Rule engine for multi-criteria dispatching.
//!
//! Composes dispatching rules lexicographically: the first rule decides,
//! later rules are consulted only on ties, and the stable process key breaks
//! whatever tie remains. Selection is therefore always deterministic.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, DispatchingRule};
use crate::simulation::{ProcessKey, ProcessState};

/// A composable rule engine for ready-set selection.
///
/// # Example
/// ```
/// use cpu_sched::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::HighestPriority)
///     .with_rule(rules::ArrivalTime);
/// assert_eq!(engine.rule_names(), vec!["PRIO", "AT"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine (orders by process key only).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule. Rules added later only break ties left by earlier ones.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Arrival order (FCFS).
    pub fn first_come() -> Self {
        Self::new().with_rule(rules::ArrivalTime)
    }

    /// Shortest burst, then arrival (SJF).
    pub fn shortest_burst() -> Self {
        Self::new()
            .with_rule(rules::ShortestBurst)
            .with_rule(rules::ArrivalTime)
    }

    /// Shortest remaining time, then arrival (SRTF).
    pub fn shortest_remaining() -> Self {
        Self::new()
            .with_rule(rules::ShortestRemaining)
            .with_rule(rules::ArrivalTime)
    }

    /// Lowest priority value, then arrival.
    pub fn priority() -> Self {
        Self::new()
            .with_rule(rules::HighestPriority)
            .with_rule(rules::ArrivalTime)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Total order used for selection. `Less` means `a` runs first.
    pub fn compare(&self, a: &ProcessState<'_>, b: &ProcessState<'_>) -> Ordering {
        self.rules
            .iter()
            .map(|r| r.evaluate(a).cmp(&r.evaluate(b)))
            .find(|o| o.is_ne())
            .unwrap_or_else(|| a.key.cmp(&b.key))
    }

    /// Returns the key of the best candidate, or `None` if there are none.
    pub fn select_best<'s, 'a: 's, I>(&self, candidates: I) -> Option<ProcessKey>
    where
        I: IntoIterator<Item = &'s ProcessState<'a>>,
    {
        candidates
            .into_iter()
            .min_by(|a, b| self.compare(a, b))
            .map(|s| s.key)
    }

    /// Sorts candidates best-first and returns their keys.
    pub fn sort_keys<'s, 'a: 's, I>(&self, candidates: I) -> Vec<ProcessKey>
    where
        I: IntoIterator<Item = &'s ProcessState<'a>>,
    {
        let mut states: Vec<&ProcessState<'a>> = candidates.into_iter().collect();
        states.sort_by(|a, b| self.compare(a, b));
        states.into_iter().map(|s| s.key).collect()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
