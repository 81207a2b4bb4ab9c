//! Dispatching rules and rule engine for ready-set selection.
//!
//! Every policy that chooses among several ready processes does so through a
//! [`RuleEngine`]: a primary rule, optional tie-breaking rules, and a final
//! tie-break on the stable [`ProcessKey`](crate::simulation::ProcessKey).
//!
//! # Usage
//!
//! ```
//! use cpu_sched::dispatching::{rules, RuleEngine};
//!
//! // Shortest burst first, earlier arrival on ties.
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_rule(rules::ArrivalTime);
//! assert_eq!(engine.rule_names(), vec!["SB", "AT"]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::simulation::ProcessState;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = i64;

/// A dispatching rule that ranks ready processes.
///
/// # Score Convention
/// **Lower score = dispatched first.** This matches both "shortest job first"
/// and the "lower priority number wins" convention.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SB", "PRIO").
    fn name(&self) -> &'static str;

    /// Scores a process in its current simulation state.
    fn evaluate(&self, state: &ProcessState<'_>) -> RuleScore;
}
