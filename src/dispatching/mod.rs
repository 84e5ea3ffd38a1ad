//! Dispatching rules and rule engine for CPU selection.
//!
//! Every selection-based policy reduces to the same step: among the
//! processes that have arrived and still need CPU time, pick the one a
//! chain of rules ranks first. This module makes that step explicit and
//! testable on its own.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, Candidate, RuleEngine};
//! use u_cpusched::models::Process;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_tie_breaker(rules::EarliestArrival);
//!
//! let p1 = Process::new("P1", 0, 6);
//! let p2 = Process::new("P2", 1, 2);
//! let ready = [Candidate::fresh(0, &p1), Candidate::fresh(1, &p2)];
//! assert_eq!(engine.select_best(&ready), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod candidate;
mod engine;
pub mod rules;

pub use candidate::Candidate;
pub use engine::RuleEngine;

use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first). Integer-valued so
/// that ties are exact.
pub type RuleScore = i64;

/// A dispatching rule that ranks ready processes.
///
/// # Score Convention
/// **Lower score = dispatched first.**
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Scores a ready candidate.
    fn evaluate(&self, candidate: &Candidate<'_>) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
