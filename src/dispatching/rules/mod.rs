//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Arrival-based**: FCFS
//! - **Length-based**: SJF (total burst), SRTF (remaining burst)
//! - **Priority**: PRIORITY (static, lower value first)
//!
//! # Score Convention
//! All rules return lower scores for candidates that should run first.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

use super::{Candidate, DispatchingRule, RuleScore};

/// Earliest arrival first.
///
/// Used as the tie-breaker behind every length or priority rule.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl DispatchingRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> RuleScore {
        candidate.process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First Come, First Served"
    }
}

/// Shortest total burst first.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine
/// when all jobs are available.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> RuleScore {
        candidate.process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest remaining time first.
///
/// Identical to [`ShortestBurst`] for processes that have not run yet.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> RuleScore {
        candidate.remaining
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

/// Most urgent static priority first (lowest numeric value).
///
/// Processes without a priority rank last.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl DispatchingRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> RuleScore {
        candidate.process.priority.unwrap_or(RuleScore::MAX)
    }

    fn description(&self) -> &'static str {
        "Static Priority (lower value first)"
    }
}
