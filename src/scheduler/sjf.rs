//! Shortest job first, non-preemptive.
//!
//! Whenever the CPU frees up, the arrived process with the smallest total
//! burst runs to completion. Ties go to the earliest arrival, then to input
//! order.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use super::non_preemptive::run_to_completion;
use super::{Execution, Scheduler};
use crate::dispatching::RuleEngine;
use crate::models::{PolicyKind, Process};

/// Non-preemptive shortest-job-first scheduler.
#[derive(Debug, Clone)]
pub struct SjfScheduler {
    engine: RuleEngine,
}

impl SjfScheduler {
    /// Creates the scheduler.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::shortest_job(),
        }
    }
}

impl Default for SjfScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for SjfScheduler {
    fn policy(&self) -> PolicyKind {
        PolicyKind::SjfNonPreemptive
    }

    fn run(&self, processes: &[Process]) -> Execution {
        run_to_completion(processes, &self.engine)
    }
}
