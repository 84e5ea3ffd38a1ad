//! Static priority, non-preemptive.
//!
//! Same loop as non-preemptive SJF, ranked by priority value instead of
//! burst length. Lower value = more urgent.

use super::non_preemptive::run_to_completion;
use super::{Execution, Scheduler};
use crate::dispatching::RuleEngine;
use crate::models::{PolicyKind, Process};

/// Non-preemptive priority scheduler.
#[derive(Debug, Clone)]
pub struct PriorityScheduler {
    engine: RuleEngine,
}

impl PriorityScheduler {
    /// Creates the scheduler.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::priority(),
        }
    }
}

impl Default for PriorityScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for PriorityScheduler {
    fn policy(&self) -> PolicyKind {
        PolicyKind::Priority
    }

    fn run(&self, processes: &[Process]) -> Execution {
        run_to_completion(processes, &self.engine)
    }
}
