//! Uniprocessor CPU scheduling policies.
//!
//! Every policy is a pure function from a process list to an [`Execution`]:
//! the merged timeline plus the first-dispatch and completion instants of
//! each process. Metrics are derived afterwards by [`crate::metrics`].
//!
//! # Policies
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | [`FcfsScheduler`] | no | arrival order |
//! | [`SjfScheduler`] | no | shortest burst |
//! | [`SrtfScheduler`] | yes, every tick | shortest remaining |
//! | [`PriorityScheduler`] | no | lowest priority value |
//! | [`RoundRobinScheduler`] | yes, every quantum | FIFO ready queue |
//!
//! Ties between equally ranked processes are broken by earliest arrival,
//! then by position in the input list.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

mod fcfs;
mod non_preemptive;
mod priority;
mod queue;
mod round_robin;
mod sjf;
mod srtf;
mod state;

pub use fcfs::FcfsScheduler;
pub use priority::PriorityScheduler;
pub use queue::ReadyQueue;
pub use round_robin::RoundRobinScheduler;
pub use sjf::SjfScheduler;
pub use srtf::SrtfScheduler;
pub use state::{Execution, RunRecord};

use crate::models::{PolicyKind, Process};

/// A CPU scheduling policy.
///
/// Implementations assume validated input (see [`crate::validation`]).
/// They borrow the process list and keep their own run state, so the
/// caller's records are never modified.
pub trait Scheduler: std::fmt::Debug {
    /// The policy this scheduler implements.
    fn policy(&self) -> PolicyKind;

    /// Simulates the policy over `processes`.
    fn run(&self, processes: &[Process]) -> Execution;
}

/// Returns a boxed scheduler for the given policy.
///
/// `quantum` is read only for round-robin; `None` there yields `None`.
pub fn scheduler_for(policy: PolicyKind, quantum: Option<i64>) -> Option<Box<dyn Scheduler>> {
    let scheduler: Box<dyn Scheduler> = match policy {
        PolicyKind::Fcfs => Box::new(FcfsScheduler::new()),
        PolicyKind::SjfNonPreemptive => Box::new(SjfScheduler::new()),
        PolicyKind::SjfPreemptive => Box::new(SrtfScheduler::new()),
        PolicyKind::Priority => Box::new(PriorityScheduler::new()),
        PolicyKind::RoundRobin => Box::new(RoundRobinScheduler::new(quantum?)),
    };
    Some(scheduler)
}
