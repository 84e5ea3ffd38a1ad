//! First-come, first-served.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival time (input order breaks ties).
//! 2. For each process in that order: idle until it arrives if the CPU is
//!    ahead of it, then run it to completion in a single segment.
//!
//! # Complexity
//! O(n log n).

use log::debug;

use super::state::RunTable;
use super::{Execution, Scheduler};
use crate::models::{PolicyKind, Process, TimelineBuilder};

/// Non-preemptive first-come, first-served scheduler.
///
/// # Example
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{FcfsScheduler, Scheduler};
///
/// let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
/// let exec = FcfsScheduler::new().run(&processes);
/// assert_eq!(exec.timeline.makespan(), 8);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl FcfsScheduler {
    /// Creates the scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for FcfsScheduler {
    fn policy(&self) -> PolicyKind {
        PolicyKind::Fcfs
    }

    fn run(&self, processes: &[Process]) -> Execution {
        let mut table = RunTable::new(processes);
        let mut timeline = TimelineBuilder::new();

        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| processes[i].arrival_time);

        for index in order {
            let process = table.process(index);
            timeline.idle_until(process.arrival_time);

            let start = timeline.now();
            debug!("t={start} dispatch {} for {}", process.id, process.burst_time);
            table.execute(index, start, process.burst_time);
            timeline.run(&process.id, process.burst_time);
        }

        table.into_execution(timeline.finish())
    }
}
