//! Round-robin with a fixed time quantum.
//!
//! # Algorithm
//!
//! 1. Admit every process with `arrival <= clock` to the tail of the ready
//!    queue, in arrival order (input order breaks ties).
//! 2. If the queue is empty, idle until the next arrival.
//! 3. Otherwise dequeue the head and run it for `min(remaining, quantum)`.
//! 4. Admit processes that arrived during that slice, *then* re-enqueue the
//!    preempted process if it still has work. New arrivals therefore go
//!    ahead of the process that just ran.
//!
//! A process that is alone in the queue gets consecutive slices; these
//! merge into one timeline segment.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use log::debug;

use super::queue::ReadyQueue;
use super::state::RunTable;
use super::{Execution, Scheduler};
use crate::models::{PolicyKind, Process, TimelineBuilder};

/// Preemptive round-robin scheduler.
///
/// # Example
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{RoundRobinScheduler, Scheduler};
///
/// let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 0, 3)];
/// let exec = RoundRobinScheduler::new(2).run(&processes);
/// assert!(exec.timeline.iter().all(|s| s.duration() <= 2));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    quantum: i64,
}

impl RoundRobinScheduler {
    /// Creates the scheduler.
    ///
    /// Quanta below 1 are raised to 1 so every slice makes progress.
    pub fn new(quantum: i64) -> Self {
        Self {
            quantum: quantum.max(1),
        }
    }

    /// Time quantum in ticks.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Scheduler for RoundRobinScheduler {
    fn policy(&self) -> PolicyKind {
        PolicyKind::RoundRobin
    }

    fn run(&self, processes: &[Process]) -> Execution {
        let mut table = RunTable::new(processes);
        let mut timeline = TimelineBuilder::new();
        let mut queue = ReadyQueue::new();
        let mut admission = Admission::new(processes);

        while !table.all_completed() {
            admission.admit(timeline.now(), &mut queue);

            let Some(index) = queue.pop() else {
                match admission.next_arrival() {
                    Some(arrival) => timeline.idle_until(arrival),
                    None => break,
                }
                continue;
            };

            let clock = timeline.now();
            let process = table.process(index);
            let slice = table.remaining(index).min(self.quantum);
            debug!(
                "t={clock} dispatch {} for {slice} ({} queued)",
                process.id,
                queue.len()
            );

            let finished = table.execute(index, clock, slice);
            timeline.run(&process.id, slice);

            admission.admit(timeline.now(), &mut queue);
            if !finished {
                queue.push(index);
            }
        }

        table.into_execution(timeline.finish())
    }
}

/// Feeds processes into the ready queue in arrival order.
#[derive(Debug)]
struct Admission<'a> {
    processes: &'a [Process],
    order: Vec<usize>,
    cursor: usize,
}

impl<'a> Admission<'a> {
    fn new(processes: &'a [Process]) -> Self {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| processes[i].arrival_time);
        Self {
            processes,
            order,
            cursor: 0,
        }
    }

    /// Arrival of the next process still waiting for admission.
    fn next_arrival(&self) -> Option<i64> {
        self.order
            .get(self.cursor)
            .map(|&index| self.processes[index].arrival_time)
    }

    /// Enqueues every not-yet-admitted process that has arrived by `clock`.
    fn admit(&mut self, clock: i64, queue: &mut ReadyQueue) {
        while let Some(&index) = self.order.get(self.cursor) {
            if !self.processes[index].has_arrived(clock) {
                break;
            }
            queue.push(index);
            self.cursor += 1;
        }
    }
}
