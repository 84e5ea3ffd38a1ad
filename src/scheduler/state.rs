//! Per-run bookkeeping shared by all policies.

use serde::{Deserialize, Serialize};

use crate::dispatching::Candidate;
use crate::models::{Process, Timeline};

/// First dispatch and completion of one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Position of the process in the input list.
    pub index: usize,
    /// Tick at which the process first received the CPU.
    pub first_run: i64,
    /// Tick at which its last unit of work finished.
    pub completion: i64,
}

/// Raw output of a policy run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// Merged timeline, idle included.
    pub timeline: Timeline,
    /// One record per completed process, in input order.
    pub records: Vec<RunRecord>,
}

impl Execution {
    /// Record for the process at `index`.
    pub fn record(&self, index: usize) -> Option<&RunRecord> {
        self.records.iter().find(|r| r.index == index)
    }
}

/// Mutable run state over a borrowed process list.
///
/// Tracks remaining work, first dispatch and completion per process.
/// The input records themselves are never touched.
#[derive(Debug)]
pub(crate) struct RunTable<'a> {
    processes: &'a [Process],
    remaining: Vec<i64>,
    first_run: Vec<Option<i64>>,
    completion: Vec<Option<i64>>,
    completed: usize,
}

impl<'a> RunTable<'a> {
    pub(crate) fn new(processes: &'a [Process]) -> Self {
        Self {
            processes,
            remaining: processes.iter().map(|p| p.burst_time).collect(),
            first_run: vec![None; processes.len()],
            completion: vec![None; processes.len()],
            completed: 0,
        }
    }

    pub(crate) fn process(&self, index: usize) -> &'a Process {
        &self.processes[index]
    }

    pub(crate) fn remaining(&self, index: usize) -> i64 {
        self.remaining[index]
    }

    pub(crate) fn is_completed(&self, index: usize) -> bool {
        self.completion[index].is_some()
    }

    pub(crate) fn all_completed(&self) -> bool {
        self.completed == self.processes.len()
    }

    /// Processes that have arrived by `clock` and still owe CPU time.
    pub(crate) fn ready_at(&self, clock: i64) -> Vec<Candidate<'a>> {
        let processes: &'a [Process] = self.processes;
        processes
            .iter()
            .enumerate()
            .filter(|&(i, p)| p.has_arrived(clock) && !self.is_completed(i) && self.remaining[i] > 0)
            .map(|(i, p)| Candidate::new(i, p, self.remaining[i]))
            .collect()
    }

    /// Earliest arrival strictly after `clock` among unfinished processes.
    pub(crate) fn next_arrival_after(&self, clock: i64) -> Option<i64> {
        self.processes
            .iter()
            .enumerate()
            .filter(|&(i, p)| !self.is_completed(i) && p.arrival_time > clock)
            .map(|(_, p)| p.arrival_time)
            .min()
    }

    /// Charges `duration` ticks starting at `start` to the process.
    ///
    /// Returns `true` if this finished the process.
    pub(crate) fn execute(&mut self, index: usize, start: i64, duration: i64) -> bool {
        if self.first_run[index].is_none() {
            self.first_run[index] = Some(start);
        }
        self.remaining[index] -= duration;
        if self.remaining[index] <= 0 && self.completion[index].is_none() {
            self.remaining[index] = 0;
            self.completion[index] = Some(start + duration);
            self.completed += 1;
            return true;
        }
        false
    }

    pub(crate) fn into_execution(self, timeline: Timeline) -> Execution {
        let records = self
            .first_run
            .iter()
            .zip(&self.completion)
            .enumerate()
            .filter_map(|(index, (first, done))| {
                Some(RunRecord {
                    index,
                    first_run: (*first)?,
                    completion: (*done)?,
                })
            })
            .collect();
        Execution { timeline, records }
    }
}
