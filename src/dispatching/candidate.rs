//! Ready-process view passed to dispatching rules.

use crate::models::Process;

/// A process eligible for the CPU at the current decision point.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// Position of the process in the caller's input list.
    pub index: usize,
    /// The process record.
    pub process: &'a Process,
    /// CPU ticks still owed to the process.
    pub remaining: i64,
}

impl<'a> Candidate<'a> {
    /// Creates a candidate with the given remaining time.
    pub fn new(index: usize, process: &'a Process, remaining: i64) -> Self {
        Self {
            index,
            process,
            remaining,
        }
    }

    /// Creates a candidate that has not run yet.
    pub fn fresh(index: usize, process: &'a Process) -> Self {
        Self::new(index, process, process.burst_time)
    }
}
