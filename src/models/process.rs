//! Process model.
//!
//! A process is the unit of work handed to the CPU scheduler: an identifier,
//! the instant it becomes ready, the CPU time it needs, and an optional
//! static priority.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Field names serialize in camelCase (`arrivalTime`, `burstTime`);
/// snake_case spellings are accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Process identifier (unique within a run).
    pub id: String,
    /// Tick at which the process enters the ready state.
    #[serde(alias = "arrival_time")]
    pub arrival_time: i64,
    /// Total CPU ticks required.
    #[serde(alias = "burst_time")]
    pub burst_time: i64,
    /// Static priority (lower = more urgent). Only read by the priority policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

impl Process {
    /// Creates a process without a priority.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    /// Sets the static priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Whether the process has arrived by `clock`.
    #[inline]
    pub fn has_arrived(&self, clock: i64) -> bool {
        self.arrival_time <= clock
    }
}

/// Per-process outcome of a simulation run.
///
/// # Invariants
/// - `turnaround_time = completion_time - arrival_time`
/// - `waiting_time = turnaround_time - burst_time >= 0`
/// - `0 <= response_time <= waiting_time`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    /// Process identifier.
    pub id: String,
    /// Arrival tick (echoed from input).
    pub arrival_time: i64,
    /// Burst length (echoed from input).
    pub burst_time: i64,
    /// Priority (echoed from input).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    /// Tick at which the process first received the CPU.
    pub first_run_time: i64,
    /// Tick at which the last unit of work finished.
    pub completion_time: i64,
    /// Completion minus arrival.
    pub turnaround_time: i64,
    /// Turnaround minus burst: time spent ready but not running.
    pub waiting_time: i64,
    /// First run minus arrival.
    pub response_time: i64,
}

impl ProcessResult {
    /// Derives the result of a finished process from its first dispatch
    /// and completion instants.
    pub fn from_run(process: &Process, first_run_time: i64, completion_time: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            id: process.id.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            first_run_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
            response_time: first_run_time - process.arrival_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 2, 5).with_priority(3);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival_time, 2);
        assert_eq!(p.burst_time, 5);
        assert_eq!(p.priority, Some(3));
        assert!(!p.has_arrived(1));
        assert!(p.has_arrived(2));
    }

    #[test]
    fn test_result_from_run() {
        let p = Process::new("P2", 1, 3);
        let r = ProcessResult::from_run(&p, 5, 8);
        assert_eq!(r.completion_time, 8);
        assert_eq!(r.turnaround_time, 7);
        assert_eq!(r.waiting_time, 4);
        assert_eq!(r.response_time, 4);
        assert_eq!(r.priority, None);
    }

    #[test]
    fn test_process_wire_shape() {
        let p: Process =
            serde_json::from_str(r#"{"id":"P1","arrivalTime":0,"burstTime":4}"#).unwrap();
        assert_eq!(p, Process::new("P1", 0, 4));

        let snake: Process = serde_json::from_str(
            r#"{"id":"P2","arrival_time":1,"burst_time":2,"priority":0}"#,
        )
        .unwrap();
        assert_eq!(snake, Process::new("P2", 1, 2).with_priority(0));

        let json = serde_json::to_string(&Process::new("P3", 0, 1)).unwrap();
        assert!(json.contains("\"arrivalTime\":0"));
        assert!(!json.contains("priority"));
    }

    #[test]
    fn test_non_numeric_rejected_by_serde() {
        let parsed: Result<Process, _> =
            serde_json::from_str(r#"{"id":"P1","arrivalTime":"soon","burstTime":4}"#);
        assert!(parsed.is_err());
    }
}
