//! Simulation driver.
//!
//! Validates input, dispatches to the selected policy and assembles the
//! combined result.
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::{PolicyKind, Process};
//! use u_cpusched::simulate;
//!
//! let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
//! let result = simulate(&processes, PolicyKind::Fcfs, None).unwrap();
//! assert_eq!(result.processes[1].waiting_time, 4);
//! assert_eq!(format!("{:.2}", result.average_waiting), "2.00");
//! ```

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SimulationError;
use crate::metrics::{collect_results, Averages, SimulationKpi};
use crate::models::{PolicyKind, Process, ProcessResult, Timeline};
use crate::scheduler::scheduler_for;
use crate::validation::{validate_input, ValidationError, ValidationErrorKind};

/// Input container for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Policy to simulate.
    pub policy: PolicyKind,
    /// Time quantum (round-robin only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
}

impl SimulationRequest {
    /// Creates a request without a quantum.
    pub fn new(processes: Vec<Process>, policy: PolicyKind) -> Self {
        Self {
            processes,
            policy,
            quantum: None,
        }
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Runs the simulation.
    pub fn run(&self) -> Result<SimulationResult, SimulationError> {
        simulate(&self.processes, self.policy, self.quantum)
    }
}

/// Outcome of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Simulated policy.
    pub policy: PolicyKind,
    /// Quantum used (round-robin only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
    /// Full timeline, idle included.
    pub timeline: Timeline,
    /// One result per process, in input order.
    pub processes: Vec<ProcessResult>,
    /// Mean turnaround time (unrounded).
    pub average_turnaround: f64,
    /// Mean waiting time (unrounded).
    pub average_waiting: f64,
}

impl SimulationResult {
    /// Result for the given process.
    pub fn result_for(&self, id: &str) -> Option<&ProcessResult> {
        self.processes.iter().find(|r| r.id == id)
    }

    /// Turnaround, waiting and response averages.
    pub fn averages(&self) -> Result<Averages, SimulationError> {
        Averages::from_results(&self.processes)
    }

    /// Schedule quality indicators.
    pub fn kpi(&self) -> SimulationKpi {
        SimulationKpi::calculate(&self.timeline, &self.processes)
    }

    /// Process ids in completion order.
    pub fn completion_order(&self) -> Vec<&str> {
        let mut finished: Vec<&ProcessResult> = self.processes.iter().collect();
        finished.sort_by_key(|r| r.completion_time);
        finished.into_iter().map(|r| r.id.as_str()).collect()
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.policy)?;
        if let Some(q) = self.quantum {
            write!(f, " (quantum {q})")?;
        }
        write!(
            f,
            ": {} processes, makespan {}, average turnaround {:.2}, average waiting {:.2}",
            self.processes.len(),
            self.timeline.makespan(),
            self.average_turnaround,
            self.average_waiting
        )
    }
}

/// Simulates `policy` over `processes`.
///
/// The caller's records are borrowed and never modified, so the same
/// slice can be simulated repeatedly (or concurrently) with identical
/// results.
///
/// # Errors
/// [`SimulationError::Validation`] with every problem found when the input
/// is rejected (see [`validate_input`]). No scheduling work is done in that
/// case.
pub fn simulate(
    processes: &[Process],
    policy: PolicyKind,
    quantum: Option<i64>,
) -> Result<SimulationResult, SimulationError> {
    if let Err(errors) = validate_input(processes, policy, quantum) {
        warn!("{policy}: rejected input with {} problem(s)", errors.len());
        return Err(SimulationError::Validation(errors));
    }

    let scheduler = scheduler_for(policy, quantum).ok_or_else(|| {
        SimulationError::Validation(vec![ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            "Round-robin requires a time quantum",
        )])
    })?;

    info!("{policy}: simulating {} processes", processes.len());
    let execution = scheduler.run(processes);
    let results = collect_results(processes, &execution);
    let averages = Averages::from_results(&results)?;

    let result = SimulationResult {
        policy,
        quantum: if policy.requires_quantum() { quantum } else { None },
        timeline: execution.timeline,
        processes: results,
        average_turnaround: averages.turnaround,
        average_waiting: averages.waiting,
    };
    info!("{result}");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Occupant, Segment};

    #[test]
    fn test_fcfs_reference_case() {
        let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
        let result = simulate(&processes, PolicyKind::Fcfs, None).unwrap();

        assert_eq!(
            result.timeline.segments(),
            &[
                Segment::new(Occupant::process("P1"), 0, 5),
                Segment::new(Occupant::process("P2"), 5, 8),
            ]
        );
        let p2 = result.result_for("P2").unwrap();
        assert_eq!(p2.completion_time, 8);
        assert_eq!(p2.turnaround_time, 7);
        assert_eq!(p2.waiting_time, 4);
        assert!((result.average_turnaround - 6.0).abs() < 1e-10);
        assert!((result.average_waiting - 2.0).abs() < 1e-10);
        assert_eq!(result.quantum, None);
    }

    #[test]
    fn test_validation_failure_returns_no_result() {
        let err = simulate(&[], PolicyKind::Fcfs, None).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::NoProcesses
        );

        let processes = vec![Process::new("P1", 0, 2)];
        let err = simulate(&processes, PolicyKind::RoundRobin, Some(0)).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::InvalidQuantum
        );

        let err = simulate(&processes, PolicyKind::Priority, None).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::MissingPriority
        );
    }

    #[test]
    fn test_arrival_near_max_rejected_for_every_policy() {
        let processes = vec![Process::new("P1", i64::MAX - 1, 5).with_priority(0)];
        for policy in PolicyKind::ALL {
            let err = simulate(&processes, policy, Some(2)).unwrap_err();
            assert_eq!(
                err.validation_errors()[0].kind,
                ValidationErrorKind::TimeOverflow
            );
        }
    }

    #[test]
    fn test_results_in_input_order() {
        let processes = vec![Process::new("long", 0, 9), Process::new("short", 0, 1)];
        let result = simulate(&processes, PolicyKind::SjfNonPreemptive, None).unwrap();
        let ids: Vec<&str> = result.processes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["long", "short"]);
        assert_eq!(result.completion_order(), vec!["short", "long"]);
    }

    #[test]
    fn test_quantum_echoed_only_for_round_robin() {
        let processes = vec![Process::new("P1", 0, 3)];
        let rr = simulate(&processes, PolicyKind::RoundRobin, Some(2)).unwrap();
        assert_eq!(rr.quantum, Some(2));
        let fcfs = simulate(&processes, PolicyKind::Fcfs, Some(2)).unwrap();
        assert_eq!(fcfs.quantum, None);
    }

    #[test]
    fn test_request_run_and_wire_shape() {
        let json = r#"{
            "policy": "rr",
            "quantum": 2,
            "processes": [
                {"id": "P1", "arrivalTime": 0, "burstTime": 5},
                {"id": "P2", "arrivalTime": 0, "burstTime": 3}
            ]
        }"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request,
            SimulationRequest::new(
                vec![Process::new("P1", 0, 5), Process::new("P2", 0, 3)],
                PolicyKind::RoundRobin
            )
            .with_quantum(2)
        );

        let result = request.run().unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["policy"], "round-robin");
        assert_eq!(value["processes"][0]["completionTime"], 8);
        assert!(value["timeline"].is_array());
        assert!(value.get("averageWaiting").is_some());
    }

    #[test]
    fn test_display_rounds_to_two_decimals() {
        let processes = vec![
            Process::new("P1", 0, 1),
            Process::new("P2", 0, 1),
            Process::new("P3", 0, 2),
        ];
        let result = simulate(&processes, PolicyKind::Fcfs, None).unwrap();
        // turnaround 1, 2, 4 → 7/3; waiting 0, 1, 2 → 1
        let text = result.to_string();
        assert!(text.contains("average turnaround 2.33"));
        assert!(text.contains("average waiting 1.00"));
        assert!((result.average_turnaround - 7.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_kpi_and_averages_accessors() {
        let processes = vec![Process::new("P1", 2, 3)];
        let result = simulate(&processes, PolicyKind::SjfPreemptive, None).unwrap();
        let kpi = result.kpi();
        assert_eq!(kpi.makespan, 5);
        assert_eq!(kpi.idle_time, 2);
        let avg = result.averages().unwrap();
        assert!((avg.turnaround - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_idempotent() {
        let processes = vec![
            Process::new("P1", 0, 6).with_priority(2),
            Process::new("P2", 1, 2).with_priority(1),
            Process::new("P3", 3, 4).with_priority(3),
        ];
        for policy in PolicyKind::ALL {
            let a = simulate(&processes, policy, Some(2)).unwrap();
            let b = simulate(&processes.clone(), policy, Some(2)).unwrap();
            assert_eq!(a, b);
        }
    }
}
