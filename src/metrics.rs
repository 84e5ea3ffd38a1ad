//! Per-process metrics and schedule quality indicators.
//!
//! Derives results from a finished [`Execution`] and aggregates them.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first run - arrival |
//! | Makespan | end of the last segment |
//! | CPU Utilization | busy time / makespan |
//! | Throughput | processes / makespan |
//! | Context Switches | hand-offs between different processes |
//!
//! Averages are computed from exact integer sums; rounding is a display
//! concern.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::{Process, ProcessResult, Timeline};
use crate::scheduler::Execution;

/// Builds one result per completed process, in input order.
pub fn collect_results(processes: &[Process], execution: &Execution) -> Vec<ProcessResult> {
    execution
        .records
        .iter()
        .filter_map(|r| {
            processes
                .get(r.index)
                .map(|p| ProcessResult::from_run(p, r.first_run, r.completion))
        })
        .collect()
}

/// Mean turnaround, waiting and response times.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Averages {
    /// Mean turnaround time.
    pub turnaround: f64,
    /// Mean waiting time.
    pub waiting: f64,
    /// Mean response time.
    pub response: f64,
}

impl Averages {
    /// Averages over a result set.
    ///
    /// # Errors
    /// [`SimulationError::EmptyResult`] if `results` is empty.
    pub fn from_results(results: &[ProcessResult]) -> Result<Self, SimulationError> {
        if results.is_empty() {
            return Err(SimulationError::EmptyResult);
        }
        Ok(Self {
            turnaround: mean(results, |r| r.turnaround_time),
            waiting: mean(results, |r| r.waiting_time),
            response: mean(results, |r| r.response_time),
        })
    }
}

/// Schedule performance indicators.
///
/// All time values are in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationKpi {
    /// End of the last segment.
    pub makespan: i64,
    /// Ticks spent running processes.
    pub busy_time: i64,
    /// Ticks spent idle.
    pub idle_time: i64,
    /// Fraction of the makespan the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Mean first-run minus arrival.
    pub average_response_time: f64,
    /// Largest waiting time of any process.
    pub max_waiting_time: i64,
    /// Hand-offs between different processes.
    pub context_switches: usize,
}

impl SimulationKpi {
    /// Computes KPIs from a timeline and its per-process results.
    pub fn calculate(timeline: &Timeline, results: &[ProcessResult]) -> Self {
        let makespan = timeline.makespan();
        let busy_time = timeline.busy_time();

        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                busy_time as f64 / makespan as f64,
                results.len() as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        let average_response_time = if results.is_empty() {
            0.0
        } else {
            mean(results, |r| r.response_time)
        };

        Self {
            makespan,
            busy_time,
            idle_time: timeline.idle_time(),
            cpu_utilization,
            throughput,
            average_response_time,
            max_waiting_time: results.iter().map(|r| r.waiting_time).max().unwrap_or(0),
            context_switches: timeline.context_switches(),
        }
    }
}

/// Mean of a per-process time. Summed in `i128` so that many large
/// per-process values cannot overflow.
fn mean(results: &[ProcessResult], field: impl Fn(&ProcessResult) -> i64) -> f64 {
    let total: i128 = results.iter().map(|r| i128::from(field(r))).sum();
    total as f64 / results.len() as f64
}
