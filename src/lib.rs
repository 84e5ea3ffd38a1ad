//! Uniprocessor CPU scheduling simulator.
//!
//! Simulates classical scheduling policies over a fixed set of processes
//! and reports the execution timeline (Gantt chart) together with
//! per-process completion, turnaround, waiting and response times.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessResult`, `PolicyKind`,
//!   `Segment`, `Timeline`, `TimelineBuilder`
//! - **`validation`**: Input checks (empty lists, duplicate IDs, bad times,
//!   missing priorities, missing quantum)
//! - **`dispatching`**: Selection rules (FCFS, SJF, SRTF, PRIORITY) and a
//!   sequential rule engine with input-order tie-breaking
//! - **`scheduler`**: The five policies: FCFS, SJF, SRTF, priority, round-robin
//! - **`metrics`**: Per-process results, averages and schedule KPIs
//! - **`simulation`**: The validating driver, `simulate`
//! - **`workload`**: Seeded random process lists
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::{PolicyKind, Process};
//! use u_cpusched::simulate;
//!
//! let processes = vec![Process::new("P1", 0, 8), Process::new("P2", 1, 4)];
//! let result = simulate(&processes, PolicyKind::SjfPreemptive, None).unwrap();
//! assert_eq!(result.result_for("P2").unwrap().completion_time, 5);
//! ```
//!
//! # Logging
//!
//! Decisions are reported through the `log` facade (`info` per run,
//! `debug` per dispatch, `trace` per SRTF run slice). No logger is installed.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dispatching;
pub mod error;
pub mod metrics;
pub mod models;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
pub use simulation::{simulate, SimulationRequest, SimulationResult};
