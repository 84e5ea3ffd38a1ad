//! Input validation for CPU scheduling runs.
//!
//! Checks a process list against the selected policy before any
//! simulation work starts. Detects:
//! - Empty process lists
//! - Empty or duplicate process IDs
//! - Negative arrival times and non-positive burst times
//! - Missing or negative priorities (priority policy only)
//! - Missing or non-positive quantum (round-robin only)
//! - Workloads whose time horizon does not fit in `i64`
//! - Process IDs equal to the idle sentinel

use crate::models::{Occupant, PolicyKind, Process};
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The process list is empty.
    NoProcesses,
    /// A process has an empty (or all-whitespace) ID.
    EmptyId,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    InvalidArrivalTime,
    /// A process needs zero or negative CPU time.
    InvalidBurstTime,
    /// The priority policy was selected but a process has no priority.
    MissingPriority,
    /// A priority is negative.
    InvalidPriority,
    /// Round-robin was selected without a positive quantum.
    InvalidQuantum,
    /// A process ID collides with the idle sentinel (`"Idle"`).
    ReservedId,
    /// Latest arrival plus total burst exceeds `i64::MAX`.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates the input of a simulation run.
///
/// Checks:
/// 1. At least one process
/// 2. Every ID is non-empty and unique
/// 3. `arrival_time >= 0` and `burst_time >= 1`
/// 4. Priority policy: every process has a priority `>= 0`
/// 5. Round-robin: `quantum` is present and `> 0`
/// 6. `max(arrival) + sum(burst)` fits in `i64`. No policy's clock can
///    pass that point.
///
/// Priorities are not inspected for other policies.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    processes: &[Process],
    policy: PolicyKind,
    quantum: Option<i64>,
) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoProcesses,
            "No processes supplied",
        ));
    }

    let mut ids = HashSet::new();
    for (position, p) in processes.iter().enumerate() {
        if p.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process at position {position} has an empty ID"),
            ));
        } else if p.id == Occupant::IDLE {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReservedId,
                format!("Process ID '{}' is reserved for idle time", p.id),
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrivalTime,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurstTime,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.id, p.burst_time
                ),
            ));
        }

        if policy.requires_priority() {
            match p.priority {
                None => errors.push(ValidationError::new(
                    ValidationErrorKind::MissingPriority,
                    format!("Process '{}' has no priority", p.id),
                )),
                Some(priority) if priority < 0 => errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidPriority,
                    format!("Process '{}' has negative priority {priority}", p.id),
                )),
                Some(_) => {}
            }
        }
    }

    if policy.requires_quantum() {
        match quantum {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                "Round-robin requires a time quantum",
            )),
            Some(q) if q <= 0 => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                format!("Time quantum must be positive, got {q}"),
            )),
            Some(_) => {}
        }
    }

    if time_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time overflows i64",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Latest instant any policy's clock can reach, or `None` on overflow.
///
/// Values already rejected by the per-process checks are skipped.
fn time_horizon(processes: &[Process]) -> Option<i64> {
    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time)
        .filter(|&a| a >= 0)
        .max()
        .unwrap_or(0);
    processes
        .iter()
        .map(|p| p.burst_time)
        .filter(|&b| b > 0)
        .try_fold(latest_arrival, i64::checked_add)
}
