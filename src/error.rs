//! Simulation error type.

use std::fmt;

use crate::validation::ValidationError;

/// Failure of a simulation run.
///
/// No partial results are ever returned alongside an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Input was rejected before any scheduling work began.
    /// Carries every problem found, not just the first.
    Validation(Vec<ValidationError>),
    /// Averages were requested over an empty result set.
    EmptyResult,
}

impl SimulationError {
    /// Validation errors, if this is a validation failure.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            SimulationError::Validation(errors) => errors,
            SimulationError::EmptyResult => &[],
        }
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Validation(errors) => {
                write!(f, "invalid input ({} problem", errors.len())?;
                if errors.len() != 1 {
                    f.write_str("s")?;
                }
                f.write_str(")")?;
                for e in errors {
                    write!(f, "\n  - {e}")?;
                }
                Ok(())
            }
            SimulationError::EmptyResult => f.write_str("no completed processes to aggregate"),
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimulationError::Validation(errors)
    }
}
