//! Error types for solver operations.

use fg_core::error::FgError;
use thiserror::Error;

/// Errors that can occur when querying a solved matrix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("Position {position} outside matrix of size {len}")]
    PositionOutOfRange { position: usize, len: usize },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for FgError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::PositionOutOfRange { position, len } => FgError::IndexOob {
                what: "matrix position",
                index: position,
                len,
            },
        }
    }
}
