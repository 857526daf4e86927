use thiserror::Error;

pub type FgResult<T> = Result<T, FgError>;

/// Failures a graph operation can report back to its caller.
///
/// None of these are fatal: the operation that produced one has been
/// rejected and prior state is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FgError {
    #[error("Invalid input: {what}")]
    InvalidInput { what: String },

    #[error("Not found: {what}")]
    NotFound { what: String },

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },
}

impl FgError {
    pub fn invalid(what: impl Into<String>) -> Self {
        FgError::InvalidInput { what: what.into() }
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        FgError::NotFound { what: what.into() }
    }
}
