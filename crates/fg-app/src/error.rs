//! Error types for the fg-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and gives front ends a single error to report.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Graph(#[from] fg_core::FgError),

    #[error("Query error: {0}")]
    Solver(#[from] fg_solver::SolverError),

    #[error("Record file error: {0}")]
    Records(String),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },
}

/// Result type for fg-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<fg_records::RecordsError> for AppError {
    fn from(err: fg_records::RecordsError) -> Self {
        match err {
            fg_records::RecordsError::Graph(e) => AppError::Graph(e),
            other => AppError::Records(other.to_string()),
        }
    }
}
