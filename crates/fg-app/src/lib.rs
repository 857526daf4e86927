//! Shared application layer for floydgrid.
//!
//! This crate is the collaborator between front ends and the core: it
//! loads a workspace, keeps a solved distance matrix in step with the graph
//! through a mutate, re-solve, notify cycle, persists edits to the record
//! files, and answers point queries with display names.

pub mod config;
pub mod error;
pub mod query;
pub mod session;

// Re-export key types for convenience
pub use config::{CONFIG_FILE_NAME, WorkspaceConfig, load_config, resolve_config};
pub use error::{AppError, AppResult};
pub use query::QueryAnswer;
pub use session::{Session, SessionEvent, SessionSummary};
