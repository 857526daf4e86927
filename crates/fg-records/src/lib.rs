//! fg-records: the flat vertex-name and edge record files.
//!
//! The vertex file holds `<id> <name>` lines and the edge file holds
//! `<sourceId> <weight> <destId>` lines. Loading is lenient: a bad row is
//! skipped and reported, never fatal.

pub mod matrix;
pub mod parse;
pub mod seed;
pub mod store;
pub mod types;

pub use matrix::parse_adjacency_matrix;
pub use parse::{format_edge_record, format_vertex_record, parse_edge_records, parse_vertex_records};
pub use seed::seed_model;
pub use store::RecordStore;
pub use types::*;

pub type RecordsResult<T> = Result<T, RecordsError>;

#[derive(thiserror::Error, Debug)]
pub enum RecordsError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("Matrix input error: {0}")]
    Matrix(String),

    #[error("Graph error: {0}")]
    Graph(#[from] fg_core::FgError),
}
