//! Graph-specific error types.

use fg_core::{FgError, VertexId};

/// Reasons a graph mutation or lookup is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex name is empty after trimming.
    BlankName,

    /// A vertex name would break the one-record-per-line file format.
    MultilineName,

    /// An id does not reference an existing vertex.
    UnknownVertex { id: VertexId },

    /// Both endpoints of an edge are the same vertex.
    SelfLoop { id: VertexId },

    /// A position is outside `0..vertex_count`.
    PositionOutOfRange { position: usize, len: usize },

    /// No further ids can be assigned.
    IdSpaceExhausted,
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::BlankName => write!(f, "vertex name must not be blank"),
            GraphError::MultilineName => {
                write!(f, "vertex name must not contain line breaks")
            }
            GraphError::UnknownVertex { id } => write!(f, "vertex {} does not exist", id),
            GraphError::SelfLoop { id } => {
                write!(f, "edge endpoints must differ (both are vertex {})", id)
            }
            GraphError::PositionOutOfRange { position, len } => {
                write!(f, "position {} outside 0..{}", position, len)
            }
            GraphError::IdSpaceExhausted => write!(f, "vertex id space exhausted"),
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for FgError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::UnknownVertex { .. } => FgError::not_found(err.to_string()),
            GraphError::PositionOutOfRange { position, len } => FgError::IndexOob {
                what: "vertex position",
                index: position,
                len,
            },
            GraphError::BlankName
            | GraphError::MultilineName
            | GraphError::SelfLoop { .. }
            | GraphError::IdSpaceExhausted => FgError::invalid(err.to_string()),
        }
    }
}
