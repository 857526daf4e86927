//! fg-graph: graph/model layer for floydgrid.
//!
//! Provides:
//! - Vertex and edge records for an undirected, weighted, named-vertex graph
//! - A mutable `GraphModel` with validated add/rename operations
//! - Bidirectional mapping between stable ids and matrix positions
//!
//! # Example
//!
//! ```
//! use fg_graph::GraphModel;
//!
//! let mut graph = GraphModel::new();
//! let a = graph.add_vertex("Oslo").unwrap();
//! let b = graph.add_vertex("Bergen").unwrap();
//! graph.add_edge(a, b, 463).unwrap();
//!
//! assert_eq!(graph.vertex_count(), 2);
//! assert_eq!(graph.position_of(b).unwrap(), 1);
//! ```

pub mod error;
pub mod graph;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use error::GraphError;
pub use graph::{Edge, GraphModel, Vertex};
