//! All-pairs shortest distances for floydgrid graphs.
//!
//! This crate turns a `GraphModel` snapshot into a dense `DistanceMatrix`
//! using Floyd–Warshall relaxation over intermediate vertices. The engine
//! keeps no state between calls: the caller re-solves after every mutation
//! and queries the matrix it got back.

pub mod engine;
pub mod error;
pub mod matrix;

pub use engine::{RelaxationForm, SolveOptions, direct_matrix, distance, solve, solve_with};
pub use error::{SolverError, SolverResult};
pub use matrix::{Distance, DistanceMatrix};
