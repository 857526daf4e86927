//! fg-core: stable foundation for floydgrid.
//!
//! Contains:
//! - ids (stable 1-based vertex identifiers)
//! - numeric (edge weights, path distances, the unreachable sentinel)
//! - error (shared error taxonomy)
//! - timing (solve timing)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod timing;

// Re-exports: nice ergonomics for downstream crates
pub use error::{FgError, FgResult};
pub use ids::*;
pub use numeric::*;
