use core::fmt;
use core::num::NonZeroU32;
use core::str::FromStr;

use crate::FgError;

/// Stable vertex identifier.
///
/// Ids are 1-based and assigned as `1 + vertex count` at creation, so the
/// first vertex is `1`. They are never reused.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<VertexId>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VertexId(NonZeroU32);

impl VertexId {
    /// Wrap a raw 1-based id. Returns `None` for zero.
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    /// The id a vertex receives when `count` vertices already exist.
    pub fn next_after(count: usize) -> Option<Self> {
        u32::try_from(count)
            .ok()
            .and_then(|c| c.checked_add(1))
            .and_then(Self::new)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.get())
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl FromStr for VertexId {
    type Err = FgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| FgError::invalid(format!("'{s}' is not a vertex id")))
    }
}
