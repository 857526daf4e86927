//! Point-to-point query answers.

use std::fmt;

use fg_core::{Dist, VertexId};
use fg_solver::Distance;
use serde::{Serialize, Serializer};

/// Answer to "how far is it from A to B", with display names attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryAnswer {
    pub source: VertexId,
    pub source_name: String,
    pub dest: VertexId,
    pub dest_name: String,
    /// `null` in serialized form when unreachable.
    #[serde(serialize_with = "serialize_distance")]
    pub distance: Distance,
}

fn serialize_distance<S: Serializer>(distance: &Distance, s: S) -> Result<S::Ok, S::Error> {
    let finite: Option<Dist> = distance.finite();
    finite.serialize(s)
}

impl fmt::Display for QueryAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.distance {
            Distance::Finite(d) => write!(
                f,
                "Shortest distance between {} and {}: {}",
                self.source_name, self.dest_name, d
            ),
            Distance::Unreachable => write!(
                f,
                "No valid path between {} and {}.",
                self.source_name, self.dest_name
            ),
        }
    }
}
