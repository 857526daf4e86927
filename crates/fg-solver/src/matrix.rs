//! Solved distance matrix and query results.

use std::fmt;

use fg_core::{Dist, INF_DIST, VertexId};
use nalgebra::DMatrix;

use crate::error::{SolverError, SolverResult};

/// Result of a point-to-point query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    /// Length of the shortest path.
    Finite(Dist),
    /// No path exists under the edges present at solve time.
    Unreachable,
}

impl Distance {
    pub(crate) fn from_raw(raw: Dist) -> Self {
        if raw == INF_DIST {
            Distance::Unreachable
        } else {
            Distance::Finite(raw)
        }
    }

    pub fn finite(self) -> Option<Dist> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Unreachable => None,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Square `V × V` matrix of shortest distances, indexed by vertex position.
///
/// Carries the ids of the vertices that were present at solve time so rows
/// can be labelled without going back to the (possibly since mutated) model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    pub(crate) ids: Vec<VertexId>,
    pub(crate) dist: DMatrix<Dist>,
}

impl DistanceMatrix {
    /// Matrix with zero diagonal and every other entry unreachable.
    pub(crate) fn disconnected(ids: Vec<VertexId>) -> Self {
        let n = ids.len();
        let mut dist = DMatrix::from_element(n, n, INF_DIST);
        dist.fill_diagonal(0);
        Self { ids, dist }
    }

    /// Number of vertices (rows) in the matrix.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids of the solved vertices, in position order.
    pub fn ids(&self) -> &[VertexId] {
        &self.ids
    }

    /// Id of the vertex at `position` when the matrix was solved.
    pub fn id_at(&self, position: usize) -> SolverResult<VertexId> {
        self.check(position)?;
        Ok(self.ids[position])
    }

    /// Look up the distance between two positions.
    pub fn get(&self, a: usize, b: usize) -> SolverResult<Distance> {
        self.check(a)?;
        self.check(b)?;
        Ok(Distance::from_raw(self.dist[(a, b)]))
    }

    /// Raw stored value, with `INF_DIST` for unreachable pairs.
    pub fn raw(&self, a: usize, b: usize) -> SolverResult<Dist> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.dist[(a, b)])
    }

    /// Every row, in position order.
    pub fn rows(&self) -> Vec<Vec<Distance>> {
        (0..self.len())
            .map(|a| {
                self.dist
                    .row(a)
                    .iter()
                    .map(|&raw| Distance::from_raw(raw))
                    .collect()
            })
            .collect()
    }

    pub fn is_symmetric(&self) -> bool {
        self.dist == self.dist.transpose()
    }

    fn check(&self, position: usize) -> SolverResult<()> {
        if position < self.len() {
            Ok(())
        } else {
            Err(SolverError::PositionOutOfRange {
                position,
                len: self.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: u32) -> Vec<VertexId> {
        (1..=n).map(|i| VertexId::new(i).unwrap()).collect()
    }

    #[test]
    fn disconnected_matrix_shape() {
        let m = DistanceMatrix::disconnected(ids(3));
        assert_eq!(m.len(), 3);
        assert_eq!(m.get(1, 1).unwrap(), Distance::Finite(0));
        assert_eq!(m.get(0, 2).unwrap(), Distance::Unreachable);
        assert_eq!(m.raw(2, 0).unwrap(), INF_DIST);
        assert!(m.is_symmetric());
        assert_eq!(
            m.rows()[0],
            vec![Distance::Finite(0), Distance::Unreachable, Distance::Unreachable]
        );
    }

    #[test]
    fn out_of_range_positions() {
        let m = DistanceMatrix::disconnected(ids(2));
        assert_eq!(
            m.get(0, 2),
            Err(SolverError::PositionOutOfRange {
                position: 2,
                len: 2
            })
        );
        assert!(m.raw(5, 0).is_err());
        assert!(m.id_at(2).is_err());
    }

    #[test]
    fn distance_display() {
        assert_eq!(Distance::Finite(12).to_string(), "12");
        assert_eq!(Distance::Unreachable.to_string(), "unreachable");
        assert!(Distance::Finite(1) < Distance::Unreachable);
    }
}
