//! Floyd–Warshall relaxation.

use fg_core::timing::Timer;
use fg_core::{Dist, path_sum};
use fg_graph::GraphModel;

use crate::error::SolverResult;
use crate::matrix::{Distance, DistanceMatrix};

/// Which pairs the relaxation visits for each intermediate vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RelaxationForm {
    /// Visit only `j < i` and mirror each improvement into `(j, i)`.
    #[default]
    Triangle,
    /// Visit every `(i, j)` pair.
    Full,
}

/// Solver configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveOptions {
    pub form: RelaxationForm,
}

/// Build the direct-distance matrix for the model's current edges.
///
/// The diagonal is zero, each joined pair holds its cheapest edge weight,
/// and everything else is unreachable.
pub fn direct_matrix(model: &GraphModel) -> DistanceMatrix {
    let ids = model.vertices().iter().map(|v| v.id).collect();
    let mut matrix = DistanceMatrix::disconnected(ids);

    for edge in model.edges() {
        // Endpoints were validated on insert and vertices are never removed.
        let (Ok(i), Ok(j)) = (model.position_of(edge.a), model.position_of(edge.b)) else {
            continue;
        };
        let w = Dist::from(edge.weight);
        if w < matrix.dist[(i, j)] {
            matrix.dist[(i, j)] = w;
            matrix.dist[(j, i)] = w;
        }
    }

    matrix
}

/// Compute all-pairs shortest distances with the default options.
pub fn solve(model: &GraphModel) -> DistanceMatrix {
    solve_with(model, SolveOptions::default())
}

/// Compute all-pairs shortest distances.
///
/// Runs in `O(V^3)` time and `O(V^2)` space. The model is only read.
pub fn solve_with(model: &GraphModel, options: SolveOptions) -> DistanceMatrix {
    let timer = Timer::start("solve");
    let mut matrix = direct_matrix(model);
    let n = matrix.len();
    tracing::trace!(vertices = n, edges = model.edge_count(), form = ?options.form, "relaxing");

    match options.form {
        RelaxationForm::Triangle => relax_triangle(&mut matrix, n),
        RelaxationForm::Full => relax_full(&mut matrix, n),
    }

    timer.stop_and_log(n);
    matrix
}

fn relax_triangle(matrix: &mut DistanceMatrix, n: usize) {
    let d = &mut matrix.dist;
    for k in 0..n {
        for i in 1..n {
            for j in 0..i {
                if let Some(through_k) = path_sum(d[(i, k)], d[(k, j)]) {
                    if through_k < d[(i, j)] {
                        d[(i, j)] = through_k;
                        d[(j, i)] = through_k;
                    }
                }
            }
        }
    }
}

fn relax_full(matrix: &mut DistanceMatrix, n: usize) {
    let d = &mut matrix.dist;
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let Some(through_k) = path_sum(d[(i, k)], d[(k, j)]) {
                    if through_k < d[(i, j)] {
                        d[(i, j)] = through_k;
                    }
                }
            }
        }
    }
}

/// Look up the shortest distance between two positions of a solved matrix.
pub fn distance(matrix: &DistanceMatrix, a: usize, b: usize) -> SolverResult<Distance> {
    matrix.get(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fg_core::{INF_DIST, VertexId};

    fn path_graph(weights: &[u32]) -> (GraphModel, Vec<VertexId>) {
        let mut g = GraphModel::new();
        let ids: Vec<VertexId> = (0..=weights.len())
            .map(|i| g.add_vertex(&format!("v{}", i + 1)).unwrap())
            .collect();
        for (i, &w) in weights.iter().enumerate() {
            g.add_edge(ids[i], ids[i + 1], w).unwrap();
        }
        (g, ids)
    }

    #[test]
    fn direct_matrix_keeps_cheapest_parallel_edge() {
        let mut g = GraphModel::new();
        let a = g.add_vertex("A").unwrap();
        let b = g.add_vertex("B").unwrap();
        g.add_edge(a, b, 8).unwrap();
        g.add_edge(b, a, 2).unwrap();
        g.add_edge(a, b, 5).unwrap();

        let direct = direct_matrix(&g);
        assert_eq!(direct.raw(0, 1).unwrap(), 2);
        assert_eq!(direct.raw(1, 0).unwrap(), 2);
    }

    #[test]
    fn empty_graph_solves_to_empty_matrix() {
        let m = solve(&GraphModel::new());
        assert!(m.is_empty());
        assert!(distance(&m, 0, 0).is_err());
    }

    #[test]
    fn chain_distances_accumulate() {
        let (g, _) = path_graph(&[5, 3, 2]);
        let m = solve(&g);
        assert_eq!(distance(&m, 0, 3).unwrap(), Distance::Finite(10));
        assert_eq!(distance(&m, 3, 1).unwrap(), Distance::Finite(5));
    }

    #[test]
    fn forms_agree() {
        let mut g = GraphModel::new();
        let ids: Vec<VertexId> = (0..5)
            .map(|i| g.add_vertex(&i.to_string()).unwrap())
            .collect();
        g.add_edge(ids[0], ids[1], 7).unwrap();
        g.add_edge(ids[1], ids[2], 1).unwrap();
        g.add_edge(ids[0], ids[2], 10).unwrap();
        g.add_edge(ids[2], ids[3], 4).unwrap();

        let tri = solve_with(
            &g,
            SolveOptions {
                form: RelaxationForm::Triangle,
            },
        );
        let full = solve_with(
            &g,
            SolveOptions {
                form: RelaxationForm::Full,
            },
        );
        assert_eq!(tri, full);
        assert_eq!(tri.raw(0, 2).unwrap(), 8);
        assert_eq!(tri.raw(4, 0).unwrap(), INF_DIST);
    }

    #[test]
    fn huge_weights_do_not_overflow() {
        let max = u32::MAX;
        let (g, _) = path_graph(&[max, max, max]);
        let m = solve(&g);
        assert_eq!(m.raw(0, 3).unwrap(), 3 * u64::from(max));
    }

    #[test]
    fn zero_weight_edges() {
        let (g, _) = path_graph(&[0, 0]);
        let m = solve(&g);
        assert_eq!(distance(&m, 0, 2).unwrap(), Distance::Finite(0));
    }
}
