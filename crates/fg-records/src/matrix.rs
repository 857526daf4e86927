//! Dense adjacency-matrix input.
//!
//! The format is a vertex count `n` followed by `n * n` integers in row
//! order, where `-1` means "no edge". Tokens may be split across lines
//! freely. Vertices are named `1..=n`.

use fg_core::{VertexId, Weight};
use fg_graph::GraphModel;

use crate::{RecordsError, RecordsResult};

const NO_EDGE: i64 = -1;

/// Build a model from a dense adjacency matrix.
///
/// Each off-diagonal entry other than `-1` becomes an undirected edge, so
/// an asymmetric matrix ends up with the cheaper of its two entries for a
/// pair once solved. Diagonal entries are ignored.
pub fn parse_adjacency_matrix(text: &str) -> RecordsResult<GraphModel> {
    let mut tokens = text.split_whitespace();
    let n: usize = tokens
        .next()
        .ok_or_else(|| RecordsError::Matrix("empty input".to_string()))?
        .parse()
        .map_err(|_| RecordsError::Matrix("vertex count is not a number".to_string()))?;

    let entries: Vec<&str> = tokens.collect();
    let expected = n
        .checked_mul(n)
        .ok_or_else(|| RecordsError::Matrix(format!("vertex count {} is too large", n)))?;
    if entries.len() < expected {
        return Err(RecordsError::Matrix(format!(
            "expected {} entries, found {}",
            expected,
            entries.len()
        )));
    }
    if entries.len() > expected {
        tracing::warn!(n, "ignoring trailing tokens after {}x{} matrix", n, n);
    }

    let mut model = GraphModel::new();
    let ids: Vec<VertexId> = (1..=n)
        .map(|i| model.add_vertex(&i.to_string()))
        .collect::<Result<_, _>>()?;

    for (idx, token) in entries.iter().take(expected).enumerate() {
        let (i, j) = (idx / n, idx % n);
        let value: i64 = token.parse().map_err(|_| {
            RecordsError::Matrix(format!("entry ({}, {}) '{}' is not a number", i + 1, j + 1, token))
        })?;
        if i == j || value == NO_EDGE {
            continue;
        }
        let weight = Weight::try_from(value).map_err(|_| {
            RecordsError::Matrix(format!("entry ({}, {}) has invalid weight {}", i + 1, j + 1, value))
        })?;
        model.add_edge(ids[i], ids[j], weight)?;
    }

    Ok(model)
}
