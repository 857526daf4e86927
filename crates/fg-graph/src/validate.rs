//! Input validation shared by the mutation operations.

use fg_core::VertexId;

use crate::error::GraphError;
use crate::graph::Vertex;

/// Normalize a proposed vertex name, rejecting blank or multi-line input.
pub(crate) fn vertex_name(raw: &str) -> Result<String, GraphError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(GraphError::BlankName);
    }
    if name.contains(['\n', '\r']) {
        return Err(GraphError::MultilineName);
    }
    Ok(name.to_string())
}

/// Check that an id references one of `vertices`.
///
/// Ids are dense (`1..=len`) because vertices are never removed.
pub(crate) fn known_vertex(vertices: &[Vertex], id: VertexId) -> Result<usize, GraphError> {
    let position = id.get() as usize - 1;
    match vertices.get(position) {
        Some(v) if v.id == id => Ok(position),
        _ => Err(GraphError::UnknownVertex { id }),
    }
}

/// Check both edge endpoints exist and differ.
pub(crate) fn edge_endpoints(
    vertices: &[Vertex],
    a: VertexId,
    b: VertexId,
) -> Result<(), GraphError> {
    known_vertex(vertices, a)?;
    known_vertex(vertices, b)?;
    if a == b {
        return Err(GraphError::SelfLoop { id: a });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vid(raw: u32) -> VertexId {
        VertexId::new(raw).unwrap()
    }

    #[test]
    fn names_are_trimmed() {
        assert_eq!(vertex_name("  New York ").unwrap(), "New York");
        assert_eq!(vertex_name(" \t "), Err(GraphError::BlankName));
        assert_eq!(vertex_name("a\nb"), Err(GraphError::MultilineName));
    }

    #[test]
    fn endpoint_checks() {
        let vertices = vec![
            Vertex {
                id: vid(1),
                name: "A".into(),
            },
            Vertex {
                id: vid(2),
                name: "B".into(),
            },
        ];
        assert!(edge_endpoints(&vertices, vid(1), vid(2)).is_ok());
        assert_eq!(
            edge_endpoints(&vertices, vid(1), vid(1)),
            Err(GraphError::SelfLoop { id: vid(1) })
        );
        assert_eq!(
            edge_endpoints(&vertices, vid(1), vid(3)),
            Err(GraphError::UnknownVertex { id: vid(3) })
        );
    }
}
