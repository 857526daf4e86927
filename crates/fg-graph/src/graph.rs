//! Core graph data structures.

use fg_core::{FgResult, VertexId, Weight};

use crate::error::GraphError;
use crate::validate;

/// A named vertex.
///
/// The id is stable for the vertex's lifetime; the name can change.
/// Names are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub id: VertexId,
    pub name: String,
}

/// An undirected, weighted connection between two distinct vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: VertexId,
    pub b: VertexId,
    pub weight: Weight,
}

/// The authoritative, mutable store of vertices and edges.
///
/// Vertices are kept in insertion order, so a vertex's position (its
/// zero-based insertion rank) is also its row in a distance matrix.
/// Vertices and edges are never removed, which keeps ids dense:
/// `position == id - 1`.
///
/// Every mutation validates before touching state; a rejected call leaves
/// the model exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphModel {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl GraphModel {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex and return its newly assigned id.
    pub fn add_vertex(&mut self, name: &str) -> FgResult<VertexId> {
        let name = validate::vertex_name(name)?;
        let id = VertexId::next_after(self.vertices.len()).ok_or(GraphError::IdSpaceExhausted)?;
        self.vertices.push(Vertex { id, name });
        Ok(id)
    }

    /// Change a vertex's display name. Edges and positions are untouched.
    pub fn rename_vertex(&mut self, id: VertexId, new_name: &str) -> FgResult<()> {
        let position = validate::known_vertex(&self.vertices, id)?;
        let name = validate::vertex_name(new_name)?;
        self.vertices[position].name = name;
        Ok(())
    }

    /// Record an undirected edge between two existing, distinct vertices.
    ///
    /// Parallel edges are kept; the cheapest one wins when solving.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId, weight: Weight) -> FgResult<()> {
        validate::edge_endpoints(&self.vertices, a, b)?;
        self.edges.push(Edge { a, b, weight });
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get a vertex by id (returns None if it doesn't exist).
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        validate::known_vertex(&self.vertices, id)
            .ok()
            .map(|position| &self.vertices[position])
    }

    pub fn vertex_name(&self, id: VertexId) -> FgResult<&str> {
        self.vertex(id)
            .map(|v| v.name.as_str())
            .ok_or_else(|| GraphError::UnknownVertex { id }.into())
    }

    /// Get the stable id of the vertex at a matrix position.
    pub fn id_at(&self, position: usize) -> FgResult<VertexId> {
        self.vertices
            .get(position)
            .map(|v| v.id)
            .ok_or_else(|| {
                GraphError::PositionOutOfRange {
                    position,
                    len: self.vertices.len(),
                }
                .into()
            })
    }

    /// Get the matrix position of a vertex id.
    pub fn position_of(&self, id: VertexId) -> FgResult<usize> {
        Ok(validate::known_vertex(&self.vertices, id)?)
    }
}
