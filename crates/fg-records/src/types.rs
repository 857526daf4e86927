//! Record and load-report types.

use std::fmt;

use fg_core::Weight;
use serde::{Deserialize, Serialize};

/// One line of the vertex-name file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexRecord {
    pub id: u32,
    pub name: String,
}

/// One line of the edge file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: u32,
    pub weight: Weight,
    pub dest: u32,
}

/// Why a record was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WarningKind {
    /// The line does not have the expected shape.
    Malformed { reason: String },
    /// A vertex record reuses an id already seen earlier in the file.
    DuplicateId { id: u32 },
    /// A vertex record has no name.
    BlankName { id: u32 },
    /// An edge references an id with no vertex.
    UnknownVertex { id: u32 },
    /// An edge joins a vertex to itself.
    SelfLoop { id: u32 },
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::Malformed { reason } => write!(f, "malformed record: {reason}"),
            WarningKind::DuplicateId { id } => write!(f, "vertex id {id} already used"),
            WarningKind::BlankName { id } => write!(f, "vertex {id} has a blank name"),
            WarningKind::UnknownVertex { id } => write!(f, "edge references unknown vertex {id}"),
            WarningKind::SelfLoop { id } => write!(f, "edge joins vertex {id} to itself"),
        }
    }
}

/// Which record stream a warning came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordSource {
    Vertices,
    Edges,
}

/// A skipped record, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordWarning {
    pub source: RecordSource,
    pub line: usize,
    pub kind: WarningKind,
}

impl fmt::Display for RecordWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match self.source {
            RecordSource::Vertices => "vertex",
            RecordSource::Edges => "edge",
        };
        write!(f, "{} record line {}: {}", source, self.line, self.kind)
    }
}

/// Outcome of seeding a model from record streams.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub vertices_loaded: usize,
    pub edges_loaded: usize,
    /// Loaded vertices whose assigned id differs from the id in the file.
    pub renumbered: usize,
    pub warnings: Vec<RecordWarning>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// A parsed record together with the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numbered<T> {
    pub line: usize,
    pub record: T,
}
