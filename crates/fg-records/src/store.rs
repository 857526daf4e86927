//! File-backed record storage.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use fg_graph::GraphModel;

use crate::parse::{format_edge_record, format_vertex_record, parse_edge_records, parse_vertex_records};
use crate::seed::seed_model;
use crate::types::{EdgeRecord, LoadReport, RecordSource, RecordWarning, VertexRecord, WarningKind};
use crate::{RecordsError, RecordsResult};

/// The pair of record files backing one graph.
#[derive(Debug, Clone)]
pub struct RecordStore {
    vertex_path: PathBuf,
    edge_path: PathBuf,
}

impl RecordStore {
    pub fn new(vertex_path: impl Into<PathBuf>, edge_path: impl Into<PathBuf>) -> Self {
        Self {
            vertex_path: vertex_path.into(),
            edge_path: edge_path.into(),
        }
    }

    pub fn vertex_path(&self) -> &Path {
        &self.vertex_path
    }

    pub fn edge_path(&self) -> &Path {
        &self.edge_path
    }

    /// Read both files and seed a model. A missing file counts as empty.
    pub fn load(&self) -> RecordsResult<(GraphModel, LoadReport)> {
        let (vertex_text, mut parse_warnings) = read_lines(&self.vertex_path, RecordSource::Vertices)?;
        let (edge_text, decode_warnings) = read_lines(&self.edge_path, RecordSource::Edges)?;
        parse_warnings.extend(decode_warnings);

        let (vertices, vertex_warnings) = parse_vertex_records(&vertex_text);
        let (edges, edge_warnings) = parse_edge_records(&edge_text);
        parse_warnings.extend(vertex_warnings);
        parse_warnings.extend(edge_warnings);
        for warning in &parse_warnings {
            tracing::warn!("skipping {}", warning);
        }

        let (model, mut report) = seed_model(&vertices, &edges);
        parse_warnings.append(&mut report.warnings);
        report.warnings = parse_warnings;

        tracing::debug!(
            vertices = report.vertices_loaded,
            edges = report.edges_loaded,
            skipped = report.warnings.len(),
            "loaded records"
        );
        Ok((model, report))
    }

    /// Write both files from the model so they reload into the same graph.
    ///
    /// Each file is written to a sibling temp file first and then renamed
    /// over the existing file. Rows skipped at load time are not carried over.
    pub fn save_model(&self, model: &GraphModel) -> RecordsResult<()> {
        let mut vertex_text = String::new();
        for vertex in model.vertices() {
            let record = VertexRecord {
                id: vertex.id.get(),
                name: vertex.name.clone(),
            };
            vertex_text.push_str(&format_vertex_record(&record));
            vertex_text.push('\n');
        }

        let mut edge_text = String::new();
        for edge in model.edges() {
            let record = EdgeRecord {
                source: edge.a.get(),
                weight: edge.weight,
                dest: edge.b.get(),
            };
            edge_text.push_str(&format_edge_record(&record));
            edge_text.push('\n');
        }

        let vertex_tmp = stage(&self.vertex_path, &vertex_text)?;
        let edge_tmp = stage(&self.edge_path, &edge_text)?;
        commit(&vertex_tmp, &self.vertex_path)?;
        commit(&edge_tmp, &self.edge_path)?;

        tracing::debug!(
            vertices = model.vertex_count(),
            edges = model.edge_count(),
            "saved records"
        );
        Ok(())
    }
}

fn io_error(path: &Path, source: std::io::Error) -> RecordsError {
    RecordsError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Read a record file, decoding each line on its own.
///
/// A line that is not valid UTF-8 is reported and blanked, so the rest of
/// the file still loads and line numbers stay put.
fn read_lines(path: &Path, source: RecordSource) -> RecordsResult<(String, Vec<RecordWarning>)> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "record file missing, starting empty");
            return Ok((String::new(), Vec::new()));
        }
        Err(e) => return Err(io_error(path, e)),
    };

    let mut text = String::with_capacity(bytes.len());
    let mut warnings = Vec::new();
    for (idx, raw) in bytes.split(|&b| b == b'\n').enumerate() {
        match std::str::from_utf8(raw) {
            Ok(line) => text.push_str(line),
            Err(_) => warnings.push(RecordWarning {
                source,
                line: idx + 1,
                kind: WarningKind::Malformed {
                    reason: "line is not valid UTF-8".into(),
                },
            }),
        }
        text.push('\n');
    }
    Ok((text, warnings))
}

fn stage(path: &Path, content: &str) -> RecordsResult<PathBuf> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, content).map_err(|e| io_error(&tmp, e))?;
    Ok(tmp)
}

fn commit(tmp: &Path, path: &Path) -> RecordsResult<()> {
    fs::rename(tmp, path).map_err(|e| io_error(path, e))
}
