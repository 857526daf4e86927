//! Seeding a `GraphModel` from record streams.

use std::collections::HashMap;

use fg_core::VertexId;
use fg_graph::GraphModel;

use crate::types::{
    EdgeRecord, LoadReport, Numbered, RecordSource, RecordWarning, VertexRecord, WarningKind,
};

/// Build a model from parsed vertex and edge records.
///
/// Vertex records are applied in file order and receive the model's next
/// id. The id written in the file is only a label: edge records are
/// resolved through it, so a skipped vertex row drops itself and the edges
/// that touch it, nothing more. Bad rows are reported and loading carries on.
pub fn seed_model(
    vertices: &[Numbered<VertexRecord>],
    edges: &[Numbered<EdgeRecord>],
) -> (GraphModel, LoadReport) {
    let mut model = GraphModel::new();
    let mut report = LoadReport::default();
    let mut labels: HashMap<u32, VertexId> = HashMap::new();

    for Numbered { line, record } in vertices {
        if labels.contains_key(&record.id) {
            let kind = WarningKind::DuplicateId { id: record.id };
            push_warning(&mut report, RecordSource::Vertices, *line, kind);
            continue;
        }
        match model.add_vertex(&record.name) {
            Ok(id) => {
                if id.get() != record.id {
                    report.renumbered += 1;
                }
                labels.insert(record.id, id);
                report.vertices_loaded += 1;
            }
            Err(_) => {
                let kind = WarningKind::BlankName { id: record.id };
                push_warning(&mut report, RecordSource::Vertices, *line, kind);
            }
        }
    }

    for Numbered { line, record } in edges {
        let added = edge_endpoints(&labels, record).and_then(|(a, b)| {
            model
                .add_edge(a, b, record.weight)
                .map_err(|e| WarningKind::Malformed {
                    reason: e.to_string(),
                })
        });
        match added {
            Ok(()) => report.edges_loaded += 1,
            Err(kind) => push_warning(&mut report, RecordSource::Edges, *line, kind),
        }
    }

    if report.renumbered > 0 {
        tracing::warn!(
            renumbered = report.renumbered,
            "vertex ids differ from the record file; saving will rewrite it"
        );
    }

    (model, report)
}

fn edge_endpoints(
    labels: &HashMap<u32, VertexId>,
    record: &EdgeRecord,
) -> Result<(VertexId, VertexId), WarningKind> {
    let resolve = |raw: u32| {
        labels
            .get(&raw)
            .copied()
            .ok_or(WarningKind::UnknownVertex { id: raw })
    };
    let a = resolve(record.source)?;
    let b = resolve(record.dest)?;
    if a == b {
        return Err(WarningKind::SelfLoop { id: record.source });
    }
    Ok((a, b))
}

fn push_warning(report: &mut LoadReport, source: RecordSource, line: usize, kind: WarningKind) {
    let warning = RecordWarning { source, line, kind };
    tracing::warn!("skipping {}", warning);
    report.warnings.push(warning);
}
