//! Line-oriented parsing and formatting of record files.

use fg_core::{Weight, parse_weight};

use crate::types::{EdgeRecord, Numbered, RecordSource, RecordWarning, VertexRecord, WarningKind};

fn malformed(source: RecordSource, line: usize, reason: impl Into<String>) -> RecordWarning {
    RecordWarning {
        source,
        line,
        kind: WarningKind::Malformed {
            reason: reason.into(),
        },
    }
}

/// Parse `<id> <name>` lines. The name is the rest of the line, trimmed.
///
/// Blank lines are ignored. Lines whose id does not parse are reported and
/// skipped; a missing name is kept as empty so seeding can report it.
pub fn parse_vertex_records(text: &str) -> (Vec<Numbered<VertexRecord>>, Vec<RecordWarning>) {
    let mut records = Vec::new();
    let mut warnings = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (id_token, rest) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));
        match id_token.parse::<u32>() {
            Ok(id) => records.push(Numbered {
                line,
                record: VertexRecord {
                    id,
                    name: rest.trim().to_string(),
                },
            }),
            Err(_) => warnings.push(malformed(
                RecordSource::Vertices,
                line,
                format!("'{id_token}' is not a vertex id"),
            )),
        }
    }

    (records, warnings)
}

/// Parse `<sourceId> <weight> <destId>` lines.
pub fn parse_edge_records(text: &str) -> (Vec<Numbered<EdgeRecord>>, Vec<RecordWarning>) {
    let mut records = Vec::new();
    let mut warnings = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        match parse_edge_tokens(&tokens) {
            Ok(record) => records.push(Numbered { line, record }),
            Err(reason) => warnings.push(malformed(RecordSource::Edges, line, reason)),
        }
    }

    (records, warnings)
}

fn parse_edge_tokens(tokens: &[&str]) -> Result<EdgeRecord, String> {
    let [source, weight, dest] = tokens else {
        return Err(format!("expected 3 fields, found {}", tokens.len()));
    };
    let source = parse_id(source)?;
    let weight: Weight = parse_weight(weight).map_err(|e| e.to_string())?;
    let dest = parse_id(dest)?;
    Ok(EdgeRecord {
        source,
        weight,
        dest,
    })
}

fn parse_id(token: &str) -> Result<u32, String> {
    token
        .parse::<u32>()
        .map_err(|_| format!("'{token}' is not a vertex id"))
}

pub fn format_vertex_record(record: &VertexRecord) -> String {
    format!("{} {}", record.id, record.name)
}

pub fn format_edge_record(record: &EdgeRecord) -> String {
    format!("{} {} {}", record.source, record.weight, record.dest)
}
