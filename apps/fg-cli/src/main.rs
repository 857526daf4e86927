use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use fg_app::{AppError, AppResult, Session, WorkspaceConfig, resolve_config};
use fg_core::{VertexId, Weight, parse_weight};
use fg_graph::GraphModel;
use fg_records::LoadReport;
use fg_solver::{Distance, DistanceMatrix};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fg-cli")]
#[command(about = "floydgrid - all-pairs shortest distances over a named graph", long_about = None)]
struct Cli {
    /// Workspace config file (defaults to ./floydgrid.yaml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Vertex-name record file (overrides the config)
    #[arg(long, global = true)]
    vertices: Option<PathBuf>,
    /// Edge record file (overrides the config)
    #[arg(long, global = true)]
    edges: Option<PathBuf>,
    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List vertices in insertion order
    Vertices,
    /// List edges in insertion order
    Edges,
    /// Print the full shortest-distance matrix
    Matrix,
    /// Shortest distance between two vertices
    Query {
        /// Source vertex id
        from: VertexId,
        /// Destination vertex id
        to: VertexId,
    },
    /// Add a vertex and print its id
    AddVertex {
        /// Display name; quote it to keep spaces
        name: String,
    },
    /// Add an undirected edge: <a> <weight> <b>
    AddEdge {
        a: VertexId,
        /// Non-negative integer weight
        #[arg(allow_hyphen_values = true)]
        weight: String,
        b: VertexId,
    },
    /// Rename a vertex
    Rename {
        id: VertexId,
        /// New display name; quote it to keep spaces
        name: String,
    },
    /// Solve a dense adjacency-matrix file (-1 = no edge)
    SolveMatrix {
        /// Path to the matrix file
        path: PathBuf,
    },
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = Output { json: cli.json };

    if let Commands::SolveMatrix { path } = &cli.command {
        return cmd_solve_matrix(path, output);
    }

    let config = workspace_config(&cli)?;
    let (mut session, report) = Session::open(&config)?;
    report_warnings(&report);

    match cli.command {
        Commands::Vertices => cmd_vertices(&session, output),
        Commands::Edges => cmd_edges(&session, output),
        Commands::Matrix => cmd_matrix(session.model(), session.matrix(), output),
        Commands::Query { from, to } => cmd_query(&session, from, to, output),
        Commands::AddVertex { name } => {
            let id = session.add_vertex(&name)?;
            output.emit(&id, || format!("✓ Added vertex {}", id));
            Ok(())
        }
        Commands::AddEdge { a, weight, b } => {
            let weight = parse_weight(&weight)?;
            session.add_edge(a, b, weight)?;
            output.emit(&(a, weight, b), || {
                format!("✓ Added edge {} -({})- {}", a, weight, b)
            });
            Ok(())
        }
        Commands::Rename { id, name } => {
            session.rename_vertex(id, &name)?;
            let new_name = session.model().vertex_name(id)?;
            output.emit(&(id, new_name), || format!("✓ Renamed {} to {}", id, new_name));
            Ok(())
        }
        Commands::SolveMatrix { .. } => Ok(()),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn workspace_config(cli: &Cli) -> AppResult<WorkspaceConfig> {
    let cwd = std::env::current_dir().map_err(|e| AppError::ConfigRead {
        path: PathBuf::from("."),
        source: e,
    })?;
    let mut config = resolve_config(cli.config.as_deref(), &cwd)?;
    if let Some(path) = &cli.vertices {
        config.vertex_file = path.clone();
    }
    if let Some(path) = &cli.edges {
        config.edge_file = path.clone();
    }
    tracing::debug!(
        vertex_file = %config.vertex_file.display(),
        edge_file = %config.edge_file.display(),
        persist = config.persist,
        "workspace"
    );
    Ok(config)
}

fn report_warnings(report: &LoadReport) {
    for warning in &report.warnings {
        eprintln!("warning: skipped {}", warning);
    }
    if report.renumbered > 0 {
        eprintln!(
            "warning: {} vertices were renumbered; the next edit rewrites the record files",
            report.renumbered
        );
    }
}

#[derive(Clone, Copy)]
struct Output {
    json: bool,
}

impl Output {
    fn emit<T: Serialize>(self, value: &T, text: impl FnOnce() -> String) {
        if self.json {
            match serde_json::to_string_pretty(value) {
                Ok(s) => println!("{}", s),
                Err(e) => eprintln!("error: failed to encode JSON: {}", e),
            }
        } else {
            println!("{}", text());
        }
    }
}

#[derive(Serialize)]
struct VertexRow<'a> {
    position: usize,
    id: VertexId,
    name: &'a str,
}

fn cmd_vertices(session: &Session, output: Output) -> AppResult<()> {
    let rows: Vec<VertexRow> = session
        .model()
        .vertices()
        .iter()
        .enumerate()
        .map(|(position, v)| VertexRow {
            position,
            id: v.id,
            name: &v.name,
        })
        .collect();

    output.emit(&rows, || {
        if rows.is_empty() {
            return "No vertices".to_string();
        }
        let summary = session.summary();
        let mut lines: Vec<String> = rows
            .iter()
            .map(|r| format!("  {:>4}  {}", r.id, r.name))
            .collect();
        lines.push(format!("{} vertices, {} edges", summary.vertices, summary.edges));
        lines.join("\n")
    });
    Ok(())
}

#[derive(Serialize)]
struct EdgeRow<'a> {
    source: VertexId,
    source_name: &'a str,
    weight: Weight,
    dest: VertexId,
    dest_name: &'a str,
}

fn cmd_edges(session: &Session, output: Output) -> AppResult<()> {
    let model = session.model();
    let mut rows = Vec::with_capacity(model.edge_count());
    for e in model.edges() {
        rows.push(EdgeRow {
            source: e.a,
            source_name: model.vertex_name(e.a)?,
            weight: e.weight,
            dest: e.b,
            dest_name: model.vertex_name(e.b)?,
        });
    }

    output.emit(&rows, || {
        if rows.is_empty() {
            return "No edges".to_string();
        }
        rows.iter()
            .map(|r| format!("  {} -({})- {}", r.source_name, r.weight, r.dest_name))
            .collect::<Vec<_>>()
            .join("\n")
    });
    Ok(())
}

#[derive(Serialize)]
struct MatrixDump {
    ids: Vec<VertexId>,
    names: Vec<String>,
    /// `null` marks unreachable pairs.
    distances: Vec<Vec<Option<u64>>>,
}

fn cmd_matrix(model: &GraphModel, matrix: &DistanceMatrix, output: Output) -> AppResult<()> {
    let names = matrix
        .ids()
        .iter()
        .map(|&id| model.vertex_name(id).map(str::to_string))
        .collect::<Result<Vec<_>, _>>()?;
    let rows = matrix.rows();

    let dump = MatrixDump {
        ids: matrix.ids().to_vec(),
        names,
        distances: rows
            .iter()
            .map(|row| row.iter().map(|d| d.finite()).collect())
            .collect(),
    };

    output.emit(&dump, || render_matrix(&dump.names, &rows));
    Ok(())
}

fn render_matrix(names: &[String], rows: &[Vec<Distance>]) -> String {
    if names.is_empty() {
        return "Empty graph".to_string();
    }
    let cell = |d: &Distance| match d {
        Distance::Finite(v) => v.to_string(),
        Distance::Unreachable => "-".to_string(),
    };
    let width = names
        .iter()
        .map(|n| n.chars().count())
        .chain(rows.iter().flatten().map(|d| cell(d).len()))
        .max()
        .unwrap_or(1);

    let mut out = format!("{:width$}", "", width = width);
    for name in names {
        out.push_str(&format!("  {:>width$}", name, width = width));
    }
    for (name, row) in names.iter().zip(rows) {
        out.push('\n');
        out.push_str(&format!("{:width$}", name, width = width));
        for d in row {
            out.push_str(&format!("  {:>width$}", cell(d), width = width));
        }
    }
    out
}

fn cmd_query(session: &Session, from: VertexId, to: VertexId, output: Output) -> AppResult<()> {
    let answer = session.query_ids(from, to)?;
    output.emit(&answer, || answer.to_string());
    Ok(())
}

fn cmd_solve_matrix(path: &Path, output: Output) -> AppResult<()> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        AppError::Records(format!("failed to read {}: {}", path.display(), e))
    })?;
    let model = fg_records::parse_adjacency_matrix(&text)?;
    let session = Session::new(model);
    cmd_matrix(session.model(), session.matrix(), output)
}
