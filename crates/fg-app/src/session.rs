//! Interactive editing session.

use fg_core::{VertexId, Weight};
use fg_graph::GraphModel;
use fg_records::{LoadReport, RecordStore};
use fg_solver::DistanceMatrix;

use crate::config::WorkspaceConfig;
use crate::error::AppResult;
use crate::query::QueryAnswer;

/// What changed in a session. Sent to listeners after the matrix has been
/// brought up to date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    VertexAdded {
        id: VertexId,
        name: String,
    },
    EdgeAdded {
        a: VertexId,
        b: VertexId,
        weight: Weight,
    },
    VertexRenamed {
        id: VertexId,
        old_name: String,
        new_name: String,
    },
}

/// Sizes of the current graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub vertices: usize,
    pub edges: usize,
}

type Listener = Box<dyn FnMut(&SessionEvent)>;

/// A graph plus its solved distance matrix, kept in step.
///
/// Every mutation validates through the model, writes the change to the
/// record files when a store is attached, re-solves, and then notifies
/// listeners. A mutation that fails at any step leaves the session as it
/// was, so the matrix is never stale.
pub struct Session {
    model: GraphModel,
    matrix: DistanceMatrix,
    store: Option<RecordStore>,
    listeners: Vec<Listener>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("model", &self.model)
            .field("store", &self.store)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Start an in-memory session over an existing model.
    pub fn new(model: GraphModel) -> Self {
        let matrix = fg_solver::solve(&model);
        Self {
            model,
            matrix,
            store: None,
            listeners: Vec::new(),
        }
    }

    /// Load the record files named by `config` and solve.
    ///
    /// Bad rows are skipped; they are listed in the returned report.
    pub fn open(config: &WorkspaceConfig) -> AppResult<(Self, LoadReport)> {
        let store = RecordStore::new(&config.vertex_file, &config.edge_file);
        let (model, report) = store.load()?;
        let mut session = Self::new(model);
        if config.persist {
            session.store = Some(store);
        }
        tracing::info!(
            vertices = report.vertices_loaded,
            edges = report.edges_loaded,
            skipped = report.warnings.len(),
            "session opened"
        );
        Ok((session, report))
    }

    /// Register a callback for every successful mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&SessionEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn model(&self) -> &GraphModel {
        &self.model
    }

    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    pub fn store(&self) -> Option<&RecordStore> {
        self.store.as_ref()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            vertices: self.model.vertex_count(),
            edges: self.model.edge_count(),
        }
    }

    pub fn add_vertex(&mut self, name: &str) -> AppResult<VertexId> {
        let before = self.model.clone();
        let id = self.model.add_vertex(name)?;
        let name = self.model.vertex_name(id)?.to_string();

        self.persist(before)?;

        tracing::info!(%id, %name, "vertex added");
        self.commit(SessionEvent::VertexAdded { id, name });
        Ok(id)
    }

    pub fn add_edge(&mut self, a: VertexId, b: VertexId, weight: Weight) -> AppResult<()> {
        let before = self.model.clone();
        self.model.add_edge(a, b, weight)?;

        self.persist(before)?;

        tracing::info!(%a, %b, weight, "edge added");
        self.commit(SessionEvent::EdgeAdded { a, b, weight });
        Ok(())
    }

    pub fn rename_vertex(&mut self, id: VertexId, new_name: &str) -> AppResult<()> {
        let before = self.model.clone();
        let old_name = self.model.vertex_name(id)?.to_string();
        self.model.rename_vertex(id, new_name)?;
        let new_name = self.model.vertex_name(id)?.to_string();
        self.persist(before)?;

        tracing::info!(%id, %old_name, %new_name, "vertex renamed");
        // Names never enter the matrix, so there is nothing to re-solve.
        self.notify(&SessionEvent::VertexRenamed {
            id,
            old_name,
            new_name,
        });
        Ok(())
    }

    /// Distance between two matrix positions, with both names.
    pub fn query(&self, a: usize, b: usize) -> AppResult<QueryAnswer> {
        let distance = fg_solver::distance(&self.matrix, a, b)?;
        let source = self.matrix.id_at(a)?;
        let dest = self.matrix.id_at(b)?;
        Ok(QueryAnswer {
            source,
            source_name: self.model.vertex_name(source)?.to_string(),
            dest,
            dest_name: self.model.vertex_name(dest)?.to_string(),
            distance,
        })
    }

    /// Distance between two vertex ids, with both names.
    pub fn query_ids(&self, a: VertexId, b: VertexId) -> AppResult<QueryAnswer> {
        let a = self.model.position_of(a)?;
        let b = self.model.position_of(b)?;
        self.query(a, b)
    }

    /// Write the whole model back to the record files, restoring `before`
    /// if that fails. The files are regenerated rather than patched so they
    /// always reload into exactly this model.
    fn persist(&mut self, before: GraphModel) -> AppResult<()> {
        let Some(store) = &self.store else {
            return Ok(());
        };
        if let Err(e) = store.save_model(&self.model) {
            self.model = before;
            return Err(e.into());
        }
        Ok(())
    }

    fn commit(&mut self, event: SessionEvent) {
        self.matrix = fg_solver::solve(&self.model);
        self.notify(&event);
    }

    fn notify(&mut self, event: &SessionEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}
