//! Workspace configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// File looked up in the working directory when no config path is given.
pub const CONFIG_FILE_NAME: &str = "floydgrid.yaml";

/// Where a graph's record files live and whether edits are written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    pub vertex_file: PathBuf,
    pub edge_file: PathBuf,
    pub persist: bool,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            vertex_file: PathBuf::from("vertex_names.txt"),
            edge_file: PathBuf::from("input.txt"),
            persist: true,
        }
    }
}

impl WorkspaceConfig {
    /// Resolve relative record paths against `base`.
    pub fn relative_to(mut self, base: &Path) -> Self {
        if self.vertex_file.is_relative() {
            self.vertex_file = base.join(&self.vertex_file);
        }
        if self.edge_file.is_relative() {
            self.edge_file = base.join(&self.edge_file);
        }
        self
    }
}

/// Load a config from a YAML file. Record paths are taken relative to the
/// file's directory.
pub fn load_config(path: &Path) -> AppResult<WorkspaceConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: WorkspaceConfig =
        serde_yaml::from_str(&content).map_err(|e| AppError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(config.relative_to(base))
}

/// Pick the config to use: an explicit file, else `floydgrid.yaml` in
/// `dir` if present, else defaults relative to `dir`.
pub fn resolve_config(explicit: Option<&Path>, dir: &Path) -> AppResult<WorkspaceConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    let candidate = dir.join(CONFIG_FILE_NAME);
    if candidate.exists() {
        tracing::debug!(path = %candidate.display(), "using workspace config");
        load_config(&candidate)
    } else {
        Ok(WorkspaceConfig::default().relative_to(dir))
    }
}
