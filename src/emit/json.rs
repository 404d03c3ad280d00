use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::graph::{DuplicateDeclaration, GraphBuild, NodeIdentity};
use crate::types::FileRecord;

/// Machine-readable summary of one `analyze` run.
#[derive(Serialize)]
pub struct ScanReport<'a> {
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub project: ProjectInfo,
    pub files: &'a [FileRecord],
    pub duplicates: &'a [DuplicateDeclaration],
}

#[derive(Serialize)]
pub struct ProjectInfo {
    pub root: String,
    pub files_scanned: usize,
    pub node_identity: String,
    pub node_count: usize,
    pub edge_count: usize,
    pub duplicate_count: usize,
}

impl<'a> ScanReport<'a> {
    pub fn new(root: &Path, identity: NodeIdentity, build: &'a GraphBuild) -> Self {
        let node_identity = match identity {
            NodeIdentity::Name => "name",
            NodeIdentity::Qualified => "qualified",
        };

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            project: ProjectInfo {
                root: root.display().to_string(),
                files_scanned: build.records.len(),
                node_identity: node_identity.to_string(),
                node_count: build.graph.nodes().len(),
                edge_count: build.graph.edges().len(),
                duplicate_count: build.duplicates.len(),
            },
            files: &build.records,
            duplicates: &build.duplicates,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        crate::render::ensure_output_dir(path)?;
        fs::write(path, self.to_json()?).map_err(|e| Error::io(path, e))
    }
}
