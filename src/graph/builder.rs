use super::{Edge, EdgeStyle, Graph, Layout, Node, NodeIdentity, NodeShape, RankDir};
use crate::types::FileRecord;
use serde::Serialize;
use std::collections::HashMap;

const COMMENT: &str = "Comprehensive UML Diagram";

const LAYOUT: Layout = Layout {
    rank_dir: RankDir::TopToBottom,
    size: (12, 12),
};

/// A type name declared again after it already had a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateDeclaration {
    pub name: String,
    /// File whose node was overwritten
    pub previous_path: String,
    /// File whose declaration won
    pub path: String,
}

/// Result of building the dependency graph.
#[derive(Debug)]
pub struct GraphBuild {
    pub graph: Graph,
    /// Records in scan order
    pub records: Vec<FileRecord>,
    pub duplicates: Vec<DuplicateDeclaration>,
}

/// Accumulates [`FileRecord`]s into the dependency graph.
///
/// Type nodes are added as records arrive; import edges are added by
/// [`finish`](GraphBuilder::finish) once every record is known.
pub struct GraphBuilder {
    identity: NodeIdentity,
    graph: Graph,
    records: Vec<FileRecord>,
    declared_in: HashMap<String, String>,
    duplicates: Vec<DuplicateDeclaration>,
}

impl GraphBuilder {
    pub fn new(identity: NodeIdentity) -> Self {
        Self {
            identity,
            graph: Graph::new(COMMENT, LAYOUT),
            records: Vec::new(),
            declared_in: HashMap::new(),
            duplicates: Vec::new(),
        }
    }

    pub fn add_record(&mut self, record: FileRecord) {
        for name in &record.declared_types {
            let id = match self.identity {
                NodeIdentity::Name => name.clone(),
                NodeIdentity::Qualified => format!("{}::{}", record.path, name),
            };
            let label = format!("{}\\n{}", name, record.path);
            let node = Node::new(id.clone(), label).with_shape(NodeShape::Box);

            self.graph.add_node(node);
            let previous_path = self.declared_in.insert(id, record.path.clone());

            // merged declarations within one file are not duplicates
            if let Some(previous_path) = previous_path.filter(|p| *p != record.path) {
                tracing::warn!(
                    name = %name,
                    previous = %previous_path,
                    current = %record.path,
                    "type declared more than once, keeping the later declaration"
                );
                self.duplicates.push(DuplicateDeclaration {
                    name: name.clone(),
                    previous_path,
                    path: record.path.clone(),
                });
            }
        }

        self.records.push(record);
    }

    pub fn finish(mut self) -> GraphBuild {
        for record in &self.records {
            for import in &record.imports {
                self.graph.add_edge(
                    Edge::new(import.symbol.clone(), import.module_path.clone())
                        .with_style(EdgeStyle::Dashed),
                );
            }
        }

        tracing::info!(
            files = self.records.len(),
            nodes = self.graph.nodes().len(),
            edges = self.graph.edges().len(),
            duplicates = self.duplicates.len(),
            "built dependency graph"
        );

        GraphBuild {
            graph: self.graph,
            records: self.records,
            duplicates: self.duplicates,
        }
    }

    /// Build a graph from records already in memory.
    pub fn from_records(
        identity: NodeIdentity,
        records: impl IntoIterator<Item = FileRecord>,
    ) -> GraphBuild {
        let mut builder = Self::new(identity);
        for record in records {
            builder.add_record(record);
        }
        builder.finish()
    }
}
