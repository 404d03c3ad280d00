//! In-memory graph handed to the renderer.
//!
//! Nodes are kept in insertion order. Adding a node whose id already exists
//! replaces it in place, the way Graphviz merges repeated node statements.
//! Edges may name ids that no node declares; the layout engine creates those
//! implicitly.

mod builder;

pub use builder::{DuplicateDeclaration, GraphBuild, GraphBuilder};

use serde::Deserialize;
use std::collections::HashMap;

/// How declared types map to node ids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeIdentity {
    /// Bare type name; a later declaration overwrites an earlier one
    #[default]
    Name,
    /// `<relative path>::<type name>`; every declaration keeps its own node
    Qualified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankDir {
    TopToBottom,
}

impl RankDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankDir::TopToBottom => "TB",
        }
    }
}

/// Graph-level layout hints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub rank_dir: RankDir,
    /// Page size hint in inches, `(width, height)`
    pub size: (u32, u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    Box,
    Record,
}

impl NodeShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeShape::Box => "box",
            NodeShape::Record => "record",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeStyle {
    Dashed,
}

impl EdgeStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeStyle::Dashed => "dashed",
        }
    }
}

/// Attributes applied to every node unless overridden.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDefaults {
    pub shape: NodeShape,
    /// Sets `style=filled` together with the colour
    pub fill_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub shape: Option<NodeShape>,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            shape: None,
        }
    }

    pub fn with_shape(mut self, shape: NodeShape) -> Self {
        self.shape = Some(shape);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub label: Option<String>,
    pub style: Option<EdgeStyle>,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: None,
            style: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_style(mut self, style: EdgeStyle) -> Self {
        self.style = Some(style);
        self
    }
}

#[derive(Debug, Clone)]
pub struct Graph {
    pub comment: String,
    pub layout: Layout,
    pub node_defaults: Option<NodeDefaults>,
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new(comment: impl Into<String>, layout: Layout) -> Self {
        Self {
            comment: comment.into(),
            layout,
            node_defaults: None,
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_node_defaults(mut self, defaults: NodeDefaults) -> Self {
        self.node_defaults = Some(defaults);
        self
    }

    /// Add a node, returning the node it replaced if the id was taken.
    pub fn add_node(&mut self, node: Node) -> Option<Node> {
        match self.index.get(&node.id) {
            Some(&i) => Some(std::mem::replace(&mut self.nodes[i], node)),
            None => {
                self.index.insert(node.id.clone(), self.nodes.len());
                self.nodes.push(node);
                None
            }
        }
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
