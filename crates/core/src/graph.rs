//! Graph data structures for dependency tracking.
//!
//! Wraps a `petgraph` stable graph with an id-to-index map so nodes are
//! addressed by their root-relative path and duplicate ordered edges are
//! rejected at insertion.

use std::collections::{HashMap, HashSet};

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use serde::{Deserialize, Serialize};

use crate::config;

/// A discovered source file.
///
/// Identity is `id`, the root-relative forward-slash path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    /// Root-relative path (`src/utils/api.js`)
    pub id: String,
    /// Basename (`api.js`)
    pub name: String,
    /// Containing directory, `"."` for top-level files
    pub directory: String,
    /// Extension with leading dot, `""` when extensionless
    pub extension: String,
}

impl FileNode {
    /// Build a node from a root-relative slash path.
    pub fn from_rel_path(rel_path: &str) -> Self {
        let (directory, name) = match rel_path.rsplit_once('/') {
            Some((dir, name)) => (dir.to_string(), name.to_string()),
            None => (".".to_string(), rel_path.to_string()),
        };
        let extension = config::extension_of(&name).to_string();
        Self {
            id: rel_path.to_string(),
            name,
            directory,
            extension,
        }
    }
}

/// A directed dependency from an importing file to an imported file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    /// `FileNode::id` of the importing file
    pub source: String,
    /// `FileNode::id` of the imported file
    pub target: String,
}

/// Aggregate graph statistics, serialized with the API's field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStats {
    /// Number of discovered files
    pub file_count: usize,
    /// Number of distinct dependency edges
    pub dependency_count: usize,
    /// Number of distinct `directory` values across nodes
    pub directories: usize,
}

/// Serializable snapshot of a built graph.
///
/// Edges are exposed under the wire name `links`, matching the shape the
/// visualization front end consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<FileNode>,
    pub links: Vec<DependencyEdge>,
    pub stats: GraphStats,
}

/// The dependency graph for one build.
///
/// Each build constructs its own graph; nothing is shared across builds.
#[derive(Debug)]
pub struct DependencyGraph {
    inner: StableDiGraph<FileNode, ()>,
    ids: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            inner: StableDiGraph::new(),
            ids: HashMap::new(),
        }
    }

    /// Add a file node. Adding the same id twice returns the existing index.
    pub fn add_file(&mut self, node: FileNode) -> NodeIndex {
        if let Some(&index) = self.ids.get(&node.id) {
            return index;
        }
        let id = node.id.clone();
        let index = self.inner.add_node(node);
        self.ids.insert(id, index);
        index
    }

    /// Add a dependency edge between two known nodes.
    ///
    /// Returns `false` without modifying the graph when either endpoint is
    /// not a node or the ordered pair already exists. Self-loops are valid
    /// edges and subject to the same dedup.
    pub fn add_dependency(&mut self, source: &str, target: &str) -> bool {
        let (Some(&from), Some(&to)) = (self.ids.get(source), self.ids.get(target)) else {
            return false;
        };
        if self.inner.contains_edge(from, to) {
            return false;
        }
        self.inner.add_edge(from, to, ());
        true
    }

    /// Whether a node with the given id exists.
    pub fn contains_node(&self, id: &str) -> bool {
        self.ids.contains_key(id)
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Iterate over all file nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &FileNode> {
        self.inner.node_weights()
    }

    /// Materialize the edge list in insertion order.
    pub fn edges(&self) -> Vec<DependencyEdge> {
        self.inner
            .edge_references()
            .map(|edge| DependencyEdge {
                source: self.inner[edge.source()].id.clone(),
                target: self.inner[edge.target()].id.clone(),
            })
            .collect()
    }

    /// Compute aggregate statistics from the current node and edge lists.
    pub fn stats(&self) -> GraphStats {
        let directories: HashSet<&str> = self
            .nodes()
            .map(|node| node.directory.as_str())
            .collect();
        GraphStats {
            file_count: self.node_count(),
            dependency_count: self.edge_count(),
            directories: directories.len(),
        }
    }

    /// Snapshot the graph into its serializable form.
    pub fn data(&self) -> GraphData {
        GraphData {
            nodes: self.nodes().cloned().collect(),
            links: self.edges(),
            stats: self.stats(),
        }
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}
