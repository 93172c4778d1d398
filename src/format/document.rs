//! `{"vertex_count": N, "edges": [...], "labels": [...]}` graph documents.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::{Graph, NeighborOrder};
use crate::types::{Edge, GraphError, GraphResult, Vertex};

/// A graph as written on disk: explicit vertex count, edge list, and
/// optional display labels (one per vertex, e.g. station names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Undirected edges, as objects or `[src, dest, weight]` triples.
    #[serde(default)]
    pub edges: Vec<Edge>,
    /// Optional display name per vertex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

impl GraphDocument {
    /// Create a document without labels.
    pub fn new(vertex_count: usize, edges: Vec<Edge>) -> Self {
        Self {
            vertex_count,
            edges,
            labels: None,
        }
    }

    /// Attach display labels.
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Parse and validate a document from a JSON string.
    pub fn from_json(json: &str) -> GraphResult<Self> {
        let doc: Self = serde_json::from_str(json)?;
        doc.validate()?;
        Ok(doc)
    }

    /// Read and validate a document from a file.
    pub fn read_from_file(path: &Path) -> GraphResult<Self> {
        let data = std::fs::read_to_string(path)?;
        log::debug!("read graph document {} ({} bytes)", path.display(), data.len());
        Self::from_json(&data)
    }

    /// Serialize to JSON.
    pub fn to_json(&self, pretty: bool) -> GraphResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Check the label count; edge endpoints are checked by [`Graph`] construction.
    pub fn validate(&self) -> GraphResult<()> {
        match &self.labels {
            Some(labels) if labels.len() != self.vertex_count => {
                Err(GraphError::LabelCountMismatch {
                    expected: self.vertex_count,
                    got: labels.len(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Build the graph described by this document.
    pub fn to_graph(&self, order: NeighborOrder) -> GraphResult<Graph> {
        Graph::with_order(self.vertex_count, &self.edges, order)
    }

    /// Display name for `vertex`: its label if present, else the index.
    pub fn label(&self, vertex: Vertex) -> String {
        self.labels
            .as_ref()
            .and_then(|labels| labels.get(vertex))
            .cloned()
            .unwrap_or_else(|| vertex.to_string())
    }
}
