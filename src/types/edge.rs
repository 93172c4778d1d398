//! Edges and adjacency-list entries.

use serde::{Deserialize, Serialize};

use super::{Vertex, Weight};

/// An undirected weighted edge `{src, dest}`.
///
/// Self-loops and parallel edges are allowed; nothing is deduplicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "EdgeRepr")]
pub struct Edge {
    /// One endpoint.
    pub src: Vertex,
    /// The other endpoint.
    pub dest: Vertex,
    /// Non-negative edge weight.
    pub weight: Weight,
}

impl Edge {
    /// Create a new edge.
    pub fn new(src: Vertex, dest: Vertex, weight: Weight) -> Self {
        Self { src, dest, weight }
    }

    /// True when both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.src == self.dest
    }
}

impl From<(Vertex, Vertex, Weight)> for Edge {
    fn from((src, dest, weight): (Vertex, Vertex, Weight)) -> Self {
        Self::new(src, dest, weight)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}, {}}} ({})", self.src, self.dest, self.weight)
    }
}

/// Accepted JSON shapes: `{"src":0,"dest":1,"weight":8}` or `[0, 1, 8]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum EdgeRepr {
    Object {
        src: Vertex,
        dest: Vertex,
        weight: Weight,
    },
    Triple(Vertex, Vertex, Weight),
}

impl From<EdgeRepr> for Edge {
    fn from(repr: EdgeRepr) -> Self {
        match repr {
            EdgeRepr::Object { src, dest, weight } => Self::new(src, dest, weight),
            EdgeRepr::Triple(src, dest, weight) => Self::new(src, dest, weight),
        }
    }
}

/// One entry of a vertex's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Neighbor {
    /// The vertex at the other end of the edge.
    pub vertex: Vertex,
    /// Weight of the connecting edge.
    pub weight: Weight,
}

impl Neighbor {
    /// Create a new adjacency entry.
    pub fn new(vertex: Vertex, weight: Weight) -> Self {
        Self { vertex, weight }
    }
}
