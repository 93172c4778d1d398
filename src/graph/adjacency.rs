//! Core graph structure — one weighted adjacency list per vertex.

use crate::types::{Edge, GraphError, GraphResult, Neighbor, Vertex};

/// Ordering applied to every adjacency list after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborOrder {
    /// Keep edge-list insertion order.
    #[default]
    Insertion,
    /// Stable sort ascending by neighbor index; ties keep insertion order.
    ///
    /// Use this whenever traversal output must not depend on the order the
    /// edges were supplied in.
    Ascending,
}

/// A weighted undirected graph over the dense vertex range `[0, vertex_count)`.
///
/// Every input edge `{u, v, w}` is stored twice: as `(v, w)` in `u`'s list and
/// as `(u, w)` in `v`'s list. A self-loop therefore appears twice in its own
/// vertex's list. The graph is read-only once built, apart from
/// [`Graph::replace_neighbors`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    /// Adjacency lists, indexed by vertex.
    adjacency: Vec<Vec<Neighbor>>,
    /// Number of input edges.
    edge_count: usize,
}

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Build a graph from an edge list, keeping insertion order.
    pub fn from_edges(vertex_count: usize, edges: &[Edge]) -> GraphResult<Self> {
        Self::with_order(vertex_count, edges, NeighborOrder::Insertion)
    }

    /// Build a graph from an edge list with the given neighbor ordering.
    ///
    /// Fails with [`GraphError::OutOfRange`] on the first edge naming a vertex
    /// `>= vertex_count`; no partial graph is returned.
    pub fn with_order(
        vertex_count: usize,
        edges: &[Edge],
        order: NeighborOrder,
    ) -> GraphResult<Self> {
        let mut graph = Self::new(vertex_count);

        for edge in edges {
            graph.check_vertex(edge.src)?;
            graph.check_vertex(edge.dest)?;
            graph.adjacency[edge.src].push(Neighbor::new(edge.dest, edge.weight));
            graph.adjacency[edge.dest].push(Neighbor::new(edge.src, edge.weight));
        }
        graph.edge_count = edges.len();

        if order == NeighborOrder::Ascending {
            graph.sort_neighbors();
        }

        log::debug!(
            "built graph: {} vertices, {} edges, order {:?}",
            vertex_count,
            graph.edge_count,
            order
        );
        Ok(graph)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of input edges (each stored in two adjacency lists).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True when the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Check that `vertex` names a vertex of this graph.
    pub fn check_vertex(&self, vertex: Vertex) -> GraphResult<()> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::out_of_range(vertex, self.vertex_count()))
        }
    }

    /// The adjacency list of `vertex`.
    pub fn neighbors(&self, vertex: Vertex) -> GraphResult<&[Neighbor]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::out_of_range(vertex, self.vertex_count()))
    }

    /// Number of adjacency entries of `vertex`.
    pub fn degree(&self, vertex: Vertex) -> GraphResult<usize> {
        self.neighbors(vertex).map(<[Neighbor]>::len)
    }

    /// Iterate over `(vertex, adjacency list)` pairs in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, &[Neighbor])> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(v, list)| (v, list.as_slice()))
    }

    /// Overwrite the adjacency list of `vertex`.
    ///
    /// Meant for test fixtures that need a hand-made neighbor order. The
    /// replacement is not mirrored into other lists, so it can break the
    /// undirected symmetry of the graph.
    pub fn replace_neighbors(&mut self, vertex: Vertex, neighbors: Vec<Neighbor>) -> GraphResult<()> {
        self.check_vertex(vertex)?;
        for n in &neighbors {
            self.check_vertex(n.vertex)?;
        }
        log::trace!("replacing {} neighbors of vertex {}", neighbors.len(), vertex);
        self.adjacency[vertex] = neighbors;
        Ok(())
    }

    /// Adjacency list of a vertex already known to be in range.
    pub(crate) fn list(&self, vertex: Vertex) -> &[Neighbor] {
        &self.adjacency[vertex]
    }

    fn sort_neighbors(&mut self) {
        for list in &mut self.adjacency {
            // `sort_by_key` is stable, so parallel edges keep insertion order.
            list.sort_by_key(|n| n.vertex);
        }
    }
}
