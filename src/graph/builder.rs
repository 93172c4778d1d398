//! Fluent API for building Graph instances.

use crate::types::{Edge, GraphResult, Vertex, Weight};

use super::{Graph, NeighborOrder};

/// Fluent builder for constructing a [`Graph`].
///
/// Edges are validated only in [`GraphBuilder::build`], so a chain of
/// `edge` calls never fails halfway.
pub struct GraphBuilder {
    vertex_count: usize,
    edges: Vec<Edge>,
    order: NeighborOrder,
}

impl GraphBuilder {
    /// Create a new builder for `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
            order: NeighborOrder::default(),
        }
    }

    /// Add an undirected edge `{src, dest}` with the given weight.
    pub fn edge(&mut self, src: Vertex, dest: Vertex, weight: Weight) -> &mut Self {
        self.edges.push(Edge::new(src, dest, weight));
        self
    }

    /// Add every edge from an iterator.
    pub fn edges<I>(&mut self, edges: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        self.edges.extend(edges.into_iter().map(Into::into));
        self
    }

    /// Choose the neighbor ordering applied after insertion.
    pub fn order(&mut self, order: NeighborOrder) -> &mut Self {
        self.order = order;
        self
    }

    /// Shorthand for `order(NeighborOrder::Ascending)`.
    pub fn sorted(&mut self) -> &mut Self {
        self.order(NeighborOrder::Ascending)
    }

    /// Number of edges queued so far.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Build the final Graph.
    pub fn build(&self) -> GraphResult<Graph> {
        Graph::with_order(self.vertex_count, &self.edges, self.order)
    }
}
