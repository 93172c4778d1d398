//! Single-source shortest paths (Dijkstra).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::Serialize;

use crate::types::{GraphResult, Vertex, Weight, INFINITE_DISTANCE};

use super::Graph;

/// Minimum path cost from one source to every vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceTable {
    source: Vertex,
    /// Best known cost per vertex; [`INFINITE_DISTANCE`] when unreached.
    distances: Vec<Weight>,
    /// Previous vertex on a shortest path; `None` for the source and unreached vertices.
    predecessors: Vec<Option<Vertex>>,
}

impl DistanceTable {
    /// The source vertex.
    pub fn source(&self) -> Vertex {
        self.source
    }

    /// Number of entries (the graph's vertex count).
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// True for a table over an empty graph (never produced by [`shortest_paths`]).
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Distance to `vertex`, or `None` when it is unreachable or out of range.
    pub fn distance(&self, vertex: Vertex) -> Option<Weight> {
        self.distances
            .get(vertex)
            .copied()
            .filter(|&d| d != INFINITE_DISTANCE)
    }

    /// True if `vertex` can be reached from the source.
    pub fn is_reachable(&self, vertex: Vertex) -> bool {
        self.distance(vertex).is_some()
    }

    /// Raw distances in vertex order, with [`INFINITE_DISTANCE`] for unreached vertices.
    pub fn as_slice(&self) -> &[Weight] {
        &self.distances
    }

    /// Iterate over `(vertex, distance)` in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, Option<Weight>)> + '_ {
        (0..self.len()).map(move |v| (v, self.distance(v)))
    }

    /// Vertices on a shortest path from the source to `vertex`, both ends included.
    pub fn path_to(&self, vertex: Vertex) -> Option<Vec<Vertex>> {
        if !self.is_reachable(vertex) {
            return None;
        }
        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(prev) = self.predecessors[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra's algorithm over a binary heap with lazy deletion.
///
/// Stale heap entries (distance above the recorded best) are skipped when
/// popped instead of being decreased in place. Time: O((V + E) log V).
pub fn shortest_paths(graph: &Graph, source: Vertex) -> GraphResult<DistanceTable> {
    graph.check_vertex(source)?;
    log::trace!("dijkstra from {}", source);

    let n = graph.vertex_count();
    let mut distances = vec![INFINITE_DISTANCE; n];
    let mut predecessors = vec![None; n];
    let mut heap = BinaryHeap::new();

    distances[source] = 0;
    heap.push(Reverse((0, source)));

    while let Some(Reverse((dist, u))) = heap.pop() {
        if dist > distances[u] {
            continue;
        }

        for neighbor in graph.list(u) {
            let candidate = dist.saturating_add(neighbor.weight);
            if candidate < distances[neighbor.vertex] {
                distances[neighbor.vertex] = candidate;
                predecessors[neighbor.vertex] = Some(u);
                heap.push(Reverse((candidate, neighbor.vertex)));
            }
        }
    }

    let table = DistanceTable {
        source,
        distances,
        predecessors,
    };
    log::debug!(
        "dijkstra from {} reached {} of {} vertices",
        source,
        table.iter().filter(|(_, d)| d.is_some()).count(),
        n
    );
    Ok(table)
}
