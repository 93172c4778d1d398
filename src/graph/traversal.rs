//! Graph traversal algorithms (DFS, BFS).

use std::collections::VecDeque;

use crate::types::{GraphResult, Vertex};

use super::Graph;

/// Order in which DFS explores the neighbors of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DfsTieBreak {
    /// Last adjacency entry first. With ascending neighbor order this means
    /// highest index first. This is the default and the historical output
    /// order of the traversal.
    #[default]
    Reverse,
    /// First adjacency entry first.
    Forward,
}

/// One suspended vertex on the explicit DFS stack.
struct Frame {
    vertex: Vertex,
    /// Adjacency entries of `vertex` already examined.
    cursor: usize,
}

/// Depth-first traversal from `start` using the default [`DfsTieBreak::Reverse`] policy.
pub fn depth_first(graph: &Graph, start: Vertex) -> GraphResult<Vec<Vertex>> {
    depth_first_with(graph, start, DfsTieBreak::default())
}

/// Depth-first traversal from `start`, listing vertices in first-visit order.
///
/// Produces exactly the order of the classic recursive formulation (mark on
/// entry, then recurse into each unvisited neighbor in tie-break order) but
/// keeps its frames on the heap, so path length is not limited by the call
/// stack.
pub fn depth_first_with(
    graph: &Graph,
    start: Vertex,
    tie_break: DfsTieBreak,
) -> GraphResult<Vec<Vertex>> {
    graph.check_vertex(start)?;
    log::trace!("dfs from {} ({:?})", start, tie_break);

    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    let mut stack = vec![Frame {
        vertex: start,
        cursor: 0,
    }];
    visited[start] = true;
    order.push(start);

    while let Some(frame) = stack.last_mut() {
        let list = graph.list(frame.vertex);
        if frame.cursor == list.len() {
            stack.pop();
            continue;
        }

        let idx = match tie_break {
            DfsTieBreak::Reverse => list.len() - 1 - frame.cursor,
            DfsTieBreak::Forward => frame.cursor,
        };
        frame.cursor += 1;

        let next = list[idx].vertex;
        if !visited[next] {
            visited[next] = true;
            order.push(next);
            stack.push(Frame {
                vertex: next,
                cursor: 0,
            });
        }
    }

    log::debug!("dfs from {} visited {} vertices", start, order.len());
    Ok(order)
}

/// Breadth-first traversal from `start`.
///
/// Vertices come out layer by layer; within a layer they follow adjacency
/// list order. A vertex is marked when enqueued, so it is never queued twice.
pub fn breadth_first(graph: &Graph, start: Vertex) -> GraphResult<Vec<Vertex>> {
    graph.check_vertex(start)?;
    log::trace!("bfs from {}", start);

    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for neighbor in graph.list(current) {
            if !visited[neighbor.vertex] {
                visited[neighbor.vertex] = true;
                queue.push_back(neighbor.vertex);
            }
        }
    }

    log::debug!("bfs from {} visited {} vertices", start, order.len());
    Ok(order)
}
