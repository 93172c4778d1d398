//! Minimum spanning tree (array-based Prim).

use serde::Serialize;

use crate::types::{GraphResult, Vertex, Weight};

use super::Graph;

/// The edge linking a tree vertex to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeEdge {
    /// Parent vertex in the tree.
    pub parent: Vertex,
    /// Weight of the connecting edge.
    pub weight: Weight,
}

/// Result of Prim's algorithm.
///
/// On a disconnected graph only the root's component is covered; the other
/// vertices have no parent and [`SpanningTree::is_spanning`] returns `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningTree {
    root: Option<Vertex>,
    links: Vec<Option<TreeEdge>>,
    reached: Vec<bool>,
}

impl SpanningTree {
    fn empty() -> Self {
        Self {
            root: None,
            links: Vec::new(),
            reached: Vec::new(),
        }
    }

    /// Root vertex; `None` only for the tree of an empty graph.
    pub fn root(&self) -> Option<Vertex> {
        self.root
    }

    /// Number of vertices in the underlying graph.
    pub fn vertex_count(&self) -> usize {
        self.links.len()
    }

    /// Parent link of `vertex`; `None` for the root and unreached vertices.
    pub fn parent(&self, vertex: Vertex) -> Option<TreeEdge> {
        self.links.get(vertex).copied().flatten()
    }

    /// True if `vertex` is part of the tree grown from the root.
    pub fn contains(&self, vertex: Vertex) -> bool {
        self.reached.get(vertex).copied().unwrap_or(false)
    }

    /// Iterate over tree edges as `(child, TreeEdge)` in child vertex order.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, TreeEdge)> + '_ {
        self.links
            .iter()
            .enumerate()
            .filter_map(|(v, link)| link.map(|edge| (v, edge)))
    }

    /// Number of tree edges.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Sum of tree edge weights.
    pub fn total_weight(&self) -> Weight {
        self.edges()
            .fold(0, |acc: Weight, (_, edge)| acc.saturating_add(edge.weight))
    }

    /// True when every vertex was reached, i.e. the tree has `N - 1` edges.
    pub fn is_spanning(&self) -> bool {
        self.reached.iter().all(|&r| r)
    }
}

/// Minimum spanning tree rooted at vertex 0.
///
/// An empty graph yields an empty tree.
pub fn minimum_spanning_tree(graph: &Graph) -> SpanningTree {
    if graph.is_empty() {
        return SpanningTree::empty();
    }
    grow(graph, 0)
}

/// Minimum spanning tree rooted at `root`.
pub fn minimum_spanning_tree_from(graph: &Graph, root: Vertex) -> GraphResult<SpanningTree> {
    graph.check_vertex(root)?;
    Ok(grow(graph, root))
}

/// O(V^2) Prim: repeatedly pull in the cheapest outside vertex.
///
/// Ties between equal keys go to the lowest vertex index. Vertices still at
/// an infinite key are never selected, so growth stops at the root's
/// component.
fn grow(graph: &Graph, root: Vertex) -> SpanningTree {
    let n = graph.vertex_count();
    log::trace!("prim from root {} over {} vertices", root, n);

    let mut key: Vec<Option<Weight>> = vec![None; n];
    let mut links: Vec<Option<TreeEdge>> = vec![None; n];
    let mut in_tree = vec![false; n];
    key[root] = Some(0);

    for _ in 0..n {
        let mut selected: Option<(Vertex, Weight)> = None;
        for v in 0..n {
            if in_tree[v] {
                continue;
            }
            if let Some(k) = key[v] {
                if selected.map_or(true, |(_, best)| k < best) {
                    selected = Some((v, k));
                }
            }
        }

        let Some((u, _)) = selected else {
            break;
        };
        in_tree[u] = true;

        for neighbor in graph.list(u) {
            let v = neighbor.vertex;
            if in_tree[v] {
                continue;
            }
            if key[v].map_or(true, |k| neighbor.weight < k) {
                key[v] = Some(neighbor.weight);
                links[v] = Some(TreeEdge {
                    parent: u,
                    weight: neighbor.weight,
                });
            }
        }
    }

    let tree = SpanningTree {
        root: Some(root),
        links,
        reached: in_tree,
    };
    if tree.is_spanning() {
        log::debug!(
            "prim from {}: {} edges, total weight {}",
            root,
            tree.edge_count(),
            tree.total_weight()
        );
    } else {
        log::warn!(
            "graph is disconnected: spanning tree from {} covers {} of {} vertices",
            root,
            tree.edge_count() + 1,
            n
        );
    }
    tree
}
