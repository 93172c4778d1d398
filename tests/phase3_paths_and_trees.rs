//! Phase 3 tests: Dijkstra shortest paths and Prim spanning trees.

use adjgraph::graph::{
    minimum_spanning_tree, minimum_spanning_tree_from, shortest_paths, Graph, NeighborOrder,
    TreeEdge,
};
use adjgraph::types::{Edge, GraphError, INFINITE_DISTANCE};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn sample_edges() -> Vec<Edge> {
    let raw: [(usize, usize, u64); 13] = [
        (0, 1, 8),
        (0, 2, 21),
        (1, 2, 6),
        (1, 3, 5),
        (1, 4, 4),
        (2, 7, 11),
        (2, 8, 8),
        (3, 4, 9),
        (5, 6, 10),
        (5, 7, 15),
        (5, 8, 5),
        (6, 7, 3),
        (6, 8, 7),
    ];
    raw.into_iter().map(Edge::from).collect()
}

fn sample_graph() -> Graph {
    Graph::with_order(9, &sample_edges(), NeighborOrder::Ascending).unwrap()
}

/// Random connected graph: a random spanning chain plus `extra` random edges.
fn random_connected(rng: &mut StdRng, n: usize, extra: usize) -> Vec<Edge> {
    let mut edges: Vec<Edge> = (1..n)
        .map(|v| Edge::new(rng.gen_range(0..v), v, rng.gen_range(0..15)))
        .collect();
    for _ in 0..extra {
        edges.push(Edge::new(rng.gen_range(0..n), rng.gen_range(0..n), rng.gen_range(0..15)));
    }
    edges
}

/// Relax every edge until nothing changes.
fn reference_distances(n: usize, edges: &[Edge], source: usize) -> Vec<u64> {
    let mut dist = vec![INFINITE_DISTANCE; n];
    dist[source] = 0;
    loop {
        let mut changed = false;
        for e in edges {
            for (a, b) in [(e.src, e.dest), (e.dest, e.src)] {
                if dist[a] != INFINITE_DISTANCE && dist[a] + e.weight < dist[b] {
                    dist[b] = dist[a] + e.weight;
                    changed = true;
                }
            }
        }
        if !changed {
            return dist;
        }
    }
}

/// Cheapest spanning tree weight by trying every (n - 1)-edge subset.
fn brute_force_mst_weight(n: usize, edges: &[Edge]) -> u64 {
    fn find(parent: &[usize], x: usize) -> usize {
        let mut x = x;
        while parent[x] != x {
            x = parent[x];
        }
        x
    }

    let mut best = u64::MAX;
    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize != n - 1 {
            continue;
        }
        let mut parent: Vec<usize> = (0..n).collect();
        let mut weight = 0;
        let mut acyclic = true;
        for (i, e) in edges.iter().enumerate() {
            if mask & (1 << i) == 0 {
                continue;
            }
            let (a, b) = (find(&parent, e.src), find(&parent, e.dest));
            if a == b {
                acyclic = false;
                break;
            }
            parent[a] = b;
            weight += e.weight;
        }
        if acyclic {
            best = best.min(weight);
        }
    }
    best
}

// ==================== Dijkstra Tests ====================

#[test]
fn test_dijkstra_sample_distances() {
    let table = shortest_paths(&sample_graph(), 0).unwrap();
    assert_eq!(table.source(), 0);
    assert_eq!(table.len(), 9);
    assert_eq!(table.as_slice(), &[0, 8, 14, 13, 12, 27, 28, 25, 22]);
}

#[test]
fn test_dijkstra_sample_paths() {
    let table = shortest_paths(&sample_graph(), 0).unwrap();
    assert_eq!(table.path_to(0), Some(vec![0]));
    assert_eq!(table.path_to(2), Some(vec![0, 1, 2]));
    assert_eq!(table.path_to(6), Some(vec![0, 1, 2, 7, 6]));
    assert_eq!(table.path_to(5), Some(vec![0, 1, 2, 8, 5]));
}

#[test]
fn test_dijkstra_insertion_order_irrelevant() {
    let mut edges = sample_edges();
    let sorted = shortest_paths(&sample_graph(), 4).unwrap();
    edges.reverse();
    let reversed = shortest_paths(&Graph::from_edges(9, &edges).unwrap(), 4).unwrap();
    assert_eq!(sorted.as_slice(), reversed.as_slice());
}

#[test]
fn test_dijkstra_unreachable() {
    let graph = Graph::from_edges(4, &[Edge::new(0, 1, 3), Edge::new(2, 3, 1)]).unwrap();
    let table = shortest_paths(&graph, 0).unwrap();

    assert_eq!(table.distance(1), Some(3));
    assert_eq!(table.distance(2), None);
    assert!(!table.is_reachable(3));
    assert_eq!(table.as_slice()[3], INFINITE_DISTANCE);
    assert_eq!(table.path_to(3), None);
    assert_eq!(table.distance(99), None);

    let listed: Vec<_> = table.iter().collect();
    assert_eq!(listed, vec![(0, Some(0)), (1, Some(3)), (2, None), (3, None)]);
}

#[test]
fn test_dijkstra_parallel_edges_self_loops_and_zero_weights() {
    let edges = [
        Edge::new(0, 1, 9),
        Edge::new(1, 0, 2),
        Edge::new(1, 1, 0),
        Edge::new(1, 2, 0),
    ];
    let table = shortest_paths(&Graph::from_edges(3, &edges).unwrap(), 0).unwrap();
    assert_eq!(table.as_slice(), &[0, 2, 2]);
}

#[test]
fn test_dijkstra_large_weights_do_not_wrap() {
    let edges = [Edge::new(0, 1, u64::MAX - 1), Edge::new(1, 2, u64::MAX - 1)];
    let table = shortest_paths(&Graph::from_edges(3, &edges).unwrap(), 0).unwrap();
    assert_eq!(table.distance(1), Some(u64::MAX - 1));
    assert_eq!(table.distance(2), None);
}

#[test]
fn test_dijkstra_properties_random() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..100 {
        let n = rng.gen_range(1..20);
        let m = rng.gen_range(0..40);
        let edges: Vec<Edge> = (0..m)
            .map(|_| Edge::new(rng.gen_range(0..n), rng.gen_range(0..n), rng.gen_range(0..30)))
            .collect();
        let graph = Graph::from_edges(n, &edges).unwrap();
        let source = rng.gen_range(0..n);
        let table = shortest_paths(&graph, source).unwrap();

        assert_eq!(table.distance(source), Some(0));
        assert_eq!(table.as_slice(), reference_distances(n, &edges, source).as_slice());

        for e in &edges {
            if let (Some(du), Some(dv)) = (table.distance(e.src), table.distance(e.dest)) {
                assert!(dv <= du + e.weight);
                assert!(du <= dv + e.weight);
            } else {
                // An edge never joins a reachable vertex to an unreachable one.
                assert_eq!(table.is_reachable(e.src), table.is_reachable(e.dest));
            }
        }
    }
}

#[test]
fn test_dijkstra_source_out_of_range() {
    let graph = sample_graph();
    assert!(matches!(
        shortest_paths(&graph, 9),
        Err(GraphError::OutOfRange {
            vertex: 9,
            vertex_count: 9
        })
    ));
}

// ==================== Prim Tests ====================

#[test]
fn test_prim_sample_tree() {
    let tree = minimum_spanning_tree(&sample_graph());

    assert_eq!(tree.root(), Some(0));
    assert!(tree.is_spanning());
    assert_eq!(tree.edge_count(), 8);
    assert_eq!(tree.total_weight(), 46);
    assert_eq!(tree.parent(0), None);

    let parents: Vec<Option<usize>> = (0..9).map(|v| tree.parent(v).map(|e| e.parent)).collect();
    assert_eq!(
        parents,
        vec![None, Some(0), Some(1), Some(1), Some(1), Some(8), Some(8), Some(6), Some(2)]
    );
    assert_eq!(tree.parent(7), Some(TreeEdge { parent: 6, weight: 3 }));
}

#[test]
fn test_prim_configurable_root() {
    let graph = sample_graph();
    let tree = minimum_spanning_tree_from(&graph, 5).unwrap();
    assert_eq!(tree.root(), Some(5));
    assert_eq!(tree.parent(5), None);
    assert!(tree.is_spanning());
    assert_eq!(tree.total_weight(), 46);
}

#[test]
fn test_prim_ties_go_to_lowest_index() {
    // Vertices 1 and 2 both start at key 5; 1 must be taken first.
    let edges = [Edge::new(0, 2, 5), Edge::new(0, 1, 5), Edge::new(1, 2, 1)];
    let tree = minimum_spanning_tree(&Graph::from_edges(3, &edges).unwrap());
    assert_eq!(tree.parent(1), Some(TreeEdge { parent: 0, weight: 5 }));
    assert_eq!(tree.parent(2), Some(TreeEdge { parent: 1, weight: 1 }));
}

#[test]
fn test_prim_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..60 {
        let n = rng.gen_range(2..7);
        let extra = rng.gen_range(0..6);
        let edges = random_connected(&mut rng, n, extra);
        let graph = Graph::from_edges(n, &edges).unwrap();
        let tree = minimum_spanning_tree(&graph);

        assert!(tree.is_spanning());
        assert_eq!(tree.edge_count(), n - 1);
        assert_eq!(tree.total_weight(), brute_force_mst_weight(n, &edges));

        // Every tree edge must exist in the graph with that weight.
        for (child, edge) in tree.edges() {
            assert!(graph
                .neighbors(child)
                .unwrap()
                .iter()
                .any(|nb| nb.vertex == edge.parent && nb.weight == edge.weight));
        }
    }
}

#[test]
fn test_prim_disconnected_graph() {
    let edges = [Edge::new(0, 1, 2), Edge::new(1, 2, 3), Edge::new(3, 4, 1)];
    let tree = minimum_spanning_tree(&Graph::from_edges(5, &edges).unwrap());

    assert!(!tree.is_spanning());
    assert_eq!(tree.edge_count(), 2);
    assert_eq!(tree.total_weight(), 5);
    assert!(tree.contains(0));
    assert!(tree.contains(2));
    assert!(!tree.contains(3));
    assert_eq!(tree.parent(3), None);
    assert_eq!(tree.parent(4), None);
}

#[test]
fn test_prim_single_vertex_and_empty_graph() {
    let single = minimum_spanning_tree(&Graph::from_edges(1, &[Edge::new(0, 0, 7)]).unwrap());
    assert!(single.is_spanning());
    assert_eq!(single.edge_count(), 0);
    assert_eq!(single.total_weight(), 0);

    let empty = minimum_spanning_tree(&Graph::from_edges(0, &[]).unwrap());
    assert_eq!(empty.root(), None);
    assert_eq!(empty.vertex_count(), 0);
    assert!(empty.is_spanning());
}

#[test]
fn test_prim_root_out_of_range() {
    let graph = sample_graph();
    assert!(matches!(
        minimum_spanning_tree_from(&graph, 9),
        Err(GraphError::OutOfRange { vertex: 9, .. })
    ));
    let empty = Graph::from_edges(0, &[]).unwrap();
    assert!(minimum_spanning_tree_from(&empty, 0).is_err());
}
