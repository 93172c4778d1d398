//! Million-vertex performance demo.
//!
//! A long path makes DFS as deep as the graph itself.

use std::time::Instant;

use adjgraph::*;

fn main() -> GraphResult<()> {
    let vertex_count = 1_000_000;

    println!("Creating graph with {} vertices...", vertex_count);
    let start = Instant::now();

    let mut edges = Vec::with_capacity(vertex_count * 2);
    for v in 1..vertex_count {
        edges.push(Edge::new(v - 1, v, (v % 17) as Weight + 1));
    }
    for v in (0..vertex_count).step_by(7) {
        let target = (v * 31 + 11) % vertex_count;
        edges.push(Edge::new(v, target, (v % 97) as Weight + 1));
    }

    let graph = Graph::with_order(vertex_count, &edges, NeighborOrder::Ascending)?;
    println!(
        "  Graph built in {:?} ({} vertices, {} edges)",
        start.elapsed(),
        graph.vertex_count(),
        graph.edge_count()
    );

    let start = Instant::now();
    let dfs = depth_first(&graph, 0)?;
    println!("  DFS visited {} vertices in {:?}", dfs.len(), start.elapsed());

    let start = Instant::now();
    let bfs = breadth_first(&graph, 0)?;
    println!("  BFS visited {} vertices in {:?}", bfs.len(), start.elapsed());

    let start = Instant::now();
    let table = shortest_paths(&graph, 0)?;
    println!(
        "  Dijkstra in {:?}; distance to last vertex: {:?}",
        start.elapsed(),
        table.distance(vertex_count - 1)
    );

    Ok(())
}
