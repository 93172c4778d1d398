//! Build the nine-vertex sample graph and run every algorithm on it.

use adjgraph::*;

const EDGES: [(Vertex, Vertex, Weight); 13] = [
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

fn main() -> GraphResult<()> {
    let mut builder = GraphBuilder::new(9);
    builder.edges(EDGES).sorted();
    let graph = builder.build()?;

    println!("Graph's adjacency list:");
    for (v, neighbors) in graph.iter() {
        let list: Vec<String> = neighbors
            .iter()
            .map(|n| format!("({}, {})", n.vertex, n.weight))
            .collect();
        println!("{} --> {}", v, list.join(" "));
    }

    println!("DFS from 0: {:?}", depth_first(&graph, 0)?);
    println!("BFS from 0: {:?}", breadth_first(&graph, 0)?);

    let table = shortest_paths(&graph, 0)?;
    for (v, dist) in table.iter() {
        println!("  distance to {}: {:?} via {:?}", v, dist, table.path_to(v));
    }

    let tree = minimum_spanning_tree(&graph);
    for (child, edge) in tree.edges() {
        println!("  {} - {} ({})", edge.parent, child, edge.weight);
    }
    println!("MST weight: {}", tree.total_weight());

    Ok(())
}
