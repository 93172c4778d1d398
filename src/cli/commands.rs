//! CLI command implementations.
//!
//! These only render what the graph algorithms return; they never reorder it.

use std::path::Path;

use crate::format::GraphDocument;
use crate::graph::{
    breadth_first, depth_first_with, minimum_spanning_tree_from, shortest_paths, DfsTieBreak,
    Graph, NeighborOrder,
};
use crate::types::{GraphResult, Vertex};

/// Load a graph document and build its graph.
pub fn load(path: &Path, order: NeighborOrder) -> GraphResult<(GraphDocument, Graph)> {
    let doc = GraphDocument::read_from_file(path)?;
    let graph = doc.to_graph(order)?;
    Ok((doc, graph))
}

/// Render adjacency lists as `i --> (v, w) (v, w) ` lines.
pub fn format_adjacency(doc: &GraphDocument, graph: &Graph) -> String {
    let mut out = String::from("Graph's adjacency list:\n");
    for (v, neighbors) in graph.iter() {
        out.push_str(&doc.label(v));
        out.push_str(" --> ");
        for n in neighbors {
            out.push_str(&format!("({}, {}) ", doc.label(n.vertex), n.weight));
        }
        out.push('\n');
    }
    out
}

fn format_order(doc: &GraphDocument, order: &[Vertex]) -> String {
    order
        .iter()
        .map(|&v| doc.label(v))
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

/// Display vertex and edge counts.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let (doc, graph) = load(path, NeighborOrder::Insertion)?;
    let self_loops = doc.edges.iter().filter(|e| e.is_self_loop()).count();
    let max_degree = graph.iter().map(|(_, n)| n.len()).max().unwrap_or(0);

    if json {
        print_json(&serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "self_loops": self_loops,
            "max_degree": max_degree,
            "labelled": doc.labels.is_some(),
        }));
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
        println!("Self-loops: {}", self_loops);
        println!("Max degree: {}", max_degree);
        println!("Labelled: {}", if doc.labels.is_some() { "yes" } else { "no" });
    }
    Ok(())
}

/// Print every adjacency list.
pub fn cmd_show(path: &Path, order: NeighborOrder, json: bool) -> GraphResult<()> {
    let (doc, graph) = load(path, order)?;

    if json {
        let lists: Vec<_> = graph
            .iter()
            .map(|(v, neighbors)| {
                serde_json::json!({
                    "vertex": v,
                    "label": doc.label(v),
                    "neighbors": neighbors,
                })
            })
            .collect();
        print_json(&serde_json::json!({ "adjacency": lists }));
    } else {
        print!("{}", format_adjacency(&doc, &graph));
    }
    Ok(())
}

/// Depth-first traversal.
pub fn cmd_dfs(
    path: &Path,
    order: NeighborOrder,
    start: Vertex,
    tie_break: DfsTieBreak,
    json: bool,
) -> GraphResult<()> {
    let (doc, graph) = load(path, order)?;
    let visited = depth_first_with(&graph, start, tie_break)?;

    if json {
        print_json(&serde_json::json!({
            "start": start,
            "order": visited,
        }));
    } else {
        println!("DFS starting from vertex {}:", doc.label(start));
        println!("{}", format_order(&doc, &visited));
    }
    Ok(())
}

/// Breadth-first traversal.
pub fn cmd_bfs(path: &Path, order: NeighborOrder, start: Vertex, json: bool) -> GraphResult<()> {
    let (doc, graph) = load(path, order)?;
    let visited = breadth_first(&graph, start)?;

    if json {
        print_json(&serde_json::json!({
            "start": start,
            "order": visited,
        }));
    } else {
        println!("BFS starting from vertex {}:", doc.label(start));
        println!("{}", format_order(&doc, &visited));
    }
    Ok(())
}

/// Shortest distances from `start`.
pub fn cmd_dijkstra(path: &Path, order: NeighborOrder, start: Vertex, json: bool) -> GraphResult<()> {
    let (doc, graph) = load(path, order)?;
    let table = shortest_paths(&graph, start)?;

    if json {
        let rows: Vec<_> = table
            .iter()
            .map(|(v, dist)| {
                serde_json::json!({
                    "vertex": v,
                    "distance": dist,
                    "path": table.path_to(v),
                })
            })
            .collect();
        print_json(&serde_json::json!({
            "source": start,
            "distances": rows,
        }));
    } else {
        println!("Shortest distances from {}:", doc.label(start));
        for (v, dist) in table.iter() {
            match (dist, table.path_to(v)) {
                (Some(d), Some(path)) => {
                    println!("  {}: {} via {}", doc.label(v), d, format_order(&doc, &path));
                }
                _ => println!("  {}: unreachable", doc.label(v)),
            }
        }
    }
    Ok(())
}

/// Minimum spanning tree from `root`.
pub fn cmd_mst(path: &Path, order: NeighborOrder, root: Vertex, json: bool) -> GraphResult<()> {
    let (doc, graph) = load(path, order)?;
    let tree = minimum_spanning_tree_from(&graph, root)?;

    if json {
        let edges: Vec<_> = tree
            .edges()
            .map(|(child, edge)| {
                serde_json::json!({
                    "child": child,
                    "parent": edge.parent,
                    "weight": edge.weight,
                })
            })
            .collect();
        print_json(&serde_json::json!({
            "root": root,
            "edges": edges,
            "total_weight": tree.total_weight(),
            "spanning": tree.is_spanning(),
        }));
    } else {
        println!("Minimum spanning tree from {}:", doc.label(root));
        for (child, edge) in tree.edges() {
            println!(
                "  {} - {} ({})",
                doc.label(edge.parent),
                doc.label(child),
                edge.weight
            );
        }
        println!("Total weight: {}", tree.total_weight());
        if !tree.is_spanning() {
            let missing: Vec<Vertex> = (0..tree.vertex_count())
                .filter(|&v| !tree.contains(v))
                .collect();
            println!(
                "Warning: graph is disconnected; not reached: {}",
                format_order(&doc, &missing)
            );
        }
    }
    Ok(())
}
