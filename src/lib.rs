//! adjgraph — weighted undirected adjacency-list graphs.
//!
//! A [`Graph`] is built once from an explicit vertex count and an edge list,
//! then read by four classical algorithms: depth-first and breadth-first
//! traversal, Dijkstra shortest paths and Prim's minimum spanning tree. All of
//! them take `&Graph` and keep their scratch state local, so one graph can be
//! queried from several threads at once.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::GraphDocument;
pub use graph::{
    breadth_first, depth_first, depth_first_with, minimum_spanning_tree,
    minimum_spanning_tree_from, shortest_paths, DfsTieBreak, DistanceTable, Graph, GraphBuilder,
    NeighborOrder, SpanningTree, TreeEdge,
};
pub use types::{
    Edge, GraphError, GraphResult, Neighbor, Vertex, Weight, INFINITE_DISTANCE,
};
