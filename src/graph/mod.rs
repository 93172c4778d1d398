//! In-memory graph and the algorithms that run over it.

pub mod adjacency;
pub mod builder;
pub mod shortest_path;
pub mod spanning_tree;
pub mod traversal;

pub use adjacency::{Graph, NeighborOrder};
pub use builder::GraphBuilder;
pub use shortest_path::{shortest_paths, DistanceTable};
pub use spanning_tree::{minimum_spanning_tree, minimum_spanning_tree_from, SpanningTree, TreeEdge};
pub use traversal::{breadth_first, depth_first, depth_first_with, DfsTieBreak};
