//! All data types for the adjgraph library.

pub mod edge;
pub mod error;

pub use edge::{Edge, Neighbor};
pub use error::{GraphError, GraphResult};

/// Dense vertex index in `[0, vertex_count)`.
pub type Vertex = usize;

/// Non-negative edge weight.
pub type Weight = u64;

/// Distance recorded for vertices the source cannot reach.
pub const INFINITE_DISTANCE: Weight = Weight::MAX;
