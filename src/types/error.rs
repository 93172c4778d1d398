//! Error types for the adjgraph library.

use thiserror::Error;

/// All errors that can occur in the adjgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A vertex index falls outside `[0, vertex_count)`.
    #[error("Vertex {vertex} out of range for graph with {vertex_count} vertices")]
    OutOfRange { vertex: usize, vertex_count: usize },

    /// Number of display labels does not match the vertex count.
    #[error("Label count mismatch: expected {expected}, got {got}")]
    LabelCountMismatch { expected: usize, got: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed graph document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Shorthand for a [`GraphError::OutOfRange`] error.
    pub fn out_of_range(vertex: usize, vertex_count: usize) -> Self {
        Self::OutOfRange {
            vertex,
            vertex_count,
        }
    }
}

/// Convenience result type for adjgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
