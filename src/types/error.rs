//! Error types for the classic-graphs library.

use thiserror::Error;

use super::VertexId;

/// All errors that can occur in the classic-graphs library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Graph constructor contract violated.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Vertex index outside `[0, V)`.
    #[error("Vertex {vertex} out of range for graph with {vertex_count} vertices")]
    OutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },

    /// Malformed matrix input.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Isomorphism search refused because the graphs are too large.
    #[error("Isomorphism search over {vertices} vertices exceeds the ceiling of {max}")]
    SearchTooLarge { vertices: usize, max: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Convenience result type for classic-graphs operations.
pub type GraphResult<T> = Result<T, GraphError>;
