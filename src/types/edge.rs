//! The core edge struct.

use serde::Serialize;

use super::{VertexId, Weight};

/// A directed, weighted arc between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Source vertex (origin of the arc).
    pub source: VertexId,
    /// Target vertex (destination of the arc).
    pub target: VertexId,
    /// Edge weight. Unweighted graphs store 1.
    pub weight: Weight,
}

impl Edge {
    /// Create a new edge.
    pub fn new(source: VertexId, target: VertexId, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Whether this edge starts and ends at the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
