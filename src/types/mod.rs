//! All data types shared by the graph store, loader and algorithms.

pub mod distance;
pub mod edge;
pub mod error;

pub use distance::Distance;
pub use edge::Edge;
pub use error::{GraphError, GraphResult};

/// Dense vertex index in `0..V`.
pub type VertexId = usize;

/// Non-negative edge weight.
pub type Weight = u32;

/// Weight given to edges loaded from an unweighted matrix.
pub const UNIT_WEIGHT: Weight = 1;

/// Default vertex-count ceiling for the brute-force isomorphism search.
pub const DEFAULT_MAX_ISO_VERTICES: usize = 8;
