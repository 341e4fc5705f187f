//! classic-graphs: adjacency-list graphs loaded from weighted-matrix text.
//!
//! One graph representation shared by four classic algorithms: Dijkstra
//! shortest paths, Prim minimum spanning tree, flood-fill component
//! counting, and a brute-force isomorphism search.

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{
    find_isomorphism, minimum_spanning_tree, shortest_paths, ComponentParams, IsomorphismOutcome,
    IsomorphismParams, QueryEngine, ShortestPathParams, ShortestPaths, SpanningTree, TreeEdge,
};
pub use format::{MatrixMode, MatrixReader, MatrixWriter};
pub use graph::{
    connected_components, count_components, flood, AdjacencyGraph, ComponentReport,
    ComponentRule, EdgesFrom, GraphBuilder,
};
pub use types::{
    Distance, Edge, GraphError, GraphResult, VertexId, Weight, DEFAULT_MAX_ISO_VERTICES,
    UNIT_WEIGHT,
};
