//! In-memory graph operations: the core data structure.

pub mod adjacency_graph;
pub mod builder;
pub mod traversal;

pub use adjacency_graph::{AdjacencyGraph, EdgesFrom};
pub use builder::GraphBuilder;
pub use traversal::{connected_components, count_components, flood, ComponentReport, ComponentRule};
