//! High-level operations: the algorithms and the query engine in front of them.

pub mod isomorphism;
pub mod query;
pub mod shortest_path;
pub mod spanning_tree;

pub use isomorphism::{find_isomorphism, IsomorphismOutcome};
pub use query::{ComponentParams, IsomorphismParams, QueryEngine, ShortestPathParams};
pub use shortest_path::{shortest_paths, ShortestPaths};
pub use spanning_tree::{minimum_spanning_tree, SpanningTree, TreeEdge};
