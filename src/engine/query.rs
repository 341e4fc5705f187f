//! Query executor: one entry point per algorithm.

use crate::graph::traversal::{connected_components, ComponentReport, ComponentRule};
use crate::graph::AdjacencyGraph;
use crate::types::{GraphError, GraphResult, VertexId, DEFAULT_MAX_ISO_VERTICES};

use super::isomorphism::{find_isomorphism, IsomorphismOutcome};
use super::shortest_path::{shortest_paths, ShortestPaths};
use super::spanning_tree::{minimum_spanning_tree, SpanningTree};

/// Parameters for a shortest-path query.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestPathParams {
    /// Source vertex.
    pub source: VertexId,
}

/// Parameters for a component query.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentParams {
    /// Which vertices may root a component.
    pub rule: ComponentRule,
}

/// Parameters for an isomorphism query.
#[derive(Debug, Clone, Copy)]
pub struct IsomorphismParams {
    /// Largest vertex count the brute-force search will accept.
    pub max_vertices: usize,
}

impl Default for IsomorphismParams {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_ISO_VERTICES,
        }
    }
}

/// The query engine runs every algorithm against a borrowed graph.
///
/// It holds no state; each call owns its working arrays.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryEngine;

impl QueryEngine {
    /// Create a new query engine.
    pub fn new() -> Self {
        Self
    }

    /// Dijkstra from `params.source`.
    pub fn shortest_paths(
        &self,
        graph: &AdjacencyGraph,
        params: ShortestPathParams,
    ) -> GraphResult<ShortestPaths> {
        shortest_paths(graph, params.source)
    }

    /// Prim from vertex 0.
    pub fn spanning_tree(&self, graph: &AdjacencyGraph) -> SpanningTree {
        if !graph.is_symmetric() {
            log::warn!("weight matrix is not symmetric; the tree follows outgoing edges only");
        }
        minimum_spanning_tree(graph)
    }

    /// Flood-fill component scan.
    pub fn components(&self, graph: &AdjacencyGraph, params: ComponentParams) -> ComponentReport {
        connected_components(graph, params.rule)
    }

    /// Brute-force isomorphism search, refused above `params.max_vertices`.
    ///
    /// Graphs of different sizes return no mapping before the ceiling is
    /// consulted.
    pub fn isomorphism(
        &self,
        a: &AdjacencyGraph,
        b: &AdjacencyGraph,
        params: IsomorphismParams,
    ) -> GraphResult<IsomorphismOutcome> {
        let vertices = a.vertex_count();
        if vertices == b.vertex_count() && vertices > params.max_vertices {
            return Err(GraphError::SearchTooLarge {
                vertices,
                max: params.max_vertices,
            });
        }
        Ok(find_isomorphism(a, b))
    }
}
