//! Fluent API for building AdjacencyGraph instances.

use crate::types::{Edge, GraphResult, VertexId, Weight};

use super::AdjacencyGraph;

/// Fluent builder for constructing an AdjacencyGraph.
///
/// Edges are validated in [`build`](Self::build), so a half-valid builder
/// never turns into a half-populated graph.
pub struct GraphBuilder {
    labels: Vec<String>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Create a builder for the given vertex labels.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            edges: Vec::new(),
        }
    }

    /// Create a builder with `count` vertices labelled by their index.
    pub fn with_vertices(count: usize) -> Self {
        Self::new((0..count).map(|i| i.to_string()))
    }

    /// Add a directed edge.
    pub fn edge(mut self, source: VertexId, target: VertexId, weight: Weight) -> Self {
        self.edges.push(Edge::new(source, target, weight));
        self
    }

    /// Add `source -> target` followed by `target -> source`.
    pub fn undirected_edge(self, a: VertexId, b: VertexId, weight: Weight) -> Self {
        self.edge(a, b, weight).edge(b, a, weight)
    }

    /// Number of vertices declared so far.
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Build the final AdjacencyGraph.
    pub fn build(self) -> GraphResult<AdjacencyGraph> {
        let mut graph = AdjacencyGraph::new(self.labels.len(), self.labels)?;
        for edge in self.edges {
            graph.add_edge(edge.source, edge.target, edge.weight)?;
        }
        Ok(graph)
    }
}
