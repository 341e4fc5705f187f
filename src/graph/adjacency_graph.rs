//! Core graph structure: labelled vertices + an edge arena with per-vertex adjacency.

use crate::types::{Edge, GraphError, GraphResult, VertexId, Weight};

/// Directed, weighted graph over dense vertex ids `0..V`.
///
/// Edges live in a single arena in insertion order. Each vertex keeps the
/// arena indices of its outgoing edges; [`edges_from`](Self::edges_from)
/// walks that list backwards so the most recently added edge comes first.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    /// Display label per vertex.
    labels: Vec<String>,
    /// All edges, in insertion order.
    edges: Vec<Edge>,
    /// Adjacency index: vertex -> arena indices of its outgoing edges.
    adjacency: Vec<Vec<usize>>,
}

impl AdjacencyGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize, labels: Vec<String>) -> GraphResult<Self> {
        if vertex_count == 0 {
            return Err(GraphError::InvalidArgument(
                "graph must have at least one vertex".to_string(),
            ));
        }
        if labels.len() != vertex_count {
            return Err(GraphError::InvalidArgument(format!(
                "expected {} labels, got {}",
                vertex_count,
                labels.len()
            )));
        }

        Ok(Self {
            labels,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
        })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All labels, indexed by vertex.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label of a vertex.
    pub fn label(&self, vertex: VertexId) -> Option<&str> {
        self.labels.get(vertex).map(String::as_str)
    }

    /// First vertex carrying this label.
    pub fn find_label(&self, label: &str) -> Option<VertexId> {
        self.labels.iter().position(|l| l == label)
    }

    /// Get all edges (insertion order).
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Add a directed edge. Self loops and parallel edges are kept.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId, weight: Weight) -> GraphResult<()> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;

        let index = self.edges.len();
        self.edges.push(Edge::new(source, target, weight));
        self.adjacency[source].push(index);
        Ok(())
    }

    /// Outgoing edges of `vertex`, most recently inserted first.
    ///
    /// An out-of-range vertex has no edges.
    pub fn edges_from(&self, vertex: VertexId) -> EdgesFrom<'_> {
        let indices = self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or_default();
        EdgesFrom {
            edges: &self.edges,
            indices: indices.iter().rev(),
        }
    }

    /// Number of outgoing edges of `vertex`.
    pub fn out_degree(&self, vertex: VertexId) -> usize {
        self.adjacency.get(vertex).map_or(0, Vec::len)
    }

    /// True iff some edge `a -> b` exists.
    pub fn neighbor_exists(&self, a: VertexId, b: VertexId) -> bool {
        self.edges_from(a).any(|e| e.target == b)
    }

    /// True iff `a` and `b` are joined by an edge in either direction.
    pub fn adjacent(&self, a: VertexId, b: VertexId) -> bool {
        self.neighbor_exists(a, b) || self.neighbor_exists(b, a)
    }

    /// Weight of the most recently added `a -> b` edge.
    pub fn edge_weight(&self, a: VertexId, b: VertexId) -> Option<Weight> {
        self.edges_from(a).find(|e| e.target == b).map(|e| e.weight)
    }

    /// Whether every edge `a -> b` has a reverse edge `b -> a` of equal weight.
    pub fn is_symmetric(&self) -> bool {
        self.edges.iter().all(|e| {
            self.edges_from(e.target)
                .any(|r| r.target == e.source && r.weight == e.weight)
        })
    }

    pub(crate) fn check_vertex(&self, vertex: VertexId) -> GraphResult<()> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }
}

/// Iterator over a vertex's outgoing edges, newest first.
///
/// Clones are independent cursors; call [`AdjacencyGraph::edges_from`] again
/// for a fresh pass.
#[derive(Debug, Clone)]
pub struct EdgesFrom<'a> {
    edges: &'a [Edge],
    indices: std::iter::Rev<std::slice::Iter<'a, usize>>,
}

impl<'a> Iterator for EdgesFrom<'a> {
    type Item = &'a Edge;

    fn next(&mut self) -> Option<Self::Item> {
        let edges = self.edges;
        self.indices.next().map(|&i| &edges[i])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl ExactSizeIterator for EdgesFrom<'_> {}

