//! Minimum spanning tree (Prim, array scan, rooted at vertex 0).

use serde::Serialize;

use crate::graph::AdjacencyGraph;
use crate::types::{VertexId, Weight};

/// One edge of the spanning tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeEdge {
    /// Vertex already in the tree when `child` was attached.
    pub parent: VertexId,
    /// Vertex attached by this edge.
    pub child: VertexId,
    /// Weight of the attaching edge.
    pub weight: Weight,
}

/// Result of Prim's algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningTree {
    /// Tree edges ordered by child vertex.
    pub edges: Vec<TreeEdge>,
    /// Vertices (other than the root) no edge from the tree ever reached.
    pub unreached: Vec<VertexId>,
}

impl SpanningTree {
    /// Whether every vertex is attached to the tree.
    pub fn is_spanning(&self) -> bool {
        self.unreached.is_empty()
    }

    /// Sum of tree edge weights.
    pub fn total_weight(&self) -> u64 {
        self.edges.iter().map(|e| u64::from(e.weight)).sum()
    }
}

/// Prim's algorithm from vertex 0.
///
/// Follows outgoing edges only; a true MST needs a symmetric weight matrix,
/// which is not checked here. Vertices never offered a finite key end up
/// in [`SpanningTree::unreached`].
pub fn minimum_spanning_tree(graph: &AdjacencyGraph) -> SpanningTree {
    let n = graph.vertex_count();
    let mut key: Vec<Option<Weight>> = vec![None; n];
    let mut in_tree = vec![false; n];
    let mut parent: Vec<Option<VertexId>> = vec![None; n];
    key[0] = Some(0);

    for _ in 1..n {
        let Some(u) = cheapest_outside(&key, &in_tree) else {
            break;
        };
        in_tree[u] = true;
        log::trace!("added {} to tree", u);

        for edge in graph.edges_from(u) {
            let v = edge.target;
            if in_tree[v] {
                continue;
            }
            if key[v].map_or(true, |k| edge.weight < k) {
                parent[v] = Some(u);
                key[v] = Some(edge.weight);
            }
        }
    }

    let mut tree = SpanningTree {
        edges: Vec::with_capacity(n.saturating_sub(1)),
        unreached: Vec::new(),
    };
    for child in 1..n {
        match (parent[child], key[child]) {
            (Some(p), Some(weight)) => tree.edges.push(TreeEdge {
                parent: p,
                child,
                weight,
            }),
            _ => tree.unreached.push(child),
        }
    }

    if tree.is_spanning() {
        log::debug!("spanning tree weight {}", tree.total_weight());
    } else {
        log::warn!(
            "graph is disconnected from vertex 0: {} vertices unreached",
            tree.unreached.len()
        );
    }
    tree
}

/// Lowest-index vertex outside the tree with the minimum finite key.
fn cheapest_outside(key: &[Option<Weight>], in_tree: &[bool]) -> Option<VertexId> {
    let mut best: Option<(VertexId, Weight)> = None;
    for (v, k) in key.iter().enumerate() {
        let Some(k) = *k else { continue };
        if in_tree[v] {
            continue;
        }
        if best.map_or(true, |(_, b)| k < b) {
            best = Some((v, k));
        }
    }
    best.map(|(v, _)| v)
}
