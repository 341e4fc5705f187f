//! Single-source shortest paths (Dijkstra, array scan, no heap).

use serde::Serialize;

use crate::graph::AdjacencyGraph;
use crate::types::{Distance, GraphResult, VertexId};

/// Distances and predecessor links from one source vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    /// The source vertex.
    pub source: VertexId,
    /// Distance per vertex; `Infinite` when unreachable.
    pub distances: Vec<Distance>,
    /// Predecessor on the shortest path per vertex.
    pub parents: Vec<Option<VertexId>>,
}

impl ShortestPaths {
    /// Distance to `vertex` (`Infinite` for out-of-range ids).
    pub fn distance(&self, vertex: VertexId) -> Distance {
        self.distances
            .get(vertex)
            .copied()
            .unwrap_or(Distance::Infinite)
    }

    /// Whether a path from the source reaches `vertex`.
    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_finite()
    }

    /// Vertices along the shortest path, source first.
    pub fn path_to(&self, vertex: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(vertex) {
            return None;
        }
        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(parent) = self.parents[current] {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra from `source` in `O(V^2 + E)`.
///
/// Each round settles the unsettled vertex with the smallest finite
/// distance, lowest index first on ties. The scan stops after `V-1` rounds
/// or as soon as every remaining vertex is unreachable.
pub fn shortest_paths(graph: &AdjacencyGraph, source: VertexId) -> GraphResult<ShortestPaths> {
    graph.check_vertex(source)?;

    let n = graph.vertex_count();
    let mut dist = vec![Distance::Infinite; n];
    let mut settled = vec![false; n];
    let mut parent: Vec<Option<VertexId>> = vec![None; n];
    dist[source] = Distance::ZERO;

    for _ in 1..n {
        let Some(u) = closest_unsettled(&dist, &settled) else {
            break;
        };
        settled[u] = true;
        log::trace!("settled {} at distance {}", u, dist[u]);

        for edge in graph.edges_from(u) {
            let v = edge.target;
            if settled[v] {
                continue;
            }
            let candidate = dist[u].extend(edge.weight);
            if candidate < dist[v] {
                dist[v] = candidate;
                parent[v] = Some(u);
            }
        }
    }

    log::debug!(
        "shortest paths from {}: {} of {} vertices reachable",
        source,
        dist.iter().filter(|d| d.is_finite()).count(),
        n
    );

    Ok(ShortestPaths {
        source,
        distances: dist,
        parents: parent,
    })
}

/// Lowest-index unsettled vertex with the minimum finite distance.
fn closest_unsettled(dist: &[Distance], settled: &[bool]) -> Option<VertexId> {
    let mut best: Option<(VertexId, Distance)> = None;
    for (v, &d) in dist.iter().enumerate() {
        if settled[v] || !d.is_finite() {
            continue;
        }
        if best.map_or(true, |(_, b)| d < b) {
            best = Some((v, d));
        }
    }
    best.map(|(v, _)| v)
}
