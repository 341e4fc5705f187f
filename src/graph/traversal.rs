//! Flood fill (depth-first reachability) and connected-component counting.

use serde::Serialize;

use crate::types::{GraphError, GraphResult, VertexId};

use super::AdjacencyGraph;

/// Which vertices may start a new component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentRule {
    /// Only vertices with at least one outgoing edge start a component;
    /// isolated vertices are never counted.
    #[default]
    SkipIsolated,
    /// Every unvisited vertex starts a component, isolated ones included.
    IncludeIsolated,
}

/// Outcome of a component scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentReport {
    /// Number of components found.
    pub count: usize,
    /// Root vertex of each component, in discovery order.
    pub roots: Vec<VertexId>,
    /// Component index per vertex; `None` for vertices never visited.
    pub membership: Vec<Option<usize>>,
    /// Vertices of each component, in the order the flood reached them.
    pub members: Vec<Vec<VertexId>>,
}

/// Mark every vertex reachable from `start`, depth first.
///
/// Neighbours are explored in [`AdjacencyGraph::edges_from`] order and the
/// marking order matches a recursive DFS exactly. `visited` is owned by the
/// caller, holds one slot per vertex and may carry marks from earlier
/// floods; already-marked vertices are not re-entered. Returns the newly
/// marked vertices in visit order, or `InvalidArgument` when `visited` does
/// not hold exactly one slot per vertex.
pub fn flood(
    graph: &AdjacencyGraph,
    start: VertexId,
    visited: &mut [bool],
) -> GraphResult<Vec<VertexId>> {
    if visited.len() != graph.vertex_count() {
        return Err(GraphError::InvalidArgument(format!(
            "visited has {} slots for a graph with {} vertices",
            visited.len(),
            graph.vertex_count()
        )));
    }
    Ok(fill(graph, start, visited))
}

/// Flood body; `visited` is already known to match the graph.
fn fill(graph: &AdjacencyGraph, start: VertexId, visited: &mut [bool]) -> Vec<VertexId> {
    let mut order = Vec::new();
    if start >= graph.vertex_count() || visited[start] {
        return order;
    }

    visited[start] = true;
    order.push(start);
    let mut stack = vec![graph.edges_from(start)];

    while let Some(edges) = stack.last_mut() {
        match edges.next() {
            Some(edge) => {
                let next = edge.target;
                if !visited[next] {
                    visited[next] = true;
                    order.push(next);
                    stack.push(graph.edges_from(next));
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    order
}

/// Count components by flooding from each unvisited vertex that has
/// outgoing edges, scanning vertices in ascending order.
pub fn count_components(graph: &AdjacencyGraph) -> usize {
    connected_components(graph, ComponentRule::SkipIsolated).count
}

/// Scan all vertices and flood from every eligible unvisited root.
pub fn connected_components(graph: &AdjacencyGraph, rule: ComponentRule) -> ComponentReport {
    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    let mut report = ComponentReport {
        count: 0,
        roots: Vec::new(),
        membership: vec![None; n],
        members: Vec::new(),
    };

    for v in 0..n {
        if visited[v] {
            continue;
        }
        if rule == ComponentRule::SkipIsolated && graph.out_degree(v) == 0 {
            continue;
        }

        let component = report.count;
        let reached = fill(graph, v, &mut visited);
        for &u in &reached {
            report.membership[u] = Some(component);
        }
        log::trace!("component {} rooted at {} has {} vertices", component, v, reached.len());

        report.count += 1;
        report.roots.push(v);
        report.members.push(reached);
    }

    log::debug!("found {} components ({:?})", report.count, rule);
    report
}
