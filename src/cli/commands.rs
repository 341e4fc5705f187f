//! CLI command implementations.

use std::fmt::Write as _;
use std::path::Path;

use crate::engine::{
    ComponentParams, IsomorphismOutcome, IsomorphismParams, QueryEngine, ShortestPathParams,
    ShortestPaths, SpanningTree,
};
use crate::format::{MatrixMode, MatrixReader};
use crate::graph::{AdjacencyGraph, ComponentRule};
use crate::types::{GraphError, GraphResult, VertexId};

/// Print labels and adjacency lists of a graph file.
pub fn cmd_show(path: &Path, mode: MatrixMode, json: bool) -> GraphResult<()> {
    let graph = MatrixReader::read_from_file(path, mode)?;

    if json {
        let adjacency: Vec<serde_json::Value> = (0..graph.vertex_count())
            .map(|v| {
                let edges: Vec<serde_json::Value> = graph
                    .edges_from(v)
                    .map(|e| serde_json::json!({"target": label(&graph, e.target), "weight": e.weight}))
                    .collect();
                serde_json::json!({"vertex": label(&graph, v), "edges": edges})
            })
            .collect();
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "labels": graph.labels(),
            "adjacency": adjacency,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        print!("{}", render_graph("Graph", &graph));
    }
    Ok(())
}

/// Run Dijkstra and print the distance table.
pub fn cmd_dijkstra(
    path: &Path,
    source: Option<&str>,
    mode: MatrixMode,
    json: bool,
) -> GraphResult<()> {
    let graph = MatrixReader::read_from_file(path, mode)?;
    let source = match source {
        Some(spec) => resolve_vertex(&graph, spec)?,
        None => 0,
    };

    let result = QueryEngine::new().shortest_paths(&graph, ShortestPathParams { source })?;

    if json {
        let rows: Vec<serde_json::Value> = (0..graph.vertex_count())
            .map(|v| {
                let path: Option<Vec<&str>> = result
                    .path_to(v)
                    .map(|p| p.iter().map(|&u| label(&graph, u)).collect());
                serde_json::json!({
                    "vertex": label(&graph, v),
                    "distance": result.distance(v),
                    "path": path,
                })
            })
            .collect();
        let info = serde_json::json!({
            "source": label(&graph, source),
            "distances": rows,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        print!("{}", render_graph("Graph", &graph));
        println!();
        print!("{}", render_shortest_paths(&graph, &result));
    }
    Ok(())
}

/// Run Prim on a weighted matrix and print the tree.
pub fn cmd_prim(path: &Path, json: bool) -> GraphResult<()> {
    let graph = MatrixReader::read_from_file(path, MatrixMode::Weighted)?;
    let tree = QueryEngine::new().spanning_tree(&graph);

    if json {
        let edges: Vec<serde_json::Value> = tree
            .edges
            .iter()
            .map(|e| {
                serde_json::json!({
                    "from": label(&graph, e.parent),
                    "to": label(&graph, e.child),
                    "weight": e.weight,
                })
            })
            .collect();
        let unreached: Vec<&str> = tree.unreached.iter().map(|&v| label(&graph, v)).collect();
        let info = serde_json::json!({
            "spanning": tree.is_spanning(),
            "total_weight": tree.total_weight(),
            "edges": edges,
            "unreached": unreached,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Vertex labels: {}", graph.labels().join(" "));
        print!("{}", render_spanning_tree(&graph, &tree));
    }
    Ok(())
}

/// Count components in each graph file.
pub fn cmd_flood(paths: &[impl AsRef<Path>], rule: ComponentRule, json: bool) -> GraphResult<()> {
    // Load everything first so a bad file aborts before any output
    let graphs = paths
        .iter()
        .map(|p| MatrixReader::read_from_file(p.as_ref(), MatrixMode::Unweighted))
        .collect::<GraphResult<Vec<_>>>()?;
    let engine = QueryEngine::new();

    if json {
        let reports: Vec<serde_json::Value> = paths
            .iter()
            .zip(&graphs)
            .map(|(path, graph)| {
                let report = engine.components(graph, ComponentParams { rule });
                let roots: Vec<&str> = report.roots.iter().map(|&v| label(graph, v)).collect();
                serde_json::json!({
                    "file": path.as_ref().display().to_string(),
                    "components": report.count,
                    "roots": roots,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).unwrap_or_default()
        );
    } else {
        for (i, graph) in graphs.iter().enumerate() {
            println!("Graph {}:", i + 1);
            println!("Vertex labels: {}", graph.labels().join(" "));
        }
        println!();
        for (i, graph) in graphs.iter().enumerate() {
            let report = engine.components(graph, ComponentParams { rule });
            println!(
                "Number of connected components in Graph {}: {}",
                i + 1,
                report.count
            );
        }
    }
    Ok(())
}

/// Search for an isomorphism between two graph files.
pub fn cmd_iso(path_a: &Path, path_b: &Path, max_vertices: usize, json: bool) -> GraphResult<()> {
    let a = MatrixReader::read_from_file(path_a, MatrixMode::Unweighted)?;
    let b = MatrixReader::read_from_file(path_b, MatrixMode::Unweighted)?;

    let outcome = QueryEngine::new().isomorphism(&a, &b, IsomorphismParams { max_vertices })?;

    if json {
        let mapping: Option<Vec<serde_json::Value>> = outcome.mapping.as_ref().map(|m| {
            m.iter()
                .enumerate()
                .map(|(i, &j)| serde_json::json!({"from": label(&a, i), "to": label(&b, j)}))
                .collect()
        });
        let info = serde_json::json!({
            "isomorphic": outcome.is_isomorphic(),
            "candidates_checked": outcome.candidates_checked,
            "mapping": mapping,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        print!("{}", render_graph("Graph 1", &a));
        println!();
        print!("{}", render_graph("Graph 2", &b));
        println!();
        print!("{}", render_isomorphism(&a, &b, &outcome));
    }
    Ok(())
}

/// Parse a vertex given as an index or a label.
pub fn resolve_vertex(graph: &AdjacencyGraph, spec: &str) -> GraphResult<VertexId> {
    if let Ok(index) = spec.parse::<VertexId>() {
        if index < graph.vertex_count() {
            return Ok(index);
        }
        // A numeric label such as "7" may still match below
        if let Some(v) = graph.find_label(spec) {
            return Ok(v);
        }
        return Err(GraphError::OutOfRange {
            vertex: index,
            vertex_count: graph.vertex_count(),
        });
    }
    graph
        .find_label(spec)
        .ok_or_else(|| GraphError::InvalidArgument(format!("no vertex labelled {:?}", spec)))
}

/// Labels and adjacency lists, one vertex per line.
pub fn render_graph(title: &str, graph: &AdjacencyGraph) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}:", title);
    let _ = writeln!(out, "Vertex labels: {}", graph.labels().join(" "));
    for v in 0..graph.vertex_count() {
        let _ = write!(out, "Adjacencies of vertex {}: ", label(graph, v));
        for edge in graph.edges_from(v) {
            let _ = write!(out, "{} -> ", label(graph, edge.target));
        }
        let _ = writeln!(out, "NULL");
    }
    out
}

/// Distance table with reconstructed paths.
pub fn render_shortest_paths(graph: &AdjacencyGraph, result: &ShortestPaths) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Source: {}", label(graph, result.source));
    let _ = writeln!(out, "{:<8} {:<22} Path", "Vertex", "Distance from Source");
    for v in 0..graph.vertex_count() {
        let path = match result.path_to(v) {
            Some(p) => p
                .iter()
                .map(|&u| label(graph, u))
                .collect::<Vec<_>>()
                .join(" "),
            None => "-".to_string(),
        };
        let _ = writeln!(
            out,
            "{:<8} {:<22} {}",
            label(graph, v),
            result.distance(v).to_string(),
            path
        );
    }
    out
}

/// Tree edges, total weight, and any unreached vertices.
pub fn render_spanning_tree(graph: &AdjacencyGraph, tree: &SpanningTree) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Minimum Spanning Tree (MST) found by Prim's algorithm:");
    for edge in &tree.edges {
        let _ = writeln!(
            out,
            "Edge: {} - {}, Weight: {}",
            label(graph, edge.parent),
            label(graph, edge.child),
            edge.weight
        );
    }
    let _ = writeln!(out, "Total weight: {}", tree.total_weight());
    if !tree.is_spanning() {
        let unreached: Vec<&str> = tree.unreached.iter().map(|&v| label(graph, v)).collect();
        let _ = writeln!(
            out,
            "Graph is disconnected: no tree edge reaches {}",
            unreached.join(", ")
        );
    }
    out
}

/// The mapping found, or a notice that none exists.
pub fn render_isomorphism(
    a: &AdjacencyGraph,
    b: &AdjacencyGraph,
    outcome: &IsomorphismOutcome,
) -> String {
    let mut out = String::new();
    match &outcome.mapping {
        Some(mapping) => {
            let _ = writeln!(out, "Isomorphic mapping found:");
            for (i, &j) in mapping.iter().enumerate() {
                let _ = writeln!(out, "{} -> {}", label(a, i), label(b, j));
            }
        }
        None => {
            let _ = writeln!(out, "No isomorphic mapping found.");
        }
    }
    out
}

fn label(graph: &AdjacencyGraph, vertex: VertexId) -> &str {
    graph.label(vertex).unwrap_or("?")
}
