//! Phase 3 tests: CLI commands, rendering and settings.

use std::io::Write;
use std::process::{Command, Output};

use classic_graphs::cli::commands::{
    cmd_dijkstra, cmd_flood, cmd_iso, cmd_prim, cmd_show, render_graph, render_isomorphism,
    render_shortest_paths, render_spanning_tree, resolve_vertex,
};
use classic_graphs::cli::config::ceiling_from;
use classic_graphs::engine::{find_isomorphism, minimum_spanning_tree, shortest_paths};
use classic_graphs::format::{MatrixMode, MatrixReader};
use classic_graphs::graph::{AdjacencyGraph, ComponentRule, GraphBuilder};
use classic_graphs::types::{GraphError, DEFAULT_MAX_ISO_VERTICES};

use tempfile::NamedTempFile;

// ==================== Helpers ====================

const PATH_ABC: &str = "A B C\n0 1 0\n0 0 1\n0 0 0\n";

fn path_abc() -> AdjacencyGraph {
    MatrixReader::parse_str(PATH_ABC, MatrixMode::Unweighted).unwrap()
}

fn matrix_file(text: &str) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(text.as_bytes()).unwrap();
    tmp.flush().unwrap();
    tmp
}

fn fields(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Run the `cgraph` CLI with the given arguments and return the output.
fn run_cgraph(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cgraph"))
        .args(args)
        .output()
        .expect("Failed to run cgraph")
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "cgraph failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

// ==================== Rendering Tests ====================

#[test]
fn test_render_graph() {
    let text = render_graph("Graph", &path_abc());
    assert_eq!(
        text,
        "Graph:\n\
         Vertex labels: A B C\n\
         Adjacencies of vertex A: B -> NULL\n\
         Adjacencies of vertex B: C -> NULL\n\
         Adjacencies of vertex C: NULL\n"
    );
}

#[test]
fn test_render_graph_lifo_order() {
    let g = MatrixReader::parse_str("A B C\n0 1 1\n0 0 0\n0 0 0\n", MatrixMode::Unweighted)
        .unwrap();
    let text = render_graph("Graph 1", &g);
    assert!(text.starts_with("Graph 1:\n"));
    assert!(text.contains("Adjacencies of vertex A: C -> B -> NULL\n"));
}

#[test]
fn test_render_shortest_paths() {
    let g = path_abc();
    let text = render_shortest_paths(&g, &shortest_paths(&g, 1).unwrap());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Source: B");
    assert_eq!(fields(lines[2]), vec!["A", "inf", "-"]);
    assert_eq!(fields(lines[3]), vec!["B", "0", "B"]);
    assert_eq!(fields(lines[4]), vec!["C", "1", "B", "C"]);
}

#[test]
fn test_render_spanning_tree() {
    let g = path_abc();
    let text = render_spanning_tree(&g, &minimum_spanning_tree(&g));
    assert!(text.contains("Edge: A - B, Weight: 1\n"));
    assert!(text.contains("Edge: B - C, Weight: 1\n"));
    assert!(text.contains("Total weight: 2\n"));
    assert!(!text.contains("disconnected"));
}

#[test]
fn test_render_disconnected_tree() {
    let g = GraphBuilder::new(["A", "B", "C", "D"])
        .undirected_edge(0, 1, 3)
        .build()
        .unwrap();
    let text = render_spanning_tree(&g, &minimum_spanning_tree(&g));
    assert!(text.contains("Graph is disconnected: no tree edge reaches C, D\n"));
}

#[test]
fn test_render_isomorphism() {
    let a = path_abc();
    let b = MatrixReader::parse_str("X Y Z\n0 0 0\n1 0 0\n0 1 0\n", MatrixMode::Unweighted)
        .unwrap();
    let text = render_isomorphism(&a, &b, &find_isomorphism(&a, &b));
    assert_eq!(text, "Isomorphic mapping found:\nA -> X\nB -> Y\nC -> Z\n");

    let single = GraphBuilder::new(["Q"]).build().unwrap();
    let text = render_isomorphism(&a, &single, &find_isomorphism(&a, &single));
    assert_eq!(text, "No isomorphic mapping found.\n");
}

// ==================== Vertex Resolution Tests ====================

#[test]
fn test_resolve_vertex() {
    let g = path_abc();
    assert_eq!(resolve_vertex(&g, "1").unwrap(), 1);
    assert_eq!(resolve_vertex(&g, "C").unwrap(), 2);
    assert!(matches!(
        resolve_vertex(&g, "9"),
        Err(GraphError::OutOfRange { vertex: 9, .. })
    ));
    assert!(matches!(
        resolve_vertex(&g, "Z"),
        Err(GraphError::InvalidArgument(_))
    ));
}

#[test]
fn test_resolve_numeric_label() {
    let g = GraphBuilder::new(["x", "y", "7"]).build().unwrap();
    assert_eq!(resolve_vertex(&g, "7").unwrap(), 2);
    assert_eq!(resolve_vertex(&g, "0").unwrap(), 0);
}

// ==================== Config Tests ====================

#[test]
fn test_iso_ceiling_priority() {
    assert_eq!(ceiling_from(Some(3), Some("5".to_string())), 3);
    assert_eq!(ceiling_from(None, Some(" 5 ".to_string())), 5);
    assert_eq!(
        ceiling_from(None, Some("lots".to_string())),
        DEFAULT_MAX_ISO_VERTICES
    );
    assert_eq!(ceiling_from(None, None), DEFAULT_MAX_ISO_VERTICES);
}

// ==================== Command Tests ====================

#[test]
fn test_commands_on_files() {
    let file = matrix_file(PATH_ABC);
    let path = file.path();

    cmd_show(path, MatrixMode::Unweighted, false).unwrap();
    cmd_show(path, MatrixMode::Weighted, true).unwrap();
    cmd_dijkstra(path, None, MatrixMode::Unweighted, false).unwrap();
    cmd_dijkstra(path, Some("B"), MatrixMode::Unweighted, true).unwrap();
    cmd_prim(path, false).unwrap();
    cmd_prim(path, true).unwrap();
    cmd_flood(&[path, path], ComponentRule::SkipIsolated, false).unwrap();
    cmd_flood(&[path], ComponentRule::IncludeIsolated, true).unwrap();
    cmd_iso(path, path, DEFAULT_MAX_ISO_VERTICES, false).unwrap();
    cmd_iso(path, path, DEFAULT_MAX_ISO_VERTICES, true).unwrap();
}

#[test]
fn test_command_errors() {
    let missing = std::path::Path::new("/nonexistent/graph.txt");
    assert!(matches!(
        cmd_show(missing, MatrixMode::Unweighted, false),
        Err(GraphError::Io(_))
    ));

    let bad = matrix_file("A B\n0 1\n");
    assert!(matches!(cmd_prim(bad.path(), false), Err(GraphError::Parse { .. })));

    // A bad second file aborts before anything is counted
    let good = matrix_file(PATH_ABC);
    assert!(cmd_flood(&[good.path(), bad.path()], ComponentRule::SkipIsolated, false).is_err());

    assert!(matches!(
        cmd_dijkstra(good.path(), Some("Q"), MatrixMode::Unweighted, false),
        Err(GraphError::InvalidArgument(_))
    ));

    assert!(matches!(
        cmd_iso(good.path(), good.path(), 2, false),
        Err(GraphError::SearchTooLarge { vertices: 3, max: 2 })
    ));
}

// ==================== Binary Tests ====================

#[test]
fn test_cli_dijkstra_default_source() {
    let file = matrix_file(PATH_ABC);
    let output = run_cgraph(&["dijkstra", file.path().to_str().unwrap()]);
    assert_success(&output);

    let out = stdout_str(&output);
    assert!(out.contains("Source: A"));
    let row = out.lines().find(|l| l.starts_with("C ")).unwrap();
    assert_eq!(fields(row), vec!["C", "2", "A", "B", "C"]);
}

#[test]
fn test_cli_flood_two_files() {
    let a = matrix_file(PATH_ABC);
    let b = matrix_file("A B C D\n0 1 0 0\n1 0 0 0\n0 0 0 1\n0 0 1 0\n");
    let output = run_cgraph(&[
        "flood",
        a.path().to_str().unwrap(),
        b.path().to_str().unwrap(),
    ]);
    assert_success(&output);

    let out = stdout_str(&output);
    assert!(out.contains("Number of connected components in Graph 1: 1"));
    assert!(out.contains("Number of connected components in Graph 2: 2"));
}

#[test]
fn test_cli_iso_json() {
    let file = matrix_file(PATH_ABC);
    let path = file.path().to_str().unwrap();
    let output = run_cgraph(&["--format", "json", "iso", path, path]);
    assert_success(&output);

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["isomorphic"], serde_json::json!(true));
    assert_eq!(value["mapping"][1]["to"], serde_json::json!("B"));
}

#[test]
fn test_cli_missing_file_exits_one() {
    let output = run_cgraph(&["prim", "/nonexistent/graph.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: "));
}

#[test]
fn test_cli_usage_error_exits_one() {
    let output = run_cgraph(&["iso", "only-one-file.txt"]);
    assert_eq!(output.status.code(), Some(1));

    let file = matrix_file(PATH_ABC);
    let output = run_cgraph(&["--format", "jsno", "show", file.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let output = run_cgraph(&["--format", "text", "show", file.path().to_str().unwrap()]);
    assert_success(&output);

    let output = run_cgraph(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
}
