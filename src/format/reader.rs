//! Reads weighted-matrix text files into an in-memory graph.

use std::io::Read;
use std::path::Path;

use crate::graph::AdjacencyGraph;
use crate::types::{GraphError, GraphResult, Weight, UNIT_WEIGHT};

use super::MatrixMode;

/// Reader for weighted-matrix text files.
pub struct MatrixReader;

impl MatrixReader {
    /// Read a matrix file into an AdjacencyGraph.
    pub fn read_from_file(path: &Path, mode: MatrixMode) -> GraphResult<AdjacencyGraph> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("loading {} ({:?})", path.display(), mode);
        Self::parse_str(&text, mode)
    }

    /// Read from any reader into an AdjacencyGraph.
    pub fn read_from(reader: &mut impl Read, mode: MatrixMode) -> GraphResult<AdjacencyGraph> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse_str(&text, mode)
    }

    /// Parse matrix text into an AdjacencyGraph.
    pub fn parse_str(text: &str, mode: MatrixMode) -> GraphResult<AdjacencyGraph> {
        let mut lines = text.lines();

        // Every non-whitespace character of the first line is a label
        let labels: Vec<String> = lines
            .next()
            .unwrap_or_default()
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(String::from)
            .collect();
        if labels.is_empty() {
            return Err(GraphError::parse(1, "missing vertex labels"));
        }

        let n = labels.len();
        let needed = n.checked_mul(n).ok_or_else(|| {
            GraphError::parse(1, format!("{} vertices is too many for a matrix", n))
        })?;
        // Grows with the tokens actually present, never with the label count
        let mut cells: Vec<i64> = Vec::new();
        let mut extra = 0usize;
        let mut last_line = 1usize;

        for (idx, line) in lines.enumerate() {
            let line_no = idx + 2;
            for token in line.split_whitespace() {
                last_line = line_no;
                if cells.len() == needed {
                    extra += 1;
                    continue;
                }
                let value: i64 = token.parse().map_err(|_| {
                    GraphError::parse(line_no, format!("expected an integer, found {:?}", token))
                })?;
                if mode == MatrixMode::Weighted && value < 0 {
                    return Err(GraphError::parse(
                        line_no,
                        format!("negative weight {}", value),
                    ));
                }
                cells.push(value);
            }
        }

        if cells.len() < needed {
            return Err(GraphError::parse(
                last_line,
                format!(
                    "expected {} matrix entries for {} vertices, found {}",
                    needed,
                    n,
                    cells.len()
                ),
            ));
        }
        if extra > 0 {
            log::debug!("ignoring {} trailing matrix entries", extra);
        }

        let mut graph = AdjacencyGraph::new(n, labels)?;
        for (cell, &value) in cells.iter().enumerate() {
            let (i, j) = (cell / n, cell % n);
            if let Some(weight) = edge_weight(value, mode, cell_line(cell, n))? {
                graph.add_edge(i, j, weight)?;
            }
        }

        log::debug!(
            "loaded {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

/// Line a cell would sit on in a one-row-per-line file; used for messages only.
fn cell_line(cell: usize, n: usize) -> usize {
    cell / n + 2
}

/// Interpret a matrix cell.
fn edge_weight(value: i64, mode: MatrixMode, line: usize) -> GraphResult<Option<Weight>> {
    match mode {
        MatrixMode::Unweighted => Ok((value == 1).then_some(UNIT_WEIGHT)),
        MatrixMode::Weighted if value == 0 => Ok(None),
        MatrixMode::Weighted => Weight::try_from(value)
            .map(Some)
            .map_err(|_| GraphError::parse(line, format!("weight {} out of range", value))),
    }
}
