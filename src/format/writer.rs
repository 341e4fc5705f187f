//! Writes in-memory graphs back to weighted-matrix text.

use std::io::Write;
use std::path::Path;

use crate::graph::AdjacencyGraph;
use crate::types::GraphResult;

use super::MatrixMode;

/// Writer for weighted-matrix text files.
pub struct MatrixWriter;

impl MatrixWriter {
    /// Write a graph to a matrix file.
    pub fn write_to_file(graph: &AdjacencyGraph, path: &Path, mode: MatrixMode) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(graph, &mut writer, mode)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a graph to any writer.
    ///
    /// Each cell holds the weight of the newest `i -> j` edge (or 1 in
    /// unweighted mode). Parallel edges collapse into that single cell.
    pub fn write_to(
        graph: &AdjacencyGraph,
        writer: &mut impl Write,
        mode: MatrixMode,
    ) -> GraphResult<()> {
        writeln!(writer, "{}", graph.labels().join(" "))?;

        let n = graph.vertex_count();
        for i in 0..n {
            let row: Vec<String> = (0..n)
                .map(|j| match (graph.edge_weight(i, j), mode) {
                    (None, _) => 0,
                    (Some(_), MatrixMode::Unweighted) => 1,
                    (Some(w), MatrixMode::Weighted) => w,
                })
                .map(|cell| cell.to_string())
                .collect();
            writeln!(writer, "{}", row.join(" "))?;
        }
        Ok(())
    }

    /// Render a graph as matrix text.
    pub fn to_string(graph: &AdjacencyGraph, mode: MatrixMode) -> GraphResult<String> {
        let mut buf = Vec::new();
        Self::write_to(graph, &mut buf, mode)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
