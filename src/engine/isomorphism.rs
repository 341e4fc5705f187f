//! Brute-force graph isomorphism search.
//!
//! Every assignment of `V` target vertices to `V` slots is generated in
//! lexicographic order (`V^V` candidates, repeats allowed) and each complete
//! assignment is checked for injectivity and preserved adjacency. The cost
//! is `O(V^V * V^2)`: usable for a handful of vertices, hopeless beyond
//! that. There is no pruning or canonical labelling.

use serde::Serialize;

use crate::graph::AdjacencyGraph;
use crate::types::VertexId;

/// Result of an isomorphism search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IsomorphismOutcome {
    /// `mapping[i]` is the vertex of the second graph matched to vertex `i`
    /// of the first.
    pub mapping: Option<Vec<VertexId>>,
    /// Complete assignments validated before the search ended.
    pub candidates_checked: u64,
}

impl IsomorphismOutcome {
    /// Whether a mapping was found.
    pub fn is_isomorphic(&self) -> bool {
        self.mapping.is_some()
    }
}

/// Undirected adjacency as a dense `V x V` table.
struct AdjacencyTable {
    n: usize,
    cells: Vec<bool>,
}

impl AdjacencyTable {
    fn new(graph: &AdjacencyGraph) -> Self {
        let n = graph.vertex_count();
        let mut cells = vec![false; n * n];
        for edge in graph.edges() {
            cells[edge.source * n + edge.target] = true;
            cells[edge.target * n + edge.source] = true;
        }
        Self { n, cells }
    }

    fn connected(&self, a: VertexId, b: VertexId) -> bool {
        self.cells[a * self.n + b]
    }
}

struct Search<'a> {
    a: &'a AdjacencyTable,
    b: &'a AdjacencyTable,
    mapping: Vec<VertexId>,
    checked: u64,
}

impl Search<'_> {
    /// Fill `mapping[slot..]`; returns true once a valid mapping is in place.
    fn assign(&mut self, slot: usize) -> bool {
        let n = self.mapping.len();
        if slot == n {
            self.checked += 1;
            return self.is_valid();
        }
        for candidate in 0..n {
            self.mapping[slot] = candidate;
            if self.assign(slot + 1) {
                return true;
            }
        }
        false
    }

    fn is_valid(&self) -> bool {
        let m = &self.mapping;
        for i in 0..m.len() {
            for j in (i + 1)..m.len() {
                if m[i] == m[j] {
                    return false;
                }
                if self.a.connected(i, j) != self.b.connected(m[i], m[j]) {
                    return false;
                }
            }
        }
        true
    }
}

/// Find the lexicographically first adjacency-preserving bijection from
/// `a` onto `b`. Graphs of different sizes are rejected without searching.
pub fn find_isomorphism(a: &AdjacencyGraph, b: &AdjacencyGraph) -> IsomorphismOutcome {
    if a.vertex_count() != b.vertex_count() {
        log::debug!(
            "vertex counts differ ({} vs {}), no mapping possible",
            a.vertex_count(),
            b.vertex_count()
        );
        return IsomorphismOutcome {
            mapping: None,
            candidates_checked: 0,
        };
    }

    let table_a = AdjacencyTable::new(a);
    let table_b = AdjacencyTable::new(b);
    let mut search = Search {
        a: &table_a,
        b: &table_b,
        mapping: vec![0; a.vertex_count()],
        checked: 0,
    };

    let found = search.assign(0);
    log::debug!(
        "isomorphism search checked {} candidates, found: {}",
        search.checked,
        found
    );

    IsomorphismOutcome {
        mapping: found.then_some(search.mapping),
        candidates_checked: search.checked,
    }
}
