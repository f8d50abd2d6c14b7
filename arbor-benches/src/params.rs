//! Benchmark parameter types.

use std::fmt;

/// Shape of a synthetic benchmark graph.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of edges.
    pub edge_count: usize,
}

impl GraphBenchParams {
    /// Labels a graph shape.
    #[must_use]
    pub const fn new(vertex_count: usize, edge_count: usize) -> Self {
        Self {
            vertex_count,
            edge_count,
        }
    }
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.vertex_count, self.edge_count)
    }
}
