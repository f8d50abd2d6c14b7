//! Output type shared by every minimum spanning forest strategy.

use crate::graph::Edge;

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
/// Edges are reported in canonical `(min, max, weight)` form.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest {
    edges: Vec<Edge>,
    component_count: usize,
}

impl SpanningForest {
    /// Wraps `edges`, deriving the component count as `n - |edges|`.
    ///
    /// Callers guarantee the edges are acyclic over `vertex_count` vertices.
    pub(crate) fn from_acyclic(vertex_count: usize, edges: Vec<Edge>) -> Self {
        let edges: Vec<Edge> = edges.into_iter().map(Edge::canonical).collect();
        let component_count = vertex_count.saturating_sub(edges.len());
        Self {
            edges,
            component_count,
        }
    }

    /// Returns the forest edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Consumes the forest and returns its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }

    /// Returns the number of edges in the forest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the forest holds no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the number of trees in the forest, isolated vertices included.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Sums the edge weights.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Graph, Greedy, MstAlgorithm};
    ///
    /// let graph = Graph::from_triples(3, [(0, 1, 2.0), (1, 2, 3.0), (0, 2, 5.0)])?;
    /// let forest = Greedy.compute(&graph);
    /// assert_eq!(forest.total_weight(), 5.0);
    /// # Ok::<(), arbor_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(Edge::weight).sum()
    }
}
