//! Undirected weighted graph model shared by every MST strategy.
//!
//! Vertices are dense indices in `[0, vertex_count)`; there is no vertex
//! object. A [`Graph`] can only be obtained through [`Graph::new`], which
//! validates endpoints and weights once so the algorithms never have to.

use std::cmp::Ordering;

use crate::{error::GraphError, mst::DisjointSet};

/// A single undirected weighted edge.
///
/// `(u, v, w)` and `(v, u, w)` describe the same edge; use
/// [`Edge::canonical`] to obtain the `(min, max, w)` form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: f64,
}

impl Edge {
    /// Creates an edge between `source` and `target`.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::Edge;
    ///
    /// let edge = Edge::new(3, 1, 2.5);
    /// assert_eq!(edge.canonical(), Edge::new(1, 3, 2.5));
    /// ```
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint as provided.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint as provided.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Returns the edge with its endpoints ordered as `(min, max)`.
    #[must_use]
    pub const fn canonical(self) -> Self {
        if self.source <= self.target {
            self
        } else {
            Self {
                source: self.target,
                target: self.source,
                weight: self.weight,
            }
        }
    }

    /// Total order used when sorting edges: weight first, then canonical
    /// endpoints so equal-weight edges still compare deterministically.
    pub(crate) fn cmp_weight_then_endpoints(&self, other: &Self) -> Ordering {
        let left = self.canonical();
        let right = other.canonical();
        left.weight
            .total_cmp(&right.weight)
            .then_with(|| left.source.cmp(&right.source))
            .then_with(|| left.target.cmp(&right.target))
    }
}

impl From<(usize, usize, f64)> for Edge {
    fn from((source, target, weight): (usize, usize, f64)) -> Self {
        Self::new(source, target, weight)
    }
}

/// A validated undirected graph: a vertex count plus an edge list.
///
/// Self-loops and parallel edges are accepted. Every algorithm ignores
/// self-loops and resolves parallel edges by weight.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Builds a graph after checking every edge.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] when an endpoint is not below
    /// `vertex_count`, and [`GraphError::NonFiniteWeight`] when a weight is
    /// NaN or infinite.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Edge, Graph, GraphError};
    ///
    /// let graph = Graph::new(3, vec![Edge::new(0, 1, 2.0), Edge::new(1, 2, 3.0)])?;
    /// assert_eq!(graph.edge_count(), 2);
    ///
    /// let err = Graph::new(2, vec![Edge::new(0, 2, 1.0)]).unwrap_err();
    /// assert!(matches!(err, GraphError::InvalidVertex { vertex: 2, .. }));
    /// # Ok::<(), GraphError>(())
    /// ```
    pub fn new(vertex_count: usize, edges: Vec<Edge>) -> Result<Self, GraphError> {
        for (position, edge) in edges.iter().enumerate() {
            validate_edge(position, edge, vertex_count)?;
        }
        Ok(Self {
            vertex_count,
            edges,
        })
    }

    /// Builds a graph from `(u, v, w)` triples.
    ///
    /// # Errors
    /// Same conditions as [`Graph::new`].
    pub fn from_triples(
        vertex_count: usize,
        triples: impl IntoIterator<Item = (usize, usize, f64)>,
    ) -> Result<Self, GraphError> {
        Self::new(vertex_count, triples.into_iter().map(Edge::from).collect())
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the edges in input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of edges, self-loops included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Counts connected components with a single union-find pass.
    ///
    /// Isolated vertices each count as one component; an empty graph has
    /// zero components.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::Graph;
    ///
    /// let graph = Graph::from_triples(4, [(0, 1, 1.0)])?;
    /// assert_eq!(graph.component_count(), 3);
    /// # Ok::<(), arbor_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn component_count(&self) -> usize {
        let mut sets = DisjointSet::new(self.vertex_count);
        for edge in &self.edges {
            sets.union(edge.source, edge.target);
        }
        sets.component_count()
    }

    /// Returns the size of any minimum spanning forest of this graph.
    #[must_use]
    pub fn spanning_edge_count(&self) -> usize {
        self.vertex_count.saturating_sub(self.component_count())
    }
}

fn validate_edge(position: usize, edge: &Edge, vertex_count: usize) -> Result<(), GraphError> {
    for vertex in [edge.source, edge.target] {
        if vertex >= vertex_count {
            return Err(GraphError::InvalidVertex {
                edge: position,
                vertex,
                vertex_count,
            });
        }
    }
    if !edge.weight.is_finite() {
        return Err(GraphError::NonFiniteWeight {
            edge: position,
            left: edge.source,
            right: edge.target,
            weight: edge.weight,
        });
    }
    Ok(())
}
