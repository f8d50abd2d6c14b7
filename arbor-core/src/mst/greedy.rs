//! Sort-based greedy minimum spanning forest (Kruskal's algorithm).
//!
//! Also serves as the fallback of the randomized strategy, which is why the
//! selection routine works on [`WorkEdge`] slices rather than on a [`Graph`].

use tracing::{debug, instrument};

use crate::{forest::SpanningForest, graph::Graph};

use super::{DisjointSet, GREEDY, MstAlgorithm, WorkEdge};

/// Kruskal's algorithm: stable sort by weight, then union-test every edge.
///
/// Equal-weight edges are considered in input order. The scan stops as soon
/// as `n - 1` edges are accepted; on a disconnected graph it runs to the end
/// and yields a forest.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph, Greedy, MstAlgorithm};
///
/// let graph = Graph::from_triples(3, [(0, 1, 2.0), (1, 2, 3.0), (0, 2, 5.0)])?;
/// let forest = Greedy.compute(&graph);
/// assert_eq!(forest.edges(), &[Edge::new(0, 1, 2.0), Edge::new(1, 2, 3.0)]);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Greedy;

impl MstAlgorithm for Greedy {
    fn name(&self) -> &'static str {
        GREEDY
    }

    #[instrument(
        name = "core.greedy",
        skip(self, graph),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    fn compute(&self, graph: &Graph) -> SpanningForest {
        let edges = WorkEdge::lift(graph);
        let accepted = select(graph.vertex_count(), &edges);
        debug!(accepted = accepted.len(), "greedy selection completed");
        let forest = accepted
            .into_iter()
            .filter_map(|edge| graph.edges().get(edge.origin).copied())
            .collect();
        SpanningForest::from_acyclic(graph.vertex_count(), forest)
    }
}

/// Returns the greedy forest over `edges`, in acceptance order.
pub(crate) fn select(vertex_count: usize, edges: &[WorkEdge]) -> Vec<WorkEdge> {
    let mut order: Vec<&WorkEdge> = edges.iter().filter(|edge| !edge.is_self_loop()).collect();
    order.sort_by(|left, right| left.weight.total_cmp(&right.weight));

    let limit = vertex_count.saturating_sub(1);
    let mut sets = DisjointSet::new(vertex_count);
    let mut accepted = Vec::with_capacity(limit);
    for edge in order {
        if accepted.len() == limit {
            break;
        }
        if sets.union(edge.source, edge.target) {
            accepted.push(*edge);
        }
    }
    accepted
}
