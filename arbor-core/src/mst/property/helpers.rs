//! Helpers shared by the MST property modules.

use crate::{
    graph::Edge,
    mst::{Greedy, HeapGrowth, HeavyEdgeFilter, MstAlgorithm, RandomizedContraction},
};

/// Absolute tolerance for weight comparisons between strategies.
pub(super) const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Path-halving find over a plain parent array.
pub(super) fn find_root(parent: &mut [usize], mut vertex: usize) -> usize {
    while parent[vertex] != vertex {
        parent[vertex] = parent[parent[vertex]];
        vertex = parent[vertex];
    }
    vertex
}

/// Sum of edge weights.
pub(super) fn total_weight(edges: &[Edge]) -> f64 {
    edges.iter().map(|edge| edge.weight()).sum()
}

/// Every strategy under test, labelled for failure messages.
pub(super) fn strategies() -> Vec<(&'static str, Box<dyn MstAlgorithm>)> {
    vec![
        ("greedy", Box::new(Greedy)),
        ("heap-growth", Box::new(HeapGrowth)),
        ("randomized", Box::new(RandomizedContraction::new())),
        (
            "randomized/forest-maximum",
            Box::new(
                RandomizedContraction::with_seed(7)
                    .with_heavy_edge_filter(HeavyEdgeFilter::ForestMaximum),
            ),
        ),
    ]
}
