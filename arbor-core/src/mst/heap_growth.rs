//! Heap-driven tree growth (Prim's algorithm) with per-component restarts.

use std::{cmp::Ordering, collections::BinaryHeap};

use tracing::{debug, instrument};

use crate::{forest::SpanningForest, graph::Graph};

use super::{HEAP_GROWTH, MstAlgorithm};

/// Prim's algorithm over adjacency lists and a binary-heap frontier.
///
/// Growth restarts at every unvisited vertex, so disconnected graphs yield a
/// spanning forest where each component of size `k` contributes `k - 1`
/// edges.
///
/// # Examples
/// ```
/// use arbor_core::{Graph, HeapGrowth, MstAlgorithm};
///
/// let graph = Graph::from_triples(4, [(0, 1, 1.0)])?;
/// let forest = HeapGrowth.compute(&graph);
/// assert_eq!(forest.len(), 1);
/// assert_eq!(forest.component_count(), 3);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HeapGrowth;

impl MstAlgorithm for HeapGrowth {
    fn name(&self) -> &'static str {
        HEAP_GROWTH
    }

    #[instrument(
        name = "core.heap_growth",
        skip(self, graph),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    fn compute(&self, graph: &Graph) -> SpanningForest {
        let adjacency = build_adjacency(graph);
        let mut visited = vec![false; graph.vertex_count()];
        let mut frontier = BinaryHeap::new();
        let mut pushes = 0_u64;
        let mut tree = Vec::with_capacity(graph.vertex_count().saturating_sub(1));
        let mut restarts = 0_usize;

        for start in 0..graph.vertex_count() {
            if visited[start] {
                continue;
            }
            restarts += 1;
            frontier.push(Frontier {
                weight: 0.0,
                vertex: start,
                via: None,
                order: pushes,
            });
            pushes += 1;

            while let Some(Frontier { vertex, via, .. }) = frontier.pop() {
                if visited[vertex] {
                    continue;
                }
                visited[vertex] = true;
                if let Some(edge) = via {
                    tree.push(edge);
                }
                for &(neighbour, edge) in &adjacency[vertex] {
                    if !visited[neighbour] {
                        frontier.push(Frontier {
                            weight: graph.edges()[edge].weight(),
                            vertex: neighbour,
                            via: Some(edge),
                            order: pushes,
                        });
                        pushes += 1;
                    }
                }
            }
        }

        debug!(trees = restarts, accepted = tree.len(), "heap growth completed");
        let forest = tree
            .into_iter()
            .filter_map(|edge| graph.edges().get(edge).copied())
            .collect();
        SpanningForest::from_acyclic(graph.vertex_count(), forest)
    }
}

/// `(neighbour, edge position)` lists, self-loops dropped.
fn build_adjacency(graph: &Graph) -> Vec<Vec<(usize, usize)>> {
    let mut adjacency = vec![Vec::new(); graph.vertex_count()];
    for (position, edge) in graph.edges().iter().enumerate() {
        if edge.is_self_loop() {
            continue;
        }
        adjacency[edge.source()].push((edge.target(), position));
        adjacency[edge.target()].push((edge.source(), position));
    }
    adjacency
}

/// Heap entry; `via` is `None` for the synthetic marker that starts a tree.
#[derive(Debug)]
struct Frontier {
    weight: f64,
    vertex: usize,
    via: Option<usize>,
    order: u64,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl Ord for Frontier {
    // Reversed so the max-heap pops the lightest entry, oldest first on ties.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
