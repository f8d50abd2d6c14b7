//! Sequential Kruskal oracle for MST property verification.
//!
//! Deliberately independent of the crate's own disjoint-set so that a bug
//! there cannot hide behind a matching bug in the reference.

use std::cmp::Ordering;

use crate::graph::Edge;

use super::helpers::find_root;

/// Summary of the oracle's forest.
#[derive(Clone, Debug)]
pub(super) struct SequentialMstResult {
    /// Total weight of the forest.
    pub total_weight: f64,
    /// Number of forest edges.
    pub edge_count: usize,
    /// Connected components of the input.
    pub component_count: usize,
}

/// Computes a minimum spanning forest with textbook Kruskal.
pub(super) fn sequential_kruskal(vertex_count: usize, edges: &[Edge]) -> SequentialMstResult {
    let mut sorted: Vec<Edge> = edges
        .iter()
        .filter(|edge| !edge.is_self_loop())
        .map(|edge| edge.canonical())
        .collect();
    sorted.sort_unstable_by(cmp_by_weight);

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut rank = vec![0_u32; vertex_count];
    let mut components = vertex_count;
    let mut total_weight = 0.0;
    let mut edge_count = 0;

    for edge in &sorted {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left == right {
            continue;
        }
        union_by_rank(&mut parent, &mut rank, left, right);
        total_weight += edge.weight();
        edge_count += 1;
        components -= 1;
    }

    SequentialMstResult {
        total_weight,
        edge_count,
        component_count: components,
    }
}

fn cmp_by_weight(left: &Edge, right: &Edge) -> Ordering {
    left.weight()
        .total_cmp(&right.weight())
        .then_with(|| left.source().cmp(&right.source()))
        .then_with(|| left.target().cmp(&right.target()))
}

fn union_by_rank(parent: &mut [usize], rank: &mut [u32], left: usize, right: usize) {
    let (root, child) = match rank[left].cmp(&rank[right]) {
        Ordering::Less => (right, left),
        _ => (left, right),
    };
    parent[child] = root;
    if rank[root] == rank[child] {
        rank[root] += 1;
    }
}
