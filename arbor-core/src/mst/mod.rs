//! Minimum spanning forest construction.
//!
//! Three interchangeable strategies implement [`MstAlgorithm`]:
//!
//! - [`Greedy`] sorts edges and merges components through a [`DisjointSet`].
//! - [`HeapGrowth`] grows one tree per component from a binary heap frontier.
//! - [`RandomizedContraction`] alternates Boruvka contraction, random
//!   sampling and heavy-edge filtering, falling back to the greedy strategy
//!   whenever contraction stalls.
//!
//! All strategies ignore self-loops, accept parallel edges, and return a
//! [`SpanningForest`] with `n - c` edges for an input with `c` components.

mod boruvka;
mod disjoint_set;
mod greedy;
mod heap_growth;
mod heavy;
mod randomized;

use crate::{forest::SpanningForest, graph::Graph};

pub use self::{
    boruvka::{BoruvkaPhase, boruvka_phase},
    disjoint_set::DisjointSet,
    greedy::Greedy,
    heap_growth::HeapGrowth,
    heavy::HeavyEdgeFilter,
    randomized::{ContractionStats, RandomizedContraction},
};

/// Name reported by [`Greedy`].
pub const GREEDY: &str = "greedy";
/// Name reported by [`HeapGrowth`].
pub const HEAP_GROWTH: &str = "heap-growth";
/// Name reported by [`RandomizedContraction`].
pub const RANDOMIZED: &str = "randomized";

/// A strategy that computes a minimum spanning forest.
///
/// # Examples
/// ```
/// use arbor_core::{Graph, Greedy, HeapGrowth, MstAlgorithm, RandomizedContraction};
///
/// let graph = Graph::from_triples(3, [(0, 1, 2.0), (1, 2, 3.0), (0, 2, 5.0)])?;
/// let strategies: Vec<Box<dyn MstAlgorithm>> = vec![
///     Box::new(Greedy),
///     Box::new(HeapGrowth),
///     Box::new(RandomizedContraction::with_seed(7)),
/// ];
/// for strategy in &strategies {
///     assert_eq!(strategy.compute(&graph).total_weight(), 5.0);
/// }
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
pub trait MstAlgorithm: Send + Sync {
    /// Stable identifier used in verification reports and logs.
    fn name(&self) -> &'static str;

    /// Computes a minimum spanning forest of `graph`.
    fn compute(&self, graph: &Graph) -> SpanningForest;
}

/// An edge flowing through the contraction pipeline.
///
/// Endpoints are expressed in the vertex space of the current subproblem,
/// while `origin` always points at the caller's input edge so results can be
/// reported in original coordinates however deep the contraction goes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct WorkEdge {
    pub(crate) source: usize,
    pub(crate) target: usize,
    pub(crate) weight: f64,
    pub(crate) origin: usize,
}

impl WorkEdge {
    /// Lifts the input edges of `graph`, dropping self-loops.
    pub(crate) fn lift(graph: &Graph) -> Vec<Self> {
        graph
            .edges()
            .iter()
            .enumerate()
            .filter(|(_, edge)| !edge.is_self_loop())
            .map(|(origin, edge)| Self {
                source: edge.source(),
                target: edge.target(),
                weight: edge.weight(),
                origin,
            })
            .collect()
    }

    pub(crate) const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Returns the lightest non-loop edge, first-seen on ties.
pub(crate) fn lightest(edges: &[WorkEdge]) -> Option<WorkEdge> {
    edges
        .iter()
        .filter(|edge| !edge.is_self_loop())
        .fold(None, |best: Option<WorkEdge>, edge| match best {
            Some(current) if current.weight <= edge.weight => Some(current),
            _ => Some(*edge),
        })
}


#[cfg(test)]
mod property;
