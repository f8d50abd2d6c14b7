//! One Boruvka round: every vertex proposes its lightest incident edge, the
//! proposals merge components, and the graph is contracted to supernodes.

use std::collections::{HashMap, hash_map::Entry};

use crate::graph::{Edge, Graph};

use super::{DisjointSet, WorkEdge};

/// Outcome of one Boruvka round over a [`Graph`].
///
/// `mapping[v]` is the supernode holding original vertex `v`. Supernode ids
/// are dense and numbered in order of their smallest member.
#[derive(Clone, Debug, PartialEq)]
pub struct BoruvkaPhase {
    accepted: Vec<Edge>,
    contracted: Vec<Edge>,
    mapping: Vec<usize>,
    supernode_count: usize,
}

impl BoruvkaPhase {
    /// Edges accepted by the round; each belongs to a minimum spanning forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn accepted(&self) -> &[Edge] { &self.accepted }

    /// Edges of the contracted graph, expressed over supernode ids.
    #[must_use]
    #[rustfmt::skip]
    pub fn contracted(&self) -> &[Edge] { &self.contracted }

    /// Original vertex to supernode mapping.
    #[must_use]
    #[rustfmt::skip]
    pub fn mapping(&self) -> &[usize] { &self.mapping }

    /// Number of supernodes in the contracted graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn supernode_count(&self) -> usize { self.supernode_count }

    /// Returns `true` when the round merged nothing.
    #[must_use]
    pub fn is_stalled(&self) -> bool {
        self.supernode_count == self.mapping.len()
    }
}

/// Runs a single Boruvka round over `graph`.
///
/// Ties between equally light incident edges go to the edge listed first.
/// The contracted graph has no self-loops and keeps only the lightest edge
/// between any pair of supernodes.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph, boruvka_phase};
///
/// let graph = Graph::from_triples(4, [(0, 1, 1.0), (1, 2, 5.0), (2, 3, 1.0), (0, 3, 7.0)])?;
/// let phase = boruvka_phase(&graph);
/// assert_eq!(phase.accepted(), &[Edge::new(0, 1, 1.0), Edge::new(2, 3, 1.0)]);
/// assert_eq!(phase.mapping(), &[0, 0, 1, 1]);
/// assert_eq!(phase.contracted(), &[Edge::new(0, 1, 5.0)]);
/// assert!(!phase.is_stalled());
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[must_use]
pub fn boruvka_phase(graph: &Graph) -> BoruvkaPhase {
    let edges = WorkEdge::lift(graph);
    let contraction = contract(graph.vertex_count(), &edges);
    let accepted = contraction
        .accepted
        .iter()
        .filter_map(|edge| graph.edges().get(edge.origin).copied())
        .collect();
    let contracted = contraction
        .contracted
        .iter()
        .map(|edge| Edge::new(edge.source, edge.target, edge.weight))
        .collect();
    BoruvkaPhase {
        accepted,
        contracted,
        mapping: contraction.mapping,
        supernode_count: contraction.supernode_count,
    }
}

/// Working form of [`BoruvkaPhase`] used by the randomized strategy.
#[derive(Debug)]
pub(crate) struct Contraction {
    pub(crate) accepted: Vec<WorkEdge>,
    pub(crate) contracted: Vec<WorkEdge>,
    pub(crate) mapping: Vec<usize>,
    pub(crate) supernode_count: usize,
}

pub(crate) fn contract(vertex_count: usize, edges: &[WorkEdge]) -> Contraction {
    let proposals = lightest_incident(vertex_count, edges);

    let mut sets = DisjointSet::new(vertex_count);
    let mut accepted = Vec::new();
    for proposal in proposals.into_iter().flatten() {
        let edge = edges[proposal];
        // Earlier merges can make a proposal stale.
        if sets.union(edge.source, edge.target) {
            accepted.push(edge);
        }
    }

    let (mapping, supernode_count) = relabel(&mut sets);
    let contracted = remap(edges, &mapping);

    Contraction {
        accepted,
        contracted,
        mapping,
        supernode_count,
    }
}

/// Position of each vertex's lightest incident edge, first-seen on ties.
fn lightest_incident(vertex_count: usize, edges: &[WorkEdge]) -> Vec<Option<usize>> {
    let mut lightest: Vec<Option<usize>> = vec![None; vertex_count];
    for (position, edge) in edges.iter().enumerate() {
        if edge.is_self_loop() {
            continue;
        }
        for endpoint in [edge.source, edge.target] {
            let slot = &mut lightest[endpoint];
            match *slot {
                Some(best) if edges[best].weight <= edge.weight => {}
                _ => *slot = Some(position),
            }
        }
    }
    lightest
}

fn relabel(sets: &mut DisjointSet) -> (Vec<usize>, usize) {
    let vertex_count = sets.len();
    let mut labels: Vec<Option<usize>> = vec![None; vertex_count];
    let mut mapping = Vec::with_capacity(vertex_count);
    let mut next = 0;
    for vertex in 0..vertex_count {
        let root = sets.find(vertex);
        let label = *labels[root].get_or_insert_with(|| {
            next += 1;
            next - 1
        });
        mapping.push(label);
    }
    (mapping, next)
}

fn remap(edges: &[WorkEdge], mapping: &[usize]) -> Vec<WorkEdge> {
    let mut contracted: Vec<WorkEdge> = Vec::new();
    let mut slots: HashMap<(usize, usize), usize> = HashMap::new();
    for edge in edges {
        let source = mapping[edge.source];
        let target = mapping[edge.target];
        if source == target {
            continue;
        }
        let key = (source.min(target), source.max(target));
        let lifted = WorkEdge {
            source,
            target,
            weight: edge.weight,
            origin: edge.origin,
        };
        match slots.entry(key) {
            Entry::Occupied(slot) => {
                let kept = &mut contracted[*slot.get()];
                if edge.weight < kept.weight {
                    *kept = lifted;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(contracted.len());
                contracted.push(lifted);
            }
        }
    }
    contracted
}
