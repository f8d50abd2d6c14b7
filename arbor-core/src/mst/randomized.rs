//! Randomized recursive contraction (Karger-Klein-Tarjan) driven by an
//! explicit work stack.
//!
//! Each subproblem runs two Boruvka rounds, samples the contracted graph,
//! solves the sample, discards edges that are heavy relative to the sampled
//! forest, and solves what is left. Whenever contraction stalls or the sample
//! collapses, the subproblem is handed to the greedy strategy instead.

use std::collections::HashMap;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, instrument, warn};

use crate::{
    forest::SpanningForest,
    graph::{Edge, Graph},
};

use super::{
    DisjointSet, HeavyEdgeFilter, MstAlgorithm, RANDOMIZED, WorkEdge,
    boruvka::{self, Contraction},
    greedy, heavy, lightest,
};

/// Counters describing one randomized run.
///
/// Returned alongside the forest by
/// [`RandomizedContraction::compute_with_stats`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub struct ContractionStats {
    /// Subproblems taken off the work stack.
    pub frames: usize,
    /// Boruvka rounds executed.
    pub boruvka_phases: usize,
    /// Subproblems solved greedily because a Boruvka round merged nothing.
    pub stall_fallbacks: usize,
    /// Subproblems solved greedily because sampling kept no edge.
    pub sampling_collapses: usize,
    /// Edges dropped by the heavy-edge filter.
    pub heavy_discarded: usize,
    /// Deepest subproblem reached; the top-level call has depth 0.
    pub max_depth: usize,
    /// Times the final forest had to be repaired before returning.
    pub repairs: usize,
}

/// Expected linear-time minimum spanning forest by random sampling.
///
/// Runs are reproducible: the same seed and graph always produce the same
/// forest. The default seed is [`RandomizedContraction::DEFAULT_SEED`].
///
/// # Examples
/// ```
/// use arbor_core::{Graph, HeavyEdgeFilter, MstAlgorithm, RandomizedContraction};
///
/// let graph = Graph::from_triples(
///     5,
///     [(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0), (3, 4, 4.0), (0, 4, 10.0)],
/// )?;
/// let strategy = RandomizedContraction::with_seed(11)
///     .with_heavy_edge_filter(HeavyEdgeFilter::ForestMaximum);
/// let (forest, stats) = strategy.compute_with_stats(&graph);
/// assert_eq!(forest.total_weight(), 10.0);
/// assert_eq!(stats.repairs, 0);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RandomizedContraction {
    seed: u64,
    filter: HeavyEdgeFilter,
}

impl RandomizedContraction {
    /// Seed used by [`RandomizedContraction::new`].
    pub const DEFAULT_SEED: u64 = 42;

    /// Creates a strategy with the default seed and path-maximum filtering.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_seed(Self::DEFAULT_SEED)
    }

    /// Creates a strategy that seeds its generator with `seed`.
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            filter: HeavyEdgeFilter::PathMaximum,
        }
    }

    /// Selects how F-heavy edges are detected.
    #[must_use]
    pub const fn with_heavy_edge_filter(mut self, filter: HeavyEdgeFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Seed of the internal generator.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> u64 { self.seed }

    /// Configured heavy-edge filter.
    #[must_use]
    #[rustfmt::skip]
    pub const fn heavy_edge_filter(&self) -> HeavyEdgeFilter { self.filter }

    /// Computes the forest with a generator seeded from [`Self::seed`].
    #[must_use]
    pub fn compute_with_stats(&self, graph: &Graph) -> (SpanningForest, ContractionStats) {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        self.compute_with_rng(graph, &mut rng)
    }

    /// Computes the forest drawing every sampling decision from `rng`.
    ///
    /// The configured seed is ignored.
    #[instrument(
        name = "core.randomized",
        skip(self, graph, rng),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    pub fn compute_with_rng<R: Rng + ?Sized>(
        &self,
        graph: &Graph,
        rng: &mut R,
    ) -> (SpanningForest, ContractionStats) {
        let mut stats = ContractionStats::default();
        let selected = Solver {
            filter: self.filter,
            rng,
            stats: &mut stats,
        }
        .run(graph.vertex_count(), WorkEdge::lift(graph));

        let mut edges: Vec<Edge> = selected
            .iter()
            .filter_map(|edge| graph.edges().get(edge.origin).map(|input| input.canonical()))
            .collect();

        let expected = graph.spanning_edge_count();
        if edges.len() != expected || !is_acyclic(graph.vertex_count(), &edges) {
            warn!(
                expected,
                actual = edges.len(),
                "randomized forest failed its post-check; repairing"
            );
            stats.repairs += 1;
            edges = repair(graph, edges, expected);
        }

        debug!(
            accepted = edges.len(),
            frames = stats.frames,
            boruvka_phases = stats.boruvka_phases,
            stall_fallbacks = stats.stall_fallbacks,
            sampling_collapses = stats.sampling_collapses,
            heavy_discarded = stats.heavy_discarded,
            max_depth = stats.max_depth,
            "randomized contraction completed"
        );
        (
            SpanningForest::from_acyclic(graph.vertex_count(), edges),
            stats,
        )
    }
}

impl Default for RandomizedContraction {
    fn default() -> Self {
        Self::new()
    }
}

impl MstAlgorithm for RandomizedContraction {
    fn name(&self) -> &'static str {
        RANDOMIZED
    }

    fn compute(&self, graph: &Graph) -> SpanningForest {
        self.compute_with_stats(graph).0
    }
}

/// Pending work. A subproblem that needs recursive answers is split into a
/// [`Frame::Solve`] for the child and a continuation frame that consumes the
/// child's result.
enum Frame {
    Solve {
        vertex_count: usize,
        edges: Vec<WorkEdge>,
        depth: usize,
    },
    /// Waits for the forest of the sampled graph, then filters `contracted`.
    Filter {
        kept: Vec<WorkEdge>,
        contracted: Vec<WorkEdge>,
        vertex_count: usize,
        depth: usize,
    },
    /// Waits for the forest of the filtered graph and prepends `kept`.
    Combine { kept: Vec<WorkEdge> },
}

/// Outcome of processing one [`Frame::Solve`].
enum Step {
    Done(Vec<WorkEdge>),
    Descend {
        continuation: Frame,
        child: Frame,
    },
}

struct Solver<'a, R: Rng + ?Sized> {
    filter: HeavyEdgeFilter,
    rng: &'a mut R,
    stats: &'a mut ContractionStats,
}

impl<R: Rng + ?Sized> Solver<'_, R> {
    fn run(&mut self, vertex_count: usize, edges: Vec<WorkEdge>) -> Vec<WorkEdge> {
        let mut stack = vec![Frame::Solve {
            vertex_count,
            edges,
            depth: 0,
        }];
        let mut returned: Vec<WorkEdge> = Vec::new();

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Solve {
                    vertex_count,
                    edges,
                    depth,
                } => match self.solve(vertex_count, edges, depth) {
                    Step::Done(forest) => returned = forest,
                    Step::Descend {
                        continuation,
                        child,
                    } => {
                        stack.push(continuation);
                        stack.push(child);
                    }
                },
                Frame::Filter {
                    mut kept,
                    contracted,
                    vertex_count,
                    depth,
                } => {
                    let sampled_forest = std::mem::take(&mut returned);
                    let forest = resolve(&sampled_forest, &contracted);
                    let (light, discarded) =
                        heavy::retain_light(self.filter, vertex_count, &forest, contracted);
                    self.stats.heavy_discarded += discarded;
                    if light.is_empty() {
                        kept.extend(forest);
                        returned = kept;
                    } else {
                        stack.push(Frame::Combine { kept });
                        stack.push(Frame::Solve {
                            vertex_count,
                            edges: light,
                            depth: depth + 1,
                        });
                    }
                }
                Frame::Combine { mut kept } => {
                    kept.append(&mut returned);
                    returned = kept;
                }
            }
        }
        returned
    }

    fn solve(&mut self, vertex_count: usize, edges: Vec<WorkEdge>, depth: usize) -> Step {
        self.stats.frames += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if vertex_count <= 1 || edges.is_empty() {
            return Step::Done(Vec::new());
        }
        if vertex_count == 2 {
            return Step::Done(lightest(&edges).into_iter().collect());
        }

        let first = self.phase(vertex_count, &edges);
        if first.supernode_count >= vertex_count {
            return Step::Done(self.stalled(vertex_count, &edges, depth, "first"));
        }
        let Contraction {
            accepted: mut kept,
            contracted,
            supernode_count: after_first,
            ..
        } = first;
        if after_first <= 2 {
            kept.extend(lightest(&contracted));
            return Step::Done(kept);
        }

        let second = self.phase(after_first, &contracted);
        if second.supernode_count >= after_first {
            return Step::Done(self.stalled(vertex_count, &edges, depth, "second"));
        }
        let Contraction {
            accepted,
            contracted,
            supernode_count: after_second,
            ..
        } = second;
        kept.extend(accepted);
        if after_second <= 2 {
            kept.extend(lightest(&contracted));
            return Step::Done(kept);
        }

        let probability = after_second as f64 / after_first as f64;
        let sample: Vec<WorkEdge> = contracted
            .iter()
            .copied()
            .filter(|_| self.rng.gen_bool(probability))
            .collect();
        if sample.is_empty() {
            self.stats.sampling_collapses += 1;
            debug!(
                depth,
                vertices = vertex_count,
                candidates = contracted.len(),
                probability,
                "sampling kept no edge; solving greedily"
            );
            return Step::Done(greedy::select(vertex_count, &edges));
        }

        Step::Descend {
            continuation: Frame::Filter {
                kept,
                contracted,
                vertex_count: after_second,
                depth,
            },
            child: Frame::Solve {
                vertex_count: after_second,
                edges: sample,
                depth: depth + 1,
            },
        }
    }

    fn phase(&mut self, vertex_count: usize, edges: &[WorkEdge]) -> Contraction {
        self.stats.boruvka_phases += 1;
        boruvka::contract(vertex_count, edges)
    }

    fn stalled(
        &mut self,
        vertex_count: usize,
        edges: &[WorkEdge],
        depth: usize,
        phase: &'static str,
    ) -> Vec<WorkEdge> {
        self.stats.stall_fallbacks += 1;
        debug!(
            depth,
            phase,
            vertices = vertex_count,
            edges = edges.len(),
            "boruvka round merged nothing; solving greedily"
        );
        greedy::select(vertex_count, edges)
    }
}

/// Re-expresses a child forest in the vertex space of `contracted`.
///
/// Child results may come from deeper contractions, so only their origins
/// are trusted. Each origin occurs at most once in `contracted`.
fn resolve(forest: &[WorkEdge], contracted: &[WorkEdge]) -> Vec<WorkEdge> {
    let by_origin: HashMap<usize, &WorkEdge> =
        contracted.iter().map(|edge| (edge.origin, edge)).collect();
    forest
        .iter()
        .filter_map(|edge| by_origin.get(&edge.origin).map(|&resolved| *resolved))
        .collect()
}

fn is_acyclic(vertex_count: usize, edges: &[Edge]) -> bool {
    let mut sets = DisjointSet::new(vertex_count);
    edges
        .iter()
        .all(|edge| sets.union(edge.source(), edge.target()))
}

/// Keeps the lightest acyclic prefix of `edges`, topping up from the greedy
/// strategy when that is still short of `expected`.
fn repair(graph: &Graph, mut edges: Vec<Edge>, expected: usize) -> Vec<Edge> {
    edges.sort_by(Edge::cmp_weight_then_endpoints);
    let mut sets = DisjointSet::new(graph.vertex_count());
    edges.retain(|edge| sets.union(edge.source(), edge.target()));
    edges.truncate(expected);
    if edges.len() == expected {
        return edges;
    }

    warn!(
        expected,
        actual = edges.len(),
        "repaired forest is incomplete; recomputing greedily"
    );
    greedy::select(graph.vertex_count(), &WorkEdge::lift(graph))
        .iter()
        .filter_map(|edge| graph.edges().get(edge.origin).map(|input| input.canonical()))
        .collect()
}
