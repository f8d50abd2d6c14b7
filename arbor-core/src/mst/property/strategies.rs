//! Graph generators for the MST property suite.
//!
//! Each generator draws from a [`SmallRng`] seeded by proptest, so a
//! shrunk failure reproduces from its seed alone.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::Edge;

use super::types::{MstFixture, WeightDistribution};

const MIN_VERTICES: usize = 8;
const MAX_VERTICES: usize = 64;
/// Dense graphs stay small to avoid quadratic edge counts.
const DENSE_MAX_VERTICES: usize = 32;

/// Fixtures over every distribution, biased towards tied weights and
/// multigraphs.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for one distribution; used by the rstest cases.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let (vertex_count, edges) = match distribution {
        WeightDistribution::Unique => {
            probabilistic(rng, MAX_VERTICES, (0.2, 0.6), continuous_weight)
        }
        WeightDistribution::ManyIdentical => {
            let pool: Vec<f64> = (0..rng.gen_range(1..=3))
                .map(|_| f64::from(rng.gen_range(1_u8..=10)))
                .collect();
            probabilistic(rng, MAX_VERTICES, (0.3, 0.7), move |r| {
                pool[r.gen_range(0..pool.len())]
            })
        }
        WeightDistribution::Sparse => sparse(rng),
        WeightDistribution::Dense => {
            probabilistic(rng, DENSE_MAX_VERTICES, (0.7, 0.95), continuous_weight)
        }
        WeightDistribution::Disconnected => disconnected(rng),
        WeightDistribution::Multigraph => multigraph(rng),
    };
    MstFixture {
        vertex_count,
        edges,
        distribution,
    }
}

fn continuous_weight(rng: &mut SmallRng) -> f64 {
    rng.gen_range(0.1..100.0)
}

/// Adds each unordered pair with a probability drawn from `probability`.
fn probabilistic(
    rng: &mut SmallRng,
    max_vertices: usize,
    probability: (f64, f64),
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> (usize, Vec<Edge>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let edge_probability = rng.gen_range(probability.0..=probability.1);
    let mut edges = Vec::new();
    for left in 0..vertex_count {
        for right in (left + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                let w = weight(rng);
                edges.push(oriented(rng, left, right, w));
            }
        }
    }
    if edges.is_empty() {
        edges.push(Edge::new(0, 1, weight(rng)));
    }
    (vertex_count, edges)
}

/// Random spanning path over a shuffled vertex order plus extra chords.
fn sparse(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let order = shuffled(vertex_count, rng);
    let mut edges: Vec<Edge> = order
        .windows(2)
        .map(|pair| Edge::new(pair[0], pair[1], continuous_weight(rng)))
        .collect();

    for _ in 0..rng.gen_range(vertex_count / 2..=vertex_count) {
        let left = rng.gen_range(0..vertex_count);
        let right = rng.gen_range(0..vertex_count);
        if left != right {
            edges.push(Edge::new(left, right, continuous_weight(rng)));
        }
    }
    (vertex_count, edges)
}

/// Two to five blocks without cross edges. Blocks of size one are isolated
/// vertices, which make contraction stall.
fn disconnected(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(1..=12))
        .collect();
    let mut edges = Vec::new();
    let mut offset = 0;
    for size in sizes {
        let before = edges.len();
        let probability = rng.gen_range(0.3..=0.8);
        for left in offset..offset + size {
            for right in (left + 1)..offset + size {
                if rng.gen_bool(probability) {
                    edges.push(Edge::new(left, right, continuous_weight(rng)));
                }
            }
        }
        if size >= 2 && edges.len() == before {
            edges.push(Edge::new(offset, offset + 1, continuous_weight(rng)));
        }
        offset += size;
    }
    (offset, edges)
}

/// Connected base path, then parallel copies of existing edges (reversed,
/// sometimes with the same weight) and self-loops. Weights may be negative.
fn multigraph(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES / 2);
    let mut edges: Vec<Edge> = (1..vertex_count)
        .map(|vertex| Edge::new(rng.gen_range(0..vertex), vertex, signed_weight(rng)))
        .collect();

    for _ in 0..rng.gen_range(vertex_count..=3 * vertex_count) {
        let base = edges[rng.gen_range(0..edges.len())];
        let weight = if rng.gen_bool(0.3) {
            base.weight()
        } else {
            signed_weight(rng)
        };
        edges.push(Edge::new(base.target(), base.source(), weight));
    }

    for _ in 0..rng.gen_range(1..=vertex_count / 2) {
        let vertex = rng.gen_range(0..vertex_count);
        edges.push(Edge::new(vertex, vertex, signed_weight(rng) - 100.0));
    }
    (vertex_count, edges)
}

fn signed_weight(rng: &mut SmallRng) -> f64 {
    f64::from(rng.gen_range(-50_i32..=50)) / 2.0
}

fn oriented(rng: &mut SmallRng, left: usize, right: usize, weight: f64) -> Edge {
    if rng.gen_bool(0.5) {
        Edge::new(left, right, weight)
    } else {
        Edge::new(right, left, weight)
    }
}

/// Fisher-Yates shuffle of `0..len`.
fn shuffled(len: usize, rng: &mut SmallRng) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    for index in (1..order.len()).rev() {
        let other = rng.gen_range(0..=index);
        order.swap(index, other);
    }
    order
}

impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
            3 => Just(Self::Multigraph),
        ]
        .boxed()
    }
}
