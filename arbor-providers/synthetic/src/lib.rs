//! Seeded random graph generator for benchmarks and smoke runs.
//!
//! Every generated graph is connected: a path backbone joining each `i` to
//! `i + 1` is laid down first and the remaining edges join distinct,
//! previously unused vertex pairs. Weights are uniform in `[1, 100)`.
//!
//! ```
//! use arbor_providers_synthetic::{SyntheticGraphConfig, generate};
//!
//! let graph = generate(&SyntheticGraphConfig::new(100, 400).with_seed(7))?;
//! assert_eq!(graph.edge_count(), 400);
//! assert_eq!(graph.component_count(), 1);
//! # Ok::<(), arbor_providers_synthetic::SyntheticError>(())
//! ```

use std::collections::HashSet;

use arbor_core::{Edge, Graph, GraphError};
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use thiserror::Error;
use tracing::{debug, instrument};


/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;

const WEIGHT_RANGE: std::ops::Range<f64> = 1.0..100.0;

/// Shape and seed of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Total number of edges, backbone included.
    pub edge_count: usize,
    /// Seed for the [`SmallRng`] driving pair and weight selection.
    pub seed: u64,
}

impl SyntheticGraphConfig {
    /// Configuration with [`DEFAULT_SEED`].
    #[must_use]
    pub const fn new(vertex_count: usize, edge_count: usize) -> Self {
        Self {
            vertex_count,
            edge_count,
            seed: DEFAULT_SEED,
        }
    }

    /// Replaces the seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Errors raised for configurations that cannot be realised.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SyntheticError {
    /// Fewer edges than the backbone needs.
    #[error("{edge_count} edges cannot connect {vertex_count} vertices (need at least {minimum})")]
    TooFewEdges {
        /// Requested vertex count.
        vertex_count: usize,
        /// Requested edge count.
        edge_count: usize,
        /// Backbone size, `vertex_count - 1`.
        minimum: usize,
    },
    /// More edges than distinct vertex pairs.
    #[error("{edge_count} edges exceed the {maximum} distinct pairs of {vertex_count} vertices")]
    TooManyEdges {
        /// Requested vertex count.
        vertex_count: usize,
        /// Requested edge count.
        edge_count: usize,
        /// Number of distinct unordered pairs.
        maximum: usize,
    },
    /// The generated edges failed graph validation.
    #[error("generated graph is invalid: {0}")]
    Graph(#[from] GraphError),
}

/// Stable machine-readable codes for [`SyntheticError`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SyntheticErrorCode {
    /// Fewer edges than the backbone needs.
    TooFewEdges,
    /// More edges than distinct vertex pairs.
    TooManyEdges,
    /// The generated edges failed graph validation.
    Graph,
}

impl SyntheticErrorCode {
    /// Return the stable machine-readable representation of this code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TooFewEdges => "SYNTHETIC_TOO_FEW_EDGES",
            Self::TooManyEdges => "SYNTHETIC_TOO_MANY_EDGES",
            Self::Graph => "SYNTHETIC_INVALID_GRAPH",
        }
    }
}

impl SyntheticError {
    /// Retrieve the stable [`SyntheticErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> SyntheticErrorCode {
        match self {
            Self::TooFewEdges { .. } => SyntheticErrorCode::TooFewEdges,
            Self::TooManyEdges { .. } => SyntheticErrorCode::TooManyEdges,
            Self::Graph(_) => SyntheticErrorCode::Graph,
        }
    }
}

/// Generates a connected graph with exactly `config.edge_count` edges.
///
/// The same configuration always yields the same graph.
///
/// # Errors
/// Returns [`SyntheticError::TooFewEdges`] when `edge_count` is below
/// `vertex_count - 1` and [`SyntheticError::TooManyEdges`] when it exceeds
/// the number of distinct unordered pairs.
#[instrument(
    name = "synthetic.generate",
    skip_all,
    fields(vertices = config.vertex_count, edges = config.edge_count, seed = config.seed),
)]
pub fn generate(config: &SyntheticGraphConfig) -> Result<Graph, SyntheticError> {
    let SyntheticGraphConfig {
        vertex_count,
        edge_count,
        seed,
    } = *config;
    let minimum = vertex_count.saturating_sub(1);
    if edge_count < minimum {
        return Err(SyntheticError::TooFewEdges {
            vertex_count,
            edge_count,
            minimum,
        });
    }
    let maximum = distinct_pairs(vertex_count);
    if edge_count > maximum {
        return Err(SyntheticError::TooManyEdges {
            vertex_count,
            edge_count,
            maximum,
        });
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut pairs: Vec<(usize, usize)> = (1..vertex_count).map(|v| (v - 1, v)).collect();
    let extra = edge_count - minimum;
    // Rejection sampling degrades once most pairs are taken.
    if extra > (maximum - minimum) / 2 {
        pairs.extend(shuffled_chords(vertex_count, extra, &mut rng));
    } else {
        pairs.extend(sampled_chords(vertex_count, extra, &mut rng));
    }

    let edges: Vec<Edge> = pairs
        .into_iter()
        .map(|(left, right)| Edge::new(left, right, rng.gen_range(WEIGHT_RANGE)))
        .collect();
    debug!(extra, "synthetic graph generated");
    Ok(Graph::new(vertex_count, edges)?)
}

/// `n (n - 1) / 2`, saturating on overflow.
fn distinct_pairs(vertex_count: usize) -> usize {
    let pairs = if vertex_count % 2 == 0 {
        (vertex_count / 2).checked_mul(vertex_count.saturating_sub(1))
    } else {
        vertex_count.checked_mul((vertex_count - 1) / 2)
    };
    pairs.unwrap_or(usize::MAX)
}

fn is_backbone(left: usize, right: usize) -> bool {
    left.abs_diff(right) == 1
}

fn sampled_chords(vertex_count: usize, count: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    let mut seen = HashSet::with_capacity(count);
    let mut chords = Vec::with_capacity(count);
    while chords.len() < count {
        let left = rng.gen_range(0..vertex_count);
        let right = rng.gen_range(0..vertex_count);
        if left == right || is_backbone(left, right) {
            continue;
        }
        if seen.insert((left.min(right), left.max(right))) {
            chords.push((left, right));
        }
    }
    chords
}

fn shuffled_chords(vertex_count: usize, count: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    let mut candidates: Vec<(usize, usize)> = (0..vertex_count)
        .flat_map(|left| ((left + 2)..vertex_count).map(move |right| (left, right)))
        .collect();
    candidates.shuffle(rng);
    candidates.truncate(count);
    candidates
}
