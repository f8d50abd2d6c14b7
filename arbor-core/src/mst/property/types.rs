//! Fixture and configuration types for the MST property suite.

use crate::graph::{Edge, Graph};

/// Shape of the generated graph and its weights.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge draws a weight from a continuous range.
    Unique,
    /// Edges share a pool of one to three weights, stressing tie-breaking.
    ManyIdentical,
    /// Random spanning tree plus roughly `0.5n` to `n` extra edges.
    Sparse,
    /// Edge probability between 0.7 and 0.95.
    Dense,
    /// Several components, some of them isolated vertices.
    Disconnected,
    /// Repeated vertex pairs and self-loops, including negative weights.
    Multigraph,
}

/// A generated graph plus the context needed to diagnose failures.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Edges in generation order.
    pub edges: Vec<Edge>,
    /// Distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Builds the validated graph. Generators only emit in-range, finite
    /// edges, so failure is a generator bug.
    pub(super) fn graph(&self) -> Graph {
        Graph::new(self.vertex_count, self.edges.clone())
            .expect("generated fixtures are always valid graphs")
    }

    /// One-line summary used in failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.vertex_count,
            self.edges.len(),
        )
    }
}

/// Controls how often the determinism property reruns one input.
pub(super) struct DeterminismConfig {
    /// Runs per seed.
    pub repetitions: usize,
}

impl DeterminismConfig {
    /// Reads `ARBOR_MST_PBT_DETERMINISM_REPS` (default: 3).
    pub(super) fn load() -> Self {
        let repetitions = std::env::var("ARBOR_MST_PBT_DETERMINISM_REPS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .filter(|&reps: &usize| reps > 0)
            .unwrap_or(3);
        Self { repetitions }
    }
}
