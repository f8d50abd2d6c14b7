//! Property 3: seeded randomized runs are reproducible and never need
//! repair.
//!
//! Reruns [`RandomizedContraction`] on the same input and seed and demands
//! identical forests. Different seeds may pick different forests when
//! weights tie, but never different weights.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::RandomizedContraction;

use super::helpers::{WEIGHT_TOLERANCE, total_weight};
use super::types::{DeterminismConfig, MstFixture};

const SEEDS: [u64; 3] = [RandomizedContraction::DEFAULT_SEED, 1, 0xdead_beef];

/// Runs the determinism property for `fixture`.
pub(super) fn run_seed_determinism_property(fixture: &MstFixture) -> TestCaseResult {
    let config = DeterminismConfig::load();
    let graph = fixture.graph();
    let mut weights = Vec::with_capacity(SEEDS.len());

    for seed in SEEDS {
        let strategy = RandomizedContraction::with_seed(seed);
        let (baseline, stats) = strategy.compute_with_stats(&graph);
        if stats.repairs != 0 {
            return Err(TestCaseError::fail(format!(
                "seed {seed}: forest needed {} repairs ({})",
                stats.repairs,
                fixture.describe(),
            )));
        }

        for run in 1..config.repetitions {
            let (again, again_stats) = strategy.compute_with_stats(&graph);
            if again != baseline || again_stats != stats {
                return Err(TestCaseError::fail(format!(
                    "seed {seed}: run {run} diverged from the first run ({})",
                    fixture.describe(),
                )));
            }
        }
        weights.push(total_weight(baseline.edges()));
    }

    let first = weights[0];
    if let Some(outlier) = weights
        .iter()
        .find(|weight| (*weight - first).abs() > WEIGHT_TOLERANCE)
    {
        return Err(TestCaseError::fail(format!(
            "seeds disagree on forest weight: {first} vs {outlier} ({})",
            fixture.describe(),
        )));
    }

    Ok(())
}
