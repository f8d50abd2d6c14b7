//! Property 1: every strategy matches the sequential oracle.
//!
//! Total weight (within [`WEIGHT_TOLERANCE`]), edge count and component
//! count must agree for each strategy returned by
//! [`super::helpers::strategies`].

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::helpers::{WEIGHT_TOLERANCE, strategies};
use super::oracle::sequential_kruskal;
use super::types::MstFixture;

/// Runs the oracle equivalence property for `fixture`.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let oracle = sequential_kruskal(fixture.vertex_count, &fixture.edges);

    for (label, strategy) in strategies() {
        let forest = strategy.compute(&graph);

        if (forest.total_weight() - oracle.total_weight).abs() > WEIGHT_TOLERANCE {
            return Err(TestCaseError::fail(format!(
                "{label}: total weight {} differs from oracle {} ({})",
                forest.total_weight(),
                oracle.total_weight,
                fixture.describe(),
            )));
        }

        if forest.len() != oracle.edge_count {
            return Err(TestCaseError::fail(format!(
                "{label}: {} edges, oracle has {} ({})",
                forest.len(),
                oracle.edge_count,
                fixture.describe(),
            )));
        }

        if forest.component_count() != oracle.component_count {
            return Err(TestCaseError::fail(format!(
                "{label}: {} components, oracle has {} ({})",
                forest.component_count(),
                oracle.component_count,
                fixture.describe(),
            )));
        }
    }

    Ok(())
}
