//! Property 2: structural invariants of every strategy's forest.
//!
//! - **Canonical form**: `source < target`, so no self-loops either.
//! - **Finite weights**.
//! - **Acyclicity**: union-find never sees an edge close a cycle.
//! - **Edge count**: `n - c` edges for `c` input components.
//! - **Spanning**: a connected input yields a tree.
//! - **Provenance**: every forest edge is an input edge with its weight.

use std::collections::HashSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{forest::SpanningForest, graph::Edge};

use super::helpers::{find_root, strategies};
use super::types::MstFixture;

/// Runs the structural invariant property for `fixture`.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let input_components = count_input_components(fixture);
    let provenance: HashSet<(usize, usize, u64)> = fixture
        .edges
        .iter()
        .map(|edge| edge_key(&edge.canonical()))
        .collect();

    for (label, strategy) in strategies() {
        let forest = strategy.compute(&graph);
        let fail = |reason: String| {
            TestCaseError::fail(format!("{label}: {reason} ({})", fixture.describe()))
        };

        validate_edges(forest.edges(), |index, edge| {
            (edge.source() >= edge.target()).then(|| {
                format!(
                    "edge {index} ({}, {}) is not canonical",
                    edge.source(),
                    edge.target()
                )
            })
        })
        .map_err(&fail)?;

        validate_edges(forest.edges(), |index, edge| {
            (!edge.weight().is_finite())
                .then(|| format!("edge {index} has non-finite weight {}", edge.weight()))
        })
        .map_err(&fail)?;

        validate_edges(forest.edges(), |index, edge| {
            (!provenance.contains(&edge_key(edge))).then(|| {
                format!(
                    "edge {index} ({}, {}, {}) is not an input edge",
                    edge.source(),
                    edge.target(),
                    edge.weight()
                )
            })
        })
        .map_err(&fail)?;

        validate_acyclicity(fixture.vertex_count, forest.edges()).map_err(&fail)?;
        validate_edge_count(fixture.vertex_count, &forest, input_components).map_err(&fail)?;
    }

    Ok(())
}

fn edge_key(edge: &Edge) -> (usize, usize, u64) {
    (edge.source(), edge.target(), edge.weight().to_bits())
}

/// Applies `check` to each edge and stops at the first complaint.
fn validate_edges<F>(edges: &[Edge], mut check: F) -> Result<(), String>
where
    F: FnMut(usize, &Edge) -> Option<String>,
{
    edges
        .iter()
        .enumerate()
        .find_map(|(index, edge)| check(index, edge))
        .map_or(Ok(()), Err)
}

fn validate_acyclicity(vertex_count: usize, edges: &[Edge]) -> Result<(), String> {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for (index, edge) in edges.iter().enumerate() {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left == right {
            return Err(format!(
                "edge {index} ({}, {}) closes a cycle",
                edge.source(),
                edge.target()
            ));
        }
        parent[right] = left;
    }
    Ok(())
}

fn validate_edge_count(
    vertex_count: usize,
    forest: &SpanningForest,
    input_components: usize,
) -> Result<(), String> {
    let expected = vertex_count - input_components;
    if forest.len() != expected {
        return Err(format!(
            "{} edges, expected n - c = {expected} (n={vertex_count}, c={input_components})",
            forest.len()
        ));
    }
    if input_components == 1 && !forest.is_tree() {
        return Err(format!(
            "input is connected but the forest has {} components",
            forest.component_count()
        ));
    }
    Ok(())
}

/// Counts input components with a plain union-find over the fixture edges.
fn count_input_components(fixture: &MstFixture) -> usize {
    let mut parent: Vec<usize> = (0..fixture.vertex_count).collect();
    let mut components = fixture.vertex_count;
    for edge in &fixture.edges {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left != right {
            parent[right] = left;
            components -= 1;
        }
    }
    components
}
