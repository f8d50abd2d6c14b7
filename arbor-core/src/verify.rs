//! Cross-checks every registered strategy against the greedy reference.
//!
//! The verifier never fails on a mismatch; it reports. Only its
//! configuration can be rejected (see [`VerifyError`]).

use std::fmt;

use tracing::{info, instrument, warn};

use crate::{
    error::VerifyError,
    graph::Graph,
    mst::{Greedy, HeapGrowth, MstAlgorithm, RandomizedContraction},
};

/// Absolute weight tolerance used when none is configured.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Configures and constructs a [`Verifier`].
///
/// Without explicit algorithms the verifier runs greedy, heap-growth and
/// randomized contraction, in that order.
///
/// # Examples
/// ```
/// use arbor_core::{HeapGrowth, VerifierBuilder};
///
/// let verifier = VerifierBuilder::new()
///     .with_tolerance(1e-9)
///     .with_algorithm(Box::new(HeapGrowth))
///     .build()?;
/// assert_eq!(verifier.algorithm_names(), vec!["heap-growth"]);
/// # Ok::<(), arbor_core::VerifyError>(())
/// ```
#[derive(Default)]
pub struct VerifierBuilder {
    tolerance: Option<f64>,
    seed: Option<u64>,
    algorithms: Vec<Box<dyn MstAlgorithm>>,
}

impl VerifierBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the absolute weight tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Seeds the default randomized strategy. Ignored once custom
    /// algorithms are registered.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Registers an algorithm. The first registration replaces the default
    /// set.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Box<dyn MstAlgorithm>) -> Self {
        self.algorithms.push(algorithm);
        self
    }

    /// Validates the configuration and constructs a [`Verifier`].
    ///
    /// # Errors
    /// Returns [`VerifyError::InvalidTolerance`] when the tolerance is
    /// negative, NaN or infinite.
    pub fn build(self) -> Result<Verifier, VerifyError> {
        let tolerance = self.tolerance.unwrap_or(DEFAULT_TOLERANCE);
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(VerifyError::InvalidTolerance { tolerance });
        }

        let algorithms = if self.algorithms.is_empty() {
            let seed = self.seed.unwrap_or(RandomizedContraction::DEFAULT_SEED);
            default_algorithms(seed)
        } else {
            self.algorithms
        };

        Ok(Verifier {
            tolerance,
            algorithms,
        })
    }
}

impl fmt::Debug for VerifierBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifierBuilder")
            .field("tolerance", &self.tolerance)
            .field("seed", &self.seed)
            .field("algorithms", &names(&self.algorithms))
            .finish()
    }
}

fn default_algorithms(seed: u64) -> Vec<Box<dyn MstAlgorithm>> {
    vec![
        Box::new(Greedy),
        Box::new(HeapGrowth),
        Box::new(RandomizedContraction::with_seed(seed)),
    ]
}

fn names(algorithms: &[Box<dyn MstAlgorithm>]) -> Vec<&'static str> {
    algorithms.iter().map(|algorithm| algorithm.name()).collect()
}

/// Runs a fixed set of strategies over a graph and compares their forests.
///
/// # Examples
/// ```
/// use arbor_core::{Graph, Verifier};
///
/// let graph = Graph::from_triples(3, [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)])?;
/// let report = Verifier::new().verify(&graph);
/// assert!(report.all_passed());
/// assert_eq!(report.get("randomized").map(|o| o.weight()), Some(3.0));
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
pub struct Verifier {
    tolerance: f64,
    algorithms: Vec<Box<dyn MstAlgorithm>>,
}

impl Verifier {
    /// Creates a verifier with the default tolerance and algorithms.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            algorithms: default_algorithms(RandomizedContraction::DEFAULT_SEED),
        }
    }

    /// Returns a builder for custom configurations.
    #[must_use]
    pub fn builder() -> VerifierBuilder {
        VerifierBuilder::new()
    }

    /// Absolute weight tolerance applied to every comparison.
    #[must_use]
    #[rustfmt::skip]
    pub fn tolerance(&self) -> f64 { self.tolerance }

    /// Names of the registered algorithms in registration order.
    #[must_use]
    pub fn algorithm_names(&self) -> Vec<&'static str> {
        names(&self.algorithms)
    }

    /// Runs every registered algorithm on `graph`.
    ///
    /// The greedy forest is the weight reference whether or not greedy is
    /// registered.
    #[instrument(
        name = "core.verify",
        skip(self, graph),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    pub fn verify(&self, graph: &Graph) -> VerificationReport {
        let component_count = graph.component_count();
        let expected_edges = graph.vertex_count() - component_count;
        let reference_weight = Greedy.compute(graph).total_weight();

        let outcomes: Vec<AlgorithmOutcome> = self
            .algorithms
            .iter()
            .map(|algorithm| {
                let forest = algorithm.compute(graph);
                let outcome = AlgorithmOutcome {
                    name: algorithm.name(),
                    weight: forest.total_weight(),
                    edge_count: forest.len(),
                    valid: forest.len() == expected_edges,
                    weight_match: (forest.total_weight() - reference_weight).abs()
                        <= self.tolerance,
                };
                if !outcome.passed() {
                    warn!(
                        algorithm = outcome.name,
                        weight = outcome.weight,
                        reference_weight,
                        edge_count = outcome.edge_count,
                        expected_edges,
                        "algorithm failed verification"
                    );
                }
                outcome
            })
            .collect();

        let report = VerificationReport {
            vertex_count: graph.vertex_count(),
            component_count,
            reference_weight,
            tolerance: self.tolerance,
            outcomes,
        };
        info!(
            algorithms = report.outcomes.len(),
            components = component_count,
            passed = report.all_passed(),
            "verification completed"
        );
        report
    }
}

impl Default for Verifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Verifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verifier")
            .field("tolerance", &self.tolerance)
            .field("algorithms", &self.algorithm_names())
            .finish()
    }
}

/// Result of running one algorithm under the [`Verifier`].
#[derive(Clone, Debug, PartialEq)]
pub struct AlgorithmOutcome {
    name: &'static str,
    weight: f64,
    edge_count: usize,
    valid: bool,
    weight_match: bool,
}

impl AlgorithmOutcome {
    /// Algorithm identifier.
    #[must_use]
    #[rustfmt::skip]
    pub fn name(&self) -> &'static str { self.name }

    /// Total weight of the returned forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> f64 { self.weight }

    /// Number of edges in the returned forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Whether the forest has `vertex_count - component_count` edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn valid(&self) -> bool { self.valid }

    /// Whether the weight is within tolerance of the greedy reference.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight_match(&self) -> bool { self.weight_match }

    /// Both checks hold.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.valid && self.weight_match
    }
}

/// Per-algorithm outcomes in registration order.
#[derive(Clone, Debug, PartialEq)]
pub struct VerificationReport {
    vertex_count: usize,
    component_count: usize,
    reference_weight: f64,
    tolerance: f64,
    outcomes: Vec<AlgorithmOutcome>,
}

impl VerificationReport {
    /// Number of vertices in the verified graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Connected components of the verified graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Edge count every valid forest must have.
    #[must_use]
    pub fn expected_edges(&self) -> usize {
        self.vertex_count - self.component_count
    }

    /// Weight of the greedy reference forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn reference_weight(&self) -> f64 { self.reference_weight }

    /// Tolerance the weights were compared with.
    #[must_use]
    #[rustfmt::skip]
    pub fn tolerance(&self) -> f64 { self.tolerance }

    /// Looks up the outcome of the algorithm called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AlgorithmOutcome> {
        self.outcomes.iter().find(|outcome| outcome.name == name)
    }

    /// Iterates outcomes in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, AlgorithmOutcome> {
        self.outcomes.iter()
    }

    /// Returns `true` when every algorithm is valid and matches the
    /// reference weight.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(AlgorithmOutcome::passed)
    }
}

impl<'a> IntoIterator for &'a VerificationReport {
    type Item = &'a AlgorithmOutcome;
    type IntoIter = std::slice::Iter<'a, AlgorithmOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "vertices: {}  components: {}  expected edges: {}  reference weight: {:.6}",
            self.vertex_count,
            self.component_count,
            self.expected_edges(),
            self.reference_weight,
        )?;
        writeln!(
            f,
            "{:<14} {:>16} {:>8} {:>6} {:>13}",
            "algorithm", "weight", "edges", "valid", "weight_match"
        )?;
        for outcome in &self.outcomes {
            writeln!(
                f,
                "{:<14} {:>16.6} {:>8} {:>6} {:>13}",
                outcome.name,
                outcome.weight,
                outcome.edge_count,
                yes_no(outcome.valid),
                yes_no(outcome.weight_match),
            )?;
        }
        Ok(())
    }
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
