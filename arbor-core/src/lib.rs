//! Arbor core library: minimum spanning forests over undirected weighted
//! graphs.
//!
//! Build a [`Graph`], pick a strategy implementing [`MstAlgorithm`], and
//! compute a [`SpanningForest`]. [`Verifier`] cross-checks strategies
//! against the greedy reference.
//!
//! ```
//! use arbor_core::{Graph, MstAlgorithm, RandomizedContraction, Verifier};
//!
//! let graph = Graph::from_triples(4, [(0, 1, 1.0), (1, 2, 4.0), (2, 3, 2.0), (3, 0, 3.0)])?;
//! let forest = RandomizedContraction::with_seed(42).compute(&graph);
//! assert_eq!(forest.total_weight(), 6.0);
//! assert!(Verifier::new().verify(&graph).all_passed());
//! # Ok::<(), arbor_core::GraphError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod forest;
mod graph;
pub mod mst;
mod verify;

#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{
        DisjointSetError, DisjointSetErrorCode, GraphError, GraphErrorCode, VerifyError,
        VerifyErrorCode,
    },
    forest::SpanningForest,
    graph::{Edge, Graph},
    mst::{
        BoruvkaPhase, ContractionStats, DisjointSet, Greedy, HeapGrowth, HeavyEdgeFilter,
        MstAlgorithm, RandomizedContraction, boruvka_phase,
    },
    verify::{
        AlgorithmOutcome, DEFAULT_TOLERANCE, VerificationReport, Verifier, VerifierBuilder,
    },
};
