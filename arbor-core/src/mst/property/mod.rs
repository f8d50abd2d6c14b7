//! Property-based tests for the minimum spanning forest strategies.
//!
//! Checks every strategy against a sequential oracle, validates structural
//! invariants (acyclicity, spanning, edge count, input provenance), and
//! confirms that seeded randomized runs are reproducible across graph
//! topologies with varied weight distributions.

mod determinism;
mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
mod types;
