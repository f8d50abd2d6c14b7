//! Benchmark support crate for arbor.
//!
//! Provides the parameter labels and setup error type shared by the
//! Criterion benchmarks of the minimum spanning forest strategies.

pub mod error;
pub mod params;
