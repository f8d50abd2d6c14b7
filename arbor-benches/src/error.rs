//! Benchmark setup error type.
//!
//! Setup functions propagate failures with `?` instead of `.expect()`.

use arbor_providers_synthetic::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
}
