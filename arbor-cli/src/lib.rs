//! Support library for the arbor CLI binary.
//!
//! Exposes the command pipeline and logging set-up so doctests and
//! integration tests can exercise them without forking a subprocess.

pub mod cli;
pub mod logging;
