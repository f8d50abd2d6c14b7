//! Shared test utilities used across arbor crates.
//!
//! - [`tracing`] captures spans and events so tests can assert on
//!   instrumentation.
//! - [`ci`] reads the environment overrides that tune property suites.

pub mod ci;
pub mod tracing;
