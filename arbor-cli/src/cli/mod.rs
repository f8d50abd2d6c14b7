//! Command-line interface orchestration for arbor.
//!
//! `run` computes a minimum spanning forest with one strategy; `verify`
//! cross-checks every strategy on the same graph. Both read either an
//! edge-list file or a seeded random graph.

mod commands;

pub use commands::{
    AlgorithmChoice, Cli, CliError, Command, ExecutionSummary, FileArgs, FileFormat, GraphSource,
    RandomArgs, RunCommand, RunSummary, VerifyCommand, render_summary, run_cli,
};
