//! Command implementations and argument parsing for the arbor CLI.

use std::io::{self, Write};
use std::path::PathBuf;

use arbor_core::{
    Graph, Greedy, HeapGrowth, MstAlgorithm, RandomizedContraction, SpanningForest,
    VerificationReport, Verifier, VerifyError,
};
use arbor_providers_edgelist::{EdgeListError, EdgeListFormat, load_path};
use arbor_providers_synthetic::{DEFAULT_SEED, SyntheticError, SyntheticGraphConfig, generate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "arbor", about = "Compute and cross-check minimum spanning forests.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute a minimum spanning forest with one strategy.
    Run(RunCommand),
    /// Run every strategy and compare the results against the greedy reference.
    Verify(VerifyCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Strategy used to compute the forest.
    #[arg(long, value_enum, default_value_t = AlgorithmChoice::Randomized)]
    pub algorithm: AlgorithmChoice,

    /// Seed for the randomized strategy.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Graph source.
    #[command(subcommand)]
    pub source: GraphSource,
}

/// Options accepted by the `verify` command.
#[derive(Debug, Args, Clone)]
pub struct VerifyCommand {
    /// Seed for the randomized strategy.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Absolute tolerance when comparing total weights.
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Graph source.
    #[command(subcommand)]
    pub source: GraphSource,
}

/// Where the input graph comes from.
#[derive(Debug, Subcommand, Clone)]
pub enum GraphSource {
    /// Load an edge-list file.
    File(FileArgs),
    /// Generate a connected random graph.
    Random(RandomArgs),
}

/// Edge-list file arguments.
#[derive(Debug, Args, Clone)]
pub struct FileArgs {
    /// Path to the edge-list file.
    pub path: PathBuf,

    /// Layout of the file.
    #[arg(long, value_enum, default_value_t = FileFormat::Header)]
    pub format: FileFormat,
}

/// Random graph arguments.
#[derive(Debug, Args, Clone)]
pub struct RandomArgs {
    /// Number of vertices.
    #[arg(long)]
    pub vertices: usize,

    /// Number of edges, at least `vertices - 1`.
    #[arg(long)]
    pub edges: usize,

    /// Generator seed.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

/// Strategies selectable on the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum AlgorithmChoice {
    /// Sort edges and join components in weight order.
    Greedy,
    /// Grow each tree from a seed vertex with a priority queue.
    HeapGrowth,
    /// Randomized contraction with heavy-edge filtering.
    Randomized,
}

/// Edge-list layouts selectable on the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum FileFormat {
    /// `n m` header followed by `u v w` lines.
    Header,
    /// SNAP `u v` pairs with unit weights.
    Snap,
}

impl From<FileFormat> for EdgeListFormat {
    fn from(format: FileFormat) -> Self {
        match format {
            FileFormat::Header => Self::Header,
            FileFormat::Snap => Self::Snap,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading an edge-list file failed.
    #[error("failed to load `{path}`: {source}")]
    EdgeList {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying provider error.
        #[source]
        source: EdgeListError,
    },
    /// Random graph generation failed.
    #[error(transparent)]
    Synthetic(#[from] SyntheticError),
    /// The verifier configuration was rejected.
    #[error(transparent)]
    Verify(#[from] VerifyError),
}

impl CliError {
    /// Stable code of the underlying library error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EdgeList { source, .. } => source.code().as_str(),
            Self::Synthetic(source) => source.code().as_str(),
            Self::Verify(source) => source.code().as_str(),
        }
    }
}

/// Result of the `run` command.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Strategy that produced the forest.
    pub algorithm: &'static str,
    /// Vertex count of the input graph.
    pub vertex_count: usize,
    /// The computed forest.
    pub forest: SpanningForest,
}

/// Outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// A single strategy run.
    Run(RunSummary),
    /// A cross-strategy verification.
    Verify(VerificationReport),
}

impl ExecutionSummary {
    /// Whether the process should exit successfully.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        match self {
            Self::Run(_) => true,
            Self::Verify(report) => report.all_passed(),
        }
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the graph cannot be loaded or generated, or the
/// verifier configuration is invalid.
///
/// # Examples
/// ```
/// use arbor_cli::cli::{
///     AlgorithmChoice, Cli, Command, ExecutionSummary, GraphSource, RandomArgs, RunCommand,
///     run_cli,
/// };
///
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         algorithm: AlgorithmChoice::HeapGrowth,
///         seed: None,
///         source: GraphSource::Random(RandomArgs { vertices: 10, edges: 20, seed: 1 }),
///     }),
/// };
/// let ExecutionSummary::Run(summary) = run_cli(cli)? else {
///     unreachable!("run produces a run summary");
/// };
/// assert_eq!(summary.forest.len(), 9);
/// # Ok::<(), arbor_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Run(run) => {
            span.record("command", field::display("run"));
            run_command(run).map(ExecutionSummary::Run)
        }
        Command::Verify(verify) => {
            span.record("command", field::display("verify"));
            verify_command(verify).map(ExecutionSummary::Verify)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(algorithm = field::Empty, seed = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<RunSummary, CliError> {
    let graph = load_graph(command.source)?;
    let algorithm = build_algorithm(command.algorithm, command.seed);
    let span = Span::current();
    span.record("algorithm", field::display(algorithm.name()));
    if let Some(seed) = command.seed {
        span.record("seed", seed);
    }

    let forest = algorithm.compute(&graph);
    info!(
        algorithm = algorithm.name(),
        edges = forest.len(),
        components = forest.component_count(),
        weight = forest.total_weight(),
        "command completed"
    );
    Ok(RunSummary {
        algorithm: algorithm.name(),
        vertex_count: graph.vertex_count(),
        forest,
    })
}

#[instrument(name = "cli.verify", err, skip(command))]
pub(super) fn verify_command(command: VerifyCommand) -> Result<VerificationReport, CliError> {
    let mut builder = Verifier::builder();
    if let Some(seed) = command.seed {
        builder = builder.with_seed(seed);
    }
    if let Some(tolerance) = command.tolerance {
        builder = builder.with_tolerance(tolerance);
    }
    let verifier = builder.build()?;
    let graph = load_graph(command.source)?;
    let report = verifier.verify(&graph);
    if !report.all_passed() {
        warn!(
            failed = report.iter().filter(|outcome| !outcome.passed()).count(),
            "verification reported failures"
        );
    }
    Ok(report)
}

fn build_algorithm(choice: AlgorithmChoice, seed: Option<u64>) -> Box<dyn MstAlgorithm> {
    match choice {
        AlgorithmChoice::Greedy => Box::new(Greedy),
        AlgorithmChoice::HeapGrowth => Box::new(HeapGrowth),
        AlgorithmChoice::Randomized => Box::new(RandomizedContraction::with_seed(
            seed.unwrap_or(RandomizedContraction::DEFAULT_SEED),
        )),
    }
}

#[instrument(name = "cli.load_graph", err, skip(source), fields(input = field::Empty))]
pub(super) fn load_graph(source: GraphSource) -> Result<Graph, CliError> {
    let span = Span::current();
    let graph = match source {
        GraphSource::File(FileArgs { path, format }) => {
            span.record("input", field::display(path.display()));
            load_path(&path, format.into()).map_err(|source| CliError::EdgeList { path, source })?
        }
        GraphSource::Random(RandomArgs {
            vertices,
            edges,
            seed,
        }) => {
            span.record("input", field::display("random"));
            generate(&SyntheticGraphConfig::new(vertices, edges).with_seed(seed))?
        }
    };
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// `run` prints a header block followed by one tab-separated
/// `source target weight` line per forest edge; `verify` prints the
/// verification table.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{ExecutionSummary, RunSummary, render_summary};
/// # use arbor_core::{Graph, Greedy, MstAlgorithm};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let graph = Graph::from_triples(3, [(0, 1, 1.5), (1, 2, 2.0)])?;
/// let summary = ExecutionSummary::Run(RunSummary {
///     algorithm: "greedy",
///     vertex_count: 3,
///     forest: Greedy.compute(&graph),
/// });
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.ends_with("0\t1\t1.5\n1\t2\t2\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Run(run) => {
            writeln!(writer, "algorithm: {}", run.algorithm)?;
            writeln!(writer, "vertices: {}", run.vertex_count)?;
            writeln!(writer, "components: {}", run.forest.component_count())?;
            writeln!(writer, "edges: {}", run.forest.len())?;
            writeln!(writer, "total weight: {:.6}", run.forest.total_weight())?;
            for edge in run.forest.edges() {
                writeln!(
                    writer,
                    "{}\t{}\t{}",
                    edge.source(),
                    edge.target(),
                    edge.weight()
                )?;
            }
        }
        ExecutionSummary::Verify(report) => write!(writer, "{report}")?,
    }
    Ok(())
}
