//! Command implementations and argument parsing for the graphgen CLI.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use graphgen_core::{
    BatchConfig, BatchSummary, DEFAULT_BATCH_COUNT, DEFAULT_BATCH_DIRECTORY,
    DEFAULT_BATCH_MAX_NODES, DEFAULT_BATCH_MIN_NODES, DEFAULT_EDGE_PROBABILITY, DEFAULT_FILENAME,
    DEFAULT_NEGATIVE_WEIGHT_PROBABILITY, DEFAULT_NUM_NODES, GenerationSummary, GeneratorError,
    GraphGeneratorBuilder, generate_batch,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// File name that streams the dataset to standard output.
pub const STDOUT_MARKER: &str = "-";

/// Top-level CLI options parsed by [`clap`].
///
/// Running without a subcommand generates a single dataset from the
/// positional arguments, all of which have defaults.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "graphgen",
    about = "Generate synthetic weighted-graph datasets as CSV.",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Arguments for the default single-dataset command.
    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Write one dataset (the default when no subcommand is given).
    Generate(GenerateArgs),
    /// Write many small datasets into one directory.
    Batch(BatchArgs),
}

/// Options accepted by the single-dataset command.
#[derive(Debug, Args, Clone, PartialEq)]
pub struct GenerateArgs {
    /// Number of nodes in the graph.
    #[arg(value_name = "NUM_NODES", default_value_t = DEFAULT_NUM_NODES)]
    pub num_nodes: usize,

    /// Probability that any given node pair is connected.
    #[arg(
        value_name = "EDGE_PROBABILITY",
        default_value_t = DEFAULT_EDGE_PROBABILITY,
        allow_negative_numbers = true
    )]
    pub edge_probability: f64,

    /// Probability that a realised edge has its weight negated.
    #[arg(
        value_name = "NEGATIVE_WEIGHT_PROBABILITY",
        default_value_t = DEFAULT_NEGATIVE_WEIGHT_PROBABILITY,
        allow_negative_numbers = true
    )]
    pub negative_weight_probability: f64,

    /// Output CSV file, or `-` for standard output.
    #[arg(value_name = "FILENAME", default_value = DEFAULT_FILENAME)]
    pub filename: PathBuf,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            num_nodes: DEFAULT_NUM_NODES,
            edge_probability: DEFAULT_EDGE_PROBABILITY,
            negative_weight_probability: DEFAULT_NEGATIVE_WEIGHT_PROBABILITY,
            filename: PathBuf::from(DEFAULT_FILENAME),
            seed: None,
        }
    }
}

/// Options accepted by the `batch` command.
#[derive(Debug, Args, Clone, PartialEq)]
pub struct BatchArgs {
    /// Number of files to write.
    #[arg(long, default_value_t = DEFAULT_BATCH_COUNT)]
    pub count: usize,

    /// Smallest node count drawn per file.
    #[arg(long = "min-nodes", default_value_t = DEFAULT_BATCH_MIN_NODES)]
    pub min_nodes: usize,

    /// Largest node count drawn per file.
    #[arg(long = "max-nodes", default_value_t = DEFAULT_BATCH_MAX_NODES)]
    pub max_nodes: usize,

    /// Directory receiving `graph1.csv`, `graph2.csv`, and so on.
    #[arg(long, default_value = DEFAULT_BATCH_DIRECTORY)]
    pub directory: PathBuf,

    /// Probability that any given node pair is connected.
    #[arg(long = "edge-probability", default_value_t = 1.0, allow_negative_numbers = true)]
    pub edge_probability: f64,

    /// Probability that a realised edge has its weight negated.
    #[arg(
        long = "negative-weight-probability",
        default_value_t = 0.0,
        allow_negative_numbers = true
    )]
    pub negative_weight_probability: f64,

    /// Seed for a reproducible batch.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl From<BatchArgs> for BatchConfig {
    fn from(args: BatchArgs) -> Self {
        Self {
            count: args.count,
            min_nodes: args.min_nodes,
            max_nodes: args.max_nodes,
            directory: args.directory,
            edge_probability: args.edge_probability,
            negative_weight_probability: args.negative_weight_probability,
            seed: args.seed,
        }
    }
}

/// Where a single dataset is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// A file created or truncated at the given path.
    File(PathBuf),
    /// Standard output.
    Stdout,
}

impl Destination {
    /// Interprets a CLI file name, mapping `-` to standard output.
    #[must_use]
    pub fn from_filename(filename: &Path) -> Self {
        if filename.as_os_str() == STDOUT_MARKER {
            Self::Stdout
        } else {
            Self::File(filename.to_path_buf())
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration was rejected or the output could not be written.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionSummary {
    /// A single dataset was written.
    Generated {
        /// Where the dataset went.
        destination: Destination,
        /// Counts gathered while writing.
        summary: GenerationSummary,
    },
    /// A batch of datasets was written.
    Batch {
        /// Directory holding the files.
        directory: PathBuf,
        /// Per-file counts.
        summary: BatchSummary,
    },
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when configuration is invalid or writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use graphgen_cli::cli::{Cli, Command, ExecutionSummary, GenerateArgs, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = tempfile::tempdir()?;
/// let args = GenerateArgs {
///     num_nodes: 4,
///     edge_probability: 1.0,
///     filename: dir.path().join("graph.csv"),
///     ..GenerateArgs::default()
/// };
/// let cli = Cli { command: Some(Command::Generate(args)), generate: GenerateArgs::default() };
/// let ExecutionSummary::Generated { summary, .. } = run_cli(cli)? else {
///     panic!("generate yields a single-dataset summary");
/// };
/// assert_eq!(summary.edges_written, 6);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        None => {
            span.record("command", field::display("generate"));
            run_generate(cli.generate)
        }
        Some(Command::Generate(args)) => {
            span.record("command", field::display("generate"));
            run_generate(args)
        }
        Some(Command::Batch(args)) => {
            span.record("command", field::display("batch"));
            run_batch(args)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(args),
    fields(num_nodes = args.num_nodes, destination = field::Empty, seeded = args.seed.is_some()),
)]
pub(super) fn run_generate(args: GenerateArgs) -> Result<ExecutionSummary, CliError> {
    let mut builder = GraphGeneratorBuilder::new()
        .with_num_nodes(args.num_nodes)
        .with_edge_probability(args.edge_probability)
        .with_negative_weight_probability(args.negative_weight_probability);
    if let Some(seed) = args.seed {
        builder = builder.with_seed(seed);
    }
    let generator = builder.build()?;

    let destination = Destination::from_filename(&args.filename);
    Span::current().record("destination", field::display(args.filename.display()));
    let summary = match &destination {
        Destination::File(path) => generator.write_to_path(path)?,
        Destination::Stdout => generator.write_to_writer(io::stdout().lock())?,
    };

    info!(edges = summary.edges_written, "generate completed");
    Ok(ExecutionSummary::Generated {
        destination,
        summary,
    })
}

#[instrument(name = "cli.batch", err, skip(args), fields(count = args.count))]
pub(super) fn run_batch(args: BatchArgs) -> Result<ExecutionSummary, CliError> {
    let config = BatchConfig::from(args);
    let summary = generate_batch(&config)?;
    info!(files = summary.files.len(), "batch completed");
    Ok(ExecutionSummary::Batch {
        directory: config.directory,
        summary,
    })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// Nothing is rendered when the dataset itself went to standard output.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::path::PathBuf;
/// # use graphgen_cli::cli::{Destination, ExecutionSummary, render_summary};
/// # use graphgen_core::GenerationSummary;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary::Generated {
///     destination: Destination::File(PathBuf::from("g.csv")),
///     summary: GenerationSummary {
///         num_nodes: 4,
///         pairs_considered: 6,
///         edges_written: 5,
///         negative_edges: 1,
///     },
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.contains("edges: 5"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Generated {
            destination: Destination::Stdout,
            ..
        } => Ok(()),
        ExecutionSummary::Generated {
            destination: Destination::File(path),
            summary,
        } => {
            writeln!(writer, "destination: {}", path.display())?;
            writeln!(writer, "nodes: {}", summary.num_nodes)?;
            writeln!(writer, "pairs considered: {}", summary.pairs_considered)?;
            writeln!(writer, "edges: {}", summary.edges_written)?;
            writeln!(writer, "negative edges: {}", summary.negative_edges)
        }
        ExecutionSummary::Batch { directory, summary } => {
            writeln!(writer, "directory: {}", directory.display())?;
            writeln!(writer, "files: {}", summary.files.len())?;
            writeln!(writer, "edges: {}", summary.total_edges())?;
            for file in &summary.files {
                writeln!(
                    writer,
                    "{}\t{}\t{}",
                    file.path.display(),
                    file.summary.num_nodes,
                    file.summary.edges_written
                )?;
            }
            Ok(())
        }
    }
}
