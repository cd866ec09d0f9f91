//! Command-line interface orchestration for graphgen.
//!
//! Without a subcommand the CLI writes one dataset from positional
//! arguments; the `batch` subcommand writes a directory of small datasets.

mod commands;

pub use commands::{
    BatchArgs, Cli, CliError, Command, Destination, ExecutionSummary, GenerateArgs, STDOUT_MARKER,
    render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests;
