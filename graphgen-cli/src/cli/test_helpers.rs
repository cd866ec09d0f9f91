//! Small helpers shared across CLI tests.

use std::fs;
use std::path::Path;

use graphgen_test_support::dataset::Dataset;
use tempfile::TempDir;

use super::{Cli, CliError, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn read_dataset(path: &Path, num_nodes: usize) -> Dataset {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => panic!("failed to read `{}`: {err}", path.display()),
    };
    match Dataset::parse_checked(&text, num_nodes) {
        Ok(dataset) => dataset,
        Err(err) => panic!("`{}` violates the output contract: {err}", path.display()),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
