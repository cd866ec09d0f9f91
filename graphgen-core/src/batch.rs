//! Batch generation of many small graph datasets.
//!
//! Writes `graph1.csv` through `graph{count}.csv` into one directory, each
//! with a node count drawn uniformly from a configured range. A single
//! sizing generator picks every file's node count and seed, so a seeded
//! batch is reproducible file by file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rand::{Rng, RngCore, SeedableRng, rngs::SmallRng};
use tracing::{Span, debug, field, info, instrument};

use crate::{
    Result,
    builder::{GraphGeneratorBuilder, validate_probability},
    error::GeneratorError,
    generator::GenerationSummary,
};

/// Number of files written when none is requested.
pub const DEFAULT_BATCH_COUNT: usize = 100;
/// Smallest node count drawn by default.
pub const DEFAULT_BATCH_MIN_NODES: usize = 1;
/// Largest node count drawn by default.
pub const DEFAULT_BATCH_MAX_NODES: usize = 10;
/// Directory written to by default.
pub const DEFAULT_BATCH_DIRECTORY: &str = "data";

/// Configuration for [`generate_batch`].
#[derive(Clone, Debug, PartialEq)]
pub struct BatchConfig {
    /// Number of files to write.
    pub count: usize,
    /// Inclusive lower bound on each file's node count.
    pub min_nodes: usize,
    /// Inclusive upper bound on each file's node count.
    pub max_nodes: usize,
    /// Directory receiving the files; created when missing.
    pub directory: PathBuf,
    /// Per-pair edge probability.
    pub edge_probability: f64,
    /// Per-edge negation probability.
    pub negative_weight_probability: f64,
    /// Optional seed making the whole batch reproducible.
    pub seed: Option<u64>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_BATCH_COUNT,
            min_nodes: DEFAULT_BATCH_MIN_NODES,
            max_nodes: DEFAULT_BATCH_MAX_NODES,
            directory: PathBuf::from(DEFAULT_BATCH_DIRECTORY),
            edge_probability: 1.0,
            negative_weight_probability: 0.0,
            seed: None,
        }
    }
}

impl BatchConfig {
    fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(GeneratorError::ZeroBatchCount);
        }
        if self.min_nodes > self.max_nodes {
            return Err(GeneratorError::InvalidNodeRange {
                min: self.min_nodes,
                max: self.max_nodes,
            });
        }
        validate_probability("edge_probability", self.edge_probability)?;
        validate_probability(
            "negative_weight_probability",
            self.negative_weight_probability,
        )?;
        Ok(())
    }
}

/// One file written by [`generate_batch`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BatchFile {
    /// Path of the written file.
    pub path: PathBuf,
    /// Counts gathered while writing the file.
    pub summary: GenerationSummary,
}

/// Outcome of [`generate_batch`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BatchSummary {
    /// Files in the order they were written.
    pub files: Vec<BatchFile>,
}

impl BatchSummary {
    /// Total number of edge rows across all files.
    #[must_use]
    pub fn total_edges(&self) -> usize {
        self.files
            .iter()
            .map(|file| file.summary.edges_written)
            .sum()
    }
}

/// Returns the path of the `ordinal`-th (one-based) file in `directory`.
#[must_use]
pub fn batch_file_path(directory: &Path, ordinal: usize) -> PathBuf {
    directory.join(format!("graph{ordinal}.csv"))
}

/// Writes a batch of independent small graphs.
///
/// # Errors
/// Returns [`GeneratorError::ZeroBatchCount`],
/// [`GeneratorError::InvalidNodeRange`], or
/// [`GeneratorError::InvalidProbability`] for invalid configuration,
/// [`GeneratorError::CreateDirectory`] when the directory cannot be created,
/// and any error from [`crate::GraphGenerator::write_to_path`]. Files written
/// before a failure are left in place.
///
/// # Examples
/// ```
/// use graphgen_core::{BatchConfig, generate_batch};
///
/// let dir = tempfile::tempdir()?;
/// let config = BatchConfig {
///     count: 3,
///     directory: dir.path().join("data"),
///     seed: Some(5),
///     ..BatchConfig::default()
/// };
/// let summary = generate_batch(&config)?;
/// assert_eq!(summary.files.len(), 3);
/// assert!(dir.path().join("data/graph3.csv").exists());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "generator.batch",
    err,
    skip(config),
    fields(
        count = config.count,
        min_nodes = config.min_nodes,
        max_nodes = config.max_nodes,
        directory = field::Empty,
    ),
)]
pub fn generate_batch(config: &BatchConfig) -> Result<BatchSummary> {
    config.validate()?;
    Span::current().record("directory", field::display(config.directory.display()));

    fs::create_dir_all(&config.directory).map_err(|source| GeneratorError::CreateDirectory {
        path: config.directory.clone(),
        source,
    })?;

    let mut sizing = config
        .seed
        .map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);
    let mut files = Vec::with_capacity(config.count);
    for ordinal in 1..=config.count {
        let num_nodes = sizing.gen_range(config.min_nodes..=config.max_nodes);
        let generator = GraphGeneratorBuilder::new()
            .with_num_nodes(num_nodes)
            .with_edge_probability(config.edge_probability)
            .with_negative_weight_probability(config.negative_weight_probability)
            .with_seed(sizing.next_u64())
            .build()?;
        let path = batch_file_path(&config.directory, ordinal);
        let summary = generator.write_to_path(&path)?;
        debug!(ordinal, num_nodes, edges = summary.edges_written, "batch file written");
        files.push(BatchFile { path, summary });
    }

    let summary = BatchSummary { files };
    info!(
        files = summary.files.len(),
        edges = summary.total_edges(),
        "batch written"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::zero_count(BatchConfig { count: 0, ..BatchConfig::default() }, "GRAPHGEN_ZERO_BATCH_COUNT")]
    #[case::reversed_range(
        BatchConfig { min_nodes: 5, max_nodes: 2, ..BatchConfig::default() },
        "GRAPHGEN_INVALID_NODE_RANGE"
    )]
    #[case::bad_probability(
        BatchConfig { edge_probability: -1.0, ..BatchConfig::default() },
        "GRAPHGEN_INVALID_PROBABILITY"
    )]
    fn validate_rejects_invalid_configuration(#[case] config: BatchConfig, #[case] code: &str) {
        let err = config.validate().expect_err("configuration must be rejected");
        assert_eq!(err.code().as_str(), code);
    }

    #[test]
    fn batch_file_path_is_one_based() {
        let path = batch_file_path(Path::new("data"), 1);
        assert_eq!(path, Path::new("data").join("graph1.csv"));
    }
}
