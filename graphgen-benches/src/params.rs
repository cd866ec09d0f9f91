//! Benchmark parameter types.

use std::fmt;

use graphgen_core::{GeneratorError, GraphGenerator, GraphGeneratorBuilder};

/// Seed used for every benchmark generator.
pub const SEED: u64 = 42;

/// Node counts benchmarked for dataset generation.
pub const NODE_COUNTS: &[usize] = &[100, 500, 1_000];

/// Edge densities benchmarked for dataset generation.
pub const EDGE_PROBABILITIES: &[f64] = &[0.1, 0.9];

/// Parameters for one generation benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GenerateBenchParams {
    /// Number of nodes in the graph.
    pub num_nodes: usize,
    /// Per-pair edge probability.
    pub edge_probability: f64,
}

impl GenerateBenchParams {
    /// Every combination of [`NODE_COUNTS`] and [`EDGE_PROBABILITIES`].
    #[must_use]
    pub fn grid() -> Vec<Self> {
        NODE_COUNTS
            .iter()
            .flat_map(|&num_nodes| {
                EDGE_PROBABILITIES.iter().map(move |&edge_probability| Self {
                    num_nodes,
                    edge_probability,
                })
            })
            .collect()
    }

    /// Builds a seeded generator for these parameters.
    ///
    /// # Errors
    /// Returns [`GeneratorError`] when the probability is out of range.
    pub fn generator(self) -> Result<GraphGenerator, GeneratorError> {
        GraphGeneratorBuilder::new()
            .with_num_nodes(self.num_nodes)
            .with_edge_probability(self.edge_probability)
            .with_seed(SEED)
            .build()
    }
}

impl fmt::Display for GenerateBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}", self.num_nodes, self.edge_probability)
    }
}
