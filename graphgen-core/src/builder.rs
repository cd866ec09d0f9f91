//! Builder utilities for configuring the graph dataset generator.
//!
//! Collects the node count, the two probabilities, and an optional seed, and
//! validates them before constructing a [`GraphGenerator`].

use crate::{Result, error::GeneratorError, generator::GraphGenerator};

/// Node count used when none is supplied.
pub const DEFAULT_NUM_NODES: usize = 1000;
/// Per-pair edge probability used when none is supplied.
pub const DEFAULT_EDGE_PROBABILITY: f64 = 0.9;
/// Per-edge negation probability used when none is supplied.
pub const DEFAULT_NEGATIVE_WEIGHT_PROBABILITY: f64 = 0.0;
/// Output file name used when none is supplied.
pub const DEFAULT_FILENAME: &str = "large_graph_positive_large.csv";

/// Configures and constructs [`GraphGenerator`] instances.
///
/// # Examples
/// ```
/// use graphgen_core::GraphGeneratorBuilder;
///
/// let generator = GraphGeneratorBuilder::new()
///     .with_num_nodes(16)
///     .with_edge_probability(0.5)
///     .with_seed(7)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(generator.num_nodes(), 16);
/// assert_eq!(generator.seed(), Some(7));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GraphGeneratorBuilder {
    num_nodes: usize,
    edge_probability: f64,
    negative_weight_probability: f64,
    seed: Option<u64>,
}

impl Default for GraphGeneratorBuilder {
    fn default() -> Self {
        Self {
            num_nodes: DEFAULT_NUM_NODES,
            edge_probability: DEFAULT_EDGE_PROBABILITY,
            negative_weight_probability: DEFAULT_NEGATIVE_WEIGHT_PROBABILITY,
            seed: None,
        }
    }
}

impl GraphGeneratorBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::GraphGeneratorBuilder;
    ///
    /// let builder = GraphGeneratorBuilder::new();
    /// assert_eq!(builder.num_nodes(), 1000);
    /// assert_eq!(builder.seed(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of nodes.
    #[must_use]
    pub const fn with_num_nodes(mut self, num_nodes: usize) -> Self {
        self.num_nodes = num_nodes;
        self
    }

    /// Overrides the probability that any given pair is connected.
    #[must_use]
    pub const fn with_edge_probability(mut self, probability: f64) -> Self {
        self.edge_probability = probability;
        self
    }

    /// Overrides the probability that a realised edge has its weight negated.
    #[must_use]
    pub const fn with_negative_weight_probability(mut self, probability: f64) -> Self {
        self.negative_weight_probability = probability;
        self
    }

    /// Seeds the generator so repeated runs produce identical output.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Clears any previously configured seed.
    #[must_use]
    pub const fn without_seed(mut self) -> Self {
        self.seed = None;
        self
    }

    /// Returns the configured node count.
    #[must_use]
    pub const fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Returns the configured edge probability.
    #[must_use]
    pub const fn edge_probability(&self) -> f64 {
        self.edge_probability
    }

    /// Returns the configured negative-weight probability.
    #[must_use]
    pub const fn negative_weight_probability(&self) -> f64 {
        self.negative_weight_probability
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration and constructs a [`GraphGenerator`].
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidProbability`] when either probability
    /// is NaN, infinite, or outside `[0, 1]`.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::{GeneratorError, GraphGeneratorBuilder};
    ///
    /// let err = GraphGeneratorBuilder::new()
    ///     .with_edge_probability(1.5)
    ///     .build()
    ///     .expect_err("probabilities above one are rejected");
    /// assert!(matches!(err, GeneratorError::InvalidProbability { .. }));
    /// ```
    pub fn build(self) -> Result<GraphGenerator> {
        let edge_probability = validate_probability("edge_probability", self.edge_probability)?;
        let negative_weight_probability = validate_probability(
            "negative_weight_probability",
            self.negative_weight_probability,
        )?;
        Ok(GraphGenerator::new(
            self.num_nodes,
            edge_probability,
            negative_weight_probability,
            self.seed,
        ))
    }
}

pub(crate) fn validate_probability(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(GeneratorError::InvalidProbability { parameter, value })
    }
}
