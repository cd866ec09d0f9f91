//! Graph dataset generation and CSV output.

use std::{fs::File, io::Write, path::Path};

use csv::{Terminator, WriterBuilder};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{Span, field, info, instrument, warn};

use crate::{
    Result,
    edge::{EdgeSampling, Edges, HEADER},
    error::GeneratorError,
};

/// Node counts above this threshold log a warning because output grows
/// quadratically.
pub const LARGE_GRAPH_WARN_THRESHOLD: usize = 5000;

/// Counts gathered while writing a dataset.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GenerationSummary {
    /// Number of nodes in the sampled graph.
    pub num_nodes: usize,
    /// Number of unordered pairs evaluated.
    pub pairs_considered: usize,
    /// Number of edge rows written after the header.
    pub edges_written: usize,
    /// Number of written edges whose weight was negated.
    pub negative_edges: usize,
}

/// Validated generator configuration produced by
/// [`crate::GraphGeneratorBuilder`].
///
/// # Examples
/// ```
/// use graphgen_core::GraphGeneratorBuilder;
///
/// let generator = GraphGeneratorBuilder::new()
///     .with_num_nodes(4)
///     .with_edge_probability(1.0)
///     .build()?;
/// let mut buffer = Vec::new();
/// let summary = generator.write_to_writer(&mut buffer)?;
/// assert_eq!(summary.edges_written, 6);
/// assert!(String::from_utf8(buffer)?.starts_with("source,target,weight\r\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GraphGenerator {
    num_nodes: usize,
    sampling: EdgeSampling,
    seed: Option<u64>,
}

impl GraphGenerator {
    pub(crate) const fn new(
        num_nodes: usize,
        edge_probability: f64,
        negative_weight_probability: f64,
        seed: Option<u64>,
    ) -> Self {
        Self {
            num_nodes,
            sampling: EdgeSampling {
                edge_probability,
                negative_weight_probability,
            },
            seed,
        }
    }

    /// Returns the number of nodes.
    #[must_use]
    pub const fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Returns the per-pair edge probability.
    #[must_use]
    pub const fn edge_probability(&self) -> f64 {
        self.sampling.edge_probability
    }

    /// Returns the per-edge negation probability.
    #[must_use]
    pub const fn negative_weight_probability(&self) -> f64 {
        self.sampling.negative_weight_probability
    }

    /// Returns the seed, if one was configured.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Creates the random number generator for one run.
    ///
    /// Seeded generators restart from the same state on every call; unseeded
    /// generators draw fresh entropy.
    #[must_use]
    pub fn rng(&self) -> SmallRng {
        self.seed
            .map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64)
    }

    /// Lazily samples edges using `rng`.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::GraphGeneratorBuilder;
    /// use rand::{SeedableRng, rngs::SmallRng};
    ///
    /// let generator = GraphGeneratorBuilder::new()
    ///     .with_num_nodes(3)
    ///     .with_edge_probability(1.0)
    ///     .build()?;
    /// let mut rng = SmallRng::seed_from_u64(1);
    /// let targets: Vec<String> = generator
    ///     .edges(&mut rng)
    ///     .map(|edge| edge.target.to_string())
    ///     .collect();
    /// assert_eq!(targets, ["Node1", "Node2", "Node2"]);
    /// # Ok::<(), graphgen_core::GeneratorError>(())
    /// ```
    pub fn edges<'rng, R: Rng>(&self, rng: &'rng mut R) -> Edges<'rng, R> {
        Edges::new(rng, self.num_nodes, self.sampling)
    }

    /// Creates or truncates `path` and writes the dataset to it.
    ///
    /// The file is flushed before returning and closed on every path. A
    /// failure part-way through leaves the partially written file in place.
    ///
    /// # Errors
    /// Returns [`GeneratorError::Create`] when the file cannot be opened and
    /// [`GeneratorError::Write`] or [`GeneratorError::Flush`] when writing
    /// fails.
    #[instrument(name = "generator.write_to_path", err, skip(self), fields(path = field::Empty))]
    pub fn write_to_path(&self, path: &Path) -> Result<GenerationSummary> {
        Span::current().record("path", field::display(path.display()));
        let file = File::create(path).map_err(|source| GeneratorError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        self.write_to_writer(file)
    }

    /// Writes the dataset to `writer` using this generator's own random
    /// number generator.
    ///
    /// # Errors
    /// Returns [`GeneratorError::Write`] or [`GeneratorError::Flush`] when the
    /// sink rejects data.
    pub fn write_to_writer<W: Write>(&self, writer: W) -> Result<GenerationSummary> {
        let mut rng = self.rng();
        self.write_with_rng(writer, &mut rng)
    }

    /// Writes the dataset to `writer`, drawing randomness from `rng`.
    ///
    /// # Errors
    /// Returns [`GeneratorError::Write`] or [`GeneratorError::Flush`] when the
    /// sink rejects data.
    #[instrument(
        name = "generator.write",
        err,
        skip(self, writer, rng),
        fields(
            num_nodes = self.num_nodes,
            edge_probability = self.sampling.edge_probability,
            negative_weight_probability = self.sampling.negative_weight_probability,
        ),
    )]
    pub fn write_with_rng<W: Write, R: Rng>(
        &self,
        writer: W,
        rng: &mut R,
    ) -> Result<GenerationSummary> {
        if self.num_nodes > LARGE_GRAPH_WARN_THRESHOLD {
            warn!(
                num_nodes = self.num_nodes,
                threshold = LARGE_GRAPH_WARN_THRESHOLD,
                "pair enumeration is quadratic; output will be large"
            );
        }

        let mut csv_writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::CRLF)
            .from_writer(writer);
        csv_writer.write_record(HEADER)?;

        let mut summary = GenerationSummary {
            num_nodes: self.num_nodes,
            ..GenerationSummary::default()
        };
        let mut edges = self.edges(rng);
        for edge in edges.by_ref() {
            csv_writer.serialize(edge)?;
            summary.edges_written = summary.edges_written.saturating_add(1);
            if edge.weight.is_negative() {
                summary.negative_edges = summary.negative_edges.saturating_add(1);
            }
        }
        summary.pairs_considered = edges.pairs_considered();

        csv_writer
            .flush()
            .map_err(|source| GeneratorError::Flush { source })?;

        info!(
            pairs_considered = summary.pairs_considered,
            edges_written = summary.edges_written,
            negative_edges = summary.negative_edges,
            "dataset written"
        );
        Ok(summary)
    }
}
