//! Synthetic weighted-graph dataset generator.
//!
//! Enumerates every unordered node pair, samples edge presence and a signed
//! integer weight for each, and streams the realised edges as CSV with
//! CRLF record terminators:
//!
//! ```text
//! source,target,weight
//! Node0,Node1,7
//! Node0,Node2,-3
//! ```
//!
//! Randomness comes from a locally owned [`rand::rngs::SmallRng`], seeded
//! explicitly through [`GraphGeneratorBuilder::with_seed`] or from OS entropy
//! otherwise.

mod batch;
mod builder;
mod edge;
mod error;
mod generator;

pub use crate::{
    batch::{
        BatchConfig, BatchFile, BatchSummary, DEFAULT_BATCH_COUNT, DEFAULT_BATCH_DIRECTORY,
        DEFAULT_BATCH_MAX_NODES, DEFAULT_BATCH_MIN_NODES, batch_file_path, generate_batch,
    },
    builder::{
        DEFAULT_EDGE_PROBABILITY, DEFAULT_FILENAME, DEFAULT_NEGATIVE_WEIGHT_PROBABILITY,
        DEFAULT_NUM_NODES, GraphGeneratorBuilder,
    },
    edge::{EdgeRecord, Edges, HEADER, NodeId, Weight},
    error::{GeneratorError, GeneratorErrorCode, Result},
    generator::{GenerationSummary, GraphGenerator, LARGE_GRAPH_WARN_THRESHOLD},
};
