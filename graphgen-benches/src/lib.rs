//! Benchmark support crate for graphgen.
//!
//! Provides the parameter grid shared by the Criterion benchmarks that
//! measure pair enumeration and CSV serialisation.

pub mod params;
