//! Shared test utilities used across graphgen crates.

pub mod dataset;
pub mod profile;
pub mod tracing;
