//! Benchmark support crate for senro.
//!
//! Provides synthetic topologies and parameter types used by the Criterion
//! benchmarks for graph construction and walk stepping.

pub mod error;
pub mod params;
pub mod topology;
