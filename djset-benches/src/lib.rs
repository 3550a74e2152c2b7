//! Benchmark support crate for djset.
//!
//! Provides seeded synthetic point clouds, edge workloads and parameter types
//! used by the Criterion benchmarks for union-find operations and spatial
//! linking.

pub mod error;
pub mod params;
pub mod source;
