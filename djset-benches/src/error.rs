//! Benchmark setup error type.
//!
//! Aggregates the failures that may arise while preparing benchmark inputs so
//! setup functions can propagate them with `?`.

use djset_core::{DisjointSetError, PointMatrixError};

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic data generation failed.
    #[error("synthetic data generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Building or querying a partition failed.
    #[error("disjoint-set operation failed: {0}")]
    DisjointSet(#[from] DisjointSetError),
    /// Assembling a point matrix failed.
    #[error("point matrix construction failed: {0}")]
    PointMatrix(#[from] PointMatrixError),
}
