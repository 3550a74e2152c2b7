//! Benchmark parameter types.
//!
//! Each type renders as the Criterion benchmark id so reports group runs by
//! workload size.

use std::fmt;

/// Parameters for a spatial linking benchmark run.
#[derive(Clone, Debug)]
pub struct SpatialBenchParams {
    /// Number of points in the cloud.
    pub point_count: usize,
    /// Dimensionality of each point.
    pub dimensions: usize,
}

impl fmt::Display for SpatialBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.point_count, self.dimensions)
    }
}

/// Parameters for an edge-driven union benchmark run.
#[derive(Clone, Debug)]
pub struct UnionBenchParams {
    /// Number of elements in the universe.
    pub element_count: usize,
    /// Number of edges applied.
    pub edge_count: usize,
}

impl fmt::Display for UnionBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},e={}", self.element_count, self.edge_count)
    }
}
