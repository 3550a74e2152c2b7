//! Seeded synthetic inputs for benchmarking.
//!
//! Every generator takes an explicit seed so repeated Criterion runs measure
//! identical workloads.

use djset_core::PointMatrix;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;

/// Errors raised while generating synthetic inputs.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SyntheticError {
    /// A point cloud was requested with zero dimensions.
    #[error("dimensions must be positive")]
    ZeroDimensions,
    /// A blob cloud was requested with no blobs.
    #[error("cluster count must be positive")]
    ZeroClusters,
    /// More blobs than points were requested.
    #[error("cluster count {cluster_count} exceeds point count {point_count}")]
    ClusterCountExceedsPointCount {
        /// Requested number of blobs.
        cluster_count: usize,
        /// Requested number of points.
        point_count: usize,
    },
    /// A floating-point parameter was non-finite or not positive.
    #[error("{parameter} must be finite and positive")]
    InvalidFloatParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
    },
    /// `point_count * dimensions` does not fit in `usize`.
    #[error("{point_count} points of dimension {dimensions} overflow the buffer size")]
    Overflow {
        /// Requested number of points.
        point_count: usize,
        /// Requested dimensionality.
        dimensions: usize,
    },
    /// An edge workload was requested over an empty universe.
    #[error("edges require at least one element")]
    EmptyUniverse,
}

/// Uniform random cloud in the unit cube.
#[derive(Clone, Debug)]
pub struct UniformConfig {
    /// Number of points to generate.
    pub point_count: usize,
    /// Dimensionality of each point.
    pub dimensions: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Well-separated blobs of points, each uniform within a small cube.
#[derive(Clone, Debug)]
pub struct BlobConfig {
    /// Number of points to generate.
    pub point_count: usize,
    /// Dimensionality of each point.
    pub dimensions: usize,
    /// Number of blobs.
    pub cluster_count: usize,
    /// Distance between consecutive blob centres along the first axis.
    pub separation: f32,
    /// Half-width of each blob's cube.
    pub spread: f32,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates a uniform cloud.
///
/// # Errors
/// Returns [`SyntheticError`] when the configuration is invalid.
///
/// # Examples
/// ```
/// use djset_benches::source::{UniformConfig, uniform_points};
///
/// let points = uniform_points(&UniformConfig { point_count: 8, dimensions: 3, seed: 7 })
///     .expect("configuration is valid");
/// assert_eq!(points.rows(), 8);
/// assert_eq!(points.dimension(), 3);
/// ```
pub fn uniform_points(config: &UniformConfig) -> Result<PointMatrix, SyntheticError> {
    let total = checked_total(config.point_count, config.dimensions)?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let values = (0..total).map(|_| rng.gen_range(0.0_f32..1.0)).collect();
    assemble(config.point_count, config.dimensions, values)
}

/// Generates a blob cloud whose points are assigned to blobs round-robin.
///
/// # Errors
/// Returns [`SyntheticError`] when the configuration is invalid.
#[expect(
    clippy::float_arithmetic,
    reason = "blob centres and offsets are floating-point coordinates"
)]
#[expect(
    clippy::cast_precision_loss,
    reason = "blob indices are small enough to be exact in f32"
)]
pub fn blob_points(config: &BlobConfig) -> Result<PointMatrix, SyntheticError> {
    validate_blobs(config)?;
    let total = checked_total(config.point_count, config.dimensions)?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut values = Vec::with_capacity(total);
    let blobs = (0..config.cluster_count).cycle().take(config.point_count);
    for blob in blobs {
        let centre = blob as f32 * config.separation;
        values.push(centre + rng.gen_range(-config.spread..config.spread));
        for _ in 1..config.dimensions {
            values.push(rng.gen_range(-config.spread..config.spread));
        }
    }
    assemble(config.point_count, config.dimensions, values)
}

/// Generates `edge_count` random `(element, neighbour)` pairs over
/// `0..element_count`.
///
/// # Errors
/// Returns [`SyntheticError::EmptyUniverse`] when `element_count` is zero.
pub fn random_edges(
    element_count: usize,
    edge_count: usize,
    seed: u64,
) -> Result<Vec<(usize, usize)>, SyntheticError> {
    if element_count == 0 {
        return Err(SyntheticError::EmptyUniverse);
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    Ok((0..edge_count)
        .map(|_| {
            (
                rng.gen_range(0..element_count),
                rng.gen_range(0..element_count),
            )
        })
        .collect())
}

fn validate_blobs(config: &BlobConfig) -> Result<(), SyntheticError> {
    if config.cluster_count == 0 {
        return Err(SyntheticError::ZeroClusters);
    }
    if config.cluster_count > config.point_count {
        return Err(SyntheticError::ClusterCountExceedsPointCount {
            cluster_count: config.cluster_count,
            point_count: config.point_count,
        });
    }
    for (parameter, value) in [("separation", config.separation), ("spread", config.spread)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(SyntheticError::InvalidFloatParameter { parameter });
        }
    }
    Ok(())
}

fn checked_total(point_count: usize, dimensions: usize) -> Result<usize, SyntheticError> {
    if dimensions == 0 {
        return Err(SyntheticError::ZeroDimensions);
    }
    point_count
        .checked_mul(dimensions)
        .ok_or(SyntheticError::Overflow {
            point_count,
            dimensions,
        })
}

fn assemble(
    point_count: usize,
    dimensions: usize,
    values: Vec<f32>,
) -> Result<PointMatrix, SyntheticError> {
    PointMatrix::try_from_row_major(point_count, dimensions, values).map_err(|_| {
        SyntheticError::Overflow {
            point_count,
            dimensions,
        }
    })
}
