//! Spatial constructors that seed a partition from point proximity.
//!
//! Every unordered pair of rows is compared once, so construction costs
//! `O(N^2 * D)`. Callers are expected to bound batch sizes.

use tracing::{debug, instrument, warn};

use super::DisjointSet;
use crate::{
    error::{DisjointSetError, Result},
    points::Coordinates,
    threshold::LinkThreshold,
};

impl DisjointSet {
    /// Builds a partition linking every pair of points whose Euclidean
    /// distance is at most `unit_dist_threshold`.
    ///
    /// The element count is the row count of `points`. Linking is transitive,
    /// so chains of nearby points collapse into a single component.
    ///
    /// # Errors
    /// - [`DisjointSetError::InvalidThreshold`] when the threshold is
    ///   negative, not finite, or its square overflows `f32`.
    /// - [`DisjointSetError::NonFiniteCoordinate`] when any coordinate is NaN
    ///   or infinite.
    /// - [`DisjointSetError::MissingRow`] when `points` cannot yield a row it
    ///   advertised.
    /// - [`DisjointSetError::RowWidth`] when a row's length differs from
    ///   `points.dimension()`.
    ///
    /// # Examples
    /// ```
    /// use djset_core::DisjointSet;
    ///
    /// let points = [[0.0_f32], [1.0], [2.0], [5.0]];
    /// let mut set = DisjointSet::from_points(&points, 1.5)?;
    /// assert_eq!(set.component_count(), 2);
    /// assert!(set.same_component(0, 2)?);
    /// assert!(!set.same_component(2, 3)?);
    /// # Ok::<(), djset_core::DisjointSetError>(())
    /// ```
    pub fn from_points<C>(points: &C, unit_dist_threshold: f32) -> Result<Self>
    where
        C: Coordinates + ?Sized,
    {
        let threshold = LinkThreshold::new(unit_dist_threshold)?;
        Self::from_points_with_threshold(points, threshold)
    }

    /// Builds a partition like [`Self::from_points`] after asserting that
    /// `points` is exactly `rows x cols`.
    ///
    /// The shape is checked before the threshold and before any distance is
    /// computed.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ShapeMismatch`] when the shape differs,
    /// and otherwise the errors of [`Self::from_points`].
    ///
    /// # Examples
    /// ```
    /// use djset_core::{DisjointSet, DisjointSetError, PointMatrix};
    ///
    /// let points = PointMatrix::from_points(&[[0.0_f32, 0.0]; 4]);
    /// let err = DisjointSet::from_points_with_shape(&points, 3, 2, 1.0);
    /// assert!(matches!(
    ///     err,
    ///     Err(DisjointSetError::ShapeMismatch { expected_rows: 3, rows: 4, .. })
    /// ));
    /// ```
    pub fn from_points_with_shape<C>(
        points: &C,
        rows: usize,
        cols: usize,
        unit_dist_threshold: f32,
    ) -> Result<Self>
    where
        C: Coordinates + ?Sized,
    {
        let (actual_rows, actual_cols) = (points.rows(), points.dimension());
        if actual_rows != rows || actual_cols != cols {
            warn!(
                expected_rows = rows,
                expected_cols = cols,
                rows = actual_rows,
                cols = actual_cols,
                "point matrix shape mismatch"
            );
            return Err(DisjointSetError::ShapeMismatch {
                expected_rows: rows,
                expected_cols: cols,
                rows: actual_rows,
                cols: actual_cols,
            });
        }
        Self::from_points(points, unit_dist_threshold)
    }

    /// Builds a partition from `points` using a pre-validated threshold.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::NonFiniteCoordinate`],
    /// [`DisjointSetError::MissingRow`] or [`DisjointSetError::RowWidth`]
    /// when the coordinates are unusable.
    #[instrument(
        name = "djset.link_points",
        err,
        skip(points, threshold),
        fields(
            rows = points.rows(),
            dimension = points.dimension(),
            threshold = threshold.get()
        ),
    )]
    pub fn from_points_with_threshold<C>(points: &C, threshold: LinkThreshold) -> Result<Self>
    where
        C: Coordinates + ?Sized,
    {
        let rows = collect_rows(points)?;
        let mut set = Self::new(rows.len());
        let mut unions = 0_usize;

        for (left_id, left) in rows.iter().enumerate() {
            for (right_id, right) in rows.iter().enumerate().skip(left_id.saturating_add(1)) {
                if threshold.links(left, right) && set.unite_valid(left_id, right_id) {
                    unions = unions.saturating_add(1);
                }
            }
        }

        debug!(
            components = set.component_count(),
            unions, "spatial linking completed"
        );
        Ok(set)
    }
}

fn collect_rows<C>(points: &C) -> Result<Vec<&[f32]>>
where
    C: Coordinates + ?Sized,
{
    let (rows, dimension) = (points.rows(), points.dimension());
    (0..rows)
        .map(|row| {
            let values = points
                .row(row)
                .ok_or(DisjointSetError::MissingRow { row, rows })?;
            if values.len() != dimension {
                return Err(DisjointSetError::RowWidth {
                    row,
                    expected: dimension,
                    actual: values.len(),
                });
            }
            if let Some(column) = values.iter().position(|value| !value.is_finite()) {
                return Err(DisjointSetError::NonFiniteCoordinate { row, column });
            }
            Ok(values)
        })
        .collect()
}
