//! Coordinate inputs for the spatial constructors.
//!
//! [`Coordinates`] is the seam through which upstream collaborators hand an
//! `N x D` matrix to [`crate::DisjointSet::from_points`]. [`PointMatrix`] is the
//! owned, row-major implementation; fixed-width point slices such as
//! `[[f32; 3]]` implement the trait directly.

use crate::error::PointMatrixError;

/// Read-only view of an `N x D` matrix of coordinates.
///
/// # Examples
/// ```
/// use djset_core::Coordinates;
///
/// let points = [[0.0_f32, 0.0, 0.0], [1.0, 2.0, 3.0]];
/// assert_eq!(points.rows(), 2);
/// assert_eq!(points.dimension(), 3);
/// assert_eq!(points.row(1), Some(&[1.0, 2.0, 3.0][..]));
/// assert_eq!(points.row(2), None);
/// ```
pub trait Coordinates {
    /// Returns the number of points (matrix rows).
    fn rows(&self) -> usize;

    /// Returns the number of components per point (matrix columns).
    fn dimension(&self) -> usize;

    /// Returns the coordinates of the point at `index`, or `None` when the
    /// index is out of range.
    fn row(&self, index: usize) -> Option<&[f32]>;
}

impl<const D: usize> Coordinates for [[f32; D]] {
    fn rows(&self) -> usize {
        self.len()
    }

    fn dimension(&self) -> usize {
        D
    }

    fn row(&self, index: usize) -> Option<&[f32]> {
        self.get(index).map(<[f32; D]>::as_slice)
    }
}

impl<const D: usize, const N: usize> Coordinates for [[f32; D]; N] {
    fn rows(&self) -> usize {
        N
    }

    fn dimension(&self) -> usize {
        D
    }

    fn row(&self, index: usize) -> Option<&[f32]> {
        self.as_slice().row(index)
    }
}

impl<const D: usize> Coordinates for Vec<[f32; D]> {
    fn rows(&self) -> usize {
        self.len()
    }

    fn dimension(&self) -> usize {
        D
    }

    fn row(&self, index: usize) -> Option<&[f32]> {
        self.as_slice().row(index)
    }
}

/// Owned point matrix backed by a contiguous row-major buffer.
///
/// # Examples
/// ```
/// use djset_core::{Coordinates, PointMatrix};
///
/// let matrix = PointMatrix::try_from_rows(vec![vec![0.0, 1.0], vec![2.0, 3.0]])
///     .expect("rows share a dimension");
/// assert_eq!(matrix.rows(), 2);
/// assert_eq!(matrix.dimension(), 2);
/// assert_eq!(matrix.data(), &[0.0, 1.0, 2.0, 3.0]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointMatrix {
    rows: usize,
    dimension: usize,
    values: Vec<f32>,
}

impl PointMatrix {
    /// Builds a matrix from a row-major buffer.
    ///
    /// # Errors
    /// Returns [`PointMatrixError::CapacityOverflow`] when `rows * dimension`
    /// overflows and [`PointMatrixError::BufferLength`] when `values` does not
    /// hold exactly `rows * dimension` entries.
    ///
    /// # Examples
    /// ```
    /// use djset_core::{PointMatrix, PointMatrixError};
    ///
    /// let matrix = PointMatrix::try_from_row_major(2, 3, vec![0.0; 6])
    ///     .expect("buffer matches the shape");
    /// assert_eq!(matrix.row(1), Some(&[0.0, 0.0, 0.0][..]));
    ///
    /// let err = PointMatrix::try_from_row_major(2, 3, vec![0.0; 5]);
    /// assert!(matches!(err, Err(PointMatrixError::BufferLength { len: 5, .. })));
    /// ```
    pub fn try_from_row_major(
        rows: usize,
        dimension: usize,
        values: Vec<f32>,
    ) -> Result<Self, PointMatrixError> {
        let expected = rows
            .checked_mul(dimension)
            .ok_or(PointMatrixError::CapacityOverflow { rows, dimension })?;
        if values.len() != expected {
            return Err(PointMatrixError::BufferLength {
                rows,
                dimension,
                len: values.len(),
            });
        }
        Ok(Self {
            rows,
            dimension,
            values,
        })
    }

    /// Builds a matrix from nested rows, validating a uniform dimension.
    ///
    /// An empty `data` vector yields an empty matrix of dimension zero.
    ///
    /// # Errors
    /// Returns [`PointMatrixError::RaggedRow`] when a row's length differs
    /// from the first row's.
    ///
    /// # Examples
    /// ```
    /// use djset_core::{PointMatrix, PointMatrixError};
    ///
    /// let err = PointMatrix::try_from_rows(vec![vec![0.0], vec![1.0, 2.0]]);
    /// assert!(matches!(
    ///     err,
    ///     Err(PointMatrixError::RaggedRow { row: 1, expected: 1, actual: 2 })
    /// ));
    /// ```
    pub fn try_from_rows(data: Vec<Vec<f32>>) -> Result<Self, PointMatrixError> {
        let Some(first) = data.first() else {
            return Ok(Self::default());
        };
        let dimension = first.len();
        for (row, values) in data.iter().enumerate() {
            if values.len() != dimension {
                return Err(PointMatrixError::RaggedRow {
                    row,
                    expected: dimension,
                    actual: values.len(),
                });
            }
        }
        let rows = data.len();
        let values = data.into_iter().flatten().collect();
        Self::try_from_row_major(rows, dimension, values)
    }

    /// Copies fixed-width points into a matrix.
    ///
    /// # Examples
    /// ```
    /// use djset_core::PointMatrix;
    ///
    /// let matrix = PointMatrix::from_points(&[[1.0_f32, 2.0, 3.0]]);
    /// assert_eq!(matrix.rows(), 1);
    /// assert_eq!(matrix.dimension(), 3);
    /// ```
    #[must_use]
    pub fn from_points<const D: usize>(points: &[[f32; D]]) -> Self {
        Self {
            rows: points.len(),
            dimension: D,
            values: points.iter().flatten().copied().collect(),
        }
    }

    /// Returns the number of rows.
    #[must_use]
    #[rustfmt::skip]
    pub const fn rows(&self) -> usize { self.rows }

    /// Returns the dimensionality of each row.
    #[must_use]
    #[rustfmt::skip]
    pub const fn dimension(&self) -> usize { self.dimension }

    /// Returns the underlying row-major buffer.
    #[must_use]
    pub fn data(&self) -> &[f32] {
        &self.values
    }

    /// Returns the row at `index`, or `None` when out of range.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[f32]> {
        if index >= self.rows {
            return None;
        }
        let start = index.checked_mul(self.dimension)?;
        let end = start.checked_add(self.dimension)?;
        self.values.get(start..end)
    }
}

impl Coordinates for PointMatrix {
    fn rows(&self) -> usize {
        self.rows
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn row(&self, index: usize) -> Option<&[f32]> {
        Self::row(self, index)
    }
}
