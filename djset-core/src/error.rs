//! Error types for the disjoint-set engine.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced by [`crate::DisjointSet`] construction and queries.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DisjointSetError {
    /// The supplied point matrix did not have the declared shape.
    #[error(
        "point matrix is {rows}x{cols} but {expected_rows}x{expected_cols} was declared"
    )]
    ShapeMismatch {
        /// Row count declared by the caller.
        expected_rows: usize,
        /// Column count declared by the caller.
        expected_cols: usize,
        /// Row count of the supplied matrix.
        rows: usize,
        /// Column count of the supplied matrix.
        cols: usize,
    },
    /// An element id fell outside `[0, len)`.
    #[error("element {element} is out of range for a set of {len} elements")]
    ElementOutOfRange {
        /// The offending element id.
        element: usize,
        /// Number of elements owned by the set.
        len: usize,
    },
    /// The linking threshold was negative, not finite, or too large to square.
    #[error("unit distance threshold must be finite, non-negative and have a finite square (got {got})")]
    InvalidThreshold {
        /// The rejected threshold.
        got: f32,
    },
    /// A coordinate was NaN or infinite.
    #[error("coordinate at row {row}, column {column} is not finite")]
    NonFiniteCoordinate {
        /// Row holding the offending value.
        row: usize,
        /// Column holding the offending value.
        column: usize,
    },
    /// A coordinate source failed to yield a row it advertised.
    #[error("coordinate source advertised {rows} rows but row {row} is missing")]
    MissingRow {
        /// Row that could not be read.
        row: usize,
        /// Number of rows the source advertised.
        rows: usize,
    },
    /// A coordinate source yielded a row narrower or wider than its dimension.
    #[error("row {row} has {actual} coordinates but dimension {expected} was advertised")]
    RowWidth {
        /// Row with the wrong width.
        row: usize,
        /// Dimension the source advertised.
        expected: usize,
        /// Number of coordinates the row held.
        actual: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The supplied point matrix did not have the declared shape.
        ShapeMismatch => ShapeMismatch { .. } => "DJSET_SHAPE_MISMATCH",
        /// An element id fell outside `[0, len)`.
        ElementOutOfRange => ElementOutOfRange { .. } => "DJSET_ELEMENT_OUT_OF_RANGE",
        /// The linking threshold was negative, not finite, or too large to square.
        InvalidThreshold => InvalidThreshold { .. } => "DJSET_INVALID_THRESHOLD",
        /// A coordinate was NaN or infinite.
        NonFiniteCoordinate => NonFiniteCoordinate { .. } => "DJSET_NON_FINITE_COORDINATE",
        /// A coordinate source failed to yield a row it advertised.
        MissingRow => MissingRow { .. } => "DJSET_MISSING_ROW",
        /// A coordinate source yielded a row whose width differs from its dimension.
        RowWidth => RowWidth { .. } => "DJSET_ROW_WIDTH",
    }
}

/// Error produced while assembling a [`crate::PointMatrix`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PointMatrixError {
    /// A row's length differed from the first row's length.
    #[error("row {row} has length {actual} but expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },
    /// A row-major buffer did not hold `rows * dimension` values.
    #[error("buffer holds {len} values but {rows} rows of dimension {dimension} were declared")]
    BufferLength {
        /// Declared row count.
        rows: usize,
        /// Declared dimension.
        dimension: usize,
        /// Actual buffer length.
        len: usize,
    },
    /// `rows * dimension` overflowed `usize`.
    #[error("matrix with {rows} rows and dimension {dimension} exceeds capacity limits")]
    CapacityOverflow {
        /// Declared row count.
        rows: usize,
        /// Declared dimension.
        dimension: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`PointMatrixError`] variants.
    enum PointMatrixErrorCode for PointMatrixError {
        /// A row's length differed from the first row's length.
        RaggedRow => RaggedRow { .. } => "POINT_MATRIX_RAGGED_ROW",
        /// A row-major buffer did not hold `rows * dimension` values.
        BufferLength => BufferLength { .. } => "POINT_MATRIX_BUFFER_LENGTH",
        /// `rows * dimension` overflowed `usize`.
        CapacityOverflow => CapacityOverflow { .. } => "POINT_MATRIX_CAPACITY_OVERFLOW",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T, E = DisjointSetError> = core::result::Result<T, E>;
