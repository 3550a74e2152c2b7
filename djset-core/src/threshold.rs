//! Validated proximity threshold for spatial linking.

use crate::error::{DisjointSetError, Result};

/// Maximum Euclidean distance at which two points are linked.
///
/// The threshold is validated once and stores its square so the pairwise
/// scan compares squared distances without taking roots.
///
/// # Examples
/// ```
/// use djset_core::{DisjointSetError, LinkThreshold};
///
/// let threshold = LinkThreshold::new(1.5).expect("threshold is valid");
/// assert_eq!(threshold.get(), 1.5);
/// assert_eq!(threshold.squared(), 2.25);
///
/// let err = LinkThreshold::new(-1.0);
/// assert!(matches!(err, Err(DisjointSetError::InvalidThreshold { .. })));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkThreshold {
    value: f32,
    squared: f32,
}

impl LinkThreshold {
    /// Validates `value` as a linking threshold.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::InvalidThreshold`] when `value` is
    /// negative, NaN or infinite, or when its square overflows `f32`.
    #[expect(clippy::float_arithmetic, reason = "threshold is squared once")]
    pub fn new(value: f32) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(DisjointSetError::InvalidThreshold { got: value });
        }
        let squared = value * value;
        // An infinite square would link pairs whose distance also overflows.
        if !squared.is_finite() {
            return Err(DisjointSetError::InvalidThreshold { got: value });
        }
        Ok(Self { value, squared })
    }

    /// Returns the threshold as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> f32 { self.value }

    /// Returns the squared threshold used for comparisons.
    #[must_use]
    #[rustfmt::skip]
    pub const fn squared(self) -> f32 { self.squared }

    /// Reports whether `left` and `right` lie within the threshold.
    ///
    /// Squared differences accumulate one dimension at a time and the scan
    /// stops as soon as the partial sum exceeds the squared threshold. Both
    /// slices are expected to share a length; extra trailing values in the
    /// longer slice are ignored.
    ///
    /// # Examples
    /// ```
    /// use djset_core::LinkThreshold;
    ///
    /// let threshold = LinkThreshold::new(5.0).expect("threshold is valid");
    /// assert!(threshold.links(&[0.0, 0.0], &[3.0, 4.0]));
    /// assert!(!threshold.links(&[0.0, 0.0], &[4.0, 4.0]));
    /// ```
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "squared Euclidean distance")]
    pub fn links(self, left: &[f32], right: &[f32]) -> bool {
        let mut sum = 0.0_f32;
        for (l, r) in left.iter().zip(right) {
            let diff = l - r;
            sum += diff * diff;
            if sum > self.squared {
                return false;
            }
        }
        sum <= self.squared
    }
}
