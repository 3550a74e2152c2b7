//! Shared test utilities for `djset-core`.

use std::cell::Cell;

use djset_test_support::proptest_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{Coordinates, PointMatrix};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `DJSET_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// [`Coordinates`] wrapper that records how many rows were read.
///
/// Lets tests assert that a constructor rejected its input before touching
/// any coordinate.
pub(crate) struct CountingCoordinates {
    inner: PointMatrix,
    reads: Cell<usize>,
}

impl CountingCoordinates {
    pub(crate) fn new(inner: PointMatrix) -> Self {
        Self {
            inner,
            reads: Cell::new(0),
        }
    }

    /// Returns the number of `row` calls observed so far.
    pub(crate) fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl Coordinates for CountingCoordinates {
    fn rows(&self) -> usize {
        self.inner.rows()
    }

    fn dimension(&self) -> usize {
        self.inner.dimension()
    }

    fn row(&self, index: usize) -> Option<&[f32]> {
        self.reads.set(self.reads.get().saturating_add(1));
        self.inner.row(index)
    }
}

/// [`Coordinates`] implementation that advertises more rows than it holds.
pub(crate) struct TruncatedCoordinates {
    pub(crate) advertised: usize,
    pub(crate) inner: PointMatrix,
}

impl Coordinates for TruncatedCoordinates {
    fn rows(&self) -> usize {
        self.advertised
    }

    fn dimension(&self) -> usize {
        self.inner.dimension()
    }

    fn row(&self, index: usize) -> Option<&[f32]> {
        self.inner.row(index)
    }
}

/// [`Coordinates`] implementation whose rows may disagree with the dimension
/// it advertises.
pub(crate) struct RaggedCoordinates {
    pub(crate) dimension: usize,
    pub(crate) rows: Vec<Vec<f32>>,
}

impl Coordinates for RaggedCoordinates {
    fn rows(&self) -> usize {
        self.rows.len()
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn row(&self, index: usize) -> Option<&[f32]> {
        self.rows.get(index).map(Vec::as_slice)
    }
}
