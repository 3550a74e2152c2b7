//! Threshold-linking properties.
//!
//! Builds a forest from a [`PointFixture`] and compares it with the
//! brute-force pairwise oracle, which evaluates every distance in full.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::DisjointSet;

use super::oracle::{canonical_labels, label_count, spatial_labels};
use super::types::PointFixture;

/// Checks that spatial linking matches transitive closure of all pairs
/// within the threshold.
pub(super) fn run_spatial_equivalence_property(fixture: &PointFixture) -> TestCaseResult {
    let mut set = DisjointSet::from_points(&fixture.points, fixture.threshold).map_err(|err| {
        TestCaseError::fail(format!(
            "from_points failed: {err} (layout={:?}, rows={}, threshold={})",
            fixture.layout,
            fixture.points.rows(),
            fixture.threshold,
        ))
    })?;

    let expected = spatial_labels(&fixture.points, fixture.threshold);
    let actual = canonical_labels(&mut set);

    if actual != expected {
        return Err(TestCaseError::fail(format!(
            "spatial partition mismatch (layout={:?}, rows={}, dimension={}, threshold={}): \
             forest={actual:?}, oracle={expected:?}",
            fixture.layout,
            fixture.points.rows(),
            fixture.points.dimension(),
            fixture.threshold,
        )));
    }
    if set.component_count() != label_count(&expected) {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: forest={}, oracle={}",
            set.component_count(),
            label_count(&expected),
        )));
    }
    Ok(())
}

/// Checks that a validated shape never changes the partition.
pub(super) fn run_shape_transparency_property(fixture: &PointFixture) -> TestCaseResult {
    let points = &fixture.points;
    let mut checked =
        DisjointSet::from_points_with_shape(points, points.rows(), points.dimension(), fixture.threshold)
            .map_err(|err| TestCaseError::fail(format!("shape-checked build failed: {err}")))?;
    let mut unchecked = DisjointSet::from_points(points, fixture.threshold)
        .map_err(|err| TestCaseError::fail(format!("unchecked build failed: {err}")))?;

    if checked.ancestors() != unchecked.ancestors() {
        return Err(TestCaseError::fail(format!(
            "shape-checked and unchecked builds diverged (layout={:?})",
            fixture.layout,
        )));
    }
    Ok(())
}
