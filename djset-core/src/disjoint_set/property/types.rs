//! Fixture types for disjoint-set property tests.

use crate::PointMatrix;

/// Shape of a generated edge workload.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Topology {
    /// Few random edges; most elements stay singletons.
    Sparse,
    /// Many random edges; the universe usually collapses to one component.
    Dense,
    /// Long paths that force deep trees before compression.
    Chains,
    /// Edges confined to disjoint blocks with no cross-block links.
    Blocks,
}

/// Edge workload applied to a fresh forest through `add_edges`.
#[derive(Clone, Debug)]
pub(super) struct EdgeFixture {
    /// Number of elements in the universe.
    pub element_count: usize,
    /// Batches of `(element, neighbours)` handed to `add_edges` in order.
    pub batches: Vec<(usize, Vec<usize>)>,
    /// Topology used during generation.
    pub topology: Topology,
}

impl EdgeFixture {
    /// Iterates the individual `(element, neighbour)` edges in batch order.
    pub(super) fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.batches.iter().flat_map(|(element, neighbours)| {
            neighbours.iter().map(move |&neighbour| (*element, neighbour))
        })
    }
}

/// Spatial arrangement of a generated point cloud.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum PointLayout {
    /// Points drawn uniformly from a cube.
    Uniform,
    /// Tight blobs around a handful of well-separated centres.
    Clustered,
    /// Integer lattice points, which place many pairs exactly on the threshold.
    Lattice,
}

/// Point cloud plus the linking threshold to build it with.
#[derive(Clone, Debug)]
pub(super) struct PointFixture {
    /// Row-major coordinates.
    pub points: PointMatrix,
    /// Linking threshold passed to `from_points`.
    pub threshold: f32,
    /// Layout used during generation.
    pub layout: PointLayout,
}
