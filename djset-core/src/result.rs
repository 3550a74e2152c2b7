//! Cluster labels derived from a partition.
//!
//! Downstream geometry stages consume dense labels rather than raw roots, so
//! [`crate::DisjointSet::clustering`] relabels components as `0..k`.

/// Dense cluster labels for every element of a partition.
///
/// # Examples
/// ```
/// use djset_core::{ClusterId, DisjointSet};
///
/// let mut set = DisjointSet::new(3);
/// set.unite(2, 0)?;
/// let result = set.clustering();
/// let labels = [ClusterId::new(0), ClusterId::new(1), ClusterId::new(0)];
/// assert_eq!(result.assignments(), &labels);
/// assert_eq!(result.cluster_count(), 2);
/// assert_eq!(result.cluster_sizes(), vec![2, 1]);
/// # Ok::<(), djset_core::DisjointSetError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusteringResult {
    assignments: Vec<ClusterId>,
    cluster_count: usize,
}

impl ClusteringResult {
    pub(crate) const fn from_dense(assignments: Vec<ClusterId>, cluster_count: usize) -> Self {
        Self {
            assignments,
            cluster_count,
        }
    }

    /// Returns the label of every element, in element order.
    #[must_use]
    pub fn assignments(&self) -> &[ClusterId] {
        &self.assignments
    }

    /// Returns the number of distinct clusters.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cluster_count(&self) -> usize { self.cluster_count }

    /// Returns the member count of each cluster, indexed by label.
    #[must_use]
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0_usize; self.cluster_count];
        for id in &self.assignments {
            let slot = usize::try_from(id.get())
                .ok()
                .and_then(|index| sizes.get_mut(index));
            if let Some(size) = slot {
                *size = size.saturating_add(1);
            }
        }
        sizes
    }
}

/// Identifier assigned to a cluster.
///
/// # Examples
/// ```
/// use djset_core::ClusterId;
///
/// let id = ClusterId::new(4);
/// assert_eq!(id.get(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClusterId(u64);

impl ClusterId {
    /// Creates a new cluster identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: u64) -> Self { Self(id) }

    /// Returns the underlying numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> u64 { self.0 }
}
