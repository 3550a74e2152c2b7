//! Disjoint-set forest with union by rank and path compression.
//!
//! Every element owns one [`Node`] record holding its parent link, rank and
//! subtree size. Ranks and sizes are only meaningful on roots; all reads go
//! through [`DisjointSet::find`] first. Element ids are validated at the public
//! boundary so a rejected call never touches the forest.

mod spatial;

use std::{
    cmp::Ordering,
    collections::{BTreeMap, HashMap},
};

use crate::{
    error::{DisjointSetError, Result},
    result::{ClusterId, ClusteringResult},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Node {
    parent: usize,
    rank: usize,
    size: usize,
}

impl Node {
    const fn singleton(id: usize) -> Self {
        Self {
            parent: id,
            rank: 0,
            size: 1,
        }
    }
}

/// Partition of the elements `0..len` into disjoint components.
///
/// Queries take `&mut self` because [`Self::find`] compresses paths as it
/// walks. The structure performs no internal synchronisation; share it across
/// threads only behind an exclusive lock.
///
/// # Examples
/// ```
/// use djset_core::DisjointSet;
///
/// let mut set = DisjointSet::new(5);
/// set.add_edges(0, &[1, 2])?;
/// assert!(set.unite(3, 4)?);
/// assert!(!set.unite(4, 3)?);
///
/// assert_eq!(set.component_count(), 2);
/// assert_eq!(set.unique_ancestors().len(), 2);
/// assert_eq!(set.component_size(0)?, 3);
/// assert_eq!(set.component_size(3)?, 2);
/// # Ok::<(), djset_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    nodes: Box<[Node]>,
    components: usize,
}

impl DisjointSet {
    /// Creates a partition of `len` singleton components.
    ///
    /// # Examples
    /// ```
    /// use djset_core::DisjointSet;
    ///
    /// let set = DisjointSet::new(3);
    /// assert_eq!(set.len(), 3);
    /// assert_eq!(set.component_count(), 3);
    /// ```
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            nodes: (0..len).map(Node::singleton).collect(),
            components: len,
        }
    }

    /// Returns the number of elements in the universe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when the universe holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the current number of distinct components.
    ///
    /// Starts at [`Self::len`] and drops by exactly one per successful
    /// [`Self::unite`].
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.components }

    /// Returns the representative of `element`'s component.
    ///
    /// Every node visited on the way to the root is re-parented directly
    /// onto it.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementOutOfRange`] when `element >= len`.
    ///
    /// # Examples
    /// ```
    /// use djset_core::DisjointSet;
    ///
    /// let mut set = DisjointSet::new(2);
    /// assert_eq!(set.find(1)?, 1);
    /// set.unite(0, 1)?;
    /// assert_eq!(set.find(1)?, set.find(0)?);
    /// # Ok::<(), djset_core::DisjointSetError>(())
    /// ```
    pub fn find(&mut self, element: usize) -> Result<usize> {
        self.check(element)?;
        Ok(self.find_root(element))
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns `false` without changing anything when both already share a
    /// component. Otherwise the lower-ranked root is attached beneath the
    /// higher-ranked one; on a tie the root of `left` absorbs the root of
    /// `right` and its rank grows by one.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementOutOfRange`] when either id is out
    /// of range. Neither component is modified in that case.
    pub fn unite(&mut self, left: usize, right: usize) -> Result<bool> {
        self.check(left)?;
        self.check(right)?;
        Ok(self.unite_valid(left, right))
    }

    /// Unites `element` with each of `neighbours` in order.
    ///
    /// All ids are validated before the first union, so a rejected call
    /// leaves the partition untouched.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementOutOfRange`] for the first invalid
    /// id, checking `element` before `neighbours`.
    ///
    /// # Examples
    /// ```
    /// use djset_core::{DisjointSet, DisjointSetError};
    ///
    /// let mut set = DisjointSet::new(3);
    /// let err = set.add_edges(0, &[1, 7]);
    /// assert!(matches!(err, Err(DisjointSetError::ElementOutOfRange { element: 7, len: 3 })));
    /// assert_eq!(set.component_count(), 3);
    /// ```
    pub fn add_edges(&mut self, element: usize, neighbours: &[usize]) -> Result<()> {
        self.check(element)?;
        for &neighbour in neighbours {
            self.check(neighbour)?;
        }
        for &neighbour in neighbours {
            self.unite_valid(element, neighbour);
        }
        Ok(())
    }

    /// Returns the rank of `element`'s root.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementOutOfRange`] when `element >= len`.
    pub fn component_rank(&mut self, element: usize) -> Result<usize> {
        let root = self.find(element)?;
        Ok(self.root_node(root).rank)
    }

    /// Returns the number of elements sharing `element`'s component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementOutOfRange`] when `element >= len`.
    pub fn component_size(&mut self, element: usize) -> Result<usize> {
        let root = self.find(element)?;
        Ok(self.root_node(root).size)
    }

    /// Reports whether `left` and `right` share a component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementOutOfRange`] when either id is out
    /// of range.
    pub fn same_component(&mut self, left: usize, right: usize) -> Result<bool> {
        Ok(self.find(left)? == self.find(right)?)
    }

    /// Returns the root of every element, in element order.
    ///
    /// Compresses every path as a side effect.
    #[must_use = "ancestors also compress paths; use the returned roots"]
    pub fn ancestors(&mut self) -> Vec<usize> {
        (0..self.len()).map(|element| self.find_root(element)).collect()
    }

    /// Returns the distinct roots in ascending order.
    ///
    /// The result always holds [`Self::component_count`] entries.
    #[must_use = "unique ancestors also compress paths; use the returned roots"]
    pub fn unique_ancestors(&mut self) -> Vec<usize> {
        let mut roots = self.ancestors();
        roots.sort_unstable();
        roots.dedup();
        roots
    }

    /// Groups elements by component.
    ///
    /// Groups are ordered by ascending root and members by ascending id.
    ///
    /// # Examples
    /// ```
    /// use djset_core::DisjointSet;
    ///
    /// let mut set = DisjointSet::new(4);
    /// set.unite(3, 1)?;
    /// assert_eq!(set.components(), vec![vec![0], vec![2], vec![1, 3]]);
    /// # Ok::<(), djset_core::DisjointSetError>(())
    /// ```
    #[must_use = "components also compress paths; use the returned groups"]
    pub fn components(&mut self) -> Vec<Vec<usize>> {
        let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for (element, root) in self.ancestors().into_iter().enumerate() {
            groups.entry(root).or_default().push(element);
        }
        groups.into_values().collect()
    }

    /// Labels every element with a dense cluster identifier.
    ///
    /// Identifiers are assigned `0..component_count` in order of each
    /// component's first element.
    ///
    /// # Examples
    /// ```
    /// use djset_core::{ClusterId, DisjointSet};
    ///
    /// let mut set = DisjointSet::new(4);
    /// set.unite(3, 1)?;
    /// let clustering = set.clustering();
    /// let labels: Vec<u64> = clustering.assignments().iter().map(|id| id.get()).collect();
    /// assert_eq!(labels, vec![0, 1, 2, 1]);
    /// assert_eq!(clustering.cluster_count(), 3);
    /// # Ok::<(), djset_core::DisjointSetError>(())
    /// ```
    #[must_use = "clustering also compresses paths; use the returned labels"]
    pub fn clustering(&mut self) -> ClusteringResult {
        let mut labels: HashMap<usize, ClusterId> = HashMap::with_capacity(self.components);
        let mut next = 0_u64;
        let assignments = self
            .ancestors()
            .into_iter()
            .map(|root| {
                *labels.entry(root).or_insert_with(|| {
                    let id = ClusterId::new(next);
                    next = next.saturating_add(1);
                    id
                })
            })
            .collect();
        ClusteringResult::from_dense(assignments, labels.len())
    }

    fn check(&self, element: usize) -> Result<()> {
        if element < self.nodes.len() {
            Ok(())
        } else {
            Err(DisjointSetError::ElementOutOfRange {
                element,
                len: self.nodes.len(),
            })
        }
    }
}

// Everything below operates on ids already validated by `check` or produced
// by the forest itself.
#[expect(
    clippy::indexing_slicing,
    reason = "element ids are validated before they reach the forest"
)]
impl DisjointSet {
    fn find_root(&mut self, element: usize) -> usize {
        let mut root = element;
        while self.nodes[root].parent != root {
            root = self.nodes[root].parent;
        }

        let mut current = element;
        while current != root {
            let next = self.nodes[current].parent;
            self.nodes[current].parent = root;
            current = next;
        }
        root
    }

    fn unite_valid(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find_root(left);
        let right_root = self.find_root(right);
        if left_root == right_root {
            return false;
        }

        let left_rank = self.nodes[left_root].rank;
        let right_rank = self.nodes[right_root].rank;
        let (parent, child) = choose_parent_child(left_root, right_root, left_rank, right_rank);

        let child_size = self.nodes[child].size;
        self.nodes[child].parent = parent;
        let parent_node = &mut self.nodes[parent];
        parent_node.size = parent_node.size.saturating_add(child_size);
        if left_rank == right_rank {
            parent_node.rank = parent_node.rank.saturating_add(1);
        }

        self.components = self.components.saturating_sub(1);
        true
    }

    fn root_node(&self, root: usize) -> Node {
        debug_assert_eq!(self.nodes[root].parent, root, "size and rank live on roots");
        self.nodes[root]
    }
}

fn choose_parent_child(
    left_root: usize,
    right_root: usize,
    left_rank: usize,
    right_rank: usize,
) -> (usize, usize) {
    match left_rank.cmp(&right_rank) {
        Ordering::Less => (right_root, left_root),
        Ordering::Greater | Ordering::Equal => (left_root, right_root),
    }
}


#[cfg(test)]
mod property;
