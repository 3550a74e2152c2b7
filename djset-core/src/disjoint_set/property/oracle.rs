//! Breadth-first connectivity oracles for disjoint-set property tests.
//!
//! Both oracles build an explicit adjacency list and label each element with
//! the smallest id reachable from it. The forest under test is reduced to the
//! same canonical labelling so the two can be compared element by element.

use std::collections::VecDeque;

use crate::{Coordinates, DisjointSet};

/// Labels every element with the smallest id in its connected component.
pub(super) fn connected_labels(element_count: usize, edges: &[(usize, usize)]) -> Vec<usize> {
    let mut adjacency = vec![Vec::new(); element_count];
    for &(left, right) in edges {
        if left >= element_count || right >= element_count {
            continue;
        }
        adjacency[left].push(right);
        adjacency[right].push(left);
    }

    let mut labels = vec![usize::MAX; element_count];
    let mut queue = VecDeque::new();
    for start in 0..element_count {
        if labels[start] != usize::MAX {
            continue;
        }
        labels[start] = start;
        queue.push_back(start);
        while let Some(current) = queue.pop_front() {
            for &next in &adjacency[current] {
                if labels[next] == usize::MAX {
                    labels[next] = start;
                    queue.push_back(next);
                }
            }
        }
    }
    labels
}

/// Labels every point with the smallest row reachable through links of
/// length at most `threshold`.
///
/// Distances are accumulated in `f32` over the full row with no early exit,
/// in the same component order as the forest, so boundary pairs are decided
/// identically.
pub(super) fn spatial_labels(points: &dyn Coordinates, threshold: f32) -> Vec<usize> {
    let rows = points.rows();
    let squared = threshold * threshold;
    let mut edges = Vec::new();
    for left in 0..rows {
        for right in (left + 1)..rows {
            let (Some(a), Some(b)) = (points.row(left), points.row(right)) else {
                continue;
            };
            let sum: f32 = a
                .iter()
                .zip(b)
                .fold(0.0, |acc, (x, y)| acc + (x - y) * (x - y));
            if sum <= squared {
                edges.push((left, right));
            }
        }
    }
    connected_labels(rows, &edges)
}

/// Reduces a forest to smallest-member labels.
pub(super) fn canonical_labels(set: &mut DisjointSet) -> Vec<usize> {
    let mut labels = vec![usize::MAX; set.len()];
    for group in set.components() {
        let Some(&smallest) = group.first() else {
            continue;
        };
        for member in group {
            labels[member] = smallest;
        }
    }
    labels
}

/// Counts the distinct labels in a canonical labelling.
pub(super) fn label_count(labels: &[usize]) -> usize {
    labels
        .iter()
        .enumerate()
        .filter(|(element, label)| element == *label)
        .count()
}
