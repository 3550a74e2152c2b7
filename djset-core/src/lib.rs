//! Disjoint-set engine for clustering spatial points.
//!
//! A [`DisjointSet`] partitions a fixed universe of element ids `0..N` into
//! components. Partitions start either as `N` singletons or from an `N x D`
//! coordinate matrix whose rows are linked whenever their Euclidean distance is
//! within a threshold. Explicit edges merge components afterwards, and
//! membership, size and rank queries run in near-constant amortised time.

mod disjoint_set;
mod error;
mod points;
mod result;
mod threshold;

#[cfg(test)]
mod test_utils;

pub use crate::{
    disjoint_set::DisjointSet,
    error::{
        DisjointSetError, DisjointSetErrorCode, PointMatrixError, PointMatrixErrorCode, Result,
    },
    points::{Coordinates, PointMatrix},
    result::{ClusterId, ClusteringResult},
    threshold::LinkThreshold,
};
