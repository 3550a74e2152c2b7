//! Strategy builders for disjoint-set property tests.
//!
//! Each generator draws from a seeded [`SmallRng`] so the rstest cases can
//! replay a specific topology or layout deterministically, while proptest
//! samples the seed itself.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::PointMatrix;

use super::types::{EdgeFixture, PointFixture, PointLayout, Topology};

/// Maximum universe size for random edge workloads.
const MAX_ELEMENTS: usize = 64;
/// Maximum universe size for chain workloads, kept longer to build deep trees.
const MAX_CHAIN_ELEMENTS: usize = 256;
/// Maximum number of points in a generated cloud.
const MAX_POINTS: usize = 48;
/// Maximum dimensionality of a generated cloud.
const MAX_DIMENSION: usize = 4;

/// Generates edge fixtures across every [`Topology`].
pub(super) fn edge_fixture_strategy() -> impl Strategy<Value = EdgeFixture> {
    let topology = prop_oneof![
        Just(Topology::Sparse),
        Just(Topology::Dense),
        Just(Topology::Chains),
        Just(Topology::Blocks),
    ];
    (topology, any::<u64>()).prop_map(|(topology, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_edge_fixture(topology, &mut rng)
    })
}

/// Generates point fixtures across every [`PointLayout`].
pub(super) fn point_fixture_strategy() -> impl Strategy<Value = PointFixture> {
    let layout = prop_oneof![
        Just(PointLayout::Uniform),
        Just(PointLayout::Clustered),
        Just(PointLayout::Lattice),
    ];
    (layout, any::<u64>()).prop_map(|(layout, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_point_fixture(layout, &mut rng)
    })
}

/// Generates an edge fixture for a specific topology.
pub(super) fn generate_edge_fixture(topology: Topology, rng: &mut SmallRng) -> EdgeFixture {
    let (element_count, edges) = match topology {
        Topology::Sparse => {
            let element_count = rng.gen_range(0..=MAX_ELEMENTS);
            let edges = random_edges(rng, element_count, element_count / 3);
            (element_count, edges)
        }
        Topology::Dense => {
            let element_count = rng.gen_range(2..=MAX_ELEMENTS / 2);
            let edges = random_edges(rng, element_count, element_count * 3);
            (element_count, edges)
        }
        Topology::Chains => chain_edges(rng),
        Topology::Blocks => block_edges(rng),
    };

    EdgeFixture {
        element_count,
        batches: batch_edges(rng, edges),
        topology,
    }
}

/// Generates a point fixture for a specific layout.
pub(super) fn generate_point_fixture(layout: PointLayout, rng: &mut SmallRng) -> PointFixture {
    let (points, threshold) = match layout {
        PointLayout::Uniform => {
            let rows = rng.gen_range(0..=MAX_POINTS);
            let dimension = rng.gen_range(1..=MAX_DIMENSION);
            let values = (0..rows * dimension)
                .map(|_| rng.gen_range(-10.0_f32..10.0))
                .collect();
            (
                row_major(rows, dimension, values),
                rng.gen_range(0.0_f32..6.0),
            )
        }
        PointLayout::Clustered => clustered_points(rng),
        PointLayout::Lattice => {
            let rows = rng.gen_range(1..=MAX_POINTS);
            let dimension = rng.gen_range(1..=3);
            let values = (0..rows * dimension)
                .map(|_| f32::from(rng.gen_range(0_u8..5)))
                .collect();
            let threshold = *[0.0_f32, 1.0, 2.0_f32.sqrt(), 2.0]
                .choose(rng)
                .expect("threshold choices are non-empty");
            (row_major(rows, dimension, values), threshold)
        }
    };

    PointFixture {
        points,
        threshold,
        layout,
    }
}

fn random_edges(rng: &mut SmallRng, element_count: usize, count: usize) -> Vec<(usize, usize)> {
    if element_count == 0 {
        return Vec::new();
    }
    let mut edges = Vec::with_capacity(count);
    while edges.len() < count {
        // Runs sharing a source become multi-neighbour `add_edges` batches.
        let source = rng.gen_range(0..element_count);
        for _ in 0..rng.gen_range(1..=3) {
            edges.push((source, rng.gen_range(0..element_count)));
        }
    }
    edges
}

fn chain_edges(rng: &mut SmallRng) -> (usize, Vec<(usize, usize)>) {
    let element_count = rng.gen_range(2..=MAX_CHAIN_ELEMENTS);
    let mut order: Vec<usize> = (0..element_count).collect();
    order.shuffle(rng);
    let edges = order.windows(2).map(|pair| (pair[0], pair[1])).collect();
    (element_count, edges)
}

fn block_edges(rng: &mut SmallRng) -> (usize, Vec<(usize, usize)>) {
    let element_count = rng.gen_range(4..=MAX_ELEMENTS);
    let block = rng.gen_range(2..=8);
    let mut edges = Vec::new();
    for start in (0..element_count).step_by(block) {
        let end = (start + block).min(element_count);
        for _ in 0..block {
            edges.push((rng.gen_range(start..end), rng.gen_range(start..end)));
        }
    }
    (element_count, edges)
}

/// Groups consecutive edges sharing a source into `add_edges` batches.
fn batch_edges(rng: &mut SmallRng, edges: Vec<(usize, usize)>) -> Vec<(usize, Vec<usize>)> {
    let mut batches: Vec<(usize, Vec<usize>)> = Vec::new();
    for (element, neighbour) in edges {
        match batches.last_mut() {
            Some((last, neighbours)) if *last == element && rng.gen_bool(0.8) => {
                neighbours.push(neighbour);
            }
            _ => batches.push((element, vec![neighbour])),
        }
    }
    // Occasional empty batches exercise the no-neighbour path.
    if let Some(&(element, _)) = batches.first() {
        if rng.gen_bool(0.25) {
            batches.push((element, Vec::new()));
        }
    }
    batches
}

fn clustered_points(rng: &mut SmallRng) -> (PointMatrix, f32) {
    let dimension = rng.gen_range(1..=MAX_DIMENSION);
    let centres = rng.gen_range(2..=5_u8);
    let mut values = Vec::new();
    let mut rows = 0;
    for centre in 0..centres {
        let offset = 100.0 * f32::from(centre);
        for _ in 0..rng.gen_range(1..=8) {
            values.extend((0..dimension).map(|_| offset + rng.gen_range(-0.5_f32..0.5)));
            rows += 1;
        }
    }
    (row_major(rows, dimension, values), 3.0)
}

fn row_major(rows: usize, dimension: usize, values: Vec<f32>) -> PointMatrix {
    PointMatrix::try_from_row_major(rows, dimension, values).expect("generated shape is valid")
}
