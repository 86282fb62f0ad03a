//! Strategy builders for MST property-based tests.
//!
//! Graphs stay small enough for the exhaustive oracle: at most seven vertices
//! and [`MAX_EXHAUSTIVE_EDGES`] edges. Generation is driven by a seeded
//! [`SmallRng`] so failing cases shrink to a `(shape, seed)` pair.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::Graph;

use super::oracle::MAX_EXHAUSTIVE_EDGES;
use super::types::{GraphShape, MstFixture};

const MAX_VERTICES: usize = 7;

/// Generates fixtures across every [`GraphShape`].
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<GraphShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Generates a fixture for a specific shape.
pub(super) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> MstFixture {
    let (vertex_count, mut edges) = match shape {
        GraphShape::Unique => generate_unique(rng),
        GraphShape::ManyIdentical => generate_identical(rng),
        GraphShape::Sparse => generate_sparse(rng),
        GraphShape::Dense => generate_dense(rng),
        GraphShape::Disconnected => generate_disconnected(rng),
        GraphShape::Multigraph => generate_multigraph(rng),
    };
    edges.truncate(MAX_EXHAUSTIVE_EDGES);
    MstFixture {
        graph: Graph::from_edges(vertex_count, edges),
        shape,
    }
}

type RawEdges = Vec<(usize, usize, i64)>;

/// Picks each unordered pair with probability `probability`.
fn random_pairs(vertex_count: usize, probability: f64, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for left in 0..vertex_count {
        for right in (left + 1)..vertex_count {
            if rng.gen_bool(probability) {
                pairs.push(orient(left, right, rng));
            }
        }
    }
    pairs.shuffle(rng);
    pairs
}

/// Randomly swaps endpoints so results cannot rely on `source < destination`.
fn orient(left: usize, right: usize, rng: &mut SmallRng) -> (usize, usize) {
    if rng.gen_bool(0.5) {
        (left, right)
    } else {
        (right, left)
    }
}

fn generate_unique(rng: &mut SmallRng) -> (usize, RawEdges) {
    let vertex_count = rng.gen_range(2..=MAX_VERTICES);
    let pairs = random_pairs(vertex_count, 0.5, rng);
    let mut weights: Vec<i64> = (0..pairs.len())
        .map(|index| i64::try_from(index).map_or(0, |value| value * 3 - 10))
        .collect();
    weights.shuffle(rng);
    let edges = pairs
        .into_iter()
        .zip(weights)
        .map(|((source, destination), weight)| (source, destination, weight))
        .collect();
    (vertex_count, edges)
}

fn generate_identical(rng: &mut SmallRng) -> (usize, RawEdges) {
    let vertex_count = rng.gen_range(2..=MAX_VERTICES);
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<i64> = (0..pool_size).map(|_| rng.gen_range(-3..=5)).collect();
    let pairs = random_pairs(vertex_count, 0.6, rng);
    let edges = pairs
        .into_iter()
        .map(|(source, destination)| {
            let weight = pool.choose(rng).copied().unwrap_or_default();
            (source, destination, weight)
        })
        .collect();
    (vertex_count, edges)
}

fn generate_sparse(rng: &mut SmallRng) -> (usize, RawEdges) {
    let vertex_count = rng.gen_range(2..=MAX_VERTICES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(rng);

    let mut edges: RawEdges = order
        .windows(2)
        .map(|pair| (pair[0], pair[1], rng.gen_range(1..=50)))
        .collect();
    let extra = rng.gen_range(0..=vertex_count / 2);
    for _ in 0..extra {
        let source = rng.gen_range(0..vertex_count);
        let destination = rng.gen_range(0..vertex_count);
        if source != destination {
            edges.push((source, destination, rng.gen_range(1..=50)));
        }
    }
    edges.shuffle(rng);
    (vertex_count, edges)
}

fn generate_dense(rng: &mut SmallRng) -> (usize, RawEdges) {
    let vertex_count = rng.gen_range(4..=6);
    let pairs = random_pairs(vertex_count, 0.85, rng);
    let edges = pairs
        .into_iter()
        .map(|(source, destination)| (source, destination, rng.gen_range(0..=20)))
        .collect();
    (vertex_count, edges)
}

fn generate_disconnected(rng: &mut SmallRng) -> (usize, RawEdges) {
    let component_sizes: Vec<usize> = (0..rng.gen_range(2..=3))
        .map(|_| rng.gen_range(1..=3))
        .collect();
    let mut edges = Vec::new();
    let mut offset = 0;
    for size in component_sizes {
        for left in offset..offset + size {
            for right in (left + 1)..offset + size {
                if rng.gen_bool(0.8) {
                    let (source, destination) = orient(left, right, rng);
                    edges.push((source, destination, rng.gen_range(1..=9)));
                }
            }
        }
        offset += size;
    }
    edges.shuffle(rng);
    (offset, edges)
}

fn generate_multigraph(rng: &mut SmallRng) -> (usize, RawEdges) {
    let vertex_count = rng.gen_range(1..=6);
    let edge_count = rng.gen_range(0..=12);
    let edges = (0..edge_count)
        .map(|_| {
            (
                rng.gen_range(0..vertex_count),
                rng.gen_range(0..vertex_count),
                rng.gen_range(-10..=10),
            )
        })
        .collect();
    (vertex_count, edges)
}

impl Arbitrary for GraphShape {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            1 => Just(Self::Unique),
            2 => Just(Self::ManyIdentical),
            1 => Just(Self::Sparse),
            1 => Just(Self::Dense),
            1 => Just(Self::Disconnected),
            2 => Just(Self::Multigraph),
        ]
        .boxed()
    }
}
