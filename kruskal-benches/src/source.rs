//! Seeded synthetic graphs for benchmarks.
//!
//! Every generated graph is connected: a random spanning path is laid down
//! first and the remaining edges join uniformly chosen vertex pairs.

use kruskal_core::Graph;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Configuration for [`random_connected_graph`].
#[derive(Clone, Copy, Debug)]
pub struct RandomGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Edges added on top of the spanning path.
    pub extra_edges: usize,
    /// Largest edge weight; weights are drawn from `0..=max_weight`.
    pub max_weight: i64,
    /// Seed for the deterministic generator.
    pub seed: u64,
}

/// Generates a connected graph with `vertex_count - 1 + extra_edges` edges.
///
/// Graphs with fewer than two vertices receive no extra edges.
///
/// # Examples
/// ```
/// use kruskal_benches::source::{RandomGraphConfig, random_connected_graph};
///
/// let graph = random_connected_graph(&RandomGraphConfig {
///     vertex_count: 10,
///     extra_edges: 5,
///     max_weight: 100,
///     seed: 7,
/// });
/// assert_eq!(graph.edge_count(), 14);
/// ```
#[must_use]
pub fn random_connected_graph(config: &RandomGraphConfig) -> Graph {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let vertex_count = config.vertex_count;
    let max_weight = config.max_weight.max(0);
    let mut graph = Graph::with_vertex_count(vertex_count);

    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(&mut rng);
    for pair in order.windows(2) {
        graph.add_edge(pair[0], pair[1], rng.gen_range(0..=max_weight));
    }

    if vertex_count >= 2 {
        for _ in 0..config.extra_edges {
            let source = rng.gen_range(0..vertex_count);
            let destination = rng.gen_range(0..vertex_count);
            graph.add_edge(source, destination, rng.gen_range(0..=max_weight));
        }
    }
    graph
}
