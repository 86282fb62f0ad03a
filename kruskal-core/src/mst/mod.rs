//! Minimum spanning tree (MST) construction with Kruskal's algorithm.
//!
//! [`MstBuilder`] stable-sorts a copy of the graph's edges by weight and walks
//! them once, accepting each edge whose endpoints lie in different
//! [`DisjointSet`] components. Equal weights keep their insertion order, so the
//! selected edges are reproducible across runs. A disconnected graph yields a
//! minimum spanning forest with fewer than `v - 1` edges.

use tracing::{debug, instrument};

use crate::{
    disjoint_set::DisjointSet,
    error::{KruskalError, Result},
    graph::{Edge, Graph},
};

/// Edge lists at least this long are sorted with Rayon when the `parallel`
/// feature is enabled.
pub const DEFAULT_PARALLEL_SORT_THRESHOLD: usize = 65_536;

/// Controls when edge endpoints are range-checked.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum EdgeValidation {
    /// Endpoints are checked by [`DisjointSet::find`] as each edge is
    /// considered. Edges left unvisited after the tree completes are never
    /// inspected.
    #[default]
    Lazy,
    /// Every edge is checked before sorting; the first offending edge in
    /// insertion order is reported.
    Eager,
}

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinimumSpanningForest {
    edges: Vec<Edge>,
    total_weight: i64,
    vertex_count: usize,
    component_count: usize,
}

impl MinimumSpanningForest {
    /// Returns the accepted edges in acceptance order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Consumes the forest and returns its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }

    /// Returns the number of accepted edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> i64 { self.total_weight }

    /// Returns the number of vertices of the source graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of connected components spanned by the forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    ///
    /// A graph with no vertices has no components and is not a tree.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}

/// Configures and runs Kruskal's algorithm.
///
/// # Examples
/// ```
/// use kruskal_core::{EdgeValidation, Graph, MstBuilder};
///
/// let forest = MstBuilder::new()
///     .with_validation(EdgeValidation::Eager)
///     .build(&Graph::sample())
///     .expect("sample graph is valid");
/// assert_eq!(forest.total_weight(), 7);
/// assert!(forest.is_tree());
/// ```
#[derive(Clone, Debug)]
pub struct MstBuilder {
    validation: EdgeValidation,
    parallel_sort_threshold: usize,
}

impl Default for MstBuilder {
    fn default() -> Self {
        Self {
            validation: EdgeValidation::Lazy,
            parallel_sort_threshold: DEFAULT_PARALLEL_SORT_THRESHOLD,
        }
    }
}

impl MstBuilder {
    /// Creates a builder with lazy validation and the default sort threshold.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects when edge endpoints are validated.
    #[must_use]
    pub const fn with_validation(mut self, validation: EdgeValidation) -> Self {
        self.validation = validation;
        self
    }

    /// Returns the configured validation mode.
    #[must_use]
    #[rustfmt::skip]
    pub const fn validation(&self) -> EdgeValidation { self.validation }

    /// Sets the edge count at which sorting switches to Rayon's stable
    /// parallel sort. Ignored without the `parallel` feature.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::MstBuilder;
    ///
    /// let builder = MstBuilder::new().with_parallel_sort_threshold(1_024);
    /// assert_eq!(builder.parallel_sort_threshold(), 1_024);
    /// ```
    #[must_use]
    pub const fn with_parallel_sort_threshold(mut self, threshold: usize) -> Self {
        self.parallel_sort_threshold = threshold;
        self
    }

    /// Returns the configured parallel sort threshold.
    #[must_use]
    #[rustfmt::skip]
    pub const fn parallel_sort_threshold(&self) -> usize { self.parallel_sort_threshold }

    /// Computes the minimum spanning forest of `graph`.
    ///
    /// The graph is not modified, so repeated calls return identical results.
    ///
    /// # Errors
    /// Returns [`KruskalError::InvalidVertexIndex`] when a visited edge (or,
    /// under [`EdgeValidation::Eager`], any edge) references a vertex outside
    /// `[0, vertex_count)`, and [`KruskalError::WeightOverflow`] when the
    /// final total weight does not fit in `i64`.
    #[instrument(
        name = "mst.build",
        skip_all,
        fields(
            vertex_count = graph.vertex_count(),
            edge_count = graph.edge_count(),
            validation = ?self.validation,
        ),
    )]
    pub fn build(&self, graph: &Graph) -> Result<MinimumSpanningForest> {
        let vertex_count = graph.vertex_count();
        if self.validation == EdgeValidation::Eager {
            validate_edges(graph)?;
        }

        let mut sets = DisjointSet::new(vertex_count);
        let target = vertex_count.saturating_sub(1);
        let mut accepted = Vec::with_capacity(target);
        // Only the final sum has to fit in `i64`.
        let mut wide_total: i128 = 0;

        if target > 0 {
            for edge in self.sorted_edges(graph.edges()) {
                let source_root = sets.find(edge.source())?;
                let destination_root = sets.find(edge.destination())?;
                if source_root == destination_root {
                    continue;
                }

                sets.union(source_root, destination_root)?;
                wide_total += i128::from(edge.weight());
                accepted.push(edge);

                if accepted.len() == target {
                    break;
                }
            }
        }

        let total_weight =
            i64::try_from(wide_total).map_err(|_| KruskalError::WeightOverflow)?;
        let forest = MinimumSpanningForest {
            edges: accepted,
            total_weight,
            vertex_count,
            component_count: sets.set_count(),
        };
        debug!(
            accepted = forest.edge_count(),
            total_weight = forest.total_weight,
            components = forest.component_count,
            "spanning forest complete"
        );
        Ok(forest)
    }

    fn sorted_edges(&self, edges: &[Edge]) -> Vec<Edge> {
        let mut sorted = edges.to_vec();
        sort_by_weight(&mut sorted, self.parallel_sort_threshold);
        sorted
    }
}

/// Computes the minimum spanning forest of `graph` with default settings.
///
/// # Errors
/// See [`MstBuilder::build`].
///
/// # Examples
/// ```
/// use kruskal_core::{Edge, Graph, kruskal};
///
/// let forest = kruskal(&Graph::sample())?;
/// assert_eq!(
///     forest.edges(),
///     &[
///         Edge::new(2, 4, 1),
///         Edge::new(0, 1, 2),
///         Edge::new(1, 4, 2),
///         Edge::new(3, 4, 2),
///     ],
/// );
/// # Ok::<(), kruskal_core::KruskalError>(())
/// ```
pub fn kruskal(graph: &Graph) -> Result<MinimumSpanningForest> {
    MstBuilder::new().build(graph)
}

fn validate_edges(graph: &Graph) -> Result<()> {
    let count = graph.vertex_count();
    for edge in graph.edges() {
        for index in [edge.source(), edge.destination()] {
            if index >= count {
                return Err(KruskalError::InvalidVertexIndex { index, count });
            }
        }
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn sort_by_weight(edges: &mut [Edge], parallel_threshold: usize) {
    use rayon::slice::ParallelSliceMut;

    if edges.len() >= parallel_threshold {
        edges.par_sort_by_key(Edge::weight);
    } else {
        edges.sort_by_key(Edge::weight);
    }
}

#[cfg(not(feature = "parallel"))]
fn sort_by_weight(edges: &mut [Edge], _parallel_threshold: usize) {
    edges.sort_by_key(Edge::weight);
}

#[cfg(test)]
mod property;
