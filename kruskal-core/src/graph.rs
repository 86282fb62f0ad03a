//! Static weighted graphs consumed by the spanning forest builder.
//!
//! A [`Graph`] owns a vertex count and an ordered list of undirected
//! [`Edge`] values. Edge endpoints are not checked on insertion; the
//! disjoint set reports out-of-range vertices when the builder reaches them.

use crate::error::{KruskalError, Result};

/// A weighted undirected edge.
///
/// The `source`/`destination` order carries no meaning for connectivity but
/// is preserved so results echo the caller's input.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: usize,
    destination: usize,
    weight: i64,
}

impl Edge {
    /// Creates an edge between `source` and `destination`.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::Edge;
    ///
    /// let edge = Edge::new(2, 4, 1);
    /// assert_eq!((edge.source(), edge.destination(), edge.weight()), (2, 4, 1));
    /// ```
    #[must_use]
    pub const fn new(source: usize, destination: usize, weight: i64) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// Returns the source vertex index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the destination vertex index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn destination(&self) -> usize { self.destination }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i64 { self.weight }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }
}

impl From<(usize, usize, i64)> for Edge {
    fn from((source, destination, weight): (usize, usize, i64)) -> Self {
        Self::new(source, destination, weight)
    }
}

/// An in-memory undirected weighted graph.
///
/// # Examples
/// ```
/// use kruskal_core::Graph;
///
/// let mut graph = Graph::with_vertex_count(3);
/// graph.add_edge(0, 1, 4).add_edge(1, 2, 5);
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub const fn with_vertex_count(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Creates a graph from a signed vertex count.
    ///
    /// # Errors
    /// Returns [`KruskalError::InvalidConstruction`] when `vertex_count` is
    /// negative or does not fit in `usize`.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::{Graph, KruskalError};
    ///
    /// assert_eq!(Graph::try_new(4)?.vertex_count(), 4);
    /// assert_eq!(
    ///     Graph::try_new(-1),
    ///     Err(KruskalError::InvalidConstruction { vertex_count: -1 }),
    /// );
    /// # Ok::<(), KruskalError>(())
    /// ```
    pub fn try_new(vertex_count: i64) -> Result<Self> {
        let count = usize::try_from(vertex_count)
            .map_err(|_| KruskalError::InvalidConstruction { vertex_count })?;
        Ok(Self::with_vertex_count(count))
    }

    /// Creates a graph from `(source, destination, weight)` triples, keeping
    /// their order.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::Graph;
    ///
    /// let graph = Graph::from_edges(2, [(0, 1, 7)]);
    /// assert_eq!(graph.edges()[0].weight(), 7);
    /// ```
    #[must_use]
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, i64)>,
    {
        Self {
            vertex_count,
            edges: edges.into_iter().map(Edge::from).collect(),
        }
    }

    /// The five-vertex, seven-edge demonstration graph.
    ///
    /// Its minimum spanning tree is `2-4 (1)`, `0-1 (2)`, `1-4 (2)`,
    /// `3-4 (2)` with total weight 7.
    #[must_use]
    pub fn sample() -> Self {
        Self::from_edges(
            5,
            [
                (0, 1, 2),
                (0, 2, 3),
                (1, 3, 15),
                (1, 4, 2),
                (2, 4, 1),
                (2, 3, 7),
                (3, 4, 2),
            ],
        )
    }

    /// Appends an edge. Endpoints are validated when the forest is built.
    pub fn add_edge(&mut self, source: usize, destination: usize, weight: i64) -> &mut Self {
        self.edges.push(Edge::new(source, destination, weight));
        self
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of edges inserted so far.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

impl Extend<Edge> for Graph {
    fn extend<T: IntoIterator<Item = Edge>>(&mut self, iter: T) {
        self.edges.extend(iter);
    }
}
