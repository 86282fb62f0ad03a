//! Kruskal core library.
//!
//! Builds minimum spanning trees, or spanning forests for disconnected input,
//! over small in-memory graphs. [`MstBuilder`] sorts edges by weight with a
//! stable sort and greedily accepts every edge that joins two components of a
//! [`DisjointSet`].
//!
//! ```
//! use kruskal_core::{Graph, kruskal};
//!
//! let mut graph = Graph::with_vertex_count(3);
//! graph.add_edge(0, 1, 4).add_edge(1, 2, 1).add_edge(0, 2, 2);
//! let forest = kruskal(&graph)?;
//! assert_eq!(forest.total_weight(), 3);
//! # Ok::<(), kruskal_core::KruskalError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod error;
mod graph;
mod mst;

pub use crate::{
    disjoint_set::DisjointSet,
    error::{KruskalError, KruskalErrorCode, Result},
    graph::{Edge, Graph},
    mst::{
        DEFAULT_PARALLEL_SORT_THRESHOLD, EdgeValidation, MinimumSpanningForest, MstBuilder,
        kruskal,
    },
};
