//! Benchmark support crate for kruskal.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks for the disjoint set and the spanning forest builder.

pub mod params;
pub mod source;
