//! Property-based tests for the Kruskal spanning forest builder.
//!
//! Checks the builder against two independent oracles (exhaustive subset
//! search and Prim's algorithm), validates structural invariants of the
//! returned forest, and confirms that repeated or reconfigured runs select
//! the same edges.

mod determinism;
mod equivalence;
mod strategies;
