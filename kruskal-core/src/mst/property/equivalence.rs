//! Oracle equivalence: the builder's total weight is minimal.
//!
//! Compares against exhaustive subset search and against Prim's algorithm.
//! Edge sets may differ when weights tie; totals and sizes may not.

use proptest::prop_assert_eq;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::kruskal;

use super::oracle::{exhaustive_minimum, prim_minimum};
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let forest = kruskal(graph)
        .map_err(|err| TestCaseError::fail(format!("kruskal failed: {err}")))?;
    let actual_weight = i128::from(forest.total_weight());

    let exhaustive = exhaustive_minimum(graph.vertex_count(), graph.edges());
    prop_assert_eq!(
        forest.edge_count(),
        exhaustive.edge_count,
        "edge count differs from exhaustive oracle (shape={:?})",
        fixture.shape
    );
    prop_assert_eq!(
        actual_weight,
        exhaustive.total_weight,
        "total weight differs from exhaustive oracle (shape={:?}, graph={:?})",
        fixture.shape,
        graph
    );

    let prim = prim_minimum(graph.vertex_count(), graph.edges());
    prop_assert_eq!(forest.edge_count(), prim.edge_count);
    prop_assert_eq!(actual_weight, prim.total_weight);
    Ok(())
}
