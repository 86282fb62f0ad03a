//! Determinism: identical input always selects identical edges.
//!
//! Re-runs the builder on the same graph, with eager validation, and with
//! both sort paths, expecting byte-for-byte equal forests.

use proptest::prop_assert_eq;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{EdgeValidation, MinimumSpanningForest, MstBuilder};

use super::types::MstFixture;

/// Runs the determinism property for the given fixture.
pub(super) fn run_determinism_property(fixture: &MstFixture) -> TestCaseResult {
    let baseline = run(MstBuilder::new(), fixture)?;

    let variants = [
        ("repeat", MstBuilder::new()),
        (
            "eager",
            MstBuilder::new().with_validation(EdgeValidation::Eager),
        ),
        (
            "parallel-sort",
            MstBuilder::new().with_parallel_sort_threshold(0),
        ),
    ];
    for (label, builder) in variants {
        let forest = run(builder, fixture)?;
        prop_assert_eq!(&forest, &baseline, "{} run diverged", label);
    }
    Ok(())
}

fn run(builder: MstBuilder, fixture: &MstFixture) -> Result<MinimumSpanningForest, TestCaseError> {
    builder
        .build(&fixture.graph)
        .map_err(|err| TestCaseError::fail(format!("build failed: {err}")))
}
