//! Assertion helpers for route expectation sets.

use anyhow::{bail, Result};
use restcheck_core::{ActionKind, RouteExpectation};

/// Assert that the expectations cover all seven REST actions exactly once,
/// in canonical order.
pub fn assert_covers_rest_actions(expectations: &[RouteExpectation]) -> Result<()> {
    let actions: Vec<ActionKind> = expectations.iter().map(|e| e.params.action).collect();
    if actions != ActionKind::ALL.to_vec() {
        bail!(
            "expected the full REST action set in canonical order, got: {actions:?}"
        );
    }
    Ok(())
}

/// Assert that every path is fully resolved: rooted, no empty segments,
/// no leftover placeholders.
pub fn assert_paths_resolved(expectations: &[RouteExpectation]) -> Result<()> {
    for expectation in expectations {
        let path = &expectation.path;
        if !path.starts_with('/') {
            bail!("path {path} is not rooted");
        }
        if path.contains("//") {
            bail!("path {path} contains an empty segment");
        }
        if path.contains('{') || path.contains('}') || path.contains(':') {
            bail!("path {path} contains an unresolved placeholder");
        }
    }
    Ok(())
}

/// Assert the id rule: `id: 1` on member actions in plural mode, absent
/// everywhere else.
pub fn assert_member_ids(expectations: &[RouteExpectation], plural: bool) -> Result<()> {
    for expectation in expectations {
        let action = expectation.params.action;
        let expected = (plural && action.is_member()).then_some(1);
        if expectation.params.id != expected {
            bail!(
                "expected id {expected:?} for {action} (plural: {plural}), got {:?} on {}",
                expectation.params.id,
                expectation
            );
        }
    }
    Ok(())
}
