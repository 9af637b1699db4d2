//! Property-based tests for path handling.
//!
//! Note: The clean module already has light property tests for cleaning.
//! This module focuses on relativization and absolute conversion.

use super::clean::{clean, segments};
use super::relative::{make_absolute, relativize, ParentLimit};
use proptest::prelude::*;

// Strategy for generating path-like strings
fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn segments_strategy(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(path_component_strategy(), 0..max)
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    segments_strategy(8).prop_map(|parts| format!("/{}", parts.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Relativizing a path against itself always yields "."
    #[test]
    fn relativize_reflexive(path in absolute_path_strategy(), limit in 0..4usize) {
        let base = clean(&path);
        prop_assert_eq!(relativize(&base, &base, ParentLimit::Limited(limit)), ".");
        prop_assert_eq!(relativize(&base, &base, ParentLimit::Unlimited), ".");
    }

    // A target under the base needs no parent steps, even with limit 0
    #[test]
    fn relativize_descendant_has_no_parents(
        base in segments_strategy(6),
        rest in prop::collection::vec(path_component_strategy(), 1..6),
    ) {
        let base_path = clean(&format!("/{}", base.join("/")));
        let target = clean(&format!("{}/{}", base_path, rest.join("/")));
        let rel = relativize(&target, &base_path, ParentLimit::Limited(0));
        prop_assert_eq!(rel.clone(), rest.join("/"));
        prop_assert!(!segments(&rel).any(|s| s == ".."));
    }

    // With no limit, a different target always becomes a relative path
    #[test]
    fn relativize_unlimited_always_relative(
        target in absolute_path_strategy(),
        base in absolute_path_strategy(),
    ) {
        let target = clean(&target);
        let base = clean(&base);
        let rel = relativize(&target, &base, ParentLimit::Unlimited);
        prop_assert!(!rel.starts_with('/'));
        if target != base {
            prop_assert_ne!(rel, target);
        }
    }

    // Making a relativized path absolute again recovers the target
    #[test]
    fn relativize_then_absolute_round_trips(
        target in absolute_path_strategy(),
        base in absolute_path_strategy(),
    ) {
        let target = clean(&target);
        let base = clean(&base);
        let rel = relativize(&target, &base, ParentLimit::Unlimited);
        prop_assert_eq!(make_absolute(&rel, &base), target);
    }

    // The result is either unchanged or has at most `limit` parent steps
    #[test]
    fn relativize_respects_limit(
        target in absolute_path_strategy(),
        base in absolute_path_strategy(),
        limit in 0..4usize,
    ) {
        let target = clean(&target);
        let base = clean(&base);
        let rel = relativize(&target, &base, ParentLimit::Limited(limit));
        if rel != target {
            let parents = segments(&rel).take_while(|s| *s == "..").count();
            prop_assert!(parents <= limit);
        }
    }
}
