//! Testing utilities for partition laws
//!
//! This module provides assertion helpers for the invariants every
//! partition result must uphold, so downstream tests can state "this is a
//! valid partition of that source" in one line. With the `proptest`
//! feature enabled, the [`strategies`] submodule adds generators for
//! property-based tests.
//!
//! # Examples
//!
//! ```rust
//! use watershed::partition_elements;
//! use watershed::predicate::even;
//! use watershed::testing::{assert_covers, assert_remainder_rule};
//!
//! let source = [1, 2, 3, 4, 5];
//! let groups = partition_elements(&source, &[even()]);
//!
//! assert_covers(&source, &groups);
//! assert_remainder_rule(&groups, 1);
//! ```
//!
//! Keyed results flatten into entry pairs for the same checks:
//!
//! ```rust
//! use watershed::{partition_by_value, IndexMap};
//! use watershed::predicate::even;
//! use watershed::testing::assert_covers;
//!
//! let bowl = IndexMap::from([("apple", 1), ("banana", 2)]);
//! let groups = partition_by_value(&bowl, &[even()]);
//!
//! let source: Vec<_> = bowl.iter().map(|(k, v)| (*k, *v)).collect();
//! let flat: Vec<Vec<_>> = groups
//!     .iter()
//!     .map(|g| g.iter().map(|(k, v)| (*k, *v)).collect())
//!     .collect();
//! assert_covers(&source, &flat);
//! ```

use std::fmt::Debug;

/// Assert that `groups` is a valid partition of `source`.
///
/// Checks exhaustiveness and exclusivity (the groups' items are exactly
/// the source's items, each once) and order preservation (every group is
/// a subsequence of the source). Panics with a diagnostic when a law is
/// violated.
pub fn assert_covers<T>(source: &[T], groups: &[Vec<T>])
where
    T: PartialEq + Debug,
{
    let total: usize = groups.iter().map(Vec::len).sum();
    assert_eq!(
        total,
        source.len(),
        "partition dropped or duplicated items: {} in source, {} across groups",
        source.len(),
        total
    );

    let mut claimed = vec![false; source.len()];
    for item in groups.iter().flatten() {
        let slot = source
            .iter()
            .enumerate()
            .position(|(i, s)| !claimed[i] && s == item)
            .unwrap_or_else(|| {
                panic!("item {item:?} appears in the groups more often than in the source")
            });
        claimed[slot] = true;
    }

    for (index, group) in groups.iter().enumerate() {
        assert_subsequence(source, group, index);
    }
}

/// Assert the remainder arithmetic of a partition result.
///
/// The group count must be `predicates` (every item matched) or
/// `predicates + 1` (a non-empty remainder); in the latter case the last
/// group must actually be non-empty. The zero-predicate, empty-source
/// case yields zero groups and also passes.
pub fn assert_remainder_rule<T>(groups: &[Vec<T>], predicates: usize) {
    assert!(
        groups.len() == predicates || groups.len() == predicates + 1,
        "expected {} or {} groups, found {}",
        predicates,
        predicates + 1,
        groups.len()
    );
    if groups.len() == predicates + 1 {
        assert!(
            !groups[predicates].is_empty(),
            "an empty remainder group must be omitted, not appended"
        );
    }
}

fn assert_subsequence<T>(source: &[T], group: &[T], index: usize)
where
    T: PartialEq + Debug,
{
    let mut cursor = source.iter();
    for item in group {
        assert!(
            cursor.any(|s| s == item),
            "group {index} breaks source order around {item:?}"
        );
    }
}

/// Proptest strategies for partition inputs.
#[cfg(feature = "proptest")]
pub mod strategies {
    use proptest::prelude::*;

    use crate::predicate::{divisible_by, DivisibleBy};

    /// Small signed integer sources, empty included.
    pub fn int_source() -> impl Strategy<Value = Vec<i64>> {
        prop::collection::vec(-1000i64..1000, 0..64)
    }

    /// Ordered stacks of divisibility predicates, zero predicates included.
    ///
    /// Divisors stay small so stacks overlap often, which is where
    /// first-match priority earns its keep.
    pub fn divisor_stack() -> impl Strategy<Value = Vec<DivisibleBy<i64>>> {
        prop::collection::vec((2i64..8).prop_map(divisible_by), 0..5)
    }
}
