//! Keyed call shapes
//!
//! Partitioning for insertion-ordered maps, testing either the value or
//! the key of each entry. The source is borrowed and only read; entries
//! are cloned into freshly allocated groups, each of which preserves the
//! source's entry order.

use std::hash::Hash;

use indexmap::IndexMap;

use super::core::partition_with;
use crate::predicate::Predicate;

/// Partition a map's entries by testing each entry's *value*.
///
/// Returns one group per predicate, in predicate order, each holding the
/// entries whose value first matched that predicate, followed by a
/// remainder group holding the entries that matched none, present only
/// when non-empty.
///
/// # Example
///
/// ```rust
/// use watershed::{partition_by_value, IndexMap};
/// use watershed::predicate::{even, odd, Predicate, PredicateExt};
///
/// let bowl = IndexMap::from([
///     ("apple", 1),
///     ("banana", 2),
///     ("orange", 3),
///     ("grape", 4),
///     ("watermelon", 5),
/// ]);
///
/// let parity: Vec<Box<dyn Predicate<i32>>> = vec![even().boxed(), odd().boxed()];
/// let groups = partition_by_value(&bowl, &parity);
///
/// // The odd predicate catches everything the even one missed, so
/// // there is no remainder group.
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0], IndexMap::from([("banana", 2), ("grape", 4)]));
/// assert_eq!(groups[1], IndexMap::from([("apple", 1), ("orange", 3), ("watermelon", 5)]));
/// ```
pub fn partition_by_value<K, V, P>(source: &IndexMap<K, V>, predicates: &[P]) -> Vec<IndexMap<K, V>>
where
    K: Hash + Eq + Clone,
    V: Clone,
    P: Predicate<V>,
{
    partition_with(
        source.iter().map(|(k, v)| (k.clone(), v.clone())),
        predicates,
        |(_, v)| v,
    )
}

/// Partition a map's entries by testing each entry's *key*.
///
/// Identical to [`partition_by_value`] except that predicates see keys
/// instead of values.
///
/// # Example
///
/// ```rust
/// use watershed::{partition_by_key, IndexMap};
/// use watershed::predicate::even;
///
/// let bowl = IndexMap::from([
///     (1, "apple"),
///     (2, "banana"),
///     (3, "orange"),
///     (4, "grape"),
///     (5, "watermelon"),
/// ]);
///
/// let groups = partition_by_key(&bowl, &[even()]);
///
/// // One predicate was supplied, but the odd-keyed entries matched
/// // nothing, so an implicit remainder group appears.
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0], IndexMap::from([(2, "banana"), (4, "grape")]));
/// assert_eq!(groups[1], IndexMap::from([(1, "apple"), (3, "orange"), (5, "watermelon")]));
/// ```
pub fn partition_by_key<K, V, P>(source: &IndexMap<K, V>, predicates: &[P]) -> Vec<IndexMap<K, V>>
where
    K: Hash + Eq + Clone,
    V: Clone,
    P: Predicate<K>,
{
    partition_with(
        source.iter().map(|(k, v)| (k.clone(), v.clone())),
        predicates,
        |(k, _)| k,
    )
}

/// Alias for [`partition_by_value`]; reads better at call sites that pass
/// several predicates.
pub fn partition_by_values<K, V, P>(
    source: &IndexMap<K, V>,
    predicates: &[P],
) -> Vec<IndexMap<K, V>>
where
    K: Hash + Eq + Clone,
    V: Clone,
    P: Predicate<V>,
{
    partition_by_value(source, predicates)
}

/// Alias for [`partition_by_key`]; reads better at call sites that pass
/// several predicates.
pub fn partition_by_keys<K, V, P>(source: &IndexMap<K, V>, predicates: &[P]) -> Vec<IndexMap<K, V>>
where
    K: Hash + Eq + Clone,
    V: Clone,
    P: Predicate<K>,
{
    partition_by_key(source, predicates)
}
