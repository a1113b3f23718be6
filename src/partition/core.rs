//! The shared partition routine
//!
//! Every call shape (by value, by key, by element) is a thin
//! instantiation of [`partition_with`]: one pass over the source, each
//! item routed to the bucket of the first predicate its probed facet
//! satisfies, unmatched items staged into a trailing remainder bucket
//! that is dropped when it ends the pass empty.

use std::iter::once;

use crate::predicate::{first_match, Predicate};

/// Partition any iterable into `Default + Extend` group containers.
///
/// `probe` projects each item onto the facet the predicates test: the
/// identity for sequence elements, the key or the value for map entries.
/// The output is one group per predicate, in predicate order, each holding
/// the items whose probed facet first matched that predicate, followed by
/// a remainder group present only when some item matched no predicate.
///
/// Items are routed in iteration order, and each group's `Extend` sees its
/// items in that order, so relative order within a group always matches
/// the source. With zero predicates the whole source is remainder: the
/// result is one full group, or no groups at all when the source is empty.
///
/// The named call shapes cover the common containers; this routine is
/// public for everything else: `BTreeMap` groups, or any other container
/// that is `Default + Extend`.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use watershed::partition_with;
/// use watershed::predicate::ge;
///
/// let scores = BTreeMap::from([("ada", 92), ("bob", 51), ("cyd", 74)]);
/// let groups: Vec<BTreeMap<&str, i32>> = partition_with(
///     scores.iter().map(|(name, score)| (*name, *score)),
///     &[ge(90), ge(70)],
///     |(_, score)| score,
/// );
///
/// assert_eq!(groups.len(), 3);
/// assert_eq!(groups[0], BTreeMap::from([("ada", 92)]));
/// assert_eq!(groups[1], BTreeMap::from([("cyd", 74)]));
/// assert_eq!(groups[2], BTreeMap::from([("bob", 51)]));
/// ```
pub fn partition_with<I, G, P, U, X>(items: I, predicates: &[P], probe: X) -> Vec<G>
where
    I: IntoIterator,
    G: Default + Extend<I::Item>,
    P: Predicate<U>,
    U: ?Sized,
    X: Fn(&I::Item) -> &U,
{
    let mut groups: Vec<G> = Vec::with_capacity(predicates.len() + 1);
    groups.resize_with(predicates.len() + 1, G::default);

    let mut unmatched = 0usize;
    for item in items {
        let slot = match first_match(predicates, probe(&item)) {
            Some(index) => index,
            None => {
                unmatched += 1;
                predicates.len()
            }
        };
        groups[slot].extend(once(item));
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(
        predicates = predicates.len(),
        unmatched,
        "partition pass complete"
    );

    if unmatched == 0 {
        groups.pop();
    }
    groups
}
