//! Sequence call shapes
//!
//! Partitioning for slices and iterators of plain elements. The borrowed
//! shape clones elements out of the source; the consuming shape moves
//! them, for callers who already own the collection.

use super::core::partition_with;
use crate::predicate::Predicate;

/// Partition a slice's elements into `Vec` groups.
///
/// Returns one group per predicate, in predicate order, each holding the
/// elements that first matched that predicate, followed by a remainder
/// group for elements that matched none, present only when non-empty.
/// Relative order within each group matches the source.
///
/// # Example
///
/// ```rust
/// use watershed::partition_elements;
/// use watershed::predicate::even;
///
/// let groups = partition_elements(&[1, 2, 3, 4, 5], &[even()]);
/// assert_eq!(groups, vec![vec![2, 4], vec![1, 3, 5]]);
/// ```
pub fn partition_elements<T, P>(source: &[T], predicates: &[P]) -> Vec<Vec<T>>
where
    T: Clone,
    P: Predicate<T>,
{
    partition_with(source.iter().cloned(), predicates, |item| item)
}

/// Partition an owned iterable's elements into `Vec` groups, consuming it.
///
/// Same contract as [`partition_elements`], without the `Clone` bound:
/// elements are moved into their destination group.
///
/// # Example
///
/// ```rust
/// use watershed::partition_into;
///
/// let lines = vec![
///     String::from("error: disk full"),
///     String::from("ready"),
///     String::from("error: timeout"),
/// ];
/// let groups = partition_into(lines, &[|l: &String| l.starts_with("error")]);
/// assert_eq!(groups[0], ["error: disk full", "error: timeout"]);
/// assert_eq!(groups[1], ["ready"]);
/// ```
pub fn partition_into<I, P>(source: I, predicates: &[P]) -> Vec<Vec<I::Item>>
where
    I: IntoIterator,
    P: Predicate<I::Item>,
{
    partition_with(source, predicates, |item| item)
}
