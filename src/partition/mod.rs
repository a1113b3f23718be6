//! First-match partitioning of collections
//!
//! One algorithm, a handful of call shapes. Given a source collection and
//! an ordered list of predicates, produce an ordered list of groups: one
//! group per predicate, in predicate order, holding every item whose
//! *first* match (in list order) was that predicate, plus a trailing
//! remainder group for items that matched nothing, present only when
//! non-empty.
//!
//! The split is total, exhaustive, and non-overlapping: every source item
//! lands in exactly one group, in its source-relative order, and the
//! source itself is never mutated.
//!
//! # Call shapes
//!
//! - [`partition_by_value`] / [`partition_by_key`]: keyed collections
//!   ([`IndexMap`](crate::IndexMap)), testing entry values or keys; plus
//!   the aliases [`partition_by_values`] / [`partition_by_keys`].
//! - [`partition_elements`]: slices, cloning elements into `Vec` groups.
//! - [`partition_into`]: owned iterables, moving elements.
//! - [`partition_with`]: the shared routine underneath all of the above,
//!   generic over the group container and the probed facet.
//!
//! # Example
//!
//! ```rust
//! use watershed::partition::partition_elements;
//! use watershed::predicate::{between, lt, PredicateExt};
//!
//! let readings = [12, -4, 87, 40, 251];
//! let groups = partition_elements(&readings, &[lt(0).boxed(), between(0, 99).boxed()]);
//!
//! assert_eq!(groups, vec![vec![-4], vec![12, 87, 40], vec![251]]);
//! ```

mod core;
mod map;
mod sequence;

pub use self::core::partition_with;
pub use map::{partition_by_key, partition_by_keys, partition_by_value, partition_by_values};
pub use sequence::{partition_elements, partition_into};
