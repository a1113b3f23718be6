//! # Watershed
//!
//! > *"A watershed is the ridge that decides where the water goes"*
//!
//! A Rust library for first-match partitioning of collections.
//!
//! ## Philosophy
//!
//! **Watershed** does one thing: it splits a keyed collection or a sequence
//! into ordered groups according to an ordered list of predicates, with
//! anything unmatched collected into a trailing remainder group.
//!
//! - **One pass**: each item is inspected once and routed to the first
//!   predicate (in list order) it satisfies.
//! - **Ordered groups**: group `i` belongs to predicate `i`; the remainder,
//!   when non-empty, is always last.
//! - **Pure core**: the source is only read, never mutated; the operation
//!   is a pure function of its inputs.
//!
//! ## Quick Example
//!
//! ```rust
//! use watershed::partition_elements;
//! use watershed::predicate::even;
//!
//! let numbers = [1, 2, 3, 4, 5];
//! let groups = partition_elements(&numbers, &[even()]);
//!
//! // One group per predicate, plus a remainder for the unmatched odds.
//! assert_eq!(groups, vec![vec![2, 4], vec![1, 3, 5]]);
//! ```
//!
//! Keyed collections partition the same way, by value or by key:
//!
//! ```rust
//! use watershed::{partition_by_value, IndexMap};
//! use watershed::predicate::{even, odd, Predicate, PredicateExt};
//!
//! let bowl = IndexMap::from([
//!     ("apple", 1),
//!     ("banana", 2),
//!     ("orange", 3),
//!     ("grape", 4),
//!     ("watermelon", 5),
//! ]);
//!
//! let classes: Vec<Box<dyn Predicate<i32>>> = vec![even().boxed(), odd().boxed()];
//! let groups = partition_by_value(&bowl, &classes);
//!
//! // Every entry matched a predicate, so there is no remainder group.
//! assert_eq!(groups.len(), 2);
//! assert_eq!(groups[0], IndexMap::from([("banana", 2), ("grape", 4)]));
//! assert_eq!(groups[1], IndexMap::from([("apple", 1), ("orange", 3), ("watermelon", 5)]));
//! ```
//!
//! For more examples, see the [demos](https://github.com/iepathos/watershed/tree/master/demos)
//! directory.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod partition;
pub mod predicate;
pub mod testing;

// Re-exports
pub use partition::{
    partition_by_key, partition_by_keys, partition_by_value, partition_by_values,
    partition_elements, partition_into, partition_with,
};
pub use predicate::{first_match, Predicate, PredicateExt};

/// The insertion-ordered map used by the keyed call shapes, re-exported
/// so callers don't need a separate `indexmap` dependency to build sources.
pub use indexmap::IndexMap;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::partition::{
        partition_by_key, partition_by_keys, partition_by_value, partition_by_values,
        partition_elements, partition_into, partition_with,
    };
    pub use crate::predicate::{first_match, Predicate, PredicateExt};
    pub use crate::IndexMap;
}
