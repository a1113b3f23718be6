//! Composable predicates for first-match classification
//!
//! A partition call takes an *ordered list* of predicates; an item's
//! destination group is the earliest predicate it satisfies. This module
//! provides everything around that list: the `Predicate` trait (any
//! `Fn(&T) -> bool` closure qualifies), logical combinators (`and`, `or`,
//! `not`), a stock of ready-made value predicates, and the `first_match`
//! routing rule itself.
//!
//! # Homogeneous and heterogeneous lists
//!
//! A slice of predicates must share one type. A list of same-shaped stock
//! predicates does so naturally:
//!
//! ```rust
//! use watershed::predicate::*;
//!
//! let by_magnitude = [lt(10), lt(100), lt(1000)];
//! assert_eq!(first_match(&by_magnitude, &42), Some(1));
//! ```
//!
//! Mixed shapes go through `dyn Predicate`, boxed or borrowed:
//!
//! ```rust
//! use watershed::predicate::*;
//!
//! let classes: Vec<Box<dyn Predicate<i32>>> = vec![
//!     even().boxed(),
//!     (|v: &i32| *v < 0).boxed(),
//! ];
//! assert_eq!(first_match(&classes, &-3), Some(1));
//! assert_eq!(first_match(&classes, &7), None);
//! ```

mod combinators;
mod value;

pub mod prelude;

// Re-export core trait and routing rule
pub use combinators::{first_match, Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{And, Not, Or};

// Re-export stock value predicates
pub use value::{
    between, divisible_by, eq, even, ge, lt, odd, one_of, AtLeast, Between, DivisibleBy, Equals,
    Even, LessThan, Odd, OneOf,
};
