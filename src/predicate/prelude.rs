//! Predicate prelude for convenient imports
//!
//! This module re-exports the most commonly used predicate types and
//! functions.
//!
//! # Example
//!
//! ```rust
//! use watershed::predicate::prelude::*;
//!
//! let classes = [divisible_by(2), divisible_by(3)];
//! assert_eq!(first_match(&classes, &9), Some(1));
//! ```

// Core trait and routing rule
pub use super::combinators::{first_match, Predicate, PredicateExt};

// Logical combinators
pub use super::combinators::{And, Not, Or};

// Stock value predicates
pub use super::value::{between, divisible_by, eq, even, ge, lt, odd, one_of};
