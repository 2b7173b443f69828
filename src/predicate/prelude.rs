//! Predicate prelude for convenient imports
//!
//! # Example
//!
//! ```rust
//! use fp_booleans::predicate::prelude::*;
//!
//! let small_even = even().and(lt(10));
//! assert!(small_even.check(&4));
//! ```

// Core trait
pub use super::combinators::{BoxedPredicate, Predicate, PredicateExt};

// Logical combinators
pub use super::combinators::{all_of, any_of, not_higher_order, And, Not, Or};

// Number predicates
pub use super::number::{eq, even, gt, lt, within};
