//! Statically typed predicate combinators
//!
//! The typed counterpart of the runtime combinators: instead of classifying
//! an opaque [`Value`](crate::Value) at runtime, the kind of every argument
//! is known to the compiler.
//!
//! | runtime                      | typed                                  |
//! |------------------------------|----------------------------------------|
//! | `negate(bool)`               | `!b`                                   |
//! | `negate(predicate)`          | [`PredicateExt::not`]                  |
//! | `negate(higher_order)`       | [`not_higher_order`]                   |
//! | `conjoin(predicates...)`     | [`PredicateExt::and`], [`all_of`]      |
//! | `disjoin(predicates...)`     | [`PredicateExt::or`], [`any_of`]       |
//!
//! All predicates combined by one call share the signature `T`, so combining
//! predicates over different argument types does not compile.
//!
//! [`Value::from_predicate`](crate::Value::from_predicate) and
//! [`Value::from_higher_order`](crate::Value::from_higher_order) lift typed
//! predicates into runtime values when they need to meet untyped ones.
//!
//! # Example
//!
//! ```rust
//! use fp_booleans::predicate::*;
//!
//! let complex = gt(10).and(even()).or(within(0, 5).or(even()));
//! assert!(complex.check(&12));
//! assert!(complex.check(&3));
//! assert!(!complex.check(&-1));
//! assert!(!complex.check(&13));
//! assert!(complex.check(&-2));
//! ```

mod combinators;
mod number;
mod runtime;

pub mod prelude;

// Re-export core trait
pub use combinators::{BoxedPredicate, Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{all_of, any_of, not_higher_order, AllOf, And, AnyOf, Not, Or};

// Argument extraction for lifted predicates
pub use runtime::{FromArgs, FromValue};

// Re-export number predicates
pub use number::{eq, even, gt, lt, within, Eq, Even, Gt, Lt, Within};
