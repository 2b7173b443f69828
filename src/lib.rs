//! # fp-booleans
//!
//! `not`, `and` and `or` written once, working the same way on booleans,
//! predicates of any arity and higher-order functions returning predicates.
//!
//! ## Runtime combinators
//!
//! [`negate()`], [`conjoin()`] and [`disjoin()`] take [`Value`]s whose kind is only
//! known at runtime. A [`Classifier`] decides whether a function is a
//! predicate or a higher-order predicate by probing it without arguments, so
//! every function passed in must tolerate being invoked that way (see the
//! [`classify`](mod@classify) module).
//!
//! ```rust
//! use fp_booleans::{conjoin, disjoin, negate, Args, Value};
//!
//! let gt = |bound: i64| Value::predicate(move |args: Args<'_>| args.int(0).is_some_and(|n| n > bound));
//! let within = |lo: i64, hi: i64| {
//!     Value::predicate(move |args: Args<'_>| args.int(0).is_some_and(|n| lo < n && n < hi))
//! };
//! let is_even = Value::predicate(|args: Args<'_>| args.int(0).is_some_and(|n| n % 2 == 0));
//!
//! let complex = disjoin([
//!     conjoin([gt(10), is_even.clone()])?,
//!     disjoin([within(0, 5), is_even])?,
//! ])?;
//!
//! assert_eq!(complex.test(&[Value::from(12)])?, true);
//! assert_eq!(complex.test(&[Value::from(13)])?, false);
//! assert_eq!(negate(complex)?.test(&[Value::from(-1)])?, true);
//! # Ok::<(), fp_booleans::Error>(())
//! ```
//!
//! ## Typed combinators
//!
//! When the kinds are known statically, the [`predicate`] module offers the
//! same operations with the shared signature checked by the compiler.
//!
//! ```rust
//! use fp_booleans::predicate::*;
//!
//! let found: Vec<i32> = (1..=9).filter(|n| even().and(gt(5)).check(n)).collect();
//! assert_eq!(found, vec![6, 8]);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit classification and composition events through `tracing`
//! - `serde`: (de)serialize [`Probe`], [`Classifier`] and [`ValueKind`]
//! - `proptest`: strategies for runtime values in [`testing::strategies`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

#[macro_use]
mod macros;

pub mod classify;
pub mod combinators;
pub mod error;
pub mod monoid;
pub mod predicate;
pub mod testing;
pub mod value;

// Re-exports
pub use classify::{classify, is_higher_order_predicate, is_predicate, Classifier, Kind, Probe};
pub use combinators::{conjoin, disjoin, negate};
pub use error::{Error, Result};
pub use value::{Args, Func, Value, ValueKind};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::classify::{Classifier, Kind, Probe};
    pub use crate::combinators::{conjoin, disjoin, negate};
    pub use crate::error::{Error, Result};
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::value::{Args, Value};
}
