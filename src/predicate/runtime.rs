//! Lifting typed predicates into runtime values
//!
//! A typed [`Predicate<T>`] becomes a [`Value`] that reads its argument (or
//! tuple of arguments) out of the positional [`Args`]. Arguments that are
//! missing or of the wrong kind make the lifted predicate return `false`, so
//! the lifted value is always resilient to being probed without arguments
//! and can be handed straight to [`negate`](fn@crate::negate),
//! [`conjoin`](fn@crate::conjoin) and [`disjoin`](fn@crate::disjoin).
//!
//! # Example
//!
//! ```rust
//! use fp_booleans::predicate::*;
//! use fp_booleans::{conjoin, negate, Value};
//!
//! let small = negate(Value::from_predicate(gt(5_i64)))?;
//! let small_even = conjoin([small, Value::from_predicate::<i64, _>(even())])?;
//!
//! let found: Vec<i64> = (1..=9)
//!     .filter(|n| small_even.test(&[Value::from(*n)]) == Ok(true))
//!     .collect();
//! assert_eq!(found, vec![2, 4]);
//! # Ok::<(), fp_booleans::Error>(())
//! ```

use super::combinators::Predicate;
use crate::value::{Args, Value};

/// A single argument that can be read back out of a [`Value`].
pub trait FromValue: Sized {
    /// The typed argument, or `None` if `value` is of another kind.
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_int()
    }
}

impl FromValue for f64 {
    // Integers widen, as in `Args::float`.
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(x) => Some(*x),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

/// The full argument list of a typed predicate.
///
/// Scalars read the first argument; tuples read one argument per element.
pub trait FromArgs: Sized {
    /// The typed arguments, or `None` if any is missing or mismatched.
    fn from_args(args: Args<'_>) -> Option<Self>;
}

macro_rules! scalar_args {
    ($($t:ty),*) => {
        $(
            impl FromArgs for $t {
                fn from_args(args: Args<'_>) -> Option<Self> {
                    <$t>::from_value(args.get(0))
                }
            }
        )*
    };
}

scalar_args!(bool, i64, f64, String);

macro_rules! tuple_args {
    ($(($($name:ident: $index:tt),+)),*) => {
        $(
            impl<$($name: FromValue),+> FromArgs for ($($name,)+) {
                fn from_args(args: Args<'_>) -> Option<Self> {
                    Some(($($name::from_value(args.get($index))?,)+))
                }
            }
        )*
    };
}

tuple_args!((A: 0, B: 1), (A: 0, B: 1, C: 2));

impl Value {
    /// Lift a typed predicate into a runtime predicate.
    ///
    /// The lifted predicate returns `false` whenever its arguments cannot be
    /// read as `T`.
    pub fn from_predicate<T, P>(predicate: P) -> Value
    where
        T: FromArgs + 'static,
        P: Predicate<T> + 'static,
    {
        Value::predicate(move |args: Args<'_>| {
            T::from_args(args).is_some_and(|value| predicate.check(&value))
        })
    }

    /// Lift a typed higher-order predicate, such as [`gt`](super::gt), into a
    /// runtime higher-order predicate.
    ///
    /// When the outer arguments cannot be read as `U` the result is a
    /// predicate that never holds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fp_booleans::predicate::*;
    /// use fp_booleans::{negate, Value};
    ///
    /// let at_most = negate(Value::from_higher_order(gt::<i64>))?;
    /// let at_most_five = at_most.call(&[Value::from(5)])?;
    /// assert_eq!(at_most_five.test(&[Value::from(5)]), Ok(true));
    /// assert_eq!(at_most_five.test(&[Value::from(6)]), Ok(false));
    /// # Ok::<(), fp_booleans::Error>(())
    /// ```
    pub fn from_higher_order<U, T, P, H>(factory: H) -> Value
    where
        U: FromArgs + 'static,
        T: FromArgs + 'static,
        P: Predicate<T> + 'static,
        H: Fn(U) -> P + Send + Sync + 'static,
    {
        Value::func(move |args: Args<'_>| {
            Ok(match U::from_args(args) {
                Some(outer) => Value::from_predicate(factory(outer)),
                None => Value::predicate(|_| false),
            })
        })
    }
}
