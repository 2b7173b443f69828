//! Testing utilities for code built on fp-booleans
//!
//! Assertion macros for runtime predicates and, behind the `proptest`
//! feature, strategies generating [`Value`](crate::Value)s.
//!
//! # Examples
//!
//! ```rust
//! use fp_booleans::{assert_holds, assert_rejects, negate, Args, Value};
//!
//! let is_even = Value::predicate(|args: Args<'_>| args.int(0).is_some_and(|n| n % 2 == 0));
//! assert_holds!(is_even, 4);
//! assert_rejects!(negate(is_even).unwrap(), 4);
//! ```

/// Assert that a runtime predicate returns `true` for the given arguments.
///
/// Panics if the predicate returns `false` or fails.
#[macro_export]
macro_rules! assert_holds {
    ($predicate:expr $(, $arg:expr)* $(,)?) => {
        match $predicate.test(&[$($crate::Value::from($arg)),*]) {
            ::std::result::Result::Ok(true) => {}
            ::std::result::Result::Ok(false) => {
                panic!("Expected predicate to hold, got false");
            }
            ::std::result::Result::Err(e) => {
                panic!("Expected predicate to hold, got error: {}", e);
            }
        }
    };
}

/// Assert that a runtime predicate returns `false` for the given arguments.
///
/// Panics if the predicate returns `true` or fails.
#[macro_export]
macro_rules! assert_rejects {
    ($predicate:expr $(, $arg:expr)* $(,)?) => {
        match $predicate.test(&[$($crate::Value::from($arg)),*]) {
            ::std::result::Result::Ok(false) => {}
            ::std::result::Result::Ok(true) => {
                panic!("Expected predicate to reject, got true");
            }
            ::std::result::Result::Err(e) => {
                panic!("Expected predicate to reject, got error: {}", e);
            }
        }
    };
}

/// Assert that a result failed because a function was not resilient to
/// being invoked without arguments.
///
/// # Example
///
/// ```rust
/// use fp_booleans::{assert_not_resilient, is_predicate, Error, Value};
///
/// let fragile = Value::func(|_| Err(Error::failed("undefined")));
/// assert_not_resilient!(is_predicate(&fragile));
/// ```
#[macro_export]
macro_rules! assert_not_resilient {
    ($result:expr) => {
        match $result {
            ::std::result::Result::Err($crate::Error::NotResilient { .. }) => {}
            ::std::result::Result::Err(e) => {
                panic!("Expected NotResilient, got error: {}", e);
            }
            ::std::result::Result::Ok(v) => {
                panic!("Expected NotResilient, got Ok: {:?}", v);
            }
        }
    };
}

/// Strategies for property tests over runtime values.
#[cfg(feature = "proptest")]
pub mod strategies {
    use crate::Value;
    use proptest::prelude::*;

    /// Boolean values.
    pub fn boolean() -> impl Strategy<Value = Value> {
        any::<bool>().prop_map(Value::Bool)
    }

    /// Lists of boolean values, paired with the plain booleans they hold.
    pub fn booleans(max_len: usize) -> impl Strategy<Value = (Vec<bool>, Vec<Value>)> {
        prop::collection::vec(any::<bool>(), 0..=max_len).prop_map(|bools| {
            let values = bools.iter().copied().map(Value::Bool).collect();
            (bools, values)
        })
    }

    /// Values that are neither booleans nor functions.
    pub fn unhandled() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Undefined),
            any::<i64>().prop_map(Value::Int),
            any::<f64>().prop_map(Value::Float),
            ".*".prop_map(Value::Str),
        ]
    }
}
