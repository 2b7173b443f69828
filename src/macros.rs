//! Variadic call syntax for the combinators

/// Negate anything convertible into a [`Value`](crate::Value).
///
/// # Example
///
/// ```rust
/// use fp_booleans::{negate, Value};
///
/// assert_eq!(negate!(true), Ok(Value::from(false)));
/// ```
#[macro_export]
macro_rules! negate {
    ($value:expr $(,)?) => {
        $crate::negate($crate::Value::from($value))
    };
}

/// Conjoin a comma separated list of booleans or predicates.
///
/// # Example
///
/// ```rust
/// use fp_booleans::{conjoin, Value};
///
/// assert_eq!(conjoin!(true, 1 > 0), Ok(Value::from(true)));
/// assert_eq!(conjoin!(), Ok(Value::from(true)));
/// ```
#[macro_export]
macro_rules! conjoin {
    ($($value:expr),* $(,)?) => {{
        let values: ::std::vec::Vec<$crate::Value> = ::std::vec![$($crate::Value::from($value)),*];
        $crate::conjoin(values)
    }};
}

/// Disjoin a comma separated list of booleans or predicates.
///
/// # Example
///
/// ```rust
/// use fp_booleans::{disjoin, Value};
///
/// assert_eq!(disjoin!(true, 1 < 0), Ok(Value::from(true)));
/// assert_eq!(disjoin!(), Ok(Value::from(false)));
/// ```
#[macro_export]
macro_rules! disjoin {
    ($($value:expr),* $(,)?) => {{
        let values: ::std::vec::Vec<$crate::Value> = ::std::vec![$($crate::Value::from($value)),*];
        $crate::disjoin(values)
    }};
}

#[cfg(test)]
mod tests {
    use crate::{Args, Error, Value, ValueKind};

    #[test]
    fn test_macros_accept_mixed_literal_types() {
        let is_even = Value::predicate(|args: Args<'_>| args.int(0).is_some_and(|n| n % 2 == 0));
        let is_odd = negate!(is_even.clone()).unwrap();
        let always = disjoin!(is_even, is_odd).unwrap();
        assert_eq!(always.test(&[Value::from(7)]), Ok(true));
    }

    #[test]
    fn test_macros_report_mixed_arguments() {
        let p = Value::predicate(|_| true);
        assert_eq!(
            conjoin!(false, p),
            Err(Error::MixedArguments {
                index: 1,
                expected: ValueKind::Boolean,
                found: ValueKind::Function,
            })
        );
    }

    #[test]
    fn test_trailing_comma() {
        assert_eq!(conjoin!(true, false,), Ok(Value::from(false)));
        assert_eq!(negate!(false,), Ok(Value::from(true)));
    }
}
