//! Number predicates
//!
//! Comparisons against a fixed operand, an open interval and parity. Each
//! factory maps its operands to a predicate, which makes the factory itself a
//! higher-order predicate: `gt` can be passed to
//! [`not_higher_order`](super::not_higher_order) or lifted with
//! [`Value::from_higher_order`](crate::Value::from_higher_order).
//!
//! # Example
//!
//! ```rust
//! use fp_booleans::predicate::*;
//!
//! assert!(eq(5).check(&5));
//! assert!(gt(5).check(&6) && !gt(5).check(&5));
//! assert!(lt(5).check(&4) && !lt(5).check(&5));
//! ```

use super::combinators::Predicate;
use std::ops::Rem;

macro_rules! comparison {
    ($(#[$doc:meta])* $name:ident, $factory:ident, $bound:ident, $op:tt) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug)]
        pub struct $name<T>(pub T);

        impl<T: $bound + Send + Sync> Predicate<T> for $name<T> {
            #[inline]
            fn check(&self, value: &T) -> bool {
                *value $op self.0
            }
        }

        $(#[$doc])*
        pub fn $factory<T: $bound + Send + Sync>(operand: T) -> $name<T> {
            $name(operand)
        }
    };
}

comparison!(
    /// Holds for values equal to the operand.
    Eq, eq, PartialEq, ==
);
comparison!(
    /// Holds for values strictly greater than the operand.
    Gt, gt, PartialOrd, >
);
comparison!(
    /// Holds for values strictly less than the operand.
    Lt, lt, PartialOrd, <
);

/// Holds for values in the open interval `(min, max)`.
#[derive(Clone, Copy, Debug)]
pub struct Within<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for Within<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.min < *value && *value < self.max
    }
}

/// Predicate holding strictly between `min` and `max`; both bounds are excluded.
///
/// # Example
///
/// ```rust
/// use fp_booleans::predicate::*;
///
/// assert!(within(0, 5).check(&3));
/// assert!(!within(0, 5).check(&0));
/// assert!(!within(0, 5).check(&5));
/// ```
pub fn within<T: PartialOrd + Send + Sync>(min: T, max: T) -> Within<T> {
    Within { min, max }
}

/// Holds for integers divisible by two.
#[derive(Clone, Copy, Debug, Default)]
pub struct Even;

impl<T> Predicate<T> for Even
where
    T: Copy + Rem<Output = T> + PartialEq + From<u8>,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value % T::from(2) == T::from(0)
    }
}

/// Parity predicate for any integer type.
///
/// ```rust
/// use fp_booleans::predicate::*;
///
/// assert!(even().check(&-2_i64));
/// assert!(!even().check(&7_i32));
/// ```
pub fn even() -> Even {
    Even
}
