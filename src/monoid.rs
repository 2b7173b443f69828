//! Boolean monoids behind `conjoin` and `disjoin`
//!
//! A `Semigroup` is a type with an associative binary operation; a `Monoid`
//! adds an identity element. Booleans form two monoids:
//!
//! - [`All`]: combine with `&&`, identity `true`
//! - [`Any`]: combine with `||`, identity `false`
//!
//! The identities are what [`conjoin`](fn@crate::conjoin) and
//! [`disjoin`](fn@crate::disjoin) return for an empty argument list.
//!
//! # Mathematical Properties
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))   (associativity)
//! a.combine(M::empty()) == a == M::empty().combine(a)  (identity)
//! ```
//!
//! # Example
//!
//! ```
//! use fp_booleans::monoid::{fold_all, All, Any};
//!
//! assert_eq!(fold_all([true, true, false].map(All)), All(false));
//! assert_eq!(fold_all([false, true].map(Any)), Any(true));
//!
//! // Vacuous identities
//! assert_eq!(fold_all(Vec::<All>::new()), All(true));
//! assert_eq!(fold_all(Vec::<Any>::new()), Any(false));
//! ```

/// A type that supports an associative binary operation
///
/// # Note on Ownership
///
/// The `combine` method takes `self` by value, not by reference.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

/// A `Semigroup` with an identity element.
pub trait Monoid: Semigroup {
    /// The identity element for this monoid.
    ///
    /// Satisfies: `a.combine(Self::empty()) == a` and `Self::empty().combine(a) == a`
    fn empty() -> Self;
}

/// Conjunction monoid. Identity: `true`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct All(pub bool);

impl Semigroup for All {
    #[inline]
    fn combine(self, other: Self) -> Self {
        All(self.0 && other.0)
    }
}

impl Monoid for All {
    fn empty() -> Self {
        All(true)
    }
}

/// Disjunction monoid. Identity: `false`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Any(pub bool);

impl Semigroup for Any {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Any(self.0 || other.0)
    }
}

impl Monoid for Any {
    fn empty() -> Self {
        Any(false)
    }
}

/// Fold an iterator of monoid values starting from the identity.
pub fn fold_all<M, I>(iter: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    iter.into_iter().fold(M::empty(), |acc, x| acc.combine(x))
}
