//! Core predicate trait and logical combinators
//!
//! This module provides the statically typed counterpart of
//! [`negate`](fn@crate::negate), [`conjoin`](fn@crate::conjoin) and
//! [`disjoin`](fn@crate::disjoin). The signature shared by combined predicates is
//! the type parameter `T`, so mixing predicates over different argument types
//! is a compile error rather than a runtime one. Predicates of several
//! arguments take a tuple.

/// A boolean test over borrowed values of type `T`.
///
/// Any `Fn(&T) -> bool` closure is a predicate. [`PredicateExt`] adds the
/// combinators, each returning a new predicate over the same `T`.
///
/// # Example
///
/// ```rust
/// use fp_booleans::predicate::*;
///
/// let in_range = gt(0).and(lt(10));
/// assert!(in_range.check(&5));
/// assert!(!in_range.check(&-5));
///
/// // Two arguments: a tuple signature
/// let ordered = |(a, b): &(i32, i32)| a < b;
/// assert!(ordered.not().check(&(3, 1)));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Returns true if `value` passes the test.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// A type-erased predicate, for lists of predicates sharing one signature.
pub type BoxedPredicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// `and`, `or`, `not` and `boxed` for every [`Predicate`].
///
/// Only `boxed` allocates; the others wrap `self` in [`And`], [`Or`] or [`Not`].
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Holds when both hold; `other` is skipped once `self` fails.
    ///
    /// ```rust
    /// use fp_booleans::predicate::*;
    ///
    /// let p = gt(0).and(even());
    /// assert!(p.check(&2));
    /// assert!(!p.check(&3));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Holds when either holds; `other` is skipped once `self` holds.
    ///
    /// ```rust
    /// use fp_booleans::predicate::*;
    ///
    /// let p = gt(0).or(even());
    /// assert!(p.check(&-2));
    /// assert!(!p.check(&-1));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Holds exactly when `self` does not.
    ///
    /// ```rust
    /// use fp_booleans::predicate::*;
    ///
    /// let upto5: Vec<i32> = (1..=9).filter(|n| gt(5).not().check(n)).collect();
    /// assert_eq!(upto5, vec![1, 2, 3, 4, 5]);
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }

    /// Erase the concrete type so predicates of one signature can share a list.
    fn boxed(self) -> BoxedPredicate<T>
    where
        Self: 'static,
        T: 'static,
    {
        Box::new(move |value: &T| self.check(value))
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// Two predicates joined with `&&`.
#[derive(Clone, Copy, Debug)]
pub struct And<L, R>(pub L, pub R);

impl<T: ?Sized, L: Predicate<T>, R: Predicate<T>> Predicate<T> for And<L, R> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        let And(left, right) = self;
        left.check(value) && right.check(value)
    }
}

/// Two predicates joined with `||`.
#[derive(Clone, Copy, Debug)]
pub struct Or<L, R>(pub L, pub R);

impl<T: ?Sized, L: Predicate<T>, R: Predicate<T>> Predicate<T> for Or<L, R> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        let Or(left, right) = self;
        left.check(value) || right.check(value)
    }
}

/// The complement of a predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

/// Conjunction of any number of predicates sharing one signature.
///
/// Predicates are checked in order and evaluation stops at the first one
/// that fails. An empty list always holds.
#[derive(Clone, Debug)]
pub struct AllOf<P>(pub Vec<P>);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for AllOf<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().all(|p| p.check(value))
    }
}

/// Create a predicate that holds when every given predicate holds.
///
/// # Example
///
/// ```rust
/// use fp_booleans::predicate::*;
///
/// let p = all_of(vec![even().boxed(), gt(5).boxed()]);
/// let found: Vec<i32> = (1..=9).filter(|n| p.check(n)).collect();
/// assert_eq!(found, vec![6, 8]);
/// ```
pub fn all_of<P>(predicates: impl IntoIterator<Item = P>) -> AllOf<P> {
    AllOf(predicates.into_iter().collect())
}

/// Disjunction of any number of predicates sharing one signature.
///
/// Predicates are checked in order and evaluation stops at the first one
/// that holds. An empty list never holds.
#[derive(Clone, Debug)]
pub struct AnyOf<P>(pub Vec<P>);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for AnyOf<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().any(|p| p.check(value))
    }
}

/// Create a predicate that holds when at least one given predicate holds.
///
/// # Example
///
/// ```rust
/// use fp_booleans::predicate::*;
///
/// let p = any_of(vec![even().boxed(), gt(5).boxed()]);
/// let found: Vec<i32> = (1..=9).filter(|n| p.check(n)).collect();
/// assert_eq!(found, vec![2, 4, 6, 7, 8, 9]);
/// ```
pub fn any_of<P>(predicates: impl IntoIterator<Item = P>) -> AnyOf<P> {
    AnyOf(predicates.into_iter().collect())
}

/// Negate a higher-order predicate.
///
/// The returned function forwards its arguments to `factory` and inverts the
/// predicate it produces.
///
/// # Example
///
/// ```rust
/// use fp_booleans::predicate::*;
///
/// let at_most = not_higher_order(gt::<i32>);
/// assert!(at_most(5).check(&5));
/// assert!(!at_most(5).check(&6));
/// ```
pub fn not_higher_order<U, P, H>(factory: H) -> impl Fn(U) -> Not<P>
where
    H: Fn(U) -> P,
{
    move |args| Not(factory(args))
}
