//! `negate`, `conjoin` and `disjoin` over runtime values
//!
//! Each combinator branches on the classified kind of its input and returns
//! either a boolean or a new function of the same shape:
//!
//! | input                   | `negate`                  | `conjoin` / `disjoin`      |
//! |-------------------------|---------------------------|----------------------------|
//! | booleans                | complement                | AND / OR of all values     |
//! | predicates              | inverted predicate        | short-circuiting composite |
//! | higher-order predicates | negated curried predicate | not supported              |
//!
//! # Example
//!
//! ```rust
//! use fp_booleans::{conjoin, disjoin, negate, Args, Value};
//!
//! let gt = |bound: i64| Value::predicate(move |args: Args<'_>| args.int(0).is_some_and(|n| n > bound));
//! let is_even = Value::predicate(|args: Args<'_>| args.int(0).is_some_and(|n| n % 2 == 0));
//!
//! let even_and_big = conjoin([is_even.clone(), gt(5)]).unwrap();
//! let small = negate(gt(5)).unwrap();
//! let even_or_big = disjoin([is_even, gt(5)]).unwrap();
//!
//! let filter = |p: &Value| -> Vec<i64> {
//!     (1..=9).filter(|n| p.test(&[Value::from(*n)]).unwrap()).collect()
//! };
//! assert_eq!(filter(&even_and_big), vec![6, 8]);
//! assert_eq!(filter(&small), vec![1, 2, 3, 4, 5]);
//! assert_eq!(filter(&even_or_big), vec![2, 4, 6, 7, 8, 9]);
//! ```

use crate::classify::{Classifier, Kind};
use crate::error::{Error, Result};
use crate::monoid::{fold_all, All, Any};
use crate::value::{expect_bool, Args, Func, Value, ValueKind};

impl Classifier {
    /// Negate a boolean, a predicate or a higher-order predicate.
    ///
    /// A negated higher-order predicate negates whatever its original returns
    /// once applied, so curried chains of any depth are supported.
    pub fn negate(&self, value: Value) -> Result<Value> {
        let negated = match self.classify(&value)? {
            Kind::Boolean(b) => Value::Bool(!b),
            Kind::Predicate(f) => Value::func(move |args: Args<'_>| {
                let result = expect_bool(f.call(args.as_slice())?)?;
                Ok(Value::Bool(!result))
            }),
            Kind::HigherOrderPredicate(f) => {
                let classifier = *self;
                Value::func(move |args: Args<'_>| classifier.negate(f.call(args.as_slice())?))
            }
        };
        Ok(negated)
    }

    /// AND across booleans, or a predicate requiring every predicate to hold.
    ///
    /// Composition never probes its arguments, so the configured [`Probe`]
    /// has no effect here. The method exists so one classifier value can
    /// stand in for the three free functions.
    ///
    /// [`Probe`]: crate::Probe
    pub fn conjoin(&self, values: impl IntoIterator<Item = Value>) -> Result<Value> {
        iterate(Quantifier::Every, values)
    }

    /// OR across booleans, or a predicate requiring at least one predicate to hold.
    ///
    /// Like [`Classifier::conjoin`], this does not probe and ignores the
    /// configured probe.
    pub fn disjoin(&self, values: impl IntoIterator<Item = Value>) -> Result<Value> {
        iterate(Quantifier::Some, values)
    }
}

/// Negate a boolean, a predicate or a higher-order predicate.
///
/// # Errors
///
/// - [`Error::UnhandledKind`] if `value` is neither a boolean nor a function
///   that can be classified.
/// - [`Error::NotResilient`] if probing the function fails.
///
/// # Example
///
/// ```rust
/// use fp_booleans::{negate, Args, Value};
///
/// assert_eq!(negate(Value::from(true)), Ok(Value::from(false)));
///
/// // not(is)(5) behaves as "is not 5"
/// let is = Value::func(|outer: Args<'_>| {
///     let c = outer.get(0).clone();
///     Ok(Value::predicate(move |inner: Args<'_>| inner.get(0) == &c))
/// });
/// let is_not_five = negate(is).unwrap().call(&[Value::from(5)]).unwrap();
/// assert_eq!(is_not_five.test(&[Value::from(4)]), Ok(true));
/// assert_eq!(is_not_five.test(&[Value::from(5)]), Ok(false));
/// ```
pub fn negate(value: Value) -> Result<Value> {
    Classifier::default().negate(value)
}

/// Logical AND across booleans, or the conjunction of predicates.
///
/// With booleans the result is `true` iff every value is `true` (and `true`
/// for no values at all). With predicates the result is a new predicate
/// that invokes each predicate left to right with its own arguments and
/// stops at the first `false`.
///
/// # Errors
///
/// - [`Error::MixedArguments`] if booleans and functions are mixed.
/// - [`Error::UnhandledKind`] for arguments that are neither.
///
/// # Example
///
/// ```rust
/// use fp_booleans::{conjoin, Value};
///
/// assert_eq!(conjoin([Value::from(true), Value::from(1 > 2)]), Ok(Value::from(false)));
/// assert_eq!(conjoin(Vec::new()), Ok(Value::from(true)));
/// ```
pub fn conjoin(values: impl IntoIterator<Item = Value>) -> Result<Value> {
    Classifier::default().conjoin(values)
}

/// Logical OR across booleans, or the disjunction of predicates.
///
/// With booleans the result is `false` iff every value is `false` (and
/// `false` for no values at all). With predicates the result is a new
/// predicate that stops at the first `true`.
///
/// # Example
///
/// ```rust
/// use fp_booleans::{disjoin, Value};
///
/// assert_eq!(disjoin([Value::from(1 > 2), Value::from(2 > 1)]), Ok(Value::from(true)));
/// assert_eq!(disjoin(Vec::new()), Ok(Value::from(false)));
/// ```
pub fn disjoin(values: impl IntoIterator<Item = Value>) -> Result<Value> {
    Classifier::default().disjoin(values)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quantifier {
    Every,
    Some,
}

impl Quantifier {
    /// The result that ends evaluation early.
    fn decisive(self) -> bool {
        match self {
            Quantifier::Every => false,
            Quantifier::Some => true,
        }
    }

    fn fold(self, values: impl Iterator<Item = bool>) -> bool {
        match self {
            Quantifier::Every => fold_all(values.map(All)).0,
            Quantifier::Some => fold_all(values.map(Any)).0,
        }
    }

    fn evaluate(self, predicates: &[Func], args: Args<'_>) -> Result<Value> {
        for predicate in predicates {
            if expect_bool(predicate.call(args.as_slice())?)? == self.decisive() {
                return Ok(Value::Bool(self.decisive()));
            }
        }
        Ok(Value::Bool(!self.decisive()))
    }
}

fn iterate(quantifier: Quantifier, values: impl IntoIterator<Item = Value>) -> Result<Value> {
    let values: Vec<Value> = values.into_iter().collect();

    let expected = match values.first() {
        Some(first) => first.kind(),
        None => return Ok(Value::Bool(quantifier.fold(std::iter::empty()))),
    };
    if !matches!(expected, ValueKind::Boolean | ValueKind::Function) {
        return Err(Error::UnhandledKind { found: expected });
    }

    for (index, value) in values.iter().enumerate().skip(1) {
        let found = value.kind();
        if found == expected {
            continue;
        }
        return Err(match found {
            ValueKind::Boolean | ValueKind::Function => Error::MixedArguments {
                index,
                expected,
                found,
            },
            _ => Error::UnhandledKind { found },
        });
    }

    if expected == ValueKind::Boolean {
        return Ok(Value::Bool(
            quantifier.fold(values.iter().filter_map(Value::as_bool)),
        ));
    }

    let predicates: Vec<Func> = values.into_iter().filter_map(Value::into_func).collect();

    #[cfg(feature = "tracing")]
    tracing::trace!(
        quantifier = ?quantifier,
        predicates = predicates.len(),
        "composed predicates"
    );

    Ok(Value::func(move |args: Args<'_>| {
        quantifier.evaluate(&predicates, args)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Probe;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn gt(bound: i64) -> Value {
        Value::predicate(move |args| args.int(0).is_some_and(|n| n > bound))
    }

    fn is_even() -> Value {
        Value::predicate(|args| args.int(0).is_some_and(|n| n % 2 == 0))
    }

    fn counting(result: bool, calls: &Arc<AtomicUsize>) -> Value {
        let calls = calls.clone();
        Value::predicate(move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            result
        })
    }

    fn holds(p: &Value, n: i64) -> bool {
        p.test(&[Value::from(n)]).unwrap()
    }

    #[test]
    fn test_negate_boolean() {
        assert_eq!(negate(Value::from(true)), Ok(Value::from(false)));
        assert_eq!(negate(Value::from(false)), Ok(Value::from(true)));
        assert_eq!(negate(Value::from(1 > 2)), Ok(Value::from(true)));
    }

    #[test]
    fn test_negate_predicate() {
        let not_even = negate(is_even()).unwrap();
        assert!(holds(&not_even, 3));
        assert!(!holds(&not_even, 4));
    }

    #[test]
    fn test_negate_higher_order_predicate() {
        let gt_factory = Value::func(|args| Ok(gt(args.int(0).unwrap_or(0))));
        let not_gt = negate(gt_factory).unwrap();
        let at_most_five = not_gt.call(&[Value::from(5)]).unwrap();
        assert!(holds(&at_most_five, 5));
        assert!(!holds(&at_most_five, 6));
    }

    #[test]
    fn test_negate_three_level_curry() {
        // between(lo)(hi)(n)
        let between = Value::func(|lo| {
            let lo = lo.int(0).unwrap_or(0);
            Ok(Value::func(move |hi| {
                let hi = hi.int(0).unwrap_or(0);
                Ok(Value::predicate(move |n| {
                    n.int(0).is_some_and(|n| lo < n && n < hi)
                }))
            }))
        });
        let outside = negate(between).unwrap();
        let outside_0_10 = outside
            .call(&[Value::from(0)])
            .unwrap()
            .call(&[Value::from(10)])
            .unwrap();
        assert!(!holds(&outside_0_10, 5));
        assert!(holds(&outside_0_10, 10));
    }

    #[test]
    fn test_negate_unhandled_kind() {
        assert_eq!(
            negate(Value::from("nope")),
            Err(Error::UnhandledKind {
                found: ValueKind::String
            })
        );
        assert_eq!(
            negate(Value::Undefined),
            Err(Error::UnhandledKind {
                found: ValueKind::Undefined
            })
        );
    }

    #[test]
    fn test_negated_predicate_rejects_non_boolean_result() {
        // Boolean when probed, a number once it sees an argument.
        let sloppy = Value::func(|args| match args.int(0) {
            Some(n) => Ok(Value::from(n)),
            None => Ok(Value::from(false)),
        });
        let negated = negate(sloppy).unwrap();
        assert_eq!(
            negated.call(&[Value::from(1)]),
            Err(Error::NotBoolean {
                found: ValueKind::Integer
            })
        );
    }

    #[test]
    fn test_negate_with_placeholder_probe() {
        let classifier = Classifier::new().with_probe(Probe::Placeholder);
        let needs_one_arg = Value::func(|args| {
            if args.is_empty() {
                Err(Error::failed("called with no arguments"))
            } else {
                Ok(Value::from(args.int(0).is_some_and(|n| n > 0)))
            }
        });
        assert!(negate(needs_one_arg.clone())
            .unwrap_err()
            .is_not_resilient());
        let negated = classifier.negate(needs_one_arg).unwrap();
        assert!(holds(&negated, -1));
    }

    #[test]
    fn test_classifier_composition_ignores_probe() {
        // Fails under either probe, yet composition accepts it.
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let strict = Value::func(move |args| {
            counter.fetch_add(1, Ordering::SeqCst);
            match args.int(0) {
                Some(n) => Ok(Value::from(n > 0)),
                None => Err(Error::failed("argument missing")),
            }
        });
        let classifier = Classifier::new().with_probe(Probe::Placeholder);
        let both = classifier.conjoin([strict.clone(), is_even()]).unwrap();
        let either = classifier.disjoin([strict, is_even()]).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(holds(&both, 2));
        assert!(holds(&either, -2));
        assert!(!holds(&either, -1));
    }

    #[test]
    fn test_conjoin_booleans() {
        let cases: [(&[bool], bool); 5] = [
            (&[true], true),
            (&[true, true], true),
            (&[false], false),
            (&[false, true], false),
            (&[false, false], false),
        ];
        for (values, expected) in cases {
            let values = values.iter().copied().map(Value::from);
            assert_eq!(conjoin(values), Ok(Value::from(expected)));
        }
    }

    #[test]
    fn test_disjoin_booleans() {
        let cases: [(&[bool], bool); 5] = [
            (&[true], true),
            (&[true, true], true),
            (&[false], false),
            (&[true, false, false], true),
            (&[false, false], false),
        ];
        for (values, expected) in cases {
            let values = values.iter().copied().map(Value::from);
            assert_eq!(disjoin(values), Ok(Value::from(expected)));
        }
    }

    #[test]
    fn test_empty_lists_are_vacuous() {
        assert_eq!(conjoin(Vec::new()), Ok(Value::from(true)));
        assert_eq!(disjoin(Vec::new()), Ok(Value::from(false)));
    }

    #[test]
    fn test_conjoin_predicates() {
        let p = conjoin([gt(0), is_even()]).unwrap();
        assert!(holds(&p, 2));
        assert!(!holds(&p, 3));
        assert!(!holds(&p, -2));
    }

    #[test]
    fn test_disjoin_predicates() {
        let p = disjoin([gt(0), is_even()]).unwrap();
        assert!(holds(&p, 2));
        assert!(holds(&p, 3));
        assert!(holds(&p, -2));
        assert!(!holds(&p, -1));
    }

    #[test]
    fn test_conjoin_short_circuits() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let p = conjoin([counting(false, &first), counting(true, &second)]).unwrap();

        assert_eq!(p.test(&[Value::from(1)]), Ok(false));
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_disjoin_short_circuits() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let p = disjoin([counting(true, &first), counting(false, &second)]).unwrap();

        assert_eq!(p.test(&[]), Ok(true));
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_composition_does_not_invoke_predicates() {
        let calls = Arc::new(AtomicUsize::new(0));
        let _p = conjoin([counting(true, &calls), counting(true, &calls)]).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_mixed_arguments_fail_fast() {
        assert_eq!(
            conjoin([Value::from(true), is_even()]),
            Err(Error::MixedArguments {
                index: 1,
                expected: ValueKind::Boolean,
                found: ValueKind::Function,
            })
        );
        assert_eq!(
            disjoin([is_even(), gt(1), Value::from(false)]),
            Err(Error::MixedArguments {
                index: 2,
                expected: ValueKind::Function,
                found: ValueKind::Boolean,
            })
        );
    }

    #[test]
    fn test_unhandled_elements() {
        assert_eq!(
            conjoin([Value::from(1), Value::from(2)]),
            Err(Error::UnhandledKind {
                found: ValueKind::Integer
            })
        );
        assert_eq!(
            disjoin([Value::from(true), Value::from("x")]),
            Err(Error::UnhandledKind {
                found: ValueKind::String
            })
        );
    }

    #[test]
    fn test_composite_rejects_non_boolean_results() {
        let curried = Value::func(|_| Ok(is_even()));
        let p = conjoin([gt(0), curried]).unwrap();
        assert_eq!(
            p.test(&[Value::from(2)]),
            Err(Error::NotBoolean {
                found: ValueKind::Function
            })
        );
    }

    #[test]
    fn test_composite_propagates_caller_failures() {
        let failing = Value::func(|_| Err(Error::failed("boom")));
        let p = disjoin([gt(10), failing]).unwrap();
        assert_eq!(p.test(&[Value::from(1)]), Err(Error::failed("boom")));
        assert_eq!(p.test(&[Value::from(11)]), Ok(true));
    }
}
