//! Runtime classification of booleans, predicates and higher-order predicates
//!
//! Arity and return type cannot be read off an opaque function, so the only
//! uniform signal is the type of the value it returns when probed with no
//! meaningful arguments. A boolean result makes it a predicate; a function
//! result that is itself a predicate makes it a higher-order predicate.
//!
//! # Resilience precondition
//!
//! Every function handed to this crate must tolerate being invoked with all of
//! its arguments absent. The value it returns under that probe does not need
//! to be meaningful, only of the right kind:
//!
//! ```rust
//! use fp_booleans::{is_predicate, Args, Error, Value};
//!
//! // Resilient: a missing argument simply compares as false.
//! let has_text = Value::predicate(|args: Args<'_>| args.str(0).is_some_and(|s| !s.is_empty()));
//! assert_eq!(is_predicate(&has_text), Ok(true));
//!
//! // Not resilient: fails when the argument is missing.
//! let strict = Value::func(|args: Args<'_>| match args.str(0) {
//!     Some(s) => Ok(Value::from(!s.is_empty())),
//!     None => Err(Error::failed("argument is undefined")),
//! });
//! assert!(is_predicate(&strict).unwrap_err().is_not_resilient());
//! ```
//!
//! A probe failure is always surfaced as [`Error::NotResilient`], never
//! turned into a silent `false`.

use crate::error::{Error, Result};
use crate::value::{Func, Value, ValueKind, UNDEFINED};

/// Arguments used when probing a candidate function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Probe {
    /// Invoke with no arguments at all.
    #[default]
    Empty,
    /// Invoke with a single `Undefined` argument.
    Placeholder,
}

impl Probe {
    fn args(self) -> &'static [Value] {
        match self {
            Probe::Empty => &[],
            Probe::Placeholder => std::slice::from_ref(&UNDEFINED),
        }
    }
}

/// The closed set of kinds a value can be classified as.
#[derive(Debug, Clone)]
pub enum Kind {
    /// A plain boolean.
    Boolean(bool),
    /// A function of any arity returning a boolean.
    Predicate(Func),
    /// A function of any arity returning a predicate.
    HigherOrderPredicate(Func),
}

impl Kind {
    /// Human readable name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Boolean(_) => "boolean",
            Kind::Predicate(_) => "predicate",
            Kind::HigherOrderPredicate(_) => "higher-order predicate",
        }
    }

    /// Turn the classified kind back into a value.
    pub fn into_value(self) -> Value {
        match self {
            Kind::Boolean(b) => Value::Bool(b),
            Kind::Predicate(f) | Kind::HigherOrderPredicate(f) => Value::Func(f),
        }
    }
}

/// Classifies values and builds combinators with a configured probe.
///
/// # Example
///
/// ```rust
/// use fp_booleans::{Args, Classifier, Probe, Value};
///
/// let classifier = Classifier::new().with_probe(Probe::Placeholder);
///
/// // Sees one (undefined) argument when probed.
/// let unary = Value::predicate(|args: Args<'_>| args.len() == 1);
/// assert_eq!(classifier.is_predicate(&unary), Ok(true));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classifier {
    probe: Probe,
}

impl Classifier {
    /// A classifier probing with no arguments.
    pub const fn new() -> Self {
        Classifier { probe: Probe::Empty }
    }

    /// Set the arguments used to probe candidate functions.
    pub const fn with_probe(mut self, probe: Probe) -> Self {
        self.probe = probe;
        self
    }

    /// The configured probe.
    pub fn probe(&self) -> Probe {
        self.probe
    }

    fn invoke(&self, f: &Func) -> Result<Value> {
        f.call(self.probe.args()).map_err(|cause| {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %cause, probe = ?self.probe, "probe failed");
            Error::not_resilient(cause)
        })
    }

    /// Returns true if `candidate` is a function returning a boolean when probed.
    ///
    /// Non-functions are never predicates. Fails with
    /// [`Error::NotResilient`] if the probe fails.
    pub fn is_predicate(&self, candidate: &Value) -> Result<bool> {
        match candidate {
            Value::Func(f) => Ok(matches!(self.invoke(f)?, Value::Bool(_))),
            _ => Ok(false),
        }
    }

    /// Returns true if `candidate` is a function returning a predicate when probed.
    ///
    /// The returned value may itself be a higher-order predicate, so curried
    /// chains of any depth qualify. Every level is probed, and a failure at
    /// any of them is reported.
    pub fn is_higher_order_predicate(&self, candidate: &Value) -> Result<bool> {
        match self.classify(candidate) {
            Ok(kind) => Ok(matches!(kind, Kind::HigherOrderPredicate(_))),
            Err(Error::UnhandledKind { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Classify `value`, probing each level of a function at most once.
    ///
    /// A function whose probe returns a predicate or another higher-order
    /// predicate is a higher-order predicate. A function that returns itself
    /// when probed never bottoms out and is not supported.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fp_booleans::{Args, Classifier, Kind, Value};
    ///
    /// let gt = Value::func(|outer: Args<'_>| {
    ///     let bound = outer.int(0);
    ///     Ok(Value::predicate(move |inner: Args<'_>| {
    ///         matches!((inner.int(0), bound), (Some(n), Some(b)) if n > b)
    ///     }))
    /// });
    ///
    /// let kind = Classifier::new().classify(&gt).unwrap();
    /// assert!(matches!(kind, Kind::HigherOrderPredicate(_)));
    /// ```
    pub fn classify(&self, value: &Value) -> Result<Kind> {
        let kind = match value {
            Value::Bool(b) => Kind::Boolean(*b),
            Value::Func(f) => {
                let probed = self.invoke(f)?;
                match probed {
                    Value::Bool(_) => Kind::Predicate(f.clone()),
                    Value::Func(_) => match self.classify(&probed) {
                        Ok(_) => Kind::HigherOrderPredicate(f.clone()),
                        Err(Error::UnhandledKind { .. }) => {
                            return Err(Error::UnhandledKind {
                                found: ValueKind::Function,
                            })
                        }
                        Err(e) => return Err(e),
                    },
                    _ => {
                        return Err(Error::UnhandledKind {
                            found: ValueKind::Function,
                        })
                    }
                }
            }
            other => {
                return Err(Error::UnhandledKind {
                    found: other.kind(),
                })
            }
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(kind = kind.name(), "classified value");

        Ok(kind)
    }
}

/// Returns true if `candidate` is a predicate, probing with no arguments.
///
/// See [`Classifier::is_predicate`].
pub fn is_predicate(candidate: &Value) -> Result<bool> {
    Classifier::default().is_predicate(candidate)
}

/// Returns true if `candidate` is a higher-order predicate, probing with no arguments.
///
/// See [`Classifier::is_higher_order_predicate`].
pub fn is_higher_order_predicate(candidate: &Value) -> Result<bool> {
    Classifier::default().is_higher_order_predicate(candidate)
}

/// Classify `value` with the default classifier.
pub fn classify(value: &Value) -> Result<Kind> {
    Classifier::default().classify(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Args;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn is_even() -> Value {
        Value::predicate(|args| args.int(0).is_some_and(|n| n % 2 == 0))
    }

    fn is() -> Value {
        Value::func(|outer| {
            let c = outer.get(0).clone();
            Ok(Value::predicate(move |inner| inner.get(0) == &c))
        })
    }

    fn fragile() -> Value {
        Value::func(|args: Args<'_>| match args.int(0) {
            Some(n) => Ok(Value::from(n > 0)),
            None => Err(Error::failed("Cannot read properties of undefined")),
        })
    }

    #[test]
    fn test_predicate_classification() {
        assert_eq!(is_predicate(&is_even()), Ok(true));
        assert_eq!(is_higher_order_predicate(&is_even()), Ok(false));
    }

    #[test]
    fn test_higher_order_classification() {
        assert_eq!(is_predicate(&is()), Ok(false));
        assert_eq!(is_higher_order_predicate(&is()), Ok(true));
    }

    #[test]
    fn test_non_functions_are_neither() {
        for value in [
            Value::from(1),
            Value::from("text"),
            Value::Undefined,
            Value::from(true),
        ] {
            assert_eq!(is_predicate(&value), Ok(false));
            assert_eq!(is_higher_order_predicate(&value), Ok(false));
        }
    }

    #[test]
    fn test_fragile_function_raises_in_both_classifiers() {
        let err = is_predicate(&fragile()).unwrap_err();
        assert_eq!(
            err,
            Error::not_resilient(Error::failed("Cannot read properties of undefined"))
        );
        assert!(is_higher_order_predicate(&fragile())
            .unwrap_err()
            .is_not_resilient());
    }

    #[test]
    fn test_fragile_inner_predicate_raises() {
        let curried = Value::func(|_| Ok(fragile()));
        assert!(is_higher_order_predicate(&curried)
            .unwrap_err()
            .is_not_resilient());
        assert!(classify(&curried).unwrap_err().is_not_resilient());
    }

    #[test]
    fn test_classify_boolean() {
        assert!(matches!(
            classify(&Value::from(false)),
            Ok(Kind::Boolean(false))
        ));
    }

    #[test]
    fn test_classify_rejects_other_kinds() {
        assert_eq!(
            classify(&Value::from("x")).unwrap_err(),
            Error::UnhandledKind {
                found: ValueKind::String
            }
        );
        let returns_number = Value::func(|_| Ok(Value::from(3)));
        assert_eq!(
            classify(&returns_number).unwrap_err(),
            Error::UnhandledKind {
                found: ValueKind::Function
            }
        );
    }

    #[test]
    fn test_classify_probes_each_level_once() {
        let outer_calls = Arc::new(AtomicUsize::new(0));
        let inner_calls = Arc::new(AtomicUsize::new(0));
        let (outer, inner) = (outer_calls.clone(), inner_calls.clone());
        let curried = Value::func(move |_| {
            outer.fetch_add(1, Ordering::SeqCst);
            let inner = inner.clone();
            Ok(Value::predicate(move |_| {
                inner.fetch_add(1, Ordering::SeqCst);
                true
            }))
        });

        let kind = classify(&curried).unwrap();
        assert_eq!(kind.name(), "higher-order predicate");
        assert_eq!(outer_calls.load(Ordering::SeqCst), 1);
        assert_eq!(inner_calls.load(Ordering::SeqCst), 1);
    }

    fn between() -> Value {
        Value::func(|lo| {
            let lo = lo.int(0).unwrap_or(0);
            Ok(Value::func(move |hi| {
                let hi = hi.int(0).unwrap_or(0);
                Ok(Value::predicate(move |n| {
                    n.int(0).is_some_and(|n| lo < n && n < hi)
                }))
            }))
        })
    }

    #[test]
    fn test_three_level_curry_is_higher_order() {
        assert!(matches!(
            classify(&between()),
            Ok(Kind::HigherOrderPredicate(_))
        ));
        assert_eq!(is_higher_order_predicate(&between()), Ok(true));
        assert_eq!(is_predicate(&between()), Ok(false));
    }

    #[test]
    fn test_curry_ending_in_non_boolean_is_unhandled() {
        let deep = Value::func(|_| {
            Ok(Value::func(|_| Ok(Value::func(|_| Ok(Value::from("x"))))))
        });
        assert_eq!(
            classify(&deep).unwrap_err(),
            Error::UnhandledKind {
                found: ValueKind::Function
            }
        );
        assert_eq!(is_higher_order_predicate(&deep), Ok(false));
    }

    #[test]
    fn test_fragile_third_level_raises() {
        let deep = Value::func(|_| Ok(Value::func(|_| Ok(fragile()))));
        assert!(classify(&deep).unwrap_err().is_not_resilient());
        assert!(is_higher_order_predicate(&deep)
            .unwrap_err()
            .is_not_resilient());
    }

    #[test]
    fn test_deep_classify_probes_each_level_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (a, b, c) = (calls.clone(), calls.clone(), calls.clone());
        let deep = Value::func(move |_| {
            a.fetch_add(1, Ordering::SeqCst);
            let (b, c) = (b.clone(), c.clone());
            Ok(Value::func(move |_| {
                b.fetch_add(1, Ordering::SeqCst);
                let c = c.clone();
                Ok(Value::predicate(move |_| {
                    c.fetch_add(1, Ordering::SeqCst);
                    false
                }))
            }))
        });
        classify(&deep).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_placeholder_probe_passes_one_undefined_argument() {
        let seen = Value::predicate(|args| args.len() == 1 && args.get(0).is_undefined());
        let classifier = Classifier::new().with_probe(Probe::Placeholder);
        assert_eq!(classifier.probe(), Probe::Placeholder);
        assert_eq!(classifier.is_predicate(&seen), Ok(true));

        let strict = Value::func(|args| {
            if args.is_empty() {
                Ok(Value::from(true))
            } else {
                Ok(Value::from(1))
            }
        });
        assert_eq!(Classifier::new().is_predicate(&strict), Ok(true));
        assert_eq!(classifier.is_predicate(&strict), Ok(false));
    }

    #[test]
    fn test_kind_into_value_round_trips_function_identity() {
        let f = is_even();
        let kind = classify(&f).unwrap();
        assert_eq!(kind.into_value(), f);
    }
}
