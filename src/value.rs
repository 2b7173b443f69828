//! Runtime values crossing the untyped boundary
//!
//! A [`Value`] is what a caller hands to [`negate`](fn@crate::negate),
//! [`conjoin`](fn@crate::conjoin) or [`disjoin`](fn@crate::disjoin) when the kind of
//! the argument is only known at runtime. Functions are stored as [`Func`], a
//! shared callable taking an [`Args`] view and returning a `Result<Value>`.
//! A function "throws" by returning `Err`.
//!
//! # Example
//!
//! ```rust
//! use fp_booleans::{Args, Value};
//!
//! // A predicate resilient to missing arguments: `undefined > 0` is false.
//! let is_positive = Value::predicate(|args: Args<'_>| args.int(0).is_some_and(|n| n > 0));
//!
//! assert_eq!(is_positive.test(&[Value::from(3)]), Ok(true));
//! assert_eq!(is_positive.test(&[]), Ok(false));
//! ```

use crate::error::{Error, Result};
use std::fmt;
use std::sync::Arc;

/// Placeholder returned for arguments that were not supplied.
pub(crate) static UNDEFINED: Value = Value::Undefined;

/// Runtime kind of a [`Value`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ValueKind {
    /// An absent argument.
    Undefined,
    /// `true` or `false`.
    Boolean,
    /// A signed integer.
    Integer,
    /// A floating point number.
    Float,
    /// A string.
    String,
    /// A callable.
    Function,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Undefined => "undefined",
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Function => "function",
        };
        f.write_str(name)
    }
}

/// Positional arguments passed to a [`Func`].
///
/// Reading past the end yields [`Value::Undefined`], so a function can be
/// written to tolerate being invoked with fewer arguments than it declares.
#[derive(Debug, Clone, Copy)]
pub struct Args<'a>(&'a [Value]);

impl<'a> Args<'a> {
    /// Wrap a slice of values.
    pub fn new(values: &'a [Value]) -> Self {
        Args(values)
    }

    /// Argument at `index`, or `Undefined` if it was not supplied.
    pub fn get(&self, index: usize) -> &'a Value {
        self.0.get(index).unwrap_or(&UNDEFINED)
    }

    /// Argument at `index` if it is a boolean.
    pub fn bool(&self, index: usize) -> Option<bool> {
        self.get(index).as_bool()
    }

    /// Argument at `index` if it is an integer.
    pub fn int(&self, index: usize) -> Option<i64> {
        self.get(index).as_int()
    }

    /// Argument at `index` as a float, widening integers.
    pub fn float(&self, index: usize) -> Option<f64> {
        match self.get(index) {
            Value::Float(x) => Some(*x),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Argument at `index` if it is a string.
    pub fn str(&self, index: usize) -> Option<&'a str> {
        self.get(index).as_str()
    }

    /// Number of supplied arguments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no argument was supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The supplied arguments.
    pub fn as_slice(&self) -> &'a [Value] {
        self.0
    }
}

type DynFn = dyn Fn(Args<'_>) -> Result<Value> + Send + Sync;

/// A shared, type-erased function of any arity.
#[derive(Clone)]
pub struct Func(Arc<DynFn>);

impl Func {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Args<'_>) -> Result<Value> + Send + Sync + 'static,
    {
        Func(Arc::new(f))
    }

    /// Invoke the function with `args`.
    #[inline]
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        (self.0)(Args::new(args))
    }

    /// Returns true if both handles point to the same function.
    pub fn ptr_eq(&self, other: &Func) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Func({:p})", Arc::as_ptr(&self.0))
    }
}

/// A value whose kind is only known at runtime.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// An absent argument.
    #[default]
    Undefined,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Str(String),
    /// A function.
    Func(Func),
}

impl Value {
    /// Build a function value from a fallible closure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fp_booleans::{Args, Value};
    ///
    /// // A higher-order predicate: is(c) returns a predicate comparing to c.
    /// let is = Value::func(|outer: Args<'_>| {
    ///     let c = outer.get(0).clone();
    ///     Ok(Value::predicate(move |inner: Args<'_>| inner.get(0) == &c))
    /// });
    ///
    /// let is_five = is.call(&[Value::from(5)]).unwrap();
    /// assert_eq!(is_five.test(&[Value::from(5)]), Ok(true));
    /// ```
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(Args<'_>) -> Result<Value> + Send + Sync + 'static,
    {
        Value::Func(Func::new(f))
    }

    /// Build a predicate value from an infallible closure returning `bool`.
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(Args<'_>) -> bool + Send + Sync + 'static,
    {
        Value::func(move |args| Ok(Value::Bool(f(args))))
    }

    /// Runtime kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Undefined => ValueKind::Undefined,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Int(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::String,
            Value::Func(_) => ValueKind::Function,
        }
    }

    /// The boolean, if this is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer, if this is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The string, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The function, if this is one.
    pub fn as_func(&self) -> Option<&Func> {
        match self {
            Value::Func(f) => Some(f),
            _ => None,
        }
    }

    /// Consume the value, returning the function if this is one.
    pub fn into_func(self) -> Option<Func> {
        match self {
            Value::Func(f) => Some(f),
            _ => None,
        }
    }

    /// Returns true if this is [`Value::Undefined`].
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns true if this is a function.
    pub fn is_func(&self) -> bool {
        matches!(self, Value::Func(_))
    }

    /// Invoke this value as a function.
    ///
    /// Fails with [`Error::NotCallable`] if the value is not a function.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        match self {
            Value::Func(f) => f.call(args),
            other => Err(Error::NotCallable {
                found: other.kind(),
            }),
        }
    }

    /// Invoke this value as a predicate, requiring a boolean result.
    ///
    /// Fails with [`Error::NotBoolean`] if the function returns anything else.
    pub fn test(&self, args: &[Value]) -> Result<bool> {
        expect_bool(self.call(args)?)
    }
}

/// Unwrap the boolean returned by a predicate.
pub(crate) fn expect_bool(value: Value) -> Result<bool> {
    value.as_bool().ok_or(Error::NotBoolean {
        found: value.kind(),
    })
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Func(a), Value::Func(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Func> for Value {
    fn from(f: Func) -> Self {
        Value::Func(f)
    }
}
