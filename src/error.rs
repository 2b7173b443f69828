//! Error types for classification and combination
//!
//! Every error reflects a broken caller contract: a predicate that cannot be
//! probed without arguments, an argument that is neither a boolean nor a
//! function, or a list of arguments that mixes the two. Nothing here is
//! transient, so nothing is retried.
//!
//! # Example
//!
//! ```rust
//! use fp_booleans::{negate, Error, Value, ValueKind};
//!
//! let err = negate(Value::from(42)).unwrap_err();
//! assert_eq!(err, Error::UnhandledKind { found: ValueKind::Integer });
//! ```

use crate::value::ValueKind;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while classifying, composing or invoking predicates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A candidate failed when invoked without arguments during classification.
    #[error(
        "The argument predicate must be resilient to be invoked without parameters. Original error: {source}"
    )]
    NotResilient {
        /// The failure raised by the candidate.
        source: Box<Error>,
    },

    /// The value is not a boolean and cannot be classified as a predicate or
    /// a higher-order predicate.
    #[error(
        "Argument Error: The argument must be a boolean, a predicate or a higher-order predicate, got {found}"
    )]
    UnhandledKind {
        /// Runtime kind of the offending value.
        found: ValueKind,
    },

    /// A variadic combinator received booleans and functions in the same call.
    #[error("Argument Error: argument {index} is a {found} but the first argument is a {expected}")]
    MixedArguments {
        /// Position of the first argument whose kind differs.
        index: usize,
        /// Kind of the first argument.
        expected: ValueKind,
        /// Kind found at `index`.
        found: ValueKind,
    },

    /// A predicate returned something other than a boolean when invoked.
    #[error("predicate returned a {found} instead of a boolean")]
    NotBoolean {
        /// Runtime kind of the returned value.
        found: ValueKind,
    },

    /// A value that is not a function was invoked.
    #[error("cannot invoke a {found}")]
    NotCallable {
        /// Runtime kind of the invoked value.
        found: ValueKind,
    },

    /// A failure raised by caller code.
    #[error("{0}")]
    Failed(String),
}

impl Error {
    /// Create a failure for a caller-supplied function to return.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fp_booleans::Error;
    ///
    /// let err = Error::failed("Cannot read properties of undefined");
    /// assert_eq!(err.to_string(), "Cannot read properties of undefined");
    /// ```
    pub fn failed(msg: impl Into<String>) -> Self {
        Error::Failed(msg.into())
    }

    /// Wrap a probe failure with the resilience precondition.
    pub fn not_resilient(cause: Error) -> Self {
        Error::NotResilient {
            source: Box::new(cause),
        }
    }

    /// Returns true if this error reports a violated resilience precondition.
    pub fn is_not_resilient(&self) -> bool {
        matches!(self, Error::NotResilient { .. })
    }
}
