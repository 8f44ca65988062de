//! Typed error hierarchy.
//!
//! Every error in this crate carries a discriminating name tag, a
//! human-readable message, and (where meaningful) a causal chain through
//! [`std::error::Error::source`]. Errors are immutable after construction.
//!
//! Two delivery mechanisms are used, and only these two:
//!
//! - **Data**: recoverable conditions are returned as
//!   `Result<SomeError, _>` values ([`ComparabilityError`],
//!   [`TypeCheckError`]).
//! - **Panic**: programmer errors such as extracting from an absent value
//!   panic with the display text of an [`UnsafeExtractError`].
//!
//! Library code never logs and never swallows an error.

use std::error::Error;
use std::fmt;

/// A named, catchable error.
///
/// The name tag allows catch-site discrimination without downcasting to a
/// concrete type.
///
/// # Examples
///
/// ```rust
/// use lawful::exception::{Exception, UnsafeExtractError};
///
/// let error = UnsafeExtractError::new("missing user id");
/// assert_eq!(error.name(), "UnsafeExtractError");
/// ```
pub trait Exception: Error {
    /// Returns the discriminating name of this error kind.
    fn name(&self) -> &'static str;
}

// =============================================================================
// UnsafeExtractError
// =============================================================================

/// Raised by `unsafe_extract`-style operations on an absent or failed value.
///
/// Carries the caller-supplied message, or a default message when the caller
/// supplied none, and an optional cause.
///
/// # Examples
///
/// ```rust
/// use lawful::exception::UnsafeExtractError;
///
/// let error = UnsafeExtractError::new("boom");
/// assert_eq!(format!("{}", error), "boom");
/// ```
#[derive(Debug)]
pub struct UnsafeExtractError {
    message: String,
    cause: Option<Box<dyn Error + 'static>>,
}

impl UnsafeExtractError {
    /// Creates an error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Attaches a causal error.
    #[must_use]
    pub fn with_cause(mut self, cause: impl Error + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Returns the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for UnsafeExtractError {
    /// The default-typed error used when no explicit message is supplied.
    fn default() -> Self {
        Self::new("unsafe extraction from an absent value")
    }
}

impl fmt::Display for UnsafeExtractError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for UnsafeExtractError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref()
    }
}

impl Exception for UnsafeExtractError {
    fn name(&self) -> &'static str {
        "UnsafeExtractError"
    }
}

// =============================================================================
// ComparabilityError
// =============================================================================

/// Raised when a compare-derived operation meets an incomparable pair.
///
/// `partial_max`, `partial_min`, and `partial_clamp` on a
/// [`PartialOrder`](crate::typeclass::PartialOrder) return this error when
/// `compare` yields no ordering for the operands. Both operands are carried
/// in rendered form for diagnostics.
///
/// # Examples
///
/// ```rust
/// use lawful::exception::ComparabilityError;
///
/// let error = ComparabilityError::new(&f64::NAN, &1.0);
/// assert!(format!("{}", error).contains("NaN"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparabilityError {
    left: String,
    right: String,
}

impl ComparabilityError {
    /// Creates an error carrying both operands.
    #[must_use]
    pub fn new<T: fmt::Debug>(left: &T, right: &T) -> Self {
        Self {
            left: format!("{left:?}"),
            right: format!("{right:?}"),
        }
    }

    /// Returns the rendered left operand.
    #[must_use]
    pub fn left(&self) -> &str {
        &self.left
    }

    /// Returns the rendered right operand.
    #[must_use]
    pub fn right(&self) -> &str {
        &self.right
    }
}

impl fmt::Display for ComparabilityError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} and {} are not comparable",
            self.left, self.right
        )
    }
}

impl Error for ComparabilityError {}

impl Exception for ComparabilityError {
    fn name(&self) -> &'static str {
        "ComparabilityError"
    }
}

// =============================================================================
// TypeCheckError
// =============================================================================

/// Raised by the [`check`](crate::check) guard module for a non-conforming
/// value.
///
/// The message names the offending value in human-readable form together
/// with the expectation it failed, e.g. `"-1.0 is not a natural number"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCheckError {
    message: String,
}

impl TypeCheckError {
    /// Creates an error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for TypeCheckError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for TypeCheckError {}

impl Exception for TypeCheckError {
    fn name(&self) -> &'static str {
        "TypeCheckError"
    }
}

// =============================================================================
// NoneException
// =============================================================================

/// Internal signaling error of the source library's generator-based effect
/// protocol.
///
/// The [`effect!`](crate::effect!) macro short-circuits structurally through
/// `flat_map`, so this crate never raises `NoneException` and it can never
/// escape library code. The type is retained as a named error for catch-site
/// compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoneException;

impl fmt::Display for NoneException {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an absent value was effected")
    }
}

impl Error for NoneException {}

impl Exception for NoneException {
    fn name(&self) -> &'static str {
        "NoneException"
    }
}
