//! Newtype wrappers selecting a semigroup for an underlying type.
//!
//! A number can be combined by addition or by multiplication, a boolean by
//! disjunction or conjunction; the wrapper picks which. Available wrappers:
//!
//! - [`Sum`]: addition.
//! - [`Product`]: multiplication.
//! - [`Any`]: boolean disjunction (`true` wins).
//! - [`All`]: boolean conjunction (`false` wins).
//! - [`Text`]: string concatenation.
//!
//! The [`Semigroup`](super::Semigroup) impls live next to the trait.

use std::fmt;

// =============================================================================
// Sum
// =============================================================================

/// Combines by addition: `Sum(a).append(Sum(b)) == Sum(a + b)`.
///
/// # Examples
///
/// ```rust
/// use lawful::typeclass::{Semigroup, Sum};
///
/// assert_eq!(Sum::new(3).append(Sum::new(5)), Sum::new(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Wraps a value.
    #[inline]
    #[must_use]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Sum<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Product
// =============================================================================

/// Combines by multiplication: `Product(a).append(Product(b)) == Product(a * b)`.
///
/// # Examples
///
/// ```rust
/// use lawful::typeclass::{Product, Semigroup};
///
/// assert_eq!(Product::new(3).append(Product::new(5)), Product::new(15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Wraps a value.
    #[inline]
    #[must_use]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Product<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Any
// =============================================================================

/// Combines booleans by disjunction: any `true` makes the result `true`.
///
/// # Examples
///
/// ```rust
/// use lawful::typeclass::{Any, Semigroup};
///
/// assert_eq!(Any::new(false).append(Any::new(true)), Any::new(true));
/// assert_eq!(Any::new(false).append(Any::new(false)), Any::new(false));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Any(pub bool);

impl Any {
    /// Wraps a boolean.
    #[inline]
    #[must_use]
    pub const fn new(value: bool) -> Self {
        Self(value)
    }

    /// Unwraps the boolean.
    #[inline]
    #[must_use]
    pub const fn into_inner(self) -> bool {
        self.0
    }
}

impl From<bool> for Any {
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// All
// =============================================================================

/// Combines booleans by conjunction: any `false` makes the result `false`.
///
/// # Examples
///
/// ```rust
/// use lawful::typeclass::{All, Semigroup};
///
/// assert_eq!(All::new(true).append(All::new(false)), All::new(false));
/// assert_eq!(All::new(true).append(All::new(true)), All::new(true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct All(pub bool);

impl All {
    /// Wraps a boolean.
    #[inline]
    #[must_use]
    pub const fn new(value: bool) -> Self {
        Self(value)
    }

    /// Unwraps the boolean.
    #[inline]
    #[must_use]
    pub const fn into_inner(self) -> bool {
        self.0
    }
}

impl From<bool> for All {
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Text
// =============================================================================

/// Combines strings by concatenation.
///
/// # Examples
///
/// ```rust
/// use lawful::typeclass::{Semigroup, Text};
///
/// let greeting = Text::new("Hello, ").append(Text::new("World!"));
/// assert_eq!(greeting, Text::new("Hello, World!"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Text(pub String);

impl Text {
    /// Wraps a string.
    #[inline]
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Unwraps the string.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Borrows the string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for Text {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
