//! Equality and ordering type classes.
//!
//! Three layered contracts:
//!
//! - [`Setoid`]: an equivalence relation (`is_same`).
//! - [`PartialOrder`]: a strict order in which some pairs may be mutually
//!   incomparable; `compare` reports the absence of an outcome as
//!   `Option::None`.
//! - [`TotalOrder`]: every pair is comparable; adds `max`, `min`, `clamp`.
//!
//! # Laws
//!
//! For all `a`, `b`, `c`:
//!
//! - `is_same` is reflexive, symmetric, and transitive.
//! - `is_less`/`is_more` are irreflexive, transitive, and dual:
//!   `a.is_less(b) == b.is_more(a)`.
//! - `compare` agrees with the predicates: `a.compare(b)` is
//!   `Some(Ordering::Less)` exactly when `a.is_less(b)`, and so on.
//! - For total orders, `a.clamp(lo, hi) == a.max(lo).min(hi)`.
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{PartialOrder, Setoid, TotalOrder};
//!
//! assert!(3_i32.is_less(&5));
//! assert!(5_i32.is_same(&5));
//! assert_eq!(TotalOrder::clamp(7, 0, 5), 5);
//! ```

use std::fmt;

use crate::container::{Option, Result};
use crate::exception::ComparabilityError;

use super::ordering::Ordering;

/// A type with an equivalence relation.
///
/// # Laws
///
/// `is_same` must be reflexive (`a.is_same(&a)`), symmetric
/// (`a.is_same(&b) == b.is_same(&a)`), and transitive. Two equivalent
/// values must behave identically under any observation.
pub trait Setoid {
    /// Returns `true` if the two values are equivalent.
    fn is_same(&self, that: &Self) -> bool;

    /// Returns `true` if the two values are not equivalent.
    #[inline]
    fn is_not_same(&self, that: &Self) -> bool {
        !self.is_same(that)
    }
}

/// A type with a strict order in which some pairs may be incomparable.
///
/// Only [`compare`](Self::compare) is required; the predicates are derived
/// from it and must not be overridden in a way that disagrees with it.
pub trait PartialOrder: Setoid {
    /// Compares two values, or reports that they are incomparable.
    ///
    /// Returns `Option::None` exactly when no ordering relates the
    /// operands (e.g. NaN against any float).
    fn compare(&self, that: &Self) -> Option<Ordering>;

    /// Returns `true` if `self` is strictly smaller than `that`.
    #[inline]
    fn is_less(&self, that: &Self) -> bool {
        matches!(self.compare(that), Option::Some(Ordering::Less))
    }

    /// Returns `true` if `self` is equal to or greater than `that`.
    ///
    /// `false` for incomparable pairs: "not less" requires an actual
    /// ordering outcome, not merely the absence of `Less`.
    #[inline]
    fn is_not_less(&self, that: &Self) -> bool {
        matches!(
            self.compare(that),
            Option::Some(Ordering::Equal | Ordering::Greater)
        )
    }

    /// Returns `true` if `self` is strictly greater than `that`.
    #[inline]
    fn is_more(&self, that: &Self) -> bool {
        matches!(self.compare(that), Option::Some(Ordering::Greater))
    }

    /// Returns `true` if `self` is equal to or smaller than `that`.
    ///
    /// `false` for incomparable pairs.
    #[inline]
    fn is_not_more(&self, that: &Self) -> bool {
        matches!(
            self.compare(that),
            Option::Some(Ordering::Equal | Ordering::Less)
        )
    }

    /// Returns the larger operand, or a [`ComparabilityError`] carrying
    /// both operands when they are incomparable.
    ///
    /// On `Equal` the left operand is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::PartialOrder;
    /// use lawful::container::Result;
    ///
    /// assert_eq!(3.0_f64.partial_max(5.0), Result::Okay(5.0));
    /// assert!(f64::NAN.partial_max(5.0).is_fail());
    /// ```
    fn partial_max(self, that: Self) -> Result<ComparabilityError, Self>
    where
        Self: Sized + fmt::Debug,
    {
        match self.compare(&that) {
            Option::Some(Ordering::Less) => Result::Okay(that),
            Option::Some(Ordering::Equal | Ordering::Greater) => Result::Okay(self),
            Option::None => Result::Fail(ComparabilityError::new(&self, &that)),
        }
    }

    /// Returns the smaller operand, or a [`ComparabilityError`] when the
    /// operands are incomparable.
    ///
    /// On `Equal` the left operand is returned.
    fn partial_min(self, that: Self) -> Result<ComparabilityError, Self>
    where
        Self: Sized + fmt::Debug,
    {
        match self.compare(&that) {
            Option::Some(Ordering::Greater) => Result::Okay(that),
            Option::Some(Ordering::Equal | Ordering::Less) => Result::Okay(self),
            Option::None => Result::Fail(ComparabilityError::new(&self, &that)),
        }
    }

    /// Restricts `self` to the interval `[lower, upper]`, failing on the
    /// first incomparable pair encountered.
    ///
    /// Defined as `self.partial_max(lower)` followed by `partial_min(upper)`.
    fn partial_clamp(self, lower: Self, upper: Self) -> Result<ComparabilityError, Self>
    where
        Self: Sized + fmt::Debug,
    {
        self.partial_max(lower)
            .flat_map_okay(|bounded| bounded.partial_min(upper))
    }
}

/// A type in which every pair of values is comparable.
///
/// [`total_compare`](Self::total_compare) must agree with
/// [`PartialOrder::compare`] whenever the latter produces an outcome, and
/// must supply a total tie-break where it does not (e.g. NaN).
pub trait TotalOrder: PartialOrder {
    /// Compares two values; always produces an outcome.
    fn total_compare(&self, that: &Self) -> Ordering;

    /// Returns the larger operand; the left one on a tie.
    #[must_use]
    fn max(self, that: Self) -> Self
    where
        Self: Sized,
    {
        match self.total_compare(&that) {
            Ordering::Less => that,
            Ordering::Equal | Ordering::Greater => self,
        }
    }

    /// Returns the smaller operand; the left one on a tie.
    #[must_use]
    fn min(self, that: Self) -> Self
    where
        Self: Sized,
    {
        match self.total_compare(&that) {
            Ordering::Greater => that,
            Ordering::Equal | Ordering::Less => self,
        }
    }

    /// Restricts `self` to the interval `[lower, upper]`.
    ///
    /// Equal to `self.max(lower).min(upper)`.
    #[must_use]
    fn clamp(self, lower: Self, upper: Self) -> Self
    where
        Self: Sized,
    {
        self.max(lower).min(upper)
    }
}
