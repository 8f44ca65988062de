//! An immutable ordered pair.
//!
//! [`Pair`] is the product counterpart of the sum types in this module. It
//! is the payload of [`Option::and`](super::Option::and) and
//! [`Result::and`](super::Result::and), and the target of
//! [`Option::unzip`](super::Option::unzip).
//!
//! # Examples
//!
//! ```rust
//! use lawful::container::Pair;
//!
//! let pair = Pair::new(1, "one");
//! assert_eq!(pair.first(), &1);
//! assert_eq!(pair.second(), &"one");
//!
//! let swapped = pair.swap();
//! assert_eq!(swapped, Pair::new("one", 1));
//! ```

use std::fmt;

use crate::typeclass::{Ordering, PartialOrder, Semigroup, Setoid, TotalOrder};

use super::Option;

/// An immutable ordered pair of values.
///
/// Both components are fixed at construction; transformation always builds
/// a new pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair<A, B> {
    first: A,
    second: B,
}

impl<A, B> Pair<A, B> {
    /// Creates a pair from two values.
    #[inline]
    #[must_use]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Borrows the first component.
    #[inline]
    pub const fn first(&self) -> &A {
        &self.first
    }

    /// Borrows the second component.
    #[inline]
    pub const fn second(&self) -> &B {
        &self.second
    }

    /// Consumes the pair, returning both components as a tuple.
    #[inline]
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }

    /// Transforms both components at once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::container::Pair;
    ///
    /// let pair = Pair::new(2, "ab");
    /// assert_eq!(
    ///     pair.map(|n| n * 10, str::len),
    ///     Pair::new(20, 2),
    /// );
    /// ```
    #[must_use]
    pub fn map<C, D, F, G>(self, first_morphism: F, second_morphism: G) -> Pair<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        Pair::new(first_morphism(self.first), second_morphism(self.second))
    }

    /// Transforms the first component, leaving the second untouched.
    #[must_use]
    pub fn map_first<C, F>(self, morphism: F) -> Pair<C, B>
    where
        F: FnOnce(A) -> C,
    {
        Pair::new(morphism(self.first), self.second)
    }

    /// Transforms the second component, leaving the first untouched.
    #[must_use]
    pub fn map_second<D, G>(self, morphism: G) -> Pair<A, D>
    where
        G: FnOnce(B) -> D,
    {
        Pair::new(self.first, morphism(self.second))
    }

    /// Exchanges the components.
    ///
    /// Swapping twice restores the original pair.
    #[must_use]
    pub fn swap(self) -> Pair<B, A> {
        Pair::new(self.second, self.first)
    }
}

impl<A: Clone> Pair<A, A> {
    /// Creates a pair holding the same value in both components.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::container::Pair;
    ///
    /// assert_eq!(Pair::of(7), Pair::new(7, 7));
    /// ```
    #[must_use]
    pub fn of(value: A) -> Self {
        Self::new(value.clone(), value)
    }
}

impl<A, B, C> Pair<A, Pair<B, C>> {
    /// Reassociates nesting to the left: `(a, (b, c))` becomes `((a, b), c)`.
    ///
    /// Inverse of [`Pair::associate_right`].
    #[must_use]
    pub fn associate_left(self) -> Pair<Pair<A, B>, C> {
        let (first, inner) = self.into_parts();
        let (second, third) = inner.into_parts();
        Pair::new(Pair::new(first, second), third)
    }
}

impl<A, B, C> Pair<Pair<A, B>, C> {
    /// Reassociates nesting to the right: `((a, b), c)` becomes `(a, (b, c))`.
    ///
    /// Inverse of [`Pair::associate_left`].
    #[must_use]
    pub fn associate_right(self) -> Pair<A, Pair<B, C>> {
        let (inner, third) = self.into_parts();
        let (first, second) = inner.into_parts();
        Pair::new(first, Pair::new(second, third))
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(pair: Pair<A, B>) -> Self {
        pair.into_parts()
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.first, self.second)
    }
}

// =============================================================================
// Typeclass instances
// =============================================================================

/// Component-wise combination.
impl<A: Semigroup, B: Semigroup> Semigroup for Pair<A, B> {
    fn append(self, that: Self) -> Self {
        Self::new(self.first.append(that.first), self.second.append(that.second))
    }
}

impl<A: Setoid, B: Setoid> Setoid for Pair<A, B> {
    fn is_same(&self, that: &Self) -> bool {
        self.first.is_same(&that.first) && self.second.is_same(&that.second)
    }
}

/// Lexicographic: the first components decide unless they are equal.
impl<A: PartialOrder, B: PartialOrder> PartialOrder for Pair<A, B> {
    fn compare(&self, that: &Self) -> Option<Ordering> {
        match self.first.compare(&that.first) {
            Option::Some(Ordering::Equal) => self.second.compare(&that.second),
            decided => decided,
        }
    }
}

impl<A: TotalOrder, B: TotalOrder> TotalOrder for Pair<A, B> {
    fn total_compare(&self, that: &Self) -> Ordering {
        match self.first.total_compare(&that.first) {
            Ordering::Equal => self.second.total_compare(&that.second),
            decided => decided,
        }
    }
}
