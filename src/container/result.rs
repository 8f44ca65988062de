//! An explicit success/failure container.
//!
//! [`Result`] models a computation that either succeeded (`Okay`) or failed
//! (`Fail`). The failure type comes first in the parameter list, mirroring
//! the reading order "a `Result<E, A>` fails with `E` or succeeds with `A`".
//!
//! Failure is represented, never thrown; only
//! [`unsafe_extract`](Result::unsafe_extract) panics, as documented. The
//! combinator set is bifunctorial: [`map`](Result::map) and
//! [`flat_map`](Result::flat_map) take an arrow per side, with the
//! single-sided [`map_okay`](Result::map_okay)/[`map_fail`](Result::map_fail)
//! and [`flat_map_okay`](Result::flat_map_okay)/
//! [`flat_map_fail`](Result::flat_map_fail) as the common projections.
//!
//! # Examples
//!
//! ```rust
//! use lawful::container::Result;
//!
//! fn parse(text: &str) -> Result<String, i32> {
//!     match text.parse() {
//!         Ok(number) => Result::Okay(number),
//!         Err(_) => Result::Fail(format!("{text:?} is not a number")),
//!     }
//! }
//!
//! assert_eq!(parse("42").map_okay(|n| n * 2), Result::Okay(84));
//! assert!(parse("forty-two").is_fail());
//! ```

use std::fmt;

use crate::exception::UnsafeExtractError;
use crate::typeclass::{Ordering, PartialOrder, Semigroup, Setoid, TotalOrder};

use super::option::Option;
use super::pair::Pair;

/// A computation outcome: success with `A` or failure with `E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Result<E, A> {
    /// Success.
    Okay(A),
    /// Failure.
    Fail(E),
}

impl<E, A> Result<E, A> {
    // =========================================================================
    // Observation
    // =========================================================================

    /// Returns `true` on success.
    #[inline]
    #[must_use]
    pub const fn is_okay(&self) -> bool {
        matches!(self, Self::Okay(_))
    }

    /// Returns `true` on failure.
    #[inline]
    #[must_use]
    pub const fn is_fail(&self) -> bool {
        matches!(self, Self::Fail(_))
    }

    /// Converts from `&Result<E, A>` to `Result<&E, &A>`.
    #[inline]
    pub const fn as_ref(&self) -> Result<&E, &A> {
        match self {
            Self::Okay(value) => Result::Okay(value),
            Self::Fail(fail) => Result::Fail(fail),
        }
    }

    // =========================================================================
    // Construction
    // =========================================================================

    /// Converts from the standard library's result type.
    #[inline]
    pub fn from_std(value: std::result::Result<A, E>) -> Self {
        match value {
            Ok(okay) => Self::Okay(okay),
            Err(fail) => Self::Fail(fail),
        }
    }

    /// Converts into the standard library's result type.
    #[inline]
    pub fn into_std(self) -> std::result::Result<A, E> {
        match self {
            Self::Okay(okay) => Ok(okay),
            Self::Fail(fail) => Err(fail),
        }
    }

    // =========================================================================
    // Bifunctor
    // =========================================================================

    /// Transforms whichever side is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::container::Result;
    ///
    /// let okay: Result<String, i32> = Result::Okay(2);
    /// assert_eq!(okay.map(|n| n * 10, |e| e.len()), Result::Okay(20));
    ///
    /// let fail: Result<String, i32> = Result::Fail(String::from("no"));
    /// assert_eq!(fail.map(|n| n * 10, |e| e.len()), Result::Fail(2));
    /// ```
    #[must_use]
    pub fn map<F, B, OkayFn, FailFn>(self, okay_morphism: OkayFn, fail_morphism: FailFn) -> Result<F, B>
    where
        OkayFn: FnOnce(A) -> B,
        FailFn: FnOnce(E) -> F,
    {
        match self {
            Self::Okay(okay) => Result::Okay(okay_morphism(okay)),
            Self::Fail(fail) => Result::Fail(fail_morphism(fail)),
        }
    }

    /// Transforms the success value, passing failures through.
    #[must_use]
    pub fn map_okay<B, OkayFn>(self, morphism: OkayFn) -> Result<E, B>
    where
        OkayFn: FnOnce(A) -> B,
    {
        self.map(morphism, |fail| fail)
    }

    /// Transforms the failure value, passing successes through.
    #[must_use]
    pub fn map_fail<F, FailFn>(self, morphism: FailFn) -> Result<F, A>
    where
        FailFn: FnOnce(E) -> F,
    {
        self.map(|okay| okay, morphism)
    }

    // =========================================================================
    // Monad
    // =========================================================================

    /// Sequences a follow-up computation from whichever side is present.
    ///
    /// Both arrows target the same outcome type, so a failure can recover
    /// and a success can still fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::container::Result;
    ///
    /// let outcome: Result<String, i32> = Result::Fail(String::from("7"));
    /// let recovered = outcome.flat_map(
    ///     |n| Result::Okay(n * 2),
    ///     |text| match text.parse() {
    ///         Ok(n) => Result::Okay(n),
    ///         Err(_) => Result::Fail(text),
    ///     },
    /// );
    /// assert_eq!(recovered, Result::Okay(7));
    /// ```
    #[must_use]
    pub fn flat_map<F, B, OkayArrow, FailArrow>(
        self,
        okay_arrow: OkayArrow,
        fail_arrow: FailArrow,
    ) -> Result<F, B>
    where
        OkayArrow: FnOnce(A) -> Result<F, B>,
        FailArrow: FnOnce(E) -> Result<F, B>,
    {
        match self {
            Self::Okay(okay) => okay_arrow(okay),
            Self::Fail(fail) => fail_arrow(fail),
        }
    }

    /// Sequences a follow-up computation from the success side only.
    #[must_use]
    pub fn flat_map_okay<B, OkayArrow>(self, arrow: OkayArrow) -> Result<E, B>
    where
        OkayArrow: FnOnce(A) -> Result<E, B>,
    {
        match self {
            Self::Okay(okay) => arrow(okay),
            Self::Fail(fail) => Result::Fail(fail),
        }
    }

    /// Sequences a recovery computation from the failure side only.
    #[must_use]
    pub fn flat_map_fail<F, FailArrow>(self, arrow: FailArrow) -> Result<F, A>
    where
        FailArrow: FnOnce(E) -> Result<F, A>,
    {
        match self {
            Self::Okay(okay) => Result::Okay(okay),
            Self::Fail(fail) => arrow(fail),
        }
    }

    /// Alias of [`flat_map_okay`](Self::flat_map_okay); the binding step
    /// used by the [`effect!`](crate::effect!) macro.
    #[must_use]
    pub fn bind<B, OkayArrow>(self, arrow: OkayArrow) -> Result<E, B>
    where
        OkayArrow: FnOnce(A) -> Result<E, B>,
    {
        self.flat_map_okay(arrow)
    }

    /// Iterates `step` until it produces a final value, threading the
    /// intermediate state through the inner `Fail`.
    ///
    /// An inner `Fail(next)` continues the loop with `next`; an inner
    /// `Okay(done)` terminates with `Okay(done)`; an outer `Fail(error)` at
    /// any step terminates with `Fail(error)`. The loop is iterative and
    /// does not grow the stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::container::Result;
    ///
    /// let counted: Result<String, i32> = Result::Okay(0).flat_map_until(|count| {
    ///     if count < 5 {
    ///         Result::Okay(Result::Fail(count + 1))
    ///     } else {
    ///         Result::Okay(Result::Okay(count))
    ///     }
    /// });
    /// assert_eq!(counted, Result::Okay(5));
    /// ```
    #[must_use]
    pub fn flat_map_until<B, Step>(self, mut step: Step) -> Result<E, B>
    where
        Step: FnMut(A) -> Result<E, Result<A, B>>,
    {
        let mut state = match self {
            Self::Okay(okay) => okay,
            Self::Fail(fail) => return Result::Fail(fail),
        };

        loop {
            match step(state) {
                Result::Okay(Result::Fail(next)) => state = next,
                Result::Okay(Result::Okay(done)) => return Result::Okay(done),
                Result::Fail(fail) => return Result::Fail(fail),
            }
        }
    }

    // =========================================================================
    // And / or
    // =========================================================================

    /// Pairs two successes; the first failure short-circuits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::container::{Pair, Result};
    ///
    /// let left: Result<String, i32> = Result::Okay(1);
    /// let right: Result<String, &str> = Result::Okay("one");
    /// assert_eq!(left.and(right), Result::Okay(Pair::new(1, "one")));
    /// ```
    #[must_use]
    pub fn and<B>(self, other: Result<E, B>) -> Result<E, Pair<A, B>> {
        self.flat_map_okay(|first| other.map_okay(|second| Pair::new(first, second)))
    }

    /// Like [`and`](Self::and), but keeps only the right success.
    #[must_use]
    pub fn and_then<B>(self, other: Result<E, B>) -> Result<E, B> {
        self.flat_map_okay(|_| other)
    }

    /// Like [`and`](Self::and), but keeps only the left success.
    #[must_use]
    pub fn and_when<B>(self, other: Result<E, B>) -> Result<E, A> {
        self.and(other)
            .map_okay(Pair::into_parts)
            .map_okay(|(first, _)| first)
    }

    /// Returns the first success; the last failure otherwise.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Okay(okay) => Self::Okay(okay),
            Self::Fail(_) => other,
        }
    }

    /// Returns the first success, or computes an alternative from the
    /// failure.
    #[must_use]
    pub fn or_else<F, Alternative>(self, alternative: Alternative) -> Result<F, A>
    where
        Alternative: FnOnce(E) -> Result<F, A>,
    {
        self.flat_map_fail(alternative)
    }

    // =========================================================================
    // Structural isomorphisms
    // =========================================================================

    /// Swaps the success and failure roles.
    ///
    /// Commuting twice restores the original value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::container::Result;
    ///
    /// let okay: Result<String, i32> = Result::Okay(1);
    /// assert_eq!(okay.commute(), Result::Fail(1));
    /// ```
    #[must_use]
    pub fn commute(self) -> Result<A, E> {
        match self {
            Self::Okay(okay) => Result::Fail(okay),
            Self::Fail(fail) => Result::Okay(fail),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the success value, or `default` on failure.
    #[must_use]
    pub fn safe_extract(self, default: A) -> A {
        match self {
            Self::Okay(okay) => okay,
            Self::Fail(_) => default,
        }
    }

    /// Returns the success value, or computes a default from the failure.
    #[must_use]
    pub fn safe_extract_with<F>(self, default: F) -> A
    where
        F: FnOnce(E) -> A,
    {
        match self {
            Self::Okay(okay) => okay,
            Self::Fail(fail) => default(fail),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with `message` (as an [`UnsafeExtractError`]) on failure.
    #[must_use]
    #[track_caller]
    pub fn unsafe_extract(self, message: &str) -> A {
        match self {
            Self::Okay(okay) => okay,
            Self::Fail(_) => panic!("{}", UnsafeExtractError::new(message)),
        }
    }

    /// Discards the failure, keeping the success as a presence.
    #[must_use]
    pub fn to_option(self) -> Option<A> {
        match self {
            Self::Okay(okay) => Option::Some(okay),
            Self::Fail(_) => Option::None,
        }
    }

    /// Discards the success, keeping the failure as a presence.
    #[must_use]
    pub fn fail_to_option(self) -> Option<E> {
        match self {
            Self::Okay(_) => Option::None,
            Self::Fail(fail) => Option::Some(fail),
        }
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Iterates over the success value by reference (zero or one element).
    pub fn iter(&self) -> Iter<'_, A> {
        Iter {
            remaining: self.as_ref().to_option().into_std(),
        }
    }
}

impl<E: fmt::Debug, A> Result<E, A> {
    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnsafeExtractError`] naming the failure.
    #[must_use]
    #[track_caller]
    pub fn unwrap_value(self) -> A {
        match self {
            Self::Okay(okay) => okay,
            Self::Fail(fail) => panic!(
                "{}",
                UnsafeExtractError::new(format!("unsafe extraction from a failure: {fail:?}"))
            ),
        }
    }
}

impl<A> Result<A, A> {
    /// Collapses both sides into the shared value type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::container::Result;
    ///
    /// assert_eq!(Result::<i32, i32>::Okay(1).merge(), 1);
    /// assert_eq!(Result::<i32, i32>::Fail(2).merge(), 2);
    /// ```
    #[must_use]
    pub fn merge(self) -> A {
        match self {
            Self::Okay(okay) => okay,
            Self::Fail(fail) => fail,
        }
    }
}

impl<E, A> Result<E, Result<E, A>> {
    /// Collapses one level of success-side nesting.
    #[must_use]
    pub fn flatten(self) -> Result<E, A> {
        self.flat_map_okay(|inner| inner)
    }
}

impl<E, F, A> Result<E, Result<F, A>> {
    /// Gathers nested failures to the outer layer:
    /// `Result<E, Result<F, A>>` becomes `Result<Result<E, F>, A>`.
    ///
    /// Inverse of [`Result::associate_right`].
    #[must_use]
    pub fn associate_left(self) -> Result<Result<E, F>, A> {
        match self {
            Self::Okay(Result::Okay(okay)) => Result::Okay(okay),
            Self::Okay(Result::Fail(inner)) => Result::Fail(Result::Okay(inner)),
            Self::Fail(outer) => Result::Fail(Result::Fail(outer)),
        }
    }

    /// Swaps the two failure layers:
    /// `Result<E, Result<F, A>>` becomes `Result<F, Result<E, A>>`.
    ///
    /// Self-inverse.
    #[must_use]
    pub fn exchange_okay(self) -> Result<F, Result<E, A>> {
        match self {
            Self::Okay(Result::Okay(okay)) => Result::Okay(Result::Okay(okay)),
            Self::Okay(Result::Fail(inner)) => Result::Fail(inner),
            Self::Fail(outer) => Result::Okay(Result::Fail(outer)),
        }
    }
}

impl<E, F, A> Result<Result<E, F>, A> {
    /// Pushes an outer failure layer inward:
    /// `Result<Result<E, F>, A>` becomes `Result<E, Result<F, A>>`.
    ///
    /// Inverse of [`Result::associate_left`].
    #[must_use]
    pub fn associate_right(self) -> Result<E, Result<F, A>> {
        match self {
            Self::Okay(okay) => Result::Okay(Result::Okay(okay)),
            Self::Fail(Result::Okay(inner)) => Result::Okay(Result::Fail(inner)),
            Self::Fail(Result::Fail(outer)) => Result::Fail(outer),
        }
    }

    /// Swaps the two success layers:
    /// `Result<Result<E, F>, A>` becomes `Result<Result<E, A>, F>`.
    ///
    /// Self-inverse.
    #[must_use]
    pub fn exchange_fail(self) -> Result<Result<E, A>, F> {
        match self {
            Self::Okay(okay) => Result::Fail(Result::Okay(okay)),
            Self::Fail(Result::Okay(inner)) => Result::Okay(inner),
            Self::Fail(Result::Fail(outer)) => Result::Fail(Result::Fail(outer)),
        }
    }
}

impl<E, A> Result<E, Option<A>> {
    /// Exchanges an inner presence with the outer success/failure.
    ///
    /// `Okay(Option::None)` becomes `Option::None`; a failure stays present.
    /// Round-trips with [`Option::transpose`].
    #[must_use]
    pub fn transpose(self) -> Option<Result<E, A>> {
        self.transpose_map(|inner| inner)
    }
}

impl<E, A> Result<E, A> {
    /// Exchanges the presence produced by `arrow` with the outer
    /// success/failure.
    #[must_use]
    pub fn transpose_map<B, Arrow>(self, arrow: Arrow) -> Option<Result<E, B>>
    where
        Arrow: FnOnce(A) -> Option<B>,
    {
        match self {
            Self::Okay(okay) => match arrow(okay) {
                Option::Some(value) => Option::Some(Result::Okay(value)),
                Option::None => Option::None,
            },
            Self::Fail(fail) => Option::Some(Result::Fail(fail)),
        }
    }
}

impl<E, A> From<std::result::Result<A, E>> for Result<E, A> {
    fn from(value: std::result::Result<A, E>) -> Self {
        Self::from_std(value)
    }
}

impl<E, A> From<Result<E, A>> for std::result::Result<A, E> {
    fn from(value: Result<E, A>) -> Self {
        value.into_std()
    }
}

impl<E: fmt::Display, A: fmt::Display> fmt::Display for Result<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Okay(okay) => write!(formatter, "Okay({okay})"),
            Self::Fail(fail) => write!(formatter, "Fail({fail})"),
        }
    }
}

// =============================================================================
// Iteration
// =============================================================================

/// Borrowing iterator over the success side; yields zero or one element.
#[derive(Debug, Clone)]
pub struct Iter<'a, A> {
    remaining: std::option::Option<&'a A>,
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> std::option::Option<Self::Item> {
        self.remaining.take()
    }

    fn size_hint(&self) -> (usize, std::option::Option<usize>) {
        let length = usize::from(self.remaining.is_some());
        (length, std::option::Option::Some(length))
    }
}

impl<A> ExactSizeIterator for Iter<'_, A> {}

/// Consuming iterator over the success side; yields zero or one element.
#[derive(Debug, Clone)]
pub struct IntoIter<A> {
    remaining: std::option::Option<A>,
}

impl<A> Iterator for IntoIter<A> {
    type Item = A;

    fn next(&mut self) -> std::option::Option<Self::Item> {
        self.remaining.take()
    }

    fn size_hint(&self) -> (usize, std::option::Option<usize>) {
        let length = usize::from(self.remaining.is_some());
        (length, std::option::Option::Some(length))
    }
}

impl<A> ExactSizeIterator for IntoIter<A> {}

impl<E, A> IntoIterator for Result<E, A> {
    type Item = A;
    type IntoIter = IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            remaining: self.to_option().into_std(),
        }
    }
}

impl<'a, E, A> IntoIterator for &'a Result<E, A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Typeclass instances
// =============================================================================

/// Successes combine with successes, failures with failures; a mixed pair
/// keeps the success.
impl<E: Semigroup, A: Semigroup> Semigroup for Result<E, A> {
    fn append(self, that: Self) -> Self {
        match (self, that) {
            (Self::Okay(left), Self::Okay(right)) => Self::Okay(left.append(right)),
            (Self::Fail(left), Self::Fail(right)) => Self::Fail(left.append(right)),
            (Self::Okay(okay), Self::Fail(_)) | (Self::Fail(_), Self::Okay(okay)) => {
                Self::Okay(okay)
            }
        }
    }
}

impl<E: Setoid, A: Setoid> Setoid for Result<E, A> {
    fn is_same(&self, that: &Self) -> bool {
        match (self, that) {
            (Self::Okay(left), Self::Okay(right)) => left.is_same(right),
            (Self::Fail(left), Self::Fail(right)) => left.is_same(right),
            _ => false,
        }
    }
}

/// Every failure orders below every success.
impl<E: PartialOrder, A: PartialOrder> PartialOrder for Result<E, A> {
    fn compare(&self, that: &Self) -> Option<Ordering> {
        match (self, that) {
            (Self::Okay(left), Self::Okay(right)) => left.compare(right),
            (Self::Fail(left), Self::Fail(right)) => left.compare(right),
            (Self::Fail(_), Self::Okay(_)) => Option::Some(Ordering::Less),
            (Self::Okay(_), Self::Fail(_)) => Option::Some(Ordering::Greater),
        }
    }
}

/// `max`/`min` on a matching pair of branches delegate to the payload's own
/// `max`/`min`, which may refine the outcome of `total_compare` (as the
/// float instances do around NaN). A mixed pair keeps the success for `max`
/// and the failure for `min`.
impl<E: TotalOrder, A: TotalOrder> TotalOrder for Result<E, A> {
    fn total_compare(&self, that: &Self) -> Ordering {
        match (self, that) {
            (Self::Okay(left), Self::Okay(right)) => left.total_compare(right),
            (Self::Fail(left), Self::Fail(right)) => left.total_compare(right),
            (Self::Fail(_), Self::Okay(_)) => Ordering::Less,
            (Self::Okay(_), Self::Fail(_)) => Ordering::Greater,
        }
    }

    fn max(self, that: Self) -> Self {
        match (self, that) {
            (Self::Okay(left), Self::Okay(right)) => Self::Okay(left.max(right)),
            (Self::Fail(left), Self::Fail(right)) => Self::Fail(left.max(right)),
            (Self::Okay(okay), Self::Fail(_)) | (Self::Fail(_), Self::Okay(okay)) => {
                Self::Okay(okay)
            }
        }
    }

    fn min(self, that: Self) -> Self {
        match (self, that) {
            (Self::Okay(left), Self::Okay(right)) => Self::Okay(left.min(right)),
            (Self::Fail(left), Self::Fail(right)) => Self::Fail(left.min(right)),
            (Self::Okay(_), Self::Fail(fail)) | (Self::Fail(fail), Self::Okay(_)) => {
                Self::Fail(fail)
            }
        }
    }
}
