//! An explicit presence/absence container.
//!
//! [`Option`] models a value that may be absent, as a closed sum type:
//! `Some(value)` or `None`. Absence carries no payload; every `None` is
//! interchangeable with every other.
//!
//! This is the crate's own type, not [`std::option::Option`]; it carries the
//! full combinator algebra ([`map`](Option::map), [`flat_map`](Option::flat_map),
//! [`and`](Option::and)/[`or`](Option::or), [`filter`](Option::filter),
//! [`transpose`](Option::transpose), ...) together with lifted
//! [`Semigroup`]/[`TotalOrder`] instances. Conversions to and from the
//! standard type are provided.
//!
//! # Examples
//!
//! ```rust
//! use lawful::container::Option;
//!
//! let name = Option::Some("ada");
//! let shouted = name.map(str::to_uppercase);
//! assert_eq!(shouted, Option::Some(String::from("ADA")));
//!
//! let absent: Option<i32> = Option::None;
//! assert_eq!(absent.safe_extract(0), 0);
//! ```
//!
//! # Laws
//!
//! `map` is a functor (identity, composition), `flat_map` a monad
//! (left/right identity, associativity), `and`/`or` form the usual algebra
//! (`None` annihilates `and` and is the identity of `or`; both are
//! associative and distribute over each other).

use std::fmt;

use crate::exception::UnsafeExtractError;
use crate::typeclass::{Ordering, PartialOrder, Semigroup, Setoid, TotalOrder};

use super::pair::Pair;
use super::result::Result;

/// A value that is either present (`Some`) or absent (`None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Option<A> {
    /// A present value.
    Some(A),
    /// Absence.
    None,
}

impl<A> Option<A> {
    // =========================================================================
    // Observation
    // =========================================================================

    /// Returns `true` if the value is present.
    #[inline]
    #[must_use]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if the value is absent.
    #[inline]
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if the value is present and satisfies the predicate.
    #[must_use]
    pub fn is_some_and<P>(self, predicate: P) -> bool
    where
        P: FnOnce(A) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    /// Returns `true` if the value is absent or satisfies the predicate.
    #[must_use]
    pub fn is_none_or<P>(self, predicate: P) -> bool
    where
        P: FnOnce(A) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => true,
        }
    }

    /// Converts from `&Option<A>` to `Option<&A>`.
    #[inline]
    pub const fn as_ref(&self) -> Option<&A> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None => Option::None,
        }
    }

    // =========================================================================
    // Construction
    // =========================================================================

    /// Keeps `value` only if it satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::container::Option;
    ///
    /// assert_eq!(Option::from_valid(4, |n| n % 2 == 0), Option::Some(4));
    /// assert_eq!(Option::from_valid(3, |n| n % 2 == 0), Option::None);
    /// ```
    pub fn from_valid<P>(value: A, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        if predicate(&value) {
            Self::Some(value)
        } else {
            Self::None
        }
    }

    /// Converts from the standard library's option type.
    #[inline]
    pub fn from_std(value: std::option::Option<A>) -> Self {
        match value {
            std::option::Option::Some(inner) => Self::Some(inner),
            std::option::Option::None => Self::None,
        }
    }

    /// Converts into the standard library's option type.
    #[inline]
    pub fn into_std(self) -> std::option::Option<A> {
        match self {
            Self::Some(value) => std::option::Option::Some(value),
            Self::None => std::option::Option::None,
        }
    }

    // =========================================================================
    // Functor / monad
    // =========================================================================

    /// Transforms a present value, preserving absence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::container::Option;
    ///
    /// assert_eq!(Option::Some(2).map(|n| n * 3), Option::Some(6));
    /// assert_eq!(Option::<i32>::None.map(|n| n * 3), Option::None);
    /// ```
    #[must_use]
    pub fn map<B, F>(self, morphism: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Some(value) => Option::Some(morphism(value)),
            Self::None => Option::None,
        }
    }

    /// Replaces a present value, preserving absence.
    ///
    /// `replace(b)` is `map(|_| b)`.
    #[must_use]
    pub fn replace<B>(self, value: B) -> Option<B> {
        self.map(|_| value)
    }

    /// Sequences a computation that may itself fail to produce a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::container::Option;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Option::Some(n / 2) } else { Option::None };
    /// assert_eq!(Option::Some(8).flat_map(half), Option::Some(4));
    /// assert_eq!(Option::Some(3).flat_map(half), Option::None);
    /// ```
    #[must_use]
    pub fn flat_map<B, F>(self, arrow: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        match self {
            Self::Some(value) => arrow(value),
            Self::None => Option::None,
        }
    }

    /// Alias of [`flat_map`](Self::flat_map); the binding step used by the
    /// [`effect!`](crate::effect!) macro.
    #[must_use]
    pub fn bind<B, F>(self, arrow: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.flat_map(arrow)
    }

    /// Iterates `step` until it produces a final value, threading the
    /// intermediate state through `Fail`.
    ///
    /// `Fail(next)` continues the loop with `next`; `Okay(done)` terminates
    /// with `Option::Some(done)`; `Option::None` at any step terminates with
    /// `Option::None`. The loop is iterative and does not grow the stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::container::{Option, Result};
    ///
    /// let counted = Option::Some(0).flat_map_until(|count| {
    ///     if count < 5 {
    ///         Option::Some(Result::Fail(count + 1))
    ///     } else {
    ///         Option::Some(Result::Okay(count))
    ///     }
    /// });
    /// assert_eq!(counted, Option::Some(5));
    /// ```
    #[must_use]
    pub fn flat_map_until<B, F>(self, mut step: F) -> Option<B>
    where
        F: FnMut(A) -> Option<Result<A, B>>,
    {
        let mut state = match self {
            Self::Some(value) => value,
            Self::None => return Option::None,
        };

        loop {
            match step(state) {
                Option::Some(Result::Fail(next)) => state = next,
                Option::Some(Result::Okay(done)) => return Option::Some(done),
                Option::None => return Option::None,
            }
        }
    }

    // =========================================================================
    // And / or / filter
    // =========================================================================

    /// Pairs two present values; absence on either side annihilates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::container::{Option, Pair};
    ///
    /// assert_eq!(
    ///     Option::Some(1).and(Option::Some("one")),
    ///     Option::Some(Pair::new(1, "one")),
    /// );
    /// assert_eq!(Option::Some(1).and(Option::<&str>::None), Option::None);
    /// ```
    #[must_use]
    pub fn and<B>(self, other: Option<B>) -> Option<Pair<A, B>> {
        self.flat_map(|first| other.map(|second| Pair::new(first, second)))
    }

    /// Like [`and`](Self::and), but keeps only the right value.
    #[must_use]
    pub fn and_then<B>(self, other: Option<B>) -> Option<B> {
        self.and(other).map(Pair::into_parts).map(|(_, second)| second)
    }

    /// Like [`and`](Self::and), but keeps only the left value.
    #[must_use]
    pub fn and_when<B>(self, other: Option<B>) -> Option<A> {
        self.and(other).map(Pair::into_parts).map(|(first, _)| first)
    }

    /// Returns the first present value.
    ///
    /// `None` is the identity; the operation is associative and distributes
    /// over [`and`](Self::and).
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => other,
        }
    }

    /// Keeps a present value only if it satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::container::Option;
    ///
    /// assert_eq!(Option::Some(4).filter(|n| n % 2 == 0), Option::Some(4));
    /// assert_eq!(Option::Some(3).filter(|n| n % 2 == 0), Option::None);
    /// ```
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        self.flat_map(|value| {
            if predicate(&value) {
                Self::Some(value)
            } else {
                Self::None
            }
        })
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the value, or `default` when absent.
    #[must_use]
    pub fn safe_extract(self, default: A) -> A {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the value, or computes a default when absent.
    #[must_use]
    pub fn safe_extract_with<F>(self, default: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Some(value) => value,
            Self::None => default(),
        }
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with `message` (as an [`UnsafeExtractError`]) when the value
    /// is absent.
    #[must_use]
    #[track_caller]
    pub fn unsafe_extract(self, message: &str) -> A {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{}", UnsafeExtractError::new(message)),
        }
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with the default [`UnsafeExtractError`] message when the value
    /// is absent.
    #[must_use]
    #[track_caller]
    pub fn unwrap_value(self) -> A {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{}", UnsafeExtractError::default()),
        }
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts absence into the given failure.
    ///
    /// Round-trips with [`Result::to_option`].
    #[must_use]
    pub fn to_result<E>(self, error: E) -> Result<E, A> {
        match self {
            Self::Some(value) => Result::Okay(value),
            Self::None => Result::Fail(error),
        }
    }

    /// Converts absence into a lazily computed failure.
    #[must_use]
    pub fn to_result_with<E, F>(self, error: F) -> Result<E, A>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Result::Okay(value),
            Self::None => Result::Fail(error()),
        }
    }

    /// Splits a present value into a pair of options.
    ///
    /// Absence splits into a pair of absences.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::container::{Option, Pair};
    ///
    /// let unzipped = Option::Some(3).unzip_with(|n| Pair::new(n, n * n));
    /// assert_eq!(unzipped, Pair::new(Option::Some(3), Option::Some(9)));
    /// ```
    #[must_use]
    pub fn unzip_with<B, C, F>(self, split: F) -> Pair<Option<B>, Option<C>>
    where
        F: FnOnce(A) -> Pair<B, C>,
    {
        match self.map(split) {
            Option::Some(pair) => {
                let (first, second) = pair.into_parts();
                Pair::new(Option::Some(first), Option::Some(second))
            }
            Option::None => Pair::new(Option::None, Option::None),
        }
    }

    /// Exchanges an inner success/failure with the outer presence.
    ///
    /// A present `Fail` becomes an outer `Fail`; absence becomes
    /// `Okay(Option::None)`. Round-trips with [`Result::transpose`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::container::{Option, Result};
    ///
    /// let present: Option<i32> = Option::Some(2);
    /// assert_eq!(
    ///     present.transpose_map(|n| Result::<String, i32>::Okay(n * 2)),
    ///     Result::Okay(Option::Some(4)),
    /// );
    /// ```
    #[must_use]
    pub fn transpose_map<E, B, F>(self, arrow: F) -> Result<E, Option<B>>
    where
        F: FnOnce(A) -> Result<E, B>,
    {
        match self {
            Self::Some(value) => match arrow(value) {
                Result::Okay(okay) => Result::Okay(Option::Some(okay)),
                Result::Fail(fail) => Result::Fail(fail),
            },
            Self::None => Result::Okay(Option::None),
        }
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Iterates over the contained value by reference (zero or one element).
    ///
    /// Each call constructs a fresh iterator.
    pub fn iter(&self) -> Iter<'_, A> {
        Iter {
            remaining: self.as_ref().into_std(),
        }
    }
}

impl<A> Option<Option<A>> {
    /// Collapses one level of nesting.
    ///
    /// `flatten()` is `flat_map(|inner| inner)`.
    #[must_use]
    pub fn flatten(self) -> Option<A> {
        self.flat_map(|inner| inner)
    }
}

impl<A, B> Option<Pair<A, B>> {
    /// Splits a present pair into a pair of options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::container::{Option, Pair};
    ///
    /// let zipped = Option::Some(Pair::new(1, "one"));
    /// assert_eq!(
    ///     zipped.unzip(),
    ///     Pair::new(Option::Some(1), Option::Some("one")),
    /// );
    /// ```
    #[must_use]
    pub fn unzip(self) -> Pair<Option<A>, Option<B>> {
        self.unzip_with(|pair| pair)
    }
}

impl<E, A> Option<Result<E, A>> {
    /// Exchanges an inner success/failure with the outer presence.
    ///
    /// Transposing twice restores the original value.
    #[must_use]
    pub fn transpose(self) -> Result<E, Option<A>> {
        self.transpose_map(|inner| inner)
    }
}

impl<A> Default for Option<A> {
    /// The default is absence.
    fn default() -> Self {
        Self::None
    }
}

impl<A> From<std::option::Option<A>> for Option<A> {
    fn from(value: std::option::Option<A>) -> Self {
        Self::from_std(value)
    }
}

impl<A> From<Option<A>> for std::option::Option<A> {
    fn from(value: Option<A>) -> Self {
        value.into_std()
    }
}

impl<A: fmt::Display> fmt::Display for Option<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// Iteration
// =============================================================================

/// Borrowing iterator over an [`Option`]; yields zero or one element.
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

/// Consuming iterator over an [`Option`]; yields zero or one element.
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

impl<A> IntoIterator for Option<A> {
    type Item = A;
    type IntoIter = IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            remaining: self.into_std(),
        }
    }
}

impl<'a, A> IntoIterator for &'a Option<A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Typeclass instances
// =============================================================================

/// Absence is the identity of `append`.
impl<A: Semigroup> Semigroup for Option<A> {
    fn append(self, that: Self) -> Self {
        match (self, that) {
            (Self::Some(left), Self::Some(right)) => Self::Some(left.append(right)),
            (Self::Some(left), Self::None) => Self::Some(left),
            (Self::None, right) => right,
        }
    }
}

impl<A: Setoid> Setoid for Option<A> {
    fn is_same(&self, that: &Self) -> bool {
        match (self, that) {
            (Self::Some(left), Self::Some(right)) => left.is_same(right),
            (Self::None, Self::None) => true,
            _ => false,
        }
    }
}

/// Absence orders below every present value.
impl<A: PartialOrder> PartialOrder for Option<A> {
    fn compare(&self, that: &Self) -> Option<Ordering> {
        match (self, that) {
            (Self::Some(left), Self::Some(right)) => left.compare(right),
            (Self::None, Self::None) => Option::Some(Ordering::Equal),
            (Self::None, Self::Some(_)) => Option::Some(Ordering::Less),
            (Self::Some(_), Self::None) => Option::Some(Ordering::Greater),
        }
    }
}

/// `max` treats absence as identity; `min` treats it as annihilator.
///
/// `max`/`min` on two present values delegate to the payload's own
/// `max`/`min`, which may refine the outcome of `total_compare` (as the
/// float instances do around NaN).
impl<A: TotalOrder> TotalOrder for Option<A> {
    fn total_compare(&self, that: &Self) -> Ordering {
        match (self, that) {
            (Self::Some(left), Self::Some(right)) => left.total_compare(right),
            (Self::None, Self::None) => Ordering::Equal,
            (Self::None, Self::Some(_)) => Ordering::Less,
            (Self::Some(_), Self::None) => Ordering::Greater,
        }
    }

    fn max(self, that: Self) -> Self {
        match (self, that) {
            (Self::Some(left), Self::Some(right)) => Self::Some(left.max(right)),
            (Self::Some(value), Self::None) | (Self::None, Self::Some(value)) => {
                Self::Some(value)
            }
            (Self::None, Self::None) => Self::None,
        }
    }

    fn min(self, that: Self) -> Self {
        match (self, that) {
            (Self::Some(left), Self::Some(right)) => Self::Some(left.min(right)),
            _ => Self::None,
        }
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn arbitrary_option() -> impl Strategy<Value = Option<i64>> {
        prop_oneof![
            Just(Option::None),
            (-1_000_000_i64..1_000_000).prop_map(Option::Some),
        ]
    }

    proptest! {
        #[test]
        fn prop_functor_identity(option in arbitrary_option()) {
            prop_assert_eq!(option.map(|value| value), option);
        }

        #[test]
        fn prop_functor_composition(option in arbitrary_option()) {
            let increment = |value: i64| value + 1;
            let double = |value: i64| value * 2;
            prop_assert_eq!(
                option.map(increment).map(double),
                option.map(|value| double(increment(value)))
            );
        }

        #[test]
        fn prop_monad_left_identity(value in -1_000_000_i64..1_000_000) {
            let arrow = |value: i64| Option::from_valid(value * 2, |doubled| *doubled >= 0);
            prop_assert_eq!(Option::Some(value).flat_map(arrow), arrow(value));
        }

        #[test]
        fn prop_monad_right_identity(option in arbitrary_option()) {
            prop_assert_eq!(option.flat_map(Option::Some), option);
        }

        #[test]
        fn prop_monad_associativity(option in arbitrary_option()) {
            let first = |value: i64| Option::from_valid(value + 1, |next| next % 3 != 0);
            let second = |value: i64| Option::from_valid(value * 2, |next| next % 5 != 0);
            prop_assert_eq!(
                option.flat_map(first).flat_map(second),
                option.flat_map(|value| first(value).flat_map(second))
            );
        }

        #[test]
        fn prop_or_is_associative_with_none_identity(
            first in arbitrary_option(),
            second in arbitrary_option(),
            third in arbitrary_option(),
        ) {
            prop_assert_eq!(first.or(second).or(third), first.or(second.or(third)));
            prop_assert_eq!(first.or(Option::None), first);
            prop_assert_eq!(Option::None.or(first), first);
        }

        #[test]
        fn prop_and_then_is_associative_with_none_annihilator(
            first in arbitrary_option(),
            second in arbitrary_option(),
            third in arbitrary_option(),
        ) {
            prop_assert_eq!(
                first.and_then(second).and_then(third),
                first.and_then(second.and_then(third))
            );
            prop_assert_eq!(first.and_then(Option::<i64>::None), Option::None);
            prop_assert_eq!(Option::<i64>::None.and_then(first), Option::None);
        }

        #[test]
        fn prop_and_or_distribute(
            first in arbitrary_option(),
            second in arbitrary_option(),
            third in arbitrary_option(),
        ) {
            prop_assert_eq!(
                first.and_then(second.or(third)),
                first.and_then(second).or(first.and_then(third))
            );
            prop_assert_eq!(
                first.or(second).and_then(third),
                first.and_then(third).or(second.and_then(third))
            );
        }

        #[test]
        fn prop_filter_distributes_over_conjunction(option in arbitrary_option()) {
            let even = |value: &i64| value % 2 == 0;
            let positive = |value: &i64| *value > 0;
            prop_assert_eq!(
                option.filter(even).filter(positive),
                option.filter(|value| even(value) && positive(value))
            );
            prop_assert_eq!(option.filter(|_| true), option);
            prop_assert_eq!(option.filter(|_| false), Option::None);
        }

        #[test]
        fn prop_to_result_round_trips(option in arbitrary_option()) {
            prop_assert_eq!(option.to_result("absent").to_option(), option);
        }

        #[test]
        fn prop_lifted_append_associativity(
            first in arbitrary_option(),
            second in arbitrary_option(),
            third in arbitrary_option(),
        ) {
            use crate::typeclass::Sum;
            let lift = |option: Option<i64>| option.map(Sum::new);
            let (first, second, third) = (lift(first), lift(second), lift(third));
            prop_assert_eq!(
                first.clone().append(second.clone()).append(third.clone()),
                first.append(second.append(third))
            );
        }
    }
}
