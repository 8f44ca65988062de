//! Semigroup type class - types with an associative binary operation.
//!
//! A type `T` is a semigroup if there is a function `append: (T, T) -> T`
//! that is associative.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.append(b)).append(c) == a.append(b.append(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::Semigroup;
//!
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.append(world), "Hello, World!");
//!
//! let left = vec![1, 2];
//! let right = vec![3, 4];
//! assert_eq!(left.append(right), vec![1, 2, 3, 4]);
//! ```

use crate::container::Option;

use super::wrappers::{All, Any, Product, Sum, Text};

/// A type with an associative binary operation.
///
/// # Laws
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.append(b)).append(c) == a.append(b.append(c))
/// ```
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::Semigroup;
    ///
    /// let result = String::from("foo").append(String::from("bar"));
    /// assert_eq!(result, "foobar");
    /// ```
    #[must_use]
    fn append(self, that: Self) -> Self;

    /// Combines a value with itself `count` times.
    ///
    /// `append_n(x, 1)` is `x`; `append_n(x, 3)` is `x.append(x).append(x)`.
    ///
    /// # Panics
    ///
    /// Panics if `count` is 0.
    #[must_use]
    fn append_n(self, count: usize) -> Self
    where
        Self: Clone,
    {
        assert!(count > 0, "append_n requires count > 0");

        if count == 1 {
            return self;
        }

        let mut accumulated = self.clone();
        for _ in 1..count {
            accumulated = accumulated.append(self.clone());
        }
        accumulated
    }

    /// Reduces an iterator with the semigroup operation.
    ///
    /// Returns `Option::None` for an empty iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::container::Option;
    /// use lawful::typeclass::{Semigroup, Sum};
    ///
    /// let values = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
    /// assert_eq!(Sum::reduce_all(values), Option::Some(Sum::new(6)));
    ///
    /// let empty: Vec<Sum<i32>> = vec![];
    /// assert_eq!(Sum::reduce_all(empty), Option::None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        Option::from_std(
            iterator
                .into_iter()
                .reduce(|accumulated, element| accumulated.append(element)),
        )
    }
}

// =============================================================================
// String / Vec
// =============================================================================

impl Semigroup for String {
    fn append(mut self, that: Self) -> Self {
        self.push_str(&that);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn append(mut self, that: Self) -> Self {
        self.extend(that);
        self
    }
}

// =============================================================================
// Unit / Tuples
// =============================================================================

/// The trivial semigroup.
impl Semigroup for () {
    fn append(self, (): Self) -> Self {}
}

/// Tuples combine component-wise.
impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn append(self, that: Self) -> Self {
        (self.0.append(that.0), self.1.append(that.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn append(self, that: Self) -> Self {
        (
            self.0.append(that.0),
            self.1.append(that.1),
            self.2.append(that.2),
        )
    }
}

// =============================================================================
// Wrappers
// =============================================================================

/// Addition.
impl<A: std::ops::Add<Output = A>> Semigroup for Sum<A> {
    fn append(self, that: Self) -> Self {
        Self(self.0 + that.0)
    }
}

/// Multiplication.
impl<A: std::ops::Mul<Output = A>> Semigroup for Product<A> {
    fn append(self, that: Self) -> Self {
        Self(self.0 * that.0)
    }
}

/// Disjunction.
impl Semigroup for Any {
    fn append(self, that: Self) -> Self {
        Self(self.0 || that.0)
    }
}

/// Conjunction.
impl Semigroup for All {
    fn append(self, that: Self) -> Self {
        Self(self.0 && that.0)
    }
}

/// Concatenation.
impl Semigroup for Text {
    fn append(self, that: Self) -> Self {
        Self(self.0.append(that.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_append_concatenates() {
        let left = String::from("Hello, ");
        let right = String::from("World!");
        assert_eq!(left.append(right), "Hello, World!");
    }

    #[rstest]
    fn vec_append_concatenates() {
        assert_eq!(vec![1, 2].append(vec![3, 4]), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn sum_append_adds() {
        assert_eq!(Sum::new(3).append(Sum::new(5)), Sum::new(8));
    }

    #[rstest]
    fn product_append_multiplies() {
        assert_eq!(Product::new(3).append(Product::new(5)), Product::new(15));
    }

    #[rstest]
    #[case(false, false, false)]
    #[case(false, true, true)]
    #[case(true, false, true)]
    #[case(true, true, true)]
    fn any_append_is_disjunction(#[case] left: bool, #[case] right: bool, #[case] expected: bool) {
        assert_eq!(Any::new(left).append(Any::new(right)), Any::new(expected));
    }

    #[rstest]
    #[case(false, false, false)]
    #[case(false, true, false)]
    #[case(true, false, false)]
    #[case(true, true, true)]
    fn all_append_is_conjunction(#[case] left: bool, #[case] right: bool, #[case] expected: bool) {
        assert_eq!(All::new(left).append(All::new(right)), All::new(expected));
    }

    #[rstest]
    fn text_append_concatenates() {
        assert_eq!(
            Text::new("Hello, ").append(Text::new("World!")),
            Text::new("Hello, World!")
        );
    }

    #[rstest]
    fn tuple_append_is_componentwise() {
        let left = (Sum::new(1), Text::new("a"));
        let right = (Sum::new(2), Text::new("b"));
        assert_eq!(left.append(right), (Sum::new(3), Text::new("ab")));
    }

    #[rstest]
    fn append_n_repeats() {
        assert_eq!(Text::new("ab").append_n(3), Text::new("ababab"));
        assert_eq!(Sum::new(2).append_n(1), Sum::new(2));
    }

    #[rstest]
    #[should_panic(expected = "append_n requires count > 0")]
    fn append_n_zero_panics() {
        let _ = Sum::new(1).append_n(0);
    }

    #[rstest]
    fn reduce_all_empty_is_none() {
        let empty: Vec<Sum<i32>> = vec![];
        assert_eq!(Sum::reduce_all(empty), Option::None);
    }

    #[rstest]
    fn reduce_all_folds_left_to_right() {
        let texts = vec![Text::new("a"), Text::new("b"), Text::new("c")];
        assert_eq!(Text::reduce_all(texts), Option::Some(Text::new("abc")));
    }
}
