//! The three-valued comparison result.
//!
//! [`Ordering`] is the closed outcome of a comparison: a value is less than,
//! equal to, or greater than another. Partial orders report the *absence* of
//! an outcome separately, as `Option::None` from
//! [`PartialOrder::compare`](super::PartialOrder::compare); total orders
//! always produce exactly one `Ordering`.
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::Ordering;
//!
//! let outcome = Ordering::Less;
//! assert!(outcome.is_less());
//! assert!(outcome.is_not_more());
//! assert_eq!(outcome.reverse(), Ordering::Greater);
//! ```

use std::fmt;

/// The outcome of a comparison: less than, equal, or greater than.
///
/// Exactly one value is produced per comparison. The six predicates come in
/// dual pairs: `is_same`/`is_not_same`, `is_less`/`is_not_less`,
/// `is_more`/`is_not_more`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ordering {
    /// The left operand is strictly smaller.
    Less,
    /// The operands are equivalent.
    Equal,
    /// The left operand is strictly larger.
    Greater,
}

impl Ordering {
    /// Returns `true` if the outcome is `Equal`.
    #[inline]
    #[must_use]
    pub const fn is_same(self) -> bool {
        matches!(self, Self::Equal)
    }

    /// Returns `true` if the outcome is `Less` or `Greater`.
    #[inline]
    #[must_use]
    pub const fn is_not_same(self) -> bool {
        !self.is_same()
    }

    /// Returns `true` if the outcome is `Less`.
    #[inline]
    #[must_use]
    pub const fn is_less(self) -> bool {
        matches!(self, Self::Less)
    }

    /// Returns `true` if the outcome is `Equal` or `Greater`.
    #[inline]
    #[must_use]
    pub const fn is_not_less(self) -> bool {
        !self.is_less()
    }

    /// Returns `true` if the outcome is `Greater`.
    #[inline]
    #[must_use]
    pub const fn is_more(self) -> bool {
        matches!(self, Self::Greater)
    }

    /// Returns `true` if the outcome is `Less` or `Equal`.
    #[inline]
    #[must_use]
    pub const fn is_not_more(self) -> bool {
        !self.is_more()
    }

    /// Swaps `Less` and `Greater`, leaving `Equal` in place.
    ///
    /// This is the outcome of comparing the operands in the opposite order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::Ordering;
    ///
    /// assert_eq!(Ordering::Less.reverse(), Ordering::Greater);
    /// assert_eq!(Ordering::Equal.reverse(), Ordering::Equal);
    /// assert_eq!(Ordering::Greater.reverse(), Ordering::Less);
    /// ```
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Less => Self::Greater,
            Self::Equal => Self::Equal,
            Self::Greater => Self::Less,
        }
    }
}

impl fmt::Display for Ordering {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Less => "<",
            Self::Equal => "=",
            Self::Greater => ">",
        };
        formatter.write_str(symbol)
    }
}

impl From<std::cmp::Ordering> for Ordering {
    #[inline]
    fn from(ordering: std::cmp::Ordering) -> Self {
        match ordering {
            std::cmp::Ordering::Less => Self::Less,
            std::cmp::Ordering::Equal => Self::Equal,
            std::cmp::Ordering::Greater => Self::Greater,
        }
    }
}

impl From<Ordering> for std::cmp::Ordering {
    #[inline]
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Ordering::Less, false, true, false)]
    #[case(Ordering::Equal, true, false, false)]
    #[case(Ordering::Greater, false, false, true)]
    fn predicates_partition_the_outcomes(
        #[case] outcome: Ordering,
        #[case] same: bool,
        #[case] less: bool,
        #[case] more: bool,
    ) {
        assert_eq!(outcome.is_same(), same);
        assert_eq!(outcome.is_not_same(), !same);
        assert_eq!(outcome.is_less(), less);
        assert_eq!(outcome.is_not_less(), !less);
        assert_eq!(outcome.is_more(), more);
        assert_eq!(outcome.is_not_more(), !more);
    }

    #[rstest]
    #[case(Ordering::Less, Ordering::Greater)]
    #[case(Ordering::Equal, Ordering::Equal)]
    #[case(Ordering::Greater, Ordering::Less)]
    fn reverse_swaps_strict_outcomes(#[case] outcome: Ordering, #[case] expected: Ordering) {
        assert_eq!(outcome.reverse(), expected);
        // Involution
        assert_eq!(outcome.reverse().reverse(), outcome);
    }

    #[rstest]
    #[case(Ordering::Less, "<")]
    #[case(Ordering::Equal, "=")]
    #[case(Ordering::Greater, ">")]
    fn display_uses_comparison_symbols(#[case] outcome: Ordering, #[case] expected: &str) {
        assert_eq!(format!("{outcome}"), expected);
    }

    #[rstest]
    fn std_conversion_roundtrips() {
        for outcome in [Ordering::Less, Ordering::Equal, Ordering::Greater] {
            let std_ordering: std::cmp::Ordering = outcome.into();
            assert_eq!(Ordering::from(std_ordering), outcome);
        }
    }
}
