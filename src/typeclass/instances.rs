//! Order instances for primitive-like value types.
//!
//! Instances are provided for the integer primitives, `bool`, `char`,
//! `String`/`&str`, the floats, [`Timestamp`], and
//! [`Ordering`](super::Ordering) itself. The source library exposed these
//! as process-wide singleton instance objects; in Rust they become trait
//! impls on the value types.
//!
//! # Float semantics
//!
//! Floats follow the source's bit-identity equality:
//!
//! - `is_same` compares bit patterns, so `0.0` and `-0.0` differ and NaN is
//!   the same as itself (for identical payloads).
//! - `compare` yields an outcome only when bit-identity or a strict
//!   numeric comparison holds; NaN against anything else, and `0.0`
//!   against `-0.0`, are incomparable.
//! - The total order tie-breaks via IEEE 754 `totalOrder`
//!   ([`f64::total_cmp`]), while `max`/`min` keep the IEEE NaN-ignoring
//!   semantics of [`f64::max`]/[`f64::min`].

use std::fmt;

use crate::container::Option;

use super::order::{PartialOrder, Setoid, TotalOrder};
use super::ordering::Ordering;

// =============================================================================
// Integer Primitives
// =============================================================================

macro_rules! total_order_via_ord {
    ($($primitive:ty),+ $(,)?) => {
        $(
            impl Setoid for $primitive {
                #[inline]
                fn is_same(&self, that: &Self) -> bool {
                    self == that
                }
            }

            impl PartialOrder for $primitive {
                #[inline]
                fn compare(&self, that: &Self) -> Option<Ordering> {
                    Option::Some(Ord::cmp(self, that).into())
                }
            }

            impl TotalOrder for $primitive {
                #[inline]
                fn total_compare(&self, that: &Self) -> Ordering {
                    Ord::cmp(self, that).into()
                }
            }
        )+

    };
}

total_order_via_ord!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// =============================================================================
// bool / char
// =============================================================================

impl Setoid for bool {
    #[inline]
    fn is_same(&self, that: &Self) -> bool {
        self == that
    }
}

impl PartialOrder for bool {
    /// `false` is smaller than `true`.
    #[inline]
    fn compare(&self, that: &Self) -> Option<Ordering> {
        Option::Some(Ord::cmp(self, that).into())
    }
}

impl TotalOrder for bool {
    #[inline]
    fn total_compare(&self, that: &Self) -> Ordering {
        Ord::cmp(self, that).into()
    }
}

impl Setoid for char {
    #[inline]
    fn is_same(&self, that: &Self) -> bool {
        self == that
    }
}

impl PartialOrder for char {
    #[inline]
    fn compare(&self, that: &Self) -> Option<Ordering> {
        Option::Some(Ord::cmp(self, that).into())
    }
}

impl TotalOrder for char {
    #[inline]
    fn total_compare(&self, that: &Self) -> Ordering {
        Ord::cmp(self, that).into()
    }
}

// =============================================================================
// Strings
// =============================================================================

impl Setoid for String {
    #[inline]
    fn is_same(&self, that: &Self) -> bool {
        self == that
    }
}

impl PartialOrder for String {
    /// Lexicographic by Unicode scalar value.
    #[inline]
    fn compare(&self, that: &Self) -> Option<Ordering> {
        Option::Some(Ord::cmp(self, that).into())
    }
}

impl TotalOrder for String {
    #[inline]
    fn total_compare(&self, that: &Self) -> Ordering {
        Ord::cmp(self, that).into()
    }
}

impl Setoid for &str {
    #[inline]
    fn is_same(&self, that: &Self) -> bool {
        self == that
    }
}

impl PartialOrder for &str {
    #[inline]
    fn compare(&self, that: &Self) -> Option<Ordering> {
        Option::Some(Ord::cmp(self, that).into())
    }
}

impl TotalOrder for &str {
    #[inline]
    fn total_compare(&self, that: &Self) -> Ordering {
        Ord::cmp(self, that).into()
    }
}

// =============================================================================
// Floats
// =============================================================================

macro_rules! float_order_instances {
    ($($primitive:ident),+ $(,)?) => {
        $(
            impl Setoid for $primitive {
                /// Bit-identity: distinguishes `0.0` from `-0.0`, and NaN is
                /// the same as itself when the payloads match.
                #[inline]
                fn is_same(&self, that: &Self) -> bool {
                    self.to_bits() == that.to_bits()
                }
            }

            impl PartialOrder for $primitive {
                /// Bit-identical values are `Equal`; otherwise a strict
                /// numeric comparison decides. Pairs related by neither
                /// (NaN against anything, `0.0` against `-0.0`) are
                /// incomparable.
                #[inline]
                fn compare(&self, that: &Self) -> Option<Ordering> {
                    if self.is_same(that) {
                        Option::Some(Ordering::Equal)
                    } else if self < that {
                        Option::Some(Ordering::Less)
                    } else if self > that {
                        Option::Some(Ordering::Greater)
                    } else {
                        Option::None
                    }
                }
            }

            impl TotalOrder for $primitive {
                /// IEEE 754 `totalOrder`: NaN sorts to the extremes and
                /// `-0.0` is below `0.0`.
                #[inline]
                fn total_compare(&self, that: &Self) -> Ordering {
                    self.total_cmp(that).into()
                }

                /// IEEE NaN-ignoring maximum: a NaN operand loses to a
                /// number.
                #[inline]
                fn max(self, that: Self) -> Self {
                    $primitive::max(self, that)
                }

                /// IEEE NaN-ignoring minimum.
                #[inline]
                fn min(self, that: Self) -> Self {
                    $primitive::min(self, that)
                }
            }
        )+
    };
}

float_order_instances!(f32, f64);

// =============================================================================
// Timestamp
// =============================================================================

/// A date/time instant as milliseconds since the Unix epoch.
///
/// The invalid instant carries NaN milliseconds and behaves like a NaN
/// float: it is `is_same` as itself, incomparable to everything else in the
/// partial order, and absorbing in `max`/`min` (an invalid operand
/// propagates, mirroring the source's invalid-date handling).
///
/// # Examples
///
/// ```rust
/// use lawful::typeclass::{Setoid, Timestamp, TotalOrder};
///
/// let earlier = Timestamp::from_millis(1_000.0);
/// let later = Timestamp::from_millis(2_000.0);
/// assert!(TotalOrder::max(earlier, later).is_same(&later));
/// assert!(!Timestamp::INVALID.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timestamp(f64);

impl Timestamp {
    /// The invalid instant.
    pub const INVALID: Self = Self(f64::NAN);

    /// Creates an instant from milliseconds since the Unix epoch.
    #[inline]
    #[must_use]
    pub const fn from_millis(milliseconds: f64) -> Self {
        Self(milliseconds)
    }

    /// Returns the milliseconds since the Unix epoch (NaN when invalid).
    #[inline]
    #[must_use]
    pub const fn millis(self) -> f64 {
        self.0
    }

    /// Returns `true` unless this is the invalid instant.
    #[inline]
    #[must_use]
    pub fn is_valid(self) -> bool {
        !self.0.is_nan()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(formatter, "{}ms", self.0)
        } else {
            formatter.write_str("invalid timestamp")
        }
    }
}

impl Setoid for Timestamp {
    #[inline]
    fn is_same(&self, that: &Self) -> bool {
        self.0.is_same(&that.0)
    }
}

impl PartialOrder for Timestamp {
    #[inline]
    fn compare(&self, that: &Self) -> Option<Ordering> {
        self.0.compare(&that.0)
    }
}

impl TotalOrder for Timestamp {
    #[inline]
    fn total_compare(&self, that: &Self) -> Ordering {
        self.0.total_cmp(&that.0).into()
    }

    /// The invalid instant absorbs: `max` with an invalid operand is
    /// invalid.
    #[inline]
    fn max(self, that: Self) -> Self {
        if !self.is_valid() {
            return self;
        }
        if !that.is_valid() {
            return that;
        }
        if self.0 >= that.0 { self } else { that }
    }

    /// The invalid instant absorbs, as with [`max`](Self::max).
    #[inline]
    fn min(self, that: Self) -> Self {
        if !self.is_valid() {
            return self;
        }
        if !that.is_valid() {
            return that;
        }
        if self.0 <= that.0 { self } else { that }
    }
}

// =============================================================================
// Ordering
// =============================================================================

impl Setoid for Ordering {
    #[inline]
    fn is_same(&self, that: &Self) -> bool {
        self == that
    }
}

impl PartialOrder for Ordering {
    /// `Less < Equal < Greater`.
    #[inline]
    fn compare(&self, that: &Self) -> Option<Ordering> {
        Option::Some(Ord::cmp(self, that).into())
    }
}

impl TotalOrder for Ordering {
    #[inline]
    fn total_compare(&self, that: &Self) -> Ordering {
        Ord::cmp(self, that).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Float Edge Semantics
    // =========================================================================

    #[rstest]
    fn zero_signs_are_not_same() {
        assert!(0.0_f64.is_not_same(&-0.0));
        assert!(0.0_f64.is_same(&0.0));
    }

    #[rstest]
    fn nan_is_same_as_itself() {
        assert!(f64::NAN.is_same(&f64::NAN));
    }

    #[rstest]
    fn nan_is_incomparable_to_numbers() {
        assert_eq!(f64::NAN.compare(&1.0), Option::None);
        assert_eq!(1.0_f64.compare(&f64::NAN), Option::None);
    }

    #[rstest]
    fn zero_signs_are_incomparable() {
        assert_eq!(0.0_f64.compare(&-0.0), Option::None);
    }

    #[rstest]
    fn float_max_and_min_ignore_nan() {
        assert!(TotalOrder::max(f64::NAN, 2.0).is_same(&2.0));
        assert!(TotalOrder::min(2.0, f64::NAN).is_same(&2.0));
    }

    #[rstest]
    fn float_total_compare_is_total() {
        assert_eq!(f64::NAN.total_compare(&1.0), Ordering::Greater);
        assert_eq!((-0.0_f64).total_compare(&0.0), Ordering::Less);
    }

    // =========================================================================
    // Timestamp
    // =========================================================================

    #[rstest]
    fn timestamp_orders_by_instant() {
        let earlier = Timestamp::from_millis(1_000.0);
        let later = Timestamp::from_millis(2_000.0);
        assert!(earlier.is_less(&later));
        assert!(TotalOrder::max(earlier, later).is_same(&later));
        assert!(TotalOrder::min(earlier, later).is_same(&earlier));
    }

    #[rstest]
    fn invalid_timestamp_absorbs_max_and_min() {
        let valid = Timestamp::from_millis(1_000.0);
        assert!(!TotalOrder::max(Timestamp::INVALID, valid).is_valid());
        assert!(!TotalOrder::min(valid, Timestamp::INVALID).is_valid());
    }

    #[rstest]
    fn invalid_timestamp_is_incomparable() {
        let valid = Timestamp::from_millis(1_000.0);
        assert_eq!(Timestamp::INVALID.compare(&valid), Option::None);
        assert!(Timestamp::INVALID.is_same(&Timestamp::INVALID));
    }

    // =========================================================================
    // Strings and Ordering
    // =========================================================================

    #[rstest]
    fn string_order_is_lexicographic() {
        let apple = String::from("apple");
        let banana = String::from("banana");
        assert!(apple.is_less(&banana));
        assert_eq!(TotalOrder::max(apple.clone(), banana.clone()), banana);
        assert_eq!(apple.compare(&apple), Option::Some(Ordering::Equal));
    }

    #[rstest]
    fn ordering_orders_itself() {
        // The inherent zero-argument predicates shadow the trait ones here.
        assert!(PartialOrder::is_less(&Ordering::Less, &Ordering::Equal));
        assert!(PartialOrder::is_more(&Ordering::Greater, &Ordering::Equal));
        assert_eq!(
            TotalOrder::clamp(Ordering::Greater, Ordering::Less, Ordering::Equal),
            Ordering::Equal
        );
    }

    #[rstest]
    fn bool_orders_false_below_true() {
        assert!(false.is_less(&true));
        assert!(TotalOrder::max(false, true));
    }
}
