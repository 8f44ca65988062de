//! Runtime value guards.
//!
//! Each guard inspects a value against a numeric or textual expectation and
//! returns it unchanged on success, or a
//! [`TypeCheckError`](crate::exception::TypeCheckError) naming the offending
//! value on failure. Guards never panic and never coerce.
//!
//! # Examples
//!
//! ```rust
//! use lawful::check;
//! use lawful::container::Result;
//!
//! assert_eq!(check::natural(3.0), Result::Okay(3.0));
//! assert!(check::natural(-1.0).is_fail());
//! assert!(check::natural(2.5).is_fail());
//! ```

use std::fmt;

use crate::container::Result;
use crate::exception::TypeCheckError;

/// Renders a value for diagnostics.
///
/// Used by the guards to name the offending value inside their error
/// messages.
#[must_use]
pub fn describe<T: fmt::Debug>(value: &T) -> String {
    format!("{value:?}")
}

/// Accepts a finite number; rejects NaN and the infinities.
///
/// # Examples
///
/// ```rust
/// use lawful::check;
/// use lawful::container::Result;
///
/// assert_eq!(check::finite(2.5), Result::Okay(2.5));
/// assert!(check::finite(f64::NAN).is_fail());
/// assert!(check::finite(f64::INFINITY).is_fail());
/// ```
pub fn finite(value: f64) -> Result<TypeCheckError, f64> {
    if value.is_finite() {
        Result::Okay(value)
    } else {
        Result::Fail(TypeCheckError::new(format!(
            "{} is not a finite number",
            describe(&value)
        )))
    }
}

/// Accepts a finite number with no fractional part.
pub fn integer(value: f64) -> Result<TypeCheckError, f64> {
    finite(value).flat_map_okay(|finite_value| {
        if finite_value.fract() == 0.0 {
            Result::Okay(finite_value)
        } else {
            Result::Fail(TypeCheckError::new(format!(
                "{} is not an integer",
                describe(&finite_value)
            )))
        }
    })
}

/// Accepts a non-negative integer.
pub fn natural(value: f64) -> Result<TypeCheckError, f64> {
    integer(value).flat_map_okay(|integer_value| {
        if integer_value >= 0.0 {
            Result::Okay(integer_value)
        } else {
            Result::Fail(TypeCheckError::new(format!(
                "{} is not a natural number",
                describe(&integer_value)
            )))
        }
    })
}

/// Accepts a string holding exactly one character.
///
/// # Examples
///
/// ```rust
/// use lawful::check;
///
/// assert!(check::character("a").is_okay());
/// assert!(check::character("").is_fail());
/// assert!(check::character("ab").is_fail());
/// ```
pub fn character(value: &str) -> Result<TypeCheckError, &str> {
    let mut characters = value.chars();
    match (characters.next(), characters.next()) {
        (Some(_), None) => Result::Okay(value),
        _ => Result::Fail(TypeCheckError::new(format!(
            "{} is not a single character",
            describe(&value)
        ))),
    }
}

/// Applies a guard to every element of a slice.
///
/// Returns the slice unchanged when every element passes; the first failing
/// element's error otherwise.
///
/// # Examples
///
/// ```rust
/// use lawful::check;
///
/// let values = [1.0, 2.0, 3.0];
/// assert!(check::elements(&values, |value| check::natural(*value)).is_okay());
///
/// let tainted = [1.0, -2.0];
/// assert!(check::elements(&tainted, |value| check::natural(*value)).is_fail());
/// ```
pub fn elements<'a, T, U, G>(values: &'a [T], guard: G) -> Result<TypeCheckError, &'a [T]>
where
    G: Fn(&T) -> Result<TypeCheckError, U>,
{
    for value in values {
        if let Result::Fail(error) = guard(value) {
            return Result::Fail(error);
        }
    }
    Result::Okay(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(-2.5)]
    #[case(1e308)]
    fn finite_accepts_finite_numbers(#[case] value: f64) {
        assert_eq!(finite(value), Result::Okay(value));
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn finite_rejects_non_finite_numbers(#[case] value: f64) {
        let outcome = finite(value);
        assert!(outcome.is_fail());
        let message = outcome.fail_to_option().unwrap_value().message().to_owned();
        assert!(message.ends_with("is not a finite number"));
    }

    #[rstest]
    fn integer_rejects_fractional_values() {
        assert_eq!(integer(3.0), Result::Okay(3.0));
        assert_eq!(integer(-7.0), Result::Okay(-7.0));
        assert!(integer(2.5).is_fail());
        assert!(integer(f64::NAN).is_fail());
    }

    #[rstest]
    fn natural_rejects_negatives_and_fractions() {
        assert_eq!(natural(0.0), Result::Okay(0.0));
        assert_eq!(natural(42.0), Result::Okay(42.0));

        let negative = natural(-1.0);
        assert!(negative.is_fail());
        let message = negative.fail_to_option().unwrap_value().message().to_owned();
        assert_eq!(message, "-1.0 is not a natural number");

        assert!(natural(2.5).is_fail());
    }

    #[rstest]
    #[case("a", true)]
    #[case("é", true)]
    #[case("", false)]
    #[case("ab", false)]
    fn character_requires_exactly_one(#[case] input: &str, #[case] accepted: bool) {
        assert_eq!(character(input).is_okay(), accepted);
    }

    #[rstest]
    fn elements_reports_the_first_offender() {
        let values = [1.0, -2.0, -3.0];
        let outcome = elements(&values, |value| natural(*value));
        let message = outcome.fail_to_option().unwrap_value().message().to_owned();
        assert_eq!(message, "-2.0 is not a natural number");
    }

    #[rstest]
    fn elements_accepts_an_empty_slice() {
        let values: [f64; 0] = [];
        assert!(elements(&values, |value| natural(*value)).is_okay());
    }

    #[rstest]
    fn describe_uses_debug_rendering() {
        assert_eq!(describe(&1.5), "1.5");
        assert_eq!(describe(&"text"), "\"text\"");
    }
}
