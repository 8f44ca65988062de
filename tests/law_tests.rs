//! Law suites: the algebraic identities the containers and type classes
//! guarantee, checked over generated values.

use lawful::container::{Option, Pair, Result};
use lawful::typeclass::{
    Any, PartialOrder, Semigroup, Setoid, Sum, Text, Timestamp, TotalOrder,
};
use proptest::prelude::*;
use rstest::rstest;

// =============================================================================
// Structural isomorphisms
// =============================================================================

fn nested_pair() -> impl Strategy<Value = Pair<i64, Pair<i64, i64>>> {
    (any::<i64>(), any::<i64>(), any::<i64>())
        .prop_map(|(a, b, c)| Pair::new(a, Pair::new(b, c)))
}

fn nested_result() -> impl Strategy<Value = Result<i64, Result<i64, i64>>> {
    prop_oneof![
        any::<i64>().prop_map(|a| Result::Okay(Result::Okay(a))),
        any::<i64>().prop_map(|f| Result::Okay(Result::Fail(f))),
        any::<i64>().prop_map(Result::Fail),
    ]
}

proptest! {
    #[test]
    fn pair_associate_left_then_right_is_identity(nested in nested_pair()) {
        prop_assert_eq!(nested.associate_left().associate_right(), nested);
    }

    #[test]
    fn pair_associate_right_then_left_is_identity(
        (a, b, c) in (any::<i64>(), any::<i64>(), any::<i64>()),
    ) {
        let nested = Pair::new(Pair::new(a, b), c);
        prop_assert_eq!(nested.associate_right().associate_left(), nested);
    }

    #[test]
    fn result_associate_left_then_right_is_identity(nested in nested_result()) {
        prop_assert_eq!(nested.associate_left().associate_right(), nested);
    }

    #[test]
    fn result_exchange_okay_is_self_inverse(nested in nested_result()) {
        prop_assert_eq!(nested.exchange_okay().exchange_okay(), nested);
    }

    #[test]
    fn result_commute_is_self_inverse(
        outcome in prop_oneof![
            any::<i64>().prop_map(Result::<i64, i64>::Okay),
            any::<i64>().prop_map(Result::<i64, i64>::Fail),
        ],
    ) {
        prop_assert_eq!(outcome.commute().commute(), outcome);
    }

    #[test]
    fn transpose_is_its_own_inverse(
        wrapped in prop_oneof![
            any::<i64>().prop_map(|a| Option::Some(Result::<i64, i64>::Okay(a))),
            any::<i64>().prop_map(|f| Option::Some(Result::<i64, i64>::Fail(f))),
            Just(Option::<Result<i64, i64>>::None),
        ],
    ) {
        prop_assert_eq!(wrapped.transpose().transpose(), wrapped);
    }
}

// =============================================================================
// Order laws
// =============================================================================

fn optional_i64() -> impl Strategy<Value = Option<i64>> {
    prop_oneof![Just(Option::None), any::<i64>().prop_map(Option::Some)]
}

fn optional_bounded_i64() -> impl Strategy<Value = Option<i64>> {
    prop_oneof![
        Just(Option::None),
        (-10_000_i64..10_000).prop_map(Option::Some),
    ]
}

proptest! {
    #[test]
    fn is_same_is_an_equivalence(a: i64, b: i64, c: i64) {
        prop_assert!(a.is_same(&a));
        prop_assert_eq!(a.is_same(&b), b.is_same(&a));
        if a.is_same(&b) && b.is_same(&c) {
            prop_assert!(a.is_same(&c));
        }
    }

    #[test]
    fn strict_predicates_are_irreflexive_and_dual(a: i64, b: i64) {
        prop_assert!(!a.is_less(&a));
        prop_assert!(!a.is_more(&a));
        prop_assert_eq!(a.is_less(&b), b.is_more(&a));
    }

    #[test]
    fn is_less_is_transitive(a: i64, b: i64, c: i64) {
        if a.is_less(&b) && b.is_less(&c) {
            prop_assert!(a.is_less(&c));
        }
    }

    #[test]
    fn compare_agrees_with_the_predicates(a: f64, b: f64) {
        use lawful::typeclass::Ordering;
        match a.compare(&b) {
            Option::Some(Ordering::Less) => prop_assert!(a.is_less(&b)),
            Option::Some(Ordering::Greater) => prop_assert!(a.is_more(&b)),
            Option::Some(Ordering::Equal) => prop_assert!(a.is_same(&b)),
            Option::None => {
                prop_assert!(!a.is_less(&b) && !a.is_more(&b));
            }
        }
    }

    #[test]
    fn clamp_is_max_then_min(value: i64, first: i64, second: i64) {
        let lower = TotalOrder::min(first, second);
        let upper = TotalOrder::max(first, second);
        prop_assert_eq!(
            TotalOrder::clamp(value, lower, upper),
            TotalOrder::min(TotalOrder::max(value, lower), upper)
        );
    }

    #[test]
    fn lifted_option_order_agrees_with_the_payload(a: i64, b: i64) {
        prop_assert_eq!(
            Option::Some(a).is_less(&Option::Some(b)),
            a.is_less(&b)
        );
        prop_assert!(Option::<i64>::None.is_not_more(&Option::Some(a)));
    }

    #[test]
    fn lifted_option_max_treats_absence_as_identity(option in optional_i64()) {
        prop_assert_eq!(TotalOrder::max(option, Option::None), option);
        prop_assert_eq!(TotalOrder::max(Option::None, option), option);
        prop_assert_eq!(TotalOrder::min(option, Option::None), Option::None);
        prop_assert_eq!(TotalOrder::min(Option::None, option), Option::None);
    }
}

// =============================================================================
// Float and timestamp edge semantics
// =============================================================================

#[rstest]
fn signed_zeroes_are_distinct_and_incomparable() {
    assert!(!0.0_f64.is_same(&-0.0));
    assert_eq!(0.0_f64.compare(&-0.0), Option::None);
}

#[rstest]
fn nan_is_self_same_but_incomparable() {
    assert!(f64::NAN.is_same(&f64::NAN));
    assert_eq!(f64::NAN.compare(&1.0), Option::None);
    assert_eq!(1.0_f64.compare(&f64::NAN), Option::None);
}

#[rstest]
fn float_max_and_min_ignore_nan() {
    assert_eq!(TotalOrder::max(f64::NAN, 2.0), 2.0);
    assert_eq!(TotalOrder::max(2.0, f64::NAN), 2.0);
    assert_eq!(TotalOrder::min(f64::NAN, 2.0), 2.0);
}

#[rstest]
fn lifted_option_max_and_min_delegate_to_the_payload() {
    assert_eq!(
        TotalOrder::max(Option::Some(f64::NAN), Option::Some(2.0)),
        Option::Some(2.0)
    );
    assert_eq!(
        TotalOrder::min(Option::Some(2.0), Option::Some(f64::NAN)),
        Option::Some(2.0)
    );
    let absorbed = TotalOrder::max(
        Option::Some(Timestamp::INVALID),
        Option::Some(Timestamp::from_millis(1_000.0)),
    );
    assert!(absorbed.is_some_and(|stamp| !stamp.is_valid()));
}

#[rstest]
fn lifted_result_max_and_min_delegate_and_split_mixed_pairs() {
    assert_eq!(
        TotalOrder::max(Result::<i32, f64>::Okay(f64::NAN), Result::Okay(2.0)),
        Result::Okay(2.0)
    );
    assert_eq!(
        TotalOrder::min(Result::<f64, i32>::Fail(f64::NAN), Result::Fail(2.0)),
        Result::Fail(2.0)
    );
    assert_eq!(
        TotalOrder::min(Result::<i32, i32>::Okay(7), Result::Fail(1)),
        Result::Fail(1)
    );
    assert_eq!(
        TotalOrder::max(Result::<i32, i32>::Fail(1), Result::Okay(7)),
        Result::Okay(7)
    );
}

#[rstest]
fn invalid_timestamps_absorb_max_and_min() {
    let valid = Timestamp::from_millis(1_000.0);
    assert!(!TotalOrder::max(Timestamp::INVALID, valid).is_valid());
    assert!(!TotalOrder::max(valid, Timestamp::INVALID).is_valid());
    assert!(!TotalOrder::min(Timestamp::INVALID, valid).is_valid());
}

#[rstest]
fn timestamps_order_by_epoch_milliseconds() {
    let earlier = Timestamp::from_millis(1_000.0);
    let later = Timestamp::from_millis(2_000.0);
    assert!(earlier.is_less(&later));
    assert_eq!(TotalOrder::max(earlier, later), later);
}

// =============================================================================
// Semigroup associativity
// =============================================================================

proptest! {
    #[test]
    fn sum_and_any_append_are_associative(
        a in -10_000_i64..10_000,
        b in -10_000_i64..10_000,
        c in -10_000_i64..10_000,
        x: bool,
        y: bool,
        z: bool,
    ) {
        prop_assert_eq!(
            Sum::new(a).append(Sum::new(b)).append(Sum::new(c)),
            Sum::new(a).append(Sum::new(b).append(Sum::new(c)))
        );
        prop_assert_eq!(
            Any::new(x).append(Any::new(y)).append(Any::new(z)),
            Any::new(x).append(Any::new(y).append(Any::new(z)))
        );
    }

    #[test]
    fn lifted_option_append_is_associative(
        first in optional_bounded_i64(),
        second in optional_bounded_i64(),
        third in optional_bounded_i64(),
    ) {
        let lift = |option: Option<i64>| option.map(Sum::new);
        let (first, second, third) = (lift(first), lift(second), lift(third));
        prop_assert_eq!(
            first.clone().append(second.clone()).append(third.clone()),
            first.append(second.append(third))
        );
    }
}

#[rstest]
fn reduce_all_concatenates_in_order() {
    let pieces = vec![Text::new("lo"), Text::new("re"), Text::new("m")];
    assert_eq!(Text::reduce_all(pieces), Option::Some(Text::new("lorem")));
    assert_eq!(Text::reduce_all(Vec::new()), Option::None);
}
