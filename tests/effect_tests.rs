//! The effect! macro against explicit bind chains, plus the check guards.

use lawful::container::{Option, Result};
use lawful::exception::TypeCheckError;
use lawful::{check, effect};
use rstest::rstest;

#[rstest]
fn option_blocks_bind_left_to_right() {
    let total = effect! {
        x <= Option::Some(1);
        y <= Option::Some(2);
        z <= Option::Some(3);
        Option::Some(x + y + z)
    };
    assert_eq!(total, Option::Some(6));
}

#[rstest]
fn a_block_matches_its_explicit_expansion() {
    let lookup = |key: &str| match key {
        "a" => Option::Some(1),
        "b" => Option::Some(2),
        _ => Option::None,
    };

    let via_macro = effect! {
        a <= lookup("a");
        b <= lookup("b");
        Option::Some(a + b)
    };
    let via_methods = lookup("a").flat_map(|a| lookup("b").flat_map(move |b| Option::Some(a + b)));
    assert_eq!(via_macro, via_methods);
    assert_eq!(via_macro, Option::Some(3));
}

#[rstest]
fn an_absent_step_stops_the_block() {
    let step_counter = std::cell::Cell::new(0);
    let steps = &step_counter;
    let total: Option<i32> = effect! {
        _ <= Option::Some(1);
        _ <= { steps.set(steps.get() + 1); Option::<i32>::None };
        _ <= { steps.set(steps.get() + 1); Option::Some(2) };
        Option::Some(0)
    };
    assert_eq!(total, Option::None);
    assert_eq!(steps.get(), 1);
}

#[rstest]
fn result_blocks_carry_the_first_failure() {
    let parse = |text: &str| match text.parse::<i32>() {
        Ok(number) => Result::<String, i32>::Okay(number),
        Err(_) => Result::Fail(format!("{text:?} is not a number")),
    };

    let sum = effect! {
        a <= parse("20");
        b <= parse("22");
        Result::Okay(a + b)
    };
    assert_eq!(sum, Result::Okay(42));

    let halted = effect! {
        a <= parse("20");
        b <= parse("twenty-two");
        Result::Okay(a + b)
    };
    assert_eq!(
        halted,
        Result::Fail(String::from("\"twenty-two\" is not a number"))
    );
}

#[rstest]
#[should_panic(expected = "user panic inside the block")]
fn user_panics_propagate_out_of_blocks() {
    let _: Option<i32> = effect! {
        _ <= Option::Some(1);
        panic!("user panic inside the block")
    };
}

// =============================================================================
// Guards inside effect pipelines
// =============================================================================

#[rstest]
fn guards_compose_with_result_blocks() {
    let validated: Result<TypeCheckError, f64> = effect! {
        count <= check::natural(3.0);
        scaled <= check::finite(count * 2.5);
        Result::Okay(scaled)
    };
    assert_eq!(validated, Result::Okay(7.5));

    let rejected: Result<TypeCheckError, f64> = effect! {
        count <= check::natural(-3.0);
        scaled <= check::finite(count * 2.5);
        Result::Okay(scaled)
    };
    assert!(rejected.is_fail());
}

#[rstest]
fn guard_failures_name_the_offending_value() {
    let rejected = check::elements(&[1.0, 2.5], |value| check::integer(*value));
    let message = rejected
        .fail_to_option()
        .map(|error| error.message().to_owned())
        .safe_extract(String::new());
    assert_eq!(message, "2.5 is not an integer");
}
