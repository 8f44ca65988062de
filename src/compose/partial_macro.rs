//! The `partial!` macro: fix any grouping of a function's arguments.
//!
//! Rust closures have a fixed arity, so "call `f(a, b, c)` with any grouping
//! of its arguments" is rendered as placeholder-based partial application:
//! `partial!(f, a, __, __)(b, c)`, `partial!(f, a, b, __)(c)`, and
//! `f(a, b, c)` all produce the same value.

/// Partially applies arguments to a function.
///
/// `__` (double underscore) marks an argument that remains a parameter of
/// the produced closure. `__` is matched as a literal token; do not import
/// an item of that name.
///
/// # Syntax
///
/// For a 2-argument function `f(a, b)`:
/// - `partial!(f, value, __)` produces `|b| f(value, b)`
/// - `partial!(f, __, value)` produces `|a| f(a, value)`
/// - `partial!(f, v1, v2)` produces `|| f(v1, v2)` (a thunk)
/// - `partial!(f, __, __)` produces `|a, b| f(a, b)`
///
/// The same patterns cover 3- and 4-argument functions, with every
/// combination of fixed and open positions.
///
/// Fixed values must implement [`Clone`] (the produced closure may be
/// called repeatedly); the function must implement [`Fn`].
///
/// # Examples
///
/// ```rust
/// use lawful::partial;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_five = partial!(add, 5, __);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
///
/// Every grouping of a 3-ary function agrees with the direct call:
///
/// ```rust
/// use lawful::partial;
///
/// fn weigh(value: i32, scale: i32, offset: i32) -> i32 {
///     value * scale + offset
/// }
///
/// assert_eq!(partial!(weigh, 3, __, __)(10, 1), weigh(3, 10, 1));
/// assert_eq!(partial!(weigh, 3, 10, __)(1), weigh(3, 10, 1));
/// assert_eq!(partial!(weigh, 3, 10, 1)(), weigh(3, 10, 1));
/// ```
#[macro_export]
macro_rules! partial {
    // =========================================================================
    // 4-argument functions (most specific patterns first)
    // =========================================================================

    ($function:expr, __, __, __, __ $(,)?) => {{
        let function = $function;
        move |arg1, arg2, arg3, arg4| function(arg1, arg2, arg3, arg4)
    }};

    ($function:expr, $arg1:expr, __, __, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move |arg2, arg3, arg4| function(arg1.clone(), arg2, arg3, arg4)
    }};

    ($function:expr, __, $arg2:expr, __, __ $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        move |arg1, arg3, arg4| function(arg1, arg2.clone(), arg3, arg4)
    }};

    ($function:expr, __, __, $arg3:expr, __ $(,)?) => {{
        let function = $function;
        let arg3 = $arg3;
        move |arg1, arg2, arg4| function(arg1, arg2, arg3.clone(), arg4)
    }};

    ($function:expr, __, __, __, $arg4:expr $(,)?) => {{
        let function = $function;
        let arg4 = $arg4;
        move |arg1, arg2, arg3| function(arg1, arg2, arg3, arg4.clone())
    }};

    ($function:expr, $arg1:expr, $arg2:expr, __, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        move |arg3, arg4| function(arg1.clone(), arg2.clone(), arg3, arg4)
    }};

    ($function:expr, $arg1:expr, __, $arg3:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg3 = $arg3;
        move |arg2, arg4| function(arg1.clone(), arg2, arg3.clone(), arg4)
    }};

    ($function:expr, $arg1:expr, __, __, $arg4:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg4 = $arg4;
        move |arg2, arg3| function(arg1.clone(), arg2, arg3, arg4.clone())
    }};

    ($function:expr, __, $arg2:expr, $arg3:expr, __ $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        let arg3 = $arg3;
        move |arg1, arg4| function(arg1, arg2.clone(), arg3.clone(), arg4)
    }};

    ($function:expr, __, $arg2:expr, __, $arg4:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        let arg4 = $arg4;
        move |arg1, arg3| function(arg1, arg2.clone(), arg3, arg4.clone())
    }};

    ($function:expr, __, __, $arg3:expr, $arg4:expr $(,)?) => {{
        let function = $function;
        let arg3 = $arg3;
        let arg4 = $arg4;
        move |arg1, arg2| function(arg1, arg2, arg3.clone(), arg4.clone())
    }};

    ($function:expr, $arg1:expr, $arg2:expr, $arg3:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        let arg3 = $arg3;
        move |arg4| function(arg1.clone(), arg2.clone(), arg3.clone(), arg4)
    }};

    ($function:expr, $arg1:expr, $arg2:expr, __, $arg4:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        let arg4 = $arg4;
        move |arg3| function(arg1.clone(), arg2.clone(), arg3, arg4.clone())
    }};

    ($function:expr, $arg1:expr, __, $arg3:expr, $arg4:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg3 = $arg3;
        let arg4 = $arg4;
        move |arg2| function(arg1.clone(), arg2, arg3.clone(), arg4.clone())
    }};

    ($function:expr, __, $arg2:expr, $arg3:expr, $arg4:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        let arg3 = $arg3;
        let arg4 = $arg4;
        move |arg1| function(arg1, arg2.clone(), arg3.clone(), arg4.clone())
    }};

    ($function:expr, $arg1:expr, $arg2:expr, $arg3:expr, $arg4:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        let arg3 = $arg3;
        let arg4 = $arg4;
        move || function(arg1.clone(), arg2.clone(), arg3.clone(), arg4.clone())
    }};

    // =========================================================================
    // 3-argument functions
    // =========================================================================

    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |arg1, arg2, arg3| function(arg1, arg2, arg3)
    }};

    ($function:expr, $arg1:expr, __, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move |arg2, arg3| function(arg1.clone(), arg2, arg3)
    }};

    ($function:expr, __, $arg2:expr, __ $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        move |arg1, arg3| function(arg1, arg2.clone(), arg3)
    }};

    ($function:expr, __, __, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg3 = $arg3;
        move |arg1, arg2| function(arg1, arg2, arg3.clone())
    }};

    ($function:expr, $arg1:expr, $arg2:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        move |arg3| function(arg1.clone(), arg2.clone(), arg3)
    }};

    ($function:expr, $arg1:expr, __, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg3 = $arg3;
        move |arg2| function(arg1.clone(), arg2, arg3.clone())
    }};

    ($function:expr, __, $arg2:expr, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        let arg3 = $arg3;
        move |arg1| function(arg1, arg2.clone(), arg3.clone())
    }};

    ($function:expr, $arg1:expr, $arg2:expr, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        let arg3 = $arg3;
        move || function(arg1.clone(), arg2.clone(), arg3.clone())
    }};

    // =========================================================================
    // 2-argument functions (least specific patterns last)
    // =========================================================================

    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |arg1, arg2| function(arg1, arg2)
    }};

    ($function:expr, $arg1:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move |arg2| function(arg1.clone(), arg2)
    }};

    ($function:expr, __, $arg2:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        move |arg1| function(arg1, arg2.clone())
    }};

    ($function:expr, $arg1:expr, $arg2:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        move || function(arg1.clone(), arg2.clone())
    }};
}

#[cfg(test)]
mod tests {
    fn add(first: i32, second: i32) -> i32 {
        first + second
    }

    fn weigh(value: i32, scale: i32, offset: i32) -> i32 {
        value * scale + offset
    }

    #[test]
    fn fixes_the_first_argument() {
        let add_five = partial!(add, 5, __);
        assert_eq!(add_five(3), 8);
        assert_eq!(add_five(10), 15);
    }

    #[test]
    fn fixes_the_second_argument() {
        let add_ten = partial!(add, __, 10);
        assert_eq!(add_ten(5), 15);
    }

    #[test]
    fn fixes_everything_into_a_thunk() {
        let thunk = partial!(add, 3, 5);
        assert_eq!(thunk(), 8);
        assert_eq!(thunk(), 8);
    }

    #[test]
    fn fixes_nothing() {
        let same = partial!(add, __, __);
        assert_eq!(same(3, 5), 8);
    }

    #[test]
    fn every_grouping_of_three_arguments_agrees() {
        let direct = weigh(3, 10, 1);
        assert_eq!(partial!(weigh, __, __, __)(3, 10, 1), direct);
        assert_eq!(partial!(weigh, 3, __, __)(10, 1), direct);
        assert_eq!(partial!(weigh, __, 10, __)(3, 1), direct);
        assert_eq!(partial!(weigh, __, __, 1)(3, 10), direct);
        assert_eq!(partial!(weigh, 3, 10, __)(1), direct);
        assert_eq!(partial!(weigh, 3, __, 1)(10), direct);
        assert_eq!(partial!(weigh, __, 10, 1)(3), direct);
        assert_eq!(partial!(weigh, 3, 10, 1)(), direct);
    }

    #[test]
    fn cloneable_fixed_values_survive_repeated_calls() {
        let prefix = partial!(
            |lead: String, rest: &str| format!("{lead}{rest}"),
            String::from(">> "),
            __
        );
        assert_eq!(prefix("one"), ">> one");
        assert_eq!(prefix("two"), ">> two");
    }

    #[test]
    fn four_argument_groupings_agree() {
        fn sum(a: i32, b: i32, c: i32, d: i32) -> i32 {
            a + b + c + d
        }
        let direct = sum(1, 2, 3, 4);
        assert_eq!(partial!(sum, 1, __, __, __)(2, 3, 4), direct);
        assert_eq!(partial!(sum, 1, 2, __, __)(3, 4), direct);
        assert_eq!(partial!(sum, 1, __, 3, __)(2, 4), direct);
        assert_eq!(partial!(sum, 1, 2, 3, __)(4), direct);
        assert_eq!(partial!(sum, 1, 2, 3, 4)(), direct);
    }
}
