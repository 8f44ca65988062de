//! The curry macro family: multi-argument functions as single-argument chains.
//!
//! `curry2!` through `curry5!` turn an n-ary function into nested closures
//! that accept one argument at a time, so any prefix of the arguments can be
//! fixed and the resulting stage reused.
//!
//! The macros share the function and the already-supplied arguments through
//! [`std::rc::Rc`], which keeps every stage callable more than once and
//! works for argument types that are `Clone` but not `Copy`. Each stage
//! implements [`Fn`].

/// Converts a 2-argument function into a curried form.
///
/// Given `f(a, b) -> c`, produces a closure taking `a` that returns a
/// closure taking `b`.
///
/// Argument types up to the last must implement [`Clone`]; the function
/// must implement [`Fn`].
///
/// # Examples
///
/// ```rust
/// use lawful::curry2;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let curried = curry2!(add);
/// assert_eq!(curried(5)(3), 8);
///
/// let add_five = curried(5);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                function(
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                    arg2,
                )
            }
        }
    }};
}

/// Converts a 3-argument function into a curried form.
///
/// # Examples
///
/// ```rust
/// use lawful::curry3;
///
/// fn clamp(value: i32, lower: i32, upper: i32) -> i32 {
///     value.max(lower).min(upper)
/// }
///
/// let curried = curry3!(clamp);
/// assert_eq!(curried(7)(0)(5), 5);
///
/// let clamp_seven = curried(7);
/// assert_eq!(clamp_seven(0)(5), 5);
/// assert_eq!(clamp_seven(0)(10), 7);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg1 = ::std::rc::Rc::clone(&arg1);
                let arg2 = ::std::rc::Rc::new(arg2);
                move |arg3| {
                    function(
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                        arg3,
                    )
                }
            }
        }
    }};
}

/// Converts a 4-argument function into a curried form.
///
/// # Examples
///
/// ```rust
/// use lawful::curry4;
///
/// fn sum_four(a: i32, b: i32, c: i32, d: i32) -> i32 {
///     a + b + c + d
/// }
///
/// let curried = curry4!(sum_four);
/// assert_eq!(curried(1)(2)(3)(4), 10);
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg1 = ::std::rc::Rc::clone(&arg1);
                let arg2 = ::std::rc::Rc::new(arg2);
                move |arg3| {
                    let function = ::std::rc::Rc::clone(&function);
                    let arg1 = ::std::rc::Rc::clone(&arg1);
                    let arg2 = ::std::rc::Rc::clone(&arg2);
                    let arg3 = ::std::rc::Rc::new(arg3);
                    move |arg4| {
                        function(
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg3)),
                            arg4,
                        )
                    }
                }
            }
        }
    }};
}

/// Converts a 5-argument function into a curried form.
///
/// # Examples
///
/// ```rust
/// use lawful::curry5;
///
/// fn sum_five(a: i32, b: i32, c: i32, d: i32, e: i32) -> i32 {
///     a + b + c + d + e
/// }
///
/// let curried = curry5!(sum_five);
/// assert_eq!(curried(1)(2)(3)(4)(5), 15);
/// ```
#[macro_export]
macro_rules! curry5 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg1 = ::std::rc::Rc::clone(&arg1);
                let arg2 = ::std::rc::Rc::new(arg2);
                move |arg3| {
                    let function = ::std::rc::Rc::clone(&function);
                    let arg1 = ::std::rc::Rc::clone(&arg1);
                    let arg2 = ::std::rc::Rc::clone(&arg2);
                    let arg3 = ::std::rc::Rc::new(arg3);
                    move |arg4| {
                        let function = ::std::rc::Rc::clone(&function);
                        let arg1 = ::std::rc::Rc::clone(&arg1);
                        let arg2 = ::std::rc::Rc::clone(&arg2);
                        let arg3 = ::std::rc::Rc::clone(&arg3);
                        let arg4 = ::std::rc::Rc::new(arg4);
                        move |arg5| {
                            function(
                                ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                                ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                                ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg3)),
                                ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg4)),
                                arg5,
                            )
                        }
                    }
                }
            }
        }
    }};
}
