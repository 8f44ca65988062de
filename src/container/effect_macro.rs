//! effect! macro for do-notation style sequencing.
//!
//! This module provides the `effect!` macro, which chains computations over
//! [`Option`](super::Option) and [`Result`](super::Result) in an
//! imperative-looking style. Each bind step extracts the contained value;
//! absence or failure short-circuits the whole block structurally, through
//! nested `bind` calls. Nothing is thrown or caught: a panic raised by user
//! code inside the block propagates unchanged.
//!
//! # Syntax
//!
//! - `pattern <= expression;` - bind: extracts the value from the container
//! - `let pattern = expression;` - plain let binding
//! - `expression` - final expression (already a container)
//!
//! # Operator Choice: `<=`
//!
//! `<-` is not a valid token sequence in Rust macro patterns, so the bind
//! arrow is written `<=`, which is a single valid token and visually close.
//!
//! # Examples
//!
//! ```rust
//! use lawful::container::Option;
//! use lawful::effect;
//!
//! let total = effect! {
//!     x <= Option::Some(5);
//!     y <= Option::Some(10);
//!     let doubled = y * 2;
//!     Option::Some(x + doubled)
//! };
//! assert_eq!(total, Option::Some(25));
//! ```

/// A macro for do-notation style sequencing over `Option` and `Result`.
///
/// Each `pattern <= expression;` step expands to a call to the container's
/// `bind` method, so the block is equivalent to an explicit `flat_map`
/// chain and short-circuits on the first absent or failed step.
///
/// # Syntax
///
/// ```text
/// effect! {
///     pattern <= container_expression;   // bind
///     let pattern = expression;          // plain binding
///     container_expression               // final expression
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use lawful::container::Result;
/// use lawful::effect;
///
/// let outcome: Result<&str, i32> = effect! {
///     x <= Result::Okay(5);
///     y <= Result::Okay(10);
///     Result::Okay(x + y)
/// };
/// assert_eq!(outcome, Result::Okay(15));
///
/// let halted: Result<&str, i32> = effect! {
///     x <= Result::Okay(5);
///     y <= Result::<&str, i32>::Fail("missing");
///     Result::Okay(x + y)
/// };
/// assert_eq!(halted, Result::Fail("missing"));
/// ```
#[macro_export]
macro_rules! effect {
    // ==========================================================================
    // Terminal case: a single expression, returned as-is
    // ==========================================================================

    ($result:expr) => {
        $result
    };

    // ==========================================================================
    // Bind: pattern <= container; rest
    // ==========================================================================

    ($pattern:ident <= $container:expr ; $($rest:tt)+) => {
        $container.bind(move |$pattern| {
            $crate::effect!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= $container:expr ; $($rest:tt)+) => {
        $container.bind(move |($($pattern)*)| {
            $crate::effect!($($rest)+)
        })
    };

    (_ <= $container:expr ; $($rest:tt)+) => {
        $container.bind(move |_| {
            $crate::effect!($($rest)+)
        })
    };

    // ==========================================================================
    // Plain binding: let pattern = expression; rest
    // ==========================================================================

    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::effect!($($rest)+)
        }
    };

    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::effect!($($rest)+)
        }
    };
}
