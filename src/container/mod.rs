//! Algebraic containers: [`Option`], [`Result`], and [`Pair`].
//!
//! The sum types model absence (`Option`) and failure (`Result`) as data;
//! the product type [`Pair`] carries two values and is the payload of the
//! `and` combinators. The [`effect!`](crate::effect!) macro sequences
//! computations over both sum types in do-notation style.
//!
//! # Examples
//!
//! ```rust
//! use lawful::container::{Option, Result};
//!
//! let found = Option::Some(21).map(|n| n * 2);
//! assert_eq!(found, Option::Some(42));
//!
//! let outcome: Result<String, i32> = found.to_result_with(|| String::from("absent"));
//! assert_eq!(outcome, Result::Okay(42));
//! ```

mod effect_macro;
mod option;
mod pair;
mod result;

pub use option::{IntoIter as OptionIntoIter, Iter as OptionIter, Option};
pub use pair::Pair;
pub use result::{IntoIter as ResultIntoIter, Iter as ResultIter, Result};

// The containers must stay freely sendable and copyable value types.
static_assertions::assert_impl_all!(Option<i32>: Send, Sync, Clone, Copy);
static_assertions::assert_impl_all!(Result<String, i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Pair<i32, i32>: Send, Sync, Clone, Copy);
