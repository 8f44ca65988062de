//! # lawful
//!
//! A functional programming support library providing law-governed algebraic
//! containers and the type classes that relate them.
//!
//! ## Overview
//!
//! - **Containers**: [`Option`](container::Option) (presence/absence),
//!   [`Result`](container::Result) (success/failure, failure type first),
//!   and [`Pair`](container::Pair), each with a full combinator algebra
//!   whose functor/monad/distributivity laws the test suite verifies.
//! - **Type Classes**: [`Setoid`](typeclass::Setoid),
//!   [`PartialOrder`](typeclass::PartialOrder),
//!   [`TotalOrder`](typeclass::TotalOrder), and
//!   [`Semigroup`](typeclass::Semigroup) with the selection wrappers
//!   `Sum`/`Product`/`Any`/`All`/`Text`.
//! - **Sequencing**: the [`effect!`] do-notation macro over both sum types.
//! - **Evaluation control**: [`Thunk`](control::Thunk) and
//!   [`Expression`](control::Expression) for memoized deferred computation.
//! - **Function shapes**: [`curry2!`] through [`curry5!`] and [`partial!`].
//! - **Guards**: the [`check`] module validates numeric and textual values
//!   at runtime, returning typed errors from [`exception`].
//!
//! ## Example
//!
//! ```rust
//! use lawful::effect;
//! use lawful::prelude::*;
//!
//! let total = effect! {
//!     x <= Option::Some(20);
//!     y <= Option::from_valid(22, |n| *n > 0);
//!     Option::Some(x + y)
//! };
//! assert_eq!(total.safe_extract(0), 42);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers and the type-class traits.
///
/// # Usage
///
/// ```rust
/// use lawful::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::{Option, Pair, Result};
    pub use crate::control::{Expression, Thunk};
    pub use crate::typeclass::{
        Ordering, PartialOrder, Semigroup, Setoid, TotalOrder,
    };
}

pub mod check;
pub mod compose;
pub mod container;
pub mod control;
pub mod exception;
pub mod typeclass;
