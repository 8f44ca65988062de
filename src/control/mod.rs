//! Evaluation control: deferred, memoized computation.
//!
//! [`Thunk`] runs an initializer at most once and caches the result;
//! [`Expression`] is the value-or-thunk sum used by APIs that accept either
//! a plain value or a deferred computation of one.

mod thunk;

pub use thunk::{Expression, Thunk};
