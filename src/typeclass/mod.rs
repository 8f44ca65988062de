//! Equality, ordering, and combination type classes.
//!
//! This module provides the comparison stack used by the containers:
//!
//! - [`Ordering`]: the three-valued comparison outcome.
//! - [`Setoid`] / [`PartialOrder`] / [`TotalOrder`]: layered equality and
//!   ordering contracts, with instances for the primitive-like value types
//!   (integers, floats, `bool`, `char`, strings, [`Timestamp`]).
//! - [`Semigroup`]: associative combination, with the selection wrappers
//!   [`Sum`], [`Product`], [`Any`], [`All`], and [`Text`].
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{Semigroup, Setoid, Sum, TotalOrder};
//!
//! assert!(2_i32.is_same(&2));
//! assert_eq!(TotalOrder::max(2_i32, 5), 5);
//! assert_eq!(Sum::new(2).append(Sum::new(5)), Sum::new(7));
//! ```

mod instances;
mod order;
mod ordering;
mod semigroup;
mod wrappers;

pub use instances::Timestamp;
pub use order::{PartialOrder, Setoid, TotalOrder};
pub use ordering::Ordering;
pub use semigroup::Semigroup;
pub use wrappers::{All, Any, Product, Sum, Text};
