//! Function-shape adapters: currying and partial application.
//!
//! The macros live at the crate root ([`curry2!`](crate::curry2) through
//! [`curry5!`](crate::curry5) and [`partial!`](crate::partial)); this module
//! holds their definitions and tests.

mod curry_macro;
mod partial_macro;
