//! Deferred, memoized computation.
//!
//! [`Thunk`] wraps a computation that runs at most once: the first
//! [`force`](Thunk::force) runs the initializer and caches the result, and
//! every later force returns the cached value. [`Expression`] is the
//! value-or-thunk sum used wherever an API accepts "a value or a deferred
//! computation".
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use lawful::control::Thunk;
//!
//! let runs = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&runs);
//! let thunk = Thunk::new(move || {
//!     counter.set(counter.get() + 1);
//!     42
//! });
//!
//! assert_eq!(runs.get(), 0);
//! assert_eq!(*thunk.force(), 42);
//! assert_eq!(*thunk.force(), 42);
//! assert_eq!(runs.get(), 1);
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;

/// The internal state of a [`Thunk`].
enum ThunkState<A> {
    /// Not forced yet; holds the initializer.
    Pending(Box<dyn FnOnce() -> A>),
    /// Forced; holds the cached result.
    Forced(A),
    /// The initializer panicked; the thunk is unusable.
    Poisoned,
}

/// A memoized deferred computation.
///
/// The initializer runs at most once. If it panics, the thunk becomes
/// poisoned and every later force panics too.
///
/// Not thread-safe; the state lives in a [`RefCell`].
pub struct Thunk<A> {
    state: RefCell<ThunkState<A>>,
}

impl<A> Thunk<A> {
    /// Wraps a computation without running it.
    #[must_use]
    pub fn new<F>(initializer: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self {
            state: RefCell::new(ThunkState::Pending(Box::new(initializer))),
        }
    }

    /// Runs the computation if it has not run yet and returns the result.
    ///
    /// # Panics
    ///
    /// Panics if the initializer panicked on a previous force (the thunk is
    /// poisoned), or re-raises the initializer's panic on the first force.
    pub fn force(&self) -> Ref<'_, A> {
        let needs_forcing = {
            let state = self.state.borrow();
            match &*state {
                ThunkState::Forced(_) => false,
                ThunkState::Poisoned => panic!("thunk has been poisoned"),
                ThunkState::Pending(_) => true,
            }
        };

        if needs_forcing {
            self.run_initializer();
        }

        Ref::map(self.state.borrow(), |state| match state {
            ThunkState::Forced(value) => value,
            _ => unreachable!("thunk forced above"),
        })
    }

    /// Consumes the thunk and returns the value, forcing it if necessary.
    ///
    /// # Panics
    ///
    /// Panics if the thunk is poisoned.
    #[must_use]
    pub fn into_value(self) -> A {
        match self.state.into_inner() {
            ThunkState::Forced(value) => value,
            ThunkState::Pending(initializer) => initializer(),
            ThunkState::Poisoned => panic!("thunk has been poisoned"),
        }
    }

    /// Returns `true` if the computation already ran to completion.
    #[must_use]
    pub fn is_forced(&self) -> bool {
        matches!(&*self.state.borrow(), ThunkState::Forced(_))
    }

    /// Returns `true` if the initializer panicked.
    #[must_use]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), ThunkState::Poisoned)
    }

    // Leaves the state poisoned while the initializer runs, so a panicking
    // initializer cannot be observed as pending again.
    fn run_initializer(&self) {
        let previous = std::mem::replace(&mut *self.state.borrow_mut(), ThunkState::Poisoned);
        match previous {
            ThunkState::Pending(initializer) => {
                // A panic here unwinds with the state already Poisoned.
                let value = initializer();
                *self.state.borrow_mut() = ThunkState::Forced(value);
            }
            settled => *self.state.borrow_mut() = settled,
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for Thunk<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            ThunkState::Forced(value) => formatter.debug_tuple("Thunk").field(value).finish(),
            ThunkState::Pending(_) => formatter.debug_tuple("Thunk").field(&"<thunk>").finish(),
            ThunkState::Poisoned => formatter.debug_tuple("Thunk").field(&"<poisoned>").finish(),
        }
    }
}

// =============================================================================
// Expression
// =============================================================================

/// A plain value or a deferred computation producing one.
///
/// APIs that accept "a value or a computation of it" take
/// `impl Into<Expression<A>>`; plain values convert via [`From`], deferred
/// ones are built with [`Expression::defer`].
///
/// # Examples
///
/// ```rust
/// use lawful::control::Expression;
///
/// let eager = Expression::of(42);
/// let lazy = Expression::defer(|| 40 + 2);
/// assert_eq!(eager.evaluate(), 42);
/// assert_eq!(lazy.evaluate(), 42);
/// ```
#[derive(Debug)]
pub enum Expression<A> {
    /// An already-computed value.
    Value(A),
    /// A deferred computation.
    Defer(Thunk<A>),
}

impl<A> Expression<A> {
    /// Wraps an already-computed value.
    #[inline]
    #[must_use]
    pub const fn of(value: A) -> Self {
        Self::Value(value)
    }

    /// Wraps a computation without running it.
    #[must_use]
    pub fn defer<F>(initializer: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self::Defer(Thunk::new(initializer))
    }

    /// Returns the value, running a deferred computation if necessary.
    #[must_use]
    pub fn evaluate(self) -> A {
        match self {
            Self::Value(value) => value,
            Self::Defer(thunk) => thunk.into_value(),
        }
    }

    /// Returns `true` if no computation is pending.
    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        match self {
            Self::Value(_) => true,
            Self::Defer(thunk) => thunk.is_forced(),
        }
    }
}

impl<A> From<A> for Expression<A> {
    fn from(value: A) -> Self {
        Self::of(value)
    }
}
