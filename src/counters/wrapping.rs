//! Wrap-around bounded counter.
//!
//! This module provides [`WrappingCounter`], which shares the subscription
//! machinery of [`ClampingCounter`](super::clamping::ClampingCounter) but
//! resets to the opposite limit instead of holding.

use std::fmt::{self, Debug};
use std::rc::Weak;

use crate::counters::{Boundary, BoundaryPolicy, BoundedCounter, CounterState};
use crate::listeners::Listener;
use crate::Result;

/// A bounded counter that wraps around: past the ceiling it continues at `0`,
/// below the floor it continues at the upper bound.
///
/// The wrap step is the boundary event. The value is updated first, so
/// listeners observe the post-wrap value.
///
/// # Examples
///
/// ```rust
/// use limiti::counters::wrapping::WrappingCounter;
/// use limiti::counters::BoundedCounter;
///
/// let counter = WrappingCounter::new(9, 9)?;
///
/// counter.increment();
/// assert_eq!(counter.value(), 0);
///
/// counter.decrement();
/// assert_eq!(counter.value(), 9);
/// # Ok::<(), limiti::Error>(())
/// ```
pub struct WrappingCounter {
    state: CounterState,
}

impl WrappingCounter {
    /// Creates a counter holding `initial` in the range `[0, upper]`.
    ///
    /// # Errors
    ///
    /// Same as [`ClampingCounter::new`](super::clamping::ClampingCounter::new).
    pub fn new(initial: i64, upper: i64) -> Result<Self> {
        Ok(Self {
            state: CounterState::new(initial, upper)?,
        })
    }

    /// Sets the name of this counter, returning `self` for method chaining.
    ///
    /// The name is how a shared [`MultiSubscriber`](crate::listeners::MultiSubscriber)
    /// tells its counters apart in a [`Report`](crate::listeners::Report).
    pub fn with_name(self, name: &'static str) -> Self {
        Self {
            state: self.state.with_name(name),
        }
    }
}

impl BoundedCounter for WrappingCounter {
    #[inline]
    fn name(&self) -> &str {
        self.state.name()
    }

    #[inline]
    fn value(&self) -> i64 {
        self.state.value()
    }

    #[inline]
    fn upper_bound(&self) -> i64 {
        self.state.upper()
    }

    /// Returns [`BoundaryPolicy::Wrap`].
    #[inline]
    fn policy(&self) -> BoundaryPolicy {
        BoundaryPolicy::Wrap
    }

    fn increment(&self) {
        let value = self.state.value();
        if value < self.state.upper() {
            self.state.set(value + 1);
        } else {
            self.state.set(0);
            self.state.fire(self, Boundary::Ceiling);
        }
    }

    fn decrement(&self) {
        let value = self.state.value();
        if value > 0 {
            self.state.set(value - 1);
        } else {
            self.state.set(self.state.upper());
            self.state.fire(self, Boundary::Floor);
        }
    }

    fn subscribe(&self, listener: Weak<dyn Listener>) {
        self.state.subscribe(listener);
    }

    fn listener_count(&self) -> usize {
        self.state.listener_count()
    }
}

impl Default for WrappingCounter {
    fn default() -> Self {
        Self {
            state: CounterState::default(),
        }
    }
}

impl Debug for WrappingCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.state.debug_fields(f, "WrappingCounter")
    }
}
