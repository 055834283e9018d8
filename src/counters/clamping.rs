//! Saturating bounded counter.
//!
//! This module provides [`ClampingCounter`], a counter that holds at its
//! limit and notifies its listeners whenever a step would cross it.

use std::fmt::{self, Debug};
use std::rc::Weak;

use crate::counters::{Boundary, BoundaryPolicy, BoundedCounter, CounterState};
use crate::listeners::Listener;
use crate::Result;

/// A bounded counter that saturates at `0` and at its upper bound.
///
/// Reaching a limit is a normal event, not an error: the step that would have
/// crossed the limit leaves the value where it is and notifies every listener
/// instead.
///
/// # Examples
///
/// ```rust
/// use limiti::counters::clamping::ClampingCounter;
/// use limiti::counters::BoundedCounter;
///
/// let counter = ClampingCounter::new(5, 9)?.with_name("volume");
///
/// for _ in 0..4 {
///     counter.increment();
/// }
/// assert_eq!(counter.value(), 9);
///
/// // Already at the ceiling: the value holds and listeners are notified.
/// counter.increment();
/// assert_eq!(counter.value(), 9);
///
/// counter.decrement();
/// assert_eq!(counter.value(), 8);
/// # Ok::<(), limiti::Error>(())
/// ```
pub struct ClampingCounter {
    state: CounterState,
}

impl ClampingCounter {
    /// Creates a counter holding `initial` in the range `[0, upper]`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NegativeUpperBound`](crate::Error::NegativeUpperBound)
    /// if `upper < 0`, and with
    /// [`Error::InitialOutOfRange`](crate::Error::InitialOutOfRange) if
    /// `initial` is outside the range.
    pub fn new(initial: i64, upper: i64) -> Result<Self> {
        Ok(Self {
            state: CounterState::new(initial, upper)?,
        })
    }

    /// Sets the name of this counter, returning `self` for method chaining.
    ///
    /// The name is how a shared [`MultiSubscriber`](crate::listeners::MultiSubscriber)
    /// tells its counters apart in a [`Report`](crate::listeners::Report).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use limiti::counters::clamping::ClampingCounter;
    /// use limiti::counters::BoundedCounter;
    ///
    /// let counter = ClampingCounter::new(0, 5)?.with_name("retries");
    /// assert_eq!(counter.name(), "retries");
    /// # Ok::<(), limiti::Error>(())
    /// ```
    pub fn with_name(self, name: &'static str) -> Self {
        Self {
            state: self.state.with_name(name),
        }
    }
}

impl BoundedCounter for ClampingCounter {
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

    /// Returns [`BoundaryPolicy::Clamp`].
    #[inline]
    fn policy(&self) -> BoundaryPolicy {
        BoundaryPolicy::Clamp
    }

    fn increment(&self) {
        let value = self.state.value();
        if value < self.state.upper() {
            self.state.set(value + 1);
        } else {
            self.state.fire(self, Boundary::Ceiling);
        }
    }

    fn decrement(&self) {
        let value = self.state.value();
        if value > 0 {
            self.state.set(value - 1);
        } else {
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

impl Default for ClampingCounter {
    /// Creates an unnamed counter with value and upper bound both zero.
    fn default() -> Self {
        Self {
            state: CounterState::default(),
        }
    }
}

impl Debug for ClampingCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.state.debug_fields(f, "ClampingCounter")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listeners::MultiSubscriber;
    use crate::Error;
    use std::cell::Cell;
    use std::rc::Rc;

    fn hit_counter(counter: &ClampingCounter) -> (Rc<Cell<usize>>, Rc<dyn Listener>) {
        let hits = Rc::new(Cell::new(0));
        let listener: Rc<dyn Listener> = {
            let hits = Rc::clone(&hits);
            Rc::new(move |_: &dyn BoundedCounter| hits.set(hits.get() + 1))
        };
        counter.subscribe(Rc::downgrade(&listener));
        (hits, listener)
    }

    #[test]
    fn test_new() {
        let counter = ClampingCounter::new(5, 9).unwrap();
        assert_eq!(counter.value(), 5);
        assert_eq!(counter.lower_bound(), 0);
        assert_eq!(counter.upper_bound(), 9);
        assert_eq!(counter.policy(), BoundaryPolicy::Clamp);
    }

    #[test]
    fn test_new_rejects_invalid_range() {
        assert!(matches!(
            ClampingCounter::new(0, -5),
            Err(Error::NegativeUpperBound { upper: -5 })
        ));
        assert!(matches!(
            ClampingCounter::new(10, 9),
            Err(Error::InitialOutOfRange { .. })
        ));
    }

    #[test]
    fn test_increment_to_ceiling_without_notification() {
        let counter = ClampingCounter::new(5, 9).unwrap();
        let (hits, _listener) = hit_counter(&counter);

        for _ in 0..4 {
            counter.increment();
        }
        assert_eq!(counter.value(), 9);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_increment_at_ceiling_notifies() {
        let counter = ClampingCounter::new(5, 9).unwrap();
        let (hits, _listener) = hit_counter(&counter);

        for _ in 0..5 {
            counter.increment();
        }
        assert_eq!(counter.value(), 9);
        assert_eq!(hits.get(), 1);

        counter.decrement();
        assert_eq!(counter.value(), 8);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_decrement_at_floor_notifies() {
        let counter = ClampingCounter::new(0, 5).unwrap();
        let (hits, _listener) = hit_counter(&counter);

        counter.decrement();
        assert_eq!(counter.value(), 0);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_listener_sees_clamped_value() {
        let counter = ClampingCounter::new(3, 3).unwrap();
        let seen = Rc::new(Cell::new(-1));
        let listener: Rc<dyn Listener> = {
            let seen = Rc::clone(&seen);
            Rc::new(move |c: &dyn BoundedCounter| seen.set(c.value()))
        };
        counter.subscribe(Rc::downgrade(&listener));

        counter.increment();
        assert_eq!(seen.get(), 3);
    }

    #[test]
    fn test_max_upper_bound_does_not_overflow() {
        let counter = ClampingCounter::new(i64::MAX, i64::MAX).unwrap();
        let (hits, _listener) = hit_counter(&counter);

        counter.increment();
        assert_eq!(counter.value(), i64::MAX);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_zero_range_notifies_both_ways() {
        let counter = ClampingCounter::default();
        let (hits, _listener) = hit_counter(&counter);

        counter.increment();
        counter.decrement();
        assert_eq!(counter.value(), 0);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_reentrant_listener() {
        let counter = Rc::new(ClampingCounter::new(2, 2).unwrap());
        let depth = Rc::new(Cell::new(0));
        let listener: Rc<dyn Listener> = {
            let depth = Rc::clone(&depth);
            Rc::new(move |c: &dyn BoundedCounter| {
                // One nested boundary event, then stop.
                depth.set(depth.get() + 1);
                if depth.get() == 1 {
                    c.increment();
                }
            })
        };
        counter.subscribe(Rc::downgrade(&listener));

        counter.increment();
        assert_eq!(depth.get(), 2);
        assert_eq!(counter.value(), 2);
    }

    #[test]
    fn test_subscribe_during_notification() {
        let counter = ClampingCounter::new(0, 0).unwrap();
        let late = MultiSubscriber::new("late");
        let listener: Rc<dyn Listener> = {
            let late = Rc::clone(&late);
            Rc::new(move |c: &dyn BoundedCounter| late.subscribe_to(c))
        };
        counter.subscribe(Rc::downgrade(&listener));

        counter.increment();
        assert!(late.reports().is_empty());
        assert_eq!(counter.listener_count(), 2);

        counter.increment();
        assert_eq!(late.reports().len(), 1);
    }

    #[test]
    fn test_debug() {
        let counter = ClampingCounter::new(4, 7).unwrap().with_name("debug_test");
        let debug_str = format!("{:?}", counter);
        assert!(debug_str.starts_with("ClampingCounter"));
        assert!(debug_str.contains("debug_test"));
        assert!(debug_str.contains("value: 4"));
        assert!(debug_str.contains("upper: 7"));
    }

    #[test]
    fn test_dyn_format() {
        let counter = ClampingCounter::new(3, 5).unwrap().with_name("test_counter");
        let formatted = format!("{}", &counter as &dyn BoundedCounter);
        assert_eq!(formatted, "test_counter:3");
    }

    #[test]
    fn test_dyn_format_unnamed() {
        let counter = ClampingCounter::new(3, 5).unwrap();
        let formatted = format!("{}", &counter as &dyn BoundedCounter);
        assert_eq!(formatted, "3");
    }

    #[test]
    fn test_name_default() {
        let counter = ClampingCounter::default();
        assert_eq!(counter.name(), "");
        assert_eq!(counter.upper_bound(), 0);
    }

    #[test]
    fn test_with_name_preserves_state() {
        let counter = ClampingCounter::new(2, 4).unwrap();
        let (hits, _listener) = hit_counter(&counter);
        let counter = counter.with_name("renamed");

        counter.decrement();
        counter.decrement();
        counter.decrement();
        assert_eq!(counter.name(), "renamed");
        assert_eq!(counter.value(), 0);
        assert_eq!(hits.get(), 1);
    }
}
