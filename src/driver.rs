//! Repeated stepping of a counter.

use crate::counters::BoundedCounter;

/// Steps `counter` by `steps` units.
///
/// A positive `steps` calls [`increment`](BoundedCounter::increment) that many
/// times, a negative one calls [`decrement`](BoundedCounter::decrement)
/// `|steps|` times, and zero does nothing. Every step applies the counter's
/// boundary policy, so a long run may notify listeners many times.
///
/// # Examples
///
/// ```rust
/// use limiti::counters::clamping::ClampingCounter;
/// use limiti::counters::BoundedCounter;
/// use limiti::drive;
///
/// let counter = ClampingCounter::new(0, 5)?;
/// drive(&counter, 10);
/// assert_eq!(counter.value(), 5);
/// drive(&counter, -9);
/// assert_eq!(counter.value(), 0);
/// # Ok::<(), limiti::Error>(())
/// ```
pub fn drive(counter: &dyn BoundedCounter, steps: i64) {
    if steps >= 0 {
        for _ in 0..steps {
            counter.increment();
        }
    } else {
        for _ in 0..steps.unsigned_abs() {
            counter.decrement();
        }
    }
}
