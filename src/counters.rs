//! Core module containing the bounded counter implementations and the state
//! they share.
//!
//! Every counter in this module keeps its value in the closed range
//! `[0, upper]`. What differs between implementations is the *boundary
//! policy*: what happens when an [`increment`](BoundedCounter::increment) or
//! [`decrement`](BoundedCounter::decrement) would leave that range.
//!
//! ```text
//!        decrement at 0                          increment at upper
//!   ┌──────────────────────┐                ┌──────────────────────────┐
//!   │ Clamp: stay at 0     │                │ Clamp: stay at upper     │
//!   │ Wrap:  jump to upper │ ── notify ──►  │ Wrap:  jump to 0         │
//!   └──────────────────────┘                └──────────────────────────┘
//!                                │
//!                                ▼
//!                   listeners, in subscription order
//! ```
//!
//! # Notification
//!
//! A boundary event is delivered synchronously, before the triggering call
//! returns. The counter passes itself as `&dyn BoundedCounter`, and the value a
//! listener reads is always the post-event value (after clamping or wrapping).
//!
//! Delivery is reentrant: a listener may call back into the counter that is
//! notifying it. Nothing guards against this. A listener that increments a
//! clamping counter sitting at its ceiling triggers one nested notification per
//! such call, and a listener that does so unconditionally never terminates.

pub mod clamping;
pub mod wrapping;

use std::cell::Cell;
use std::fmt::{self, Debug, Display};
use std::rc::Weak;

use tracing::{debug, trace};

use crate::listeners::{Listener, ListenerList};
use crate::{Error, Result};

/// What a counter does when a step would leave its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BoundaryPolicy {
    /// The value holds at the limit it was already at.
    Clamp,
    /// The value resets to the opposite limit.
    Wrap,
}

impl Display for BoundaryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryPolicy::Clamp => f.write_str("clamp"),
            BoundaryPolicy::Wrap => f.write_str("wrap"),
        }
    }
}

/// Which side of the range a boundary event happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// A decrement was attempted at the lower bound.
    Floor,
    /// An increment was attempted at the upper bound.
    Ceiling,
}

impl Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::Floor => f.write_str("floor"),
            Boundary::Ceiling => f.write_str("ceiling"),
        }
    }
}

/// A bounded integer counter that notifies listeners when a limit is hit.
///
/// All operations take `&self`: counters use interior mutability so that a
/// listener receiving `&dyn BoundedCounter` can still read (or, at its own
/// risk, drive) the counter that is notifying it. Counters are therefore not
/// `Sync` and are meant for single-threaded use.
///
/// # Implementors
///
/// - [`ClampingCounter`](clamping::ClampingCounter) - [`BoundaryPolicy::Clamp`]
/// - [`WrappingCounter`](wrapping::WrappingCounter) - [`BoundaryPolicy::Wrap`]
///
/// # Examples
///
/// ```rust
/// use limiti::counters::clamping::ClampingCounter;
/// use limiti::counters::wrapping::WrappingCounter;
/// use limiti::counters::BoundedCounter;
///
/// let counters: Vec<Box<dyn BoundedCounter>> = vec![
///     Box::new(ClampingCounter::new(3, 3)?),
///     Box::new(WrappingCounter::new(3, 3)?),
/// ];
///
/// for counter in &counters {
///     counter.increment();
/// }
///
/// assert_eq!(counters[0].value(), 3);
/// assert_eq!(counters[1].value(), 0);
/// # Ok::<(), limiti::Error>(())
/// ```
pub trait BoundedCounter: Debug {
    /// Returns the name of this counter, or an empty string if none was set.
    fn name(&self) -> &str;

    /// Returns the current value.
    fn value(&self) -> i64;

    /// Returns the lower bound, which is always zero.
    fn lower_bound(&self) -> i64 {
        0
    }

    /// Returns the upper bound fixed at construction.
    fn upper_bound(&self) -> i64;

    /// Returns the policy applied on a boundary event.
    fn policy(&self) -> BoundaryPolicy;

    /// Moves the value up by one, applying the boundary policy at the ceiling.
    fn increment(&self);

    /// Moves the value down by one, applying the boundary policy at the floor.
    fn decrement(&self);

    /// Appends a listener to the notification list.
    ///
    /// The counter keeps only a weak handle: it never extends the lifetime of a
    /// listener, and a listener dropped by its owner is skipped silently.
    /// Subscribing the same listener twice makes it receive every event twice.
    fn subscribe(&self, listener: Weak<dyn Listener>);

    /// Returns the number of subscriptions made, including those whose
    /// listener has since been dropped.
    fn listener_count(&self) -> usize;
}

impl Display for dyn BoundedCounter + '_ {
    /// Formats the counter as `name:value` if named, or just `value` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.name().is_empty() {
            write!(f, "{}:{}", self.name(), self.value())
        } else {
            write!(f, "{}", self.value())
        }
    }
}

/// State shared by every counter implementation: name, value, bound and the
/// listener list.
pub(crate) struct CounterState {
    name: &'static str,
    value: Cell<i64>,
    upper: i64,
    listeners: ListenerList,
}

impl CounterState {
    /// Validates the range and creates the state.
    pub(crate) fn new(initial: i64, upper: i64) -> Result<Self> {
        if upper < 0 {
            return Err(Error::NegativeUpperBound { upper });
        }
        if !(0..=upper).contains(&initial) {
            return Err(Error::InitialOutOfRange { initial, upper });
        }
        Ok(Self {
            name: "",
            value: Cell::new(initial),
            upper,
            listeners: ListenerList::new(),
        })
    }

    pub(crate) fn with_name(self, name: &'static str) -> Self {
        Self { name, ..self }
    }

    #[inline]
    pub(crate) fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub(crate) fn value(&self) -> i64 {
        self.value.get()
    }

    #[inline]
    pub(crate) fn set(&self, value: i64) {
        debug_assert!((0..=self.upper).contains(&value));
        self.value.set(value);
    }

    #[inline]
    pub(crate) fn upper(&self) -> i64 {
        self.upper
    }

    pub(crate) fn subscribe(&self, listener: Weak<dyn Listener>) {
        self.listeners.push(listener);
        trace!(
            counter = self.name,
            listeners = self.listeners.len(),
            "listener subscribed"
        );
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Reports a boundary event to every listener.
    ///
    /// The value must already hold its post-event state.
    pub(crate) fn fire(&self, counter: &dyn BoundedCounter, boundary: Boundary) {
        let value = self.value();
        let delivered = self.listeners.notify(counter);
        debug!(
            counter = self.name,
            policy = %counter.policy(),
            %boundary,
            value,
            delivered,
            "boundary reached"
        );
    }

    /// Writes the common debug representation under the given type name.
    pub(crate) fn debug_fields(&self, f: &mut fmt::Formatter<'_>, ty: &str) -> fmt::Result {
        f.debug_struct(ty)
            .field("name", &self.name)
            .field("value", &self.value())
            .field("upper", &self.upper)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for CounterState {
    /// An unnamed counter fixed at zero, with an upper bound of zero.
    fn default() -> Self {
        Self {
            name: "",
            value: Cell::new(0),
            upper: 0,
            listeners: ListenerList::new(),
        }
    }
}
