//! Listener capability and the subscription plumbing shared by all counters.
//!
//! A [`Listener`] is invoked by a counter when a boundary event occurs. The
//! counter holds listeners through [`Weak`] handles only: the owner of a
//! listener decides how long it lives, and a listener that has been dropped
//! simply stops receiving notifications.
//!
//! Any `Fn(&dyn BoundedCounter)` closure is a listener, which keeps ad-hoc
//! subscriptions short:
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use limiti::counters::clamping::ClampingCounter;
//! use limiti::counters::BoundedCounter;
//! use limiti::listeners::Listener;
//!
//! let hits = Rc::new(Cell::new(0));
//! let listener: Rc<dyn Listener> = {
//!     let hits = Rc::clone(&hits);
//!     Rc::new(move |_: &dyn BoundedCounter| hits.set(hits.get() + 1))
//! };
//!
//! let counter = ClampingCounter::new(1, 1)?;
//! counter.subscribe(Rc::downgrade(&listener));
//!
//! counter.increment();
//! counter.increment();
//! assert_eq!(hits.get(), 2);
//! # Ok::<(), limiti::Error>(())
//! ```
//!
//! For a named listener that can follow several counters at once, see
//! [`MultiSubscriber`].

mod multi;

pub use multi::{MultiSubscriber, MultiSubscriberBuilder, Report};

use std::cell::RefCell;
use std::fmt::{self, Debug};
use std::rc::{Rc, Weak};

use crate::counters::BoundedCounter;

/// Receives boundary notifications from counters.
pub trait Listener {
    /// Called once per boundary event by every counter this listener is
    /// subscribed to.
    ///
    /// `counter` is the counter that fired, already holding its post-event
    /// value.
    fn on_boundary(&self, counter: &dyn BoundedCounter);
}

impl<F> Listener for F
where
    F: Fn(&dyn BoundedCounter),
{
    fn on_boundary(&self, counter: &dyn BoundedCounter) {
        self(counter)
    }
}

/// Ordered, add-only list of non-owning listener handles.
///
/// This is the fan-out machinery behind every counter in the crate. It is
/// public so that other [`BoundedCounter`] implementations can reuse it.
#[derive(Default)]
pub struct ListenerList {
    slots: RefCell<Vec<Weak<dyn Listener>>>,
}

impl ListenerList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a listener. Duplicates are kept.
    pub fn push(&self, listener: Weak<dyn Listener>) {
        self.slots.borrow_mut().push(listener);
    }

    /// Returns the number of subscriptions, live or not.
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    /// Returns true if nothing was ever subscribed.
    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }

    /// Returns the number of subscriptions whose listener is still alive.
    pub fn live(&self) -> usize {
        self.slots
            .borrow()
            .iter()
            .filter(|slot| slot.strong_count() > 0)
            .count()
    }

    /// Delivers a boundary event to every live listener, in subscription
    /// order, and returns how many were invoked.
    ///
    /// The list is snapshotted before delivery, so a listener may subscribe
    /// others or drive the notifying counter again. Listeners added during a
    /// delivery are not invoked for that event.
    pub fn notify(&self, counter: &dyn BoundedCounter) -> usize {
        let live: Vec<Rc<dyn Listener>> = self
            .slots
            .borrow()
            .iter()
            .filter_map(Weak::upgrade)
            .collect();

        for listener in &live {
            listener.on_boundary(counter);
        }
        live.len()
    }
}

impl Debug for ListenerList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerList")
            .field("subscriptions", &self.len())
            .field("live", &self.live())
            .finish()
    }
}
