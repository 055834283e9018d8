//! A named listener that can follow any number of counters.
//!
//! [`MultiSubscriber`] turns every boundary event it receives into a
//! [`Report`], whose text form is the line
//! `<subscriber>: Limit has been reached: <value>`.
//!
//! # Example
//!
//! ```rust
//! use limiti::counters::clamping::ClampingCounter;
//! use limiti::counters::wrapping::WrappingCounter;
//! use limiti::counters::BoundedCounter;
//! use limiti::listeners::MultiSubscriber;
//!
//! let wrapping = WrappingCounter::new(9, 9)?.with_name("overflow");
//! let clamping = ClampingCounter::new(0, 5)?.with_name("limited");
//!
//! let both = MultiSubscriber::new("cu3");
//! both.subscribe_to(&wrapping);
//! both.subscribe_to(&clamping);
//!
//! wrapping.increment();
//! clamping.decrement();
//!
//! let lines: Vec<String> = both.reports().iter().map(ToString::to_string).collect();
//! assert_eq!(
//!     lines,
//!     ["cu3: Limit has been reached: 0", "cu3: Limit has been reached: 0"]
//! );
//! # Ok::<(), limiti::Error>(())
//! ```

use std::cell::RefCell;
use std::fmt::{self, Display};
use std::rc::{Rc, Weak};

use crate::counters::BoundedCounter;
use crate::listeners::Listener;

/// One boundary notification as seen by a [`MultiSubscriber`].
///
/// The firing counter is identified only by its name. A subscriber shared by
/// several unnamed counters records reports that cannot be told apart, so
/// give each counter a name with `with_name` when the source matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Name of the subscriber that received the notification.
    pub subscriber: String,
    /// Name of the counter that fired (empty if unnamed).
    pub counter: String,
    /// Value of the counter at delivery time.
    pub value: i64,
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: Limit has been reached: {}", self.subscriber, self.value)
    }
}

/// A listener with a display name that can subscribe to several counters.
///
/// The subscriber does not remember which counters it joined, and it never
/// unsubscribes. Counters only hold a weak handle to it, so dropping the last
/// `Rc` ends all of its subscriptions at once.
#[derive(Debug)]
pub struct MultiSubscriber {
    name: String,
    echo: bool,
    reports: RefCell<Vec<Report>>,
}

impl MultiSubscriber {
    /// Creates a subscriber that records reports without printing them.
    pub fn new(name: impl Into<String>) -> Rc<Self> {
        Self::builder(name).build()
    }

    /// Returns a builder for a subscriber with the given name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use limiti::listeners::MultiSubscriber;
    ///
    /// let cu1 = MultiSubscriber::builder("cu1").echo(true).build();
    /// assert_eq!(cu1.name(), "cu1");
    /// ```
    pub fn builder(name: impl Into<String>) -> MultiSubscriberBuilder {
        MultiSubscriberBuilder {
            name: name.into(),
            echo: false,
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Subscribes this listener to `counter`.
    pub fn subscribe_to(self: &Rc<Self>, counter: &dyn BoundedCounter) {
        let listener: Weak<dyn Listener> = Rc::<Self>::downgrade(self);
        counter.subscribe(listener);
    }

    /// Returns a copy of every report received so far, oldest first.
    pub fn reports(&self) -> Vec<Report> {
        self.reports.borrow().clone()
    }

    /// Returns and clears the reports received so far.
    pub fn take_reports(&self) -> Vec<Report> {
        self.reports.take()
    }
}

impl Listener for MultiSubscriber {
    fn on_boundary(&self, counter: &dyn BoundedCounter) {
        let report = Report {
            subscriber: self.name.clone(),
            counter: counter.name().to_string(),
            value: counter.value(),
        };
        if self.echo {
            println!("{report}");
        }
        self.reports.borrow_mut().push(report);
    }
}

/// Builder for [`MultiSubscriber`].
#[derive(Debug, Clone)]
pub struct MultiSubscriberBuilder {
    name: String,
    echo: bool,
}

impl MultiSubscriberBuilder {
    /// Prints every report to standard output as it arrives.
    pub fn echo(mut self, enabled: bool) -> Self {
        self.echo = enabled;
        self
    }

    /// Builds the subscriber behind an `Rc`, ready to subscribe.
    pub fn build(self) -> Rc<MultiSubscriber> {
        Rc::new(MultiSubscriber {
            name: self.name,
            echo: self.echo,
            reports: RefCell::new(Vec::new()),
        })
    }
}
