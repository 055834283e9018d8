//! # Limiti - Bounded Counters with Boundary Notifications
//!
//! A Rust library providing small integer counters that live in a fixed range
//! `[0, upper]` and tell interested parties when a step would leave it.
//!
//! ## Boundary Policies
//!
//! A *boundary event* is an [`increment`](counters::BoundedCounter::increment)
//! at the upper bound or a [`decrement`](counters::BoundedCounter::decrement)
//! at zero. Each counter type answers "what happens next" differently:
//!
//! | Type | Policy | At the ceiling | At the floor |
//! |------|--------|----------------|--------------|
//! | [`ClampingCounter`](counters::clamping::ClampingCounter) | clamp | stays at `upper` | stays at `0` |
//! | [`WrappingCounter`](counters::wrapping::WrappingCounter) | wrap | jumps to `0` | jumps to `upper` |
//!
//! In both cases the event is delivered to every subscribed
//! [`Listener`](listeners::Listener), synchronously and in subscription order,
//! after the value has been updated.
//!
//! ## Quick Start
//!
//! ```rust
//! use limiti::counters::wrapping::WrappingCounter;
//! use limiti::counters::BoundedCounter;
//! use limiti::listeners::MultiSubscriber;
//!
//! let counter = WrappingCounter::new(5, 9)?.with_name("overflow");
//!
//! let cu1 = MultiSubscriber::new("cu1");
//! cu1.subscribe_to(&counter);
//!
//! limiti::drive(&counter, 5);
//!
//! assert_eq!(counter.value(), 0);
//! assert_eq!(cu1.reports()[0].to_string(), "cu1: Limit has been reached: 0");
//! # Ok::<(), limiti::Error>(())
//! ```
//!
//! ## Ownership
//!
//! Counters hold listeners through [`std::rc::Weak`] handles. A counter never
//! keeps a listener alive, and a listener dropped by its owner is skipped on
//! the next event. Subscriptions cannot be removed.
//!
//! ## Threading
//!
//! Counters use `Cell`/`RefCell` interior mutability and are meant for a
//! single thread. All operations take `&self`, which is what lets a listener
//! read the counter that is notifying it.
//!
//! ## Logging
//!
//! Boundary events are logged at `debug` level and subscriptions at `trace`
//! level through the [`tracing`] crate. Install any subscriber to see them.
//!
//! ## Observers
//!
//! Optional modules for inspecting counter state, each behind a feature flag:
//!
//! | Feature | Module | Description |
//! |---------|--------|-------------|
//! | `table` | [`observers::table`] | Pretty-print counters as tables |
//! | `serde` | [`snapshot`] | Serializable counter snapshots |
//! | `json` | [`observers::json`] | Serialize counters to JSON |
//! | `full` | All observers | Enables all observer modules |

pub mod counters;
pub mod listeners;
pub mod observers;

mod driver;
mod error;

#[cfg(feature = "serde")]
pub mod snapshot;

pub use driver::drive;
pub use error::{Error, Result};
