//! Observer implementations for inspecting and exporting counter state.
//!
//! Observers read a collection of counters through the [`BoundedCounter`]
//! trait and render them; they never step or subscribe to a counter.
//!
//! - [`table`] - Pretty-print counters as tables using the `tabled` crate
//! - [`json`] - Serialize counter snapshots to JSON
//!
//! # Feature Flags
//!
//! - `table` - Enables the [`table`] module
//! - `json` - Enables the [`json`] module (implies `serde`)
//! - `full` - Enables all observer modules
//!
//! [`BoundedCounter`]: crate::counters::BoundedCounter

#[cfg(feature = "table")]
pub mod table;

#[cfg(feature = "json")]
pub mod json;
