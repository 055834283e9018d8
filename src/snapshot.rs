//! Snapshot types for serializing counter state.
//!
//! # Feature Flag
//!
//! This module requires the `serde` feature:
//!
//! ```toml
//! [dependencies]
//! limiti = { version = "0.1", features = ["serde"] }
//! ```

use crate::counters::{BoundaryPolicy, BoundedCounter};
use serde::{Deserialize, Serialize};

/// A point-in-time copy of a counter's state.
///
/// Listeners are not part of a snapshot.
///
/// # Examples
///
/// ```rust
/// use limiti::counters::clamping::ClampingCounter;
/// use limiti::snapshot::CounterSnapshot;
///
/// let counter = ClampingCounter::new(3, 5)?.with_name("volume");
/// let snapshot = CounterSnapshot::from_counter(&counter);
///
/// assert_eq!(snapshot.name, "volume");
/// assert_eq!(snapshot.value, 3);
/// # Ok::<(), limiti::Error>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CounterSnapshot {
    /// The name of the counter, `"(unnamed)"` if none was set.
    pub name: String,
    /// The boundary policy of the counter.
    pub policy: BoundaryPolicy,
    /// The value of the counter.
    pub value: i64,
    /// The lower bound.
    pub lower: i64,
    /// The upper bound.
    pub upper: i64,
}

impl CounterSnapshot {
    /// Creates a snapshot from any bounded counter.
    pub fn from_counter(counter: &dyn BoundedCounter) -> Self {
        Self {
            name: if counter.name().is_empty() {
                "(unnamed)".to_string()
            } else {
                counter.name().to_string()
            },
            policy: counter.policy(),
            value: counter.value(),
            lower: counter.lower_bound(),
            upper: counter.upper_bound(),
        }
    }

    /// Collects snapshots from an iterator of counters.
    pub fn collect<'a>(counters: impl Iterator<Item = &'a dyn BoundedCounter>) -> Vec<Self> {
        counters.map(Self::from_counter).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counters::clamping::ClampingCounter;
    use crate::counters::wrapping::WrappingCounter;

    #[test]
    fn test_from_counter() {
        let counter = WrappingCounter::new(7, 9).unwrap().with_name("oc");
        let snapshot = CounterSnapshot::from_counter(&counter);
        assert_eq!(
            snapshot,
            CounterSnapshot {
                name: "oc".to_string(),
                policy: BoundaryPolicy::Wrap,
                value: 7,
                lower: 0,
                upper: 9,
            }
        );
    }

    #[test]
    fn test_from_counter_unnamed() {
        let counter = ClampingCounter::default();
        let snapshot = CounterSnapshot::from_counter(&counter);
        assert_eq!(snapshot.name, "(unnamed)");
    }

    #[test]
    fn test_collect_preserves_order() {
        let a = ClampingCounter::new(1, 2).unwrap().with_name("a");
        let b = WrappingCounter::new(2, 2).unwrap().with_name("b");
        let counters: Vec<&dyn BoundedCounter> = vec![&a, &b];

        let snapshots = CounterSnapshot::collect(counters.into_iter());
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].name, "a");
        assert_eq!(snapshots[1].name, "b");
    }

    #[test]
    fn test_serialize() {
        let counter = ClampingCounter::new(4, 5).unwrap().with_name("lc");
        let json = serde_json::to_string(&CounterSnapshot::from_counter(&counter)).unwrap();
        assert_eq!(
            json,
            r#"{"name":"lc","policy":"clamp","value":4,"lower":0,"upper":5}"#
        );
    }

    #[test]
    fn test_deserialize() {
        let json = r#"{"name":"oc","policy":"wrap","value":0,"lower":0,"upper":9}"#;
        let snapshot: CounterSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.policy, BoundaryPolicy::Wrap);
        assert_eq!(snapshot.upper, 9);
    }
}
