//! JSON observer for serializing counters.
//!
//! This module provides [`JsonObserver`], which serializes a collection of
//! [`BoundedCounter`]s to a JSON array of
//! [`CounterSnapshot`](crate::snapshot::CounterSnapshot)s.
//!
//! # Feature Flag
//!
//! This module requires the `json` feature:
//!
//! ```toml
//! [dependencies]
//! limiti = { version = "0.1", features = ["json"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use limiti::counters::clamping::ClampingCounter;
//! use limiti::counters::BoundedCounter;
//! use limiti::observers::json::JsonObserver;
//!
//! let lc = ClampingCounter::new(2, 5)?.with_name("limited");
//! let counters: Vec<&dyn BoundedCounter> = vec![&lc];
//!
//! let json = JsonObserver::new().to_json(counters.into_iter())?;
//! assert_eq!(
//!     json,
//!     r#"[{"name":"limited","policy":"clamp","value":2,"lower":0,"upper":5}]"#
//! );
//! # Ok::<(), limiti::Error>(())
//! ```

use crate::counters::BoundedCounter;
use crate::snapshot::CounterSnapshot;
use crate::Result;

/// Configuration for the JSON observer.
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Whether to pretty-print the JSON output.
    pub pretty: bool,
}

/// An observer that serializes counters to JSON format.
#[derive(Debug, Clone, Default)]
pub struct JsonObserver {
    config: JsonConfig,
}

impl JsonObserver {
    /// Creates a new JSON observer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new JSON observer with the specified configuration.
    pub fn with_config(config: JsonConfig) -> Self {
        Self { config }
    }

    /// Enables or disables pretty-printing.
    pub fn pretty(mut self, enabled: bool) -> Self {
        self.config.pretty = enabled;
        self
    }

    /// Serializes counters to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if serialization fails.
    pub fn to_json<'a>(
        &self,
        counters: impl Iterator<Item = &'a dyn BoundedCounter>,
    ) -> Result<String> {
        let snapshots = CounterSnapshot::collect(counters);
        let json = if self.config.pretty {
            serde_json::to_string_pretty(&snapshots)?
        } else {
            serde_json::to_string(&snapshots)?
        };
        Ok(json)
    }
}
