//! Unified error type for the crate.
//!
//! Counter operations never fail once a counter exists: reaching a limit is
//! reported through the listener channel, not through an error. The only
//! fallible steps are construction (an invalid range is rejected up front)
//! and, with the `json` feature, serialization of counter snapshots.
//!
//! # Example
//!
//! ```rust
//! use limiti::counters::clamping::ClampingCounter;
//! use limiti::Error;
//!
//! let err = ClampingCounter::new(7, 5).unwrap_err();
//! assert!(matches!(err, Error::InitialOutOfRange { initial: 7, upper: 5 }));
//! ```

use thiserror::Error;

/// Error type for all fallible operations in the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The upper bound is below the fixed lower bound of zero.
    #[error("upper bound must be non-negative, got {upper}")]
    NegativeUpperBound {
        /// The rejected upper bound.
        upper: i64,
    },

    /// The initial value does not lie in `[0, upper]`.
    #[error("initial value {initial} is outside the range [0, {upper}]")]
    InitialOutOfRange {
        /// The rejected initial value.
        initial: i64,
        /// The upper bound it was checked against.
        upper: i64,
    },

    /// Error from the JSON observer.
    #[cfg(feature = "json")]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
