//! Error Types

use thiserror::Error;

/// Errors raised by the measurement pipeline.
///
/// Faults inside a search strategy are not represented here: a panicking
/// strategy unwinds straight through the harness to the sweep caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BenchError {
    /// A target was requested from an empty sequence.
    #[error("cannot select a target from an empty sequence (size {size})")]
    EmptyInput {
        /// Requested input size
        size: usize,
    },

    /// The sweep range cannot produce an ascending, terminating size sequence.
    #[error("invalid sweep range: min={min}, max={max}, step={step} (need min <= max and step > 0)")]
    InvalidRange {
        /// Smallest size
        min: usize,
        /// Largest size (inclusive)
        max: usize,
        /// Increment between sizes
        step: usize,
    },

    /// An explicit size list was empty or not strictly ascending.
    #[error("invalid size list: {0}")]
    InvalidSizes(String),

    /// Zero samples per size were requested.
    #[error("samples per size must be at least 1")]
    InvalidSampleCount,

    /// Zero repetitions per timing batch were requested.
    #[error("repetitions per timing batch must be at least 1")]
    InvalidRepetitions,

    /// The generator's upper bound is negative.
    #[error("upper bound must be non-negative, got {0}")]
    InvalidUpperBound(i64),

    /// The registry has no algorithms to measure.
    #[error("no algorithms registered")]
    EmptyRegistry,

    /// Two strategies were registered under the same display name.
    #[error("algorithm registered twice: {0}")]
    DuplicateAlgorithm(String),

    /// A selection named an algorithm the registry does not contain.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// A strategy returned a wrong answer during the pre-timing check.
    #[error("{algorithm} returned {got:?} for target {target} at size {size}")]
    IncorrectResult {
        /// Display name of the strategy
        algorithm: String,
        /// Input size of the failing sample
        size: usize,
        /// Target searched for
        target: i64,
        /// Position the strategy reported
        got: Option<usize>,
    },
}

/// Result alias for the measurement pipeline
pub type Result<T> = std::result::Result<T, BenchError>;
