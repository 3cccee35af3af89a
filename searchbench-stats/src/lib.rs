#![warn(missing_docs)]
//! SearchBench Statistical Reduction
//!
//! Collapses the per-sample timings of one algorithm at one input size into a
//! single representative value:
//! - Median-of-samples (lower-middle for even counts), robust to one-off outliers
//! - Mean-of-samples, where every sample's signal should be represented
//! - Min/max/standard deviation of the same samples for reporting

mod reduction;
mod summary;

pub use reduction::{Reduction, mean, median};
pub use summary::{CellSummary, summarize};

/// Default number of samples drawn per input size
pub const DEFAULT_SAMPLES_PER_SIZE: usize = 7;
