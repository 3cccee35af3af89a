#![warn(missing_docs)]
//! SearchBench Core - Measurement Pipeline
//!
//! This crate measures how search strategies scale with input size:
//! - `SearchStrategy` trait and the six built-in strategies
//! - `AlgorithmRegistry`, an ordered name → strategy table
//! - `InputGenerator` producing sorted uniform samples from a caller-supplied RNG
//! - `TimingHarness` batch-timing one strategy on one sample
//! - `SamplingAggregator` reducing S samples per strategy per size
//! - `SweepDriver` assembling the per-size rows into a `SweepTable`
//!
//! Everything runs serially on the calling thread; batches are never
//! interleaved with other measurements.

mod aggregator;
mod error;
mod generator;
mod harness;
mod measure;
mod registry;
pub mod strategy;
mod sweep;

pub use aggregator::SamplingAggregator;
pub use error::{BenchError, Result};
pub use generator::{
    ABSENT_TARGET, DEFAULT_UPPER_BOUND, InputGenerator, Sample, TargetMode, pick_target,
};
pub use harness::{DEFAULT_REPETITIONS, TimingHarness};
pub use measure::{Timer, pin_to_cpu};
pub use registry::{AlgorithmRegistry, Column, RegisteredStrategy};
pub use strategy::{Complexity, SearchStrategy};
pub use sweep::{
    NoopObserver, SizeRow, SweepDriver, SweepObserver, SweepRange, SweepSettings, SweepTable,
};

pub use searchbench_stats::{CellSummary, Reduction};
