#![warn(missing_docs)]
//! # SearchBench
//!
//! Empirical scaling benchmarks for search algorithms over sorted integer data.
//!
//! SearchBench measures how the running time of each search strategy grows
//! with input size:
//! - **Strategies**: linear, binary, jump, exponential, interpolation and
//!   ternary search behind one `SearchStrategy` trait
//! - **Batch Timing**: R back-to-back calls per timed batch, so sub-microsecond
//!   searches stay above clock resolution
//! - **Sampling**: S fresh random sorted inputs per size, shared by every
//!   strategy, reduced by median or mean
//! - **Reporting**: text table with scaling analysis, JSON, CSV and SVG charts
//!
//! ## Quick Start
//!
//! ```no_run
//! use searchbench::prelude::*;
//! use rand::SeedableRng;
//!
//! let registry = AlgorithmRegistry::standard();
//! let aggregator = SamplingAggregator::default();
//! let range = SweepRange::new(10_000, 50_000, 10_000)?;
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let table = SweepDriver::new(&registry, &aggregator).run(&range, &mut rng, &mut NoopObserver)?;
//! for row in &table.rows {
//!     println!("{} {:?}", row.size, row.timings().collect::<Vec<_>>());
//! }
//! # Ok::<(), searchbench::BenchError>(())
//! ```
//!
//! ## Custom Strategies
//!
//! ```ignore
//! struct Galloping;
//!
//! impl SearchStrategy for Galloping {
//!     fn id(&self) -> &'static str { "galloping" }
//!     fn complexity(&self) -> Complexity { Complexity::Logarithmic }
//!     fn search(&self, haystack: &[i64], target: i64) -> Option<usize> { /* ... */ }
//! }
//!
//! let mut registry = AlgorithmRegistry::standard();
//! registry.register("Galloping Search", Galloping)?;
//! ```

// Re-export core types
pub use searchbench_core::{
    ABSENT_TARGET, AlgorithmRegistry, BenchError, Column, Complexity, DEFAULT_REPETITIONS,
    DEFAULT_UPPER_BOUND, InputGenerator, NoopObserver, RegisteredStrategy, Sample,
    SamplingAggregator, SearchStrategy, SizeRow, SweepDriver, SweepObserver, SweepRange,
    SweepSettings, SweepTable, TargetMode, TimingHarness, pick_target, pin_to_cpu, strategy,
};

// Re-export stats
pub use searchbench_stats::{CellSummary, DEFAULT_SAMPLES_PER_SIZE, Reduction, summarize};

// Re-export reporting
pub use searchbench_report::{
    ChartOptions, GrowthAnalysis, OutputFormat, Report, ReportMeta, Scale, Theme,
    analyze_growth, generate_csv_report, generate_json_report, generate_text_report,
    write_charts,
};

// Re-export CLI
pub use searchbench_cli::{Cli, SearchConfig, run, run_with_cli};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        AlgorithmRegistry, Complexity, NoopObserver, Reduction, SamplingAggregator,
        SearchStrategy, SweepDriver, SweepRange, SweepTable, TargetMode,
    };
}
