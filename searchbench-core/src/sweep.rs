//! Sweep Driver
//!
//! Walks an ascending list of input sizes, runs the aggregator at each size and
//! collects one row per size. Row order is size order, and every row has one
//! cell per registered strategy in registry order; report and chart code index
//! into rows positionally and rely on both.
//!
//! ```text
//! SweepRange / size list
//!        │
//!        ▼
//! ┌──────────────────┐
//! │   SweepDriver    │  one call per size
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐
//! │SamplingAggregator│  S samples × every strategy
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐
//! │  TimingHarness   │  R calls per timed batch
//! └────────┬─────────┘
//!          ▼
//!      SweepTable
//! ```

use crate::aggregator::SamplingAggregator;
use crate::error::{BenchError, Result};
use crate::generator::TargetMode;
use crate::registry::{AlgorithmRegistry, Column};
use rand::Rng;
use searchbench_stats::{CellSummary, Reduction};
use serde::{Deserialize, Serialize};

/// Inclusive size range `min, min + step, …, <= max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepRange {
    /// First size
    pub min: usize,
    /// Largest size that may be included
    pub max: usize,
    /// Increment between sizes
    pub step: usize,
}

impl SweepRange {
    /// Validated range; `min > max` or `step == 0` is rejected
    pub fn new(min: usize, max: usize, step: usize) -> Result<Self> {
        let range = Self { min, max, step };
        range.validate()?;
        Ok(range)
    }

    /// Check the range can produce a terminating ascending sequence
    pub fn validate(&self) -> Result<()> {
        if self.min > self.max || self.step == 0 {
            return Err(BenchError::InvalidRange {
                min: self.min,
                max: self.max,
                step: self.step,
            });
        }
        Ok(())
    }

    /// Sizes in ascending order; an invalid range yields nothing
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        let (start, end) = if self.validate().is_ok() {
            (self.min, self.max)
        } else {
            (1, 0)
        };
        (start..=end).step_by(self.step.max(1))
    }

    /// Number of sizes the range yields
    pub fn len(&self) -> usize {
        if self.min > self.max || self.step == 0 {
            0
        } else {
            (self.max - self.min) / self.step + 1
        }
    }

    /// Whether the range yields no sizes
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Measurements for all strategies at one input size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeRow {
    /// Input size
    pub size: usize,
    /// One cell per strategy, in column order
    pub cells: Vec<CellSummary>,
}

impl SizeRow {
    /// Reduced per-call nanoseconds, in column order
    pub fn timings(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().map(|c| c.value)
    }

    /// Size field plus one field per strategy
    pub fn width(&self) -> usize {
        1 + self.cells.len()
    }
}

/// Parameters a table was measured with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepSettings {
    /// Samples per size
    pub samples: usize,
    /// Calls per timed batch
    pub repetitions: u32,
    /// Reduction applied to each cell
    pub reduction: Reduction,
    /// Found or absent targets
    pub mode: TargetMode,
    /// Inclusive upper bound of generated values
    pub upper_bound: i64,
}

impl SweepSettings {
    fn from_aggregator(aggregator: &SamplingAggregator) -> Self {
        Self {
            samples: aggregator.samples(),
            repetitions: aggregator.harness().repetitions(),
            reduction: aggregator.reduction(),
            mode: aggregator.mode(),
            upper_bound: aggregator.generator().upper_bound(),
        }
    }
}

/// Rows in ascending size order plus their column headers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepTable {
    /// Algorithm columns, in row cell order
    pub columns: Vec<Column>,
    /// One row per size, ascending
    pub rows: Vec<SizeRow>,
    /// How the table was measured
    pub settings: SweepSettings,
}

impl SweepTable {
    /// Sizes in row order
    pub fn sizes(&self) -> Vec<usize> {
        self.rows.iter().map(|r| r.size).collect()
    }

    /// Reduced timings of column `idx` across all sizes
    pub fn series(&self, idx: usize) -> Vec<f64> {
        self.rows
            .iter()
            .filter_map(|r| r.cells.get(idx).map(|c| c.value))
            .collect()
    }

    /// Position of the column named `name` (display name or id)
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name) || c.id.eq_ignore_ascii_case(name))
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Progress callbacks from a running sweep
pub trait SweepObserver {
    /// A size is about to be measured; `index` counts from 0 up to `total`
    fn on_size_start(&mut self, _size: usize, _index: usize, _total: usize) {}

    /// A size finished
    fn on_size_complete(&mut self, _row: &SizeRow) {}
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SweepObserver for NoopObserver {}

/// Runs the aggregator over a sequence of sizes
pub struct SweepDriver<'a> {
    registry: &'a AlgorithmRegistry,
    aggregator: &'a SamplingAggregator,
}

impl<'a> SweepDriver<'a> {
    /// Driver over `registry`'s strategies, in registry order
    pub fn new(registry: &'a AlgorithmRegistry, aggregator: &'a SamplingAggregator) -> Self {
        Self {
            registry,
            aggregator,
        }
    }

    /// Sweep every size of `range`
    pub fn run<R: Rng + ?Sized>(
        &self,
        range: &SweepRange,
        rng: &mut R,
        observer: &mut dyn SweepObserver,
    ) -> Result<SweepTable> {
        range.validate()?;
        let sizes: Vec<usize> = range.sizes().collect();
        self.run_plan(&sizes, rng, observer)
    }

    /// Sweep an explicit, strictly ascending list of sizes
    pub fn run_sizes<R: Rng + ?Sized>(
        &self,
        sizes: &[usize],
        rng: &mut R,
        observer: &mut dyn SweepObserver,
    ) -> Result<SweepTable> {
        if sizes.is_empty() {
            return Err(BenchError::InvalidSizes("no sizes given".to_string()));
        }
        if let Some(pair) = sizes.windows(2).find(|w| w[0] >= w[1]) {
            return Err(BenchError::InvalidSizes(format!(
                "sizes must be strictly ascending, found {} then {}",
                pair[0], pair[1]
            )));
        }
        self.run_plan(sizes, rng, observer)
    }

    fn run_plan<R: Rng + ?Sized>(
        &self,
        sizes: &[usize],
        rng: &mut R,
        observer: &mut dyn SweepObserver,
    ) -> Result<SweepTable> {
        if self.registry.is_empty() {
            return Err(BenchError::EmptyRegistry);
        }

        let mut rows = Vec::with_capacity(sizes.len());
        for (index, &size) in sizes.iter().enumerate() {
            tracing::info!(size, "processing size");
            observer.on_size_start(size, index, sizes.len());

            let cells = self.aggregator.measure_size(self.registry, size, rng)?;
            let row = SizeRow { size, cells };
            tracing::debug!(size, timings = ?row.timings().collect::<Vec<_>>(), "size complete");

            observer.on_size_complete(&row);
            rows.push(row);
        }

        Ok(SweepTable {
            columns: self.registry.columns(),
            rows,
            settings: SweepSettings::from_aggregator(self.aggregator),
        })
    }
}
