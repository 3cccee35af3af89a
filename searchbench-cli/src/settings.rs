//! Run Settings
//!
//! Layers the measuring parameters of one run: built-in defaults, then
//! `searchbench.toml`, then command-line flags. A flag that was not given never
//! overrides the file.

use crate::Cli;
use crate::config::SearchConfig;
use searchbench_core::{
    InputGenerator, Reduction, SamplingAggregator, SweepRange, TargetMode, TimingHarness,
};

/// Which sizes a run measures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizePlan {
    /// `min, min + step, ...` up to `max`
    Range(SweepRange),
    /// Explicit ascending list
    List(Vec<usize>),
}

impl SizePlan {
    /// Number of sizes; 0 for a malformed range
    pub fn len(&self) -> usize {
        match self {
            SizePlan::Range(range) => range.len(),
            SizePlan::List(sizes) => sizes.len(),
        }
    }

    /// Whether no size would be measured
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fully resolved parameters of one measuring run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub sizes: SizePlan,
    pub samples: usize,
    pub reduction: Reduction,
    pub repetitions: u32,
    pub mode: TargetMode,
    pub upper_bound: i64,
    pub seed: Option<u64>,
    pub verify: bool,
    pub pin_cpu: Option<usize>,
}

impl RunSettings {
    /// Settings for a range sweep
    pub fn for_sweep(cli: &Cli, config: &SearchConfig) -> Self {
        let sweep = &config.sweep;
        let range = SweepRange {
            min: cli.min.unwrap_or(sweep.min),
            max: cli.max.unwrap_or(sweep.max),
            step: cli.step.unwrap_or(sweep.step),
        };
        Self::layered(
            cli,
            config,
            SizePlan::Range(range),
            sweep.samples,
            sweep.reduction,
        )
    }

    /// Settings for an explicit size list; `sizes` empty falls back to the file
    pub fn for_compare(cli: &Cli, config: &SearchConfig, sizes: &[usize]) -> Self {
        let compare = &config.compare;
        let sizes = if sizes.is_empty() {
            compare.sizes.clone()
        } else {
            sizes.to_vec()
        };
        Self::layered(
            cli,
            config,
            SizePlan::List(sizes),
            compare.samples,
            compare.reduction,
        )
    }

    fn layered(
        cli: &Cli,
        config: &SearchConfig,
        sizes: SizePlan,
        samples: usize,
        reduction: Reduction,
    ) -> Self {
        let runner = &config.runner;
        Self {
            sizes,
            samples: cli.samples.unwrap_or(samples),
            reduction: cli.reduction.unwrap_or(reduction),
            repetitions: cli.repetitions.unwrap_or(runner.repetitions),
            mode: cli.mode.unwrap_or(runner.mode),
            upper_bound: cli.upper_bound.unwrap_or(runner.upper_bound),
            seed: cli.seed.or(runner.seed),
            verify: runner.verify && !cli.no_verify,
            pin_cpu: cli.pin_cpu.or(runner.pin_cpu),
        }
    }

    /// Aggregator for these settings; rejects zero samples or repetitions
    pub fn aggregator(&self) -> searchbench_core::Result<SamplingAggregator> {
        let generator = InputGenerator::new(self.upper_bound)?;
        let harness = TimingHarness::new(self.repetitions)?;
        Ok(SamplingAggregator::new(generator, harness, self.samples)?
            .with_reduction(self.reduction)
            .with_mode(self.mode)
            .with_verification(self.verify))
    }
}
