//! Sampling Aggregator
//!
//! For one input size: draw S samples, time every registered strategy on each
//! of them, and reduce each strategy's S timings to one cell. All strategies at
//! a size see the same S samples, so columns compare like with like.

use crate::error::{BenchError, Result};
use crate::generator::{InputGenerator, Sample, TargetMode};
use crate::harness::TimingHarness;
use crate::registry::AlgorithmRegistry;
use rand::Rng;
use searchbench_stats::{CellSummary, DEFAULT_SAMPLES_PER_SIZE, Reduction, summarize};

/// Per-size sampling and reduction
#[derive(Debug, Clone)]
pub struct SamplingAggregator {
    generator: InputGenerator,
    harness: TimingHarness,
    samples: usize,
    reduction: Reduction,
    mode: TargetMode,
    verify: bool,
}

impl Default for SamplingAggregator {
    fn default() -> Self {
        Self {
            generator: InputGenerator::default(),
            harness: TimingHarness::default(),
            samples: DEFAULT_SAMPLES_PER_SIZE,
            reduction: Reduction::default(),
            mode: TargetMode::default(),
            verify: true,
        }
    }
}

impl SamplingAggregator {
    /// Aggregator drawing `samples` samples per size
    pub fn new(generator: InputGenerator, harness: TimingHarness, samples: usize) -> Result<Self> {
        if samples == 0 {
            return Err(BenchError::InvalidSampleCount);
        }
        Ok(Self {
            generator,
            harness,
            samples,
            ..Self::default()
        })
    }

    /// Use `reduction` to collapse each strategy's samples
    pub fn with_reduction(mut self, reduction: Reduction) -> Self {
        self.reduction = reduction;
        self
    }

    /// Search for present (best case) or absent (worst case) targets
    pub fn with_mode(mut self, mode: TargetMode) -> Self {
        self.mode = mode;
        self
    }

    /// Check each strategy's answer once per sample before timing it
    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Samples per size
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Reduction policy
    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Target mode
    pub fn mode(&self) -> TargetMode {
        self.mode
    }

    /// Input generator
    pub fn generator(&self) -> &InputGenerator {
        &self.generator
    }

    /// Timing harness
    pub fn harness(&self) -> &TimingHarness {
        &self.harness
    }

    /// One cell per registered strategy, in registry order
    pub fn measure_size<R: Rng + ?Sized>(
        &self,
        registry: &AlgorithmRegistry,
        size: usize,
        rng: &mut R,
    ) -> Result<Vec<CellSummary>> {
        if registry.is_empty() {
            return Err(BenchError::EmptyRegistry);
        }

        let samples = (0..self.samples)
            .map(|_| Sample::draw(&self.generator, size, self.mode, rng))
            .collect::<Result<Vec<_>>>()?;

        let mut timings: Vec<Vec<f64>> = (0..registry.len())
            .map(|_| Vec::with_capacity(self.samples))
            .collect();

        for sample in &samples {
            for (entry, column) in registry.iter().zip(timings.iter_mut()) {
                if self.verify {
                    let got = entry.strategy().search(sample.values(), sample.target());
                    self.check_answer(entry.name(), got, sample)?;
                }
                column.push(self.harness.time_sample(entry.strategy(), sample));
            }
        }
        drop(samples);

        timings
            .iter()
            .map(|t| summarize(t, self.reduction).ok_or(BenchError::InvalidSampleCount))
            .collect()
    }

    fn check_answer(&self, algorithm: &str, got: Option<usize>, sample: &Sample) -> Result<()> {
        let correct = match (self.mode, got) {
            (TargetMode::Found, Some(idx)) => sample.values().get(idx) == Some(&sample.target()),
            (TargetMode::Found, None) => false,
            (TargetMode::Absent, found) => found.is_none(),
        };
        if correct {
            Ok(())
        } else {
            Err(BenchError::IncorrectResult {
                algorithm: algorithm.to_string(),
                size: sample.len(),
                target: sample.target(),
                got,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{Complexity, SearchStrategy};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct Broken;

    impl SearchStrategy for Broken {
        fn id(&self) -> &'static str {
            "broken"
        }
        fn complexity(&self) -> Complexity {
            Complexity::Constant
        }
        fn search(&self, _haystack: &[i64], _target: i64) -> Option<usize> {
            None
        }
    }

    fn aggregator(samples: usize) -> SamplingAggregator {
        SamplingAggregator::new(
            InputGenerator::default(),
            TimingHarness::new(20).unwrap(),
            samples,
        )
        .unwrap()
    }

    #[test]
    fn test_zero_samples_rejected() {
        let err = SamplingAggregator::new(InputGenerator::default(), TimingHarness::default(), 0)
            .unwrap_err();
        assert_eq!(err, BenchError::InvalidSampleCount);
    }

    #[test]
    fn test_one_cell_per_algorithm() {
        let registry = AlgorithmRegistry::standard();
        let mut rng = StdRng::seed_from_u64(42);
        let cells = aggregator(3).measure_size(&registry, 500, &mut rng).unwrap();

        assert_eq!(cells.len(), registry.len());
        for cell in &cells {
            assert_eq!(cell.samples, 3);
            assert!(cell.value >= 0.0);
            assert!(cell.min <= cell.value && cell.value <= cell.max);
        }
    }

    #[test]
    fn test_single_sample_both_policies() {
        let registry = AlgorithmRegistry::standard();
        for reduction in [Reduction::Median, Reduction::Mean] {
            let mut rng = StdRng::seed_from_u64(1);
            let cells = aggregator(1)
                .with_reduction(reduction)
                .measure_size(&registry, 100, &mut rng)
                .unwrap();
            for cell in cells {
                assert_eq!(cell.samples, 1);
                assert_eq!(cell.value, cell.min);
                assert_eq!(cell.value, cell.max);
            }
        }
    }

    #[test]
    fn test_size_one() {
        let registry = AlgorithmRegistry::standard();
        let mut rng = StdRng::seed_from_u64(8);
        let cells = aggregator(2).measure_size(&registry, 1, &mut rng).unwrap();
        assert_eq!(cells.len(), 6);
    }

    #[test]
    fn test_size_zero_is_usage_error() {
        let registry = AlgorithmRegistry::standard();
        let mut rng = StdRng::seed_from_u64(8);
        let err = aggregator(2).measure_size(&registry, 0, &mut rng).unwrap_err();
        assert_eq!(err, BenchError::EmptyInput { size: 0 });
    }

    #[test]
    fn test_absent_mode() {
        let registry = AlgorithmRegistry::standard();
        let mut rng = StdRng::seed_from_u64(8);
        let cells = aggregator(2)
            .with_mode(TargetMode::Absent)
            .measure_size(&registry, 300, &mut rng)
            .unwrap();
        assert_eq!(cells.len(), 6);
    }

    #[test]
    fn test_empty_registry() {
        let mut rng = StdRng::seed_from_u64(8);
        let err = aggregator(2)
            .measure_size(&AlgorithmRegistry::new(), 10, &mut rng)
            .unwrap_err();
        assert_eq!(err, BenchError::EmptyRegistry);
    }

    #[test]
    fn test_broken_strategy_fails_verification() {
        let mut registry = AlgorithmRegistry::new();
        registry.register("Broken", Broken).unwrap();
        let mut rng = StdRng::seed_from_u64(8);

        let err = aggregator(2).measure_size(&registry, 10, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            BenchError::IncorrectResult { ref algorithm, size: 10, got: None, .. }
                if algorithm == "Broken"
        ));

        // Without verification the broken strategy is simply timed
        let cells = aggregator(2)
            .with_verification(false)
            .measure_size(&registry, 10, &mut rng)
            .unwrap();
        assert_eq!(cells.len(), 1);
    }
}
