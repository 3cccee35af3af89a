//! Sweep Execution
//!
//! Turns resolved [`RunSettings`] into a finished table. Every run is seeded:
//! an explicit seed is used as is, otherwise one is drawn from entropy and
//! recorded so the inputs can be regenerated.

use crate::settings::{RunSettings, SizePlan};
use rand::SeedableRng;
use rand::rngs::StdRng;
use searchbench_core::{AlgorithmRegistry, SweepDriver, SweepObserver, SweepTable};
use std::time::Instant;

/// Outcome of one measuring run
#[derive(Debug, Clone)]
pub struct Execution {
    pub table: SweepTable,
    /// Seed the input generator ran with
    pub seed: u64,
    pub duration_ms: f64,
}

/// Measure every size of `settings` with the strategies in `registry`
pub fn execute(
    settings: &RunSettings,
    registry: &AlgorithmRegistry,
    observer: &mut dyn SweepObserver,
) -> searchbench_core::Result<Execution> {
    let aggregator = settings.aggregator()?;
    let seed = settings.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let driver = SweepDriver::new(registry, &aggregator);

    tracing::debug!(seed, sizes = settings.sizes.len(), algorithms = registry.len(), "starting run");
    let start = Instant::now();
    let table = match &settings.sizes {
        SizePlan::Range(range) => driver.run(range, &mut rng, observer)?,
        SizePlan::List(sizes) => driver.run_sizes(sizes, &mut rng, observer)?,
    };

    Ok(Execution {
        table,
        seed,
        duration_ms: start.elapsed().as_secs_f64() * 1000.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use searchbench_core::{BenchError, NoopObserver, Reduction, SweepRange, TargetMode};

    fn settings(sizes: SizePlan) -> RunSettings {
        RunSettings {
            sizes,
            samples: 2,
            reduction: Reduction::Median,
            repetitions: 5,
            mode: TargetMode::Found,
            upper_bound: 1_000,
            seed: Some(17),
            verify: true,
            pin_cpu: None,
        }
    }

    #[test]
    fn test_range_run() {
        let range = SweepRange {
            min: 100,
            max: 300,
            step: 100,
        };
        let execution = execute(
            &settings(SizePlan::Range(range)),
            &AlgorithmRegistry::standard(),
            &mut NoopObserver,
        )
        .unwrap();

        assert_eq!(execution.seed, 17);
        assert_eq!(execution.table.sizes(), vec![100, 200, 300]);
        assert_eq!(execution.table.settings.upper_bound, 1_000);
        assert!(execution.duration_ms >= 0.0);
    }

    #[test]
    fn test_list_run() {
        let execution = execute(
            &settings(SizePlan::List(vec![50, 75])),
            &AlgorithmRegistry::standard(),
            &mut NoopObserver,
        )
        .unwrap();
        assert_eq!(execution.table.sizes(), vec![50, 75]);
    }

    #[test]
    fn test_unseeded_run_records_seed() {
        let mut unseeded = settings(SizePlan::List(vec![10]));
        unseeded.seed = None;
        let execution =
            execute(&unseeded, &AlgorithmRegistry::standard(), &mut NoopObserver).unwrap();
        assert_eq!(execution.table.len(), 1);

        // Re-running with the recorded seed is accepted
        unseeded.seed = Some(execution.seed);
        assert!(execute(&unseeded, &AlgorithmRegistry::standard(), &mut NoopObserver).is_ok());
    }

    #[test]
    fn test_invalid_range() {
        let range = SweepRange {
            min: 10,
            max: 5,
            step: 1,
        };
        let err = execute(
            &settings(SizePlan::Range(range)),
            &AlgorithmRegistry::standard(),
            &mut NoopObserver,
        )
        .unwrap_err();
        assert!(matches!(err, BenchError::InvalidRange { min: 10, max: 5, step: 1 }));
    }
}
