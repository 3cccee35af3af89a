//! Timing Harness
//!
//! Times one strategy on one sample. A single search call on a few thousand
//! elements finishes well under a microsecond, close to the clock's resolution,
//! so the harness runs the same call R times back to back, times the whole
//! batch once and divides by R.
//!
//! The sample is borrowed immutably for the whole batch. A panicking strategy
//! is not caught; the panic unwinds to whoever started the sweep.

use crate::error::{BenchError, Result};
use crate::generator::Sample;
use crate::measure::Timer;
use crate::strategy::SearchStrategy;

/// Default number of calls per timed batch
pub const DEFAULT_REPETITIONS: u32 = 1000;

/// Batch-timing of a single strategy call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingHarness {
    repetitions: u32,
}

impl Default for TimingHarness {
    fn default() -> Self {
        Self {
            repetitions: DEFAULT_REPETITIONS,
        }
    }
}

impl TimingHarness {
    /// Harness running `repetitions` calls per batch
    pub fn new(repetitions: u32) -> Result<Self> {
        if repetitions == 0 {
            return Err(BenchError::InvalidRepetitions);
        }
        Ok(Self { repetitions })
    }

    /// Calls per batch
    pub fn repetitions(&self) -> u32 {
        self.repetitions
    }

    /// Estimated nanoseconds for one `strategy.search(haystack, target)` call.
    ///
    /// Never negative; zero only if the whole batch fit inside one clock tick.
    #[inline]
    pub fn time(&self, strategy: &dyn SearchStrategy, haystack: &[i64], target: i64) -> f64 {
        let timer = Timer::start();

        for _ in 0..self.repetitions {
            let _ = std::hint::black_box(
                strategy.search(std::hint::black_box(haystack), std::hint::black_box(target)),
            );
        }

        let total_nanos = timer.stop();

        // f64 keeps sub-nanosecond resolution for fast calls
        let per_call = total_nanos as f64 / f64::from(self.repetitions);
        tracing::trace!(
            strategy = strategy.id(),
            len = haystack.len(),
            total_nanos,
            per_call,
            "timed batch"
        );
        per_call
    }

    /// [`TimingHarness::time`] over a sample's sequence and target
    #[inline]
    pub fn time_sample(&self, strategy: &dyn SearchStrategy, sample: &Sample) -> f64 {
        self.time(strategy, sample.values(), sample.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{BinarySearch, Complexity, LinearSearch};
    use std::sync::atomic::{AtomicU32, Ordering};

    struct Counting {
        calls: AtomicU32,
    }

    impl SearchStrategy for Counting {
        fn id(&self) -> &'static str {
            "counting"
        }
        fn complexity(&self) -> Complexity {
            Complexity::Constant
        }
        fn search(&self, _haystack: &[i64], _target: i64) -> Option<usize> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            None
        }
    }

    struct Exploding;

    impl SearchStrategy for Exploding {
        fn id(&self) -> &'static str {
            "exploding"
        }
        fn complexity(&self) -> Complexity {
            Complexity::Constant
        }
        fn search(&self, _haystack: &[i64], _target: i64) -> Option<usize> {
            panic!("strategy fault")
        }
    }

    #[test]
    fn test_zero_repetitions_rejected() {
        assert_eq!(TimingHarness::new(0), Err(BenchError::InvalidRepetitions));
        assert_eq!(TimingHarness::default().repetitions(), DEFAULT_REPETITIONS);
    }

    #[test]
    fn test_runs_exactly_r_calls() {
        let strategy = Counting {
            calls: AtomicU32::new(0),
        };
        let harness = TimingHarness::new(250).unwrap();
        harness.time(&strategy, &[1, 2, 3], 2);
        assert_eq!(strategy.calls.load(Ordering::Relaxed), 250);
    }

    #[test]
    fn test_time_is_non_negative() {
        let haystack: Vec<i64> = (0..1024).collect();
        let harness = TimingHarness::new(100).unwrap();
        for _ in 0..10 {
            let t = harness.time(&BinarySearch, &haystack, 512);
            assert!(t >= 0.0 && t.is_finite());
        }
    }

    #[test]
    fn test_linear_slower_than_binary_on_large_input() {
        let haystack: Vec<i64> = (0..200_000).collect();
        let harness = TimingHarness::new(50).unwrap();
        let target = haystack[haystack.len() - 1];
        let linear = harness.time(&LinearSearch, &haystack, target);
        let binary = harness.time(&BinarySearch, &haystack, target);
        assert!(linear > binary, "linear {} vs binary {}", linear, binary);
    }

    #[test]
    fn test_time_sample() {
        let sample = Sample::from_parts(vec![1, 3, 5], 3);
        let t = TimingHarness::new(10).unwrap().time_sample(&BinarySearch, &sample);
        assert!(t >= 0.0);
    }

    #[test]
    #[should_panic(expected = "strategy fault")]
    fn test_strategy_panic_propagates() {
        TimingHarness::new(1).unwrap().time(&Exploding, &[1], 1);
    }
}
