//! Cell Summary
//!
//! One cell of the sweep table: the reduced timing for one algorithm at one
//! size, plus the extremes and dispersion of the samples it was reduced from.
//! Raw samples are not kept past this point.

use crate::reduction::Reduction;
use serde::{Deserialize, Serialize};

/// Summary of the S timings of one algorithm at one input size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellSummary {
    /// Reduced per-call time in nanoseconds (median or mean)
    pub value: f64,
    /// Fastest sample
    pub min: f64,
    /// Slowest sample
    pub max: f64,
    /// Sample standard deviation (0 for a single sample)
    pub std_dev: f64,
    /// Number of samples the cell was reduced from
    pub samples: usize,
}

/// Summarize `samples` with the given reduction policy.
///
/// Returns `None` when there are no samples.
pub fn summarize(samples: &[f64], reduction: Reduction) -> Option<CellSummary> {
    let value = reduction.reduce(samples)?;

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let std_dev = if samples.len() < 2 {
        0.0
    } else {
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        let variance =
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (samples.len() - 1) as f64;
        variance.sqrt()
    };

    Some(CellSummary {
        value,
        min,
        max,
        std_dev,
        samples: samples.len(),
    })
}

impl CellSummary {
    /// Coefficient of variation in percent, relative to the reduced value
    pub fn coefficient_of_variation(&self) -> f64 {
        if self.value == 0.0 {
            0.0
        } else {
            (self.std_dev / self.value) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_summary() {
        let samples = vec![3.0, 1.0, 2.0, 5.0, 4.0];
        let cell = summarize(&samples, Reduction::Median).unwrap();

        assert_eq!(cell.value, 3.0);
        assert_eq!(cell.min, 1.0);
        assert_eq!(cell.max, 5.0);
        assert_eq!(cell.samples, 5);
        assert!(cell.std_dev > 1.0 && cell.std_dev < 2.0);
    }

    #[test]
    fn test_mean_summary_includes_outlier() {
        let samples = vec![10.0, 10.0, 10.0, 70.0];
        let cell = summarize(&samples, Reduction::Mean).unwrap();
        assert!((cell.value - 25.0).abs() < f64::EPSILON);
        assert_eq!(cell.max, 70.0);
    }

    #[test]
    fn test_single_sample() {
        let cell = summarize(&[7.0], Reduction::Mean).unwrap();
        assert_eq!(cell.value, 7.0);
        assert_eq!(cell.min, 7.0);
        assert_eq!(cell.max, 7.0);
        assert_eq!(cell.std_dev, 0.0);
    }

    #[test]
    fn test_empty_samples() {
        assert!(summarize(&[], Reduction::Median).is_none());
    }

    #[test]
    fn test_coefficient_of_variation() {
        let cell = summarize(&[100.0, 100.0, 100.0], Reduction::Median).unwrap();
        assert!((cell.coefficient_of_variation() - 0.0).abs() < f64::EPSILON);
    }
}
