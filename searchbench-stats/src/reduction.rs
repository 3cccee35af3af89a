//! Reduction Policies
//!
//! Two interchangeable ways of collapsing S timing samples into one value.
//! Neither policy rejects outliers beyond what the median does by construction.

use serde::{Deserialize, Serialize};

/// Rule used to collapse per-sample timings into one value per size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reduction {
    /// Lower-middle element of the ascending samples
    #[default]
    Median,
    /// Arithmetic mean of all samples
    Mean,
}

impl Reduction {
    /// Apply this policy to `samples`.
    ///
    /// Returns `None` for an empty slice.
    pub fn reduce(self, samples: &[f64]) -> Option<f64> {
        match self {
            Reduction::Median => median(samples),
            Reduction::Mean => mean(samples),
        }
    }

    /// Lowercase policy name, as accepted by [`str::parse`]
    pub fn as_str(self) -> &'static str {
        match self {
            Reduction::Median => "median",
            Reduction::Mean => "mean",
        }
    }
}

impl std::fmt::Display for Reduction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Reduction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "median" => Ok(Reduction::Median),
            "mean" | "average" => Ok(Reduction::Mean),
            other => Err(format!("Unknown reduction policy: {}", other)),
        }
    }
}

/// Median of `samples`, taking index `floor((n - 1) / 2)` of the sorted values.
///
/// For an even count this is the lower of the two middle values, so the result
/// is always one of the measured samples.
pub fn median(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    Some(sorted[(sorted.len() - 1) / 2])
}

/// Arithmetic mean of `samples`
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd() {
        let samples = vec![5.0, 1.0, 3.0, 2.0, 4.0];
        assert_eq!(median(&samples), Some(3.0));
    }

    #[test]
    fn test_median_even_takes_lower_middle() {
        let samples = vec![4.0, 1.0, 3.0, 2.0];
        assert_eq!(median(&samples), Some(2.0));
    }

    #[test]
    fn test_median_ignores_single_outlier() {
        let samples = vec![100.0, 101.0, 99.0, 100.0, 50_000.0];
        assert_eq!(median(&samples), Some(100.0));
    }

    #[test]
    fn test_mean() {
        let samples = vec![1.0, 2.0, 3.0, 4.0];
        assert!((mean(&samples).unwrap() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_sample_both_policies() {
        let samples = vec![42.5];
        assert_eq!(Reduction::Median.reduce(&samples), Some(42.5));
        assert_eq!(Reduction::Mean.reduce(&samples), Some(42.5));
    }

    #[test]
    fn test_empty_samples() {
        assert_eq!(Reduction::Median.reduce(&[]), None);
        assert_eq!(Reduction::Mean.reduce(&[]), None);
    }

    #[test]
    fn test_parse_reduction() {
        assert_eq!("median".parse::<Reduction>(), Ok(Reduction::Median));
        assert_eq!("MEAN".parse::<Reduction>(), Ok(Reduction::Mean));
        assert!("mode".parse::<Reduction>().is_err());
        assert_eq!(Reduction::default(), Reduction::Median);
        assert_eq!(Reduction::Mean.to_string(), "mean");
    }
}
