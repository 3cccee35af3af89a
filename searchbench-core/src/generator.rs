//! Input Generation
//!
//! Uniform random sorted sequences and the samples built from them. The random
//! source is always passed in, so a fixed seed reproduces a sweep's inputs.

use crate::error::{BenchError, Result};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Default inclusive upper bound for generated values
pub const DEFAULT_UPPER_BOUND: i64 = 1_000_000;

/// Target used in absent mode; below every generated value
pub const ABSENT_TARGET: i64 = -1;

/// Which target each sample searches for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetMode {
    /// A value drawn from the sequence, so the search succeeds
    #[default]
    Found,
    /// A value guaranteed missing, so every strategy runs to exhaustion
    Absent,
}

impl TargetMode {
    /// Lowercase mode name, as accepted by [`str::parse`]
    pub fn as_str(self) -> &'static str {
        match self {
            TargetMode::Found => "found",
            TargetMode::Absent => "absent",
        }
    }
}

impl std::fmt::Display for TargetMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TargetMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "found" | "best" | "present" => Ok(TargetMode::Found),
            "absent" | "worst" | "missing" => Ok(TargetMode::Absent),
            other => Err(format!("Unknown target mode: {}", other)),
        }
    }
}

/// Produces ascending sequences of values in `[0, upper_bound]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputGenerator {
    upper_bound: i64,
}

impl Default for InputGenerator {
    fn default() -> Self {
        Self {
            upper_bound: DEFAULT_UPPER_BOUND,
        }
    }
}

impl InputGenerator {
    /// Generator with a custom inclusive upper bound
    pub fn new(upper_bound: i64) -> Result<Self> {
        if upper_bound < 0 {
            return Err(BenchError::InvalidUpperBound(upper_bound));
        }
        Ok(Self { upper_bound })
    }

    /// Inclusive upper bound of generated values
    pub fn upper_bound(&self) -> i64 {
        self.upper_bound
    }

    /// Exactly `size` uniform values in `[0, upper_bound]`, sorted ascending
    pub fn generate<R: Rng + ?Sized>(&self, size: usize, rng: &mut R) -> Vec<i64> {
        let mut values: Vec<i64> = (0..size)
            .map(|_| rng.gen_range(0..=self.upper_bound))
            .collect();
        values.sort_unstable();
        values
    }
}

/// Pick the search target for `values` under `mode`.
///
/// Fails with [`BenchError::EmptyInput`] on an empty sequence in either mode.
pub fn pick_target<R: Rng + ?Sized>(values: &[i64], mode: TargetMode, rng: &mut R) -> Result<i64> {
    let chosen = values.choose(rng).copied().ok_or(BenchError::EmptyInput {
        size: values.len(),
    })?;
    Ok(match mode {
        TargetMode::Found => chosen,
        TargetMode::Absent => ABSENT_TARGET,
    })
}

/// One owned sequence and the target searched for in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    values: Vec<i64>,
    target: i64,
}

impl Sample {
    /// Generate a fresh sequence of `size` values and pick its target
    pub fn draw<R: Rng + ?Sized>(
        generator: &InputGenerator,
        size: usize,
        mode: TargetMode,
        rng: &mut R,
    ) -> Result<Self> {
        let values = generator.generate(size, rng);
        let target = pick_target(&values, mode, rng)?;
        Ok(Self { values, target })
    }

    /// Build a sample from existing parts
    pub fn from_parts(values: Vec<i64>, target: i64) -> Self {
        Self { values, target }
    }

    /// The sequence
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// The target
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Sequence length
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
