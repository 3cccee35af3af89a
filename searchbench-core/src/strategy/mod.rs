//! Search Strategies
//!
//! Every algorithm under test implements [`SearchStrategy`]: a pure lookup from
//! a borrowed sequence and a target to an optional position. Strategies other
//! than [`LinearSearch`] assume the sequence is sorted ascending; that
//! precondition is the caller's to uphold and is not checked here.

mod binary;
mod exponential;
mod interpolation;
mod jump;
mod linear;
mod ternary;

pub use binary::BinarySearch;
pub use exponential::ExponentialSearch;
pub use interpolation::InterpolationSearch;
pub use jump::JumpSearch;
pub use linear::LinearSearch;
pub use ternary::TernarySearch;

use serde::{Deserialize, Serialize};

/// A search algorithm under test
pub trait SearchStrategy: Send + Sync {
    /// Short identifier (e.g. `"binary"`), used for CLI selection
    fn id(&self) -> &'static str;

    /// Theoretical average-case cost class
    fn complexity(&self) -> Complexity;

    /// Whether the strategy assumes ascending input
    fn requires_sorted(&self) -> bool {
        true
    }

    /// Position of an element equal to `target`, or `None` if there is none
    fn search(&self, haystack: &[i64], target: i64) -> Option<usize>;
}

/// Asymptotic cost class used to set expectations for measured growth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Complexity {
    /// O(1)
    Constant,
    /// O(log log n)
    LogLog,
    /// O(log n)
    Logarithmic,
    /// O(√n)
    SquareRoot,
    /// O(n)
    Linear,
}

impl Complexity {
    /// Big-O label for reports
    pub fn label(self) -> &'static str {
        match self {
            Complexity::Constant => "O(1)",
            Complexity::LogLog => "O(log log n)",
            Complexity::Logarithmic => "O(log n)",
            Complexity::SquareRoot => "O(√n)",
            Complexity::Linear => "O(n)",
        }
    }

    /// Model cost at input size `n` (arbitrary unit, only ratios matter)
    pub fn cost(self, n: usize) -> f64 {
        let n = (n as f64).max(2.0);
        match self {
            Complexity::Constant => 1.0,
            Complexity::LogLog => n.log2().log2().max(1.0),
            Complexity::Logarithmic => n.log2(),
            Complexity::SquareRoot => n.sqrt(),
            Complexity::Linear => n,
        }
    }

    /// Growth factor this class predicts when the size goes from `from` to `to`
    pub fn expected_growth(self, from: usize, to: usize) -> f64 {
        self.cost(to) / self.cost(from)
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Floor of the square root of `n`
pub(crate) fn isqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    // f64 rounding can be off by one for large n
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}
