//! Exponential search: doubling probe, then a bounded binary search.

use super::binary::bounded_binary_search;
use super::{Complexity, SearchStrategy};

/// Doubles a probe index while the probed element is `<= target`, then binary
/// searches the bracket `[probe / 2, min(probe, n - 1)]`
#[derive(Debug, Clone, Copy, Default)]
pub struct ExponentialSearch;

impl SearchStrategy for ExponentialSearch {
    fn id(&self) -> &'static str {
        "exponential"
    }

    fn complexity(&self) -> Complexity {
        Complexity::Logarithmic
    }

    fn search(&self, haystack: &[i64], target: i64) -> Option<usize> {
        let n = haystack.len();
        if n == 0 {
            return None;
        }
        if haystack[0] == target {
            return Some(0);
        }

        let mut probe = 1;
        while probe < n && haystack[probe] <= target {
            probe *= 2;
        }

        bounded_binary_search(haystack, target, probe / 2, probe.min(n - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_element_short_circuit() {
        assert_eq!(ExponentialSearch.search(&[3, 3, 3, 3], 3), Some(0));
    }

    #[test]
    fn test_probe_past_end() {
        let haystack: Vec<i64> = (0..37).collect();
        assert_eq!(ExponentialSearch.search(&haystack, 36), Some(36));
        assert_eq!(ExponentialSearch.search(&haystack, 37), None);
    }

    #[test]
    fn test_power_of_two_positions() {
        let haystack: Vec<i64> = (0..64).map(|i| i * 3).collect();
        for idx in [1usize, 2, 4, 8, 16, 32, 63] {
            assert_eq!(ExponentialSearch.search(&haystack, haystack[idx]), Some(idx));
        }
    }
}
