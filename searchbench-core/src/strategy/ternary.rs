//! Ternary search: O(log₃ n) with two probes per round.

use super::{Complexity, SearchStrategy};

/// Splits `[left, right]` at `left + (right - left) / 3` and
/// `right - (right - left) / 3` and keeps one of the three parts
#[derive(Debug, Clone, Copy, Default)]
pub struct TernarySearch;

impl SearchStrategy for TernarySearch {
    fn id(&self) -> &'static str {
        "ternary"
    }

    fn complexity(&self) -> Complexity {
        Complexity::Logarithmic
    }

    fn search(&self, haystack: &[i64], target: i64) -> Option<usize> {
        if haystack.is_empty() {
            return None;
        }

        let mut left = 0usize;
        let mut right = haystack.len() - 1;

        while left <= right {
            let third = (right - left) / 3;
            let mid1 = left + third;
            let mid2 = right - third;

            if haystack[mid1] == target {
                return Some(mid1);
            }
            if haystack[mid2] == target {
                return Some(mid2);
            }

            if target < haystack[mid1] {
                if mid1 == 0 {
                    return None;
                }
                right = mid1 - 1;
            } else if target > haystack[mid2] {
                left = mid2 + 1;
            } else {
                // haystack[mid1] < target < haystack[mid2], so mid1 < mid2
                left = mid1 + 1;
                right = mid2 - 1;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_hits() {
        let haystack: Vec<i64> = (0..10).collect();
        assert_eq!(TernarySearch.search(&haystack, 3), Some(3));
        assert_eq!(TernarySearch.search(&haystack, 6), Some(6));
    }

    #[test]
    fn test_interior_range() {
        let haystack: Vec<i64> = (0..100).map(|i| i * 2).collect();
        for (idx, &value) in haystack.iter().enumerate() {
            assert_eq!(TernarySearch.search(&haystack, value), Some(idx));
            assert_eq!(TernarySearch.search(&haystack, value + 1), None);
        }
    }

    #[test]
    fn test_below_minimum() {
        assert_eq!(TernarySearch.search(&[5, 6, 7], 1), None);
    }
}
