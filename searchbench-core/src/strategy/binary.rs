//! Binary search: O(log n) over inclusive bounds.

use super::{Complexity, SearchStrategy};
use std::cmp::Ordering;

/// Halves the inclusive range `[left, right]` around `(left + right) / 2`
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySearch;

impl SearchStrategy for BinarySearch {
    fn id(&self) -> &'static str {
        "binary"
    }

    fn complexity(&self) -> Complexity {
        Complexity::Logarithmic
    }

    fn search(&self, haystack: &[i64], target: i64) -> Option<usize> {
        if haystack.is_empty() {
            return None;
        }
        bounded_binary_search(haystack, target, 0, haystack.len() - 1)
    }
}

/// Binary search restricted to the inclusive index range `[left, right]`.
///
/// `right` must be a valid index. Shared with exponential search.
pub(crate) fn bounded_binary_search(
    haystack: &[i64],
    target: i64,
    mut left: usize,
    mut right: usize,
) -> Option<usize> {
    while left <= right {
        let mid = left + (right - left) / 2;
        match haystack[mid].cmp(&target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => {
                // bounds would invert below index 0
                if mid == 0 {
                    return None;
                }
                right = mid - 1;
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_hit() {
        assert_eq!(BinarySearch.search(&[1, 2, 3, 4, 5], 3), Some(2));
    }

    #[test]
    fn test_extremes() {
        let haystack: Vec<i64> = (0..100).collect();
        assert_eq!(BinarySearch.search(&haystack, 0), Some(0));
        assert_eq!(BinarySearch.search(&haystack, 99), Some(99));
        assert_eq!(BinarySearch.search(&haystack, -5), None);
        assert_eq!(BinarySearch.search(&haystack, 100), None);
    }

    #[test]
    fn test_bounded_range() {
        let haystack = [1, 3, 5, 7, 9, 11];
        assert_eq!(bounded_binary_search(&haystack, 7, 2, 4), Some(3));
        assert_eq!(bounded_binary_search(&haystack, 1, 2, 4), None);
    }
}
