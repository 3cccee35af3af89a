//! Jump search: O(√n) block jumps followed by a scan inside one block.

use super::{Complexity, SearchStrategy, isqrt};

/// Jumps in blocks of `floor(sqrt(n))` until a block's last element reaches
/// the target, then scans that block linearly
#[derive(Debug, Clone, Copy, Default)]
pub struct JumpSearch;

impl SearchStrategy for JumpSearch {
    fn id(&self) -> &'static str {
        "jump"
    }

    fn complexity(&self) -> Complexity {
        Complexity::SquareRoot
    }

    fn search(&self, haystack: &[i64], target: i64) -> Option<usize> {
        let n = haystack.len();
        if n == 0 {
            return None;
        }

        let block = isqrt(n);
        let mut prev = 0;
        let mut step = block;
        while haystack[step.min(n) - 1] < target {
            prev = step;
            step += block;
            if prev >= n {
                return None;
            }
        }

        (prev..step.min(n)).find(|&i| haystack[i] == target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_in_last_partial_block() {
        // n = 10, block = 3: blocks [0..3), [3..6), [6..9), [9..10)
        let haystack: Vec<i64> = (0..10).map(|i| i * 10).collect();
        assert_eq!(JumpSearch.search(&haystack, 90), Some(9));
        assert_eq!(JumpSearch.search(&haystack, 60), Some(6));
    }

    #[test]
    fn test_target_beyond_maximum() {
        let haystack: Vec<i64> = (0..10).collect();
        assert_eq!(JumpSearch.search(&haystack, 50), None);
    }

    #[test]
    fn test_gap_inside_block() {
        assert_eq!(JumpSearch.search(&[1, 2, 4, 5, 6, 8, 9, 10, 12], 7), None);
    }
}
