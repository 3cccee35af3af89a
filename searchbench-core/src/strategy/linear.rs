//! Linear search: O(n), works on unsorted input.

use super::{Complexity, SearchStrategy};

/// Scans from index 0 and returns the first equal element
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSearch;

impl SearchStrategy for LinearSearch {
    fn id(&self) -> &'static str {
        "linear"
    }

    fn complexity(&self) -> Complexity {
        Complexity::Linear
    }

    fn requires_sorted(&self) -> bool {
        false
    }

    fn search(&self, haystack: &[i64], target: i64) -> Option<usize> {
        haystack.iter().position(|&value| value == target)
    }
}
