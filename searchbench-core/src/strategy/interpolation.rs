//! Interpolation search: probes where the target should sit if values were
//! uniformly spread. O(log log n) on uniform data, O(n) on adversarial data.

use super::{Complexity, SearchStrategy};
use std::cmp::Ordering;

/// Estimates the probe position by linear interpolation between the bound
/// values instead of taking the midpoint
#[derive(Debug, Clone, Copy, Default)]
pub struct InterpolationSearch;

impl SearchStrategy for InterpolationSearch {
    fn id(&self) -> &'static str {
        "interpolation"
    }

    fn complexity(&self) -> Complexity {
        Complexity::LogLog
    }

    fn search(&self, haystack: &[i64], target: i64) -> Option<usize> {
        if haystack.is_empty() {
            return None;
        }

        let mut left = 0usize;
        let mut right = haystack.len() - 1;

        while left <= right && haystack[left] <= target && target <= haystack[right] {
            if left == right {
                return (haystack[left] == target).then_some(left);
            }

            let low = haystack[left];
            let high = haystack[right];
            if low == high {
                // low <= target <= high with low == high
                return Some(left);
            }

            let offset = (target as i128 - low as i128) * (right - left) as i128
                / (high as i128 - low as i128);
            let pos = (left as i128 + offset).clamp(left as i128, right as i128) as usize;

            match haystack[pos].cmp(&target) {
                Ordering::Equal => return Some(pos),
                Ordering::Less => left = pos + 1,
                Ordering::Greater => {
                    if pos == 0 {
                        return None;
                    }
                    right = pos - 1;
                }
            }
        }
        None
    }
}
