//! Scaling Analysis
//!
//! Compares how each column's timing actually grew across the sweep with the
//! growth its declared complexity class predicts.

use searchbench_core::{Complexity, SweepTable};
use serde::{Deserialize, Serialize};

/// Observed versus predicted growth of one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthAnalysis {
    pub name: String,
    pub complexity: Complexity,
    pub from_size: usize,
    pub to_size: usize,
    /// `t(to_size) / t(from_size)`; `None` when the first timing is zero
    pub observed: Option<f64>,
    /// Ratio the complexity class predicts for the same size change
    pub expected: f64,
    /// Least-squares slope of `ln t` against `ln n`
    pub slope: Option<f64>,
}

/// One analysis per column; empty when the table has fewer than two rows
pub fn analyze_growth(table: &SweepTable) -> Vec<GrowthAnalysis> {
    let (Some(first), Some(last)) = (table.rows.first(), table.rows.last()) else {
        return Vec::new();
    };
    if table.rows.len() < 2 {
        return Vec::new();
    }

    let sizes = table.sizes();
    table
        .columns
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            let start = first.cells.get(idx).map_or(0.0, |c| c.value);
            let end = last.cells.get(idx).map_or(0.0, |c| c.value);
            let observed = (start > 0.0).then(|| end / start);
            GrowthAnalysis {
                name: column.name.clone(),
                complexity: column.complexity,
                from_size: first.size,
                to_size: last.size,
                observed,
                expected: column.complexity.expected_growth(first.size, last.size),
                slope: loglog_slope(&sizes, &table.series(idx)),
            }
        })
        .collect()
}

/// Slope of the best-fit line through `(ln size, ln time)`.
///
/// Points with a zero size or non-positive time are skipped. Needs at least two
/// distinct sizes; a linear scan lands near 1.0, a square-root one near 0.5.
pub fn loglog_slope(sizes: &[usize], times: &[f64]) -> Option<f64> {
    let points: Vec<(f64, f64)> = sizes
        .iter()
        .zip(times)
        .filter(|&(&n, &t)| n > 0 && t > 0.0 && t.is_finite())
        .map(|(&n, &t)| ((n as f64).ln(), t.ln()))
        .collect();
    if points.len() < 2 {
        return None;
    }

    let count = points.len() as f64;
    let mean_x = points.iter().map(|p| p.0).sum::<f64>() / count;
    let mean_y = points.iter().map(|p| p.1).sum::<f64>() / count;
    let sxx: f64 = points.iter().map(|p| (p.0 - mean_x).powi(2)).sum();
    if sxx == 0.0 {
        return None;
    }
    let sxy: f64 = points.iter().map(|p| (p.0 - mean_x) * (p.1 - mean_y)).sum();
    Some(sxy / sxx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_linear_column_grows_linearly() {
        let analysis = analyze_growth(&fixtures::table());
        assert_eq!(analysis.len(), 2);

        let linear = &analysis[0];
        assert_eq!(linear.from_size, 1_000);
        assert_eq!(linear.to_size, 8_000);
        assert!((linear.observed.unwrap() - 8.0).abs() < 1e-9);
        assert!((linear.expected - 8.0).abs() < 1e-9);
        assert!((linear.slope.unwrap() - 1.0).abs() < 1e-9);

        let binary = &analysis[1];
        assert!(binary.observed.unwrap() < 2.0);
        assert!(binary.slope.unwrap() < 0.5);
    }

    #[test]
    fn test_single_row_has_no_analysis() {
        let mut table = fixtures::table();
        table.rows.truncate(1);
        assert!(analyze_growth(&table).is_empty());
    }

    #[test]
    fn test_zero_start_has_no_ratio() {
        let mut table = fixtures::table();
        table.rows[0].cells[0].value = 0.0;
        let analysis = analyze_growth(&table);
        assert_eq!(analysis[0].observed, None);
        // The zero point is dropped from the fit, three points remain
        assert!(analysis[0].slope.is_some());
    }

    #[test]
    fn test_slope_needs_two_sizes() {
        assert_eq!(loglog_slope(&[10], &[5.0]), None);
        assert_eq!(loglog_slope(&[10, 10], &[5.0, 6.0]), None);
        let slope = loglog_slope(&[100, 400], &[10.0, 20.0]).unwrap();
        assert!((slope - 0.5).abs() < 1e-9);
    }
}
