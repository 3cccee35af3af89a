#![warn(missing_docs)]
//! SearchBench Report - Output and Charts
//!
//! Renders a finished sweep in several forms:
//! - Fixed-width text table with a scaling summary (terminal)
//! - JSON (machine-readable, full report)
//! - CSV (spreadsheet-compatible)
//! - SVG charts: linear line chart, log-log line chart, grouped bars
//!
//! All renderers take the report by reference; a failing renderer never
//! invalidates the table or the other outputs.

mod chart;
mod csv;
mod growth;
mod json;
mod report;
mod text;

pub use chart::{
    ChartOptions, Scale, Theme, default_bar_sizes, render_bar_chart, render_line_chart,
    write_charts,
};
pub use csv::generate_csv_report;
pub use growth::{GrowthAnalysis, analyze_growth, loglog_slope};
pub use json::generate_json_report;
pub use report::{REPORT_SCHEMA_VERSION, Report, ReportMeta, SystemInfo};
pub use text::generate_text_report;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON with full metadata
    Json,
    /// CSV for spreadsheets
    Csv,
    /// Human-readable terminal output
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "human" | "text" | "table" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Format a nanosecond value with a readable unit
pub fn format_duration(nanos: f64) -> String {
    if nanos < 1_000.0 {
        format!("{:.2} ns", nanos)
    } else if nanos < 1_000_000.0 {
        format!("{:.2} µs", nanos / 1_000.0)
    } else if nanos < 1_000_000_000.0 {
        format!("{:.2} ms", nanos / 1_000_000.0)
    } else {
        format!("{:.2} s", nanos / 1_000_000_000.0)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use searchbench_core::{
        CellSummary, Column, Complexity, Reduction, SizeRow, SweepSettings, SweepTable, TargetMode,
    };

    fn cell(value: f64) -> CellSummary {
        CellSummary {
            value,
            min: value * 0.9,
            max: value * 1.2,
            std_dev: value * 0.05,
            samples: 7,
        }
    }

    /// Two columns: linear growth and logarithmic growth
    pub(crate) fn table() -> SweepTable {
        let sizes = [1_000usize, 2_000, 4_000, 8_000];
        SweepTable {
            columns: vec![
                Column {
                    name: "Linear Search".to_string(),
                    id: "linear".to_string(),
                    complexity: Complexity::Linear,
                },
                Column {
                    name: "Binary Search".to_string(),
                    id: "binary".to_string(),
                    complexity: Complexity::Logarithmic,
                },
            ],
            rows: sizes
                .iter()
                .map(|&size| SizeRow {
                    size,
                    cells: vec![cell(size as f64 * 0.5), cell((size as f64).log2() * 2.0)],
                })
                .collect(),
            settings: SweepSettings {
                samples: 7,
                repetitions: 1000,
                reduction: Reduction::Median,
                mode: TargetMode::Found,
                upper_bound: 1_000_000,
            },
        }
    }
}
