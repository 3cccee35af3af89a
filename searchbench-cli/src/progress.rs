//! Sweep progress bar

use indicatif::{ProgressBar, ProgressStyle};
use searchbench_core::{SizeRow, SweepObserver};
use searchbench_report::OutputFormat;

/// Terminal progress over the sizes of a sweep
pub struct ProgressObserver {
    bar: ProgressBar,
}

impl ProgressObserver {
    /// Progress bar over `total` sizes
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Self { bar }
    }

    /// Observer that draws nothing, for machine-readable output on stdout
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Visible bar for human output, hidden when stdout carries JSON or CSV
    pub fn for_format(format: OutputFormat, total: usize) -> Self {
        match format {
            OutputFormat::Human => Self::new(total),
            OutputFormat::Json | OutputFormat::Csv => Self::hidden(),
        }
    }

    /// Whether the bar draws anything
    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }

    /// Position reached so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Close the bar
    pub fn finish(&self) {
        self.bar.finish_with_message("Complete");
    }
}

impl SweepObserver for ProgressObserver {
    fn on_size_start(&mut self, size: usize, _index: usize, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_message(format!("n = {}", size));
    }

    fn on_size_complete(&mut self, _row: &SizeRow) {
        self.bar.inc(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_completed_sizes() {
        let mut observer = ProgressObserver::hidden();
        let row = SizeRow {
            size: 10,
            cells: Vec::new(),
        };
        for index in 0..3 {
            observer.on_size_start(10, index, 3);
            observer.on_size_complete(&row);
        }
        observer.finish();
        assert_eq!(observer.position(), 3);
    }

    #[test]
    fn test_machine_formats_hide_the_bar() {
        assert!(ProgressObserver::for_format(OutputFormat::Json, 4).is_hidden());
        assert!(ProgressObserver::for_format(OutputFormat::Csv, 4).is_hidden());
    }
}
