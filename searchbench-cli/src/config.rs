//! Configuration loading from searchbench.toml
//!
//! SearchBench configuration can be specified in a `searchbench.toml` file in the
//! project root. The configuration is automatically discovered by walking up from
//! the current directory. Command-line flags override file values.

use searchbench_core::{DEFAULT_REPETITIONS, DEFAULT_UPPER_BOUND, Reduction, TargetMode};
use searchbench_report::{ChartOptions, Theme};
use searchbench_stats::DEFAULT_SAMPLES_PER_SIZE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up by [`SearchConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "searchbench.toml";

/// SearchBench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchConfig {
    /// Range sweep settings
    #[serde(default)]
    pub sweep: SweepConfig,
    /// Explicit size list settings
    #[serde(default)]
    pub compare: CompareConfig,
    /// Runner settings
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Chart configuration
    #[serde(default)]
    pub visuals: VisualsConfig,
}

/// Range sweep configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Smallest input size
    #[serde(default = "default_min")]
    pub min: usize,
    /// Largest input size (inclusive)
    #[serde(default = "default_max")]
    pub max: usize,
    /// Distance between consecutive sizes
    #[serde(default = "default_step")]
    pub step: usize,
    /// Samples drawn per size
    #[serde(default = "default_samples")]
    pub samples: usize,
    /// Reduction over each size's samples: "median" or "mean"
    #[serde(default)]
    pub reduction: Reduction,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
            step: default_step(),
            samples: default_samples(),
            reduction: Reduction::default(),
        }
    }
}

fn default_min() -> usize {
    10_000
}
fn default_max() -> usize {
    50_000
}
fn default_step() -> usize {
    10_000
}
fn default_samples() -> usize {
    DEFAULT_SAMPLES_PER_SIZE
}

/// Explicit size list configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Sizes measured when `compare` gets no `--sizes`
    #[serde(default = "default_compare_sizes")]
    pub sizes: Vec<usize>,
    /// Samples drawn per size
    #[serde(default = "default_compare_samples")]
    pub samples: usize,
    /// Reduction over each size's samples
    #[serde(default = "default_compare_reduction")]
    pub reduction: Reduction,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            sizes: default_compare_sizes(),
            samples: default_compare_samples(),
            reduction: default_compare_reduction(),
        }
    }
}

fn default_compare_sizes() -> Vec<usize> {
    (10_000..=40_000).step_by(5_000).collect()
}
fn default_compare_samples() -> usize {
    5
}
fn default_compare_reduction() -> Reduction {
    Reduction::Mean
}

/// Runner configuration shared by every measuring command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Calls per timed batch
    #[serde(default = "default_repetitions")]
    pub repetitions: u32,
    /// Target mode: "found" (best case) or "absent" (worst case)
    #[serde(default)]
    pub mode: TargetMode,
    /// Inclusive upper bound of generated values
    #[serde(default = "default_upper_bound")]
    pub upper_bound: i64,
    /// Fixed RNG seed; fresh entropy when unset
    #[serde(default)]
    pub seed: Option<u64>,
    /// Check every answer before timing it
    #[serde(default = "default_verify")]
    pub verify: bool,
    /// Pin the measuring thread to this CPU
    #[serde(default)]
    pub pin_cpu: Option<usize>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            repetitions: default_repetitions(),
            mode: TargetMode::default(),
            upper_bound: default_upper_bound(),
            seed: None,
            verify: default_verify(),
            pin_cpu: None,
        }
    }
}

fn default_repetitions() -> u32 {
    DEFAULT_REPETITIONS
}
fn default_upper_bound() -> i64 {
    DEFAULT_UPPER_BOUND
}
fn default_verify() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human", "json", "csv"
    #[serde(default = "default_format")]
    pub format: String,
    /// Directory charts are written to
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// Write SVG charts after each measuring run
    #[serde(default = "default_plots")]
    pub plots: bool,
    /// Append a UTC timestamp to chart file names
    #[serde(default = "default_timestamped")]
    pub timestamped: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            directory: default_output_dir(),
            plots: default_plots(),
            timestamped: default_timestamped(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}
fn default_output_dir() -> String {
    "target/searchbench".to_string()
}
fn default_plots() -> bool {
    true
}
fn default_timestamped() -> bool {
    true
}

/// Chart configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualsConfig {
    /// Color theme: "light" or "dark"
    #[serde(default)]
    pub theme: Theme,
    /// Chart width in pixels
    #[serde(default = "default_width")]
    pub width: u32,
    /// Chart height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
    /// Sizes in the bar chart; empty picks smallest, middle and largest
    #[serde(default)]
    pub bar_sizes: Vec<usize>,
}

impl Default for VisualsConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            width: default_width(),
            height: default_height(),
            bar_sizes: Vec::new(),
        }
    }
}

fn default_width() -> u32 {
    960
}
fn default_height() -> u32 {
    600
}

impl SearchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let start = std::env::current_dir().ok()?;
        let path = Self::find_from(&start)?;
        match Self::load(&path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded configuration");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid configuration");
                None
            }
        }
    }

    /// First `searchbench.toml` found in `start` or one of its ancestors
    pub fn find_from(start: &Path) -> Option<PathBuf> {
        let mut dir = start.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Chart options derived from `[visuals]` and `[output]`
    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            width: self.visuals.width,
            height: self.visuals.height,
            theme: self.visuals.theme,
            bar_sizes: self.visuals.bar_sizes.clone(),
            timestamped: self.output.timestamped,
            ..ChartOptions::default()
        }
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# SearchBench Configuration

[sweep]
# Sizes min, min + step, ... up to max (inclusive)
min = 10000
max = 50000
step = 10000
# Samples drawn per size
samples = 7
# Reduction over each size's samples: median or mean
reduction = "median"

[compare]
# Sizes measured by `searchbench compare` without --sizes
sizes = [10000, 15000, 20000, 25000, 30000, 35000, 40000]
samples = 5
reduction = "mean"

[runner]
# Calls per timed batch
repetitions = 1000
# Target mode: found (best case) or absent (worst case)
mode = "found"
# Generated values lie in [0, upper_bound]
upper_bound = 1000000
# Fixed RNG seed (uncomment to enable)
# seed = 42
# Check every answer before timing it
verify = true
# Pin the measuring thread to one CPU (uncomment to enable)
# pin_cpu = 0

[output]
# Default output format: human, json, csv
format = "human"
# Directory charts are written to
directory = "target/searchbench"
# Write SVG charts after each run
plots = true
# Append a UTC timestamp to chart file names
timestamped = true

[visuals]
# Color theme: light or dark
theme = "light"
# Chart dimensions
width = 960
height = 600
# Bar chart sizes (uncomment to override smallest, middle, largest)
# bar_sizes = [10000, 30000, 50000]
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.sweep.min, 10_000);
        assert_eq!(config.sweep.max, 50_000);
        assert_eq!(config.sweep.step, 10_000);
        assert_eq!(config.sweep.samples, 7);
        assert_eq!(config.sweep.reduction, Reduction::Median);
        assert_eq!(config.compare.samples, 5);
        assert_eq!(config.compare.reduction, Reduction::Mean);
        assert_eq!(config.compare.sizes.len(), 7);
        assert_eq!(config.runner.repetitions, 1000);
        assert_eq!(config.runner.upper_bound, 1_000_000);
        assert!(config.runner.verify);
        assert!(config.output.plots);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [sweep]
            min = 100
            max = 500
            reduction = "mean"

            [runner]
            mode = "absent"
            seed = 9

            [visuals]
            theme = "dark"
        "#;

        let config: SearchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.sweep.min, 100);
        assert_eq!(config.sweep.max, 500);
        assert_eq!(config.sweep.reduction, Reduction::Mean);
        assert_eq!(config.runner.mode, TargetMode::Absent);
        assert_eq!(config.runner.seed, Some(9));
        assert_eq!(config.visuals.theme, Theme::Dark);
        // Defaults should still apply
        assert_eq!(config.sweep.step, 10_000);
        assert_eq!(config.output.format, "human");
    }

    #[test]
    fn test_invalid_reduction_rejected() {
        let result: Result<SearchConfig, _> = toml::from_str("[sweep]\nreduction = \"mode\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_toml_parses() {
        let config: SearchConfig = toml::from_str(&SearchConfig::default_toml()).unwrap();
        let defaults = SearchConfig::default();
        assert_eq!(config.sweep.min, defaults.sweep.min);
        assert_eq!(config.compare.sizes, defaults.compare.sizes);
        assert_eq!(config.runner.seed, None);
        assert_eq!(config.visuals.width, defaults.visuals.width);
    }

    #[test]
    fn test_find_from_walks_up() {
        let root = std::env::temp_dir().join(format!("searchbench-config-{}", std::process::id()));
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.join(CONFIG_FILE_NAME), "[sweep]\nmin = 42\n").unwrap();

        let found = SearchConfig::find_from(&nested).unwrap();
        assert_eq!(found, root.join(CONFIG_FILE_NAME));
        assert_eq!(SearchConfig::load(&found).unwrap().sweep.min, 42);

        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_chart_options() {
        let mut config = SearchConfig::default();
        config.output.timestamped = false;
        config.visuals.bar_sizes = vec![1, 2];
        let options = config.chart_options();
        assert!(!options.timestamped);
        assert_eq!(options.bar_sizes, vec![1, 2]);
        assert_eq!(options.width, 960);
    }
}
