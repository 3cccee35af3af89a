#![warn(missing_docs)]
//! SearchBench CLI Library
//!
//! Command-line driver around the sweep engine. Use `searchbench::run()` (or
//! `searchbench_cli::run()`) in a main function to get the full CLI.
//!
//! ```text
//!   searchbench.toml ─┐
//!                     ├─> RunSettings ─> execute ─> Report ─┬─> text / json / csv
//!   command line ─────┘        ▲                            └─> SVG charts
//!                              │
//!   registry ─> planner ───────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     searchbench_cli::run()
//! }
//! ```

mod config;
mod execution;
mod metadata;
mod planner;
mod progress;
mod settings;

pub use config::*;
pub use execution::{Execution, execute};
pub use metadata::build_report_meta;
pub use planner::build_plan;
pub use progress::ProgressObserver;
pub use settings::{RunSettings, SizePlan};

use anyhow::Context;
use clap::{Parser, Subcommand};
use regex::Regex;
use searchbench_core::{AlgorithmRegistry, Reduction, TargetMode, pin_to_cpu};
use searchbench_report::{
    OutputFormat, Report, generate_csv_report, generate_json_report, generate_text_report,
    write_charts,
};
use std::io::Write;
use std::path::{Path, PathBuf};

/// SearchBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "searchbench")]
#[command(
    author,
    version,
    about = "SearchBench - scaling benchmarks for search algorithms over sorted data"
)]
pub struct Cli {
    /// Optional subcommand (Sweep, Compare, List, Init); defaults to Sweep
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Filter algorithms by regex pattern (matched against name and id)
    #[arg(default_value = ".*")]
    pub filter: String,

    /// Measure exactly these algorithms, in this order (names or ids)
    #[arg(long, value_delimiter = ',', global = true)]
    pub algorithms: Vec<String>,

    /// Smallest input size of a sweep
    #[arg(long, global = true)]
    pub min: Option<usize>,

    /// Largest input size of a sweep (inclusive)
    #[arg(long, global = true)]
    pub max: Option<usize>,

    /// Distance between consecutive sweep sizes
    #[arg(long, global = true)]
    pub step: Option<usize>,

    /// Samples drawn per size
    #[arg(long, short = 'n', global = true)]
    pub samples: Option<usize>,

    /// Calls per timed batch
    #[arg(long, short = 'r', global = true)]
    pub repetitions: Option<u32>,

    /// Reduction over each size's samples: median or mean
    #[arg(long, global = true)]
    pub reduction: Option<Reduction>,

    /// Target mode: found (best case) or absent (worst case)
    #[arg(long, global = true)]
    pub mode: Option<TargetMode>,

    /// RNG seed for reproducible inputs
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Inclusive upper bound of generated values
    #[arg(long, global = true)]
    pub upper_bound: Option<i64>,

    /// Skip the answer check that runs before each timed batch
    #[arg(long, global = true)]
    pub no_verify: bool,

    /// Output format: human, json, csv
    #[arg(long, global = true)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Directory for SVG charts
    #[arg(long, global = true)]
    pub plots_dir: Option<PathBuf>,

    /// Do not write SVG charts
    #[arg(long, global = true)]
    pub no_plots: bool,

    /// Pin the measuring thread to this CPU
    #[arg(long, global = true)]
    pub pin_cpu: Option<usize>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sweep a size range (default)
    Sweep,
    /// Measure an explicit list of sizes
    Compare {
        /// Comma-separated ascending sizes, e.g. 10000,15000,20000
        #[arg(long, value_delimiter = ',')]
        sizes: Vec<usize>,
    },
    /// List the available algorithms
    List,
    /// Write a default searchbench.toml to the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run the SearchBench CLI with the process arguments.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if something goes wrong.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the SearchBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    // Discover searchbench.toml configuration (CLI flags override)
    let config = SearchConfig::discover().unwrap_or_default();

    match cli.command {
        Some(Commands::List) => list_algorithms(&cli),
        Some(Commands::Init { force }) => init_config(force),
        Some(Commands::Compare { ref sizes }) => {
            let settings = RunSettings::for_compare(&cli, &config, sizes);
            run_measurement(&cli, &config, &settings)
        }
        Some(Commands::Sweep) | None => {
            let settings = RunSettings::for_sweep(&cli, &config);
            run_measurement(&cli, &config, &settings)
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "searchbench=debug"
    } else {
        "searchbench=info"
    };
    // An embedding binary may already have installed a subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Standard registry narrowed by the CLI filter and algorithm list
pub fn build_registry(cli: &Cli) -> anyhow::Result<AlgorithmRegistry> {
    let filter = Regex::new(&cli.filter)
        .with_context(|| format!("invalid filter pattern '{}'", cli.filter))?;
    let registry = build_plan(AlgorithmRegistry::standard(), Some(&filter), &cli.algorithms)?;
    Ok(registry)
}

fn list_algorithms(cli: &Cli) -> anyhow::Result<()> {
    println!("SearchBench Algorithms:");

    let registry = build_registry(cli)?;
    for entry in registry.iter() {
        let strategy = entry.strategy();
        println!(
            "├── {} ({}) {}",
            entry.name(),
            strategy.id(),
            strategy.complexity()
        );
    }

    println!("{} algorithms found.", registry.len());
    Ok(())
}

fn init_config(force: bool) -> anyhow::Result<()> {
    let path = Path::new(CONFIG_FILE_NAME);
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        );
    }
    std::fs::write(path, SearchConfig::default_toml())
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Output format from `--format`, falling back to `[output] format`
pub fn output_format(cli: &Cli, config: &SearchConfig) -> anyhow::Result<OutputFormat> {
    cli.format
        .as_deref()
        .unwrap_or(&config.output.format)
        .parse()
        .map_err(anyhow::Error::msg)
}

fn run_measurement(
    cli: &Cli,
    config: &SearchConfig,
    settings: &RunSettings,
) -> anyhow::Result<()> {
    let format = output_format(cli, config)?;
    let registry = build_registry(cli)?;
    if registry.is_empty() {
        println!("No algorithms matched.");
        return Ok(());
    }

    let pinned_cpu = settings.pin_cpu.and_then(|cpu| match pin_to_cpu(cpu) {
        Ok(()) => {
            tracing::info!(cpu, "pinned measuring thread");
            Some(cpu)
        }
        Err(e) => {
            tracing::warn!(cpu, error = %e, "failed to pin measuring thread");
            None
        }
    });

    if format == OutputFormat::Human {
        println!(
            "Running {} algorithms over {} sizes, {} samples x {} calls ({} targets)...\n",
            registry.len(),
            settings.sizes.len(),
            settings.samples,
            settings.repetitions,
            settings.mode
        );
    }

    let mut observer = ProgressObserver::for_format(format, settings.sizes.len());
    let execution = execute(settings, &registry, &mut observer)?;
    observer.finish();

    let meta = build_report_meta(Some(execution.seed), pinned_cpu, execution.duration_ms);
    let report = Report::new(meta, execution.table);

    // Everything below is best effort: the table is already complete
    if let Some(output) = render(&report, format) {
        emit(&output, cli.output.as_deref());
    }

    if config.output.plots && !cli.no_plots {
        let dir = cli
            .plots_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.output.directory));
        match write_charts(&report.table, &dir, &config.chart_options(), report.meta.timestamp) {
            Ok(paths) => {
                for path in &paths {
                    tracing::info!(path = %path.display(), "chart written");
                }
                if format == OutputFormat::Human {
                    println!("Charts written to: {}", dir.display());
                }
            }
            Err(e) => tracing::warn!(dir = %dir.display(), error = %e, "failed to write charts"),
        }
    }

    Ok(())
}

/// Render `report` in `format`; `None` (with a warning) if rendering failed
pub fn render(report: &Report, format: OutputFormat) -> Option<String> {
    match format {
        OutputFormat::Json => match generate_json_report(report) {
            Ok(json) => Some(json),
            Err(e) => {
                tracing::warn!(error = %e, "failed to render JSON report");
                None
            }
        },
        OutputFormat::Csv => Some(generate_csv_report(report)),
        OutputFormat::Human => Some(generate_text_report(report)),
    }
}

fn emit(output: &str, path: Option<&Path>) {
    if let Some(path) = path {
        let written = std::fs::File::create(path).and_then(|mut f| f.write_all(output.as_bytes()));
        match written {
            Ok(()) => {
                println!("Report written to: {}", path.display());
                return;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to write report, printing instead");
            }
        }
    }
    print!("{}", output);
}
