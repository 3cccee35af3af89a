//! System Metadata Collection
//!
//! Collects the context a sweep ran in for the report header.
//!
//! ## Collected Data
//!
//! - **Git**: Current commit hash, when run inside a repository
//! - **OS**: Operating system name and architecture
//! - **CPU**: Model name and core count
//! - **Timestamp**: UTC time of report generation
//!
//! The CPU model is read from `/proc/cpuinfo` and reported as "Unknown" on
//! other platforms.

use chrono::Utc;
use searchbench_report::{REPORT_SCHEMA_VERSION, ReportMeta, SystemInfo};

/// Build report metadata including system info and git details
pub fn build_report_meta(
    seed: Option<u64>,
    pinned_cpu: Option<usize>,
    total_duration_ms: f64,
) -> ReportMeta {
    let system = SystemInfo {
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        cpu: get_cpu_model().unwrap_or_else(|| "Unknown".to_string()),
        cpu_cores: num_cpus(),
        pinned_cpu,
    };

    ReportMeta {
        schema_version: REPORT_SCHEMA_VERSION,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        git_commit: get_git_commit(),
        seed,
        total_duration_ms,
        system,
    }
}

fn get_git_commit() -> Option<String> {
    let output = std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let commit = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!commit.is_empty()).then_some(commit)
}

/// Get CPU model name from /proc/cpuinfo (Linux only)
fn get_cpu_model() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        std::fs::read_to_string("/proc/cpuinfo")
            .ok()
            .and_then(|content| {
                content
                    .lines()
                    .find(|l| l.starts_with("model name"))
                    .and_then(|l| l.split(':').nth(1))
                    .map(|s| s.trim().to_string())
            })
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

fn num_cpus() -> u32 {
    std::thread::available_parallelism()
        .map(|n| n.get() as u32)
        .unwrap_or(1)
}
