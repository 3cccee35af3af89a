//! Report Data Structures

use chrono::{DateTime, Utc};
use searchbench_core::SweepTable;
use serde::{Deserialize, Serialize};

/// Version of the JSON layout produced by [`crate::generate_json_report`]
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// A finished sweep and the context it was measured in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub meta: ReportMeta,
    pub table: SweepTable,
}

impl Report {
    /// Take ownership of a finished table
    pub fn new(meta: ReportMeta, table: SweepTable) -> Self {
        Self { meta, table }
    }
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub schema_version: u32,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub git_commit: Option<String>,
    pub seed: Option<u64>,
    pub total_duration_ms: f64,
    pub system: SystemInfo,
}

/// System information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    pub cpu: String,
    pub cpu_cores: u32,
    pub pinned_cpu: Option<usize>,
}
