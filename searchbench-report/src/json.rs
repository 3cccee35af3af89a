//! JSON Output

use crate::report::Report;

/// Generate a prettified JSON report.
///
/// Serializes the metadata and the whole sweep table, cell spreads included.
pub fn generate_json_report(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::report::{REPORT_SCHEMA_VERSION, ReportMeta, SystemInfo};

    #[test]
    fn test_json_round_trip_keeps_rows() {
        let report = Report::new(
            ReportMeta {
                schema_version: REPORT_SCHEMA_VERSION,
                version: "0.1.0".to_string(),
                timestamp: chrono::Utc::now(),
                git_commit: None,
                seed: Some(42),
                total_duration_ms: 12.5,
                system: SystemInfo::default(),
            },
            fixtures::table(),
        );

        let json = generate_json_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["meta"]["seed"], 42);
        assert_eq!(value["table"]["rows"].as_array().unwrap().len(), 4);
        assert_eq!(value["table"]["rows"][0]["size"], 1000);
        assert_eq!(value["table"]["columns"][1]["complexity"], "logarithmic");
        assert_eq!(value["table"]["settings"]["reduction"], "median");
    }
}
