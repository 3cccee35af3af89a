//! CSV Output

use crate::report::Report;

/// Generate a CSV report.
///
/// Header is `size` followed by one column per algorithm; each following line
/// holds one size and its reduced nanosecond timings.
pub fn generate_csv_report(report: &Report) -> String {
    let table = &report.table;
    let mut csv = String::from("size");
    for column in &table.columns {
        csv.push(',');
        csv.push_str(&escape_csv(&column.name));
    }
    csv.push('\n');

    for row in &table.rows {
        csv.push_str(&row.size.to_string());
        for value in row.timings() {
            csv.push_str(&format!(",{:.3}", value));
        }
        csv.push('\n');
    }

    csv
}

fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
