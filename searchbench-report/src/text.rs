//! Text Output
//!
//! Fixed-width terminal table: one row per size, one column per algorithm,
//! followed by a scaling summary.

use crate::format_duration;
use crate::growth::analyze_growth;
use crate::report::Report;

const MIN_CELL_WIDTH: usize = 12;

/// Render the report for a terminal
pub fn generate_text_report(report: &Report) -> String {
    let table = &report.table;
    let settings = &table.settings;
    let mut output = String::new();

    output.push('\n');
    output.push_str("SearchBench Results\n");
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");

    output.push_str(&format!(
        "{} of {} samples, {} calls per sample, {} targets, values in [0, {}]\n",
        settings.reduction, settings.samples, settings.repetitions, settings.mode, settings.upper_bound
    ));
    output.push_str("Times are nanoseconds per search call\n\n");

    if table.is_empty() {
        output.push_str("No sizes measured\n");
        return output;
    }

    let size_width = table
        .rows
        .iter()
        .map(|r| r.size.to_string().len())
        .max()
        .unwrap_or(0)
        .max("Size".len());
    let widths: Vec<usize> = table
        .columns
        .iter()
        .map(|c| c.name.chars().count().max(MIN_CELL_WIDTH))
        .collect();

    output.push_str(&format!("{:>width$}", "Size", width = size_width));
    for (column, width) in table.columns.iter().zip(&widths) {
        output.push_str(&format!(" | {:>width$}", column.name, width = *width));
    }
    output.push('\n');

    output.push_str(&"-".repeat(size_width));
    for width in &widths {
        output.push_str("-+-");
        output.push_str(&"-".repeat(*width));
    }
    output.push('\n');

    for row in &table.rows {
        output.push_str(&format!("{:>width$}", row.size, width = size_width));
        for (cell, width) in row.cells.iter().zip(&widths) {
            output.push_str(&format!(" | {:>width$.2}", cell.value, width = *width));
        }
        output.push('\n');
    }

    // Noisiest cell, so an unstable measurement is visible next to the table
    let noisiest = table
        .rows
        .iter()
        .flat_map(|row| row.cells.iter().enumerate().map(move |(idx, c)| (row.size, idx, c)))
        .filter(|(_, _, c)| c.samples > 1 && c.value > 0.0)
        .max_by(|a, b| {
            a.2.coefficient_of_variation()
                .total_cmp(&b.2.coefficient_of_variation())
        });
    if let Some((size, idx, cell)) = noisiest {
        output.push_str(&format!(
            "\nHighest spread: {} at n = {} (cv {:.1}%, range {} to {})\n",
            table.columns[idx].name,
            size,
            cell.coefficient_of_variation(),
            format_duration(cell.min),
            format_duration(cell.max)
        ));
    }

    let growth = analyze_growth(table);
    if let Some(first) = growth.first() {
        output.push('\n');
        output.push_str(&format!(
            "Scaling ({} -> {})\n",
            first.from_size, first.to_size
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        let name_width = growth.iter().map(|g| g.name.chars().count()).max().unwrap_or(0);
        for g in &growth {
            let observed = g
                .observed
                .map_or_else(|| "n/a".to_string(), |o| format!("{:.2}x", o));
            let slope = g
                .slope
                .map_or_else(|| "n/a".to_string(), |s| format!("{:.2}", s));
            output.push_str(&format!(
                "  {:<name_width$}  {:<13} observed {:>8}  expected {:>8}  slope {}\n",
                g.name,
                g.complexity.label(),
                observed,
                format!("{:.2}x", g.expected),
                slope,
                name_width = name_width
            ));
        }
    }

    output.push('\n');
    output.push_str(&format!(
        "Completed in {:.2}s",
        report.meta.total_duration_ms / 1000.0
    ));
    if let Some(seed) = report.meta.seed {
        output.push_str(&format!(" (seed {})", seed));
    }
    output.push('\n');

    output
}
