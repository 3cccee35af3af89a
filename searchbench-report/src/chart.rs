//! SVG Charts
//!
//! Self-contained SVG documents built from a sweep table:
//!
//! ```text
//!   line chart, linear axes ──┐
//!   line chart, log-log axes ─┼──> <prefix>_<kind>[_<timestamp>].svg
//!   grouped bars, few sizes ──┘
//! ```
//!
//! On log axes, points with a non-positive timing are left out rather than
//! clamped.

use chrono::{DateTime, Utc};
use searchbench_core::{SizeRow, SweepTable};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const PALETTE: [&str; 8] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
];

const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 210.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;

/// Chart color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark text on white
    #[default]
    Light,
    /// Light text on near-black
    Dark,
}

impl Theme {
    fn background(self) -> &'static str {
        match self {
            Theme::Light => "#ffffff",
            Theme::Dark => "#1e1e1e",
        }
    }

    fn foreground(self) -> &'static str {
        match self {
            Theme::Light => "#222222",
            Theme::Dark => "#e0e0e0",
        }
    }

    fn grid(self) -> &'static str {
        match self {
            Theme::Light => "#dddddd",
            Theme::Dark => "#3a3a3a",
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// Axis scaling of a line chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// Both axes linear
    Linear,
    /// Both axes base-10 logarithmic
    Log,
}

/// Chart rendering options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Color scheme
    pub theme: Theme,
    /// Sizes shown in the bar chart; empty picks smallest, middle and largest
    pub bar_sizes: Vec<usize>,
    /// Append a UTC timestamp to file names
    pub timestamped: bool,
    /// File name prefix
    pub prefix: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 960,
            height: 600,
            theme: Theme::Light,
            bar_sizes: Vec::new(),
            timestamped: true,
            prefix: "search_comparison".to_string(),
        }
    }
}

struct Axis {
    min: f64,
    max: f64,
    scale: Scale,
}

impl Axis {
    fn fit(values: impl IntoIterator<Item = f64>, scale: Scale, from_zero: bool) -> Option<Self> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in values {
            if !Self::representable(scale, v) {
                continue;
            }
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if lo > hi {
            return None;
        }
        if from_zero && scale == Scale::Linear {
            lo = lo.min(0.0);
        }
        if lo == hi {
            match scale {
                Scale::Linear => hi = lo + lo.abs().max(1.0),
                Scale::Log => {
                    lo /= 2.0;
                    hi *= 2.0;
                }
            }
        }
        Some(Self {
            min: lo,
            max: hi,
            scale,
        })
    }

    fn representable(scale: Scale, v: f64) -> bool {
        v.is_finite() && (scale == Scale::Linear || v > 0.0)
    }

    fn contains(&self, v: f64) -> bool {
        Self::representable(self.scale, v)
    }

    /// Position of `v` along the axis, 0.0 at `min` and 1.0 at `max`
    fn fraction(&self, v: f64) -> f64 {
        match self.scale {
            Scale::Linear => (v - self.min) / (self.max - self.min),
            Scale::Log => (v.log10() - self.min.log10()) / (self.max.log10() - self.min.log10()),
        }
    }

    fn ticks(&self) -> Vec<f64> {
        match self.scale {
            Scale::Linear => (0..=5)
                .map(|i| self.min + (self.max - self.min) * f64::from(i) / 5.0)
                .collect(),
            Scale::Log => {
                let lo = self.min.log10().floor() as i32;
                let hi = self.max.log10().ceil() as i32;
                let ticks: Vec<f64> = (lo..=hi)
                    .map(|e| 10f64.powi(e))
                    .filter(|t| *t >= self.min && *t <= self.max)
                    .collect();
                if ticks.len() < 2 {
                    vec![self.min, self.max]
                } else {
                    ticks
                }
            }
        }
    }
}

struct Frame {
    width: f64,
    height: f64,
    plot_width: f64,
    plot_height: f64,
}

impl Frame {
    fn new(options: &ChartOptions) -> Self {
        let width = f64::from(options.width);
        let height = f64::from(options.height);
        Self {
            width,
            height,
            plot_width: (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            plot_height: (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
        }
    }

    fn x(&self, axis: &Axis, v: f64) -> f64 {
        MARGIN_LEFT + axis.fraction(v) * self.plot_width
    }

    fn y(&self, axis: &Axis, v: f64) -> f64 {
        MARGIN_TOP + self.plot_height - axis.fraction(v) * self.plot_height
    }

    fn bottom(&self) -> f64 {
        MARGIN_TOP + self.plot_height
    }

    fn right(&self) -> f64 {
        MARGIN_LEFT + self.plot_width
    }
}

/// Line chart of every column against input size
pub fn render_line_chart(table: &SweepTable, scale: Scale, options: &ChartOptions) -> String {
    let title = match scale {
        Scale::Linear => "Search time vs input size",
        Scale::Log => "Search time vs input size (log-log)",
    };
    let frame = Frame::new(options);
    let theme = options.theme;
    let mut svg = open_svg(&frame, theme, title);

    let x_axis = Axis::fit(table.rows.iter().map(|r| r.size as f64), scale, false);
    let y_axis = Axis::fit(table.rows.iter().flat_map(SizeRow::timings), scale, true);

    match (x_axis, y_axis) {
        (Some(x_axis), Some(y_axis)) => {
            draw_y_axis(&mut svg, &frame, &y_axis, theme);
            draw_x_axis(&mut svg, &frame, &x_axis, theme);

            for idx in 0..table.columns.len() {
                let color = PALETTE[idx % PALETTE.len()];
                let points: Vec<(f64, f64)> = table
                    .rows
                    .iter()
                    .filter_map(|r| r.cells.get(idx).map(|c| (r.size as f64, c.value)))
                    .filter(|&(x, y)| x_axis.contains(x) && y_axis.contains(y))
                    .map(|(x, y)| (frame.x(&x_axis, x), frame.y(&y_axis, y)))
                    .collect();

                if points.len() > 1 {
                    let coords: Vec<String> = points
                        .iter()
                        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
                        .collect();
                    svg.push_str(&format!(
                        "<polyline class=\"series\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\" points=\"{}\"/>\n",
                        color,
                        coords.join(" ")
                    ));
                }
                for (x, y) in &points {
                    svg.push_str(&format!(
                        "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"3\" fill=\"{}\"/>\n",
                        x, y, color
                    ));
                }
            }
        }
        _ => draw_no_data(&mut svg, &frame, theme),
    }

    draw_axis_labels(&mut svg, &frame, theme, "Input size (n)");
    draw_legend(&mut svg, &frame, table, theme);
    svg.push_str("</svg>\n");
    svg
}

/// Grouped bar chart: one group per size in `sizes`, one bar per column.
///
/// Sizes that do not appear in the table are ignored.
pub fn render_bar_chart(table: &SweepTable, sizes: &[usize], options: &ChartOptions) -> String {
    let frame = Frame::new(options);
    let theme = options.theme;
    let mut svg = open_svg(&frame, theme, "Search time at selected sizes");

    let rows: Vec<&SizeRow> = sizes
        .iter()
        .filter_map(|s| table.rows.iter().find(|r| r.size == *s))
        .collect();
    let y_axis = Axis::fit(rows.iter().flat_map(|r| r.timings()), Scale::Linear, true);

    match y_axis {
        Some(y_axis) if !table.columns.is_empty() => {
            draw_y_axis(&mut svg, &frame, &y_axis, theme);

            let group_width = frame.plot_width / rows.len() as f64;
            let bar_width = group_width * 0.8 / table.columns.len() as f64;
            for (group, row) in rows.iter().enumerate() {
                let group_start = MARGIN_LEFT + group as f64 * group_width + group_width * 0.1;
                for (idx, cell) in row.cells.iter().enumerate() {
                    let top = frame.y(&y_axis, cell.value.max(0.0));
                    svg.push_str(&format!(
                        "<rect class=\"bar\" x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\"/>\n",
                        group_start + idx as f64 * bar_width,
                        top,
                        bar_width,
                        frame.bottom() - top,
                        PALETTE[idx % PALETTE.len()]
                    ));
                }
                svg.push_str(&format!(
                    "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"12\" fill=\"{}\">{}</text>\n",
                    MARGIN_LEFT + (group as f64 + 0.5) * group_width,
                    frame.bottom() + 18.0,
                    theme.foreground(),
                    row.size
                ));
            }
            svg.push_str(&format!(
                "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{}\"/>\n",
                MARGIN_LEFT,
                frame.bottom(),
                frame.right(),
                frame.bottom(),
                theme.foreground()
            ));
        }
        _ => draw_no_data(&mut svg, &frame, theme),
    }

    draw_axis_labels(&mut svg, &frame, theme, "Input size (n)");
    draw_legend(&mut svg, &frame, table, theme);
    svg.push_str("</svg>\n");
    svg
}

/// Smallest, middle and largest size of the table, without repeats
pub fn default_bar_sizes(table: &SweepTable) -> Vec<usize> {
    let sizes = table.sizes();
    if sizes.is_empty() {
        return Vec::new();
    }
    let mut picked = vec![sizes[0], sizes[sizes.len() / 2], sizes[sizes.len() - 1]];
    picked.dedup();
    picked
}

/// Write the linear, log-log and bar charts into `dir`.
///
/// Creates `dir` if needed. Returns the written paths in that order.
pub fn write_charts(
    table: &SweepTable,
    dir: &Path,
    options: &ChartOptions,
    timestamp: DateTime<Utc>,
) -> std::io::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let suffix = if options.timestamped {
        format!("_{}", timestamp.format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };
    let bar_sizes = if options.bar_sizes.is_empty() {
        default_bar_sizes(table)
    } else {
        options.bar_sizes.clone()
    };

    let charts = [
        ("linear", render_line_chart(table, Scale::Linear, options)),
        ("loglog", render_line_chart(table, Scale::Log, options)),
        ("bars", render_bar_chart(table, &bar_sizes, options)),
    ];

    let mut written = Vec::with_capacity(charts.len());
    for (kind, svg) in charts {
        let path = dir.join(format!("{}_{}{}.svg", options.prefix, kind, suffix));
        std::fs::write(&path, svg)?;
        tracing::debug!(path = %path.display(), "wrote chart");
        written.push(path);
    }
    Ok(written)
}

fn open_svg(frame: &Frame, theme: Theme, title: &str) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">\n",
        w = frame.width,
        h = frame.height
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
        theme.background()
    ));
    svg.push_str(&format!(
        "<text x=\"{:.1}\" y=\"28\" text-anchor=\"middle\" font-size=\"18\" fill=\"{}\">{}</text>\n",
        MARGIN_LEFT + frame.plot_width / 2.0,
        theme.foreground(),
        escape_xml(title)
    ));
    svg
}

fn draw_y_axis(svg: &mut String, frame: &Frame, axis: &Axis, theme: Theme) {
    for tick in axis.ticks() {
        let y = frame.y(axis, tick);
        svg.push_str(&format!(
            "<line x1=\"{:.1}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"{}\"/>\n",
            MARGIN_LEFT,
            frame.right(),
            theme.grid(),
            y = y
        ));
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"12\" fill=\"{}\">{}</text>\n",
            MARGIN_LEFT - 8.0,
            y + 4.0,
            theme.foreground(),
            format_tick(tick)
        ));
    }
    svg.push_str(&format!(
        "<line x1=\"{x:.1}\" y1=\"{:.1}\" x2=\"{x:.1}\" y2=\"{:.1}\" stroke=\"{}\"/>\n",
        MARGIN_TOP,
        frame.bottom(),
        theme.foreground(),
        x = MARGIN_LEFT
    ));
}

fn draw_x_axis(svg: &mut String, frame: &Frame, axis: &Axis, theme: Theme) {
    for tick in axis.ticks() {
        let x = frame.x(axis, tick);
        svg.push_str(&format!(
            "<line x1=\"{x:.1}\" y1=\"{:.1}\" x2=\"{x:.1}\" y2=\"{:.1}\" stroke=\"{}\"/>\n",
            frame.bottom(),
            frame.bottom() + 5.0,
            theme.foreground(),
            x = x
        ));
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"12\" fill=\"{}\">{}</text>\n",
            x,
            frame.bottom() + 18.0,
            theme.foreground(),
            format_tick(tick)
        ));
    }
    svg.push_str(&format!(
        "<line x1=\"{:.1}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"{}\"/>\n",
        MARGIN_LEFT,
        frame.right(),
        theme.foreground(),
        y = frame.bottom()
    ));
}

fn draw_axis_labels(svg: &mut String, frame: &Frame, theme: Theme, x_label: &str) {
    svg.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"13\" fill=\"{}\">{}</text>\n",
        MARGIN_LEFT + frame.plot_width / 2.0,
        frame.height - 15.0,
        theme.foreground(),
        escape_xml(x_label)
    ));
    let y_mid = MARGIN_TOP + frame.plot_height / 2.0;
    svg.push_str(&format!(
        "<text x=\"20\" y=\"{y:.1}\" text-anchor=\"middle\" font-size=\"13\" fill=\"{}\" transform=\"rotate(-90 20 {y:.1})\">Time per search (ns)</text>\n",
        theme.foreground(),
        y = y_mid
    ));
}

fn draw_legend(svg: &mut String, frame: &Frame, table: &SweepTable, theme: Theme) {
    let x = frame.right() + 20.0;
    for (idx, column) in table.columns.iter().enumerate() {
        let y = MARGIN_TOP + 10.0 + idx as f64 * 22.0;
        svg.push_str(&format!(
            "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"14\" height=\"14\" fill=\"{}\"/>\n",
            x,
            y - 11.0,
            PALETTE[idx % PALETTE.len()]
        ));
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"12\" fill=\"{}\">{}</text>\n",
            x + 20.0,
            y,
            theme.foreground(),
            escape_xml(&column.name)
        ));
    }
}

fn draw_no_data(svg: &mut String, frame: &Frame, theme: Theme) {
    svg.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"14\" fill=\"{}\">No data</text>\n",
        MARGIN_LEFT + frame.plot_width / 2.0,
        MARGIN_TOP + frame.plot_height / 2.0,
        theme.foreground()
    ));
}

fn format_tick(v: f64) -> String {
    let magnitude = v.abs();
    if magnitude == 0.0 {
        "0".to_string()
    } else if magnitude >= 1e6 || magnitude < 0.01 {
        format!("{:.0e}", v)
    } else if magnitude >= 100.0 {
        format!("{:.0}", v)
    } else if magnitude >= 1.0 {
        format!("{:.1}", v)
    } else {
        format!("{:.2}", v)
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
