//! Plain-text chart rendering.

use std::fmt::Write;

use crate::config::MAX_CHART_WIDTH;
use crate::series::{ChartKind, ChartSeries};

const BAR: char = '█';
const AXIS: char = '│';
const TRACK: char = '·';
const MARKER: char = '●';

/// Renders a series according to its [`ChartKind`].
pub fn render_chart(series: &ChartSeries, width: usize, decimals: usize) -> String {
    match series.kind {
        ChartKind::Bar => render_bar_chart(series, width, decimals),
        ChartKind::Line => render_line_chart(series, width, decimals),
    }
}

fn label_width(series: &ChartSeries) -> usize {
    series
        .points
        .iter()
        .map(|p| p.label.chars().count())
        .max()
        .unwrap_or(0)
}

fn header(out: &mut String, series: &ChartSeries) {
    let _ = writeln!(out, "{}", series.title);
    let _ = writeln!(out, "{} by {}", series.y_label, series.x_label.to_lowercase());
}

/// Renders a horizontal bar chart.
///
/// Bars scale to `width` characters across the combined negative and positive
/// range. Negative values extend left of the axis. NaN and infinite values
/// are printed without a bar. `width` is clamped to `1..=MAX_CHART_WIDTH`.
pub fn render_bar_chart(series: &ChartSeries, width: usize, decimals: usize) -> String {
    let width = width.clamp(1, MAX_CHART_WIDTH);
    let finite = || series.points.iter().map(|p| p.value).filter(|v| v.is_finite());
    let max_pos = finite().fold(0.0_f64, f64::max);
    let max_neg = finite().map(|v| -v).fold(0.0_f64, f64::max);
    let span = max_pos + max_neg;
    let scale = if span > 0.0 { width as f64 / span } else { 0.0 };
    let left_cols = (max_neg * scale).round() as usize;
    let lw = label_width(series);

    let mut out = String::new();
    header(&mut out, series);
    for p in &series.points {
        let n = if p.value.is_finite() {
            (p.value.abs() * scale).round() as usize
        } else {
            0
        };
        let (neg, pos) = if p.value < 0.0 { (n.min(left_cols), 0) } else { (0, n) };
        let _ = writeln!(
            out,
            "{:<lw$} {}{}{}{} {:.decimals$}",
            p.label,
            " ".repeat(left_cols - neg),
            BAR.to_string().repeat(neg),
            AXIS,
            BAR.to_string().repeat(pos),
            p.value,
        );
    }
    out
}

/// Renders a line chart with time running down the page.
///
/// Each row holds a marker placed between the series minimum (left edge) and
/// maximum (right edge). `width` is clamped like [`render_bar_chart`].
pub fn render_line_chart(series: &ChartSeries, width: usize, decimals: usize) -> String {
    let width = width.clamp(1, MAX_CHART_WIDTH);
    let finite = || series.points.iter().map(|p| p.value).filter(|v| v.is_finite());
    let lo = finite().fold(f64::INFINITY, f64::min);
    let hi = finite().fold(f64::NEG_INFINITY, f64::max);
    let range = hi - lo;
    let lw = label_width(series);

    let mut out = String::new();
    header(&mut out, series);
    for p in &series.points {
        let mut track: Vec<char> = vec![TRACK; width];
        if p.value.is_finite() {
            let pos = if range > 0.0 {
                ((p.value - lo) / range * (width - 1) as f64).round() as usize
            } else {
                (width - 1) / 2
            };
            track[pos.min(width - 1)] = MARKER;
        }
        let track: String = track.into_iter().collect();
        let _ = writeln!(out, "{:<lw$} {} {:.decimals$}", p.label, track, p.value);
    }
    out
}
