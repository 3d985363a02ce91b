//! Rendering of hydrocast forecast runs: text tables, text charts and JSON.
//!
//! The forecast engine hands over a finished [`ForecastRun`]; nothing in this
//! crate feeds back into it.

mod chart;
mod config;
mod error;
mod output;
mod series;
mod table;

use std::fmt::Write;

use hydrocast_forecast::ForecastRun;
use tracing::debug;

pub use chart::{render_bar_chart, render_chart, render_line_chart};
pub use config::{MAX_CHART_WIDTH, OutputFormat, ReportConfig};
pub use error::ReportError;
pub use output::{ReportDocument, to_json};
pub use series::{
    ChartKind, ChartPoint, ChartSeries, flow_bar_series, power_bar_series, power_time_series,
    standard_series,
};
pub use table::{COLUMNS, render_summary, render_table};

/// Render a forecast run in the configured format.
///
/// Text output is the summary block, the record table and, when enabled,
/// the flow bar chart, power bar chart and power trend chart.
///
/// # Errors
///
/// Returns [`ReportError::InvalidConfig`] for an invalid configuration.
/// Returns [`ReportError::Serialization`] if JSON serialization fails.
pub fn render(run: &ForecastRun, config: &ReportConfig) -> Result<String, ReportError> {
    config.validate()?;
    debug!(format = ?config.format(), n_records = run.records().len(), "rendering report");
    match config.format() {
        OutputFormat::Json => to_json(&ReportDocument::new(run)),
        OutputFormat::Table => Ok(render_text(run, config)),
    }
}

fn render_text(run: &ForecastRun, config: &ReportConfig) -> String {
    let decimals = config.decimals();
    let mut out = String::new();
    out.push_str(&render_summary(run, decimals));
    out.push('\n');
    out.push_str(&render_table(run.records(), decimals));
    if config.charts() {
        for series in standard_series(run) {
            let _ = write!(
                out,
                "\n{}",
                render_chart(&series, config.chart_width(), decimals)
            );
        }
    }
    out
}
