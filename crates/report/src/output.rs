//! JSON document for a forecast run.

use hydrocast_forecast::{ForecastRun, ForecastSummary, MonthlyForecastRecord, RiverProfile};
use serde::Serialize;

use crate::error::ReportError;
use crate::series::{ChartSeries, standard_series};

/// Top-level JSON output.
#[derive(Debug, Serialize)]
pub struct ReportDocument<'a> {
    /// River profile the run was computed for.
    pub river: &'a RiverProfile,
    /// Per-month records in calendar order.
    pub records: &'a [MonthlyForecastRecord],
    /// Verdict, average power and extreme months.
    pub summary: &'a ForecastSummary,
    /// Chart series for downstream plotting.
    pub charts: Vec<ChartSeries>,
}

impl<'a> ReportDocument<'a> {
    /// Builds the document for a run.
    pub fn new(run: &'a ForecastRun) -> Self {
        Self {
            river: run.river(),
            records: run.records(),
            summary: run.summary(),
            charts: standard_series(run),
        }
    }
}

/// Serialize a report document to a JSON string.
pub fn to_json(doc: &ReportDocument<'_>) -> Result<String, ReportError> {
    serde_json::to_string_pretty(doc).map_err(|e| ReportError::Serialization {
        reason: e.to_string(),
    })
}
