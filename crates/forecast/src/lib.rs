//! Monthly hydro-power forecasting for the hydrocast workspace.
//!
//! This crate turns a river profile and a month-keyed table of climate
//! inputs into per-month flow and power forecasts, then classifies the
//! site by its average forecast flow.
//!
//! # Pipeline Order
//!
//! 1. **Validate**: configuration, river profile, non-empty selection
//! 2. **Forecast**: climate-adjusted flow and power for each month
//! 3. **Summarize**: average flow and power, feasibility status, extreme months
//!
//! Every function here is pure: no global state, no I/O, no randomness.
//! Identical inputs give bit-identical outputs.

mod climate;
mod config;
pub mod constants;
mod engine;
mod error;
mod feasibility;
mod profile;
mod result;

pub use climate::{ClimateTable, MonthlyClimateInput};
pub use config::ForecastConfig;
pub use engine::{
    compute_monthly_forecast, compute_monthly_forecast_with, forecast_table, forecast_table_with,
    order_by_calendar,
};
pub use error::ForecastError;
pub use feasibility::{aggregate, aggregate_with, classify, summarize, summarize_with};
pub use profile::RiverProfile;
pub use result::{
    FeasibilityStatus, FeasibilityVerdict, ForecastRun, ForecastSummary, MonthlyForecastRecord,
};

/// Runs a complete forecast with the reference coefficients.
///
/// # Errors
///
/// See [`run_forecast_with`].
pub fn run_forecast(
    river: &RiverProfile,
    table: &ClimateTable,
) -> Result<ForecastRun, ForecastError> {
    run_forecast_with(river, table, &ForecastConfig::new())
}

/// Runs a complete forecast: per-month records plus summary.
///
/// Pipeline order: **validate -> forecast -> summarize**.
///
/// # Arguments
///
/// * `river`: Site description.
/// * `table`: Selected months with their climate inputs.
/// * `config`: Model coefficients and thresholds.
///
/// # Errors
///
/// Returns [`ForecastError::InvalidConfig`] for a bad configuration,
/// [`ForecastError::InvalidProfile`] for a bad river and
/// [`ForecastError::EmptySelection`] when `table` holds no months.
#[tracing::instrument(skip(table, config), fields(river = river.name(), n_months = table.len()))]
pub fn run_forecast_with(
    river: &RiverProfile,
    table: &ClimateTable,
    config: &ForecastConfig,
) -> Result<ForecastRun, ForecastError> {
    config.validate()?;
    river.validate()?;
    if table.is_empty() {
        return Err(ForecastError::EmptySelection);
    }

    let records = forecast_table_with(river, table, config)?;
    let summary = summarize_with(&records, config)?;
    tracing::debug!(
        average_flow = summary.verdict().average_flow(),
        status = ?summary.verdict().status(),
        "forecast complete"
    );

    Ok(ForecastRun::new(river.clone(), records, summary))
}
