//! Monthly flow and power forecasting.
//!
//! Flow is the baseline discharge scaled by a linear climate response:
//!
//! ```text
//! Q = Q_base * (1 + k_r*R - k_t*T + k_h*H/100)
//! P = rho * g * Q * head / 1000        [kW]
//! ```
//!
//! No bounds are applied. A hot, dry month can drive `Q` (and `P`) to zero
//! or below; screening such input is left to the caller.

use tracing::debug;

use crate::climate::{ClimateTable, MonthlyClimateInput};
use crate::config::ForecastConfig;
use crate::constants::WATTS_PER_KW;
use crate::error::ForecastError;
use crate::profile::RiverProfile;
use crate::result::MonthlyForecastRecord;

/// Computes one month's record. Inputs must already be validated.
pub(crate) fn forecast_month(
    river: &RiverProfile,
    input: &MonthlyClimateInput,
    config: &ForecastConfig,
) -> MonthlyForecastRecord {
    let humidity_frac = input.humidity_pct() / 100.0;
    let flow = river.base_flow()
        * (1.0 + config.rainfall_coeff() * input.rainfall_mm()
            - config.temperature_coeff() * input.temperature_c()
            + config.humidity_coeff() * humidity_frac);
    let power = config.water_density() * config.gravity() * flow * river.head() / WATTS_PER_KW;

    MonthlyForecastRecord::new(
        input.month(),
        input.rainfall_mm(),
        input.temperature_c(),
        input.humidity_pct(),
        flow,
        power,
    )
}

/// Forecasts flow and power for one month with the reference coefficients.
///
/// # Errors
///
/// Returns [`ForecastError::InvalidProfile`] if the river's base flow or head
/// is not a finite positive number.
///
/// # Examples
///
/// ```
/// use hydrocast_calendar::Month;
/// use hydrocast_forecast::{MonthlyClimateInput, RiverProfile, compute_monthly_forecast};
///
/// let river = RiverProfile::new("Citarum", 5.0, 10.0);
/// let input = MonthlyClimateInput::new(Month::January, 200.0, 27.0, 75.0);
/// let record = compute_monthly_forecast(&river, &input).unwrap();
/// assert!((record.forecast_flow() - 4.6575).abs() < 1e-9);
/// ```
pub fn compute_monthly_forecast(
    river: &RiverProfile,
    input: &MonthlyClimateInput,
) -> Result<MonthlyForecastRecord, ForecastError> {
    compute_monthly_forecast_with(river, input, &ForecastConfig::new())
}

/// Forecasts flow and power for one month with custom coefficients.
///
/// # Errors
///
/// Returns [`ForecastError::InvalidConfig`] if `config` fails validation, or
/// [`ForecastError::InvalidProfile`] for an invalid river.
pub fn compute_monthly_forecast_with(
    river: &RiverProfile,
    input: &MonthlyClimateInput,
    config: &ForecastConfig,
) -> Result<MonthlyForecastRecord, ForecastError> {
    config.validate()?;
    river.validate()?;
    Ok(forecast_month(river, input, config))
}

/// Forecasts every month of a climate table, in calendar order.
///
/// An empty table yields an empty vector.
///
/// # Errors
///
/// Returns [`ForecastError::InvalidProfile`] for an invalid river; no records
/// are produced in that case.
pub fn forecast_table(
    river: &RiverProfile,
    table: &ClimateTable,
) -> Result<Vec<MonthlyForecastRecord>, ForecastError> {
    forecast_table_with(river, table, &ForecastConfig::new())
}

/// Like [`forecast_table`], with custom coefficients.
///
/// # Errors
///
/// Returns [`ForecastError::InvalidConfig`] or [`ForecastError::InvalidProfile`].
pub fn forecast_table_with(
    river: &RiverProfile,
    table: &ClimateTable,
    config: &ForecastConfig,
) -> Result<Vec<MonthlyForecastRecord>, ForecastError> {
    config.validate()?;
    river.validate()?;
    let records: Vec<MonthlyForecastRecord> = table
        .iter()
        .map(|input| {
            let rec = forecast_month(river, input, config);
            debug!(
                month = %rec.month(),
                flow = rec.forecast_flow(),
                power = rec.forecast_power(),
                "month forecast"
            );
            rec
        })
        .collect();
    Ok(records)
}

/// Returns the records sorted January to December.
///
/// The sort is stable, so applying it again changes nothing.
pub fn order_by_calendar(records: &[MonthlyForecastRecord]) -> Vec<MonthlyForecastRecord> {
    let mut ordered = records.to_vec();
    ordered.sort_by_key(|r| r.month());
    ordered
}
