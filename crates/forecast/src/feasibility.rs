//! Aggregation of monthly records into a feasibility verdict and summary.

use hydrocast_stats::{argmax, argmin, mean};

use crate::config::ForecastConfig;
use crate::error::ForecastError;
use crate::result::{FeasibilityStatus, FeasibilityVerdict, ForecastSummary, MonthlyForecastRecord};

/// Classifies an average flow against the configured thresholds.
///
/// Thresholds are inclusive and checked from the top down. NaN falls through
/// to [`FeasibilityStatus::LowFeasible`].
pub fn classify(average_flow: f64, config: &ForecastConfig) -> FeasibilityStatus {
    if average_flow >= config.highly_feasible_flow() {
        FeasibilityStatus::HighlyFeasible
    } else if average_flow >= config.feasible_flow() {
        FeasibilityStatus::Feasible
    } else {
        FeasibilityStatus::LowFeasible
    }
}

/// Computes the average forecast flow and its feasibility status.
///
/// The result does not depend on record order.
///
/// # Errors
///
/// Returns [`ForecastError::EmptySelection`] if `records` is empty.
pub fn aggregate(records: &[MonthlyForecastRecord]) -> Result<FeasibilityVerdict, ForecastError> {
    aggregate_with(records, &ForecastConfig::new())
}

/// Like [`aggregate`], with custom thresholds.
///
/// # Errors
///
/// Returns [`ForecastError::InvalidConfig`] or [`ForecastError::EmptySelection`].
pub fn aggregate_with(
    records: &[MonthlyForecastRecord],
    config: &ForecastConfig,
) -> Result<FeasibilityVerdict, ForecastError> {
    config.validate()?;
    let flows: Vec<f64> = records.iter().map(|r| r.forecast_flow()).collect();
    let average_flow = sorted_mean(flows).ok_or(ForecastError::EmptySelection)?;
    Ok(FeasibilityVerdict::new(
        average_flow,
        classify(average_flow, config),
    ))
}

/// Builds the run summary: verdict, average power and extreme months.
///
/// # Errors
///
/// Returns [`ForecastError::EmptySelection`] if `records` is empty.
pub fn summarize(records: &[MonthlyForecastRecord]) -> Result<ForecastSummary, ForecastError> {
    summarize_with(records, &ForecastConfig::new())
}

/// Like [`summarize`], with custom thresholds.
///
/// # Errors
///
/// Returns [`ForecastError::InvalidConfig`] or [`ForecastError::EmptySelection`].
pub fn summarize_with(
    records: &[MonthlyForecastRecord],
    config: &ForecastConfig,
) -> Result<ForecastSummary, ForecastError> {
    let verdict = aggregate_with(records, config)?;
    let powers: Vec<f64> = records.iter().map(|r| r.forecast_power()).collect();
    let average_power = sorted_mean(powers.clone()).ok_or(ForecastError::EmptySelection)?;
    let peak = argmax(&powers).map(|i| records[i].month());
    let lowest = argmin(&powers).map(|i| records[i].month());
    Ok(ForecastSummary::new(verdict, average_power, peak, lowest))
}

// Sums in ascending order so the mean is identical for any record order.
fn sorted_mean(mut values: Vec<f64>) -> Option<f64> {
    values.sort_by(f64::total_cmp);
    mean(&values)
}
