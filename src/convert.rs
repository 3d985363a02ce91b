//! Pure conversion functions: TOML config structs -> crate API config types.

use std::collections::BTreeMap;

use anyhow::{Context, Result};

use hydrocast_calendar::Month;
use hydrocast_forecast::{ClimateTable, ForecastConfig, MonthlyClimateInput, RiverProfile};
use hydrocast_report::{OutputFormat, ReportConfig};

use crate::config::*;

/// Builds a [`RiverProfile`] from the TOML river section.
///
/// Values are validated by the engine when the forecast runs.
pub fn build_river(river: &RiverToml) -> RiverProfile {
    RiverProfile::new(river.name.clone(), river.base_flow, river.head)
}

/// Converts one month's TOML climate values into an engine input.
pub fn climate_input(month: Month, climate: &ClimateToml) -> MonthlyClimateInput {
    MonthlyClimateInput::new(
        month,
        climate.rainfall_mm,
        climate.temperature_c,
        climate.humidity_pct,
    )
}

/// Builds a [`ClimateTable`] from the `[climate.<month>]` sections.
///
/// Two keys naming the same month (e.g. `jan` and `january`) are rejected.
pub fn build_climate_table(climate: &BTreeMap<String, ClimateToml>) -> Result<ClimateTable> {
    let mut table = ClimateTable::new();
    for (key, values) in climate {
        let month: Month = key
            .parse()
            .with_context(|| format!("invalid [climate] key {key:?}"))?;
        table
            .insert(climate_input(month, values))
            .with_context(|| format!("[climate.{key}] repeats a month"))?;
    }
    Ok(table)
}

/// Parses a list of month labels.
pub fn parse_months(labels: &[String]) -> Result<Vec<Month>> {
    labels
        .iter()
        .map(|l| {
            l.parse::<Month>()
                .with_context(|| format!("invalid --months entry {l:?}"))
        })
        .collect()
}

/// Restricts a run to `months`.
///
/// Each month keeps its values from `file_table` when present, otherwise it
/// gets the default climate values.
pub fn select_months(months: &[Month], file_table: &ClimateTable) -> Result<ClimateTable> {
    let inputs = months.iter().map(|&m| {
        file_table
            .get(m)
            .copied()
            .unwrap_or_else(|| climate_input(m, &ClimateToml::default()))
    });
    ClimateTable::from_inputs(inputs).context("--months repeats a month")
}

/// Builds a validated [`ForecastConfig`] from the TOML coefficients.
pub fn build_forecast_config(c: &CoefficientsToml) -> Result<ForecastConfig> {
    let cfg = ForecastConfig::new()
        .with_rainfall_coeff(c.rainfall)
        .with_temperature_coeff(c.temperature)
        .with_humidity_coeff(c.humidity)
        .with_water_density(c.water_density)
        .with_gravity(c.gravity)
        .with_thresholds(c.highly_feasible_flow, c.feasible_flow);
    cfg.validate().context("invalid [coefficients]")?;
    Ok(cfg)
}

/// Builds a [`ReportConfig`] from the TOML report section.
pub fn build_report_config(r: &ReportToml) -> Result<ReportConfig> {
    let format: OutputFormat = r.format.parse().context("invalid [report].format")?;
    Ok(ReportConfig::default()
        .with_format(format)
        .with_chart_width(r.chart_width)
        .with_charts(r.charts)
        .with_decimals(r.decimals))
}
