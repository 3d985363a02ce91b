use std::collections::BTreeMap;

use serde::Deserialize;

use hydrocast_forecast::constants::{
    FEASIBLE_FLOW, GRAVITY, HIGHLY_FEASIBLE_FLOW, HUMIDITY_COEFF, RAINFALL_COEFF,
    TEMPERATURE_COEFF, WATER_DENSITY,
};

/// Top-level run file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// River site.
    #[serde(default)]
    pub river: RiverToml,

    /// Climate inputs keyed by month label (`january`, `jan`, `1`, `Januari`).
    #[serde(default)]
    pub climate: BTreeMap<String, ClimateToml>,

    /// Model coefficients and feasibility thresholds.
    #[serde(default)]
    pub coefficients: CoefficientsToml,

    /// Report settings.
    #[serde(default)]
    pub report: ReportToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RiverToml {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_base_flow")]
    pub base_flow: f64,
    #[serde(default = "default_head")]
    pub head: f64,
}

impl Default for RiverToml {
    fn default() -> Self {
        Self {
            name: String::new(),
            base_flow: default_base_flow(),
            head: default_head(),
        }
    }
}

fn default_base_flow() -> f64 {
    5.0
}
fn default_head() -> f64 {
    10.0
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClimateToml {
    #[serde(default = "default_rainfall_mm")]
    pub rainfall_mm: f64,
    #[serde(default = "default_temperature_c")]
    pub temperature_c: f64,
    #[serde(default = "default_humidity_pct")]
    pub humidity_pct: f64,
}

impl Default for ClimateToml {
    fn default() -> Self {
        Self {
            rainfall_mm: default_rainfall_mm(),
            temperature_c: default_temperature_c(),
            humidity_pct: default_humidity_pct(),
        }
    }
}

fn default_rainfall_mm() -> f64 {
    200.0
}
fn default_temperature_c() -> f64 {
    27.0
}
fn default_humidity_pct() -> f64 {
    75.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoefficientsToml {
    #[serde(default = "default_rainfall")]
    pub rainfall: f64,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_humidity")]
    pub humidity: f64,
    #[serde(default = "default_water_density")]
    pub water_density: f64,
    #[serde(default = "default_gravity")]
    pub gravity: f64,
    #[serde(default = "default_highly_feasible_flow")]
    pub highly_feasible_flow: f64,
    #[serde(default = "default_feasible_flow")]
    pub feasible_flow: f64,
}

impl Default for CoefficientsToml {
    fn default() -> Self {
        Self {
            rainfall: default_rainfall(),
            temperature: default_temperature(),
            humidity: default_humidity(),
            water_density: default_water_density(),
            gravity: default_gravity(),
            highly_feasible_flow: default_highly_feasible_flow(),
            feasible_flow: default_feasible_flow(),
        }
    }
}

fn default_rainfall() -> f64 {
    RAINFALL_COEFF
}
fn default_temperature() -> f64 {
    TEMPERATURE_COEFF
}
fn default_humidity() -> f64 {
    HUMIDITY_COEFF
}
fn default_water_density() -> f64 {
    WATER_DENSITY
}
fn default_gravity() -> f64 {
    GRAVITY
}
fn default_highly_feasible_flow() -> f64 {
    HIGHLY_FEASIBLE_FLOW
}
fn default_feasible_flow() -> f64 {
    FEASIBLE_FLOW
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportToml {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
    #[serde(default = "default_true")]
    pub charts: bool,
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

impl Default for ReportToml {
    fn default() -> Self {
        Self {
            format: default_format(),
            chart_width: default_chart_width(),
            charts: true,
            decimals: default_decimals(),
        }
    }
}

fn default_format() -> String {
    "table".to_string()
}
fn default_chart_width() -> usize {
    40
}
fn default_true() -> bool {
    true
}
fn default_decimals() -> usize {
    2
}
